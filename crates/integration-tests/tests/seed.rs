//! The destructive reset and its sample data.

#![allow(clippy::unwrap_used)]

use sqlx::PgPool;

use mn_roasters_integration_tests::{create_roaster, create_user};
use mn_roasters_site::RepositoryError;
use mn_roasters_site::db::{
    self, EntryRepository, ListRepository, RoasterRepository, UserRepository,
};

async fn assert_seeded_state(pool: &PgPool) {
    let roasters = RoasterRepository::new(pool).list_all().await.unwrap();
    assert_eq!(roasters.len(), 1);
    let roaster = roasters.first().unwrap();
    assert_eq!(roaster.name, "City Girl Coffee Test");

    let users = UserRepository::new(pool).list_all().await.unwrap();
    assert_eq!(users.len(), 1);
    let user = users.first().unwrap();
    assert_eq!(user.email, "admin@admin.com");

    let lists = ListRepository::new(pool)
        .list_by_user(user.user_id)
        .await
        .unwrap();
    let names: Vec<_> = lists.iter().map(|l| l.list_name.as_str()).collect();
    assert_eq!(names, ["My Favorites", "My Roasters"]);
    assert_eq!(ListRepository::new(pool).count().await.unwrap(), 2);

    let entries_repo = EntryRepository::new(pool);
    assert_eq!(entries_repo.count().await.unwrap(), 1);
    let favorites = lists.first().unwrap();
    let entries = entries_repo.list_by_list(favorites.list_id).await.unwrap();
    assert_eq!(entries.len(), 1);
    let entry = entries.first().unwrap();
    assert_eq!(entry.score, Some(5.0));
    assert_eq!(entry.roaster_id, roaster.roaster_id);
}

#[sqlx::test(migrator = "mn_roasters_site::db::MIGRATOR")]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_seed_on_empty_database(pool: PgPool) {
    let report = db::reset_and_seed(&pool).await.unwrap();
    assert_eq!(report.list_ids.len(), 2);
    assert_eq!(report.deleted, db::seed::DeletedRows::default());

    assert_seeded_state(&pool).await;
}

#[sqlx::test(migrator = "mn_roasters_site::db::MIGRATOR")]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_seed_clears_existing_rows(pool: PgPool) {
    create_user(&pool, "someone@example.com").await.unwrap();
    create_roaster(&pool, "Dogwood").await.unwrap();
    db::reset_and_seed(&pool).await.unwrap();

    // Second run must delete the seeded entry and lists before their parents
    let report = db::reset_and_seed(&pool).await.unwrap();
    assert_eq!(report.deleted.entries, 1);
    assert_eq!(report.deleted.lists, 2);
    assert_eq!(report.deleted.roasters, 1);
    assert_eq!(report.deleted.users, 1);

    assert_seeded_state(&pool).await;
}

#[sqlx::test(migrator = "mn_roasters_site::db::MIGRATOR")]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_seeded_entry_detail(pool: PgPool) {
    let report = db::reset_and_seed(&pool).await.unwrap();

    let detail = EntryRepository::new(&pool)
        .get_detail(report.entry_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.roaster_name, "City Girl Coffee Test");
    assert_eq!(detail.list_name, "My Favorites");
    assert_eq!(detail.author_id, report.user_id);
    assert_eq!(detail.note.as_deref(), Some("lovely"));
}

#[sqlx::test(migrator = "mn_roasters_site::db::MIGRATOR")]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_failed_seed_rolls_back(pool: PgPool) {
    db::reset_and_seed(&pool).await.unwrap();

    sqlx::query(
        r"
        CREATE FUNCTION reject_entry() RETURNS trigger AS $$
        BEGIN
            RAISE EXCEPTION 'entries are read-only';
        END;
        $$ LANGUAGE plpgsql
        ",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        r"
        CREATE TRIGGER reject_entry_insert
        BEFORE INSERT ON entries
        FOR EACH ROW EXECUTE FUNCTION reject_entry()
        ",
    )
    .execute(&pool)
    .await
    .unwrap();

    // The entry insert is the last step, after every delete and the other inserts
    let result = db::reset_and_seed(&pool).await;
    assert!(matches!(result, Err(RepositoryError::Database(_))));

    assert_eq!(UserRepository::new(&pool).count().await.unwrap(), 1);
    assert_eq!(RoasterRepository::new(&pool).count().await.unwrap(), 1);
    assert_eq!(ListRepository::new(&pool).count().await.unwrap(), 2);
    assert_eq!(EntryRepository::new(&pool).count().await.unwrap(), 1);
}
