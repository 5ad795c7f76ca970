//! Connection bootstrap failures.

use secrecy::SecretString;

use mn_roasters_site::db::{self, DatabaseOptions};
use mn_roasters_site::RepositoryError;

#[tokio::test]
async fn test_connect_with_malformed_uri_fails() {
    let options = DatabaseOptions::new(SecretString::from("::not a uri::"));
    let result = db::connect(&options).await;
    assert!(matches!(result, Err(RepositoryError::Connection(_))));
}

#[tokio::test]
async fn test_connect_with_echo_still_validates_uri() {
    let options = DatabaseOptions::new(SecretString::from("")).echo(true);
    let result = db::connect(&options).await;
    assert!(matches!(result, Err(RepositoryError::Connection(_))));
}

#[tokio::test]
async fn test_connect_to_closed_port_reports_driver_error() {
    // Nothing listens on port 1; the refusal must surface, not a pool timeout.
    let options = DatabaseOptions::new(SecretString::from("postgres://u@127.0.0.1:1/x"));
    let started = std::time::Instant::now();
    let result = db::connect(&options).await;

    match result {
        Err(RepositoryError::Connection(err)) => {
            assert!(!matches!(err, sqlx::Error::PoolTimedOut), "got {err:?}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(started.elapsed() < std::time::Duration::from_secs(5));
}
