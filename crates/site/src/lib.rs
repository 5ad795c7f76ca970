//! MN Roasters site data layer.
//!
//! Entities, repositories, form payloads and seed data for the coffee
//! roaster review site. The HTTP layer lives elsewhere and uses this crate
//! through a shared [`sqlx::PgPool`] created by [`db::connect`].
//!
//! # Modules
//!
//! - [`config`] - Environment configuration
//! - [`db`] - Connection bootstrap, migrations, repositories and the seed reset
//! - [`forms`] - Login and signup payloads
//! - [`models`] - Row and insert types for users, roasters, lists and entries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod forms;
pub mod models;

pub use db::{DatabaseOptions, RepositoryError};
