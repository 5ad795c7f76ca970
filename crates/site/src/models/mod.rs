//! Domain models for the review site.
//!
//! Each table has a row type (what a repository returns) and a `New*` type
//! (what a repository inserts). Identifiers are assigned by the database.

pub mod entry;
pub mod list;
pub mod roaster;
pub mod user;

pub use entry::{Entry, EntryDetail, NewEntry};
pub use list::{List, NewList};
pub use roaster::{NewRoaster, Roaster};
pub use user::{NewUser, User};
