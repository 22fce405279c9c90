//! Database connection and schema setup
//!
//! [`LocalStorage`] owns the SeaORM connection used by the repositories and
//! creates the `students` table on first use.

pub mod db;

pub use db::LocalStorage;
