//! Repository layer for database operations.
//!
//! Repositories encapsulate queries against SeaORM entities, following the
//! Data Mapper pattern: entities stay plain data models while the repository
//! provides reusable, connection-agnostic access methods. Every method is
//! generic over [`sea_orm::ConnectionTrait`], so callers can pass either a
//! `DatabaseConnection` or an open transaction.

pub mod student;

pub use student::{Page, PageRequest, StudentRepository};
