//! student-records - persistence layer for student records
//!
//! This library stores students in a relational database through SeaORM and
//! exposes the queries a CRUD application needs on top of them: listing with
//! soft-delete filtering, paginated last-name search, next-SID lookup,
//! duplicate detection by dni or email, and soft deletion.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - SeaORM entity for the `students` table
//! * [`repositories`] - Query helpers over the student entity
//! * [`enrollment`] - Insert path with duplicate detection and SID assignment
//! * [`storage`] - Database connection and schema setup
//! * [`validation`] - Field rules checked before every write

/// Configuration module for managing application settings
pub mod config;

/// Column limits, defaults and messages
pub mod constants;

/// Enrollment of new students
pub mod enrollment;

/// SeaORM entity models for database tables
pub mod entities;

/// Error types returned by repository operations
pub mod error;

/// Logging setup on top of the `log` facade
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Database connection management
pub mod storage;

/// Validation of student fields
pub mod validation;

pub use entities::student;
pub use error::{Result, StudentError};
