//! Core types shared across the roster crates
//!
//! This crate provides foundational types used by both the error facility
//! and the logging facility:
//!
//! - **Personal data**: `Sensitive<T>` marker for automatic redaction
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
