//! Shared ingestion pipeline primitives.
//!
//! This crate owns the queue envelope contract and request-body validation.
//! It intentionally excludes AWS SDK and Lambda runtime concerns.

pub mod contract;
