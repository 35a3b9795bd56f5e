//! AWS-oriented adapters and Lambda handlers for the ingestion pipeline.
//!
//! This crate owns runtime integration details (Lambda handlers, queue
//! dispatch, and acknowledgment adapters); `ingest_core` owns the envelope
//! contract shared by both handlers.

pub mod adapters;
pub mod handlers;
