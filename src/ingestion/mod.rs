//! Dataset ingestion.
//!
//! Most callers should use [`ingest_from_path`] (from [`loader`]) which:
//!
//! - reads the athlete-events CSV into an in-memory [`crate::dataset::Dataset`]
//! - rejects files that violate the expected schema
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! The CSV reader itself lives in [`csv`].

pub mod csv;
pub mod loader;
pub mod observability;

pub use loader::{ingest_from_path, IngestionOptions, IngestionRequest};
pub use observability::{
    CompositeObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    LogObserver,
};
