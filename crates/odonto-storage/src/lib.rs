//! odonto-storage
//!
//! Chart persistence on S3. Thin wrapper around the AWS S3 SDK with ETag
//! optimistic locking.

pub mod chart;
pub mod error;
pub mod objects;
pub mod state;
