//! odonto-core
//!
//! Pure domain types for the tooth chart, the closed vocabularies the voice
//! pipeline validates against, the command validator and the chart reducer.
//! No network or storage dependency; this is the shared vocabulary of the
//! Odonto system.

pub mod error;
pub mod models;
pub mod reconcile;
pub mod storage_keys;
pub mod validate;
pub mod vocabulary;
