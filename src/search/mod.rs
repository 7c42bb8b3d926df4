//! Result-selection and continuation engine.
//!
//! Turns the upstream's paginated, duplicate-prone search stream into a
//! stable, deduplicated, resumable sequence of up to N unique tracks per
//! request, tagged with enough context to replay "give me more".

pub mod dedup;
pub mod driver;
pub mod engine;
pub mod errors;
pub mod moods;
pub mod types;

pub use engine::SearchEngine;
pub use errors::SearchError;
pub use types::{SearchBatch, SearchContext, SearchKind, SearchOptions};
