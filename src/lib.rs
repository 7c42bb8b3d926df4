//! tunescout: music recommendation engine over the Deezer search API.
//!
//! Selects up to N unique tracks per request by intent (artist, genre,
//! mood, track title), never repeats a track within a session, and
//! resumes exactly where it left off when asked for "more".

pub mod catalog;
pub mod config;
pub mod deezer;
pub mod format;
pub mod models;
pub mod search;
pub mod session;

pub use catalog::{CatalogError, MusicCatalog};
pub use config::EngineConfig;
pub use deezer::DeezerClient;
pub use format::format_tracks;
pub use models::Track;
pub use search::{SearchBatch, SearchContext, SearchEngine, SearchError, SearchKind, SearchOptions};
pub use session::{ContinuationState, JsonFileSessionStore, MemorySessionStore, SessionStore};
