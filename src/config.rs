use serde::{Deserialize, Serialize};

pub const SEARCH_URL: &str = "https://api.deezer.com/search";
pub const ARTIST_SEARCH_URL: &str = "https://api.deezer.com/search/artist";
pub const REQUEST_TIMEOUT_SECONDS: u64 = 10;

pub const DEFAULT_DESIRED_COUNT: usize = 5;
pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const DEFAULT_MAX_PAGES: usize = 5;

/// Engine configuration, built once at startup and passed by reference
/// into the components that need it. Nothing reads ambient state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    pub search_url: String,
    pub artist_search_url: String,
    pub request_timeout_seconds: u64,
    pub default_desired_count: usize,
    pub default_page_size: usize,
    pub default_max_pages: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_url: SEARCH_URL.to_string(),
            artist_search_url: ARTIST_SEARCH_URL.to_string(),
            request_timeout_seconds: REQUEST_TIMEOUT_SECONDS,
            default_desired_count: DEFAULT_DESIRED_COUNT,
            default_page_size: DEFAULT_PAGE_SIZE,
            default_max_pages: DEFAULT_MAX_PAGES,
        }
    }
}
