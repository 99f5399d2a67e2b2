pub mod fetcher;
pub mod normalize;
pub mod parser;
pub mod types;

use fetcher::FetchError;
use parser::FeedParseError;

/// The live feed could not be acquired or read. Always resolved by the
/// fallback collection.
#[derive(Debug, thiserror::Error)]
pub enum FeedUnavailable {
    #[error("feed fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("feed parse failed: {0}")]
    Parse(#[from] FeedParseError),
}
