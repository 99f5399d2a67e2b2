pub mod core;

pub use crate::core::config::PipelineConfig;
pub use crate::core::feed::fetcher::FetchError;
pub use crate::core::feed::types::{fallback_news, DisplayNewsItem, PublishedOn, RawFeedItem};
pub use crate::core::feed::FeedUnavailable;
pub use crate::core::pipeline::FeedPipeline;
pub use crate::core::render::{
    HtmlCardRenderer, HtmlPage, NewsRenderer, RenderError, RevealOnScroll,
};

use tracing::info;

/// Loads the configured feed once into a page holding the news container and
/// returns the page markup.
pub async fn run() -> Result<String, FetchError> {
    let config = PipelineConfig::from_env();
    let page = HtmlPage::with_containers([config.container_id.clone()]);
    let renderer = HtmlCardRenderer::new(page, config.container_id.clone());
    let mut pipeline = FeedPipeline::new(config, renderer)?.with_reveal(
        |container_id: &str, card_count: usize| {
            info!(container_id, card_count, "news cards ready for reveal");
        },
    );

    pipeline.load().await;
    Ok(pipeline.renderer().page().to_html())
}
