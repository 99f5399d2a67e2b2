use chrono::Local;
use tracing::{error, info};

use super::config::PipelineConfig;
use super::feed::fetcher::{fetch_via_relay, FetchError};
use super::feed::normalize::normalize_item;
use super::feed::parser::parse_feed_items;
use super::feed::types::{fallback_news, DisplayNewsItem, NEWS_ITEM_LIMIT};
use super::feed::FeedUnavailable;
use super::render::{NewsRenderer, RevealOnScroll};

/// Fetches the configured feed through the relay, turns the first items into
/// news cards and renders them, substituting the fallback collection on any
/// failure. Keeps the last rendered collection for inspection.
pub struct FeedPipeline<R> {
    client: reqwest::Client,
    config: PipelineConfig,
    renderer: R,
    reveal: Option<Box<dyn RevealOnScroll>>,
    last_loaded: Vec<DisplayNewsItem>,
}

impl<R: NewsRenderer> FeedPipeline<R> {
    pub fn new(config: PipelineConfig, renderer: R) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, config, renderer))
    }

    pub fn with_client(client: reqwest::Client, config: PipelineConfig, renderer: R) -> Self {
        Self {
            client,
            config,
            renderer,
            reveal: None,
            last_loaded: Vec::new(),
        }
    }

    /// Registers the entrance-animation hook run after each successful render.
    pub fn with_reveal(mut self, reveal: impl RevealOnScroll + 'static) -> Self {
        self.reveal = Some(Box::new(reveal));
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn last_loaded(&self) -> &[DisplayNewsItem] {
        &self.last_loaded
    }

    /// Fetch, parse and normalize without rendering or falling back.
    pub async fn fetch_news(&self) -> Result<Vec<DisplayNewsItem>, FeedUnavailable> {
        let document =
            fetch_via_relay(&self.client, &self.config.relay_url, &self.config.feed_url).await?;
        let raw_items = parse_feed_items(&document)?;
        let today = Local::now().date_naive();
        Ok(raw_items
            .iter()
            .take(NEWS_ITEM_LIMIT)
            .map(|raw| normalize_item(raw, today))
            .collect())
    }

    pub async fn load(&mut self) -> Vec<DisplayNewsItem> {
        info!(feed_url = %self.config.feed_url, "fetching news feed");
        if let Err(error) = self.renderer.show_loading() {
            error!(%error, "cannot show news loading state");
        }

        let items = match self.fetch_news().await {
            Ok(items) => {
                info!(count = items.len(), "news feed loaded");
                items
            }
            Err(error) => {
                error!(%error, "news feed unavailable, using fallback news");
                fallback_news()
            }
        };

        self.publish(&items);
        self.last_loaded = items.clone();
        items
    }

    pub async fn refresh(&mut self) -> Vec<DisplayNewsItem> {
        self.load().await
    }

    fn publish(&mut self, items: &[DisplayNewsItem]) {
        if let Err(error) = self.renderer.render(items) {
            error!(%error, "news cards not rendered");
            return;
        }
        if let Some(reveal) = &self.reveal {
            reveal.observe_cards(&self.config.container_id, items.len());
        }
    }
}
