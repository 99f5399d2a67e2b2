pub mod markup;
pub mod page;

pub use markup::{render_card, render_cards, render_loading};
pub use page::HtmlPage;

use crate::core::feed::types::DisplayNewsItem;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("render target missing: no container with id {container_id:?}")]
    TargetMissing { container_id: String },
}

/// Display side of the pipeline. Implementations replace the whole content
/// of their container on every call.
pub trait NewsRenderer {
    fn show_loading(&mut self) -> Result<(), RenderError>;

    fn render(&mut self, items: &[DisplayNewsItem]) -> Result<(), RenderError>;
}

/// Entrance-animation hook notified after cards are inserted.
pub trait RevealOnScroll: Send + Sync {
    fn observe_cards(&self, container_id: &str, card_count: usize);
}

impl<F> RevealOnScroll for F
where
    F: Fn(&str, usize) + Send + Sync,
{
    fn observe_cards(&self, container_id: &str, card_count: usize) {
        self(container_id, card_count)
    }
}

/// Renders news cards as HTML into one container of an [`HtmlPage`].
#[derive(Debug, Clone)]
pub struct HtmlCardRenderer {
    page: HtmlPage,
    container_id: String,
}

impl HtmlCardRenderer {
    pub fn new(page: HtmlPage, container_id: impl Into<String>) -> Self {
        Self {
            page,
            container_id: container_id.into(),
        }
    }

    pub fn page(&self) -> &HtmlPage {
        &self.page
    }

    /// Current markup of the target container, if the page has it.
    pub fn contents(&self) -> Option<&str> {
        self.page.container(&self.container_id)
    }
}

impl NewsRenderer for HtmlCardRenderer {
    fn show_loading(&mut self) -> Result<(), RenderError> {
        self.page.replace_contents(&self.container_id, render_loading())
    }

    fn render(&mut self, items: &[DisplayNewsItem]) -> Result<(), RenderError> {
        self.page
            .replace_contents(&self.container_id, render_cards(items))
    }
}
