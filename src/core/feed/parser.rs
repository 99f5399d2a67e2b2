use roxmltree::{Document, Node, ParsingOptions};

use super::types::RawFeedItem;

#[derive(Debug, thiserror::Error)]
pub enum FeedParseError {
    #[error("feed payload is empty")]
    EmptyPayload,
    #[error("xml feed parse error: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// Parses a syndication document and returns every `<item>` in document
/// order. Only the first-level `title`, `description`, `pubDate` and `link`
/// children are read.
pub fn parse_feed_items(raw: &str) -> Result<Vec<RawFeedItem>, FeedParseError> {
    let trimmed = raw.trim_start();
    if trimmed.is_empty() {
        return Err(FeedParseError::EmptyPayload);
    }

    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(trimmed, options)?;
    let items = doc
        .descendants()
        .filter(|node| node.has_tag_name("item"))
        .map(item_from_node)
        .collect();
    Ok(items)
}

fn item_from_node(item: Node<'_, '_>) -> RawFeedItem {
    RawFeedItem {
        title: child_text(item, "title"),
        description: child_text(item, "description"),
        pub_date: child_text(item, "pubDate"),
        link: child_text(item, "link"),
    }
}

fn child_text(item: Node<'_, '_>, name: &str) -> Option<String> {
    let child = item
        .children()
        .find(|node| node.is_element() && node.has_tag_name(name))?;
    let text: String = child
        .descendants()
        .filter(Node::is_text)
        .filter_map(|node| node.text())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
