use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::core::feed::types::DisplayNewsItem;

pub fn render_loading() -> String {
    concat!(
        "<div class=\"news-loading\">\n",
        "    <div class=\"loading-spinner\"></div>\n",
        "    <p>Loading latest health news...</p>\n",
        "</div>\n"
    )
    .to_string()
}

pub fn render_cards(items: &[DisplayNewsItem]) -> String {
    items.iter().map(render_card).collect()
}

/// One `<article class="news-card">` with a date block and a content block.
/// Absolute links open in a new tab without opener or referrer.
pub fn render_card(item: &DisplayNewsItem) -> String {
    let link_target = if item.is_external() {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };

    let mut buf = String::new();
    buf.push_str("<article class=\"news-card\">\n");
    buf.push_str("    <div class=\"news-date\">\n");
    buf.push_str(&format!(
        "        <span class=\"date-month\">{}</span>\n",
        encode_text(&item.published_on.month)
    ));
    buf.push_str(&format!(
        "        <span class=\"date-day\">{}</span>\n",
        encode_text(&item.published_on.day)
    ));
    buf.push_str(&format!(
        "        <span class=\"date-year\">{}</span>\n",
        item.published_on.year
    ));
    buf.push_str("    </div>\n");
    buf.push_str("    <div class=\"news-content\">\n");
    buf.push_str(&format!("        <h3>{}</h3>\n", encode_text(&item.title)));
    buf.push_str(&format!("        <p>{}</p>\n", encode_text(&item.summary)));
    buf.push_str(&format!(
        "        <a href=\"{}\" class=\"news-link\"{link_target}>\n",
        encode_double_quoted_attribute(&item.link)
    ));
    buf.push_str("            Read More <i class=\"fas fa-arrow-right\"></i>\n");
    buf.push_str("        </a>\n");
    buf.push_str("    </div>\n");
    buf.push_str("</article>\n");
    buf
}
