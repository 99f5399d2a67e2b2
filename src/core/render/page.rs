use std::collections::BTreeMap;

use html_escape::encode_double_quoted_attribute;

use super::RenderError;

/// In-memory stand-in for the host page: a set of named containers whose
/// contents are replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlPage {
    containers: BTreeMap<String, String>,
}

impl HtmlPage {
    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            containers: ids
                .into_iter()
                .map(|id| (id.into(), String::new()))
                .collect(),
        }
    }

    pub fn container(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }

    pub fn replace_contents(&mut self, id: &str, markup: String) -> Result<(), RenderError> {
        let slot = self
            .containers
            .get_mut(id)
            .ok_or_else(|| RenderError::TargetMissing {
                container_id: id.to_string(),
            })?;
        *slot = markup;
        Ok(())
    }

    /// Serializes every container as a `<div>` carrying its id as both `id`
    /// and `class`.
    pub fn to_html(&self) -> String {
        let mut buf = String::new();
        for (id, contents) in &self.containers {
            let id = encode_double_quoted_attribute(id);
            buf.push_str(&format!("<div id=\"{id}\" class=\"{id}\">\n"));
            buf.push_str(contents);
            buf.push_str("</div>\n");
        }
        buf
    }
}
