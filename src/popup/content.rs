use serde_json::{Map, Value};

use super::labels::LabelCatalog;
use super::sanitize::clean;

/// Title used when a well has neither a name nor an API number.
pub const UNNAMED_TITLE: &str = "Unnamed";

#[derive(Debug, Clone, PartialEq)]
pub struct PopupRow {
    pub label: String,
    pub value: String,
}

/// Display content of one well popup. Every row value is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub rows: Vec<PopupRow>,
}

impl PopupContent {
    /// Render as an HTML fragment. Title, labels and values are all escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div>");
        html.push_str(&format!("<h3>{}</h3>", escape_html(&self.title)));
        html.push_str("<table>");
        for row in &self.rows {
            html.push_str(&format!(
                "<tr><th style=\"text-align:left;padding:2px 8px;\">{}</th>\
                 <td style=\"padding:2px 8px;\">{}</td></tr>",
                escape_html(&row.label),
                escape_html(&row.value)
            ));
        }
        html.push_str("</table></div>");
        html
    }
}

/// Composes popup content for single features using a label catalog.
pub struct PopupBuilder<'a> {
    catalog: &'a LabelCatalog,
}

impl<'a> PopupBuilder<'a> {
    pub fn new(catalog: &'a LabelCatalog) -> Self {
        Self { catalog }
    }

    /// Build the popup for one feature's properties.
    ///
    /// Labeled rows come first, in catalog order. Properties unknown to the catalog follow in their own
    /// order, labeled with the raw key. Rows whose cleaned value is empty are left out.
    pub fn build(&self, properties: &Map<String, Value>) -> PopupContent {
        let title = [
            clean(properties.get("well_name_number")),
            clean(properties.get("api_number")),
        ]
        .into_iter()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or_else(|| UNNAMED_TITLE.to_string());

        let mut rows = Vec::new();
        for key in self.catalog.ordered_keys() {
            let value = clean(properties.get(key));
            if value.is_empty() {
                continue;
            }
            if let Some(label) = self.catalog.label_of(key) {
                rows.push(PopupRow {
                    label: label.to_string(),
                    value,
                });
            }
        }
        for (key, raw) in properties {
            if self.catalog.contains(key) {
                continue;
            }
            let value = clean(Some(raw));
            if !value.is_empty() {
                rows.push(PopupRow {
                    label: key.clone(),
                    value,
                });
            }
        }

        PopupContent { title, rows }
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
