use std::collections::HashSet;

use anyhow::anyhow;
use serde::Deserialize;

/// Known well attributes and their display labels, in display order.
const WELL_LABELS: [(&str, &str); 17] = [
    ("well_name_number", "Well"),
    ("api_number", "API"),
    ("operator_company", "Operator"),
    ("address", "Address"),
    ("date_stimulated", "Date"),
    ("stimulated_formation", "Formation"),
    ("top_ft", "Top (ft)"),
    ("bottom_ft", "Bottom (ft)"),
    ("stimulation_stages", "Stages"),
    ("volume_value", "Volume"),
    ("volume_units", "Units"),
    ("treatment_type", "Treatment"),
    ("acid_percent", "Acid %"),
    ("lbs_proppant", "Lbs Proppant"),
    ("max_treatment_pressure_psi", "Max Pressure (psi)"),
    ("max_treatment_rate_bbls_per_min", "Max Rate (bbls/min)"),
    ("details", "Details"),
];

/// One entry of a label catalog as written in the config file.
#[derive(Deserialize, Debug, Clone)]
pub struct LabelEntry {
    pub key: String,
    pub label: String,
}

/// Immutable, ordered mapping from attribute keys to display labels.
///
/// Declaration order is the order labeled rows appear in a popup.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCatalog {
    entries: Vec<(String, String)>,
}

impl LabelCatalog {
    /// Create a catalog from `(key, label)` pairs. Keys must be non-empty and unique.
    pub fn new(entries: Vec<(String, String)>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for (key, _) in &entries {
            if key.is_empty() {
                return Err(anyhow!("Label catalog contains an empty key"));
            }
            if !seen.insert(key.as_str()) {
                return Err(anyhow!("Label catalog contains duplicate key '{}'", key));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_entries(entries: &[LabelEntry]) -> anyhow::Result<Self> {
        Self::new(
            entries
                .iter()
                .map(|entry| (entry.key.clone(), entry.label.clone()))
                .collect(),
        )
    }

    pub fn ordered_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Label for `key`, or `None` if the key is not part of the catalog.
    pub fn label_of(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(known_key, _)| known_key == key)
            .map(|(_, label)| label.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.label_of(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LabelCatalog {
    /// The catalog of well attributes.
    fn default() -> Self {
        Self {
            entries: WELL_LABELS
                .iter()
                .map(|(key, label)| (key.to_string(), label.to_string()))
                .collect(),
        }
    }
}
