use crate::wells::collection::FeatureCollection;

/// Number of features in the collection, whether or not they could be rendered.
pub fn count(collection: &FeatureCollection) -> usize {
    collection.features().len()
}

/// Map control showing how many wells were loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountIndicator {
    pub count: usize,
}

impl CountIndicator {
    pub fn new(collection: &FeatureCollection) -> Self {
        Self {
            count: count(collection),
        }
    }

    pub fn text(&self) -> String {
        format!("Wells: {}", self.count)
    }

    pub fn to_html(&self) -> String {
        format!("<strong>Wells:</strong> {}", self.count)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{count, CountIndicator};
    use crate::wells::collection::FeatureCollection;

    #[rstest]
    #[case(json!({"features": []}), 0)]
    #[case(json!({}), 0)]
    #[case(json!({"features": {"not": "an array"}}), 0)]
    #[case(json!({"features": [{"type": "Feature"}, {"type": "Feature"}]}), 2)]
    fn test_count(#[case] document: serde_json::Value, #[case] expected: usize) {
        assert_eq!(
            expected,
            count(&FeatureCollection::from_json_value(document))
        );
    }

    #[test]
    fn test_indicator_text() {
        let collection = FeatureCollection::from_json_value(json!({"features": [{}, {}, {}]}));
        let indicator = CountIndicator::new(&collection);
        assert_eq!("Wells: 3", indicator.text());
        assert_eq!("<strong>Wells:</strong> 3", indicator.to_html());
    }
}
