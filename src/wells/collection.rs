use serde_json::{Map, Value};

/// A raw GeoJSON FeatureCollection of wells as returned by the wells endpoint.
///
/// Kept as untyped JSON so that one malformed feature does not reject the whole document. A missing or
/// non-array `features` member reads as an empty collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    document: Value,
}

impl FeatureCollection {
    pub fn from_json_value(document: Value) -> Self {
        Self { document }
    }

    pub fn from_json_str(contents: &str) -> serde_json::Result<Self> {
        Ok(Self::from_json_value(serde_json::from_str(contents)?))
    }

    /// The raw features, in document order.
    pub fn features(&self) -> &[Value] {
        self.document
            .get("features")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Properties of a raw feature. Absent or non-object properties read as an empty mapping.
pub fn feature_properties(feature: &Value) -> Map<String, Value> {
    feature
        .get("properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{feature_properties, FeatureCollection};

    #[rstest]
    #[case("{}", 0)]
    #[case(r#"{"type": "FeatureCollection", "features": []}"#, 0)]
    #[case(r#"{"features": null}"#, 0)]
    #[case(r#"{"features": "nope"}"#, 0)]
    #[case("[]", 0)]
    #[case(r#"{"features": [{}, {"type": "Feature"}]}"#, 2)]
    fn test_features(#[case] contents: &str, #[case] expected: usize) {
        let collection = FeatureCollection::from_json_str(contents).unwrap();
        assert_eq!(expected, collection.features().len());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(FeatureCollection::from_json_str("{not json").is_err());
    }

    #[test]
    fn test_feature_properties_default_to_empty() {
        assert!(feature_properties(&json!({"type": "Feature"})).is_empty());
        assert!(feature_properties(&json!({"properties": null})).is_empty());
        let properties = feature_properties(&json!({"properties": {"api_number": "A-1"}}));
        assert_eq!(Some(&json!("A-1")), properties.get("api_number"));
    }
}
