use serde_json::Value;
use thiserror::Error;

use crate::popup::content::{PopupBuilder, PopupContent};
use crate::popup::labels::LabelCatalog;
use crate::wells::collection::{feature_properties, FeatureCollection};

/// Default maximum popup width, in pixels.
pub const POPUP_MAX_WIDTH: u32 = 400;

/// Why a single feature could not be placed on the map. `index` is the feature's position in the
/// collection.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("feature {index} has no geometry")]
    Missing { index: usize },
    #[error("feature {index} has unreadable geometry: {reason}")]
    Malformed { index: usize, reason: String },
    #[error("feature {index} has {kind} geometry, expected Point")]
    NotAPoint { index: usize, kind: &'static str },
    #[error("feature {index} has invalid point coordinates {coordinates:?}")]
    InvalidCoordinates { index: usize, coordinates: Vec<f64> },
}

/// A point marker with its popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// x is longitude, y is latitude.
    pub position: geo::Point,
    pub popup: PopupContent,
    pub popup_max_width: u32,
}

#[derive(Debug, Default)]
pub struct RenderedLayer {
    pub markers: Vec<Marker>,
    pub errors: Vec<GeometryError>,
}

/// Turns a FeatureCollection into markers, one per feature with a usable point geometry.
pub struct FeatureLayer<'a> {
    popup_builder: PopupBuilder<'a>,
    popup_max_width: u32,
}

impl<'a> FeatureLayer<'a> {
    pub fn with_popup_max_width(catalog: &'a LabelCatalog, popup_max_width: u32) -> Self {
        Self {
            popup_builder: PopupBuilder::new(catalog),
            popup_max_width,
        }
    }

    /// Build markers for all features. A feature whose geometry is unusable is skipped and its error
    /// collected; the remaining features are still rendered.
    pub fn render(&self, collection: &FeatureCollection) -> RenderedLayer {
        let mut layer = RenderedLayer::default();
        for (index, feature) in collection.features().iter().enumerate() {
            match self.render_feature(index, feature) {
                Ok(marker) => layer.markers.push(marker),
                Err(err) => layer.errors.push(err),
            }
        }
        layer
    }

    fn render_feature(&self, index: usize, feature: &Value) -> Result<Marker, GeometryError> {
        let position = feature_point(index, feature)?;
        let popup = self.popup_builder.build(&feature_properties(feature));
        log::debug!("Feature {} rendered as '{}'", index, popup.title);
        Ok(Marker {
            position,
            popup,
            popup_max_width: self.popup_max_width,
        })
    }
}

/// Read the point location of a raw feature.
pub fn feature_point(index: usize, feature: &Value) -> Result<geo::Point, GeometryError> {
    let geometry = match feature.get("geometry") {
        None | Some(Value::Null) => return Err(GeometryError::Missing { index }),
        Some(geometry) => geometry,
    };
    let geometry: geojson::Geometry =
        serde_json::from_value(geometry.clone()).map_err(|err| GeometryError::Malformed {
            index,
            reason: err.to_string(),
        })?;
    match geometry.value {
        geojson::Value::Point(coordinates) => {
            if coordinates.len() >= 2 && coordinates[..2].iter().all(|value| value.is_finite()) {
                Ok(geo::Point::new(coordinates[0], coordinates[1]))
            } else {
                Err(GeometryError::InvalidCoordinates { index, coordinates })
            }
        }
        other => Err(GeometryError::NotAPoint {
            index,
            kind: geometry_kind(&other),
        }),
    }
}

fn geometry_kind(value: &geojson::Value) -> &'static str {
    match value {
        geojson::Value::Point(_) => "Point",
        geojson::Value::MultiPoint(_) => "MultiPoint",
        geojson::Value::LineString(_) => "LineString",
        geojson::Value::MultiLineString(_) => "MultiLineString",
        geojson::Value::Polygon(_) => "Polygon",
        geojson::Value::MultiPolygon(_) => "MultiPolygon",
        geojson::Value::GeometryCollection(_) => "GeometryCollection",
    }
}
