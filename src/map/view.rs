use serde::Deserialize;

use super::bounds::FitResult;

/// Map center and zoom shown before any data is fitted.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct InitialView {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

impl Default for InitialView {
    fn default() -> Self {
        Self {
            center_lat: 47.5,
            center_lon: -103.5,
            zoom: 6,
        }
    }
}

/// Raster tile provider. `url_template` uses Leaflet's `{s}`, `{z}`, `{x}` and `{y}` placeholders.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TileSource {
    pub url_template: String,
    pub max_zoom: u8,
    pub attribution: String,
}

impl Default for TileSource {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            max_zoom: 19,
            attribution: "&copy; OpenStreetMap contributors".to_string(),
        }
    }
}

/// The map viewport. Only the rendering pipeline changes it, once the wells are loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: geo::Point,
    pub zoom: u8,
    pub fitted_bounds: Option<geo::Rect>,
}

impl MapView {
    pub fn new(initial_view: &InitialView) -> Self {
        Self {
            center: geo::Point::new(initial_view.center_lon, initial_view.center_lat),
            zoom: initial_view.zoom,
            fitted_bounds: None,
        }
    }

    /// Apply a bounds fit. `Skipped` leaves the view untouched.
    pub fn fit_to(&mut self, fit: &FitResult) {
        if let FitResult::Fitted(bounds) = fit {
            self.fitted_bounds = Some(*bounds);
        }
    }
}
