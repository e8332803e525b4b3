use std::{fs, path::Path};

use anyhow::Context;
use serde_json::json;

use crate::map::count::CountIndicator;
use crate::map::layer::Marker;
use crate::map::view::{MapView, TileSource};

const PAGE_DATA_PLACEHOLDER: &str = "__PAGE_DATA__";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Wells</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>
html, body, #map { height: 100%; margin: 0; }
.map-count-control { padding: 6px 8px; background: rgba(255,255,255,0.9); border-radius: 4px; box-shadow: 0 1px 2px rgba(0,0,0,0.2); }
</style>
</head>
<body>
<div id="map"></div>
<script>
const page = __PAGE_DATA__;
const map = L.map('map').setView(page.center, page.zoom);
L.tileLayer(page.tiles.url_template, {
  maxZoom: page.tiles.max_zoom,
  attribution: page.tiles.attribution
}).addTo(map);
for (const marker of page.markers) {
  L.marker([marker.lat, marker.lon]).bindPopup(marker.popup, {maxWidth: marker.max_width}).addTo(map);
}
if (page.bounds !== null) {
  map.fitBounds(page.bounds);
}
if (page.count !== null) {
  const info = L.control({position: 'topright'});
  info.onAdd = function () {
    const div = L.DomUtil.create('div', 'map-count-control');
    div.innerHTML = page.count;
    return div;
  };
  info.addTo(map);
}
if (page.failure !== null) {
  alert(page.failure);
}
</script>
</body>
</html>
"#;

/// A self-contained Leaflet page showing the rendered wells.
pub struct MapPage<'a> {
    pub view: &'a MapView,
    pub tiles: &'a TileSource,
    pub markers: &'a [Marker],
    /// `None` until the wells have been loaded.
    pub count: Option<CountIndicator>,
    /// Message shown to the user when loading failed.
    pub failure: Option<String>,
}

impl<'a> MapPage<'a> {
    /// The markerless page shown when the wells could not be loaded.
    pub fn failed(view: &'a MapView, tiles: &'a TileSource, failure: String) -> Self {
        Self {
            view,
            tiles,
            markers: &[],
            count: None,
            failure: Some(failure),
        }
    }

    fn page_data(&self) -> serde_json::Value {
        let markers: Vec<serde_json::Value> = self
            .markers
            .iter()
            .map(|marker| {
                json!({
                    "lat": marker.position.y(),
                    "lon": marker.position.x(),
                    "popup": marker.popup.to_html(),
                    "max_width": marker.popup_max_width,
                })
            })
            .collect();
        let bounds = self.view.fitted_bounds.map(|bounds| {
            json!([
                [bounds.min().y, bounds.min().x],
                [bounds.max().y, bounds.max().x]
            ])
        });
        let count = self.count.map(|count| count.to_html());
        json!({
            "center": [self.view.center.y(), self.view.center.x()],
            "zoom": self.view.zoom,
            "tiles": {
                "url_template": self.tiles.url_template,
                "max_zoom": self.tiles.max_zoom,
                "attribution": self.tiles.attribution,
            },
            "markers": markers,
            "bounds": bounds,
            "count": count,
            "failure": self.failure,
        })
    }

    pub fn to_html(&self) -> String {
        // A literal "</" inside the script block would end it early.
        let page_data = self.page_data().to_string().replace("</", "<\\/");
        PAGE_TEMPLATE.replace(PAGE_DATA_PLACEHOLDER, &page_data)
    }

    pub fn write(&self, output_filepath: &Path) -> anyhow::Result<()> {
        if let Some(parent) = output_filepath.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Creating output directory {:?}", parent))?;
            }
        }
        fs::write(output_filepath, self.to_html())
            .with_context(|| format!("Writing map page to {:?}", output_filepath))
    }
}
