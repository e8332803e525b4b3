pub mod bounds;
pub mod count;
pub mod layer;
pub mod view;

use crate::popup::labels::LabelCatalog;
use crate::wells::collection::FeatureCollection;

use self::bounds::{fit_bounds, FitResult};
use self::count::CountIndicator;
use self::layer::{FeatureLayer, GeometryError, Marker};
use self::view::MapView;

/// Everything the rendering pipeline produced for one FeatureCollection.
#[derive(Debug)]
pub struct RenderedWells {
    pub markers: Vec<Marker>,
    pub errors: Vec<GeometryError>,
    pub fit: FitResult,
    pub count: CountIndicator,
}

/// Render a loaded collection onto `view`: build markers, fit the view to them, then count features.
///
/// Skipped features are logged as warnings and returned in `errors`.
pub fn render_wells(
    collection: &FeatureCollection,
    catalog: &LabelCatalog,
    popup_max_width: u32,
    view: &mut MapView,
) -> RenderedWells {
    let layer = FeatureLayer::with_popup_max_width(catalog, popup_max_width).render(collection);
    for error in &layer.errors {
        log::warn!("Skipping feature: {}", error);
    }
    log::info!(
        "Rendered {} markers from {} features",
        layer.markers.len(),
        collection.features().len()
    );

    let fit = fit_bounds(&layer.markers);
    view.fit_to(&fit);

    let count = CountIndicator::new(collection);
    log::info!("{}", count.text());

    RenderedWells {
        markers: layer.markers,
        errors: layer.errors,
        fit,
        count,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::bounds::FitResult;
    use super::layer::{GeometryError, POPUP_MAX_WIDTH};
    use super::render_wells;
    use super::view::{InitialView, MapView};
    use crate::popup::labels::LabelCatalog;
    use crate::wells::collection::FeatureCollection;

    #[test]
    fn test_render_wells_end_to_end() {
        let collection = FeatureCollection::from_json_value(json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [-103.0, 47.0]},
                    "properties": {"well_name_number": "Well 1", "operator_company": "Acme"}
                },
                {
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [-102.0, 48.0]},
                    "properties": {"api_number": "33-053-00002"}
                },
                {
                    "type": "Feature",
                    "properties": {"well_name_number": "No location"}
                },
                {
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [-104.0, 46.0]}
                }
            ]
        }));
        let catalog = LabelCatalog::default();
        let mut view = MapView::new(&InitialView::default());

        let rendered = render_wells(&collection, &catalog, POPUP_MAX_WIDTH, &mut view);

        assert_eq!(3, rendered.markers.len());
        assert_eq!(vec![GeometryError::Missing { index: 2 }], rendered.errors);
        assert_eq!(4, rendered.count.count);
        assert_eq!("Wells: 4", rendered.count.text());

        let titles: Vec<&str> = rendered
            .markers
            .iter()
            .map(|marker| marker.popup.title.as_str())
            .collect();
        assert_eq!(vec!["Well 1", "33-053-00002", "Unnamed"], titles);

        match rendered.fit {
            FitResult::Fitted(bounds) => assert_eq!(Some(bounds), view.fitted_bounds),
            FitResult::Skipped => panic!("Expected fitted bounds"),
        }
    }

    #[test]
    fn test_render_empty_collection_keeps_initial_view() {
        let collection = FeatureCollection::from_json_value(json!({}));
        let catalog = LabelCatalog::default();
        let initial_view = InitialView::default();
        let mut view = MapView::new(&initial_view);

        let rendered = render_wells(&collection, &catalog, POPUP_MAX_WIDTH, &mut view);

        assert!(rendered.markers.is_empty());
        assert_eq!(FitResult::Skipped, rendered.fit);
        assert_eq!(MapView::new(&initial_view), view);
        assert_eq!(0, rendered.count.count);
    }
}
