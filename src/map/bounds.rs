use geo::{BoundingRect, Coord, MultiPoint, Rect};

use super::layer::Marker;

/// Fraction of the bounds extent added on each side.
pub const PADDING_RATIO: f64 = 0.1;

/// Half-size, in degrees, given to an axis along which all markers coincide.
pub const MIN_HALF_EXTENT_DEGREES: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitResult {
    Fitted(Rect),
    Skipped,
}

/// Compute the padded bounds covering all markers.
///
/// Returns `Skipped` for an empty slice or when any marker coordinate is not finite. The box is padded
/// by `PADDING_RATIO` of its extent on each side; an axis with zero extent is widened to
/// `MIN_HALF_EXTENT_DEGREES` on each side instead, so a single marker still gets a usable box.
pub fn fit_bounds(markers: &[Marker]) -> FitResult {
    if markers.is_empty() {
        log::warn!("Not fitting map bounds: no markers were rendered");
        return FitResult::Skipped;
    }
    if markers
        .iter()
        .any(|marker| !(marker.position.x().is_finite() && marker.position.y().is_finite()))
    {
        log::warn!("Not fitting map bounds: marker coordinates are not finite");
        return FitResult::Skipped;
    }

    let points: MultiPoint = markers.iter().map(|marker| marker.position).collect();
    let bounds = match points.bounding_rect() {
        Some(bounds) => bounds,
        None => {
            log::warn!("Not fitting map bounds: bounds are empty");
            return FitResult::Skipped;
        }
    };

    let pad_x = axis_padding(bounds.width());
    let pad_y = axis_padding(bounds.height());
    FitResult::Fitted(Rect::new(
        Coord {
            x: bounds.min().x - pad_x,
            y: bounds.min().y - pad_y,
        },
        Coord {
            x: bounds.max().x + pad_x,
            y: bounds.max().y + pad_y,
        },
    ))
}

fn axis_padding(extent: f64) -> f64 {
    if extent > 0.0 {
        extent * PADDING_RATIO
    } else {
        MIN_HALF_EXTENT_DEGREES
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{fit_bounds, FitResult, MIN_HALF_EXTENT_DEGREES};
    use crate::map::layer::{Marker, POPUP_MAX_WIDTH};
    use crate::popup::content::PopupContent;

    fn marker_at(lon: f64, lat: f64) -> Marker {
        Marker {
            position: geo::Point::new(lon, lat),
            popup: PopupContent {
                title: "Unnamed".to_string(),
                rows: Vec::new(),
            },
            popup_max_width: POPUP_MAX_WIDTH,
        }
    }

    #[test]
    fn test_fit_empty_is_skipped() {
        assert_eq!(FitResult::Skipped, fit_bounds(&[]));
    }

    #[test]
    fn test_fit_non_finite_is_skipped() {
        let markers = vec![marker_at(-103.0, 47.0), marker_at(f64::NAN, 48.0)];
        assert_eq!(FitResult::Skipped, fit_bounds(&markers));
    }

    #[test]
    fn test_fit_pads_by_ten_percent() {
        let markers = vec![
            marker_at(-104.0, 46.0),
            marker_at(-102.0, 48.0),
            marker_at(-103.0, 47.0),
        ];
        let bounds = match fit_bounds(&markers) {
            FitResult::Fitted(bounds) => bounds,
            FitResult::Skipped => panic!("Expected fitted bounds"),
        };
        let epsilon = 1e-9;
        assert_abs_diff_eq!(-104.2, bounds.min().x, epsilon = epsilon);
        assert_abs_diff_eq!(45.8, bounds.min().y, epsilon = epsilon);
        assert_abs_diff_eq!(-101.8, bounds.max().x, epsilon = epsilon);
        assert_abs_diff_eq!(48.2, bounds.max().y, epsilon = epsilon);
    }

    #[test]
    fn test_fit_single_marker() {
        let bounds = match fit_bounds(&[marker_at(-103.5, 47.5)]) {
            FitResult::Fitted(bounds) => bounds,
            FitResult::Skipped => panic!("Expected fitted bounds"),
        };
        assert!(bounds.width() > 0.0);
        assert!(bounds.height() > 0.0);
        assert!(bounds.min().x < -103.5 && -103.5 < bounds.max().x);
        assert!(bounds.min().y < 47.5 && 47.5 < bounds.max().y);
        assert_abs_diff_eq!(2.0 * MIN_HALF_EXTENT_DEGREES, bounds.width(), epsilon = 1e-9);
    }

    #[test]
    fn test_fit_collinear_markers_widens_flat_axis() {
        let markers = vec![marker_at(-104.0, 47.0), marker_at(-102.0, 47.0)];
        let bounds = match fit_bounds(&markers) {
            FitResult::Fitted(bounds) => bounds,
            FitResult::Skipped => panic!("Expected fitted bounds"),
        };
        assert_abs_diff_eq!(2.4, bounds.width(), epsilon = 1e-9);
        assert_abs_diff_eq!(2.0 * MIN_HALF_EXTENT_DEGREES, bounds.height(), epsilon = 1e-9);
    }
}
