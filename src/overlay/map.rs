//! Map capability abstraction for region overlays.
//!
//! The host map (vector rendering, projection, redraw) is an external
//! collaborator. This module defines the narrow [`MapCanvas`] trait the
//! overlay manager drives, the [`LayerStyle`] passed through to it, and a
//! logging implementation used by the CLI.

use log::info;
use mockall::automock;
use serde_json::Value;

/// Handle to one live layer on the map.
///
/// Handed out by [`MapCanvas::add_layer`] and passed back to
/// [`MapCanvas::remove_layer`] and [`MapCanvas::restyle`]. Opaque to the
/// overlay manager beyond identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

/// Uniform style applied to every feature of an overlay layer.
///
/// All four fields derive from a single selected color; there is no
/// per-feature styling. Fill opacity and stroke width are fixed.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerStyle {
    /// Fill color as a hex string.
    pub fill_color: String,
    /// Fill opacity, fixed at 0.3.
    pub fill_opacity: f64,
    /// Stroke color, same as the fill color.
    pub stroke_color: String,
    /// Stroke width in pixels, fixed at 2.
    pub stroke_width: u32,
}

impl LayerStyle {
    /// Builds the uniform style for one color.
    pub fn from_color(color: &str) -> Self {
        LayerStyle {
            fill_color: color.to_string(),
            fill_opacity: 0.3,
            stroke_color: color.to_string(),
            stroke_width: 2,
        }
    }
}

/// Trait for the map operations the overlay manager needs.
///
/// This trait abstracts the host map for easier testing with mocks. The
/// geometry payload is passed through untouched; implementations own
/// whatever parsing and projection the real map requires.
#[automock]
pub trait MapCanvas {
    /// Adds a styled layer built from the geometry payload, returning its handle.
    fn add_layer(&mut self, geometry: &Value, style: &LayerStyle) -> LayerId;
    /// Removes a previously added layer.
    fn remove_layer(&mut self, layer: LayerId);
    /// Replaces the style of a live layer, leaving its geometry unchanged.
    fn restyle(&mut self, layer: LayerId, style: &LayerStyle);
}

/// A [`MapCanvas`] that logs operations instead of rendering.
///
/// Stands in for the real map host when running from the command line:
/// it hands out sequential layer handles and reports each operation through
/// the logger, which is enough to observe the overlay lifecycle.
#[derive(Debug, Default)]
pub struct LogMap {
    /// Next handle to hand out.
    next_id: u64,
}

impl LogMap {
    /// Create a new [`LogMap`] starting at handle 0.
    pub fn new() -> Self {
        LogMap::default()
    }
}

impl MapCanvas for LogMap {
    fn add_layer(&mut self, geometry: &Value, style: &LayerStyle) -> LayerId {
        let layer = LayerId(self.next_id);
        self.next_id += 1;

        // FeatureCollections carry a features array; anything else counts as one
        let feature_count = geometry
            .get("features")
            .and_then(Value::as_array)
            .map_or(1, Vec::len);

        info!(
            "added layer {:?} with {} features, color {}",
            layer, feature_count, style.fill_color
        );
        layer
    }

    fn remove_layer(&mut self, layer: LayerId) {
        info!("removed layer {:?}", layer);
    }

    fn restyle(&mut self, layer: LayerId, style: &LayerStyle) {
        info!("restyled layer {:?} to color {}", layer, style.fill_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_layer_style_from_color() {
        let style = LayerStyle::from_color("#ffa500");

        assert_eq!(style.fill_color, "#ffa500");
        assert_eq!(style.stroke_color, "#ffa500");
        assert_eq!(style.fill_opacity, 0.3);
        assert_eq!(style.stroke_width, 2);
    }

    #[test]
    fn test_log_map_hands_out_sequential_handles() {
        let mut map = LogMap::new();
        let style = LayerStyle::from_color("#ff0000");
        let geometry = json!({"type": "FeatureCollection", "features": []});

        let first = map.add_layer(&geometry, &style);
        let second = map.add_layer(&geometry, &style);

        assert_ne!(first, second);
        assert_eq!(first, LayerId(0));
        assert_eq!(second, LayerId(1));
    }

    #[test]
    fn test_log_map_accepts_non_collection_geometry() {
        let mut map = LogMap::new();
        let style = LayerStyle::from_color("#ffff00");
        let geometry = json!({"type": "Feature", "geometry": null});

        // A bare Feature has no features array; must not panic
        let layer = map.add_layer(&geometry, &style);
        map.restyle(layer, &style);
        map.remove_layer(layer);
    }
}
