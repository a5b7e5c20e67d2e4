//! Overlay lifecycle management.
//!
//! This module provides the [`OverlayManager`] struct that owns the single
//! live region overlay and mutates it through `load` and `recolor`.

use log::{debug, info};
use serde_json::Value;

use crate::overlay::OverlayError;
use crate::overlay::level::SeverityLevel;
use crate::overlay::map::{LayerId, LayerStyle, MapCanvas};

/// The currently displayed region overlay.
///
/// Bundles the opaque geometry payload, the severity level it is colored
/// with, and the handle of its layer on the map. At most one of these exists
/// at any time; it lives inside the [`OverlayManager`] and is replaced on
/// `load` or restyled in place on `recolor`.
#[derive(Clone, Debug)]
pub struct RegionOverlay {
    /// GeoJSON payload passed through to the map, never inspected.
    pub geometry: Value,
    /// Severity level the overlay is currently colored with.
    pub level: SeverityLevel,
    /// Handle of the live layer on the map.
    pub layer: LayerId,
}

/// Owns the single live overlay and the map it is drawn on.
///
/// The manager is the only writer of overlay state. Loading a new region
/// implicitly retires the previous overlay (its layer is removed from the
/// map), so there is never more than one live layer. Recoloring restyles
/// the live layer in place without touching its geometry.
///
/// Both operations run synchronously to completion; there is no queuing. If
/// callers race, the last writer wins on the single overlay slot.
///
/// # Examples
///
/// ```
/// # use meteomapa::overlay::{LogMap, OverlayManager, SeverityLevel};
/// # use serde_json::json;
/// let mut manager = OverlayManager::new(LogMap::new());
/// let geometry = json!({"type": "FeatureCollection", "features": []});
///
/// manager.load(geometry, SeverityLevel::Amarillo);
/// manager.recolor(SeverityLevel::Rojo).unwrap();
/// ```
pub struct OverlayManager<M: MapCanvas> {
    /// Map capability the overlay is drawn on.
    map: M,
    /// The live overlay, if a region has been loaded.
    active: Option<RegionOverlay>,
}

impl<M: MapCanvas> OverlayManager<M> {
    /// Create a new [`OverlayManager`] with no overlay loaded.
    ///
    /// # Arguments
    ///
    /// * `map` - An implementation of the [`MapCanvas`] trait to draw on.
    pub fn new(map: M) -> Self {
        OverlayManager { map, active: None }
    }

    /// Loads a region geometry as the sole live overlay, colored per `level`.
    ///
    /// Any existing overlay is retired first: its layer is removed from the
    /// map before the new one is added. Calling `load` with no prior overlay
    /// skips the removal. Repeated identical calls always leave exactly one
    /// live layer.
    ///
    /// # Arguments
    ///
    /// * `geometry` - GeoJSON-compatible payload, passed through untouched.
    /// * `level` - Severity level determining the overlay color.
    pub fn load(&mut self, geometry: Value, level: SeverityLevel) {
        if let Some(previous) = self.active.take() {
            debug!("retiring overlay layer {:?}", previous.layer);
            self.map.remove_layer(previous.layer);
        }

        let style = LayerStyle::from_color(level.color());
        let layer = self.map.add_layer(&geometry, &style);

        info!("loaded region overlay {:?} at level {}", layer, level);

        self.active = Some(RegionOverlay {
            geometry,
            level,
            layer,
        });
    }

    /// Recolors the live overlay to `level`, keeping its geometry.
    ///
    /// The live layer is restyled in place: the map sees a `restyle` call
    /// for the existing handle, never a remove or add, so feature identity
    /// is preserved and exactly one layer stays live.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::NoActiveOverlay`] when no region has been
    /// loaded yet. The map is not touched in that case.
    pub fn recolor(&mut self, level: SeverityLevel) -> Result<(), OverlayError> {
        let overlay = self.active.as_mut().ok_or(OverlayError::NoActiveOverlay)?;

        let style = LayerStyle::from_color(level.color());
        self.map.restyle(overlay.layer, &style);
        overlay.level = level;

        info!("recolored overlay {:?} to level {}", overlay.layer, level);

        Ok(())
    }

    /// Returns the live overlay, if any.
    pub fn active(&self) -> Option<&RegionOverlay> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::map::MockMapCanvas;
    use serde_json::json;

    fn region_geometry(name: &str) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": name },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                    }
                }
            ]
        })
    }

    #[test]
    fn test_load_with_no_prior_overlay_only_adds() {
        let mut mock_map = MockMapCanvas::new();

        mock_map
            .expect_add_layer()
            .times(1)
            .returning(|_, _| LayerId(7));
        mock_map.expect_remove_layer().times(0);
        mock_map.expect_restyle().times(0);

        let mut manager = OverlayManager::new(mock_map);
        manager.load(region_geometry("R01"), SeverityLevel::Amarillo);

        let overlay = manager.active().unwrap();
        assert_eq!(overlay.layer, LayerId(7));
        assert_eq!(overlay.level, SeverityLevel::Amarillo);
    }

    #[test]
    fn test_load_applies_level_color() {
        let mut mock_map = MockMapCanvas::new();

        mock_map
            .expect_add_layer()
            .withf(|_, style| {
                style.fill_color == "#ff0000"
                    && style.stroke_color == "#ff0000"
                    && style.stroke_width == 2
            })
            .times(1)
            .returning(|_, _| LayerId(0));

        let mut manager = OverlayManager::new(mock_map);
        manager.load(region_geometry("R01"), SeverityLevel::Rojo);
    }

    #[test]
    fn test_second_load_removes_first_layer_exactly_once() {
        let mut mock_map = MockMapCanvas::new();
        let mut next_id = 0;

        mock_map.expect_add_layer().times(2).returning(move |_, _| {
            let layer = LayerId(next_id);
            next_id += 1;
            layer
        });
        mock_map
            .expect_remove_layer()
            .with(mockall::predicate::eq(LayerId(0)))
            .times(1)
            .return_const(());

        let mut manager = OverlayManager::new(mock_map);
        manager.load(region_geometry("R01"), SeverityLevel::Amarillo);
        manager.load(region_geometry("R02"), SeverityLevel::Naranja);

        // The second call's geometry and layer are the live ones
        let overlay = manager.active().unwrap();
        assert_eq!(overlay.layer, LayerId(1));
        assert_eq!(overlay.geometry, region_geometry("R02"));
        assert_eq!(overlay.level, SeverityLevel::Naranja);
    }

    #[test]
    fn test_load_is_idempotent_under_identical_calls() {
        let mut mock_map = MockMapCanvas::new();
        let mut next_id = 0;

        mock_map.expect_add_layer().times(3).returning(move |_, _| {
            let layer = LayerId(next_id);
            next_id += 1;
            layer
        });
        // Every load after the first retires exactly one layer
        mock_map.expect_remove_layer().times(2).return_const(());

        let mut manager = OverlayManager::new(mock_map);
        for _ in 0..3 {
            manager.load(region_geometry("R01"), SeverityLevel::Amarillo);
        }

        assert_eq!(manager.active().unwrap().layer, LayerId(2));
    }

    #[test]
    fn test_recolor_without_load_errors_and_leaves_map_untouched() {
        let mut mock_map = MockMapCanvas::new();

        mock_map.expect_add_layer().times(0);
        mock_map.expect_remove_layer().times(0);
        mock_map.expect_restyle().times(0);

        let mut manager = OverlayManager::new(mock_map);
        let result = manager.recolor(SeverityLevel::Rojo);

        assert_eq!(result, Err(OverlayError::NoActiveOverlay));
        assert!(manager.active().is_none());
    }

    #[test]
    fn test_recolor_restyles_live_layer_in_place() {
        let mut mock_map = MockMapCanvas::new();

        mock_map
            .expect_add_layer()
            .times(1)
            .returning(|_, _| LayerId(3));
        mock_map
            .expect_restyle()
            .withf(|layer, style| *layer == LayerId(3) && style.fill_color == "#ffa500")
            .times(1)
            .return_const(());
        // No layer churn on recolor
        mock_map.expect_remove_layer().times(0);

        let mut manager = OverlayManager::new(mock_map);
        manager.load(region_geometry("R01"), SeverityLevel::Amarillo);
        manager.recolor(SeverityLevel::Naranja).unwrap();

        let overlay = manager.active().unwrap();
        assert_eq!(overlay.layer, LayerId(3));
        assert_eq!(overlay.level, SeverityLevel::Naranja);
    }

    #[test]
    fn test_recolor_preserves_geometry() {
        let mut mock_map = MockMapCanvas::new();

        mock_map
            .expect_add_layer()
            .times(1)
            .returning(|_, _| LayerId(0));
        mock_map.expect_restyle().times(1).return_const(());

        let mut manager = OverlayManager::new(mock_map);
        manager.load(region_geometry("R05"), SeverityLevel::Amarillo);
        manager.recolor(SeverityLevel::Rojo).unwrap();

        assert_eq!(manager.active().unwrap().geometry, region_geometry("R05"));
    }
}
