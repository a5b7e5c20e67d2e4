//! Region overlay management for the map.
//!
//! This module owns the lifecycle of the single live region overlay: a set
//! of GeoJSON polygons drawn on the map in one of three warning colors. The
//! components are:
//!
//! - [`SeverityLevel`]: the amarillo/naranja/rojo coloring scale
//! - [`MapCanvas`]: the narrow trait the host map must provide
//! - [`OverlayManager`]: the sole owner and mutator of the live overlay
//!
//! # Architecture
//!
//! The manager holds an `Option<RegionOverlay>`; `load` replaces it (and
//! retires the previous layer on the map) while `recolor` restyles it in
//! place. There is no other overlay state anywhere, which is what keeps the
//! at-most-one-live-layer invariant easy to uphold.
//!
//! # Example Usage
//!
//! ```
//! use meteomapa::overlay::{LogMap, OverlayManager, SeverityLevel};
//! use serde_json::json;
//!
//! let mut manager = OverlayManager::new(LogMap::new());
//! let geometry = json!({"type": "FeatureCollection", "features": []});
//!
//! // First load: nothing to retire
//! manager.load(geometry.clone(), SeverityLevel::Amarillo);
//!
//! // Same polygons, new color
//! manager.recolor(SeverityLevel::Rojo).unwrap();
//!
//! // A new load retires the previous layer
//! manager.load(geometry, SeverityLevel::Naranja);
//! ```

mod level;
mod manager;
mod map;

pub use crate::overlay::level::SeverityLevel;
pub use crate::overlay::manager::{OverlayManager, RegionOverlay};
pub use crate::overlay::map::{LayerId, LayerStyle, LogMap, MapCanvas};

use thiserror::Error;

/// Errors from overlay operations.
///
/// Every variant is recoverable and scoped to a single user action; prior
/// overlay state is left intact when an operation fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverlayError {
    /// `recolor` was invoked before any region was loaded.
    ///
    /// Surfaced to the user as an instruction to load a region first. The
    /// map is not touched when this error is returned.
    #[error("no region overlay loaded, load a region first")]
    NoActiveOverlay,
}
