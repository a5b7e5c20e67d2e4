//! Severity levels for manual overlay coloring.
//!
//! This module provides the [`SeverityLevel`] enumeration used to pick the
//! color of a region overlay. It is the three-step scale of the Spanish
//! warning system (amarillo, naranja, rojo) and is independent of the CAP
//! severity vocabulary used to rank the alert table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three overlay coloring levels.
///
/// Each level maps to one fixed color; stroke and fill of the overlay are
/// both derived from it. This enumeration is a coloring choice made by the
/// user, not a classification of feed data — see
/// [`CapSeverity`](crate::alerts::CapSeverity) for the latter.
///
/// # Examples
///
/// ```
/// # use meteomapa::overlay::SeverityLevel;
/// let level: SeverityLevel = "naranja".parse().unwrap();
/// assert_eq!(level, SeverityLevel::Naranja);
/// assert_eq!(level.color(), "#ffa500");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// Yellow warning level.
    Amarillo,
    /// Orange warning level.
    Naranja,
    /// Red warning level.
    Rojo,
}

impl SeverityLevel {
    /// Returns the hex color for this level.
    ///
    /// Fixed table: amarillo is yellow, naranja is orange, rojo is red.
    pub fn color(self) -> &'static str {
        match self {
            SeverityLevel::Amarillo => "#ffff00",
            SeverityLevel::Naranja => "#ffa500",
            SeverityLevel::Rojo => "#ff0000",
        }
    }

    /// Returns all levels in ascending order, for selector widgets.
    pub fn all() -> [SeverityLevel; 3] {
        [
            SeverityLevel::Amarillo,
            SeverityLevel::Naranja,
            SeverityLevel::Rojo,
        ]
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityLevel::Amarillo => write!(f, "amarillo"),
            SeverityLevel::Naranja => write!(f, "naranja"),
            SeverityLevel::Rojo => write!(f, "rojo"),
        }
    }
}

impl FromStr for SeverityLevel {
    type Err = String;

    /// Parses the lowercase Spanish level names, ignoring surrounding case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amarillo" => Ok(SeverityLevel::Amarillo),
            "naranja" => Ok(SeverityLevel::Naranja),
            "rojo" => Ok(SeverityLevel::Rojo),
            other => Err(format!(
                "unknown severity level '{other}', expected amarillo, naranja or rojo"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_table() {
        assert_eq!(SeverityLevel::Amarillo.color(), "#ffff00");
        assert_eq!(SeverityLevel::Naranja.color(), "#ffa500");
        assert_eq!(SeverityLevel::Rojo.color(), "#ff0000");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "amarillo".parse::<SeverityLevel>().unwrap(),
            SeverityLevel::Amarillo
        );
        assert_eq!(
            "Naranja".parse::<SeverityLevel>().unwrap(),
            SeverityLevel::Naranja
        );
        assert_eq!(
            "ROJO".parse::<SeverityLevel>().unwrap(),
            SeverityLevel::Rojo
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("verde".parse::<SeverityLevel>().is_err());
        assert!("".parse::<SeverityLevel>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for level in SeverityLevel::all() {
            assert_eq!(level.to_string().parse::<SeverityLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SeverityLevel::Rojo).unwrap();
        assert_eq!(json, "\"rojo\"");

        let level: SeverityLevel = serde_json::from_str("\"amarillo\"").unwrap();
        assert_eq!(level, SeverityLevel::Amarillo);
    }
}
