//! Alert record structure for Meteoalarm weather alerts.
//!
//! This module provides the [`AlertRecord`] struct representing a single
//! weather alert extracted from a CAP feed, and the [`CapSeverity`]
//! classification used to rank alerts in the table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents one weather alert extracted from a Meteoalarm CAP feed.
///
/// An alert record is only ever constructed with all six fields populated:
/// the parser drops trailing occurrences of any field that cannot be paired
/// with a matching position in the other five (see
/// [`FeedParser`](crate::alerts::FeedParser)). There is no such thing as a
/// partial record.
///
/// The timestamp fields are kept as opaque strings exactly as they appear in
/// the feed. No timezone or ordering logic is applied to them.
///
/// # Examples
///
/// ```
/// # use meteomapa::alerts::AlertRecord;
/// let record = AlertRecord {
///     emma_id: "ES511".to_string(),
///     severity: "Severe".to_string(),
///     area_desc: "Litoral norte de Girona".to_string(),
///     event: "Wind".to_string(),
///     effective: "2024-03-01T06:00:00+01:00".to_string(),
///     expires: "2024-03-01T18:00:00+01:00".to_string(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// EMMA region identifier from the feed (`EMMA_ID` parameter value).
    pub emma_id: String,
    /// Raw severity text from `<cap:severity>`.
    ///
    /// Kept verbatim for display; ranking uses [`CapSeverity::classify`].
    pub severity: String,
    /// Free-text region name from `<cap:areaDesc>`.
    pub area_desc: String,
    /// Free-text event type from `<cap:event>`.
    pub event: String,
    /// Opaque start timestamp from `<cap:effective>`.
    pub effective: String,
    /// Opaque end timestamp from `<cap:expires>`.
    pub expires: String,
}

impl AlertRecord {
    /// Returns the severity rank class of this record.
    pub fn cap_severity(&self) -> CapSeverity {
        CapSeverity::classify(&self.severity)
    }
}

/// Severity rank class derived from an alert's free-text severity field.
///
/// This is the ordering domain used for the alert table: `Extreme` sorts
/// before `Severe`, which sorts before everything else. It is deliberately
/// distinct from [`SeverityLevel`](crate::overlay::SeverityLevel), which is
/// the manual coloring choice for region overlays.
///
/// Classification is a case-insensitive substring test, not an exact match:
/// the feed's severity field is not a closed enumeration, so "Extreme wind"
/// and "extreme" both classify as [`CapSeverity::Extreme`]. Anything without
/// an "extreme" or "severe" substring, including "Moderate" and unrecognized
/// values, falls into [`CapSeverity::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CapSeverity {
    /// Severity text contains "extreme" (rank 0).
    Extreme,
    /// Severity text contains "severe" (rank 1).
    Severe,
    /// Everything else, including "moderate" and unknown values (rank 2).
    Other,
}

impl CapSeverity {
    /// Classifies a raw severity string into its rank class.
    ///
    /// # Examples
    ///
    /// ```
    /// # use meteomapa::alerts::CapSeverity;
    /// assert_eq!(CapSeverity::classify("Extreme wind"), CapSeverity::Extreme);
    /// assert_eq!(CapSeverity::classify("SEVERE"), CapSeverity::Severe);
    /// assert_eq!(CapSeverity::classify("Moderate frost"), CapSeverity::Other);
    /// ```
    pub fn classify(severity: &str) -> Self {
        let lowered = severity.to_lowercase();
        if lowered.contains("extreme") {
            CapSeverity::Extreme
        } else if lowered.contains("severe") {
            CapSeverity::Severe
        } else {
            CapSeverity::Other
        }
    }

    /// Returns the numeric sort rank: 0 for extreme, 1 for severe, 2 otherwise.
    pub fn rank(self) -> u8 {
        match self {
            CapSeverity::Extreme => 0,
            CapSeverity::Severe => 1,
            CapSeverity::Other => 2,
        }
    }
}

impl fmt::Display for CapSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapSeverity::Extreme => write!(f, "extreme"),
            CapSeverity::Severe => write!(f, "severe"),
            CapSeverity::Other => write!(f, "other"),
        }
    }
}
