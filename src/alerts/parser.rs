//! Feed parsing logic for Meteoalarm CAP text.
//!
//! This module provides the [`FeedParser`] struct that extracts alert
//! records from the raw feed text and returns them ranked by severity.

use log::{debug, warn};
use regex::Regex;

use crate::alerts::alert::AlertRecord;

/// Pattern for the EMMA region identifier, published as a CAP parameter.
const EMMA_ID_PATTERN: &str = r"<valueName>EMMA_ID</valueName>\s*<value>(.*?)</value>";
/// Pattern for the region description field.
const AREA_DESC_PATTERN: &str = r"<cap:areaDesc>(.*?)</cap:areaDesc>";
/// Pattern for the event type field.
const EVENT_PATTERN: &str = r"<cap:event>(.*?)</cap:event>";
/// Pattern for the start timestamp field.
const EFFECTIVE_PATTERN: &str = r"<cap:effective>(.*?)</cap:effective>";
/// Pattern for the end timestamp field.
const EXPIRES_PATTERN: &str = r"<cap:expires>(.*?)</cap:expires>";
/// Pattern for the severity field.
const SEVERITY_PATTERN: &str = r"<cap:severity>(.*?)</cap:severity>";

/// Result of one parse pass over a feed.
///
/// Carries the extracted records plus a count of field occurrences that were
/// dropped because their list was longer than the shortest one. A nonzero
/// [`ParseOutcome::discarded`] means the feed had unequal field counts and
/// some trailing values never made it into any record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Extracted records, sorted ascending by severity rank.
    pub records: Vec<AlertRecord>,
    /// Total field occurrences dropped by the minimum-length pairing.
    pub discarded: usize,
}

/// Extracts alert records from raw Meteoalarm CAP feed text.
///
/// Extraction is purely pattern-based: six independent scans collect every
/// occurrence of each field marker in document order, producing six ordered
/// lists. No tag-nesting validation is performed. The number of records is
/// the minimum length among the six lists; position `i` of each list is
/// zipped into record `i`, and trailing occurrences in longer lists are
/// dropped (and counted in [`ParseOutcome::discarded`]).
///
/// Parsing never fails. A feed where any field has zero matches yields an
/// empty outcome, so a malformed feed degrades to "no alerts" rather than
/// failing the caller.
///
/// # Examples
///
/// ```
/// # use meteomapa::alerts::FeedParser;
/// let parser = FeedParser::new();
/// let outcome = parser.parse("<entry>not a cap feed</entry>");
/// assert!(outcome.records.is_empty());
/// ```
pub struct FeedParser {
    /// Compiled pattern for `EMMA_ID` parameter values.
    emma_id: Regex,
    /// Compiled pattern for `<cap:areaDesc>`.
    area_desc: Regex,
    /// Compiled pattern for `<cap:event>`.
    event: Regex,
    /// Compiled pattern for `<cap:effective>`.
    effective: Regex,
    /// Compiled pattern for `<cap:expires>`.
    expires: Regex,
    /// Compiled pattern for `<cap:severity>`.
    severity: Regex,
}

impl FeedParser {
    /// Create a new [`FeedParser`] with all six field patterns compiled.
    pub fn new() -> Self {
        FeedParser {
            emma_id: Regex::new(EMMA_ID_PATTERN).expect("static pattern compiles"),
            area_desc: Regex::new(AREA_DESC_PATTERN).expect("static pattern compiles"),
            event: Regex::new(EVENT_PATTERN).expect("static pattern compiles"),
            effective: Regex::new(EFFECTIVE_PATTERN).expect("static pattern compiles"),
            expires: Regex::new(EXPIRES_PATTERN).expect("static pattern compiles"),
            severity: Regex::new(SEVERITY_PATTERN).expect("static pattern compiles"),
        }
    }

    /// Parses feed text into alert records sorted by severity rank.
    ///
    /// Records whose severity contains "extreme" come first, then "severe",
    /// then everything else. The sort is stable: records with equal rank keep
    /// their document order, so the table layout is reproducible for a given
    /// feed.
    ///
    /// # Arguments
    ///
    /// * `feed` - The full feed text, as read from the alert file.
    ///
    /// # Examples
    ///
    /// ```
    /// # use meteomapa::alerts::FeedParser;
    /// let feed = "\
    /// <valueName>EMMA_ID</valueName><value>ES511</value>\
    /// <cap:areaDesc>Girona</cap:areaDesc>\
    /// <cap:event>Wind</cap:event>\
    /// <cap:effective>2024-03-01T06:00:00+01:00</cap:effective>\
    /// <cap:expires>2024-03-01T18:00:00+01:00</cap:expires>\
    /// <cap:severity>Severe</cap:severity>";
    ///
    /// let outcome = FeedParser::new().parse(feed);
    /// assert_eq!(outcome.records.len(), 1);
    /// assert_eq!(outcome.records[0].emma_id, "ES511");
    /// ```
    pub fn parse(&self, feed: &str) -> ParseOutcome {
        let emma_ids = Self::collect(&self.emma_id, feed);
        let area_descs = Self::collect(&self.area_desc, feed);
        let events = Self::collect(&self.event, feed);
        let effectives = Self::collect(&self.effective, feed);
        let expires = Self::collect(&self.expires, feed);
        let severities = Self::collect(&self.severity, feed);

        let lengths = [
            emma_ids.len(),
            area_descs.len(),
            events.len(),
            effectives.len(),
            expires.len(),
            severities.len(),
        ];

        // The number of alerts is the minimum among the six lists
        let n = lengths.iter().copied().min().unwrap_or(0);
        let discarded = lengths.iter().sum::<usize>() - n * 6;

        if discarded > 0 {
            warn!(
                "unequal field counts {:?} in feed, dropping {} trailing occurrences",
                lengths, discarded
            );
        }

        let mut records: Vec<AlertRecord> = (0..n)
            .map(|i| AlertRecord {
                emma_id: emma_ids[i].clone(),
                severity: severities[i].clone(),
                area_desc: area_descs[i].clone(),
                event: events[i].clone(),
                effective: effectives[i].clone(),
                expires: expires[i].clone(),
            })
            .collect();

        // Stable sort keeps document order for records with the same rank
        records.sort_by_key(|record| record.cap_severity().rank());

        debug!("parsed {} alerts from feed", records.len());

        ParseOutcome { records, discarded }
    }

    /// Collects every capture of `pattern` over `feed`, in document order.
    fn collect(pattern: &Regex, feed: &str) -> Vec<String> {
        pattern
            .captures_iter(feed)
            .map(|captures| captures[1].to_string())
            .collect()
    }
}

impl Default for FeedParser {
    fn default() -> Self {
        FeedParser::new()
    }
}
