//! Meteoalarm alert extraction and ranking.
//!
//! This module turns raw CAP/Atom feed text into an ordered alert table. The
//! components are:
//!
//! - [`AlertRecord`]: one fully-populated weather alert
//! - [`CapSeverity`]: the extreme/severe/other rank class used for sorting
//! - [`FeedParser`]: the six-scan positional extractor
//! - [`render_table`]: plain-text rendering of the ranked records
//!
//! # Architecture
//!
//! The parser does not build a document tree. Each of the six fields is
//! scanned independently over the whole text, and the resulting lists are
//! zipped position by position into records, truncated to the shortest list.
//! This mirrors how the feed is actually laid out (one flat run of entries)
//! and degrades gracefully on malformed input: the worst case is fewer, or
//! zero, records — never a parse failure.
//!
//! # Example Usage
//!
//! ```
//! use meteomapa::alerts::{FeedParser, render_table};
//!
//! let feed = std::fs::read_to_string("meteoalarm-legacy-atom-spain.xml").unwrap_or_default();
//! let outcome = FeedParser::new().parse(&feed);
//!
//! if outcome.discarded > 0 {
//!     eprintln!("{} field values could not be paired", outcome.discarded);
//! }
//! print!("{}", render_table(&outcome.records));
//! ```

mod alert;
mod parser;
mod table;

pub use crate::alerts::alert::{AlertRecord, CapSeverity};
pub use crate::alerts::parser::{FeedParser, ParseOutcome};
pub use crate::alerts::table::render_table;
