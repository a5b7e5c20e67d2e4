//! Region index helpers.
//!
//! Regions are identified by zero-padded codes (`R01` through `R40` by
//! default), and each region's polygons live in a local GeoJSON file named
//! after its code. Alert feeds are plain downloads from Meteoalarm and are
//! recognized by their file name prefix.

/// Returns the region codes `R01..R{count}`, zero-padded to two digits.
///
/// # Examples
///
/// ```
/// # use meteomapa::regions::region_ids;
/// let regions = region_ids(40);
/// assert_eq!(regions.first().unwrap(), "R01");
/// assert_eq!(regions.last().unwrap(), "R40");
/// ```
pub fn region_ids(count: u32) -> Vec<String> {
    (1..=count).map(|i| format!("R{:02}", i)).collect()
}

/// Returns the GeoJSON file name for a region code.
pub fn geojson_filename(region: &str) -> String {
    format!("{region}.geojson")
}

/// Checks whether a file name looks like a Meteoalarm alert feed download.
///
/// The check is a plain prefix test on the file name, matching how the
/// feeds are published (e.g. `meteoalarm-legacy-atom-spain`).
pub fn is_alert_feed(file_name: &str, prefix: &str) -> bool {
    file_name.starts_with(prefix)
}
