//! Ranking Engine for SiteDock.
//!
//! Derives the top-N most-frequently-visited URLs from the history log and
//! resolves each to a human-readable display name. Pure functions over
//! explicit data: nothing here reads or mutates storage.

use std::collections::HashMap;

use crate::types::catalog::Catalog;
use crate::types::history::VisitRecord;
use crate::types::ranking::{DockEntry, RankedWebsite};

/// Aggregates visit counts per distinct URL and returns the top `n`,
/// sorted by count descending.
///
/// Equal counts are broken by first occurrence in the log: since the log is
/// most-recent-first, ties go to the more recently visited URL. This makes
/// the ordering deterministic where the original behavior depended on
/// object-key enumeration order.
pub fn top_visited(log: &[VisitRecord], n: usize) -> Vec<RankedWebsite> {
    let mut counts: HashMap<&str, (u32, usize)> = HashMap::new();
    for (index, record) in log.iter().enumerate() {
        let slot = counts.entry(record.url.as_str()).or_insert((0, index));
        slot.0 += 1;
    }

    let mut ranked: Vec<(&str, u32, usize)> = counts
        .into_iter()
        .map(|(url, (count, first_index))| (url, count, first_index))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(n);

    ranked
        .into_iter()
        .map(|(url, count, _)| RankedWebsite {
            url: url.to_string(),
            count,
        })
        .collect()
}

/// Produces the quick-access dock: the top `n` ranked URLs with resolved
/// display names. An empty log yields an empty dock, which the renderer
/// hides entirely.
pub fn dock_entries(catalog: &Catalog, log: &[VisitRecord], n: usize) -> Vec<DockEntry> {
    top_visited(log, n)
        .into_iter()
        .map(|ranked| DockEntry {
            name: resolve_display_name(catalog, &ranked.url),
            url: ranked.url,
            count: ranked.count,
        })
        .collect()
}

/// Resolves a display name for `url`: the catalog name on an exact URL
/// match, else the URL's host component, else the raw URL string.
///
/// Never fails: a URL that cannot be parsed just degrades to a less
/// precise label.
pub fn resolve_display_name(catalog: &Catalog, url: &str) -> String {
    if let Some(website) = catalog.find_website_by_url(url) {
        return website.name.clone();
    }
    host_from_url(url).unwrap_or_else(|| url.to_string())
}

/// Extracts the host component of an absolute URL, without credentials or
/// port. Returns `None` when there is no scheme or no host.
fn host_from_url(url: &str) -> Option<String> {
    let rest = url.split_once("://")?.1;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let host = host.split(':').next()?;
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
