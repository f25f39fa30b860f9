//! The resolution engine: runtime properties in, candidate boards out.
//!
//! A pure read over an immutable catalog snapshot. There are no error
//! states: zero matches means "unknown board" and multiple matches mean
//! the caller disambiguates (generic clones legitimately share
//! identification properties).

use crate::catalog::{Catalog, InstalledBoard};
use crate::properties::PropertyMap;

/// Return every installed board whose identification rule is fully
/// satisfied by `query`.
///
/// Results keep catalog enumeration order and borrow from the catalog
/// snapshot; nothing is copied or deduplicated, and no priority is
/// applied among multiple matches.
///
/// An empty `query` matches nothing, not everything — this guards
/// against a caller accidentally passing no discovery data and getting
/// back every installed board.
pub fn identify<'c>(catalog: &'c Catalog, query: &PropertyMap) -> Vec<InstalledBoard<'c>> {
    if query.is_empty() {
        return Vec::new();
    }
    catalog
        .installed_boards()
        .filter(|installed| installed.board.matches_identification(query))
        .collect()
}
