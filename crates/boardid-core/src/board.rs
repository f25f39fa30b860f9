//! Board definitions and their derived identification rules.
//!
//! A board's identification rule is never stored separately: it is
//! computed on demand from the board's configuration by selecting the
//! identification keys (`vid.<n>` / `pid.<n>`) and grouping them by
//! their trailing numeric index. Each group is one alternative physical
//! identity — a board sold under several VID/PID pairs across hardware
//! revisions declares one group per pair.

use std::collections::BTreeMap;

use crate::properties::PropertyMap;

/// Property names that participate in board identification, per the
/// authoritative board-definition format.
pub const IDENTIFICATION_PROPERTIES: &[&str] = &["vid", "pid"];

/// A concrete hardware target definition.
///
/// Owns its full declared configuration, including menu options, upload
/// parameters, and identification keys. The parent platform holds the
/// board; the board holds no back-reference.
#[derive(Debug, Clone)]
pub struct Board {
    /// Board identifier within its platform (e.g. `uno`).
    pub board_id: String,
    /// Human-readable display name.
    pub name: String,
    /// Full declared configuration.
    pub properties: PropertyMap,
}

impl Board {
    /// Create a board from its identifier and configuration sub-tree.
    pub fn new(board_id: &str, name: &str, properties: PropertyMap) -> Self {
        Board {
            board_id: board_id.to_string(),
            name: name.to_string(),
            properties,
        }
    }

    /// The board's alternative identification groups, in ascending group
    /// index order.
    ///
    /// Each group is the restriction of the board's configuration to the
    /// identification keys sharing one numeric suffix (`vid.0`/`pid.0`
    /// form group 0). Keys keep their full dotted form. Every returned
    /// group is non-empty; a board that declares no identification keys
    /// returns no groups.
    pub fn identification_groups(&self) -> Vec<PropertyMap> {
        let mut groups: BTreeMap<u32, PropertyMap> = BTreeMap::new();
        for (key, value) in self.properties.iter() {
            let Some((base, suffix)) = key.rsplit_once('.') else {
                continue;
            };
            if !IDENTIFICATION_PROPERTIES.contains(&base) {
                continue;
            }
            let Ok(index) = suffix.parse::<u32>() else {
                continue;
            };
            groups.entry(index).or_default().insert(key, value);
        }
        groups.into_values().collect()
    }

    /// Check whether this board matches the given runtime identification
    /// properties.
    ///
    /// True iff at least one identification group is fully satisfied:
    /// every key of the group present in `query` with an identical value.
    /// Extra keys in `query` are ignored. A board with no identification
    /// groups never matches, independent of input.
    pub fn matches_identification(&self, query: &PropertyMap) -> bool {
        self.identification_groups()
            .iter()
            .any(|group| group.iter().all(|(k, v)| query.get(k) == Some(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(pairs: &[(&str, &str)]) -> Board {
        let props: PropertyMap = pairs.iter().copied().collect();
        Board::new("test", "Test Board", props)
    }

    #[test]
    fn groups_split_by_numeric_suffix() {
        let b = board(&[
            ("name", "Test Board"),
            ("vid.0", "0x2341"),
            ("pid.0", "0x0043"),
            ("vid.1", "0x2A03"),
            ("pid.1", "0x0043"),
        ]);
        let groups = b.identification_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].get("vid.0"), Some("0x2341"));
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1].get("vid.1"), Some("0x2A03"));
    }

    #[test]
    fn non_identification_keys_ignored() {
        let b = board(&[
            ("vid.0", "0x2341"),
            ("pid.0", "0x0043"),
            ("upload.tool", "avrdude"),
            ("menu.cpu.atmega328", "ATmega328P"),
            ("bootloader.0", "x"),
        ]);
        let groups = b.identification_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn suffixless_keys_form_no_group() {
        let b = board(&[("vid", "0x2341"), ("pid", "0x0043")]);
        assert!(b.identification_groups().is_empty());
    }

    #[test]
    fn matches_exact_group() {
        let b = board(&[("vid.0", "0x2341"), ("pid.0", "0x0043")]);
        let query: PropertyMap = [("vid.0", "0x2341"), ("pid.0", "0x0043")]
            .into_iter()
            .collect();
        assert!(b.matches_identification(&query));
    }

    #[test]
    fn extra_query_keys_do_not_prevent_match() {
        let b = board(&[("vid.0", "2341"), ("pid.0", "0043")]);
        let query: PropertyMap = [("vid.0", "2341"), ("pid.0", "0043"), ("serial", "AB12")]
            .into_iter()
            .collect();
        assert!(b.matches_identification(&query));
    }

    #[test]
    fn partial_group_does_not_match() {
        let b = board(&[("vid.0", "2341"), ("pid.0", "0043")]);
        let query: PropertyMap = [("vid.0", "2341")].into_iter().collect();
        assert!(!b.matches_identification(&query));
    }

    #[test]
    fn unequal_value_does_not_match() {
        let b = board(&[("vid.0", "2341"), ("pid.0", "0043")]);
        let query: PropertyMap = [("vid.0", "2341"), ("pid.0", "0099")].into_iter().collect();
        assert!(!b.matches_identification(&query));
    }

    #[test]
    fn any_alternative_group_matches() {
        let b = board(&[
            ("vid.0", "0x2341"),
            ("pid.0", "0x0043"),
            ("vid.1", "0x2A03"),
            ("pid.1", "0x0043"),
        ]);
        let query: PropertyMap = [("vid.1", "0x2A03"), ("pid.1", "0x0043")]
            .into_iter()
            .collect();
        assert!(b.matches_identification(&query));
    }

    #[test]
    fn board_without_groups_never_matches() {
        let b = board(&[("name", "Plain"), ("upload.tool", "avrdude")]);
        let query: PropertyMap = [("vid.0", "0x2341")].into_iter().collect();
        assert!(!b.matches_identification(&query));
        assert!(!b.matches_identification(&PropertyMap::new()));
    }
}
