//! Keyed marker diff
//!
//! Splits a new marker set against the keys currently on screen into
//! exit / update / enter groups, keyed by IP.

use std::collections::HashSet;

use super::types::ThreatMarker;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerDiff {
    /// Keys on screen that are absent from the new set
    pub removed: Vec<String>,
    /// Markers already on screen; reposition, do not recreate
    pub updated: Vec<ThreatMarker>,
    /// Markers to create
    pub entered: Vec<ThreatMarker>,
}

impl MarkerDiff {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.updated.is_empty() && self.entered.is_empty()
    }
}

/// Diff `next` against the keys currently rendered.
///
/// Within `next`, the first marker for a given IP wins; later duplicates are
/// dropped. Output order follows `current` for removals and `next` otherwise.
pub fn diff_markers<'a, I>(current: I, next: Vec<ThreatMarker>) -> MarkerDiff
where
    I: IntoIterator<Item = &'a str>,
{
    let current: Vec<&str> = current.into_iter().collect();
    let on_screen: HashSet<&str> = current.iter().copied().collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut diff = MarkerDiff::default();

    for marker in next {
        if !seen.insert(marker.ip.clone()) {
            continue;
        }
        if on_screen.contains(marker.ip.as_str()) {
            diff.updated.push(marker);
        } else {
            diff.entered.push(marker);
        }
    }

    diff.removed = current
        .into_iter()
        .filter(|key| !seen.contains(*key))
        .map(str::to_string)
        .collect();

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::threat::types::Risk;

    fn marker(ip: &str, lat: f64) -> ThreatMarker {
        ThreatMarker::new(ip, "XX", Risk::Malicious, lat, 0.0)
    }

    fn ips(markers: &[ThreatMarker]) -> Vec<&str> {
        markers.iter().map(|m| m.ip.as_str()).collect()
    }

    #[test]
    fn test_ab_to_bc() {
        let diff = diff_markers(["A", "B"], vec![marker("B", 10.0), marker("C", 20.0)]);
        assert_eq!(diff.removed, vec!["A".to_string()]);
        assert_eq!(ips(&diff.updated), vec!["B"]);
        assert_eq!(diff.updated[0].lat, 10.0);
        assert_eq!(ips(&diff.entered), vec!["C"]);
    }

    #[test]
    fn test_first_render_enters_everything() {
        let diff = diff_markers(std::iter::empty(), vec![marker("A", 0.0), marker("B", 0.0)]);
        assert!(diff.removed.is_empty());
        assert!(diff.updated.is_empty());
        assert_eq!(ips(&diff.entered), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_next_removes_everything() {
        let diff = diff_markers(["A", "B"], Vec::new());
        assert_eq!(diff.removed, vec!["A".to_string(), "B".to_string()]);
        assert!(diff.entered.is_empty());
    }

    #[test]
    fn test_duplicate_keys_first_wins() {
        let diff = diff_markers(["A"], vec![marker("A", 1.0), marker("A", 2.0), marker("C", 3.0), marker("C", 4.0)]);
        assert_eq!(ips(&diff.updated), vec!["A"]);
        assert_eq!(diff.updated[0].lat, 1.0);
        assert_eq!(ips(&diff.entered), vec!["C"]);
        assert_eq!(diff.entered[0].lat, 3.0);
        assert!(diff.removed.is_empty());
    }

    #[test]
    fn test_identical_set_only_updates() {
        let diff = diff_markers(["A", "B"], vec![marker("A", 0.0), marker("B", 0.0)]);
        assert!(diff.removed.is_empty());
        assert!(diff.entered.is_empty());
        assert_eq!(diff.updated.len(), 2);
        assert!(!diff.is_empty());
    }
}
