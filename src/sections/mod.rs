//! Scroll-position section tracking
//!
//! Works out which page section is "active" from viewport-relative section
//! geometry. A section is active when its box straddles a fixed reference
//! line near the top of the viewport:
//!
//! ```text
//!   viewport row 0  ┌──────────────┐
//!                   │   header     │
//!   reference line ─┼──────────────┼─  first section with top <= line <= bottom
//!                   │   section    │
//! ```
//!
//! Both edges are inclusive, so when the line sits exactly on the border
//! between two sections the earlier one wins. When no section straddles the
//! line the tracker keeps whatever was active before. A viewport shorter than
//! the reference line samples its last row instead.

use rustc_hash::FxHashMap;
use tracing::debug;

/// Rows from the top of the viewport where the active section is sampled
pub const DEFAULT_REFERENCE_LINE: i64 = 3;

/// Scroll offset (in rows) past which the header counts as scrolled
pub const DEFAULT_SCROLLED_THRESHOLD: usize = 1;

/// Viewport-relative vertical extent of one section, in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub top: i64,
    pub bottom: i64,
}

impl SectionBounds {
    pub fn straddles(&self, line: i64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Index of the first section straddling `reference_line`
pub fn find_active(bounds: &[SectionBounds], reference_line: i64) -> Option<usize> {
    bounds.iter().position(|b| b.straddles(reference_line))
}

/// Remembers the active section across scroll updates and resolves anchors
#[derive(Debug, Clone)]
pub struct SectionTracker {
    ids: Vec<String>,
    anchors: FxHashMap<String, usize>,
    reference_line: i64,
    scrolled_threshold: usize,
    active: usize,
}

impl SectionTracker {
    pub fn new(ids: Vec<String>, reference_line: i64, scrolled_threshold: usize) -> Self {
        let mut anchors = FxHashMap::default();
        for (index, id) in ids.iter().enumerate() {
            // first definition of an id wins
            anchors.entry(id.clone()).or_insert(index);
        }

        SectionTracker {
            ids,
            anchors,
            reference_line,
            scrolled_threshold,
            active: 0,
        }
    }

    /// Recompute the active section for a viewport `viewport_height` rows
    /// tall. Returns true if it changed.
    pub fn update(&mut self, bounds: &[SectionBounds], viewport_height: usize) -> bool {
        match find_active(bounds, self.effective_reference_line(viewport_height)) {
            Some(index) if index != self.active => {
                debug!(
                    from = self.active_id().unwrap_or(""),
                    to = self.ids.get(index).map_or("", String::as_str),
                    "active section changed"
                );
                self.active = index;
                true
            }
            _ => false,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_id(&self) -> Option<&str> {
        self.ids.get(self.active).map(String::as_str)
    }

    /// Section index for an anchor such as `"about"` or `"#about"`
    pub fn anchor_index(&self, anchor: &str) -> Option<usize> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        self.anchors.get(id).copied()
    }

    /// Whether the page has scrolled far enough for the solid header style
    pub fn is_scrolled(&self, scroll_offset: usize) -> bool {
        scroll_offset > self.scrolled_threshold
    }

    pub fn reference_line(&self) -> i64 {
        self.reference_line
    }

    /// The reference line, pulled up onto the last row of a short viewport
    pub fn effective_reference_line(&self, viewport_height: usize) -> i64 {
        let last_row = i64::try_from(viewport_height)
            .unwrap_or(i64::MAX)
            .saturating_sub(1)
            .max(0);
        self.reference_line.min(last_row)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(height: i64, count: usize, scroll: i64) -> Vec<SectionBounds> {
        (0..count as i64)
            .map(|i| SectionBounds {
                top: i * height - scroll,
                bottom: (i + 1) * height - scroll,
            })
            .collect()
    }

    fn tracker() -> SectionTracker {
        SectionTracker::new(
            vec![
                "home".to_string(),
                "about".to_string(),
                "portfolio".to_string(),
            ],
            DEFAULT_REFERENCE_LINE,
            DEFAULT_SCROLLED_THRESHOLD,
        )
    }

    #[test]
    fn test_find_active_at_top() {
        assert_eq!(find_active(&stacked(20, 3, 0), 3), Some(0));
    }

    #[test]
    fn test_find_active_boundary_is_inclusive() {
        // home spans -17..=3, about spans 3..=23: the line touches both
        assert_eq!(find_active(&stacked(20, 3, 17), 3), Some(0));
        // one more row and home's bottom is above the line
        assert_eq!(find_active(&stacked(20, 3, 18), 3), Some(1));
    }

    #[test]
    fn test_find_active_none() {
        let bounds = [SectionBounds { top: 10, bottom: 20 }];
        assert_eq!(find_active(&bounds, 3), None);
        assert_eq!(find_active(&[], 3), None);
    }

    #[test]
    fn test_update_keeps_previous_when_nothing_matches() {
        let mut t = tracker();
        assert!(t.update(&stacked(20, 3, 25), 20));
        assert_eq!(t.active_id(), Some("about"));

        assert!(!t.update(&[SectionBounds { top: 50, bottom: 60 }], 20));
        assert_eq!(t.active_id(), Some("about"));
    }

    #[test]
    fn test_short_viewport_samples_last_row() {
        let mut t = tracker();
        assert_eq!(t.effective_reference_line(24), 3);
        assert_eq!(t.effective_reference_line(2), 1);
        assert_eq!(t.effective_reference_line(0), 0);

        // two-row sections at the top: row 3 would land in "about"
        assert!(!t.update(&stacked(2, 3, 0), 2));
        assert_eq!(t.active_id(), Some("home"));

        assert!(t.update(&stacked(2, 3, 2), 2));
        assert_eq!(t.active_id(), Some("about"));
    }

    #[test]
    fn test_anchor_lookup() {
        let t = tracker();
        assert_eq!(t.anchor_index("portfolio"), Some(2));
        assert_eq!(t.anchor_index("#about"), Some(1));
        assert_eq!(t.anchor_index("blog"), None);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let t = SectionTracker::new(
            vec!["a".to_string(), "b".to_string(), "a".to_string()],
            0,
            0,
        );
        assert_eq!(t.anchor_index("a"), Some(0));
    }

    #[test]
    fn test_is_scrolled_threshold() {
        let t = tracker();
        assert!(!t.is_scrolled(0));
        assert!(!t.is_scrolled(1));
        assert!(t.is_scrolled(2));
    }
}
