//! Landing page model
//!
//! [`Landing`] owns everything the page shows and all of its moving parts:
//! - the header (logo and navigation links to section anchors)
//! - the hero section, with its [`Typewriter`] title and [`CaptionRotator`]
//! - the placeholder sections below the hero
//! - the scroll offset and the [`SectionTracker`] that follows it
//!
//! # Layout
//!
//! Every section is exactly one viewport tall and sections are stacked in
//! page order, hero first:
//!
//! ```text
//! row 0        ┌ home (hero) ┐
//! row h        ├ about       ┤
//! row 2h       ├ portfolio   ┤
//! row 3h       └ contact     ┘
//! ```
//!
//! # Lifecycle
//!
//! [`Landing::mount`] starts both animations; [`Landing::unmount`] cancels
//! them. Unmounting twice is harmless, and a landing page cannot be mounted
//! again once it has been unmounted.

use crate::anim::{CaptionRotator, ConfigError, Millis, PhraseList, Typewriter};
use crate::config::{Config, Link, SectionSettings};
use crate::sections::{SectionBounds, SectionTracker};
use tracing::{debug, info};

/// Anchor of the hero section
pub const HOME_ID: &str = "home";

/// The hero section: animated title and caption plus static content
#[derive(Debug, Clone)]
pub struct Hero {
    pub typewriter: Typewriter,
    pub captions: CaptionRotator,
    pub badge: String,
    pub tech_tags: Vec<String>,
    pub actions: Vec<Link>,
    pub socials: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Unmounted,
    Mounted,
    TornDown,
}

/// The whole landing page
#[derive(Debug, Clone)]
pub struct Landing {
    pub logo: String,
    pub nav: Vec<Link>,
    pub hero: Hero,
    pub sections: Vec<SectionSettings>,

    tracker: SectionTracker,
    viewport_height: usize,
    scroll: usize,
    lifecycle: Lifecycle,
}

impl Landing {
    /// Build the page from configuration. Fails only on invalid timings.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let typewriter = Typewriter::new(
            PhraseList::new(config.typewriter.phrases.iter().cloned()),
            config.typewriter.engine_config(),
        )?;
        let captions = CaptionRotator::new(
            config.captions.items.clone(),
            config.captions.interval_ms,
            config.captions.fallback.clone(),
        )?;

        let ids = std::iter::once(HOME_ID.to_string())
            .chain(config.sections.iter().map(|s| s.id.clone()))
            .collect();
        let tracker = SectionTracker::new(
            ids,
            config.header.reference_line,
            config.header.scrolled_threshold,
        );

        Ok(Landing {
            logo: config.header.logo.clone(),
            nav: config.header.nav.clone(),
            hero: Hero {
                typewriter,
                captions,
                badge: config.hero.badge.clone(),
                tech_tags: config.hero.tech_tags.clone(),
                actions: config.hero.actions.clone(),
                socials: config.hero.socials.clone(),
            },
            sections: config.sections.clone(),
            tracker,
            viewport_height: 1,
            scroll: 0,
            lifecycle: Lifecycle::Unmounted,
        })
    }

    /// Start the hero animations at `now`
    pub fn mount(&mut self, now: Millis) {
        if self.lifecycle != Lifecycle::Unmounted {
            return;
        }
        self.lifecycle = Lifecycle::Mounted;
        self.hero.typewriter.start(now);
        self.hero.captions.start(now);
        info!(sections = self.section_count(), "landing page mounted");
    }

    /// Cancel every pending animation timer
    pub fn unmount(&mut self) {
        self.hero.typewriter.cancel();
        self.hero.captions.cancel();
        if self.lifecycle != Lifecycle::TornDown {
            self.lifecycle = Lifecycle::TornDown;
            info!("landing page unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Run both animations up to `now`. Returns the number of changes.
    pub fn advance_to(&mut self, now: Millis) -> usize {
        if self.lifecycle != Lifecycle::Mounted {
            return 0;
        }
        self.hero.typewriter.advance_to(now) + self.hero.captions.advance_to(now)
    }

    /// Earliest pending animation deadline
    pub fn next_deadline(&self) -> Option<Millis> {
        match (
            self.hero.typewriter.next_deadline(),
            self.hero.captions.next_deadline(),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Set the viewport height in rows. Sections resize with it.
    pub fn resize(&mut self, height: usize) {
        let height = height.max(1);
        if height != self.viewport_height {
            debug!(height, "viewport resized");
            self.viewport_height = height;
        }
        self.scroll_to(self.scroll);
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Number of sections including the hero
    pub fn section_count(&self) -> usize {
        1 + self.sections.len()
    }

    pub fn document_height(&self) -> usize {
        self.section_count() * self.viewport_height
    }

    pub fn max_scroll(&self) -> usize {
        self.document_height().saturating_sub(self.viewport_height)
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Scroll to an absolute row, clamped to the document
    pub fn scroll_to(&mut self, offset: usize) {
        self.scroll = offset.min(self.max_scroll());
        let bounds = self.section_bounds();
        self.tracker.update(&bounds, self.viewport_height);
    }

    /// Scroll by `delta` rows (negative scrolls up)
    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta as usize)
        };
        self.scroll_to(target);
    }

    /// Scroll so the section for `anchor` starts at the top of the viewport.
    /// Returns false for an unknown anchor.
    pub fn jump_to(&mut self, anchor: &str) -> bool {
        match self.tracker.anchor_index(anchor) {
            Some(index) => {
                debug!(anchor, index, "jumping to section");
                self.scroll_to(self.section_top(index));
                true
            }
            None => {
                debug!(anchor, "unknown anchor");
                false
            }
        }
    }

    /// Document row where section `index` begins
    pub fn section_top(&self, index: usize) -> usize {
        index * self.viewport_height
    }

    /// Viewport-relative bounds of every section, hero first
    pub fn section_bounds(&self) -> Vec<SectionBounds> {
        let height = self.viewport_height as i64;
        let scroll = self.scroll as i64;
        (0..self.section_count() as i64)
            .map(|i| SectionBounds {
                top: i * height - scroll,
                bottom: (i + 1) * height - scroll,
            })
            .collect()
    }

    pub fn active_section(&self) -> usize {
        self.tracker.active()
    }

    pub fn active_id(&self) -> &str {
        self.tracker.active_id().unwrap_or(HOME_ID)
    }

    pub fn is_header_scrolled(&self) -> bool {
        self.tracker.is_scrolled(self.scroll)
    }

    /// Index into `nav` of the link for the active section, if any
    pub fn active_nav(&self) -> Option<usize> {
        let active = self.active_id();
        self.nav
            .iter()
            .position(|link| link.anchor.trim_start_matches('#') == active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landing() -> Landing {
        let mut landing = Landing::from_config(&Config::default()).unwrap();
        landing.resize(20);
        landing
    }

    #[test]
    fn test_layout() {
        let l = landing();
        assert_eq!(l.section_count(), 4);
        assert_eq!(l.document_height(), 80);
        assert_eq!(l.max_scroll(), 60);
        assert_eq!(l.active_id(), "home");
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut l = landing();
        l.scroll_by(-5);
        assert_eq!(l.scroll_offset(), 0);
        l.scroll_by(1000);
        assert_eq!(l.scroll_offset(), 60);
        assert_eq!(l.active_id(), "contact");
    }

    #[test]
    fn test_jump_to_anchor() {
        let mut l = landing();
        assert!(l.jump_to("#portfolio"));
        assert_eq!(l.scroll_offset(), 40);
        assert_eq!(l.active_id(), "portfolio");
        assert_eq!(l.active_nav(), Some(2));

        assert!(!l.jump_to("blog"));
        assert_eq!(l.scroll_offset(), 40);
    }

    #[test]
    fn test_resize_clamps_scroll() {
        let mut l = landing();
        l.scroll_to(60);
        l.resize(10);
        assert_eq!(l.scroll_offset(), 30);
    }

    #[test]
    fn test_tiny_viewport_tracks_sections() {
        let mut l = landing();
        l.resize(2);
        l.scroll_to(0);
        assert_eq!(l.active_id(), "home");

        assert!(l.jump_to("about"));
        assert_eq!(l.active_id(), "about");
        l.resize(1);
        assert_eq!(l.active_id(), "about");
    }

    #[test]
    fn test_header_scrolled() {
        let mut l = landing();
        assert!(!l.is_header_scrolled());
        l.scroll_by(2);
        assert!(l.is_header_scrolled());
    }

    #[test]
    fn test_not_mounted_does_not_advance() {
        let mut l = landing();
        assert_eq!(l.advance_to(10_000), 0);
        assert_eq!(l.hero.typewriter.text(), "");
    }

    #[test]
    fn test_next_deadline_is_earliest() {
        let mut l = landing();
        l.mount(0);
        assert_eq!(l.next_deadline(), Some(100));
    }

    #[test]
    fn test_unmount_is_idempotent_and_final() {
        let mut l = landing();
        l.mount(0);
        l.advance_to(300);
        let before = l.hero.typewriter.text().to_string();

        l.unmount();
        l.unmount();
        l.mount(400);
        assert!(!l.is_mounted());
        assert_eq!(l.advance_to(100_000), 0);
        assert_eq!(l.hero.typewriter.text(), before);
        assert_eq!(l.next_deadline(), None);
    }
}
