//! Page body rendering
//!
//! The page is drawn as one tall column of lines, one viewport-height block
//! per section, and then scrolled by the landing page's scroll offset. The
//! hero block carries the live typewriter title and the current caption.
//!
//! # Hero Layout
//!
//! ```text
//!        ✨ Ready to innovate
//!
//!             Software
//!             Engineer▌
//!
//!   Building Modern, Full-Stack, and ...
//!
//!   [React JS] [Next JS] [Node JS] ...
//!
//!    [p] Projects     [c] Contact
//!
//!          Gi   Li   Tw
//! ```

use super::utils::{center_vertically, wrap_words};
use crate::config::SectionSettings;
use crate::page::{Hero, Landing};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Widest the caption is allowed to wrap to
const MAX_CAPTION_WIDTH: usize = 72;

/// Title rows reserved even when the typed text is shorter, so the caption
/// below it does not jump while typing
const TITLE_ROWS: usize = 2;

const CURSOR: &str = "▌";

/// Render the scrolled page body
pub fn render_page(frame: &mut Frame, area: Rect, landing: &Landing, cursor_visible: bool) {
    let width = area.width as usize;
    let height = landing.viewport_height();

    let mut lines = hero_lines(&landing.hero, width, height, cursor_visible);
    for (i, section) in landing.sections.iter().enumerate() {
        lines.extend(section_lines(section, height, i % 2 == 0));
    }

    let scroll = landing.scroll_offset().min(u16::MAX as usize) as u16;
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(DEFAULT_THEME.bg).fg(DEFAULT_THEME.fg))
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

/// Exactly `height` lines for the hero section
pub fn hero_lines(
    hero: &Hero,
    width: usize,
    height: usize,
    cursor_visible: bool,
) -> Vec<Line<'static>> {
    let mut content: Vec<Line<'static>> = Vec::new();

    if !hero.badge.is_empty() {
        content.push(centered(vec![Span::styled(
            format!(" {} ", hero.badge),
            Style::default()
                .bg(DEFAULT_THEME.badge_bg)
                .fg(DEFAULT_THEME.primary),
        )]));
        content.push(Line::default());
    }

    content.extend(title_lines(hero, cursor_visible));
    content.push(Line::default());

    // Reserve room for the longest caption so rotation does not shift the page
    let caption_width = width.saturating_sub(4).clamp(1, MAX_CAPTION_WIDTH);
    let caption_rows = hero
        .captions
        .captions()
        .iter()
        .map(|c| wrap_words(c, caption_width).len())
        .max()
        .unwrap_or(1);
    let mut caption = wrap_words(hero.captions.current(), caption_width);
    caption.resize(caption_rows.max(caption.len()), String::new());
    for row in caption {
        content.push(centered(vec![Span::styled(
            row,
            Style::default().fg(DEFAULT_THEME.comment),
        )]));
    }

    if !hero.tech_tags.is_empty() {
        content.push(Line::default());
        let mut spans = Vec::new();
        for (i, tag) in hero.tech_tags.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {} ", tag),
                Style::default()
                    .bg(DEFAULT_THEME.tag_bg)
                    .fg(DEFAULT_THEME.accent),
            ));
        }
        content.push(centered(spans));
    }

    if !hero.actions.is_empty() {
        content.push(Line::default());
        let mut spans = Vec::new();
        for (i, action) in hero.actions.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if i == 0 {
                Style::default()
                    .bg(DEFAULT_THEME.primary)
                    .fg(DEFAULT_THEME.button_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled(
                format!(" {} ", action_label(&action.label)),
                style,
            ));
        }
        content.push(centered(spans));
    }

    if !hero.socials.is_empty() {
        content.push(Line::default());
        let mut spans = Vec::new();
        for (i, platform) in hero.socials.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let short: String = platform.chars().take(2).collect();
            spans.push(Span::styled(
                format!("({})", short),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        content.push(centered(spans));
    }

    center_vertically(content, height)
}

/// Exactly `height` lines for a placeholder section
pub fn section_lines(
    section: &SectionSettings,
    height: usize,
    alternate: bool,
) -> Vec<Line<'static>> {
    let bg = if alternate {
        DEFAULT_THEME.section_alt_bg
    } else {
        DEFAULT_THEME.bg
    };

    let mut content = vec![centered(vec![Span::styled(
        section.title.clone(),
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD),
    )])];
    if !section.body.is_empty() {
        content.push(Line::default());
        content.push(centered(vec![Span::styled(
            section.body.clone(),
            Style::default().fg(DEFAULT_THEME.comment),
        )]));
    }

    center_vertically(content, height)
        .into_iter()
        .map(|line| line.style(Style::default().bg(bg)))
        .collect()
}

/// Hint shown on a call to action: `Projects` becomes `[p] Projects`
fn action_label(label: &str) -> String {
    match label.chars().next() {
        Some(c) => format!("[{}] {}", c.to_lowercase(), label),
        None => String::new(),
    }
}

fn centered(spans: Vec<Span<'static>>) -> Line<'static> {
    Line::from(spans).alignment(Alignment::Center)
}

/// The typed title, one line per `\n`-separated part. The first part is
/// plain, later parts use the accent color. The cursor follows the text.
fn title_lines(hero: &Hero, cursor_visible: bool) -> Vec<Line<'static>> {
    let typewriter = &hero.typewriter;
    let text = typewriter.display_text();
    let parts: Vec<&str> = text.split('\n').collect();
    let last = parts.len() - 1;

    let mut lines: Vec<Line<'static>> = parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let color = if i == 0 {
                DEFAULT_THEME.fg
            } else {
                DEFAULT_THEME.accent
            };
            let mut spans = vec![Span::styled(
                part.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )];
            if i == last && !typewriter.is_idle() {
                let cursor = if cursor_visible { CURSOR } else { " " };
                spans.push(Span::styled(
                    cursor,
                    Style::default().fg(DEFAULT_THEME.primary),
                ));
            }
            centered(spans)
        })
        .collect();

    while lines.len() < TITLE_ROWS {
        lines.push(Line::default());
    }
    lines
}
