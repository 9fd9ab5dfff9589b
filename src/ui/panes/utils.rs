//! Text layout helpers shared by the panes

use ratatui::text::Line;
use textwrap::{Options, WrapAlgorithm};
use unicode_width::UnicodeWidthStr;

/// Greedy word wrap to `width` terminal columns. Words wider than a line
/// are split.
pub(crate) fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let options = Options::new(width.max(1)).wrap_algorithm(WrapAlgorithm::FirstFit);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Display width of `text` in terminal columns, saturating at `u16::MAX`
pub(crate) fn column_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Pad `content` with blank lines above and below so it fills exactly
/// `height` rows with the content in the middle. Content taller than
/// `height` is cut at the bottom.
pub(crate) fn center_vertically(
    mut content: Vec<Line<'static>>,
    height: usize,
) -> Vec<Line<'static>> {
    content.truncate(height);
    let top = (height - content.len()) / 2;
    let bottom = height - content.len() - top;

    let mut lines = Vec::with_capacity(height);
    lines.extend(std::iter::repeat_with(Line::default).take(top));
    lines.append(&mut content);
    lines.extend(std::iter::repeat_with(Line::default).take(bottom));
    lines
}
