//! Fixed header rendering
//!
//! Drawn on top of the page body. While the page sits at the top the header
//! is transparent; once scrolled past the threshold it gets a solid
//! background and a bottom border. The nav link for the active section is
//! highlighted.

use super::utils::column_width;
use crate::page::Landing;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Rows taken by the header, including its border
pub const HEADER_HEIGHT: u16 = 3;

/// Render the header over `area`
pub fn render_header(frame: &mut Frame, area: Rect, landing: &Landing) {
    let block = if landing.is_header_scrolled() {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(DEFAULT_THEME.tag_bg))
            .style(Style::default().bg(DEFAULT_THEME.header_solid_bg))
    } else {
        Block::default()
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let logo_width = column_width(&landing.logo).saturating_add(4);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(logo_width), Constraint::Min(0)])
        .split(inner);

    let logo = Paragraph::new(Line::from(Span::styled(
        format!("  {}", landing.logo),
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(logo, vertical_middle(columns[0]));

    let active = landing.active_nav();
    let mut spans = Vec::new();
    for (i, link) in landing.nav.iter().enumerate() {
        let style = if Some(i) == active {
            Style::default()
                .fg(DEFAULT_THEME.nav_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(DEFAULT_THEME.nav_normal)
        };
        spans.push(Span::styled(
            format!("{} ", i + 1),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        spans.push(Span::styled(link.label.clone(), style));
        spans.push(Span::raw("   "));
    }

    let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    frame.render_widget(nav, vertical_middle(columns[1]));
}

/// The middle row of `area`
fn vertical_middle(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}
