//! Main TUI application state and logic

use crate::anim::{Clock, Millis};
use crate::page::Landing;
use crate::ui::panes::header::HEADER_HEIGHT;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io;
use std::time::Duration;
use tracing::debug;

/// Longest the loop sleeps waiting for input
const MAX_POLL: Duration = Duration::from_millis(50);

/// Cursor blink half-period
const CURSOR_BLINK_MS: Millis = 530;

/// The main application state
pub struct App<C: Clock> {
    /// The page being shown
    pub landing: Landing,

    /// Time source driving the animations
    clock: C,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Blink phase of the typing cursor
    pub cursor_visible: bool,
}

impl<C: Clock> App<C> {
    /// Create a new app for the given landing page
    pub fn new(landing: Landing, clock: C) -> Self {
        App {
            landing,
            clock,
            should_quit: false,
            status_message: String::from("Ready!"),
            cursor_visible: true,
        }
    }

    /// Run the TUI application. The page is mounted for the duration of the
    /// call and unmounted on the way out, even on error.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.landing.mount(self.clock.now_ms());
        let result = self.event_loop(terminal);
        self.landing.unmount();
        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let now = self.clock.now_ms();
            self.tick(now);

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Sleep until the next animation deadline, input, or MAX_POLL
            let timeout = self
                .landing
                .next_deadline()
                .map(|due| Duration::from_millis(due.saturating_sub(now)))
                .map_or(MAX_POLL, |wait| wait.min(MAX_POLL));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Advance animations to `now`. Returns the number of state changes.
    pub fn tick(&mut self, now: Millis) -> usize {
        self.cursor_visible = (now / CURSOR_BLINK_MS) % 2 == 0;
        self.landing.advance_to(now)
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Page body, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let page_area = main_chunks[0];
        let status_area = main_chunks[1];

        self.landing.resize(page_area.height as usize);

        super::panes::render_page(frame, page_area, &self.landing, self.cursor_visible);

        // Header is fixed and drawn over the top of the page
        let header_area = Rect {
            height: HEADER_HEIGHT.min(page_area.height),
            ..page_area
        };
        super::panes::render_header(frame, header_area, &self.landing);

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            &self.landing,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let page = self.landing.viewport_height() as isize;

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::PageDown => self.scroll_by(page),
            KeyCode::Home => {
                self.landing.scroll_to(0);
                self.status_message = "Top of page".to_string();
            }
            KeyCode::End => {
                self.landing.scroll_to(self.landing.max_scroll());
                self.status_message = "Bottom of page".to_string();
            }
            KeyCode::Tab => self.cycle_nav(1),
            KeyCode::BackTab => self.cycle_nav(-1),
            // Number keys follow the nav links in order
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                match self.landing.nav.get(index).cloned() {
                    Some(link) => self.follow(&link.anchor, &link.label),
                    None => self.status_message = format!("No link {}", c),
                }
            }
            // Hero buttons answer to the first letter of their label
            KeyCode::Char(c) => {
                let action = self.landing.hero.actions.iter().find(|a| {
                    a.label
                        .chars()
                        .next()
                        .is_some_and(|first| first.to_lowercase().eq(c.to_lowercase()))
                });
                if let Some(action) = action.cloned() {
                    self.follow(&action.anchor, &action.label);
                }
            }
            _ => {}
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        self.landing.scroll_by(delta);
        self.status_message = format!(
            "Row {}/{}",
            self.landing.scroll_offset(),
            self.landing.max_scroll()
        );
    }

    /// Move to the next (or previous) nav link after the active one
    fn cycle_nav(&mut self, step: isize) {
        let count = self.landing.nav.len() as isize;
        if count == 0 {
            return;
        }
        let current = self.landing.active_nav().map_or(-1, |i| i as isize);
        let next = if current < 0 && step < 0 {
            count - 1
        } else {
            (current + step).rem_euclid(count)
        };
        let link = self.landing.nav[next as usize].clone();
        self.follow(&link.anchor, &link.label);
    }

    fn follow(&mut self, anchor: &str, label: &str) {
        if self.landing.jump_to(anchor) {
            self.status_message = format!("Jumped to {}", label);
        } else {
            self.status_message =
                format!("No section for #{}", anchor.trim_start_matches('#'));
        }
    }
}
