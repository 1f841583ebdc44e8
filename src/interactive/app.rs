//! TUI application state and logic

use crate::core::{PlayResult, Puzzle};
use crate::daily::record_play;
use crate::store::PlayStore;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Redraw interval for the running clock
pub const TICK: Duration = Duration::from_millis(200);

/// Application state
pub struct App {
    pub date: NaiveDate,
    pub puzzle: Puzzle,
    pub selected: usize,
    /// Word the player picked this session
    pub picked: Option<String>,
    /// Result of the play, either just made or loaded from the store
    pub outcome: Option<PlayResult>,
    /// Whether the outcome was already stored when the app started
    pub locked: bool,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    started: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Start a session for `puzzle`; a stored result locks the picks
    #[must_use]
    pub fn new(date: NaiveDate, puzzle: Puzzle, existing: Option<PlayResult>) -> Self {
        let locked = existing.is_some();
        let mut app = Self {
            date,
            puzzle,
            selected: 0,
            picked: None,
            outcome: existing,
            locked,
            messages: Vec::new(),
            should_quit: false,
            started: Instant::now(),
        };

        if locked {
            app.add_message("Already played today. Come back tomorrow!", MessageStyle::Info);
        } else {
            app.add_message(
                "Pick the word the clues describe. ↑/↓ to move, Enter to choose.",
                MessageStyle::Info,
            );
        }
        app
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    /// Milliseconds on the clock: frozen once done, running otherwise
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.outcome.map_or_else(
            || u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX),
            |r| r.time_ms,
        )
    }

    pub fn select_next(&mut self) {
        if !self.is_done() && !self.puzzle.picks.is_empty() {
            self.selected = (self.selected + 1) % self.puzzle.picks.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.is_done() && !self.puzzle.picks.is_empty() {
            let len = self.puzzle.picks.len();
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Move the selection to a 0-based index, ignoring out of range
    pub fn select(&mut self, index: usize) {
        if !self.is_done() && index < self.puzzle.picks.len() {
            self.selected = index;
        }
    }

    /// Choose the selected pick after `elapsed`
    ///
    /// Returns the new result, or `None` if the puzzle was already finished.
    pub fn choose(&mut self, elapsed: Duration) -> Option<PlayResult> {
        if self.is_done() {
            self.add_message("Picks are locked.", MessageStyle::Error);
            return None;
        }
        let pick = self.puzzle.picks.get(self.selected)?.clone();
        let result = PlayResult::from_pick(&self.puzzle, &pick, elapsed);

        if result.solved {
            self.add_message(&format!("✅ {pick} is correct!"), MessageStyle::Success);
        } else {
            self.add_message(
                &format!("❌ {pick} is wrong. The answer was {}.", self.puzzle.answer),
                MessageStyle::Error,
            );
        }
        self.picked = Some(pick);
        self.outcome = Some(result);
        Some(result)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application, saving the play to `store`
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if the play cannot be saved.
pub fn run_tui<S: PlayStore + ?Sized>(app: App, store: &mut S) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: PlayStore + ?Sized>(
    terminal: &mut Terminal<B>,
    mut app: App,
    store: &mut S,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                app.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(d) = c.to_digit(10) {
                    app.select(d as usize - 1);
                }
            }
            KeyCode::Enter => {
                let elapsed = app.started.elapsed();
                if let Some(result) = app.choose(elapsed) {
                    record_play(store, app.date, result).context("Failed to save play result")?;
                }
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Clue;

    fn puzzle() -> Puzzle {
        Puzzle {
            picks: ["APPLE", "GRAPE", "LEMON", "MELON", "PEACH"]
                .map(String::from)
                .to_vec(),
            answer: "LEMON".to_string(),
            clues: vec![Clue::StartsWith { letter: 'L' }],
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    #[test]
    fn selection_wraps() {
        let mut app = App::new(date(), puzzle(), None);
        app.select_prev();
        assert_eq!(app.selected, 4);
        app.select_next();
        assert_eq!(app.selected, 0);
        app.select(2);
        assert_eq!(app.selected, 2);
        app.select(9);
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn choosing_answer_solves() {
        let mut app = App::new(date(), puzzle(), None);
        app.select(2);
        let result = app.choose(Duration::from_millis(7_000)).unwrap();
        assert!(result.solved);
        assert_eq!(app.elapsed_ms(), 7_000);
        assert_eq!(app.picked.as_deref(), Some("LEMON"));
    }

    #[test]
    fn choosing_other_word_fails_and_locks() {
        let mut app = App::new(date(), puzzle(), None);
        let result = app.choose(Duration::from_secs(3)).unwrap();
        assert!(!result.solved);

        app.select_next();
        assert_eq!(app.selected, 0);
        assert!(app.choose(Duration::from_secs(9)).is_none());
        assert_eq!(app.outcome, Some(result));
    }

    #[test]
    fn stored_result_locks_picks() {
        let stored = PlayResult {
            solved: true,
            time_ms: 42_000,
            hints: 0,
        };
        let mut app = App::new(date(), puzzle(), Some(stored));
        assert!(app.locked);
        assert!(app.is_done());
        assert_eq!(app.elapsed_ms(), 42_000);
        assert!(app.choose(Duration::from_secs(1)).is_none());
    }

    #[test]
    fn messages_are_capped() {
        let mut app = App::new(date(), puzzle(), None);
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "m9");
    }
}
