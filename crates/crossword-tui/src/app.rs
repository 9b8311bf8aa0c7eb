use crate::animations::WinScreen;
use crate::game::{Game, GuessOutcome};
use crate::saves;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Normal gameplay
    Playing,
    /// Win celebration screen
    Win,
}

/// Which input field receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Number,
    Answer,
}

/// Kind of status message, used for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// The main application state
pub struct App {
    /// Current game
    pub game: Game,
    /// Color theme
    pub theme: Theme,
    /// Current screen state
    pub screen_state: ScreenState,
    /// Focused input field
    pub focus: Focus,
    /// Clue number field contents
    pub number_input: String,
    /// Answer field contents
    pub answer_input: String,
    /// Scroll offset of the clue panel
    pub clue_scroll: usize,
    /// Message to display
    pub message: Option<(String, MessageKind)>,
    /// Message timer
    message_timer: u32,
    /// Win screen animation
    pub win_screen: WinScreen,
    /// Last known terminal size, updated by the renderer
    pub term_size: (u16, u16),
}

impl App {
    /// Create an app around an existing game
    pub fn new(game: Game, theme: Theme) -> Self {
        let mut app = Self {
            game,
            theme,
            screen_state: ScreenState::Playing,
            focus: Focus::Number,
            number_input: String::new(),
            answer_input: String::new(),
            clue_scroll: 0,
            message: None,
            message_timer: 0,
            win_screen: WinScreen::new(),
            term_size: (80, 24),
        };
        let unplaced = app.game.layout().unplaced.len();
        if unplaced > 0 {
            app.show_message(
                &format!("{} entries did not fit the grid", unplaced),
                MessageKind::Error,
            );
        }
        app
    }

    /// Get the tick rate based on current screen
    pub fn get_tick_rate(&self) -> Duration {
        match self.screen_state {
            ScreenState::Win => Duration::from_millis(33), // 30 FPS for the animation
            ScreenState::Playing => Duration::from_millis(100),
        }
    }

    /// Update animations and timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        match self.screen_state {
            ScreenState::Win => {
                self.win_screen.update();
            }
            ScreenState::Playing => {
                if self.game.is_solved() {
                    self.screen_state = ScreenState::Win;
                    let (w, h) = self.term_size;
                    self.win_screen.reset(w, h);
                }
            }
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str, kind: MessageKind) {
        self.message = Some((msg.to_string(), kind));
        self.message_timer = 40; // ~4 seconds at 100ms poll
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.screen_state {
            ScreenState::Win => self.handle_win_key(key),
            ScreenState::Playing => self.handle_game_key(key),
        }
    }

    fn handle_win_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.start_new_game();
            }
            KeyCode::Esc => {
                // Go back to the (finished) board view
                self.screen_state = ScreenState::Playing;
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('r') => {
                    self.game.reveal_all();
                    self.show_message("Solution revealed", MessageKind::Info);
                }
                KeyCode::Char('n') => {
                    self.start_new_game();
                }
                KeyCode::Char('s') => {
                    saves::save(&self.game);
                    self.show_message("Game saved", MessageKind::Info);
                }
                _ => {}
            }
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Number => Focus::Answer,
                    Focus::Answer => Focus::Number,
                };
            }
            KeyCode::Enter => self.submit_guess(),
            KeyCode::Backspace => {
                match self.focus {
                    Focus::Number => self.number_input.pop(),
                    Focus::Answer => self.answer_input.pop(),
                };
            }
            KeyCode::Up => {
                self.clue_scroll = self.clue_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let max = self.game.layout().placements.len().saturating_sub(1);
                if self.clue_scroll < max {
                    self.clue_scroll += 1;
                }
            }
            KeyCode::Char(ch) => match self.focus {
                Focus::Number => {
                    if ch.is_ascii_digit() && self.number_input.len() < 3 {
                        self.number_input.push(ch);
                    }
                }
                Focus::Answer => {
                    if self.answer_input.len() < 60 {
                        self.answer_input.push(ch);
                    }
                }
            },
            _ => {}
        }
        AppAction::Continue
    }

    fn submit_guess(&mut self) {
        let number: usize = match self.number_input.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                self.show_message("Enter a clue number first", MessageKind::Error);
                return;
            }
        };
        if self.answer_input.trim().is_empty() {
            self.show_message("Enter an answer", MessageKind::Error);
            self.focus = Focus::Answer;
            return;
        }

        match self.game.submit_guess(number, &self.answer_input) {
            GuessOutcome::Correct { answer } => {
                self.show_message(&format!("Correct: {}", answer), MessageKind::Success);
                self.number_input.clear();
                self.answer_input.clear();
                self.focus = Focus::Number;
            }
            GuessOutcome::Incorrect => {
                self.show_message(
                    "Incorrect (accents, spaces and case are ignored)",
                    MessageKind::Error,
                );
            }
            GuessOutcome::UnknownNumber => {
                self.show_message("No clue with that number", MessageKind::Error);
            }
        }
    }

    fn start_new_game(&mut self) {
        match self.game.reset() {
            Ok(()) => {
                self.number_input.clear();
                self.answer_input.clear();
                self.clue_scroll = 0;
                self.focus = Focus::Number;
                self.screen_state = ScreenState::Playing;
                self.show_message("New game started", MessageKind::Info);
            }
            Err(e) => {
                self.show_message(&format!("Reset failed: {}", e), MessageKind::Error);
            }
        }
    }
}
