use crossword_core::{normalize, Entry, Generator, GeneratorError, Layout, Placement, Position};
use serde::{Deserialize, Serialize};

/// Result of submitting a guess for a numbered clue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched; the placement's letters are now revealed
    Correct { answer: String },
    /// The guess did not match; nothing was revealed
    Incorrect,
    /// No placement carries that clue number
    UnknownNumber,
}

/// One player's game: an immutable layout plus the mutable revealed mask.
///
/// The layout never changes after generation; the revealed mask is the
/// only per-player state and is mutated solely by correct guesses,
/// `reveal_all`, and `reset`.
pub struct Game {
    entries: Vec<Entry>,
    layout: Layout,
    revealed: Vec<Vec<Option<char>>>,
    guesses: usize,
    correct_guesses: usize,
}

impl Game {
    /// Generate a fresh game over the given entries
    pub fn new(entries: Vec<Entry>, grid_size: usize) -> Result<Self, GeneratorError> {
        let layout = Generator::with_size(grid_size).generate(&entries)?;
        let revealed = vec![vec![None; grid_size]; grid_size];
        Ok(Self {
            entries,
            layout,
            revealed,
            guesses: 0,
            correct_guesses: 0,
        })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entry behind a placement
    pub fn entry_for(&self, placement: &Placement) -> &Entry {
        &self.entries[placement.entry_id]
    }

    /// Revealed letter at a cell, if any
    pub fn revealed_letter(&self, pos: Position) -> Option<char> {
        self.revealed[pos.row][pos.col]
    }

    /// Total guesses submitted (correct or not)
    pub fn guesses(&self) -> usize {
        self.guesses
    }

    /// Correct guesses submitted
    pub fn correct_guesses(&self) -> usize {
        self.correct_guesses
    }

    /// Submit a guess for the placement with the given clue number.
    ///
    /// The guess is normalized before comparison, so accents, spacing,
    /// and case never matter. A correct guess reveals the placement's
    /// span; an incorrect one leaves the mask untouched.
    pub fn submit_guess(&mut self, number: usize, guess: &str) -> GuessOutcome {
        let placement = match self.layout.placement_by_number(number) {
            Some(p) => *p,
            None => return GuessOutcome::UnknownNumber,
        };

        self.guesses += 1;
        let entry = &self.entries[placement.entry_id];
        if normalize(guess) != entry.answer_normalized {
            return GuessOutcome::Incorrect;
        }

        self.correct_guesses += 1;
        for pos in placement.cells() {
            self.revealed[pos.row][pos.col] = self.layout.grid.get(pos);
        }
        GuessOutcome::Correct {
            answer: entry.answer_original.clone(),
        }
    }

    /// Copy every used cell from the solution into the revealed mask
    pub fn reveal_all(&mut self) {
        let n = self.layout.size();
        for row in 0..n {
            for col in 0..n {
                let pos = Position::new(row, col);
                if self.layout.grid.is_used(pos) {
                    self.revealed[row][col] = self.layout.grid.get(pos);
                }
            }
        }
    }

    /// Whether every cell belonging to some placement has been revealed
    pub fn is_solved(&self) -> bool {
        let n = self.layout.size();
        for row in 0..n {
            for col in 0..n {
                let pos = Position::new(row, col);
                if self.layout.grid.is_used(pos) && self.revealed[row][col].is_none() {
                    return false;
                }
            }
        }
        true
    }

    /// Whether one placement's span is fully revealed
    pub fn placement_solved(&self, placement: &Placement) -> bool {
        placement
            .cells()
            .all(|pos| self.revealed[pos.row][pos.col].is_some())
    }

    /// Count of fully revealed placements
    pub fn solved_count(&self) -> usize {
        self.layout
            .placements
            .iter()
            .filter(|p| self.placement_solved(p))
            .count()
    }

    /// Discard progress and regenerate from the same entries.
    ///
    /// Generation is deterministic, so the layout only differs from the
    /// previous one if the entry list itself changed.
    pub fn reset(&mut self) -> Result<(), GeneratorError> {
        let grid_size = self.layout.size();
        let layout = Generator::with_size(grid_size).generate(&self.entries)?;
        self.layout = layout;
        self.revealed = vec![vec![None; grid_size]; grid_size];
        self.guesses = 0;
        self.correct_guesses = 0;
        Ok(())
    }

    /// Serialize the game state for saving
    pub fn serialize(&self) -> String {
        let state = SaveState {
            entries: self.entries.clone(),
            grid_size: self.layout.size(),
            revealed: self.revealed.clone(),
            guesses: self.guesses,
            correct_guesses: self.correct_guesses,
        };
        serde_json::to_string_pretty(&state).unwrap_or_default()
    }

    /// Deserialize a saved game state.
    ///
    /// The layout is regenerated from the saved entries (generation is
    /// deterministic) and the revealed mask restored on top of it.
    pub fn deserialize(json: &str) -> Option<Self> {
        let state: SaveState = serde_json::from_str(json).ok()?;
        let layout = Generator::with_size(state.grid_size)
            .generate(&state.entries)
            .ok()?;
        if state.revealed.len() != state.grid_size
            || state.revealed.iter().any(|row| row.len() != state.grid_size)
        {
            return None;
        }
        Some(Self {
            entries: state.entries,
            layout,
            revealed: state.revealed,
            guesses: state.guesses,
            correct_guesses: state.correct_guesses,
        })
    }
}

#[derive(Serialize, Deserialize)]
struct SaveState {
    entries: Vec<Entry>,
    grid_size: usize,
    revealed: Vec<Vec<Option<char>>>,
    guesses: usize,
    correct_guesses: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_game() -> Game {
        let entries = Entry::from_pairs(vec![
            ("clue1", "ZOONOSIS"),
            ("clue2", "SALUD"),
            ("clue3", "UNA SOLA SALUD"),
        ])
        .unwrap();
        Game::new(entries, 27).unwrap()
    }

    #[test]
    fn test_new_game_starts_hidden() {
        let game = test_game();
        assert!(!game.is_solved());
        assert_eq!(game.solved_count(), 0);
        for row in 0..27 {
            for col in 0..27 {
                assert_eq!(game.revealed_letter(Position::new(row, col)), None);
            }
        }
    }

    #[test]
    fn test_correct_guess_reveals_span() {
        let mut game = test_game();
        let placement = *game
            .layout()
            .placements
            .iter()
            .find(|p| game.entry_for(p).answer_original == "SALUD")
            .unwrap();

        let outcome = game.submit_guess(placement.number, "salud");
        assert_eq!(
            outcome,
            GuessOutcome::Correct {
                answer: "SALUD".to_string()
            }
        );
        assert!(game.placement_solved(&placement));
        assert_eq!(game.solved_count(), 1);
        assert_eq!(game.correct_guesses(), 1);
    }

    #[test]
    fn test_guess_ignores_accents_spaces_case() {
        let mut game = test_game();
        let placement = *game
            .layout()
            .placements
            .iter()
            .find(|p| game.entry_for(p).answer_original == "UNA SOLA SALUD")
            .unwrap();

        let outcome = game.submit_guess(placement.number, "Úna Solá  Salud");
        assert!(matches!(outcome, GuessOutcome::Correct { .. }));
    }

    #[test]
    fn test_wrong_guess_reveals_nothing() {
        let mut game = test_game();
        let number = game.layout().placements[0].number;

        assert_eq!(game.submit_guess(number, "WRONG"), GuessOutcome::Incorrect);
        assert_eq!(game.guesses(), 1);
        assert_eq!(game.correct_guesses(), 0);
        for row in 0..27 {
            for col in 0..27 {
                assert_eq!(game.revealed_letter(Position::new(row, col)), None);
            }
        }
    }

    #[test]
    fn test_unknown_number() {
        let mut game = test_game();
        assert_eq!(game.submit_guess(99, "SALUD"), GuessOutcome::UnknownNumber);
        // Unknown numbers are not counted as guesses.
        assert_eq!(game.guesses(), 0);
    }

    #[test]
    fn test_reveal_all_solves_regardless_of_guesses() {
        let mut game = test_game();
        game.submit_guess(1, "nonsense");
        game.reveal_all();
        assert!(game.is_solved());
        assert_eq!(game.solved_count(), game.layout().placements.len());
    }

    #[test]
    fn test_reset_clears_progress_and_reproduces_layout() {
        let mut game = test_game();
        let layout_before = game.layout().clone();
        game.reveal_all();
        assert!(game.is_solved());

        game.reset().unwrap();
        assert!(!game.is_solved());
        assert_eq!(game.guesses(), 0);
        // Same entries, deterministic generator: identical layout.
        assert_eq!(game.layout(), &layout_before);
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut game = test_game();
        let placement = *game
            .layout()
            .placements
            .iter()
            .find(|p| game.entry_for(p).answer_original == "SALUD")
            .unwrap();
        game.submit_guess(placement.number, "SALUD");

        let json = game.serialize();
        let restored = Game::deserialize(&json).unwrap();

        assert_eq!(restored.layout(), game.layout());
        assert_eq!(restored.guesses(), 1);
        assert_eq!(restored.correct_guesses(), 1);
        assert!(restored.placement_solved(&placement));
        assert!(!restored.is_solved());
    }
}
