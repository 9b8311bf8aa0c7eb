use crate::entry::Entry;
use crate::error::{GeneratorError, GeneratorResult};
use crate::grid::{Grid, Orientation, Position};
use crate::layout::{Layout, Placement};

/// Default grid dimension, sized for the built-in puzzle
pub const DEFAULT_GRID_SIZE: usize = 27;

/// Greedy crossword layout generator.
///
/// Places the longest answers first, preferring positions that cross the
/// most existing letters, and falls back to the first open slot for words
/// with no legal crossing. Deterministic: the same entry list and grid
/// size always produce the same layout.
#[derive(Debug, Clone)]
pub struct Generator {
    size: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator with the default grid size
    pub fn new() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
        }
    }

    /// Create a generator with a custom grid size
    pub fn with_size(size: usize) -> Self {
        Self { size }
    }

    /// Grid dimension this generator produces
    pub fn size(&self) -> usize {
        self.size
    }

    /// Build a layout for the given entries.
    ///
    /// Validates up front: the entry list must be non-empty and every
    /// normalized answer must fit in the grid. Entries that cannot be
    /// placed once the grid fills up are reported in `Layout::unplaced`.
    pub fn generate(&self, entries: &[Entry]) -> GeneratorResult<Layout> {
        if entries.is_empty() {
            return Err(GeneratorError::NoEntries);
        }
        for entry in entries {
            if entry.len() > self.size {
                return Err(GeneratorError::GridTooSmall {
                    answer: entry.answer_original.clone(),
                    size: self.size,
                });
            }
        }

        // Longest answers first to maximize crossing opportunities for the
        // shorter words; the stable sort keeps input order on ties.
        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.sort_by_key(|&id| std::cmp::Reverse(entries[id].len()));

        let mut ctx = GenerationContext::new(self.size);
        for (idx, &entry_id) in order.iter().enumerate() {
            let word = &entries[entry_id].answer_normalized;
            if idx == 0 {
                // Seed: centered horizontal anchor, no crossing constraint.
                let row = self.size / 2;
                let col = (self.size - word.len()) / 2;
                ctx.place(entry_id, word, Position::new(row, col), Orientation::Horizontal);
            } else if let Some((origin, orientation)) = ctx.best_crossing(word) {
                ctx.place(entry_id, word, origin, orientation);
            } else if let Some((origin, orientation)) = ctx.first_open_slot(word) {
                ctx.place(entry_id, word, origin, orientation);
            } else {
                ctx.unplaced.push(entry_id);
            }
        }

        Ok(ctx.finish())
    }
}

/// Candidate ranking: most crossings first, then closest origin to the
/// grid center (centering is stored negated so the derived lexicographic
/// order prefers both larger overlap counts and smaller distances).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Score {
    overlaps: usize,
    centering: isize,
}

/// Mutable grid state exclusively owned by one `generate` call.
///
/// Nothing here outlives the call; `finish` consumes the context and
/// produces the immutable layout.
struct GenerationContext {
    grid: Grid,
    placements: Vec<Placement>,
    unplaced: Vec<usize>,
}

impl GenerationContext {
    fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            placements: Vec::new(),
            unplaced: Vec::new(),
        }
    }

    /// Check whether `word` can start at `(row, col)` along `orientation`,
    /// returning the count of cells where it crosses an existing letter.
    ///
    /// Rejects spans leaving the grid, spans whose head or tail would butt
    /// directly against another letter on the same line (two answers must
    /// never merge into one run), and any cell holding a different letter.
    /// Letters on neighboring parallel lines are not constrained.
    fn can_place(
        &self,
        word: &str,
        row: isize,
        col: isize,
        orientation: Orientation,
    ) -> Option<usize> {
        let n = self.grid.size() as isize;
        let len = word.len() as isize;
        let (dr, dc) = match orientation {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        };

        if row < 0 || col < 0 || row + dr * (len - 1) >= n || col + dc * (len - 1) >= n {
            return None;
        }

        let (before_r, before_c) = (row - dr, col - dc);
        if before_r >= 0 && before_c >= 0 && self.letter_at(before_r, before_c).is_some() {
            return None;
        }
        let (after_r, after_c) = (row + dr * len, col + dc * len);
        if after_r < n && after_c < n && self.letter_at(after_r, after_c).is_some() {
            return None;
        }

        let mut overlaps = 0;
        for (i, ch) in word.chars().enumerate() {
            let pos = Position::new(
                (row + dr * i as isize) as usize,
                (col + dc * i as isize) as usize,
            );
            match self.grid.get(pos) {
                Some(existing) if existing != ch => return None,
                Some(_) => overlaps += 1,
                None => {}
            }
        }
        Some(overlaps)
    }

    fn letter_at(&self, row: isize, col: isize) -> Option<char> {
        self.grid.get(Position::new(row as usize, col as usize))
    }

    /// Find the best placement crossing at least one existing letter.
    ///
    /// Candidates are enumerated row-major over filled cells, then by the
    /// word's matching letter index, horizontal before vertical. Only a
    /// strictly better score replaces the current best, so ties resolve to
    /// the first candidate discovered and re-runs are reproducible.
    fn best_crossing(&self, word: &str) -> Option<(Position, Orientation)> {
        let center = (self.grid.size() / 2) as isize;
        let mut best: Option<(Score, Position, Orientation)> = None;

        for (cell, letter) in self.grid.filled_cells() {
            for (j, ch) in word.chars().enumerate() {
                if ch != letter {
                    continue;
                }
                let (row, col) = (cell.row as isize, cell.col as isize);
                let j = j as isize;
                let candidates = [
                    (row, col - j, Orientation::Horizontal),
                    (row - j, col, Orientation::Vertical),
                ];
                for (r, c, orientation) in candidates {
                    if let Some(overlaps) = self.can_place(word, r, c, orientation) {
                        let score = Score {
                            overlaps,
                            centering: -((r - center).abs() + (c - center).abs()),
                        };
                        if best.as_ref().map_or(true, |(b, _, _)| score > *b) {
                            best = Some((
                                score,
                                Position::new(r as usize, c as usize),
                                orientation,
                            ));
                        }
                    }
                }
            }
        }

        // An isolated (zero-overlap) best is left to the fallback scan.
        match best {
            Some((score, origin, orientation)) if score.overlaps > 0 => {
                Some((origin, orientation))
            }
            _ => None,
        }
    }

    /// Fallback for words with no legal crossing: scan row-major for the
    /// first legal position, horizontal across the whole grid first, then
    /// vertical.
    fn first_open_slot(&self, word: &str) -> Option<(Position, Orientation)> {
        let n = self.grid.size() as isize;
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for row in 0..n {
                for col in 0..n {
                    if self.can_place(word, row, col, orientation).is_some() {
                        return Some((Position::new(row as usize, col as usize), orientation));
                    }
                }
            }
        }
        None
    }

    /// Commit a placement, writing its letters into the grid and mask.
    fn place(&mut self, entry_id: usize, word: &str, origin: Position, orientation: Orientation) {
        let placement = Placement {
            entry_id,
            row: origin.row,
            col: origin.col,
            orientation,
            length: word.len(),
            number: 0,
        };
        for (pos, ch) in placement.cells().zip(word.chars()) {
            self.grid.set(pos, ch);
        }
        self.placements.push(placement);
    }

    /// Number placements in reading order and freeze the layout.
    fn finish(mut self) -> Layout {
        self.placements.sort_by_key(|p| (p.row, p.col));
        for (i, placement) in self.placements.iter_mut().enumerate() {
            placement.number = i + 1;
        }
        Layout {
            grid: self.grid,
            placements: self.placements,
            unplaced: self.unplaced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> Vec<Entry> {
        Entry::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn test_seed_is_centered_horizontal() {
        let entries = entries(&[("clue", "ZOONOSIS")]);
        let layout = Generator::new().generate(&entries).unwrap();

        assert_eq!(layout.placements.len(), 1);
        let seed = &layout.placements[0];
        assert_eq!(seed.row, 13);
        assert_eq!(seed.col, 9);
        assert_eq!(seed.orientation, Orientation::Horizontal);
        assert_eq!(seed.number, 1);
        assert_eq!(layout.word_at(seed), "ZOONOSIS");
    }

    #[test]
    fn test_two_word_crossing() {
        let entries = entries(&[("clue1", "ZOONOSIS"), ("clue2", "SALUD")]);
        let layout = Generator::new().generate(&entries).unwrap();

        assert_eq!(layout.placements.len(), 2);
        assert!(layout.unplaced.is_empty());

        // The longer word seeds the grid; SALUD crosses it at the first S
        // of ZOONOSIS (closest crossing to center).
        let zoonosis = layout.placement_by_number(1).unwrap();
        assert_eq!((zoonosis.row, zoonosis.col), (13, 9));
        let salud = layout.placement_by_number(2).unwrap();
        assert_eq!((salud.row, salud.col), (13, 14));
        assert_eq!(salud.orientation, Orientation::Vertical);

        // Crossing cell agrees with both answers.
        assert_eq!(layout.grid.get(Position::new(13, 14)), Some('S'));
        assert_eq!(layout.word_at(salud), "SALUD");
    }

    #[test]
    fn test_deterministic() {
        let entries = entries(&[
            ("a", "ZOONOSIS"),
            ("b", "SALUD"),
            ("c", "AGENTE"),
            ("d", "ENFERMEDAD"),
        ]);
        let generator = Generator::new();
        let first = generator.generate(&entries).unwrap();
        let second = generator.generate(&entries).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_placement_spells_its_answer() {
        let entries = entries(&[
            ("a", "ZOONOSIS"),
            ("b", "SALUD"),
            ("c", "AGENTE"),
            ("d", "ENFERMEDAD"),
            ("e", "VIRCHOW"),
            ("f", "ECOLOGÍA"),
        ]);
        let layout = Generator::new().generate(&entries).unwrap();

        assert!(layout.unplaced.is_empty());
        assert_eq!(layout.placements.len(), entries.len());
        for placement in &layout.placements {
            assert_eq!(
                layout.word_at(placement),
                entries[placement.entry_id].answer_normalized,
            );
        }
    }

    #[test]
    fn test_numbering_follows_reading_order() {
        let entries = entries(&[
            ("a", "ZOONOSIS"),
            ("b", "SALUD"),
            ("c", "AGENTE"),
            ("d", "ENFERMEDAD"),
        ]);
        let layout = Generator::new().generate(&entries).unwrap();

        let mut previous: Option<(usize, usize)> = None;
        for (i, placement) in layout.placements.iter().enumerate() {
            assert_eq!(placement.number, i + 1);
            let origin = (placement.row, placement.col);
            if let Some(prev) = previous {
                assert!(prev <= origin);
            }
            previous = Some(origin);
        }
    }

    #[test]
    fn test_mask_matches_letters() {
        let entries = entries(&[("a", "ZOONOSIS"), ("b", "SALUD"), ("c", "AGENTE")]);
        let layout = Generator::new().generate(&entries).unwrap();

        let n = layout.size();
        for row in 0..n {
            for col in 0..n {
                let pos = Position::new(row, col);
                assert_eq!(layout.grid.is_used(pos), layout.grid.get(pos).is_some());
            }
        }
    }

    #[test]
    fn test_fallback_places_isolated_word() {
        // No shared letters, so BBB cannot cross AAA and takes the first
        // open slot in the scan: top-left, horizontal.
        let entries = entries(&[("a", "AAA"), ("b", "BBB")]);
        let layout = Generator::with_size(9).generate(&entries).unwrap();

        assert!(layout.unplaced.is_empty());
        let isolated = layout
            .placements
            .iter()
            .find(|p| p.entry_id == 1)
            .unwrap();
        assert_eq!((isolated.row, isolated.col), (0, 0));
        assert_eq!(isolated.orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_exhausted_grid_reports_unplaced() {
        // A 3x3 grid holds exactly three horizontal three-letter words
        // with no shared letters; the fourth has nowhere to go and must be
        // surfaced, not dropped.
        let entries = entries(&[("a", "ABC"), ("b", "DEF"), ("c", "XYZ"), ("d", "QQQ")]);
        let layout = Generator::with_size(3).generate(&entries).unwrap();

        assert_eq!(layout.placements.len(), 3);
        assert_eq!(layout.unplaced, vec![3]);
    }

    #[test]
    fn test_rejects_word_longer_than_grid() {
        let entries = entries(&[("a", "ZOONOSIS")]);
        let err = Generator::with_size(5).generate(&entries).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::GridTooSmall {
                answer: "ZOONOSIS".to_string(),
                size: 5,
            }
        );
    }

    #[test]
    fn test_rejects_empty_entry_list() {
        let err = Generator::new().generate(&[]).unwrap_err();
        assert_eq!(err, GeneratorError::NoEntries);
    }

    #[test]
    fn test_can_place_rejects_collinear_adjacency() {
        let mut ctx = GenerationContext::new(9);
        ctx.place(0, "ABC", Position::new(4, 3), Orientation::Horizontal);

        // Butting against the tail or head of ABC on the same row merges
        // two answers into one run.
        assert_eq!(ctx.can_place("XYZ", 4, 6, Orientation::Horizontal), None);
        assert_eq!(ctx.can_place("XYZ", 4, 0, Orientation::Horizontal), None);

        // A different row is fine.
        assert_eq!(ctx.can_place("XYZ", 0, 0, Orientation::Horizontal), Some(0));
    }

    #[test]
    fn test_can_place_allows_parallel_adjacency() {
        // Directly beside another word on a neighboring row is legal; only
        // the word's own axis is constrained.
        let mut ctx = GenerationContext::new(9);
        ctx.place(0, "ABC", Position::new(4, 3), Orientation::Horizontal);

        assert_eq!(ctx.can_place("XYZ", 5, 3, Orientation::Horizontal), Some(0));
    }

    #[test]
    fn test_can_place_counts_overlaps_and_rejects_contradictions() {
        let mut ctx = GenerationContext::new(9);
        ctx.place(0, "ABC", Position::new(4, 3), Orientation::Horizontal);

        // CAB crosses the A of ABC at its middle letter.
        assert_eq!(ctx.can_place("CAB", 3, 3, Orientation::Vertical), Some(1));
        // CAT would need T where the grid holds C.
        assert_eq!(ctx.can_place("CAT", 2, 5, Orientation::Vertical), None);
        // Out of bounds.
        assert_eq!(ctx.can_place("ABC", 0, 7, Orientation::Horizontal), None);
        assert_eq!(ctx.can_place("ABC", -1, 0, Orientation::Vertical), None);
    }
}
