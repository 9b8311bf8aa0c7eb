use crate::grid::{Grid, Orientation, Position};
use serde::{Deserialize, Serialize};

/// One entry's assigned position on the grid.
///
/// Created during generation, immutable afterward. `number` follows
/// crossword reading order: left to right, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Index into the entry list this placement belongs to
    pub entry_id: usize,
    /// Origin row
    pub row: usize,
    /// Origin column
    pub col: usize,
    pub orientation: Orientation,
    /// Length of the normalized answer
    pub length: usize,
    /// Clue number, 1-based, assigned in reading order
    pub number: usize,
}

impl Placement {
    /// The cells this placement occupies, in answer order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let (row, col) = (self.row, self.col);
        let orientation = self.orientation;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => Position::new(row, col + i),
            Orientation::Vertical => Position::new(row + i, col),
        })
    }

    /// Origin cell
    pub fn origin(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// The generator's output: a filled grid and the numbered placements.
///
/// Built once per puzzle and immutable afterward. Entries that could not
/// be placed anywhere (grid exhausted) are listed in `unplaced` rather
/// than silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub grid: Grid,
    /// Placements sorted by `(row, col)` with `number` assigned 1..K
    pub placements: Vec<Placement>,
    /// Entry ids that found no legal position
    pub unplaced: Vec<usize>,
}

impl Layout {
    /// Grid dimension
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Find a placement by its clue number
    pub fn placement_by_number(&self, number: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.number == number)
    }

    /// Read a placement's word back off the grid
    pub fn word_at(&self, placement: &Placement) -> String {
        placement
            .cells()
            .map(|pos| self.grid.get(pos).unwrap_or('?'))
            .collect()
    }

    /// Clue numbers starting at a cell (shared by an Across and a Down
    /// entry when both start there)
    pub fn numbers_at(&self, pos: Position) -> Vec<usize> {
        self.placements
            .iter()
            .filter(|p| p.origin() == pos)
            .map(|p| p.number)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_cells() {
        let placement = Placement {
            entry_id: 0,
            row: 3,
            col: 5,
            orientation: Orientation::Horizontal,
            length: 3,
            number: 1,
        };
        let cells: Vec<Position> = placement.cells().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(3, 5),
                Position::new(3, 6),
                Position::new(3, 7)
            ]
        );
    }

    #[test]
    fn test_vertical_cells() {
        let placement = Placement {
            entry_id: 0,
            row: 3,
            col: 5,
            orientation: Orientation::Vertical,
            length: 2,
            number: 1,
        };
        let cells: Vec<Position> = placement.cells().collect();
        assert_eq!(cells, vec![Position::new(3, 5), Position::new(4, 5)]);
    }
}
