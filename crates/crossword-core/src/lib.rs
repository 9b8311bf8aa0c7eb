//! Crossword layout engine.
//!
//! Takes a fixed list of clue/answer pairs and produces a self-consistent
//! crossword grid: word positions, orientations, cross-letter overlaps,
//! and clue numbering. Answers and guesses are compared through a shared
//! normalizer that ignores accents, spacing, and case.

mod entry;
mod error;
mod generator;
mod grid;
mod layout;
mod normalize;

pub use entry::Entry;
pub use error::{EntryError, GeneratorError, GeneratorResult};
pub use generator::{Generator, DEFAULT_GRID_SIZE};
pub use grid::{Grid, Orientation, Position};
pub use layout::{Layout, Placement};
pub use normalize::normalize;
