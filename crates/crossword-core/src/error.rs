/// Result type for layout generation
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Errors that can occur while building a layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The entry list is empty
    NoEntries,
    /// An answer is longer than the grid dimension
    GridTooSmall { answer: String, size: usize },
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoEntries => write!(f, "No entries to place"),
            Self::GridTooSmall { answer, size } => {
                write!(f, "Answer '{}' does not fit in a {}x{} grid", answer, size, size)
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Errors that can occur while loading entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// The answer has no letters left after normalization
    EmptyAnswer { answer: String },
}

impl std::fmt::Display for EntryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAnswer { answer } => {
                write!(f, "Answer '{}' normalizes to an empty string", answer)
            }
        }
    }
}

impl std::error::Error for EntryError {}
