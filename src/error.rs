//! Errors reported while building, loading and converting automata.

use std::path::PathBuf;
use thiserror::Error;

/// Loading an automaton description from disk failed.
#[derive(Debug, Error)]
pub struct ParsingError {
    path: PathBuf,
    msg: String,
}

impl ParsingError {
    pub(crate) fn new<P: Into<PathBuf>, S: Into<String>>(path: P, msg: S) -> Self {
        Self {
            path: path.into(),
            msg: msg.into(),
        }
    }

    /// The file that could not be loaded.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// What went wrong.
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsingError in {}: {}", self.path.display(), self.msg)
    }
}

/// Errors of the construction surfaces of [`Nfa`](crate::automaton::Nfa) and [`Dfa`](crate::automaton::Dfa).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// The state name is already taken
    #[error("A state with name '{0}' already exists")]
    DuplicateState(String),

    /// A transition or start marker references a state that was never added
    #[error("No state exists with name '{0}'")]
    UnknownState(String),

    /// Conversion was requested before a start state was set
    #[error("The automaton has no start state")]
    MissingStartState,

    /// State names must be non-empty and free of whitespace
    #[error("'{0}' is not a valid state name")]
    InvalidStateName(String),

    /// A deterministic state already has another destination on this symbol
    #[error("State '{from}' already has a different transition on '{symbol}'")]
    ConflictingTransition {
        /// Source state of the rejected transition
        from: String,
        /// Symbol of the rejected transition
        symbol: char,
    },
}

/// Any error this crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// See [`ParsingError`]
    #[error(transparent)]
    Parsing(#[from] ParsingError),

    /// See [`AutomatonError`]
    #[error(transparent)]
    Automaton(#[from] AutomatonError),

    /// Writing an output file failed
    #[error("Could not write {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
}
