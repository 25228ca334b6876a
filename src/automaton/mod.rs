//! Finite automata and the conversion between them.
//!
//! Build an [`Nfa`] by hand or load it from a file, then turn it into a [`Dfa`]:
//! ```
//! use fa_convert::automaton::Nfa;
//!
//! // Strings over {0, 1} that end in "01"
//! let mut nfa = Nfa::new();
//! nfa.add_start_state("q0").unwrap();
//! nfa.add_state("q1", false).unwrap();
//! nfa.add_final_state("q2").unwrap();
//! nfa.add_transition("q0", '0', "q0").unwrap();
//! nfa.add_transition("q0", '1', "q0").unwrap();
//! nfa.add_transition("q0", '0', "q1").unwrap();
//! nfa.add_transition("q1", '1', "q2").unwrap();
//!
//! let dfa = nfa.to_dfa().unwrap();
//! assert!(dfa.accepts("1101"));
//! assert!(!dfa.accepts("10"));
//!
//! // Print the transition table
//! println!("{}", dfa);
//! ```

mod closure;
mod dfa;
mod display;
mod graph;
mod nfa;
mod state;
mod subset;

pub use dfa::*;
pub use nfa::*;
pub use state::*;
pub use subset::*;

use crate::error::AutomatonError;

/// State names must be non-empty and must not contain whitespace.
pub(crate) fn check_state_name(name: &str) -> Result<(), AutomatonError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        Err(AutomatonError::InvalidStateName(name.to_string()))
    } else {
        Ok(())
    }
}
