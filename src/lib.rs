//! This library turns nondeterministic finite automata into equivalent deterministic ones.
//!
//! It consists of
//! - __frontend__: Build an [`Nfa`](automaton::Nfa) state by state or load it from a JSON description.
//! - __conversion__: The [`SubsetConstruction`](automaton::SubsetConstruction) that produces a [`Dfa`](automaton::Dfa).
//! - __backend__: Use the resulting DFA to do whatever you want.
//!   Current backends are
//!   - `json`: Write the DFA back into the JSON format
//!
//! Text tables (via `Display`) and Graphviz output (`to_dot()`) are available for both automata.
//!
//! ## Getting Started
//! The first step always is to get an NFA. Either build it with the methods of
//! [`Nfa`](automaton::Nfa) or load it from disk:
//! ```no_run
//! use fa_convert::automaton::Nfa;
//!
//! let nfa = Nfa::from_json("my-nfa.json").unwrap();
//! ```
//! Then, convert it and use the result:
//! ```no_run
//! # use fa_convert::automaton::Nfa;
//! # let nfa = Nfa::from_json("my-nfa.json").unwrap();
//! let dfa = nfa.to_dfa().unwrap();
//! assert_eq!(dfa.accepts("0101"), nfa.accepts("0101"));
//! println!("{}", dfa);
//! ```
//! And that's it.
//!
//! ## File format
//! ```text
//! {
//!     // optional, defaults to "e"
//!     "epsilon": "e",
//!     "states": ["q0", "q1"],
//!     "start": "q0",
//!     "final": ["q1"],
//!     "transitions": [["q0", "a", "q1"], ["q1", "e", "q0"]]
//! }
//! ```

#![deny(missing_docs)]

pub(crate) mod parser;

pub mod error;
pub mod automaton;
pub mod backends;

#[cfg(test)]
mod tests;
