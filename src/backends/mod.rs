//! Use a converted automaton for something else.
//!
//! Current backends are
//! - `json`: Write a DFA in the same JSON format that automata are loaded from

pub mod json;
