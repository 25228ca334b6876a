//! Write automata in the JSON format that the loader understands.
//!
//! Use it like so:
//! ```no_run
//! use fa_convert::{automaton::Nfa, backends::json::JsonGenerator};
//!
//! // First, load an automaton from disk and convert it
//! let dfa = Nfa::from_json("my-nfa.json").unwrap().to_dfa().unwrap();
//!
//! // Then, write the deterministic automaton into a new file.
//! JsonGenerator::new().generate("my-dfa.json", &dfa).unwrap();
//! ```

mod generator;

pub use generator::JsonGenerator;
