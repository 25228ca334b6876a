use serde::ser::Serialize;
use serde_json::{
    ser::PrettyFormatter,
    Serializer,
};
use std::{
    collections::BTreeSet,
    fs::File,
    io::Write,
    path::Path,
};

use crate::{
    automaton::{Dfa, DEFAULT_EPSILON},
    error::Error,
    parser::json::AutomatonDescription,
};

/// A DFA has no epsilon transitions but the format needs a marker
/// that does not collide with the alphabet.
fn unused_symbol(alphabet: &BTreeSet<char>) -> char {
    std::iter::once(DEFAULT_EPSILON)
        .chain('\u{3b5}'..=char::MAX)
        .find(|symbol| !alphabet.contains(symbol))
        .unwrap_or(DEFAULT_EPSILON)
}

fn describe(dfa: &Dfa) -> AutomatonDescription {
    AutomatonDescription {
        epsilon: Some(unused_symbol(dfa.alphabet())),
        states: dfa.states().iter().map(|state| state.name().to_string()).collect(),
        start: dfa.start().map(|state| state.name().to_string()),
        finals: dfa.final_states().map(|state| state.name().to_string()).collect(),
        transitions: dfa.transitions().map(|(src, symbol, dst)| (src.name().to_string(), symbol, dst.name().to_string())).collect(),
    }
}

/// This is the main struct of the [`json`](crate::backends::json) backend. It writes a [`Dfa`]
/// in the same format that [`Nfa::from_json`](crate::automaton::Nfa::from_json) reads.
pub struct JsonGenerator {}

impl JsonGenerator {
    /// Create a new JsonGenerator.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {}
    }

    /// Serialize `dfa` into a pretty-printed JSON document.
    pub fn render(&self, dfa: &Dfa) -> std::io::Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        describe(dfa).serialize(&mut ser)?;
        buf.push(b'\n');

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write `dfa` into the output file `path`.
    pub fn generate<P: AsRef<Path>>(self, path: P, dfa: &Dfa) -> Result<(), Error> {
        let path = path.as_ref();
        let content = self.render(dfa).map_err(|e| Error::Io(path.to_path_buf(), e))?;

        let mut file = File::create(path).map_err(|e| Error::Io(path.to_path_buf(), e))?;
        file.write_all(content.as_bytes()).map_err(|e| Error::Io(path.to_path_buf(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{Nfa, DfaBuilder};

    #[test]
    fn test_generator() {
        let nfa = Nfa::from_json("test-data/automata/third-from-end.json").unwrap();
        let dfa = nfa.to_dfa().unwrap();

        let path = std::env::temp_dir().join("fa-convert-third-from-end.json");
        JsonGenerator::new().generate(&path, &dfa).unwrap();

        let reloaded = Nfa::from_json(&path).unwrap();
        assert_eq!(reloaded.len(), dfa.len());
        assert_eq!(reloaded.alphabet(), dfa.alphabet());

        for word in ["", "a", "aab", "abb", "bab", "baaa", "bbbb", "abab"] {
            assert_eq!(reloaded.accepts(word), nfa.accepts(word), "{}", word);
        }
    }

    #[test]
    fn test_epsilon_avoids_alphabet() {
        let mut dfa = Dfa::new();
        dfa.add_final_state("[q]").unwrap();
        dfa.set_start("[q]").unwrap();
        dfa.add_transition("[q]", 'e', "[q]").unwrap();

        let json = JsonGenerator::new().render(&dfa).unwrap();
        assert!(json.contains("\"epsilon\": \"\u{3b5}\""));
        assert!(json.contains("\"final\": [\n        \"[q]\"\n    ]"));

        let reloaded = Nfa::from_json_str(&json).unwrap();
        assert!(reloaded.accepts("eee"));
    }
}
