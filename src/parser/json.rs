use std::path::Path;
use std::fs::File;
use std::io::{BufReader, Read};
use json_comments::{CommentSettings, StripComments};
use serde::{Deserialize, Serialize};
use serde_json as json;

use crate::{
    automaton::{Nfa, DEFAULT_EPSILON},
    error::{AutomatonError, ParsingError},
};

/// Path reported for descriptions that were not read from a file.
const IN_MEMORY: &str = "<memory>";

/// On-disk representation of an automaton.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct AutomatonDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) epsilon: Option<char>,

    #[serde(default)]
    pub(crate) states: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) start: Option<String>,

    #[serde(default, rename = "final")]
    pub(crate) finals: Vec<String>,

    #[serde(default)]
    pub(crate) transitions: Vec<(String, char, String)>,
}

impl AutomatonDescription {
    fn into_nfa(self) -> Result<Nfa, AutomatonError> {
        let mut nfa = Nfa::with_epsilon(self.epsilon.unwrap_or(DEFAULT_EPSILON));

        for name in self.states {
            let is_final = self.finals.contains(&name);
            nfa.add_state(name, is_final)?;
        }

        // Final states do not have to be repeated in "states"
        for name in self.finals {
            if nfa.state_id(&name).is_none() {
                nfa.add_final_state(name)?;
            }
        }

        if let Some(start) = &self.start {
            nfa.set_start(start)?;
        }

        for (from, symbol, to) in &self.transitions {
            nfa.add_transition(from, *symbol, to)?;
        }

        Ok(nfa)
    }
}

fn parse_reader<R: Read>(reader: R, path: &Path) -> Result<Nfa, ParsingError> {
    let reader = StripComments::with_settings(CommentSettings::c_style(), reader);

    let description: AutomatonDescription = match json::from_reader(reader) {
        Ok(description) => description,
        Err(e) => {
            return Err(ParsingError::new(
                path,
                format!("Invalid automaton description: {}", e)
            ));
        },
    };

    description.into_nfa().map_err(|e| ParsingError::new(path, e.to_string()))
}

pub(crate) fn parse_json(path: &Path) -> Result<Nfa, ParsingError> {
    let file = File::open(path).map_err(|e| ParsingError::new(path, format!("Could not open file: {}", e)))?;
    parse_reader(BufReader::new(file), path)
}

pub(crate) fn parse_str(content: &str) -> Result<Nfa, ParsingError> {
    parse_reader(content.as_bytes(), Path::new(IN_MEMORY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_with_01() {
        let nfa = parse_json(Path::new("test-data/automata/ends-with-01.json")).unwrap();
        assert_eq!(nfa.len(), 3);
        assert_eq!(nfa.alphabet().len(), 2);
        assert_eq!(nfa.final_states().map(|s| s.name()).collect::<Vec<_>>(), vec!["q2"]);
        assert!(nfa.accepts("1101"));
    }

    #[test]
    fn test_custom_epsilon() {
        let nfa = parse_str(r##"{
            // '#' marks epsilon edges
            "epsilon": "#",
            "states": ["a"],
            "start": "a",
            "final": ["b"],
            "transitions": [["a", "#", "b"], ["b", "e", "b"]]
        }"##).unwrap();

        assert_eq!(nfa.epsilon(), '#');
        assert_eq!(nfa.alphabet().iter().copied().collect::<Vec<_>>(), vec!['e']);
        assert!(nfa.accepts(""));
        assert!(nfa.accepts("eee"));
    }

    #[test]
    fn test_invalid_refs() {
        let err = parse_json(Path::new("test-data/automata/invalid-refs.json")).unwrap_err();
        assert_eq!(err.path(), Path::new("test-data/automata/invalid-refs.json"));
        assert!(err.message().contains("'q7'"));
    }

    #[test]
    fn test_syntax_errors() {
        assert!(parse_str("42").is_err());
        assert!(parse_str(r#"{"transitions": [["a", "ab", "b"]]}"#).is_err());
        assert!(parse_str(r#"{"unknown": 1}"#).is_err());
        assert!(parse_str(r#"{"states": ["a", "a"]}"#).unwrap_err().message().contains("already exists"));

        let err = parse_json(Path::new("test-data/automata/does-not-exist.json")).unwrap_err();
        assert!(err.message().starts_with("Could not open file"));
    }

    #[test]
    fn test_missing_start_is_loadable() {
        let nfa = parse_str(r#"{"states": ["a"]}"#).unwrap();
        assert!(nfa.start().is_none());
        assert!(nfa.to_dfa().is_err());
    }
}
