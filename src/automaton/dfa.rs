use std::collections::{BTreeMap, BTreeSet};

use ahash::AHashMap;

use crate::{
    automaton::check_state_name,
    error::AutomatonError,
};

/// The construction surface that [`SubsetConstruction`](super::SubsetConstruction)
/// emits into. All states are addressed by name.
pub trait DfaBuilder {
    /// Register `symbol` as part of the alphabet, even if no transition uses it.
    fn add_symbol(&mut self, symbol: char);

    /// Add a non-accepting state.
    fn add_state(&mut self, name: &str) -> Result<(), AutomatonError>;

    /// Add an accepting state.
    fn add_final_state(&mut self, name: &str) -> Result<(), AutomatonError>;

    /// Make an existing state the start state.
    fn set_start(&mut self, name: &str) -> Result<(), AutomatonError>;

    /// Add the transition `from --symbol--> to` between two existing states.
    fn add_transition(&mut self, from: &str, symbol: char, to: &str) -> Result<(), AutomatonError>;

    /// Whether a state named `name` was registered.
    fn contains_state(&self, name: &str) -> bool;
}

/// A single state of a [`Dfa`].
#[derive(Clone, Debug)]
pub struct DfaState {
    name: String,
    is_final: bool,
    delta: BTreeMap<char, usize>,
}

impl DfaState {
    /// The name of this state.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this state is accepting.
    pub fn is_final(&self) -> bool {
        self.is_final
    }
}

/// A deterministic finite automaton.
///
/// Missing transitions are allowed: running into one rejects the input.
#[derive(Clone, Debug, Default)]
pub struct Dfa {
    states: Vec<DfaState>,
    names: AHashMap<String, usize>,
    start: Option<usize>,
    alphabet: BTreeSet<char>,
}

impl Dfa {
    /// Create an empty DFA.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, name: &str, is_final: bool) -> Result<(), AutomatonError> {
        check_state_name(name)?;

        if self.names.contains_key(name) {
            return Err(AutomatonError::DuplicateState(name.to_string()));
        }

        self.names.insert(name.to_string(), self.states.len());
        self.states.push(DfaState {
            name: name.to_string(),
            is_final,
            delta: BTreeMap::new(),
        });
        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<usize, AutomatonError> {
        self.names.get(name).copied().ok_or_else(|| AutomatonError::UnknownState(name.to_string()))
    }

    /// All states in the order they were added.
    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    /// Look up a state by name.
    pub fn state(&self, name: &str) -> Option<&DfaState> {
        self.names.get(name).map(|idx| &self.states[*idx])
    }

    /// All accepting states in the order they were added.
    pub fn final_states(&self) -> impl Iterator<Item = &DfaState> {
        self.states.iter().filter(|state| state.is_final)
    }

    /// The start state, if one was set.
    pub fn start(&self) -> Option<&DfaState> {
        self.start.map(|idx| &self.states[idx])
    }

    /// The input alphabet.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no state was added yet.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Where `from` goes on `symbol`, if anywhere.
    pub fn transition(&self, from: &str, symbol: char) -> Option<&DfaState> {
        let src = self.names.get(from)?;
        self.states[*src].delta.get(&symbol).map(|dst| &self.states[*dst])
    }

    /// Every transition as `(from, symbol, to)`, grouped by source state.
    pub fn transitions(&self) -> impl Iterator<Item = (&DfaState, char, &DfaState)> {
        self.states.iter().flat_map(move |state| {
            state.delta.iter().map(move |(symbol, dst)| (state, *symbol, &self.states[*dst]))
        })
    }

    /// Whether every state has exactly one transition on every symbol of the alphabet.
    pub fn is_total(&self) -> bool {
        self.states.iter().all(|state| self.alphabet.iter().all(|symbol| state.delta.contains_key(symbol)))
    }

    /// Feed `input` through the automaton and return the state it ends in.
    /// Returns `None` if there is no start state or a transition is missing.
    pub fn run(&self, input: &str) -> Option<&DfaState> {
        let mut current = self.start?;

        for symbol in input.chars() {
            current = *self.states[current].delta.get(&symbol)?;
        }

        Some(&self.states[current])
    }

    /// Whether `input` leads from the start state into an accepting state.
    pub fn accepts(&self, input: &str) -> bool {
        self.run(input).map(|state| state.is_final).unwrap_or(false)
    }
}

impl DfaBuilder for Dfa {
    fn add_symbol(&mut self, symbol: char) {
        self.alphabet.insert(symbol);
    }

    fn add_state(&mut self, name: &str) -> Result<(), AutomatonError> {
        self.insert(name, false)
    }

    fn add_final_state(&mut self, name: &str) -> Result<(), AutomatonError> {
        self.insert(name, true)
    }

    fn set_start(&mut self, name: &str) -> Result<(), AutomatonError> {
        self.start = Some(self.lookup(name)?);
        Ok(())
    }

    fn add_transition(&mut self, from: &str, symbol: char, to: &str) -> Result<(), AutomatonError> {
        let src = self.lookup(from)?;
        let dst = self.lookup(to)?;

        let delta = &mut self.states[src].delta;

        if delta.get(&symbol).is_some_and(|old| *old != dst) {
            return Err(AutomatonError::ConflictingTransition {
                from: from.to_string(),
                symbol,
            });
        }

        delta.insert(symbol, dst);
        self.alphabet.insert(symbol);
        Ok(())
    }

    fn contains_state(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }
}
