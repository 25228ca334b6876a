use std::collections::BTreeSet;
use std::path::Path;

use ahash::AHashMap;

use crate::{
    automaton::{
        check_state_name,
        dfa::Dfa,
        state::{NfaState, StateId},
        subset::SubsetConstruction,
    },
    error::{AutomatonError, ParsingError},
    parser,
};

/// The symbol that marks epsilon transitions unless the automaton
/// was created with [`Nfa::with_epsilon`].
pub const DEFAULT_EPSILON: char = 'e';

/// A nondeterministic finite automaton with epsilon transitions.
///
/// Build it state by state:
/// ```
/// use fa_convert::automaton::Nfa;
///
/// let mut nfa = Nfa::new();
/// nfa.add_start_state("q0").unwrap();
/// nfa.add_final_state("q1").unwrap();
/// nfa.add_transition("q0", 'a', "q1").unwrap();
/// nfa.add_transition("q1", 'e', "q0").unwrap();
///
/// assert!(nfa.accepts("aaa"));
/// assert_eq!(nfa.alphabet().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Nfa {
    states: Vec<NfaState>,
    names: AHashMap<String, StateId>,
    start: Option<StateId>,
    alphabet: BTreeSet<char>,
    epsilon: char,
}

impl Default for Nfa {
    fn default() -> Self {
        Self::new()
    }
}

impl Nfa {
    /// Create an empty automaton that uses [`DEFAULT_EPSILON`] for epsilon transitions.
    pub fn new() -> Self {
        Self::with_epsilon(DEFAULT_EPSILON)
    }

    /// Create an empty automaton whose epsilon transitions are labelled with `epsilon`.
    pub fn with_epsilon(epsilon: char) -> Self {
        Self {
            states: Vec::new(),
            names: AHashMap::new(),
            start: None,
            alphabet: BTreeSet::new(),
            epsilon,
        }
    }

    /// Load an automaton from a JSON description on disk.
    /// C-style comments are allowed in the file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, ParsingError> {
        parser::json::parse_json(path.as_ref())
    }

    /// Like [`Nfa::from_json`] but reads the description from a string.
    pub fn from_json_str(content: &str) -> Result<Self, ParsingError> {
        parser::json::parse_str(content)
    }

    /// Add a state named `name`.
    pub fn add_state<S: Into<String>>(&mut self, name: S, is_final: bool) -> Result<StateId, AutomatonError> {
        let name = name.into();
        check_state_name(&name)?;

        if self.names.contains_key(&name) {
            return Err(AutomatonError::DuplicateState(name));
        }

        let id = StateId(self.states.len());
        self.states.push(NfaState::new(name.clone(), is_final));
        self.names.insert(name, id);
        Ok(id)
    }

    /// Add an accepting state named `name`.
    pub fn add_final_state<S: Into<String>>(&mut self, name: S) -> Result<StateId, AutomatonError> {
        self.add_state(name, true)
    }

    /// Add a non-accepting state named `name` and make it the start state.
    pub fn add_start_state<S: Into<String>>(&mut self, name: S) -> Result<StateId, AutomatonError> {
        let id = self.add_state(name, false)?;
        self.start = Some(id);
        Ok(id)
    }

    /// Make the already existing state `name` the start state.
    /// A previously set start state loses its role.
    pub fn set_start(&mut self, name: &str) -> Result<StateId, AutomatonError> {
        let id = self.lookup(name)?;
        self.start = Some(id);
        Ok(id)
    }

    /// Add a transition `from --symbol--> to`. Both states must exist.
    /// Every symbol except the epsilon marker becomes part of the alphabet.
    pub fn add_transition(&mut self, from: &str, symbol: char, to: &str) -> Result<(), AutomatonError> {
        let src = self.lookup(from)?;
        let dst = self.lookup(to)?;

        self.states[src.0].add_transition(symbol, dst);

        if symbol != self.epsilon {
            self.alphabet.insert(symbol);
        }

        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<StateId, AutomatonError> {
        self.state_id(name).ok_or_else(|| AutomatonError::UnknownState(name.to_string()))
    }

    /// Resolve a state name into its id.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.names.get(name).copied()
    }

    /// Access the state `id`.
    ///
    /// # Panics
    /// If `id` was not handed out by this automaton.
    pub fn state(&self, id: StateId) -> &NfaState {
        &self.states[id.0]
    }

    /// All states in insertion order. The position of a state is its [`StateId::index()`].
    pub fn states(&self) -> &[NfaState] {
        &self.states
    }

    /// All accepting states in insertion order.
    pub fn final_states(&self) -> impl Iterator<Item = &NfaState> {
        self.states.iter().filter(|state| state.is_final())
    }

    /// The start state, if one was set.
    pub fn start(&self) -> Option<StateId> {
        self.start
    }

    /// All symbols used on transitions, without the epsilon marker.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// The symbol that labels epsilon transitions in this automaton.
    pub fn epsilon(&self) -> char {
        self.epsilon
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no state was added yet.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Run the automaton on `input` by tracking all active states at once.
    /// An automaton without a start state accepts nothing.
    pub fn accepts(&self, input: &str) -> bool {
        let start = match self.start {
            Some(start) => start,
            None => return false,
        };

        let mut current = self.epsilon_closure(start);

        for symbol in input.chars() {
            if !self.alphabet.contains(&symbol) {
                return false;
            }

            current = self.epsilon_closure_of(&self.move_on(&current, symbol));

            if current.is_empty() {
                return false;
            }
        }

        current.iter().any(|id| self.state(*id).is_final())
    }

    /// Convert this automaton into an equivalent [`Dfa`] with the default options
    /// of [`SubsetConstruction`].
    pub fn to_dfa(&self) -> Result<Dfa, AutomatonError> {
        SubsetConstruction::new(self).run()
    }
}
