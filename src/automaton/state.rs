use std::collections::{BTreeMap, BTreeSet};

/// Index of a state inside the arena of an [`Nfa`](super::Nfa).
/// States are identified by names in the automaton but we use
/// integers for better efficiency.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state in [`Nfa::states()`](super::Nfa::states).
    pub fn index(&self) -> usize {
        self.0
    }
}

/// An ordered set of NFA states.
///
/// Because the set is ordered by [`StateId`], two sets with the same members
/// compare and hash equal regardless of the order in which they were built.
/// This makes it usable as a deduplication key for composite states.
pub type StateSet = BTreeSet<StateId>;

static NO_DESTINATIONS: StateSet = BTreeSet::new();

/// A single state of a nondeterministic automaton.
#[derive(Clone, Debug)]
pub struct NfaState {
    name: String,
    is_final: bool,
    delta: BTreeMap<char, StateSet>,
}

impl NfaState {
    pub(crate) fn new<S: Into<String>>(name: S, is_final: bool) -> Self {
        Self {
            name: name.into(),
            is_final,
            delta: BTreeMap::new(),
        }
    }

    /// The name of this state.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this state is accepting.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Add `destination` to the destinations reachable on `symbol`.
    pub(crate) fn add_transition(&mut self, symbol: char, destination: StateId) {
        self.delta.entry(symbol).or_default().insert(destination);
    }

    /// All destinations reachable on `symbol`. Empty if there are none.
    pub fn transitions_on(&self, symbol: char) -> &StateSet {
        self.delta.get(&symbol).unwrap_or(&NO_DESTINATIONS)
    }

    /// Symbols that have at least one outgoing edge, in order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.delta.keys().copied()
    }

    /// Every outgoing edge as `(symbol, destinations)`.
    pub fn transitions(&self) -> impl Iterator<Item = (char, &StateSet)> + '_ {
        self.delta.iter().map(|(symbol, set)| (*symbol, set))
    }
}
