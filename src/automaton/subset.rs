//! Conversion of an [`Nfa`] into an equivalent DFA.
//!
//! Every DFA state stands for an epsilon-closed set of NFA states. Starting from
//! the closure of the NFA start state, sets are expanded breadth-first: for each
//! symbol of the alphabet the successors of all members are collected, closed
//! and looked up. Unseen sets become new DFA states.
//!
//! Use it like so:
//! ```
//! use fa_convert::automaton::{Nfa, Dfa, SubsetConstruction, EmptyTargets};
//!
//! let mut nfa = Nfa::new();
//! nfa.add_start_state("q0").unwrap();
//! nfa.add_final_state("q1").unwrap();
//! nfa.add_transition("q0", 'a', "q1").unwrap();
//!
//! let mut dfa = Dfa::new();
//! SubsetConstruction::new(&nfa)
//!     .empty_targets(EmptyTargets::Omit)
//!     .build_into(&mut dfa)
//!     .unwrap();
//!
//! assert!(dfa.accepts("a"));
//! assert_eq!(dfa.start().unwrap().name(), "[q0]");
//! ```

use std::{borrow::Cow, collections::VecDeque};

use ahash::AHashMap;
use itertools::Itertools;

use crate::{
    automaton::{
        dfa::{Dfa, DfaBuilder},
        nfa::Nfa,
        state::StateSet,
    },
    error::AutomatonError,
};

/// Name of the dead state, i.e. the empty set of NFA states.
pub const DEAD_STATE: &str = "[]";

/// What to do when a symbol leads from a DFA state into the empty set of NFA states.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EmptyTargets {
    /// Route the transition into the non-accepting state [`DEAD_STATE`] that loops
    /// on every symbol. The resulting transition function is total.
    #[default]
    DeadState,

    /// Leave the transition undefined.
    Omit,
}

/// The canonical name of a set of NFA states: the names of its
/// members sorted, comma-separated and enclosed in brackets.
/// The result does not depend on the order in which the set was built.
///
/// `,`, `[`, `]` and `\` inside member names are prefixed with a backslash,
/// so different sets never share a name.
pub fn canonical_name(nfa: &Nfa, states: &StateSet) -> String {
    format!(
        "[{}]",
        states
            .iter()
            .map(|id| nfa.state(*id).name())
            .sorted_unstable()
            .map(escape_member)
            .join(",")
    )
}

fn escape_member(name: &str) -> Cow<'_, str> {
    if !name.contains(&['\\', ',', '[', ']'][..]) {
        return Cow::Borrowed(name);
    }

    let mut escaped = String::with_capacity(name.len() + 2);

    for c in name.chars() {
        if matches!(c, '\\' | ',' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    Cow::Owned(escaped)
}

/// Converts an [`Nfa`] into a deterministic automaton.
pub struct SubsetConstruction<'a> {
    nfa: &'a Nfa,
    empty_targets: EmptyTargets,
}

impl<'a> SubsetConstruction<'a> {
    /// Prepare the conversion of `nfa` with the default [`EmptyTargets`] policy.
    pub fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            empty_targets: EmptyTargets::default(),
        }
    }

    /// Choose how transitions into the empty set are handled.
    pub fn empty_targets(mut self, policy: EmptyTargets) -> Self {
        self.empty_targets = policy;
        self
    }

    fn register<B: DfaBuilder>(&self, builder: &mut B, states: &StateSet) -> Result<String, AutomatonError> {
        let name = canonical_name(self.nfa, states);

        if states.iter().any(|id| self.nfa.state(*id).is_final()) {
            builder.add_final_state(&name)?;
        } else {
            builder.add_state(&name)?;
        }

        Ok(name)
    }

    /// Emit the states and transitions of the equivalent DFA into `builder`.
    pub fn build_into<B: DfaBuilder>(self, builder: &mut B) -> Result<(), AutomatonError> {
        let start = self.nfa.start().ok_or(AutomatonError::MissingStartState)?;

        for symbol in self.nfa.alphabet() {
            builder.add_symbol(*symbol);
        }

        let mut visited = AHashMap::<StateSet, String>::new();
        let mut queue = VecDeque::<(StateSet, String)>::new();

        let start_set = self.nfa.epsilon_closure(start);
        let start_name = self.register(builder, &start_set)?;
        builder.set_start(&start_name)?;
        visited.insert(start_set.clone(), start_name.clone());
        queue.push_back((start_set, start_name));

        while let Some((current, current_name)) = queue.pop_front() {
            for &symbol in self.nfa.alphabet() {
                let target = self.nfa.epsilon_closure_of(&self.nfa.move_on(&current, symbol));

                if target.is_empty() && self.empty_targets == EmptyTargets::Omit {
                    continue;
                }

                let target_name = if let Some(name) = visited.get(&target) {
                    name.clone()
                } else {
                    let name = self.register(builder, &target)?;
                    visited.insert(target.clone(), name.clone());
                    queue.push_back((target, name.clone()));
                    name
                };

                builder.add_transition(&current_name, symbol, &target_name)?;
            }
        }

        Ok(())
    }

    /// Build a fresh [`Dfa`].
    pub fn run(self) -> Result<Dfa, AutomatonError> {
        let mut dfa = Dfa::new();
        self.build_into(&mut dfa)?;
        Ok(dfa)
    }
}
