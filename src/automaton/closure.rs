//! Epsilon closures and symbol moves over the states of an [`Nfa`].

use crate::automaton::{
    nfa::Nfa,
    state::{StateId, StateSet},
};

impl Nfa {
    /// All states reachable from `state` using only epsilon transitions,
    /// including `state` itself.
    pub fn epsilon_closure(&self, state: StateId) -> StateSet {
        self.epsilon_closure_of(&StateSet::from([state]))
    }

    /// The union of the epsilon closures of all members of `states`.
    ///
    /// Works on cyclic epsilon graphs: a state is only expanded the first
    /// time it enters the closure.
    pub fn epsilon_closure_of(&self, states: &StateSet) -> StateSet {
        let mut closure = states.clone();
        let mut stack: Vec<StateId> = states.iter().copied().collect();

        while let Some(state) = stack.pop() {
            for &target in self.state(state).transitions_on(self.epsilon()) {
                if closure.insert(target) {
                    stack.push(target);
                }
            }
        }

        closure
    }

    /// All states that some member of `states` reaches directly on `symbol`.
    /// `symbol` must not be the epsilon marker.
    pub fn move_on(&self, states: &StateSet, symbol: char) -> StateSet {
        debug_assert_ne!(symbol, self.epsilon(), "move_on() does not follow epsilon transitions");

        let mut targets = StateSet::new();

        for &state in states {
            targets.extend(self.state(state).transitions_on(symbol).iter().copied());
        }

        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(nfa: &Nfa, set: &StateSet) -> Vec<String> {
        set.iter().map(|id| nfa.state(*id).name().to_string()).collect()
    }

    fn chain() -> Nfa {
        // q0 -e-> q1 -e-> q2, q2 -a-> q3, q1 -a-> q0
        let mut nfa = Nfa::new();
        nfa.add_start_state("q0").unwrap();
        nfa.add_state("q1", false).unwrap();
        nfa.add_state("q2", false).unwrap();
        nfa.add_final_state("q3").unwrap();
        nfa.add_transition("q0", 'e', "q1").unwrap();
        nfa.add_transition("q1", 'e', "q2").unwrap();
        nfa.add_transition("q2", 'a', "q3").unwrap();
        nfa.add_transition("q1", 'a', "q0").unwrap();
        nfa
    }

    #[test]
    fn test_closure_follows_chains() {
        let nfa = chain();
        let q0 = nfa.state_id("q0").unwrap();
        let q3 = nfa.state_id("q3").unwrap();

        assert_eq!(names(&nfa, &nfa.epsilon_closure(q0)), vec!["q0", "q1", "q2"]);
        assert_eq!(names(&nfa, &nfa.epsilon_closure(q3)), vec!["q3"]);
    }

    #[test]
    fn test_closure_on_cycle() {
        let mut nfa = Nfa::new();
        nfa.add_start_state("q0").unwrap();
        nfa.add_final_state("q1").unwrap();
        nfa.add_state("q2", false).unwrap();
        nfa.add_transition("q0", 'e', "q1").unwrap();
        nfa.add_transition("q1", 'e', "q0").unwrap();
        nfa.add_transition("q1", 'e', "q1").unwrap();

        let q0 = nfa.state_id("q0").unwrap();
        let q1 = nfa.state_id("q1").unwrap();
        let closure = nfa.epsilon_closure(q0);

        assert_eq!(names(&nfa, &closure), vec!["q0", "q1"]);
        assert_eq!(nfa.epsilon_closure(q1), closure);
        assert_eq!(nfa.epsilon_closure_of(&closure), closure);
    }

    #[test]
    fn test_closure_of_union() {
        let nfa = chain();
        let set = StateSet::from([nfa.state_id("q1").unwrap(), nfa.state_id("q3").unwrap()]);
        assert_eq!(names(&nfa, &nfa.epsilon_closure_of(&set)), vec!["q1", "q2", "q3"]);
        assert!(nfa.epsilon_closure_of(&StateSet::new()).is_empty());
    }

    #[test]
    fn test_move() {
        let nfa = chain();
        let closure = nfa.epsilon_closure(nfa.state_id("q0").unwrap());

        assert_eq!(names(&nfa, &nfa.move_on(&closure, 'a')), vec!["q0", "q3"]);
        assert!(nfa.move_on(&closure, 'b').is_empty());
        assert!(nfa.move_on(&StateSet::new(), 'a').is_empty());
    }

    #[test]
    fn test_move_ignores_epsilon_edges() {
        let nfa = chain();
        let q0 = StateSet::from([nfa.state_id("q0").unwrap()]);
        assert!(nfa.move_on(&q0, 'a').is_empty());
    }
}
