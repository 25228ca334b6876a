//! Graph views of the automata for visualization with Graphviz.

use ahash::{AHashMap, AHashSet};
use petgraph::{
    dot::{Config, Dot},
    graph::{DiGraph, EdgeReference, NodeIndex},
};

use crate::automaton::{
    dfa::Dfa,
    nfa::Nfa,
};

fn render(graph: &DiGraph<String, char>, finals: &AHashSet<NodeIndex>) -> String {
    let edge_attributes = |_: &DiGraph<String, char>, edge: EdgeReference<char>| format!("label = {:?}", edge.weight().to_string());
    let node_attributes = |_: &DiGraph<String, char>, (idx, _): (NodeIndex, &String)| {
        if finals.contains(&idx) {
            "shape = doublecircle".to_string()
        } else {
            "shape = circle".to_string()
        }
    };

    Dot::with_attr_getters(graph, &[Config::EdgeNoLabel], &edge_attributes, &node_attributes).to_string()
}

impl Nfa {
    /// Build a graph with one node per state, weighted with the state name,
    /// and one edge per `(source, symbol, destination)` triple.
    pub fn to_graph(&self) -> DiGraph<String, char> {
        let mut graph = DiGraph::<String, char>::with_capacity(self.len(), self.len());
        let nodes: Vec<NodeIndex> = self.states().iter().map(|state| graph.add_node(state.name().to_string())).collect();

        for (src, state) in self.states().iter().enumerate() {
            for (symbol, targets) in state.transitions() {
                for dst in targets {
                    graph.add_edge(nodes[src], nodes[dst.index()], symbol);
                }
            }
        }

        graph
    }

    /// Render the automaton in the DOT language. Accepting states are drawn as double circles.
    pub fn to_dot(&self) -> String {
        let finals = self.states().iter().enumerate().filter(|(_, state)| state.is_final()).map(|(idx, _)| NodeIndex::new(idx)).collect();
        render(&self.to_graph(), &finals)
    }
}

impl Dfa {
    /// Build a graph with one node per state, weighted with the state name,
    /// and one edge per transition.
    pub fn to_graph(&self) -> DiGraph<String, char> {
        let mut graph = DiGraph::<String, char>::with_capacity(self.len(), self.len() * self.alphabet().len());

        let nodes: AHashMap<&str, NodeIndex> = self.states().iter().map(|state| (state.name(), graph.add_node(state.name().to_string()))).collect();

        for (src, symbol, dst) in self.transitions() {
            graph.add_edge(nodes[src.name()], nodes[dst.name()], symbol);
        }

        graph
    }

    /// Render the automaton in the DOT language. Accepting states are drawn as double circles.
    pub fn to_dot(&self) -> String {
        let finals = self.states().iter().enumerate().filter(|(_, state)| state.is_final()).map(|(idx, _)| NodeIndex::new(idx)).collect();
        render(&self.to_graph(), &finals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfa_graph() {
        let mut nfa = Nfa::new();
        nfa.add_start_state("a").unwrap();
        nfa.add_final_state("b").unwrap();
        nfa.add_transition("a", '0', "a").unwrap();
        nfa.add_transition("a", '0', "b").unwrap();
        nfa.add_transition("b", 'e', "a").unwrap();

        let graph = nfa.to_graph();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 3);

        let dot = nfa.to_dot();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("doublecircle"));
        assert!(dot.contains("label = \"e\""));
    }

    #[test]
    fn test_dfa_graph() {
        let mut nfa = Nfa::new();
        nfa.add_start_state("a").unwrap();
        nfa.add_final_state("b").unwrap();
        nfa.add_transition("a", '1', "b").unwrap();

        let dfa = nfa.to_dfa().unwrap();
        let graph = dfa.to_graph();
        // [a], [b] and the dead state, each with one edge on '1'
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.node_weights().any(|name| name == "[b]"));
        assert!(dfa.to_dot().contains("\"[]\""));
    }

    #[test]
    fn test_dot_escapes_symbols() {
        let mut nfa = Nfa::new();
        nfa.add_start_state("a").unwrap();
        nfa.add_final_state("b").unwrap();
        nfa.add_transition("a", '"', "b").unwrap();
        nfa.add_transition("b", '\\', "a").unwrap();

        let dot = nfa.to_dot();
        assert!(dot.contains(r#"label = "\"""#));
        assert!(dot.contains(r#"label = "\\""#));
    }
}
