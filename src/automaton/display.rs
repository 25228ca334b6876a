use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;

use crate::automaton::{
    dfa::Dfa,
    nfa::Nfa,
};

/* Both automata are printed as
 *   Q = { .. }
 *   Sigma = { .. }
 *   delta =
 *       <transition table>
 *   q0 = <start>
 *   F = { .. }
 */

const NO_ENTRY: &str = "-";

fn write_set<I>(f: &mut Formatter, label: &str, items: I) -> FmtResult
where
    I: IntoIterator,
    I::Item: Display,
{
    writeln!(f, "{} = {{ {} }}", label, items.into_iter().join(" "))
}

impl Display for Nfa {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        let has_epsilon = self.states().iter().any(|state| !state.transitions_on(self.epsilon()).is_empty());
        let columns: Vec<char> = self.alphabet().iter().copied().chain(has_epsilon.then_some(self.epsilon())).collect();

        write_set(f, "Q", self.states().iter().map(|state| state.name()))?;
        write_set(f, "Sigma", self.alphabet())?;
        writeln!(f, "delta =")?;
        writeln!(f, "\t\t{}", columns.iter().join("\t"))?;

        for state in self.states() {
            write!(f, "\t{}", state.name())?;

            for symbol in &columns {
                let targets = state.transitions_on(*symbol);

                if targets.is_empty() {
                    write!(f, "\t{}", NO_ENTRY)?;
                } else {
                    write!(f, "\t{{{}}}", targets.iter().map(|id| self.state(*id).name()).join(","))?;
                }
            }

            writeln!(f)?;
        }

        match self.start() {
            Some(start) => writeln!(f, "q0 = {}", self.state(start).name())?,
            None => writeln!(f, "q0 = {}", NO_ENTRY)?,
        }

        write_set(f, "F", self.final_states().map(|state| state.name()))
    }
}

impl Display for Dfa {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write_set(f, "Q", self.states().iter().map(|state| state.name()))?;
        write_set(f, "Sigma", self.alphabet())?;
        writeln!(f, "delta =")?;
        writeln!(f, "\t\t{}", self.alphabet().iter().join("\t"))?;

        for state in self.states() {
            write!(f, "\t{}", state.name())?;

            for symbol in self.alphabet() {
                match self.transition(state.name(), *symbol) {
                    Some(target) => write!(f, "\t{}", target.name())?,
                    None => write!(f, "\t{}", NO_ENTRY)?,
                }
            }

            writeln!(f)?;
        }

        writeln!(f, "q0 = {}", self.start().map(|state| state.name()).unwrap_or(NO_ENTRY))?;

        write_set(f, "F", self.final_states().map(|state| state.name()))
    }
}
