use clap::Parser;
use std::process::ExitCode;

use fa_convert::{
    automaton::{Nfa, SubsetConstruction, EmptyTargets},
    backends::json::JsonGenerator,
    error::Error,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
enum EmptyTargetPolicy {
    DeadState,
    Omit,
}

impl From<EmptyTargetPolicy> for EmptyTargets {
    fn from(policy: EmptyTargetPolicy) -> Self {
        match policy {
            EmptyTargetPolicy::DeadState => EmptyTargets::DeadState,
            EmptyTargetPolicy::Omit => EmptyTargets::Omit,
        }
    }
}

impl std::fmt::Display for EmptyTargetPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyTargetPolicy::DeadState => write!(f, "dead-state"),
            EmptyTargetPolicy::Omit => write!(f, "omit"),
        }
    }
}

/// Convert an NFA description into an equivalent DFA description
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_name = "FILE")]
    nfa: String,
    
    #[arg(short, long, value_name = "FILE")]
    output: String,
    
    #[arg(long, default_value_t = EmptyTargetPolicy::DeadState)]
    empty_targets: EmptyTargetPolicy,
}

fn run(args: Args) -> Result<(), Error> {
    let nfa = Nfa::from_json(&args.nfa)?;
    let dfa = SubsetConstruction::new(&nfa)
        .empty_targets(args.empty_targets.into())
        .run()?;
    JsonGenerator::new().generate(&args.output, &dfa)
}

fn main() -> ExitCode {
    let args = Args::parse();
    
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(policy: Option<&str>, output: &str) -> Nfa {
        let output = std::env::temp_dir().join(output);
        let output = output.to_str().unwrap();
        let mut argv = vec!["fa-convert", "--nfa", "test-data/automata/partial.json", "-o", output];

        if let Some(policy) = policy {
            argv.extend(["--empty-targets", policy]);
        }

        run(Args::try_parse_from(argv).unwrap()).unwrap();
        Nfa::from_json(output).unwrap()
    }

    #[test]
    fn test_policy_mapping() {
        assert_eq!(EmptyTargets::from(EmptyTargetPolicy::DeadState), EmptyTargets::DeadState);
        assert_eq!(EmptyTargets::from(EmptyTargetPolicy::Omit), EmptyTargets::Omit);

        let args = Args::try_parse_from(["fa-convert", "--nfa", "a.json", "-o", "b.json"]).unwrap();
        assert_eq!(args.empty_targets, EmptyTargetPolicy::DeadState);

        let args = Args::try_parse_from(["fa-convert", "--nfa", "a.json", "-o", "b.json", "--empty-targets", "omit"]).unwrap();
        assert_eq!(args.empty_targets, EmptyTargetPolicy::Omit);

        assert!(Args::try_parse_from(["fa-convert", "--nfa", "a.json", "-o", "b.json", "--empty-targets", "none"]).is_err());
    }

    #[test]
    fn test_convert_with_dead_state() {
        let dfa = convert(None, "fa-convert-cli-dead-state.json");

        assert_eq!(dfa.len(), 3);
        assert!(dfa.state_id("[]").is_some());
        assert!(dfa.accepts("bba"));
        assert!(!dfa.accepts("ab"));
    }

    #[test]
    fn test_convert_omit() {
        let dfa = convert(Some("omit"), "fa-convert-cli-omit.json");

        assert_eq!(dfa.len(), 2);
        assert!(dfa.state_id("[]").is_none());
        assert!(dfa.accepts("bba"));
        assert!(!dfa.accepts("ab"));
    }

    #[test]
    fn test_missing_input() {
        let args = Args::try_parse_from(["fa-convert", "--nfa", "test-data/automata/missing.json", "-o", "unused.json"]).unwrap();
        assert!(matches!(run(args), Err(Error::Parsing(_))));
    }
}
