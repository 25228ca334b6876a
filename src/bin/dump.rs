use clap::Parser;
use std::process::ExitCode;

use fa_convert::{
    automaton::{Nfa, SubsetConstruction, EmptyTargets},
    error::Error,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Dot,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Dot => write!(f, "dot"),
        }
    }
}

/// Print an NFA, its equivalent DFA and whether they accept some words
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_name = "FILE")]
    nfa: String,
    
    #[arg(long, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    
    /// Leave transitions into the empty set undefined instead of adding a dead state
    #[arg(long, default_value_t = false)]
    omit_dead_state: bool,
    
    /// Only print the DFA
    #[arg(long, default_value_t = false)]
    dfa_only: bool,
    
    /// Print state counts to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
    
    /// Words to run through the DFA
    words: Vec<String>,
}

impl Args {
    fn empty_targets(&self) -> EmptyTargets {
        if self.omit_dead_state {
            EmptyTargets::Omit
        } else {
            EmptyTargets::DeadState
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    let nfa = Nfa::from_json(&args.nfa)?;
    let dfa = SubsetConstruction::new(&nfa).empty_targets(args.empty_targets()).run()?;
    
    if args.verbose {
        eprintln!("NFA: {} states, {} symbols", nfa.len(), nfa.alphabet().len());
        eprintln!("DFA: {} states, {} transitions", dfa.len(), dfa.transitions().count());
    }
    
    match args.format {
        OutputFormat::Table => {
            if !args.dfa_only {
                println!("{}", nfa);
            }
            println!("{}", dfa);
        },
        OutputFormat::Dot => {
            if !args.dfa_only {
                println!("{}", nfa.to_dot());
            }
            println!("{}", dfa.to_dot());
        },
    }
    
    for word in &args.words {
        let verdict = if dfa.accepts(word) { "accept" } else { "reject" };
        println!("{:?}: {}", word, verdict);
    }
    
    Ok(())
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
