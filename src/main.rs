use anyhow::Result;
use clap::{Parser, Subcommand};

use rexplain::{Pattern, TestOptions, build, describe, explain, test_pattern, tokens};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Describe a pattern in English
    Explain {
        /// Pattern source or /source/flags literal
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Also list the classified tokens
        #[arg(short = 't', long)]
        tokens: bool,
    },

    /// Build a pattern from a description
    Build {
        /// Description, e.g. "starts with foo" or "email"
        #[arg(value_name = "DESCRIPTION", required = true)]
        words: Vec<String>,
    },

    /// Run a pattern over sample text
    Test {
        /// Pattern source or /source/flags literal
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Sample text
        #[arg(value_name = "TEXT")]
        text: String,

        /// Flags, added to any given in a literal
        #[arg(short = 'f', long, default_value = "")]
        flags: String,

        /// Report the percentage of text covered by matches
        #[arg(short = 'c', long)]
        coverage: bool,

        /// Report distinct matches
        #[arg(short = 'u', long)]
        unique: bool,
    },
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Explain { pattern, tokens: list } => {
            println!("{}", explain(Some((&pattern).into()))?);
            if list {
                let source = rexplain::normalize(Some((&pattern).into()))?;
                for token in tokens(source) {
                    println!(
                        "{:>4}..{:<4} {:<12} {}",
                        token.start,
                        token.end,
                        format!("{:?}", token.kind),
                        token.phrase
                    );
                }
            }
        }
        Command::Build { words } => {
            let pattern = build(&words.join(" "))?;
            println!("{}", pattern);
            println!("{}", describe(pattern.source()));
        }
        Command::Test {
            pattern,
            text,
            flags,
            coverage,
            unique,
        } => {
            let literal = Pattern::parse_literal(&pattern)?;
            let pattern = Pattern::new(literal.source(), &format!("{}{}", literal.flags(), flags))?;
            let report = test_pattern(&pattern, &text, &TestOptions { coverage, unique });
            print!("{}", report);
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
