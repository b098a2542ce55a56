use std::process::ExitCode;

use clap::{Parser, Subcommand};
use propcalc::{
    compiler::{
        alphabet::Alphabet,
        lexer::{Token, tokenize, tokenize_canvas, tokens_from_strs},
        parser::compile,
    },
    error::CompileError,
    region::Regions,
    table::{TruthTable, label_for},
};

/// propcalc compiles propositional formulas and prints their truth tables or
/// two-set diagram shading.
///
/// Operators may be written as glyphs (`¬ ∧ ∨ → ↔`) or as `~ ^ v -> <->`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the truth table of a formula over `P`, `Q`, `R` and `S`.
    Table {
        #[command(flatten)]
        formula:  FormulaArgs,
        /// Only print whether the formula is a tautology.
        #[arg(short, long)]
        no_table: bool,
    },
    /// Prints which regions of a `P`/`Q` diagram a formula shades.
    ///
    /// Also accepts `and`, `or`, `not`, `implies` and `iff`.
    Venn {
        #[command(flatten)]
        formula: FormulaArgs,
    },
}

#[derive(clap::Args, Debug)]
struct FormulaArgs {
    /// Treat the formula as whitespace separated tokens, as laid out on a
    /// canvas, instead of free text.
    #[arg(short, long)]
    tokens: bool,

    /// Also print the compiled postfix program.
    #[arg(short, long)]
    rpn: bool,

    #[arg(allow_hyphen_values = true)]
    formula: String,
}

impl FormulaArgs {
    fn canvas(&self) -> Vec<&str> {
        self.formula.split_whitespace().collect()
    }

    /// Canvas strings are taken verbatim.
    fn builder_tokens(&self, alphabet: &Alphabet) -> Vec<Token> {
        if self.tokens {
            tokens_from_strs(&self.canvas(), alphabet)
        } else {
            tokenize(&self.formula, alphabet)
        }
    }

    /// Canvas strings are read back as text, so aliases such as `and` or a
    /// lower case `p` still apply.
    fn venn_tokens(&self, alphabet: &Alphabet) -> Vec<Token> {
        if self.tokens {
            tokenize_canvas(&self.canvas(), alphabet)
        } else {
            tokenize(&self.formula, alphabet)
        }
    }
}

fn run(command: Command) -> Result<(), CompileError> {
    match command {
        Command::Table { formula, no_table } => {
            let tokens = formula.builder_tokens(&Alphabet::builder());
            let compilation = compile(&tokens);
            if formula.rpn && compilation.is_ok() {
                println!("{}", compilation.postfix());
            }

            let table = TruthTable::build(&compilation, label_for(&tokens))?;
            if !no_table {
                table.to_table().printstd();
            }

            if table.is_tautology() {
                println!("This is a tautology!");
            } else if table.is_contradiction() {
                println!("This is a contradiction!");
            } else {
                println!("This is NOT a tautology!");
            }
        },
        Command::Venn { formula } => {
            let alphabet = Alphabet::two_set();
            let compilation = compile(&formula.venn_tokens(&alphabet));
            let instructions = compilation.result().map_err(CompileError::clone)?;
            if formula.rpn {
                println!("{}", compilation.postfix());
            }

            let (first, second) = alphabet.pair().unwrap_or(('P', 'Q'));
            println!("{}", Regions::classify(instructions, first, second));
        },
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args.command) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
