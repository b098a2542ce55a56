//! # propcalc
//!
//! propcalc is a propositional formula compiler written in Rust.
//! It tokenizes formulas over a small alphabet of variables, compiles them to
//! postfix programs with an operator-precedence parser, and evaluates those
//! programs to build truth tables and shade two-set diagrams.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    compiler::{
        alphabet::Alphabet,
        lexer::tokenize,
        parser::{Compilation, compile},
    },
    error::CompileError,
    region::Regions,
    table::TruthTable,
};

/// Turns formula text into runnable postfix programs.
///
/// This module ties together the alphabet, lexer, parser and evaluator.
/// Each stage is a pure function of its input; every edit to a formula is
/// handled by running the whole pipeline again.
///
/// # Responsibilities
/// - Normalizes aliases and splits text into tokens.
/// - Compiles tokens into postfix instructions, reporting errors as data.
/// - Evaluates instructions against variable assignments.
pub mod compiler;
/// Provides the error type of the compiler.
///
/// Compilation can fail in exactly two ways: an unknown token or unbalanced
/// parentheses. Both are returned inside a
/// [`Compilation`](compiler::parser::Compilation), never raised.
pub mod error;
/// Defines operators and the instructions of a postfix program.
///
/// The postfix instruction sequence is the only durable artifact of parsing;
/// no syntax tree is built.
pub mod program;
/// Classifies the regions of a two-set diagram.
///
/// A formula over two variables is evaluated at the corners where only the
/// first, only the second, or both are true. The three answers say which
/// regions of the diagram to shade.
pub mod region;
/// Enumerates truth tables.
///
/// Builds one row per assignment of a formula's variables, ordered so the
/// first discovered variable is the most significant bit.
pub mod table;

/// Tokenizes and compiles formula text in one step.
///
/// # Examples
/// ```
/// use propcalc::{compile_source, compiler::alphabet::Alphabet};
///
/// let compilation = compile_source("(P -> Q) <-> R", &Alphabet::builder());
/// assert!(compilation.is_ok());
/// assert_eq!(compilation.postfix(), "P Q → R ↔");
///
/// // `X` is not a variable of the builder alphabet.
/// let compilation = compile_source("P ^ X", &Alphabet::builder());
/// assert_eq!(compilation.error.unwrap().to_string(), "Unknown token: X");
/// assert!(compilation.instructions.is_empty());
/// ```
#[must_use]
pub fn compile_source(source: &str, alphabet: &Alphabet) -> Compilation {
    compile(&tokenize(source, alphabet))
}

/// Builds the truth table of formula text over `P`, `Q`, `R` and `S`.
///
/// # Examples
/// ```
/// use propcalc::truth_table;
///
/// let table = truth_table("P v ~P").unwrap();
/// assert!(table.is_tautology());
///
/// assert!(truth_table("(P").is_err());
/// ```
pub fn truth_table(source: &str) -> Result<TruthTable, CompileError> {
    TruthTable::from_tokens(&tokenize(source, &Alphabet::builder()))
}

/// Classifies formula text over `P` and `Q` for a two-set diagram.
///
/// # Examples
/// ```
/// use propcalc::classify_regions;
///
/// let regions = classify_regions("p or q").unwrap();
/// assert!(regions.left_only && regions.right_only && regions.both);
/// assert_eq!(regions.to_string(), "P-only:T  Q-only:T  P∧Q:T");
/// ```
pub fn classify_regions(source: &str) -> Result<Regions, CompileError> {
    Regions::from_source(source, &Alphabet::two_set())
}
