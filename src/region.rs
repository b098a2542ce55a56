use std::fmt;

use log::debug;

use crate::{
    compiler::{
        alphabet::Alphabet,
        evaluator::{Assignment, evaluate},
        lexer::tokenize,
        parser::{CompileResult, compile},
    },
    error::CompileError,
    program::{Instruction, Operator},
};

/// Which parts of a two-set diagram a formula covers.
///
/// The outside of both sets, where both variables are false, is never
/// evaluated and has no flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Variable naming the left set.
    pub first:      char,
    /// Variable naming the right set.
    pub second:     char,
    /// Inside the left set only.
    pub left_only:  bool,
    /// Inside the right set only.
    pub right_only: bool,
    /// Inside both sets.
    pub both:       bool,
}

impl Regions {
    /// Evaluates a compiled formula at the three shaded corners.
    ///
    /// # Example
    /// ```
    /// use propcalc::{
    ///     program::{Instruction, Operator},
    ///     region::Regions,
    /// };
    ///
    /// let program = [Instruction::PushVariable('P'),
    ///                Instruction::PushVariable('Q'),
    ///                Instruction::Apply(Operator::And)];
    ///
    /// let regions = Regions::classify(&program, 'P', 'Q');
    /// assert!(!regions.left_only);
    /// assert!(!regions.right_only);
    /// assert!(regions.both);
    /// ```
    #[must_use]
    pub fn classify(instructions: &[Instruction], first: char, second: char) -> Self {
        let at = |left: bool, right: bool| {
            evaluate(instructions, &Assignment::from([(first, left), (second, right)]))
        };

        Self { first,
               second,
               left_only: at(true, false),
               right_only: at(false, true),
               both: at(true, true) }
    }

    /// Tokenizes and compiles `source` over `alphabet`, then classifies it
    /// against the alphabet's first two letters.
    ///
    /// An alphabet with fewer than two letters has no diagram and reports
    /// every region unshaded.
    ///
    /// # Errors
    /// Returns the compilation error, if any.
    pub fn from_source(source: &str, alphabet: &Alphabet) -> CompileResult<Self> {
        let compilation = compile(&tokenize(source, alphabet));
        let instructions = compilation.result().map_err(CompileError::clone)?;

        let regions = match alphabet.pair() {
            Some((first, second)) => Self::classify(instructions, first, second),
            None => Self::empty('P', 'Q'),
        };
        debug!("classified {source:?}: {regions}");

        Ok(regions)
    }

    /// No region shaded.
    #[must_use]
    pub const fn empty(first: char, second: char) -> Self {
        Self { first,
               second,
               left_only: false,
               right_only: false,
               both: false }
    }

    /// Whether any region is shaded.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.left_only || self.right_only || self.both
    }
}

impl fmt::Display for Regions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |value: bool| if value { 'T' } else { 'F' };
        write!(f,
               "{first}-only:{}  {second}-only:{}  {first}{and}{second}:{}",
               mark(self.left_only),
               mark(self.right_only),
               mark(self.both),
               first = self.first,
               second = self.second,
               and = Operator::And.glyph())
    }
}
