use log::debug;

use crate::{
    compiler::{
        evaluator::{Assignment, evaluate},
        lexer::Token,
    },
    error::CompileError,
    program::{Instruction, Operator},
};

pub type CompileResult<T> = Result<T, CompileError>;

/// The outcome of compiling a token sequence.
///
/// Failure is carried as data: when `error` is set, `instructions` is empty
/// and `variables` lists the variables seen before the failing token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compilation {
    /// Distinct variables in order of first appearance.
    pub variables:    Vec<char>,
    /// The postfix program.
    pub instructions: Vec<Instruction>,
    /// Why compilation failed, if it did.
    pub error:        Option<CompileError>,
}

impl Compilation {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Views the compilation as a `Result` over its program.
    pub fn result(&self) -> Result<&[Instruction], &CompileError> {
        match &self.error {
            Some(error) => Err(error),
            None => Ok(self.instructions.as_slice()),
        }
    }

    /// Evaluates the program under `assignment`.
    ///
    /// A failed compilation has no instructions and so evaluates to `false`.
    #[must_use]
    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        evaluate(&self.instructions, assignment)
    }

    /// Renders the program in postfix notation, one instruction per word.
    #[must_use]
    pub fn postfix(&self) -> String {
        self.instructions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Entries waiting on the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    Open,
}

/// Compiles tokens into a postfix program with the shunting-yard algorithm.
///
/// Precedence runs `¬` > `∧` > `∨` > `→` = `↔`. Negation is right
/// associative and every binary operator is left associative, so `P → Q → R`
/// compiles as `(P → Q) → R`. Operator arity is not checked; a dangling
/// operator compiles and its missing operands evaluate as `false`.
///
/// This never panics. See [`Compilation`] for how failures are reported.
///
/// # Example
/// ```
/// use propcalc::{
///     compiler::{alphabet::Alphabet, lexer::tokenize, parser::compile},
///     program::{Instruction, Operator},
/// };
///
/// let compilation = compile(&tokenize("P ∨ Q ∧ R", &Alphabet::builder()));
/// assert_eq!(compilation.variables, vec!['P', 'Q', 'R']);
/// assert_eq!(compilation.instructions,
///            vec![Instruction::PushVariable('P'),
///                 Instruction::PushVariable('Q'),
///                 Instruction::PushVariable('R'),
///                 Instruction::Apply(Operator::And),
///                 Instruction::Apply(Operator::Or)]);
/// ```
#[must_use]
pub fn compile(tokens: &[Token]) -> Compilation {
    let mut variables = Vec::new();

    match shunt(tokens, &mut variables) {
        Ok(instructions) => {
            debug!("compiled {} tokens into {} instructions", tokens.len(), instructions.len());
            Compilation { variables,
                          instructions,
                          error: None }
        },
        Err(error) => {
            debug!("compilation failed: {error}");
            Compilation { variables,
                          instructions: Vec::new(),
                          error: Some(error) }
        },
    }
}

fn shunt(tokens: &[Token], variables: &mut Vec<char>) -> CompileResult<Vec<Instruction>> {
    let mut stack: Vec<Pending> = Vec::new();
    let mut output = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Variable(name) => {
                if !variables.contains(name) {
                    variables.push(*name);
                }
                output.push(Instruction::PushVariable(*name));
            },
            Token::Operator(op) => {
                while let Some(Pending::Operator(top)) = stack.last().copied()
                      && op.yields_to(top)
                {
                    stack.pop();
                    output.push(Instruction::Apply(top));
                }
                stack.push(Pending::Operator(*op));
            },
            Token::LeftParen => stack.push(Pending::Open),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Pending::Operator(op)) => output.push(Instruction::Apply(op)),
                    Some(Pending::Open) => break,
                    None => return Err(CompileError::MismatchedParentheses),
                }
            },
            Token::Unknown(text) => {
                return Err(CompileError::UnknownToken { token: text.clone() });
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(Instruction::Apply(op)),
            Pending::Open => return Err(CompileError::MismatchedParentheses),
        }
    }

    Ok(output)
}
