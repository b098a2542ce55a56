#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while compiling a formula.
pub enum CompileError {
    /// A token is neither a variable of the active alphabet, an operator nor
    /// a parenthesis.
    UnknownToken {
        /// The offending token text.
        token: String,
    },
    /// A `)` had no matching `(`, or a `(` was never closed.
    MismatchedParentheses,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownToken { token } => write!(f, "Unknown token: {token}"),
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses"),
        }
    }
}

impl std::error::Error for CompileError {}
