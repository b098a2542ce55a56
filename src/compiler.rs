/// The alphabet module fixes which letters are variables.
///
/// An [`Alphabet`](alphabet::Alphabet) carries the variable letters of a
/// caller together with its alias policy: the general formula builder accepts
/// `P`, `Q`, `R` and `S` with symbol aliases only, while the two-set diagram
/// accepts `P` and `Q` and also understands English connective words.
pub mod alphabet;
/// The evaluator module runs postfix programs.
///
/// The evaluator executes a compiled instruction sequence on a stack of
/// booleans against one variable assignment. It never fails: missing
/// variables and missing operands read as `false`.
pub mod evaluator;
/// The lexer module tokenizes formula text.
///
/// The lexer rewrites ASCII and word aliases to the canonical operator
/// glyphs, then splits the normalized text into variables, operators,
/// parentheses and opaque leftovers. It never reports errors; anything it
/// does not understand is kept so the parser can name it.
///
/// # Responsibilities
/// - Normalizes `->`, `<->`, `~`, `^`, `v` and (optionally) connective words.
/// - Converts text, or pre-split canvas strings, into [`Token`](lexer::Token)s.
pub mod lexer;
/// The parser module compiles tokens into a postfix program.
///
/// The parser is an operator-precedence (shunting-yard) parser. It validates
/// parenthesis balance and token well-formedness and records variables in
/// the order they are first seen.
///
/// # Responsibilities
/// - Converts tokens into [`Instruction`](crate::program::Instruction)s.
/// - Reports unknown tokens and unbalanced parentheses as data.
pub mod parser;
