use std::{fmt, sync::LazyLock};

use log::{debug, trace};
use logos::Logos;
use regex::{Captures, Regex};

use crate::{compiler::alphabet::Alphabet, program::Operator};

/// A token of a propositional formula.
///
/// Tokens come either from [`tokenize`] or from a canvas of pre-split strings
/// classified with [`Token::classify`]. Text that is none of the known kinds
/// is kept verbatim as [`Token::Unknown`] so the parser can report it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A variable letter of the active alphabet, such as `P`.
    Variable(char),
    /// One of the five connectives.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Anything else, such as `X`, `1` or `foo`.
    Unknown(String),
}

impl Token {
    /// Classifies a single pre-split string, as dropped on a canvas.
    ///
    /// No aliases are rewritten here; `->` stays an unknown token.
    ///
    /// # Example
    /// ```
    /// use propcalc::{
    ///     compiler::{alphabet::Alphabet, lexer::Token},
    ///     program::Operator,
    /// };
    ///
    /// let alphabet = Alphabet::builder();
    /// assert_eq!(Token::classify("Q", &alphabet), Token::Variable('Q'));
    /// assert_eq!(Token::classify("∧", &alphabet), Token::Operator(Operator::And));
    /// assert_eq!(Token::classify("T", &alphabet), Token::Unknown("T".to_string()));
    /// ```
    #[must_use]
    pub fn classify(text: &str, alphabet: &Alphabet) -> Self {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if alphabet.contains(letter) => Self::Variable(letter),
            (Some('('), None) => Self::LeftParen,
            (Some(')'), None) => Self::RightParen,
            (Some(glyph), None) => {
                Operator::from_glyph(glyph).map_or_else(|| Self::Unknown(text.to_string()),
                                                        Self::Operator)
            },
            _ => Self::Unknown(text.to_string()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Unknown(text) => write!(f, "{text}"),
        }
    }
}

/// Raw lexemes of normalized formula text.
#[derive(Logos, Debug, PartialEq, Clone)]
enum Lexeme {
    /// `¬`
    #[token("¬")]
    Not,
    /// `∧`
    #[token("∧")]
    And,
    /// `∨`
    #[token("∨")]
    Or,
    /// `→`
    #[token("→")]
    Implies,
    /// `↔`
    #[token("↔")]
    Iff,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A run of ASCII word characters, such as `PQ` or `x1`.
    #[regex(r"[A-Za-z0-9_]+", |lex| lex.slice().to_string())]
    Word(String),
    /// Whitespace, including non-breaking spaces.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Connective words understood by alphabets with word aliases, as whole
/// ASCII words in any case.
static WORD_ALIASES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)\b(iff|implies|not|and|or)\b").expect("connective pattern is valid")
});

/// Whole ASCII words made of a single letter.
static LONE_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)\b[A-Za-z]\b").expect("letter pattern is valid"));

fn word_alias(word: &str) -> Option<Operator> {
    match word.to_ascii_lowercase().as_str() {
        "iff" => Some(Operator::Iff),
        "implies" => Some(Operator::Implies),
        "not" => Some(Operator::Not),
        "and" => Some(Operator::And),
        "or" => Some(Operator::Or),
        _ => None,
    }
}

/// Rewrites operator aliases in `source` to their canonical glyphs.
///
/// Symbol aliases are always rewritten: `<->` and `<=>` to `↔`, `->` to `→`,
/// `~` to `¬` and `^` to `∧`. Every lower case `v` becomes `∨`, even inside a
/// longer word, so `vP` reads as `∨P`.
///
/// With word aliases, whole words `iff`, `implies`, `not`, `and` and `or` are
/// rewritten in any case, an upper case `V` also becomes `∨`, and a whole
/// word made of one lower case alphabet letter is upper-cased.
///
/// # Example
/// ```
/// use propcalc::compiler::{alphabet::Alphabet, lexer::normalize};
///
/// assert_eq!(normalize("P -> ~Q", &Alphabet::builder()), "P → ¬Q");
/// assert_eq!(normalize("p AND not q", &Alphabet::two_set()), "P ∧ ¬ Q");
/// ```
#[must_use]
pub fn normalize(source: &str, alphabet: &Alphabet) -> String {
    let mut text = source.replace("<->", "↔")
                         .replace("<=>", "↔")
                         .replace("->", "→")
                         .replace('~', "¬")
                         .replace('^', "∧");

    if alphabet.word_aliases() {
        text = WORD_ALIASES.replace_all(&text, |caps: &Captures| {
                               word_alias(&caps[0]).map_or_else(|| caps[0].to_string(),
                                                                |op| op.glyph().to_string())
                           })
                           .into_owned();
        text = text.replace(['v', 'V'], "∨");
        text = LONE_LETTERS.replace_all(&text, |caps: &Captures| {
                               let upper = caps[0].to_ascii_uppercase();
                               if upper.chars().all(|letter| alphabet.contains(letter)) {
                                   upper
                               } else {
                                   caps[0].to_string()
                               }
                           })
                           .into_owned();
    } else {
        text = text.replace('v', "∨");
    }

    text
}

/// Tokenizes formula text.
///
/// The text is [`normalize`]d, then split into glyphs, parentheses and word
/// runs. A word run yields one variable per leading alphabet letter and one
/// opaque token for whatever follows, so `PQ` is two variables while `XP` is
/// a single unknown token. Any other character becomes its own unknown token.
///
/// Empty input gives no tokens. Nothing here fails.
///
/// # Example
/// ```
/// use propcalc::{
///     compiler::{
///         alphabet::Alphabet,
///         lexer::{Token, tokenize},
///     },
///     program::Operator,
/// };
///
/// let tokens = tokenize("(P^Q)", &Alphabet::builder());
/// assert_eq!(tokens,
///            vec![Token::LeftParen,
///                 Token::Variable('P'),
///                 Token::Operator(Operator::And),
///                 Token::Variable('Q'),
///                 Token::RightParen]);
/// ```
#[must_use]
pub fn tokenize(source: &str, alphabet: &Alphabet) -> Vec<Token> {
    if source.is_empty() {
        return Vec::new();
    }

    let normalized = normalize(source, alphabet);
    trace!("normalized {source:?} to {normalized:?}");

    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(&normalized);

    while let Some(lexeme) = lexer.next() {
        match lexeme {
            Ok(Lexeme::Not) => tokens.push(Token::Operator(Operator::Not)),
            Ok(Lexeme::And) => tokens.push(Token::Operator(Operator::And)),
            Ok(Lexeme::Or) => tokens.push(Token::Operator(Operator::Or)),
            Ok(Lexeme::Implies) => tokens.push(Token::Operator(Operator::Implies)),
            Ok(Lexeme::Iff) => tokens.push(Token::Operator(Operator::Iff)),
            Ok(Lexeme::LParen) => tokens.push(Token::LeftParen),
            Ok(Lexeme::RParen) => tokens.push(Token::RightParen),
            Ok(Lexeme::Word(word)) => split_word(&word, alphabet, &mut tokens),
            Ok(Lexeme::Ignored) => {},
            Err(()) => tokens.push(Token::Unknown(lexer.slice().to_string())),
        }
    }

    debug!("tokenized {source:?} into {} tokens", tokens.len());
    tokens
}

/// Classifies a canvas of pre-split strings with [`Token::classify`].
#[must_use]
pub fn tokens_from_strs<S>(texts: &[S], alphabet: &Alphabet) -> Vec<Token>
    where S: AsRef<str>
{
    texts.iter()
         .map(|text| Token::classify(text.as_ref(), alphabet))
         .collect()
}

/// Re-reads a canvas as free text, so its strings get the dialect's aliases
/// and letter casing before tokenizing.
///
/// # Example
/// ```
/// use propcalc::compiler::{alphabet::Alphabet, lexer::{tokenize, tokenize_canvas}};
///
/// let alphabet = Alphabet::two_set();
/// assert_eq!(tokenize_canvas(&["p", "and", "q"], &alphabet),
///            tokenize("P ∧ Q", &alphabet));
/// ```
#[must_use]
pub fn tokenize_canvas<S>(texts: &[S], alphabet: &Alphabet) -> Vec<Token>
    where S: AsRef<str>
{
    let text = texts.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
    tokenize(&text, alphabet)
}

/// Joins tokens with single spaces, the way a canvas shows them as text.
#[must_use]
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}

fn split_word(word: &str, alphabet: &Alphabet, tokens: &mut Vec<Token>) {
    let mut rest = word;
    while let Some(letter) = rest.chars().next().filter(|c| alphabet.contains(*c)) {
        tokens.push(Token::Variable(letter));
        rest = &rest[letter.len_utf8()..];
    }
    if !rest.is_empty() {
        tokens.push(Token::Unknown(rest.to_string()));
    }
}
