/// The variable letters a formula may use, and how its aliases are read.
///
/// Letters are upper case ASCII. An alphabet with word aliases also rewrites
/// `iff`, `implies`, `not`, `and`, `or` and an upper case `V` to operators and
/// upper-cases stray lower case variable letters; one without only rewrites
/// symbol aliases and a lower case `v`.
///
/// A `V` in an alphabet with word aliases can never be written as text,
/// since the lexer reads it as `∨` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters:      Vec<char>,
    word_aliases: bool,
}

impl Alphabet {
    /// Builds an alphabet from arbitrary letters.
    ///
    /// Letters that are not upper case ASCII are dropped, as are duplicates.
    ///
    /// # Example
    /// ```
    /// use propcalc::compiler::alphabet::Alphabet;
    ///
    /// let alphabet = Alphabet::new("ABBa1".chars(), false);
    /// assert_eq!(alphabet.letters(), &['A', 'B']);
    /// ```
    #[must_use]
    pub fn new<I>(letters: I, word_aliases: bool) -> Self
        where I: IntoIterator<Item = char>
    {
        let mut kept = Vec::new();
        for letter in letters {
            if letter.is_ascii_uppercase() && !kept.contains(&letter) {
                kept.push(letter);
            }
        }
        Self { letters: kept,
               word_aliases }
    }

    /// `P`, `Q`, `R` and `S`, with symbol aliases only.
    #[must_use]
    pub fn builder() -> Self {
        Self::new(['P', 'Q', 'R', 'S'], false)
    }

    /// `P` and `Q`, with symbol and word aliases.
    #[must_use]
    pub fn two_set() -> Self {
        Self::new(['P', 'Q'], true)
    }

    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Whether connective words and upper case `V` are read as operators.
    #[must_use]
    pub const fn word_aliases(&self) -> bool {
        self.word_aliases
    }

    /// The first two letters, which name the left and right sets of a
    /// two-set diagram.
    #[must_use]
    pub fn pair(&self) -> Option<(char, char)> {
        match self.letters.as_slice() {
            [first, second, ..] => Some((*first, *second)),
            _ => None,
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::builder()
    }
}
