use std::fmt;

/// How operators of equal precedence group when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a ∘ b ∘ c` groups as `(a ∘ b) ∘ c`.
    Left,
    /// `∘ ∘ a` groups as `∘ (∘ a)`.
    Right,
}

/// A propositional connective.
///
/// Every property of an operator (its glyph, arity, precedence and
/// associativity) is decided by an exhaustive `match`, so adding a connective
/// is checked by the compiler everywhere it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Negation, `¬`.
    Not,
    /// Conjunction, `∧`.
    And,
    /// Disjunction, `∨`.
    Or,
    /// Material implication, `→`.
    Implies,
    /// Biconditional, `↔`.
    Iff,
}

impl Operator {
    /// All operators, in palette order.
    pub const ALL: [Self; 5] = [Self::Not, Self::And, Self::Or, Self::Implies, Self::Iff];

    /// Returns the canonical glyph of the operator.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Not => '¬',
            Self::And => '∧',
            Self::Or => '∨',
            Self::Implies => '→',
            Self::Iff => '↔',
        }
    }

    /// Looks up the operator spelled by a canonical glyph.
    ///
    /// # Example
    /// ```
    /// use propcalc::program::Operator;
    ///
    /// assert_eq!(Operator::from_glyph('→'), Some(Operator::Implies));
    /// assert_eq!(Operator::from_glyph('>'), None);
    /// ```
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '¬' => Some(Self::Not),
            '∧' => Some(Self::And),
            '∨' => Some(Self::Or),
            '→' => Some(Self::Implies),
            '↔' => Some(Self::Iff),
            _ => None,
        }
    }

    /// Upper case name, as shown in operator palettes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Implies => "IMPLIES",
            Self::Iff => "IFF",
        }
    }

    /// Number of operands the operator consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Not => 1,
            Self::And | Self::Or | Self::Implies | Self::Iff => 2,
        }
    }

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Not => 4,
            Self::And => 3,
            Self::Or => 2,
            Self::Implies | Self::Iff => 1,
        }
    }

    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Not => Associativity::Right,
            Self::And | Self::Or | Self::Implies | Self::Iff => Associativity::Left,
        }
    }

    /// Returns `true` if `top`, waiting on the operator stack, must be emitted
    /// before `self` is pushed.
    ///
    /// Right associative operators only yield to strictly tighter operators;
    /// left associative ones also yield to operators of equal precedence,
    /// which makes `P → Q → R` group as `(P → Q) → R`.
    #[must_use]
    pub const fn yields_to(self, top: Self) -> bool {
        match self.associativity() {
            Associativity::Right => self.precedence() < top.precedence(),
            Associativity::Left => self.precedence() <= top.precedence(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A single step of a compiled postfix program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Push the truth value of a variable.
    PushVariable(char),
    /// Pop the operands of an operator and push its result.
    Apply(Operator),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PushVariable(name) => write!(f, "{name}"),
            Self::Apply(op) => write!(f, "{op}"),
        }
    }
}
