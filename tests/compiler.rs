use propcalc::{
    compile_source,
    compiler::{
        alphabet::Alphabet,
        evaluator::{Assignment, evaluate},
        lexer::{Token, join_tokens, normalize, tokenize, tokenize_canvas, tokens_from_strs},
        parser::{Compilation, compile},
    },
    error::CompileError,
    program::{Instruction, Operator},
};

fn builder(src: &str) -> Compilation {
    compile_source(src, &Alphabet::builder())
}

fn eval(src: &str, values: &[(char, bool)]) -> bool {
    let compilation = builder(src);
    assert!(compilation.is_ok(), "{src:?} failed: {:?}", compilation.error);
    compilation.evaluate(&values.iter().copied().collect::<Assignment>())
}

fn assert_postfix(src: &str, expected: &str) {
    let compilation = builder(src);
    assert_eq!(compilation.postfix(), expected, "postfix of {src:?}");
}

fn assert_mismatched(src: &str) {
    let compilation = builder(src);
    assert_eq!(compilation.error, Some(CompileError::MismatchedParentheses), "{src:?}");
    assert!(compilation.instructions.is_empty());
}

fn assert_unknown(src: &str, token: &str) {
    let compilation = builder(src);
    assert_eq!(compilation.error,
               Some(CompileError::UnknownToken { token: token.to_string() }),
               "{src:?}");
    assert!(compilation.instructions.is_empty());
}

#[test]
fn conjunction_and_implication() {
    assert!(eval("P ∧ Q", &[('P', true), ('Q', true)]));
    assert!(!eval("P ∧ Q", &[('P', true), ('Q', false)]));
    assert!(!eval("P → Q", &[('P', true), ('Q', false)]));
    assert!(eval("P → Q", &[('P', false), ('Q', false)]));
    assert!(eval("P ↔ Q", &[('P', false), ('Q', false)]));
    assert!(!eval("P ↔ Q", &[('P', true), ('Q', false)]));
    assert!(eval("P ∨ Q", &[('P', false), ('Q', true)]));
}

#[test]
fn implication_operands_are_not_swapped() {
    // Q → P with Q false is true whatever P is.
    assert!(eval("Q → P", &[('P', false), ('Q', false)]));
    assert!(!eval("Q → P", &[('P', false), ('Q', true)]));
}

#[test]
fn binary_operators_chain_to_the_left() {
    assert_postfix("P → Q → R", "P Q → R →");
    assert!(eval("P → Q → R", &[('P', true), ('Q', false), ('R', true)]));
    // Grouped to the right this would be true.
    assert!(!eval("P → Q → R", &[('P', false), ('Q', true), ('R', false)]));
    assert_postfix("P → Q ↔ R", "P Q → R ↔");
    assert_postfix("P ↔ Q → R", "P Q ↔ R →");
}

#[test]
fn negation_chains_to_the_right() {
    assert_postfix("¬¬P", "P ¬ ¬");
    assert!(eval("¬¬P", &[('P', true)]));
    assert_postfix("¬P ∧ Q", "P ¬ Q ∧");
}

#[test]
fn precedence_and_parentheses() {
    assert_postfix("P ∨ Q ∧ R", "P Q R ∧ ∨");
    assert_postfix("(P ∨ Q) ∧ R", "P Q ∨ R ∧");
    assert_postfix("P ∧ Q → R ∨ S", "P Q ∧ R S ∨ →");
    assert_postfix("¬(P ∧ Q)", "P Q ∧ ¬");
    assert!(!eval("¬(P ∧ Q)", &[('P', true), ('Q', true)]));
}

#[test]
fn balanced_parentheses_compile() {
    for src in ["((P))", "(P ∧ (Q ∨ R))", "((P → Q) ∧ (Q → R)) → (P → R)", "()"] {
        assert!(builder(src).is_ok(), "{src:?}");
    }
}

#[test]
fn unbalanced_parentheses_fail() {
    assert_mismatched("(P");
    assert_mismatched("P)");
    assert_mismatched(")(");
    assert_mismatched("((P ∧ Q)");
    assert_mismatched("(P ∧ Q))");
}

#[test]
fn unknown_tokens_fail() {
    assert_unknown("P ∧ 1", "1");
    assert_unknown("X ∨ P", "X");
    assert_unknown("P & Q", "&");
    assert_unknown("p", "p");
    assert_unknown("P V Q", "V");
}

#[test]
fn variables_before_a_failure_are_kept() {
    let compilation = builder("Q ∧ P ∧ 7 ∨ R");
    assert_eq!(compilation.variables, vec!['Q', 'P']);
    assert!(compilation.instructions.is_empty());
    assert!(!compilation.evaluate(&Assignment::from([('P', true), ('Q', true)])));
}

#[test]
fn variables_follow_discovery_order() {
    let compilation = builder("S ∨ Q ∧ S → P");
    assert_eq!(compilation.variables, vec!['S', 'Q', 'P']);
}

#[test]
fn word_runs_split_leading_variables() {
    let alphabet = Alphabet::builder();
    assert_eq!(tokenize("PQ", &alphabet), vec![Token::Variable('P'), Token::Variable('Q')]);
    assert_eq!(tokenize("P1", &alphabet),
               vec![Token::Variable('P'), Token::Unknown("1".to_string())]);
    assert_eq!(tokenize("XP", &alphabet), vec![Token::Unknown("XP".to_string())]);
}

#[test]
fn empty_input_is_not_an_error() {
    let alphabet = Alphabet::builder();
    assert!(tokenize("", &alphabet).is_empty());
    assert!(tokenize("   ", &alphabet).is_empty());

    let compilation = builder("");
    assert!(compilation.is_ok());
    assert!(compilation.variables.is_empty());
    assert!(compilation.instructions.is_empty());
    assert!(!evaluate(&[], &Assignment::new()));
}

#[test]
fn symbol_aliases() {
    let alphabet = Alphabet::builder();
    assert_eq!(normalize("P <-> Q", &alphabet), "P ↔ Q");
    assert_eq!(normalize("P<=>Q", &alphabet), "P↔Q");
    assert_eq!(normalize("~P -> Q", &alphabet), "¬P → Q");
    assert_eq!(normalize("P ^ Q v R", &alphabet), "P ∧ Q ∨ R");
    assert_postfix("PvQ", "P Q ∨");
    assert_postfix("~(P^Q) <-> ~P v ~Q", "P Q ∧ ¬ P ¬ Q ¬ ∨ ↔");
}

#[test]
fn builder_ignores_connective_words() {
    assert_unknown("P and Q", "and");
}

#[test]
fn two_set_word_aliases() {
    let alphabet = Alphabet::two_set();
    assert_eq!(normalize("not P iff Q", &alphabet), "¬ P ↔ Q");
    assert_eq!(normalize("P IMPLIES q", &alphabet), "P → Q");
    assert_eq!(normalize("p Or Q", &alphabet), "P ∨ Q");
    assert_eq!(normalize("P V Q", &alphabet), "P ∨ Q");

    let compilation = compile(&tokenize("not P iff Q", &alphabet));
    assert_eq!(compilation.postfix(), "P ¬ Q ↔");
}

#[test]
fn v_is_rewritten_even_inside_words() {
    assert_eq!(normalize("vP", &Alphabet::builder()), "∨P");
    assert_eq!(normalize("Vp", &Alphabet::two_set()), "∨P");
}

#[test]
fn retokenizing_canonical_tokens_is_stable() {
    let alphabet = Alphabet::builder();
    for src in ["(P->Q) ^ ~R v S", "P<->¬Q", "((P))", "R → X"] {
        let tokens = tokenize(src, &alphabet);
        assert_eq!(tokenize(&join_tokens(&tokens), &alphabet), tokens, "{src:?}");
    }

    let alphabet = Alphabet::two_set();
    for src in ["p and not q", "P iff q", "(p V Q)", "p or R", "NOT (q implies p)"] {
        let tokens = tokenize(src, &alphabet);
        assert_eq!(tokenize(&join_tokens(&tokens), &alphabet), tokens, "{src:?}");
    }
}

#[test]
fn unicode_whitespace_is_skipped() {
    let alphabet = Alphabet::builder();
    assert_eq!(tokenize("P\u{A0}∧\u{0B}Q", &alphabet),
               vec![Token::Variable('P'), Token::Operator(Operator::And), Token::Variable('Q')]);
    assert_eq!(builder("P\u{A0}→\u{2003}Q").postfix(), "P Q →");
}

#[test]
fn word_aliases_match_whole_words_only() {
    let alphabet = Alphabet::two_set();
    assert_eq!(normalize("Or p AnD q", &alphabet), "∨ P ∧ Q");
    assert_eq!(tokenize("notp", &alphabet), vec![Token::Unknown("notp".to_string())]);
    assert_eq!(tokenize("p_and", &alphabet), vec![Token::Unknown("p_and".to_string())]);
    assert_eq!(normalize("p.q", &alphabet), "P.Q");
}

#[test]
fn canvas_can_be_read_as_text() {
    let alphabet = Alphabet::two_set();
    let tokens = tokenize_canvas(&["p", "and", "not", "q"], &alphabet);
    assert_eq!(compile(&tokens).postfix(), "P Q ¬ ∧");

    let tokens = tokenize_canvas(&["P", "->", "Q"], &Alphabet::builder());
    assert_eq!(compile(&tokens).postfix(), "P Q →");
}

#[test]
fn canvas_tokens_are_classified_verbatim() {
    let alphabet = Alphabet::builder();
    let tokens = tokens_from_strs(&["(", "P", "→", "Q", ")", "∧", "¬", "R"], &alphabet);
    let compilation = compile(&tokens);
    assert_eq!(compilation.postfix(), "P Q → R ¬ ∧");

    let tokens = tokens_from_strs(&["P", "->", "Q"], &alphabet);
    assert_eq!(compile(&tokens).error,
               Some(CompileError::UnknownToken { token: "->".to_string() }));
}

#[test]
fn dangling_operators_read_missing_operands_as_false() {
    let compilation = builder("P ∧");
    assert!(compilation.is_ok());
    assert_eq!(compilation.instructions,
               vec![Instruction::PushVariable('P'), Instruction::Apply(Operator::And)]);
    assert!(!compilation.evaluate(&Assignment::from([('P', true)])));

    let compilation = builder("→ P");
    assert!(compilation.evaluate(&Assignment::from([('P', false)])));
}

#[test]
fn equivalence_compares_missing_operands_as_absent() {
    let compilation = builder("P ↔");
    assert!(compilation.is_ok());
    assert!(!compilation.evaluate(&Assignment::from([('P', false)])));
    assert!(!compilation.evaluate(&Assignment::from([('P', true)])));

    assert!(builder("↔").evaluate(&Assignment::new()));
    assert!(!builder("¬ ↔").evaluate(&Assignment::new()));
}

#[test]
fn missing_variables_read_as_false() {
    assert!(eval("¬R", &[('P', true)]));
}

#[test]
fn compilation_is_deterministic() {
    let src = "(P ∨ Q) → ¬(R ↔ S)";
    let first = builder(src);
    let second = builder(src);
    assert_eq!(first, second);

    let assignment = Assignment::from([('P', true), ('Q', false), ('R', true), ('S', true)]);
    assert_eq!(first.evaluate(&assignment), second.evaluate(&assignment));
}

#[test]
fn error_messages() {
    assert_eq!(CompileError::MismatchedParentheses.to_string(), "Mismatched parentheses");
    assert_eq!(CompileError::UnknownToken { token: "42".to_string() }.to_string(),
               "Unknown token: 42");
}

#[test]
fn operator_table() {
    assert_eq!(Operator::ALL.map(Operator::precedence), [4, 3, 2, 1, 1]);
    assert_eq!(Operator::ALL.map(Operator::arity), [1, 2, 2, 2, 2]);
    for op in Operator::ALL {
        assert_eq!(Operator::from_glyph(op.glyph()), Some(op));
    }
    assert!(Operator::Implies.yields_to(Operator::Iff));
    assert!(!Operator::Not.yields_to(Operator::Not));
    assert!(Operator::Or.yields_to(Operator::Not));
}
