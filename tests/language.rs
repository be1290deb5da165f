use std::fs;

use dualcalc::{
    ast::{Expr, Operator},
    error::{ErrorKind, ParseError},
    evaluate_str,
    interpreter::{
        lexer::Token,
        parser::{
            core::{Grammar, MAX_DEPTH, detect_grammar},
            infix::{build_tree, infix_to_postfix},
        },
    },
    parse, tokenize,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (source, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let result = evaluate_str(&source);
            match (expected.strip_prefix('!'), result) {
                (Some(kind), Err(e)) => {
                    assert_eq!(e.kind().name(),
                               kind,
                               "Case {} in {:?} failed: {source:?} gave {e}",
                               i + 1,
                               path);
                },
                (None, Ok(value)) => {
                    let expected: f64 = expected.parse()
                                                .unwrap_or_else(|_| panic!("Bad expectation {expected:?}"));
                    assert_close(value, expected, &source);
                },
                (_, result) => panic!("Case {} in {:?} failed: {source:?} gave {result:?}, expected {expected}",
                                      i + 1,
                                      path),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Reads `expression => expected` lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.split_once("=>"))
           .map(|(source, expected)| (source.trim().to_string(), expected.trim().to_string()))
           .collect()
}

fn assert_close(actual: f64, expected: f64, src: &str) {
    assert!((actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
            "{src:?} evaluated to {actual}, expected {expected}");
}

fn assert_value(src: &str, expected: f64) {
    match evaluate_str(src) {
        Ok(value) => assert_close(value, expected, src),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate_str(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "Expression {src:?} failed with {e}"),
    }
}

#[test]
fn infix_precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("8 / 2 * 4", 16.0);
    assert_value("1 + 2 * 3 - 4 / 2", 5.0);
}

#[test]
fn infix_parentheses_override_precedence() {
    assert_value("(2+3)*4", 20.0);
    assert_value("2 * (3 + 4)", 14.0);
    assert_value("((1 + 2))", 3.0);
    assert_value("1 + 2 * (3 - 4)", -1.0);
    assert_value("10 - (4 - 3)", 9.0);
}

#[test]
fn prefix_variadic_folding() {
    assert_value("(+ 1 2 3)", 6.0);
    assert_value("(- 10 1 2)", 7.0);
    assert_value("(* 2 3 4)", 24.0);
    assert_value("(/ 100 2 5)", 10.0);
}

#[test]
fn prefix_single_operand() {
    assert_value("(+ 5)", 5.0);
    assert_value("(- 5)", 5.0);
    assert_value("(* 5)", 5.0);
    assert_value("(/ 5)", 5.0);
}

#[test]
fn prefix_nesting_is_depth_first() {
    assert_value("(+ 1 (* 2 3))", 7.0);
    assert_value("(* (+ 1 2) (- 10 4) (/ 8 2))", 72.0);
    assert_value("(- (- (- 10 1) 1) 1)", 7.0);
}

#[test]
fn negative_literals() {
    assert_value("(+ -5 3)", -2.0);
    assert_value("(- -5 3)", -8.0);
    assert_value("(+ 3 -5)", -2.0);
    assert_value("(* 2 -3 -4)", 24.0);
    assert_value("-3 + 4", 1.0);
    assert_value("2 * -3", -6.0);
    assert_value("2 - -3", 5.0);
    assert_value("(-3) * 2", -6.0);
}

#[test]
fn minus_between_operands_is_subtraction() {
    assert_value("1-5", -4.0);
    assert_value("7 -2", 5.0);
    assert_value("(2)-1", 1.0);
}

#[test]
fn decimal_literals_and_constants() {
    assert_value("1.5 * 4", 6.0);
    assert_value(".5 + .25", 0.75);
    assert_value("(+ 0.1 0.2)", 0.1 + 0.2);
    assert_value("2 * pi", 2.0 * std::f64::consts::PI);
    assert_value("(* e 1)", std::f64::consts::E);
    assert_value("(+ -pi pi)", 0.0);
}

#[test]
fn division_by_zero_is_error_in_both_grammars() {
    assert_failure("1/0", ErrorKind::DivisionByZero);
    assert_failure("(/ 1 0)", ErrorKind::DivisionByZero);
    assert_failure("(/ 10 2 0 5)", ErrorKind::DivisionByZero);
    assert_failure("1 / (2 - 2)", ErrorKind::DivisionByZero);
    assert_failure("(/ 1 (- 3 3))", ErrorKind::DivisionByZero);
    assert_failure("5 / -0", ErrorKind::DivisionByZero);
}

#[test]
fn zero_numerator_is_fine() {
    assert_value("0 / 5", 0.0);
    assert_value("(/ 0 5)", 0.0);
}

#[test]
fn malformed_prefix_is_syntax_error() {
    assert_failure("(+ 1", ErrorKind::Syntax);
    assert_failure("(+ )", ErrorKind::Syntax);
    assert_failure("(+", ErrorKind::Syntax);
    assert_failure("(", ErrorKind::Syntax);
    assert_failure("()", ErrorKind::Syntax);
    assert_failure("(+ 1 2) 3", ErrorKind::Syntax);
    assert_failure("(+ 1 +)", ErrorKind::Syntax);
    assert_failure("(+ 1 abc)", ErrorKind::Syntax);
    assert_failure("(+ 1 (* 2 3)", ErrorKind::Syntax);
}

#[test]
fn malformed_infix_is_syntax_error() {
    assert_failure("1 + ", ErrorKind::Syntax);
    assert_failure("* 2", ErrorKind::Syntax);
    assert_failure("1 2", ErrorKind::Syntax);
    assert_failure("1 + 2)", ErrorKind::Syntax);
    assert_failure("(1 + 2", ErrorKind::Syntax);
    assert_failure("(())", ErrorKind::Syntax);
}

#[test]
fn infix_operands_and_operators_must_alternate() {
    assert_failure("1 2 +", ErrorKind::Syntax);
    assert_failure("+ 1 2", ErrorKind::Syntax);
    assert_failure("1 + (+ 2 3)", ErrorKind::Syntax);
    assert_failure("((+ 1 2))", ErrorKind::Syntax);
    assert_failure("2 (3) *", ErrorKind::Syntax);
    assert_failure("(1 2 -)", ErrorKind::Syntax);
    assert_failure("1 * / 2", ErrorKind::Syntax);
    assert_failure("(1 +) 2", ErrorKind::Syntax);
    assert_failure("- 3", ErrorKind::Syntax);

    assert!(matches!(parse("+ 1 2"),
                     Err(ParseError::MissingOperand { operator: '+',
                                                      position: 0, })));
    assert!(matches!(parse("1 2 +"),
                     Err(ParseError::UnexpectedToken { position: 2, .. })));
}

#[test]
fn unknown_word_after_paren_is_a_prefix_form() {
    assert_eq!(detect_grammar(&tokenize("(x 1 2)")), Ok(Grammar::Prefix));
    assert_failure("(x 1 2)", ErrorKind::Syntax);
    assert_failure("(abc)", ErrorKind::Syntax);
    assert!(matches!(parse("(x 1 2)"),
                     Err(ParseError::ExpectedOperator { position: 1, .. })));

    assert_value("(pi * 2)", 2.0 * std::f64::consts::PI);
}

#[test]
fn nesting_up_to_the_limit_evaluates() {
    let prefix = format!("{}1{}", "(+ ".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert_value(&prefix, 1.0);

    let terms = MAX_DEPTH + 1;
    let chain = vec!["1"; terms].join(" + ");
    #[allow(clippy::cast_precision_loss)]
    let expected = terms as f64;
    assert_value(&chain, expected);
}

#[test]
fn nesting_past_the_limit_is_syntax_error() {
    let prefix = format!("{}1{}", "(+ ".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
    assert_failure(&prefix, ErrorKind::Syntax);
    assert!(matches!(parse(&prefix),
                     Err(ParseError::NestingTooDeep { limit: MAX_DEPTH, .. })));

    let chain = vec!["1"; MAX_DEPTH + 2].join("+");
    assert_failure(&chain, ErrorKind::Syntax);

    // Far past the limit the parsers must still fail cleanly.
    let prefix = format!("{}1{}", "(+ ".repeat(50_000), ")".repeat(50_000));
    assert_failure(&prefix, ErrorKind::Syntax);
    let chain = vec!["1"; 50_000].join("+");
    assert_failure(&chain, ErrorKind::Syntax);
    let parens = format!("{}1{}", "(".repeat(50_000), ")".repeat(50_000));
    assert_value(&parens, 1.0);
}

#[test]
fn vertical_tab_is_whitespace() {
    assert_value("1\x0B+ 2", 3.0);
    assert_value("(+\x0B1\x0B2)", 3.0);
}

#[test]
fn exponents_must_be_unsigned() {
    assert_value("2e3", 2000.0);
    assert_failure("1e-5", ErrorKind::MalformedLiteral);
    assert_failure("1e+5", ErrorKind::MalformedLiteral);
}

#[test]
fn unsupported_operators() {
    assert_failure("(^ 2 3)", ErrorKind::UnsupportedOperator);
    assert_failure("(% 7 2)", ErrorKind::UnsupportedOperator);
    assert_failure("2 ^ 3", ErrorKind::UnsupportedOperator);
}

#[test]
fn malformed_literals() {
    assert_failure("1.2.3 + 1", ErrorKind::MalformedLiteral);
    assert_failure("(+ 1.2.3 1)", ErrorKind::MalformedLiteral);
    assert_failure("abc", ErrorKind::MalformedLiteral);
    assert_failure("inf * 2", ErrorKind::MalformedLiteral);
    assert_failure("12abc", ErrorKind::MalformedLiteral);
}

#[test]
fn empty_input() {
    assert_failure("", ErrorKind::EmptyInput);
    assert_failure("   \t \n", ErrorKind::EmptyInput);
}

#[test]
fn dispatcher_routes_equivalent_forms_to_equal_results() {
    let pairs = [("1+2*3", "(+ 1 (* 2 3))"),
                 ("(2 + 3) * 4", "(* (+ 2 3) 4)"),
                 ("10 - 1 - 2", "(- 10 1 2)"),
                 ("100 / 2 / 5", "(/ 100 2 5)"),
                 ("-5 + 3", "(+ -5 3)")];

    for (infix, prefix) in pairs {
        assert_eq!(detect_grammar(&tokenize(infix)), Ok(Grammar::Infix), "{infix}");
        assert_eq!(detect_grammar(&tokenize(prefix)), Ok(Grammar::Prefix), "{prefix}");
        assert_eq!(evaluate_str(infix), evaluate_str(prefix), "{infix} vs {prefix}");
    }
}

#[test]
fn infix_builds_binary_nodes_and_prefix_builds_variadic_nodes() {
    assert!(matches!(parse("1 + 2"),
                     Ok(Expr::BinaryOp { op: Operator::Add, .. })));
    assert!(matches!(parse("(+ 1 2 3)"),
                     Ok(Expr::VariadicOp { op: Operator::Add, ref operands, .. }) if operands.len() == 3));
}

#[test]
fn postfix_round_trip_matches_direct_evaluation() {
    let sources = ["1 + 2 * 3",
                   "(1 + 2) * 3",
                   "8 / 4 / 2",
                   "2 * (3 + 4) - 5 / (1 + 1)",
                   "-1.5 * (2 - -3)",
                   "((7))"];

    for source in sources {
        let tokens = tokenize(source);
        let postfix = infix_to_postfix(&tokens).unwrap();
        assert!(postfix.iter().all(|(t, _)| !matches!(t, Token::LParen | Token::RParen)),
                "{source}: parentheses left in postfix");

        let tree = build_tree(&postfix).unwrap();
        assert_eq!(tree.evaluate().ok(), evaluate_str(source).ok(), "{source}");

        // The prefix rendering of the tree goes through the other grammar.
        let rendered = tree.to_string();
        assert_eq!(evaluate_str(&rendered).ok(),
                   evaluate_str(source).ok(),
                   "{source} rendered as {rendered}");
    }
}

#[test]
fn postfix_order() {
    let render = |source: &str| -> Vec<String> {
        infix_to_postfix(&tokenize(source)).unwrap()
                                           .iter()
                                           .map(|(t, _)| t.to_string())
                                           .collect()
    };

    assert_eq!(render("1 + 2 * 3"), ["1", "2", "3", "*", "+"]);
    assert_eq!(render("1 - 2 + 3"), ["1", "2", "-", "3", "+"]);
    assert_eq!(render("(1 + 2) * 3"), ["1", "2", "+", "3", "*"]);
    assert_eq!(render("6 / 3 * 2"), ["6", "3", "/", "2", "*"]);
}

#[test]
fn tokenizer_keeps_positions() {
    let tokens = tokenize("  12.5*(x)");
    assert_eq!(tokens,
               vec![(Token::Number("12.5".to_string()), 2),
                    (Token::Star, 6),
                    (Token::LParen, 7),
                    (Token::Number("x".to_string()), 8),
                    (Token::RParen, 9)]);
}

#[test]
fn tree_renders_in_prefix_notation() {
    assert_eq!(parse("1 + 2 * 3").unwrap().to_string(), "(+ 1 (* 2 3))");
    assert_eq!(parse("(- 10 1 2)").unwrap().to_string(), "(- 10 1 2)");
    assert_eq!(parse("-2.5 / 4").unwrap().to_string(), "(/ -2.5 4)");
}

#[test]
fn error_messages_point_at_the_input() {
    let err = evaluate_str("1 / 0").unwrap_err();
    assert_eq!(err.to_string(), "Error at column 3: Cannot divide by zero.");

    let err = evaluate_str("(+ 1 2").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at column 1: Expected closing parenthesis ')' but none found.");

    let err = evaluate_str("(^ 2 3)").unwrap_err();
    assert_eq!(err.to_string(), "Error at column 2: Unsupported operator: ^.");
}
