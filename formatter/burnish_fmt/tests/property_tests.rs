//! Property-based tests for the formatter.
//!
//! These tests generate random valid JavaScript and verify:
//! 1. Determinism: the same input always produces the same output
//! 2. Idempotence: format(format(code)) == format(code)
//! 3. Lexability: formatted output tokenizes cleanly
//! 4. Preservation: formatting never adds, drops or rewords a
//!    meaningful token, it only rearranges the space between them
//!
//! This complements golden_tests.rs, which pins exact output for known
//! inputs, by exercising shapes no hand-written corpus would contain.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use burnish_fmt::{format, Options};
use burnish_lexer::{Punctuator, TokenKind};
use proptest::prelude::*;

// -- Code generation strategies --

/// Reserved words the identifier strategy must avoid.
fn is_reserved(s: &str) -> bool {
    matches!(
        s,
        "break"
            | "case"
            | "catch"
            | "class"
            | "const"
            | "continue"
            | "debugger"
            | "default"
            | "delete"
            | "do"
            | "else"
            | "enum"
            | "export"
            | "extends"
            | "false"
            | "finally"
            | "for"
            | "function"
            | "if"
            | "import"
            | "in"
            | "instanceof"
            | "new"
            | "null"
            | "return"
            | "super"
            | "switch"
            | "this"
            | "throw"
            | "true"
            | "try"
            | "typeof"
            | "var"
            | "void"
            | "while"
            | "with"
    )
}

/// Generate a valid identifier.
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,12}")
        .expect("valid regex")
        .prop_filter("not a reserved word", |s| !is_reserved(s))
}

/// Generate a numeric literal.
fn number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..=9999).prop_map(|n| n.to_string()),
        (0u32..=99, 1u32..=99).prop_map(|(a, b)| format!("{}.{}", a, b)),
    ]
}

/// Generate a double-quoted string literal with no escapes, so the
/// default quote style copies it through unchanged.
fn string_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 _]{0,20}")
        .expect("valid regex")
        .prop_map(|s| format!("\"{}\"", s))
}

/// Generate a regular expression literal.
fn regex_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/[a-z]+/g".to_string()),
        Just("/ab+c/i".to_string()),
        Just("/x|y/".to_string()),
        Just("/\\d+/".to_string()),
    ]
}

/// Generate an expression that needs no surrounding context.
fn simple_expr_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier_strategy(),
        number_strategy(),
        string_strategy(),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("null".to_string()),
        Just("this".to_string()),
    ]
}

/// Generate a binary operator.
fn binary_op_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("%".to_string()),
        Just("===".to_string()),
        Just("!==".to_string()),
        Just("<".to_string()),
        Just(">".to_string()),
        Just("&&".to_string()),
        Just("||".to_string()),
    ]
}

/// Generate an expression (recursive with a depth limit).
fn expr_strategy(depth: u32) -> BoxedStrategy<String> {
    if depth == 0 {
        return simple_expr_strategy().boxed();
    }

    let nested = expr_strategy(depth - 1);

    prop_oneof![
        simple_expr_strategy(),
        // Binary operation
        (
            simple_expr_strategy(),
            binary_op_strategy(),
            simple_expr_strategy()
        )
            .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right)),
        // Unary operators
        identifier_strategy().prop_map(|e| format!("!{}", e)),
        identifier_strategy().prop_map(|e| format!("-{}", e)),
        identifier_strategy().prop_map(|e| format!("typeof {}", e)),
        // Call
        (
            identifier_strategy(),
            prop::collection::vec(nested.clone(), 0..3)
        )
            .prop_map(|(name, args)| format!("{}({})", name, args.join(", "))),
        // Member access and subscript
        (identifier_strategy(), identifier_strategy())
            .prop_map(|(obj, prop)| format!("{}.{}", obj, prop)),
        (identifier_strategy(), nested.clone()).prop_map(|(obj, i)| format!("{}[{}]", obj, i)),
        // Array literal
        prop::collection::vec(nested.clone(), 0..4)
            .prop_map(|items| format!("[{}]", items.join(", "))),
        // Object literal with bare keys
        prop::collection::vec((identifier_strategy(), nested.clone()), 1..4).prop_map(|pairs| {
            let body: Vec<String> = pairs
                .into_iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect();
            format!("{{{}}}", body.join(", "))
        }),
        // Ternary
        (identifier_strategy(), nested.clone(), nested.clone())
            .prop_map(|(c, t, f)| format!("{} ? {} : {}", c, t, f)),
        // Grouping
        nested.prop_map(|e| format!("({})", e)),
    ]
    .boxed()
}

/// Generate one statement.
fn statement_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (identifier_strategy(), expr_strategy(2))
            .prop_map(|(name, value)| format!("var {} = {};", name, value)),
        (identifier_strategy(), regex_strategy())
            .prop_map(|(name, re)| format!("var {} = {};", name, re)),
        (identifier_strategy(), expr_strategy(2))
            .prop_map(|(name, value)| format!("{} = {};", name, value)),
        (
            identifier_strategy(),
            prop::collection::vec(expr_strategy(1), 0..3)
        )
            .prop_map(|(name, args)| format!("{}({});", name, args.join(", "))),
        (identifier_strategy(), expr_strategy(1), expr_strategy(1)).prop_map(|(c, a, b)| {
            format!("if ({}) {{ {}; }} else {{ {}; }}", c, a, b)
        }),
        (identifier_strategy(), expr_strategy(1))
            .prop_map(|(c, body)| format!("while ({}) {{ {}; }}", c, body)),
        (identifier_strategy(), number_strategy(), expr_strategy(1)).prop_map(|(i, n, body)| {
            format!("for ({} = 0; {} < {}; {}++) {{ {}; }}", i, i, n, i, body)
        }),
        (
            identifier_strategy(),
            prop::collection::vec(identifier_strategy(), 0..3),
            expr_strategy(1)
        )
            .prop_map(|(name, params, ret)| {
                format!("function {}({}) {{ return {}; }}", name, params.join(", "), ret)
            }),
    ]
}

/// Generate a whole program.
fn program_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(statement_strategy(), 1..6).prop_map(|stmts| stmts.join("\n"))
}

// -- Test helpers --

/// The token stream with layout stripped: every kind and text pair that
/// carries meaning, implicit semicolons normalized to real ones.
fn meaningful_tokens(source: &str) -> Result<Vec<(TokenKind, String)>, String> {
    let tokens = burnish_lexer::lex(source).map_err(|e| format!("lex failed: {}", e))?;

    Ok(tokens
        .into_iter()
        .filter(|t| !matches!(t.kind, TokenKind::Whitespace | TokenKind::LineTerminator))
        .map(|t| match t.kind {
            TokenKind::ImplicitSemicolon => (
                TokenKind::Punctuator(Punctuator::Semicolon),
                ";".to_string(),
            ),
            kind => (kind, t.text),
        })
        .collect())
}

// -- Property tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    /// The same input formats to the same output.
    #[test]
    fn prop_formatting_is_deterministic(program in program_strategy()) {
        let options = Options::default();
        let first = format(&program, &options).expect("generated program formats");
        let second = format(&program, &options).expect("generated program formats");

        prop_assert_eq!(first, second);
    }

    /// Formatting its own output changes nothing.
    #[test]
    fn prop_formatting_is_idempotent(program in program_strategy()) {
        let options = Options::default();
        let first = format(&program, &options).expect("generated program formats");
        let second = format(&first, &options).expect("formatted output reformats");

        prop_assert_eq!(&second, &first, "input: {:?}", program);
    }

    /// Formatted output always tokenizes.
    #[test]
    fn prop_output_lexes_cleanly(program in program_strategy()) {
        let options = Options::default();
        let output = format(&program, &options).expect("generated program formats");

        prop_assert!(
            burnish_lexer::lex(&output).is_ok(),
            "output failed to lex: {:?}",
            output
        );
    }

    /// Meaningful tokens survive formatting unchanged and in order.
    #[test]
    fn prop_meaningful_tokens_are_preserved(program in program_strategy()) {
        let options = Options::default();
        let output = format(&program, &options).expect("generated program formats");

        let before = meaningful_tokens(&program).expect("input lexes");
        let after = meaningful_tokens(&output).expect("output lexes");

        prop_assert_eq!(before, after, "input: {:?}", program);
    }

    /// No output line carries trailing spaces or tabs.
    #[test]
    fn prop_no_trailing_whitespace(program in program_strategy()) {
        let options = Options::default();
        let output = format(&program, &options).expect("generated program formats");

        for line in output.lines() {
            prop_assert!(
                !line.ends_with(' ') && !line.ends_with('\t'),
                "trailing whitespace on {:?} in output {:?}",
                line,
                output
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    /// Expressions stay stable when wrapped into a statement.
    #[test]
    fn prop_expression_statements_are_idempotent(expr in expr_strategy(3)) {
        let source = format!("result = {};", expr);
        let options = Options::default();

        let first = format(&source, &options).expect("generated expression formats");
        let second = format(&first, &options).expect("formatted output reformats");

        prop_assert_eq!(&second, &first, "input: {:?}", source);
    }

    /// Idempotence holds in strict mode too.
    #[test]
    fn prop_strict_mode_is_idempotent(program in program_strategy()) {
        let options = Options {
            strict: true,
            ..Options::default()
        };

        let first = format(&program, &options).expect("generated program formats");
        let second = format(&first, &options).expect("formatted output reformats");

        prop_assert_eq!(&second, &first, "input: {:?}", program);
    }
}
