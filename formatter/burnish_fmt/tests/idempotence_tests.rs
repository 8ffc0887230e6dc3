#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Idempotence verification tests.
//!
//! The formatter is a fixed point on its own output: formatting a second
//! time must reproduce the first result byte for byte. The corpus below
//! covers every statement shape the rules rewrite, and the whole corpus is
//! re-run under each option that changes the output.

use burnish_fmt::{format, BomMode, Options, PropertyQuoting, QuoteStyle, SuppressSpaceAfter};

/// Inputs covering the constructs the formatter rearranges. Each one also
/// exercises the path a second pass takes over the first pass's output.
const CORPUS: &[&str] = &[
    // Declarations and expression statements.
    "var x = 1;",
    "var a;a=1",
    "var a = 1, b = 2;",
    "var empty = {};",
    "var s = 'it\\'s';",
    "x();y();",
    "'use strict';x()",
    "a = b = c",
    "x = (1 + 2) * 3",
    "x = \"a\\nb\"",
    "foo: bar()",
    // Control flow.
    "{true}",
    "if(1)y();else z()",
    "if(a){b()}else if(c){d()}else{e()}",
    "if (!x) {y()}",
    "for(y=0;y<9;y++){x()}",
    "for (name in data) {f(name)}",
    "while(x){y()}\nz()",
    "do{x()}while(y)",
    "try{a()}catch(e){b()}finally{c()}",
    "switch(x){case 1:a();break;case 2:b();default:c();}",
    "throw new Error('x');",
    // Functions.
    "var f = function () {return true};f();",
    "f(function () {g()}, 1)",
    "(function () {x()}())",
    "function outer() {function inner() {return 1}\nreturn inner()}",
    // Arrays, objects and member access.
    "[1, 2, 3]",
    "x[i][j]",
    "x = {'a':1,\"b\":2}",
    "x = {a: 1, b: {c: 2}, d: [3, 4]}",
    "f({a:1})",
    "x.default().return().toString()",
    "delete data[key]",
    // Operators.
    "x = a ? b : c;",
    "x = a - 1; y = -1; f(-1, +2)",
    "typeof x === 'undefined'",
    "x = /ab+c/gi; y = a / b",
    // Automatic semicolons.
    "x\n++y",
    "x++\n--y",
    "return\nx()",
    // Comments.
    "x(); // note\ny();",
    "x();\n// alone\ny();",
    "/* one\n * two\n */\nx()",
    "x();/* note */y();",
    "f(function () { // start\n    g();\n})",
    // Leading material and messy input whitespace.
    "#!/usr/bin/env node\nx()",
    "a();  \n\n\n  b()",
];

/// Format twice and report any divergence, naming the source.
fn check_fixed_point(source: &str, options: &Options) -> Result<(), String> {
    let first =
        format(source, options).map_err(|e| format!("format failed for {source:?}: {e}"))?;
    let second =
        format(&first, options).map_err(|e| format!("reformat failed for {first:?}: {e}"))?;

    if first == second {
        return Ok(());
    }

    Err(format!(
        "not a fixed point for {source:?}:\n--- first ---\n{first}\n--- second ---\n{second}"
    ))
}

fn assert_corpus_stable(options: &Options) {
    let failures: Vec<String> = CORPUS
        .iter()
        .filter_map(|source| check_fixed_point(source, options).err())
        .collect();

    if !failures.is_empty() {
        panic!(
            "{} idempotence failures:\n\n{}",
            failures.len(),
            failures.join("\n---\n")
        );
    }
}

#[test]
fn corpus_is_stable_under_default_options() {
    assert_corpus_stable(&Options::default());
}

#[test]
fn corpus_is_stable_with_tab_indentation() {
    let options = Options {
        indent: "\t".to_string(),
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_with_two_space_indentation() {
    let options = Options {
        indent: "  ".to_string(),
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_with_crlf_newlines() {
    let options = Options {
        newline: "\r\n".to_string(),
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_with_cr_newlines() {
    let options = Options {
        newline: "\r".to_string(),
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_with_single_quotes() {
    let options = Options {
        quote_style: QuoteStyle::Single,
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_with_preserved_quotes() {
    let options = Options {
        quote_style: QuoteStyle::Preserve,
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_when_adding_property_quotes() {
    let options = Options {
        property_quoting: PropertyQuoting::Add,
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_when_preserving_property_quotes() {
    let options = Options {
        property_quoting: PropertyQuoting::Preserve,
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_in_strict_mode() {
    let options = Options {
        strict: true,
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_with_else_on_its_own_line() {
    let options = Options {
        else_newline: true,
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_with_suppressed_keyword_spaces() {
    let options = Options {
        suppress_space_after: SuppressSpaceAfter::IF
            | SuppressSpaceAfter::FOR
            | SuppressSpaceAfter::FUNCTION
            | SuppressSpaceAfter::SWITCH,
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_with_tight_increments() {
    let options = Options {
        suppress_space_with_inc_dec: true,
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_with_a_trailing_newline() {
    let options = Options {
        trailing_newline: true,
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_when_adding_a_bom() {
    let options = Options {
        bom: BomMode::Add,
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_when_removing_a_bom() {
    let options = Options {
        bom: BomMode::Remove,
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

#[test]
fn corpus_is_stable_with_a_tab_comment_gutter() {
    let options = Options {
        comment_gutter: "\t".to_string(),
        ..Options::default()
    };
    assert_corpus_stable(&options);
}

// -- Targeted fixed points --

#[test]
fn a_preserved_leading_bom_survives_repeated_runs() {
    let options = Options {
        bom: BomMode::Preserve,
        ..Options::default()
    };
    let first = format("\u{FEFF}x()", &options).expect("format");
    let second = format(&first, &options).expect("reformat");

    assert_eq!(first, "\u{FEFF}x()");
    assert_eq!(first, second);
}

#[test]
fn reflowed_block_comments_stay_put_under_crlf() {
    let options = Options {
        newline: "\r\n".to_string(),
        ..Options::default()
    };
    let first = format("/* one\n * two\n */\nx()", &options).expect("format");
    let second = format(&first, &options).expect("reformat");

    assert_eq!(first, second);
}

#[test]
fn inserted_semicolons_do_not_multiply() {
    let options = Options::default();
    let first = format("x\n++y", &options).expect("format");

    assert_eq!(first, "x;\n++ y");
    assert_eq!(format(&first, &options).expect("reformat"), first);
}

#[test]
fn strict_switch_layout_is_stable() {
    let options = Options {
        strict: true,
        ..Options::default()
    };
    let first =
        format("switch(x){case 1:a();break;case 2:b();default:c();}", &options).expect("format");
    let second = format(&first, &options).expect("reformat");

    assert_eq!(first, second);
}

#[test]
fn do_while_keeps_its_shape() {
    let options = Options::default();
    let first = format("do{x()}while(y)", &options).expect("format");

    assert_eq!(first, "do {\n    x()\n}\n\nwhile (y)");
    assert_eq!(format(&first, &options).expect("reformat"), first);
}
