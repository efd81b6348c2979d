//! Property-based tests for the scanner and the pipeline as a whole.

use proptest::prelude::*;
use treelox::{
    diagnostics::{DiagnosticSink, Diagnostics},
    interpreter::{lexer::Scanner, token::TokenKind},
    run_source,
};

/// Fragments that a statement of the language can be assembled from.
fn arb_fragment() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("print"),
                Just("1"),
                Just("2.5"),
                Just("\"s\""),
                Just("true"),
                Just("nill"),
                Just("+"),
                Just("-"),
                Just("*"),
                Just("/"),
                Just("=="),
                Just("<"),
                Just("!"),
                Just("("),
                Just(")"),
                Just(";"),
                Just("\n"),]
}

fn arb_program() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_fragment(), 0..24).prop_map(|fragments| fragments.join(" "))
}

fn run(src: &str) -> (String, Diagnostics) {
    let mut out = Vec::new();
    let mut diagnostics = Diagnostics::new();
    run_source(src, &mut out, &mut diagnostics).expect("writing to a Vec cannot fail");
    (String::from_utf8(out).expect("output is UTF-8"), diagnostics)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Scanning always terminates with exactly one EOF token at the end.
    #[test]
    fn scanning_ends_with_a_single_eof(src in "\\PC{0,80}") {
        let mut diagnostics = Diagnostics::new();
        let tokens = Scanner::new(&src).scan_tokens(&mut diagnostics);

        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
    }

    /// The EOF token sits on the last line of the input.
    #[test]
    fn eof_line_counts_every_newline(src in "[0-9a-z +*/()!<>=;\n-]{0,80}") {
        let mut diagnostics = Diagnostics::new();
        let tokens = Scanner::new(&src).scan_tokens(&mut diagnostics);

        let lines = src.matches('\n').count() + 1;
        prop_assert_eq!(tokens.last().map(|t| t.line), Some(lines));
        prop_assert!(tokens.windows(2).all(|pair| pair[0].line <= pair[1].line));
    }

    /// A script with a syntax error never produces output.
    #[test]
    fn syntax_errors_suppress_all_output(src in arb_program()) {
        let (output, diagnostics) = run(&src);
        if diagnostics.had_error() {
            prop_assert_eq!(output, "");
        }
    }

    #[test]
    fn whole_numbers_print_without_fraction(n in any::<u32>()) {
        let (output, diagnostics) = run(&format!("print {n};"));
        prop_assert!(diagnostics.reported().is_empty());
        prop_assert_eq!(output, format!("{n}\n"));
    }

    #[test]
    fn plus_concatenates_strings(a in "[a-z ]{0,10}", b in "[a-z ]{0,10}") {
        let (output, diagnostics) = run(&format!("print \"{a}\" + \"{b}\";"));
        prop_assert!(diagnostics.reported().is_empty());
        prop_assert_eq!(output, format!("{a}{b}\n"));
    }
}
