use std::fs::{self};

use pretty_assertions::assert_eq;
use treelox::{
    Lox,
    diagnostics::{Diagnostic, DiagnosticSink, Diagnostics},
    run_source,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (code, expected)) in extract_examples(&content).into_iter().enumerate() {
            count += 1;
            let (output, diagnostics) = run(&code);
            if !diagnostics.reported().is_empty() {
                panic!("Example {} in {:?} failed:\n{}\nErrors: {:?}",
                       i + 1,
                       path,
                       code,
                       diagnostics.reported());
            }
            if let Some(expected) = expected {
                assert_eq!(output, expected, "output of example {} in {:?}", i + 1, path);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Collects ```lox blocks together with the ```output block that follows
/// them, if any.
fn extract_examples(content: &str) -> Vec<(String, Option<String>)> {
    let mut examples: Vec<(String, Option<String>)> = Vec::new();
    let mut inside: Option<&str> = None;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if inside.is_none() {
            if trimmed.starts_with("```lox") {
                inside = Some("lox");
                buf.clear();
            } else if trimmed.starts_with("```output") {
                inside = Some("output");
                buf.clear();
            }
            continue;
        }
        if trimmed.starts_with("```") {
            match inside.take() {
                Some("lox") => examples.push((buf.clone(), None)),
                Some(_) => {
                    if let Some(last) = examples.last_mut() {
                        last.1 = Some(buf.clone());
                    }
                },
                None => {},
            }
            continue;
        }
        buf.push_str(line);
        buf.push('\n');
    }

    examples
}

fn run(src: &str) -> (String, Diagnostics) {
    let mut out = Vec::new();
    let mut diagnostics = Diagnostics::new();
    run_source(src, &mut out, &mut diagnostics).expect("writing to a Vec cannot fail");
    (String::from_utf8(out).expect("output is UTF-8"), diagnostics)
}

fn assert_prints(src: &str, expected: &str) {
    let (output, diagnostics) = run(src);
    assert!(diagnostics.reported().is_empty(),
            "Script failed: {:?}",
            diagnostics.reported());
    assert_eq!(output, expected);
}

fn assert_runtime_error(src: &str, message: &str, line: usize) -> String {
    let (output, diagnostics) = run(src);
    assert!(!diagnostics.had_error());
    assert!(diagnostics.had_runtime_error());
    assert_eq!(diagnostics.reported(),
               [Diagnostic::Runtime { line,
                                      message: message.to_string() }]);
    output
}

#[test]
fn arithmetic_and_grouping() {
    assert_prints("print 1 + 2;", "3\n");
    assert_prints("print (1 + 2) * 3;", "9\n");
    assert_prints("print 1 + 2 * 3;", "7\n");
    assert_prints("print 1 - 2 - 3;", "-4\n");
    assert_prints("print -2 * -3;", "6\n");
    assert_prints("print 7 / 2;", "3.5\n");
    assert_prints("print --4;", "4\n");
}

#[test]
fn number_display_strips_trailing_zero_fraction() {
    assert_prints("print 2.0;", "2\n");
    assert_prints("print 2.5;", "2.5\n");
    assert_prints("print 0.5 + 0.5;", "1\n");
    assert_prints("print 1.25 * 2;", "2.5\n");
    assert_prints("print 100000000000000000000;", "1e20\n");
    assert_prints("print 0.0000001;", "1e-7\n");
}

#[test]
fn division_by_zero_yields_infinity() {
    assert_prints("print 5 / 0;", "Infinity\n");
    assert_prints("print -5 / 0;", "-Infinity\n");
    assert_prints("print 0 / 0;", "NaN\n");
    assert_prints("print 5 / 0 > 1000000;", "true\n");
}

#[test]
fn string_concatenation() {
    assert_prints("print \"1\" + \"2\";", "12\n");
    assert_prints("print \"\" + \"\";", "\n");
    assert_prints("print \"multi\nline\";", "multi\nline\n");
}

#[test]
fn plus_never_coerces() {
    let output = assert_runtime_error("print 1 + \"2\";",
                                      "Operands must be two numbers or to strings.",
                                      1);
    assert_eq!(output, "");
    assert_runtime_error("print \"a\" + true;", "Operands must be two numbers or to strings.", 1);
}

#[test]
fn equality_and_truthiness() {
    assert_prints("print nill == nill;", "true\n");
    assert_prints("print false == nill;", "false\n");
    assert_prints("print 1 == \"1\";", "false\n");
    assert_prints("print \"a\" != \"b\";", "true\n");
    assert_prints("print !0;", "false\n");
    assert_prints("print !\"\";", "false\n");
    assert_prints("print !nill;", "true\n");
    assert_prints("print !false;", "true\n");
    assert_prints("print !!true;", "true\n");
}

#[test]
fn comparisons() {
    assert_prints("print 1 < 2;", "true\n");
    assert_prints("print 2 <= 2;", "true\n");
    assert_prints("print 1 > 2;", "false\n");
    assert_prints("print 3 >= 4;", "false\n");
    assert_prints("print 1 < 2 == true;", "true\n");
}

#[test]
fn comparison_and_arithmetic_type_errors() {
    assert_runtime_error("print \"a\" < \"b\";", "Operands must be numbers.", 1);
    assert_runtime_error("print nill * 2;", "Operands must be numbers.", 1);
    assert_runtime_error("\n\nprint 1 - true;", "Operands must be numbers.", 3);
    assert_runtime_error("print -\"x\";", "Operand must be a number.", 1);
}

#[test]
fn runtime_error_stops_remaining_statements() {
    let output = assert_runtime_error("print 1;\nprint \"x\" + 1;\nprint 2;",
                                      "Operands must be two numbers or to strings.",
                                      2);
    assert_eq!(output, "1\n");
}

#[test]
fn expression_statements_print_nothing() {
    assert_prints("1 + 2; \"unused\"; print 3;", "3\n");
}

#[test]
fn left_operand_error_is_reported_first() {
    assert_runtime_error("print (1 + nill) == (-\"a\");",
                         "Operands must be two numbers or to strings.",
                         1);
}

#[test]
fn syntax_errors_prevent_execution() {
    let (output, diagnostics) = run("print 1;\nprint (2;\nprint 3");
    assert_eq!(output, "");
    assert!(diagnostics.had_error());
    assert!(!diagnostics.had_runtime_error());

    let rendered: Vec<_> = diagnostics.reported().iter().map(ToString::to_string).collect();
    assert_eq!(rendered,
               ["[line 2] Error at ';': Expect ')' after expression.",
                "[line 3] Error at end: Expect ';' after value."]);
}

#[test]
fn lexical_errors_prevent_execution() {
    let (output, diagnostics) = run("print 1; @\nprint \"open");
    assert_eq!(output, "");
    let rendered: Vec<_> = diagnostics.reported().iter().map(ToString::to_string).collect();
    assert_eq!(rendered,
               ["[line 1] Error: Unexpected character.",
                "[line 2] Error: Unterminated string.",
                "[line 2] Error at end: Expect expression."]);
}

#[test]
fn comments_are_ignored() {
    assert_prints("// heading\nprint 1; // trailing\n// print 2;\nprint 3;", "1\n3\n");
}

// Compatibility fixture: the nil literal is spelled `nill`; `nil` is just an
// identifier and cannot be used as an expression.
#[test]
fn nil_literal_is_spelled_nill() {
    assert_prints("print nill;", "nil\n");

    let (_, diagnostics) = run("print nil;");
    assert_eq!(diagnostics.reported()[0].to_string(),
               "[line 1] Error at 'nil': Expect expression.");
}

#[test]
fn session_exit_codes() {
    let mut lox = Lox::new(Vec::new(), Diagnostics::new());
    lox.run("print 1;").unwrap();
    assert_eq!(lox.exit_code(), 0);

    let mut lox = Lox::new(Vec::new(), Diagnostics::new());
    lox.run("print 1 +;").unwrap();
    assert_eq!(lox.exit_code(), 65);

    let mut lox = Lox::new(Vec::new(), Diagnostics::new());
    lox.run("print -nill;").unwrap();
    assert_eq!(lox.exit_code(), 70);
}

#[test]
fn session_matches_run_source_with_dumps_enabled() {
    let source = "print 1 + 2;\nprint \"a\" < 1;\nprint 3;";
    let (expected, diagnostics) = run(source);

    let mut lox = Lox::new(Vec::new(), Diagnostics::new()).with_token_dump(true)
                                                          .with_ast_dump(true);
    lox.run(source).unwrap();

    assert_eq!(lox.diagnostics().reported(), diagnostics.reported());
    assert_eq!(String::from_utf8(lox.into_output()).unwrap(), expected);
}

#[test]
fn prompt_runs_each_line_independently() {
    let input = "print 1;\nprint (;\nprint \"a\" + 1;\nprint 2;\n".as_bytes();
    let mut prompt = Vec::new();

    let mut lox = Lox::new(Vec::new(), Diagnostics::new());
    lox.run_prompt(input, &mut prompt).unwrap();

    assert_eq!(String::from_utf8(prompt).unwrap(), "> > > > > \n");
    assert_eq!(lox.diagnostics().reported().len(), 2);
    assert_eq!(lox.exit_code(), 70);
    assert_eq!(lox.into_output(), b"1\n2\n");
}
