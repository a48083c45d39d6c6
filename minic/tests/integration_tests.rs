use std::path::Path;

use insta::assert_snapshot;
use minic::{render_diagnostic, run, Options, Outcome};
use minic_source::Source;

fn analyze(source: &str, options: Options) -> (Outcome, String) {
    let mut out = Vec::new();
    let outcome = run(source, &options, &mut out).expect("writing to a Vec never fails");
    (outcome, String::from_utf8(out).expect("output is UTF-8"))
}

#[test]
fn factorial_program() {
    let (outcome, out) = analyze(include_str!("programs/factorial.c"), Options::default());
    assert_eq!(outcome, Outcome::Tree);
    assert!(outcome.is_success());
    assert_snapshot!(out, @r###"
    Parse succeeded.
    Abstract syntax tree:
    Compound Statement:
      Function Definition: fact_iter
        Params: n
        Compound Statement:
          VarDecl: acc
            Number: 1
          While:
            Condition:
              BinaryOp: >
                Identifier: n
                Number: 1
            Body:
              Compound Statement:
                Assign: acc
                  BinaryOp: *
                    Identifier: acc
                    Identifier: n
                Assign: n
                  BinaryOp: -
                    Identifier: n
                    Number: 1
          Return:
            Identifier: acc
      Function Definition: fact_rec
        Params: n
        Compound Statement:
          If:
            Condition:
              BinaryOp: <
                Identifier: n
                Number: 2
            Then:
              Return:
                Number: 1
            Else:
              Return:
                BinaryOp: *
                  Identifier: n
                  Function Call: fact_rec
                    BinaryOp: -
                      Identifier: n
                      Number: 1
      Function Definition: main
        Params:
        Compound Statement:
          VarDecl: x
          Assign: x
            Function Call: fact_iter
              Number: 5
          Function Call: print
            Identifier: x
            Function Call: fact_rec
              Number: 5
          Return:
            Number: 0
    "###);
}

#[test]
fn quiet_prints_only_the_tree() {
    let (outcome, out) = analyze("f(a, b, c);", Options { quiet: true });
    assert_eq!(outcome, Outcome::Tree);
    assert_eq!(
        out,
        "Compound Statement:\n\
         \x20 Function Call: f\n\
         \x20   Identifier: a\n\
         \x20   Identifier: b\n\
         \x20   Identifier: c\n"
    );
}

#[test]
fn empty_program() {
    let (outcome, out) = analyze("// nothing to see\n", Options::default());
    assert_eq!(outcome, Outcome::Empty);
    assert!(outcome.is_success());
    assert_eq!(
        out,
        "Parse succeeded.\nNo syntax tree was produced (root is empty).\n"
    );

    let (outcome, out) = analyze("", Options { quiet: true });
    assert_eq!(outcome, Outcome::Empty);
    assert_eq!(out, "");
}

#[test]
fn syntax_error() {
    let (outcome, out) = analyze("int main() {\n  return 1\n}\n", Options::default());
    assert_eq!(out, "Parse failed.\n");
    assert!(!outcome.is_success());

    match outcome {
        Outcome::Failed(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].message(), "Expected `;`, found `}`");
            assert_eq!(errors[0].span(), 24..25);
        }
        other => panic!("expected a failure, got {:?}", other),
    }
}

fn diagnostics(content: &str, colored: bool) -> Vec<String> {
    let (outcome, _) = analyze(content, Options::default());
    let source = Source::new(content);
    match outcome {
        Outcome::Failed(errors) => errors
            .iter()
            .map(|error| render_diagnostic(Path::new("prog.c"), &source, error, colored))
            .collect(),
        other => panic!("expected a failure, got {:?}", other),
    }
}

#[test]
fn diagnostic_locates_the_error() {
    assert_eq!(
        diagnostics("int main() {\n  return 1\n}\n", false),
        ["prog.c:3:1: error: Expected `;`, found `}`"]
    );
    assert_eq!(
        diagnostics("int x = 1;\nint y = 2 @;\n", false),
        ["prog.c:2:11: error: Unexpected character `@`"]
    );
}

#[test]
fn diagnostic_styles_the_prefix() {
    assert_eq!(
        diagnostics("x = 1", true),
        ["prog.c:1:6: \u{1b}[31m\u{1b}[1merror:\u{1b}[0m Expected `;`, found end of input"]
    );
}

#[test]
fn exit_codes() {
    assert_eq!(analyze("int x;", Options::default()).0.exit_code(), 0);
    assert_eq!(analyze("", Options::default()).0.exit_code(), 0);
    assert_eq!(analyze("int x", Options::default()).0.exit_code(), 1);
}

#[test]
fn output_is_deterministic() {
    let source = include_str!("programs/factorial.c");
    let first = analyze(source, Options::default());
    let second = analyze(source, Options::default());
    assert_eq!(first, second);
}
