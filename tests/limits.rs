use std::process::Command;

use expressions::{
    Diagnostic, DiagnosticKind,
    ast::{LiteralValue, Span},
    check_length,
    error::{
        Param,
        parse_error::{TOO_DEEP, TOO_LONG},
    },
    evaluate_expression,
    interpreter::parser::core::{MAX_DEPTH, MAX_NESTING},
    parse_expression,
};

fn nested_parens(levels: usize) -> String {
    format!("{}1{}", "(".repeat(levels), ")".repeat(levels))
}

fn chain(operands: usize) -> String {
    vec!["true"; operands].join(" and ")
}

fn assert_too_deep(src: &str, limit: usize, span: Span) -> Diagnostic {
    let e = match evaluate_expression(src) {
        Ok(value) => panic!("Expression of {} bytes succeeded with {value:?}", src.len()),
        Err(e) => e,
    };
    assert_eq!(e.kind, DiagnosticKind::Limit);
    assert_eq!(e.key(), TOO_DEEP);
    assert_eq!(e.message.params, [Param::Text(limit.to_string())]);
    assert_eq!(e.span, span);
    e
}

#[test]
fn length_at_the_limit_is_accepted() {
    assert!(check_length("", 0).is_ok());
    assert!(check_length("true", 4).is_ok());
    assert!(check_length("1 > 0", 10_000).is_ok());
}

#[test]
fn length_over_the_limit_is_refused() {
    let e = check_length("true ", 4).unwrap_err();
    assert_eq!(e.kind, DiagnosticKind::Limit);
    assert_eq!(e.key(), TOO_LONG);
    assert_eq!(e.message.params,
               [Param::Text("5".to_string()), Param::Text("4".to_string())]);
    assert_eq!(e.span, Span::new(4, 5));
    assert!(!e.span.is_empty());
}

#[test]
fn length_limit_span_stays_on_char_boundaries() {
    let e = check_length("\"ää\"", 2).unwrap_err();
    assert_eq!(e.span, Span::new(1, 6));
}

#[test]
fn nesting_up_to_the_limit_evaluates() {
    assert_eq!(evaluate_expression(&nested_parens(MAX_NESTING)).unwrap(),
               Some(LiteralValue::Number(1.0)));

    let negations = format!("{}true", "!".repeat(MAX_NESTING));
    assert_eq!(evaluate_expression(&negations).unwrap(), Some(LiteralValue::Boolean(true)));

    let mixed = format!("{}false{}", "!(".repeat(MAX_NESTING / 2), ")".repeat(MAX_NESTING / 2));
    assert_eq!(evaluate_expression(&mixed).unwrap(), Some(LiteralValue::Boolean(false)));
}

#[test]
fn parentheses_past_the_limit_are_refused() {
    let offset = MAX_NESTING;
    assert_too_deep(&nested_parens(MAX_NESTING + 1),
                    MAX_NESTING,
                    Span::new(offset, offset + 1));
}

#[test]
fn deep_nesting_within_the_length_limit_is_refused() {
    let src = nested_parens(4900);
    assert!(check_length(&src, 10_000).is_ok());
    assert_too_deep(&src, MAX_NESTING, Span::new(MAX_NESTING, MAX_NESTING + 1));

    let src = format!("{}true", "!".repeat(9000));
    assert!(check_length(&src, 10_000).is_ok());
    assert_too_deep(&src, MAX_NESTING, Span::new(MAX_NESTING, MAX_NESTING + 1));

    let src = format!("{}1", "-".repeat(9000));
    assert_too_deep(&src, MAX_NESTING, Span::new(MAX_NESTING, MAX_NESTING + 1));
}

#[test]
fn long_operator_chains_evaluate() {
    let src = chain(300);
    let expr = parse_expression(&src).unwrap();
    assert_eq!(expr.depth(), 300);
    assert_eq!(evaluate_expression(&src).unwrap(), Some(LiteralValue::Boolean(true)));
}

#[test]
fn operator_chains_past_the_depth_limit_are_refused() {
    // "true and " is 9 bytes; the operator that makes the tree too deep is
    // the MAX_DEPTH-th `and`.
    let offset = 9 * MAX_DEPTH - 4;
    let e = assert_too_deep(&chain(MAX_DEPTH + 100), MAX_DEPTH, Span::new(offset, offset + 3));
    assert_eq!(e.to_string(),
               format!("limit exceeded at {}..{}: expressions-too-deep(\"{MAX_DEPTH}\")",
                       offset,
                       offset + 3));
}

#[test]
fn binary_reports_deep_nesting_instead_of_aborting() {
    let output = Command::new(env!("CARGO_BIN_EXE_expressions")).arg(nested_parens(4900))
                                                                .output()
                                                                .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(TOO_DEEP), "stderr was: {stderr}");
}

#[test]
fn binary_refuses_long_input() {
    let output = Command::new(env!("CARGO_BIN_EXE_expressions")).args(["--max-length",
                                                                       "4",
                                                                       "true and true"])
                                                                .output()
                                                                .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(TOO_LONG), "stderr was: {stderr}");
}

#[test]
fn binary_prints_the_selected_branch() {
    let output = Command::new(env!("CARGO_BIN_EXE_expressions")).args(["1 > 0", "yes", "no"])
                                                                .output()
                                                                .expect("failed to run binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), "yes");
}
