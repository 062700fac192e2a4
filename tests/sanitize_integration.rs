//! Integration tests for template rendering.
//!
//! These tests exercise the public surface end to end:
//! - Argument count validation
//! - Typed scalar formatting and parenthesis wrapping
//! - Index references and argument consumption
//! - Sharing one template across threads

use std::sync::Arc;
use std::thread;

use chrono::{FixedOffset, TimeZone};
use pretty_assertions::assert_eq;
use prax_sanitize::prelude::*;
use prax_sanitize::ErrorCode;

/// `n` typed slots followed by an empty literal, so that `n` arguments fit.
fn slots(n: usize) -> Template {
    std::iter::repeat_n(Part::Slot, n)
        .chain([Part::Literal(String::new())])
        .collect()
}

#[test]
fn test_arity_mismatch_for_every_wrong_length() {
    let template = slots(3);
    for len in [0usize, 1, 2, 4, 5, 10] {
        let args = vec![Value::Int(1); len];
        let err = template.sanitize(&args).unwrap_err();
        assert_eq!(err.code, ErrorCode::ArityMismatch, "len = {len}");
        assert_eq!(err.context.actual, Some(len));
        assert_eq!(err.context.expected, Some(3));
    }

    let ok = template.sanitize(&vec![Value::Int(1); 3]);
    assert_eq!(ok.unwrap(), "(1)(1)(1)");
}

#[test]
fn test_every_scalar_kind_is_wrapped() {
    let offset = FixedOffset::east_opt(9 * 3600).unwrap();
    let at = offset.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();

    let cases = [
        (Value::Int(i64::MIN), "(-9223372036854775808)"),
        (Value::Float(-0.5), "(-0.500000)"),
        (Value::Bool(true), "(true)"),
        (Value::Bool(false), "(false)"),
        (Value::Bytes(b"--".to_vec()), "('--')"),
        (Value::Null, "(null)"),
        (Value::Timestamp(at), "('2024-03-10T08:00:00+09:00')"),
    ];

    let template = slots(1);
    for (value, expected) in cases {
        assert_eq!(template.sanitize(&[value]).unwrap(), expected);
    }
}

#[test]
fn test_comment_injection_is_neutralised() {
    // "WHERE id = -" followed by a bare -1 would start a line comment.
    let template = Template::builder()
        .arg_ref(0)
        .slot()
        .arg_ref(2)
        .slot()
        .literal("")
        .build();

    let sql = template
        .sanitize(&[
            Value::from("SELECT * FROM accounts WHERE balance = -"),
            Value::Int(-1),
            Value::from("\nAND owner = -"),
            Value::Float(-2.0),
        ])
        .unwrap();

    assert_eq!(
        sql,
        "SELECT * FROM accounts WHERE balance = -(-1)\nAND owner = -(-2.000000)"
    );
    assert!(!sql.contains("--"));
}

#[test]
fn test_alternating_references_and_slots() {
    let template = Template::builder()
        .arg_ref(0)
        .slot()
        .arg_ref(2)
        .slot()
        .literal("")
        .build();

    let sql = sanitize!(
        template,
        "SELECT * FROM t WHERE id = ",
        5i64,
        " AND flag = ",
        true
    )
    .unwrap();
    assert_eq!(sql, "SELECT * FROM t WHERE id = (5) AND flag = (true)");
}

#[test]
fn test_interleaved_literals_do_not_line_up() {
    let template = Template::builder()
        .literal("SELECT * FROM t WHERE id = ")
        .slot()
        .literal(" AND flag = ")
        .slot()
        .build();

    let err = sanitize!(template, 5i64, true).unwrap_err();
    assert!(err.is_arity_mismatch());
    assert_eq!(
        err.to_string(),
        "[S1001] invalid number of arguments: 2 instead of 3"
    );
}

#[test]
fn test_unused_argument_is_named() {
    let template = Template::builder()
        .arg_ref(1)
        .arg_ref(1)
        .arg_ref(0)
        .literal("")
        .build();

    let err = sanitize!(template, "a", "b", "c").unwrap_err();
    assert_eq!(err.code, ErrorCode::UnusedArgument);
    assert_eq!(err.context.position, Some(2));
    assert_eq!(err.message, "argument 2 was not used");
}

#[test]
fn test_no_partial_output_on_late_failure() {
    // Everything before the last slot renders fine; the failure still wins.
    let template = Template::builder()
        .arg_ref(0)
        .slot()
        .slot()
        .literal("")
        .build();

    let result = sanitize!(template, "SELECT ", 1i64, "oops");
    let err = result.unwrap_err();
    assert!(err.is_invalid_arg_type());
    assert_eq!(err.context.position, Some(2));
    assert_eq!(err.context.type_name, Some("string"));
}

#[test]
fn test_successful_render_consumes_every_position_once() {
    let template = Template::builder()
        .slot()
        .arg_ref(3)
        .slot()
        .arg_ref(1)
        .literal("")
        .build();

    let sql = template
        .sanitize(&[
            Value::Int(0),
            Value::from("one"),
            Value::Int(2),
            Value::from("three"),
        ])
        .unwrap();
    assert_eq!(sql, "(0)three(2)one");
}

#[test]
fn test_template_shared_across_threads() {
    let template = Arc::new(slots(2));

    let handles: Vec<_> = (0..8i64)
        .map(|i| {
            let template = Arc::clone(&template);
            thread::spawn(move || {
                template
                    .sanitize(&[Value::Int(i), Value::Bool(i % 2 == 0)])
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let sql = handle.join().unwrap();
        let flag = if i % 2 == 0 { "(true)" } else { "(false)" };
        assert_eq!(sql, format!("({}){}", i, flag));
    }

    assert_eq!(*template, slots(2));
}

#[test]
fn test_template_loaded_from_json() {
    let template: Template = serde_json::from_str(
        r#"[{"arg_ref": 0}, "slot", {"literal": " -- done"}]"#,
    )
    .unwrap();

    let err = sanitize!(template, "SELECT ", uuid::Uuid::nil()).unwrap_err();
    assert!(err.is_invalid_arg_type());
    assert_eq!(err.context.type_name, Some("uuid"));

    let sql = sanitize!(template, "SELECT ", Some(1.25)).unwrap();
    assert_eq!(sql, "SELECT (1.250000) -- done");
}

#[test]
fn test_display_full_lists_suggestions() {
    let err = slots(1).sanitize(&[]).unwrap_err();
    let output = err.display_full();
    assert!(output.contains("Error [S1001]"));
    assert!(output.contains(ErrorCode::ArityMismatch.description()));
    assert!(output.contains("Suggestions:"));
    assert!(!err.is_retryable());
}
