//! Fuzz target for template rendering.
//!
//! Renders arbitrary templates against arbitrary arguments. Rendering must
//! never panic, and a successful render must equal the fragments joined in
//! order, with each slot's literal wrapped in its own parentheses.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_sanitize
//! ```

#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use chrono::{FixedOffset, TimeZone};
use libfuzzer_sys::fuzz_target;
use prax_template::{Part, Template, Value};

#[derive(Debug, Arbitrary)]
enum FuzzPart {
    Literal(String),
    ArgRef(u8),
    Slot,
}

impl From<FuzzPart> for Part {
    fn from(val: FuzzPart) -> Self {
        match val {
            FuzzPart::Literal(s) => Part::Literal(s),
            FuzzPart::ArgRef(i) => Part::ArgRef(usize::from(i)),
            FuzzPart::Slot => Part::Slot,
        }
    }
}

#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp {
        secs: i32,
        nanos: u32,
        offset_minutes: i16,
    },
}

impl From<FuzzValue> for Value {
    fn from(val: FuzzValue) -> Self {
        match val {
            FuzzValue::Null => Value::Null,
            FuzzValue::Bool(b) => Value::Bool(b),
            FuzzValue::Int(i) => Value::Int(i),
            FuzzValue::Float(f) => Value::Float(f),
            FuzzValue::Text(s) => Value::Text(s),
            FuzzValue::Bytes(b) => Value::Bytes(b),
            FuzzValue::Timestamp {
                secs,
                nanos,
                offset_minutes,
            } => FixedOffset::east_opt(i32::from(offset_minutes % 1440) * 60)
                .and_then(|tz| {
                    tz.timestamp_opt(i64::from(secs), nanos % 1_000_000_000)
                        .single()
                })
                .map(Value::Timestamp)
                .unwrap_or(Value::Null),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct FuzzRender {
    parts: Vec<FuzzPart>,
    args: Vec<FuzzValue>,
}

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    if let Ok(input) = FuzzRender::arbitrary(&mut unstructured) {
        let template: Template = input.parts.into_iter().map(Part::from).collect();
        let args: Vec<Value> = input.args.into_iter().map(Value::from).collect();

        // Errors are expected; panics are not
        if let Ok(sql) = template.sanitize(&args) {
            let mut expected = String::new();
            for (cursor, part) in template.parts().iter().enumerate() {
                match part {
                    Part::Literal(text) => expected.push_str(text),
                    Part::ArgRef(index) => expected.push_str(args[*index].as_text().unwrap()),
                    Part::Slot => {
                        let literal = args[cursor].to_sql_literal().unwrap();
                        expected.push_str(&format!("({})", literal));
                    }
                }
            }
            assert_eq!(sql, expected);
        }
    }
});
