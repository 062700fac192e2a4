//! Rendering a template against a positional argument list.
//!
//! The renderer walks the fragments in order with a cursor that advances by
//! one after every fragment, whatever its kind:
//!
//! - [`Part::Literal`] copies its text and consumes nothing.
//! - [`Part::ArgRef`] splices the text argument at its explicit index.
//! - [`Part::Slot`] formats the argument under the cursor by type and wraps
//!   it in parentheses.
//!
//! Wrapping every typed scalar in parentheses stops a value such as `-1`
//! from joining a preceding `-` into a `--` line comment
//! (GHSA-m7wr-2xf7-cm9p).
//!
//! ```rust
//! use prax_template::{Template, Value};
//!
//! let template = Template::builder().arg_ref(0).slot().literal("").build();
//! let sql = template
//!     .sanitize(&[Value::from("SELECT 1 - "), Value::from(-1)])
//!     .unwrap();
//! assert_eq!(sql, "SELECT 1 - (-1)");
//! ```
//!
//! A template must carry exactly one more fragment than there are
//! arguments, and every argument must be consumed:
//!
//! ```rust
//! use prax_template::{sanitize, Template};
//!
//! let template = Template::builder().slot().literal("").build();
//! assert!(sanitize!(template).unwrap_err().is_arity_mismatch());
//! assert_eq!(sanitize!(template, 3.5).unwrap(), "(3.500000)");
//! ```

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};
use smallvec::{SmallVec, smallvec};
use tracing::debug;

use crate::error::{SanitizeError, SanitizeResult};
use crate::template::{Part, Template};
use crate::value::Value;

impl Template {
    /// Render the template with the given arguments.
    ///
    /// Fails without partial output if the argument count is not one less
    /// than the fragment count, if a bound fragment has no argument under
    /// the cursor, if a value has the wrong type, or if any argument is left
    /// unconsumed.
    pub fn sanitize(&self, args: &[Value]) -> SanitizeResult<String> {
        if self.expected_args() != Some(args.len()) {
            return Err(SanitizeError::arity_mismatch(
                args.len(),
                self.expected_args(),
            ));
        }

        let mut out = String::with_capacity(self.literal_len() + args.len() * 8);
        let mut used: SmallVec<[bool; 16]> = smallvec![false; args.len()];

        for (cursor, part) in self.parts().iter().enumerate() {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::ArgRef(index) => {
                    if cursor >= args.len() {
                        return Err(SanitizeError::index_out_of_range(cursor));
                    }
                    let arg = args
                        .get(*index)
                        .ok_or_else(|| SanitizeError::index_out_of_range(*index))?;
                    let text = arg
                        .as_text()
                        .ok_or_else(|| SanitizeError::invalid_arg_type(*index, arg.type_name()))?;
                    out.push_str(text);
                    used[*index] = true;
                }
                Part::Slot => {
                    let arg = args
                        .get(cursor)
                        .ok_or_else(|| SanitizeError::index_out_of_range(cursor))?;
                    let text = arg
                        .to_sql_literal()
                        .ok_or_else(|| SanitizeError::invalid_arg_type(cursor, arg.type_name()))?;
                    out.push('(');
                    out.push_str(&text);
                    out.push(')');
                    used[cursor] = true;
                }
            }
        }

        if let Some(position) = used.iter().position(|consumed| !consumed) {
            return Err(SanitizeError::unused_argument(position));
        }

        debug!(
            parts = self.len(),
            args = args.len(),
            sql_len = out.len(),
            "Template::sanitize()"
        );
        Ok(out)
    }
}

/// Render `template` with `args`.
pub fn sanitize(template: &Template, args: &[Value]) -> SanitizeResult<String> {
    template.sanitize(args)
}

impl Value {
    /// Format a typed scalar as a SQL literal, before parenthesis wrapping.
    ///
    /// Returns `None` for types that cannot fill a slot.
    ///
    /// ```rust
    /// use prax_template::Value;
    ///
    /// assert_eq!(Value::from(b"ab".to_vec()).to_sql_literal().as_deref(), Some("'ab'"));
    /// assert_eq!(Value::from("ab").to_sql_literal(), None);
    /// ```
    pub fn to_sql_literal(&self) -> Option<String> {
        let text = match self {
            Value::Int(v) => v.to_string(),
            Value::Float(v) => format_float(*v),
            Value::Bool(v) => v.to_string(),
            Value::Bytes(v) => format!("'{}'", String::from_utf8_lossy(v)),
            Value::Null => "null".to_string(),
            Value::Timestamp(ts) => format!("'{}'", format_timestamp(ts)),
            Value::Text(_) | Value::Json(_) | Value::Uuid(_) => return None,
        };
        Some(text)
    }
}

fn format_float(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{:.6}", v)
    }
}

/// RFC 3339 with nanoseconds; trailing fractional zeros are dropped and a
/// zero offset is written as `Z`.
fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    // RFC 3339 offsets have minute precision
    let ts = if ts.offset().local_minus_utc() % 60 != 0 {
        ts.with_timezone(&Utc).fixed_offset()
    } else {
        *ts
    };

    // Years past 9999 are written unsigned, which `%Y` does not do
    let mut out = format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        ts.year(),
        ts.month(),
        ts.day(),
        ts.hour(),
        ts.minute(),
        ts.second()
    );

    // chrono encodes a leap second as nanos >= 1e9
    let nanos = ts.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let fraction = format!("{:09}", nanos);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    if ts.offset().local_minus_utc() == 0 {
        out.push('Z');
    } else {
        out.push_str(&ts.format("%:z").to_string());
    }
    out
}

/// Render a template with inline arguments.
///
/// Each argument is converted with `Value::from`.
///
/// # Examples
///
/// ```rust
/// use prax_template::{sanitize, Template};
///
/// let template = Template::builder().arg_ref(0).slot().literal(";").build();
/// let sql = sanitize!(template, "SELECT ", true).unwrap();
/// assert_eq!(sql, "SELECT (true);");
/// ```
#[macro_export]
macro_rules! sanitize {
    ($template:expr) => {
        $template.sanitize(&[])
    };

    ($template:expr, $($arg:expr),+ $(,)?) => {
        $template.sanitize(&[$($crate::Value::from($arg)),+])
    };
}
