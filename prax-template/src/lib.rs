//! # prax-template
//!
//! Query template rendering for the Prax ORM.
//!
//! A [`Template`] is an ordered list of fragments: literal text, references
//! to text arguments by index, and typed scalar slots. Rendering substitutes
//! a positional argument list into it and produces the final query string.
//! Every typed scalar is wrapped in parentheses so a crafted numeric,
//! boolean, binary or timestamp value cannot close a line into a SQL comment.
//!
//! This is textual substitution only. Text arguments are spliced verbatim
//! and byte values are quoted without escaping.
//!
//! ## Rendering
//!
//! ```rust
//! use prax_template::{Template, Value};
//!
//! let template = Template::builder()
//!     .arg_ref(0)
//!     .slot()
//!     .arg_ref(2)
//!     .slot()
//!     .literal("")
//!     .build();
//!
//! let sql = template
//!     .sanitize(&[
//!         Value::from("SELECT * FROM t WHERE id = "),
//!         Value::from(5i64),
//!         Value::from(" AND flag = "),
//!         Value::from(true),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(sql, "SELECT * FROM t WHERE id = (5) AND flag = (true)");
//! ```
//!
//! ## Errors
//!
//! ```rust
//! use prax_template::{ErrorCode, Template, Value};
//!
//! let template = Template::builder().slot().literal("").build();
//! let err = template.sanitize(&[Value::from("text")]).unwrap_err();
//! assert_eq!(err.code, ErrorCode::InvalidArgType);
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod logging;
pub mod sanitize;
pub mod template;
pub mod value;

pub use error::{ErrorCode, ErrorContext, SanitizeError, SanitizeResult};
pub use sanitize::sanitize;
pub use template::{Part, Template, TemplateBuilder};
pub use value::Value;
