//! # Prax Sanitize
//!
//! Render parameterized query templates into final query strings.
//!
//! Prax Sanitize provides:
//! - Templates built once from literal, index-reference and typed-slot fragments
//! - Type-specific literal formatting for integers, floats, booleans, bytes,
//!   timestamps and null
//! - Parenthesised scalar output that defeats line-comment injection
//! - Strict validation that every argument is consumed exactly as declared
//!
//! ## Quick Start
//!
//! ```rust
//! use prax_sanitize::prelude::*;
//!
//! let template = Template::builder()
//!     .arg_ref(0)
//!     .slot()
//!     .literal(" LIMIT 1")
//!     .build();
//!
//! let sql = sanitize!(template, "SELECT * FROM users WHERE id = ", 42i64).unwrap();
//! assert_eq!(sql, "SELECT * FROM users WHERE id = (42) LIMIT 1");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Template types, rendering and errors.
pub mod template {
    pub use prax_template::*;
}

/// Logging setup.
pub use prax_template::logging;

// Re-export the render macro
pub use prax_template::sanitize;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::template::{Part, SanitizeError, SanitizeResult, Template, Value};
    pub use crate::sanitize;
}

// Re-export key types at the crate root
pub use template::{ErrorCode, Part, SanitizeError, SanitizeResult, Template, Value};
