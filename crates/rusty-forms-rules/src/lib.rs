//! # rusty-forms-rules
//!
//! Generates jQuery-Validation rule snippets from a server-side form model.
//!
//! Each field's constraints become entries of a `rules("add", ...)` call, and
//! every entry gets an error message looked up in a message table: first
//! under `<field>.error.<constraint>`, then under `error.<constraint>`.
//!
//! ```rust
//! use rusty_forms_rules::{Field, Messages, RulesRenderer};
//!
//! let messages = Messages::new()
//!     .with("error.required", "This field is required")
//!     .with("age.error.min", "You must be at least {0}");
//!
//! let field = Field::new("age")
//!     .constraint("constraint.required", Vec::<i64>::new())?
//!     .constraint("constraint.min", [18])?;
//!
//! let script = RulesRenderer::with_defaults(&messages).render_field(&field)?;
//! assert!(script.contains("min: 18,"));
//! assert!(script.contains(r#"min: $.format("You must be at least {0}")"#));
//! # Ok::<(), rusty_forms_rules::RulesError>(())
//! ```

pub mod config;
pub mod constraint;
pub mod error;
pub mod field;
pub mod messages;
pub mod renderer;

pub use config::{MessagesConfig, MissingMessage, RenderConfig, RulesConfig};
pub use constraint::{Constraint, ConstraintArg, ConstraintKind};
pub use error::{Result, RulesError};
pub use field::{Field, Form};
pub use messages::{MessageBundle, MessageSource, Messages};
pub use renderer::{resolve_message, ResolvedMessage, RulesRenderer};
