//! Method-call translation.
//!
//! The query pipeline offers each method call it finds in an expression tree
//! to a chain of translators. A translator either builds the equivalent SQL
//! node or declines with [`Translation::NotRecognized`], and the chain moves
//! on to the next one.
//!
//! ```text
//!   (instance?, method, arguments)
//!              │
//!              ▼
//!   ┌──────────────────────┐  NotRecognized  ┌──────────────────────┐
//!   │  ConvertTranslator   │ ──────────────▶ │ DateMethodTranslator │ ──▶ NotRecognized
//!   └──────────────────────┘                 └──────────────────────┘
//!              │ Recognized                             │ Recognized
//!              ▼                                        ▼
//!           SqlExpr                                  SqlExpr
//! ```
//!
//! Translators hold no mutable state and never touch their inputs, so one
//! instance may serve any number of threads.

pub mod catalog;
pub mod convert;
pub mod date;
pub mod method;
pub mod provider;
pub mod registry;

pub use convert::ConvertTranslator;
pub use date::DateMethodTranslator;
pub use method::{DeclaringType, MethodInfo, MethodParseError, MethodSignature};
pub use provider::MethodCallTranslatorProvider;
pub use registry::RegistryError;

use crate::sql::SqlExpr;

/// Outcome of offering a method call to a translator.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Translation {
    /// The call was recognized and translated.
    Recognized(SqlExpr),
    /// The translator does not handle this call; try the next one.
    NotRecognized,
}

impl Translation {
    pub fn is_recognized(&self) -> bool {
        matches!(self, Translation::Recognized(_))
    }

    pub fn into_expr(self) -> Option<SqlExpr> {
        match self {
            Translation::Recognized(expr) => Some(expr),
            Translation::NotRecognized => None,
        }
    }

    /// Return `self` if recognized, otherwise the result of `f`.
    pub fn or_else(self, f: impl FnOnce() -> Translation) -> Translation {
        match self {
            Translation::Recognized(_) => self,
            Translation::NotRecognized => f(),
        }
    }
}

/// Translates one family of method calls into SQL.
pub trait MethodCallTranslator: std::fmt::Debug + Send + Sync {
    /// Short name used in configuration and logs.
    fn name(&self) -> &'static str;

    /// Translate a call of `method` on `instance` (absent for static methods)
    /// with `arguments`.
    fn translate(
        &self,
        instance: Option<&SqlExpr>,
        method: &MethodInfo,
        arguments: &[SqlExpr],
    ) -> Translation;
}
