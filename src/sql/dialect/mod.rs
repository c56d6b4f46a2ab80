//! SQL dialect formatting rules.
//!
//! Translated expressions are rendered through a `SqlDialect`, which owns the
//! lexical differences between engines:
//!
//! - Identifier quoting: `[]` (T-SQL)
//! - Unicode string prefixes: `N'...'` (T-SQL)
//! - Boolean literals: true/false vs 1/0
//!
//! Function names, type names and date-part keywords are decided by the
//! translators, not by the dialect.

pub mod helpers;
mod tsql;

pub use tsql::TSql;

/// SQL dialect trait - defines how leaf tokens are rendered.
pub trait SqlDialect: std::fmt::Debug {
    /// Dialect name for display/logging.
    fn name(&self) -> &'static str;

    /// Quote an identifier (column, alias).
    fn quote_identifier(&self, ident: &str) -> String;

    /// Quote a string literal.
    ///
    /// All dialects use single quotes with `''` for escaping.
    fn quote_string(&self, s: &str) -> String {
        helpers::quote_string_single(s)
    }

    /// Format a boolean literal.
    fn format_bool(&self, b: bool) -> &'static str;
}
