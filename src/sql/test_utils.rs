//! Test utilities for rendered SQL validation.
//!
//! Provides helpers for validating that rendered expressions are
//! syntactically correct T-SQL using sqlparser-rs.

use sqlparser::dialect::MsSqlDialect;
use sqlparser::parser::Parser;

/// Validates that an expression renders to valid T-SQL.
///
/// The expression is wrapped in a `SELECT` so it can be parsed as a
/// statement.
///
/// # Example
///
/// ```ignore
/// use crate::sql::test_utils::validate_sql;
///
/// validate_sql("CONVERT(int, [x])").unwrap();
/// ```
pub fn validate_sql(expr_sql: &str) -> Result<(), String> {
    let sql = format!("SELECT {}", expr_sql);
    Parser::parse_sql(&MsSqlDialect {}, &sql)
        .map(|_| ())
        .map_err(|e| format!("SQL validation failed: {}\nSQL: {}", e, sql))
}
