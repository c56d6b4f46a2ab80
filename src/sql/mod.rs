//! SQL expression model.
//!
//! This module provides the node types translators produce and the pieces
//! needed to build and inspect them:
//!
//! - [`expr`] - Expression nodes (function call, fragment, conversion, constant, column)
//! - [`types`] - Host types and dialect type mappings
//! - [`factory`] - Node construction with type mapping resolution
//! - [`token`] - Token types for rendering
//! - [`dialect`] - SQL dialect implementations

pub mod dialect;
pub mod expr;
pub mod factory;
pub mod token;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use dialect::{SqlDialect, TSql};
pub use expr::{
    column, constant, ColumnExpr, Literal, SqlConstant, SqlConvert, SqlExpr, SqlFragment,
    SqlFunction,
};
pub use factory::SqlExpressionFactory;
pub use token::{Token, TokenStream};
pub use types::{HostType, SqlServerTypeMappingSource, TypeMapping, TypeMappingSource};
