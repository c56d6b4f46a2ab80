//! # method-sql
//!
//! Translates host-language method calls found in query expression trees
//! (value conversions, date arithmetic) into SQL Server expression nodes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        Method catalog (every declared overload)          │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [registry, built once]
//! ┌─────────────────────────────────────────────────────────┐
//! │  Recognized signatures, type-name and date-part tables   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [translators, first match wins]
//! ┌─────────────────────────────────────────────────────────┐
//! │   SqlExpr: CONVERT / DATEADD / DATEPART /                │
//! │            DATETIME2FROMPARTS / type conversion          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use method_sql::prelude::*;
//!
//! let provider = MethodCallTranslatorProvider::sql_server(SqlExpressionFactory::default());
//! let method = method_sql::translate::catalog::find(
//!     &"Convert.ToInt32(string)".parse::<MethodSignature>().unwrap(),
//! )
//! .unwrap();
//!
//! let sql = provider
//!     .translate(None, method, &[column("x", HostType::String)])
//!     .into_expr()
//!     .map(|e| e.to_sql());
//! assert_eq!(sql.as_deref(), Some("CONVERT(int, [x])"));
//! ```

pub mod config;
pub mod sql;
pub mod translate;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::sql::{
        column, constant, HostType, Literal, SqlExpr, SqlExpressionFactory, TypeMapping,
    };
    pub use crate::translate::{
        ConvertTranslator, DateMethodTranslator, DeclaringType, MethodCallTranslator,
        MethodCallTranslatorProvider, MethodInfo, MethodSignature, Translation,
    };
}

pub use sql::SqlExpr;
pub use translate::{MethodCallTranslator, MethodCallTranslatorProvider, Translation};
