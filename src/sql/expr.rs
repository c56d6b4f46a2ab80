//! SQL expression nodes produced by method-call translation.
//!
//! Nodes are immutable values: each translation builds fresh nodes and hands
//! ownership to the caller. Every node except `Fragment` carries the host
//! type of the value it produces and, optionally, a resolved `TypeMapping`.

use super::dialect::{SqlDialect, TSql};
use super::token::{Token, TokenStream};
use super::types::{HostType, TypeMapping};

// =============================================================================
// Expression AST
// =============================================================================

/// A SQL expression.
///
/// Every variant must be handled in `to_tokens()` - the compiler enforces this.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlExpr {
    /// Column reference, the usual leaf handed in by the query pipeline.
    Column(ColumnExpr),

    /// Literal value.
    Constant(SqlConstant),

    /// Literal SQL token inserted verbatim (type name, date-part keyword).
    Fragment(SqlFragment),

    /// Function call: name(args...)
    Function(SqlFunction),

    /// Type conversion of an operand to another host type.
    Convert(SqlConvert),
}

/// Column reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnExpr {
    pub name: String,
    pub host_type: HostType,
    pub nullable: bool,
    pub type_mapping: Option<TypeMapping>,
}

/// Literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
}

/// Literal value with its host type.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlConstant {
    pub value: Literal,
    pub host_type: HostType,
    pub type_mapping: Option<TypeMapping>,
}

/// Raw SQL token that is never nullable and never parameterized.
///
/// The text is `'static`: fragments are fixed per translation branch and
/// cannot be assembled from values seen at translation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SqlFragment {
    pub sql: &'static str,
}

/// SQL function call.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFunction {
    pub name: &'static str,
    pub arguments: Vec<SqlExpr>,
    pub nullable: bool,
    /// One flag per argument: whether a NULL argument makes the call NULL.
    pub arguments_propagate_nullability: Vec<bool>,
    pub return_type: HostType,
    pub type_mapping: Option<TypeMapping>,
}

impl SqlFunction {
    /// Create a function node.
    ///
    /// # Panics
    ///
    /// Panics if `arguments_propagate_nullability` does not have exactly one
    /// entry per argument.
    pub fn new(
        name: &'static str,
        arguments: Vec<SqlExpr>,
        nullable: bool,
        arguments_propagate_nullability: Vec<bool>,
        return_type: HostType,
        type_mapping: Option<TypeMapping>,
    ) -> Self {
        assert_eq!(
            arguments.len(),
            arguments_propagate_nullability.len(),
            "{} needs one nullability propagation flag per argument",
            name
        );
        Self {
            name,
            arguments,
            nullable,
            arguments_propagate_nullability,
            return_type,
            type_mapping,
        }
    }
}

/// Conversion of `operand` to `host_type`.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlConvert {
    pub operand: Box<SqlExpr>,
    pub host_type: HostType,
    pub type_mapping: Option<TypeMapping>,
}

// =============================================================================
// Accessors
// =============================================================================

impl SqlExpr {
    /// Host type of the value this node produces. Fragments have none.
    pub fn host_type(&self) -> Option<HostType> {
        match self {
            SqlExpr::Column(c) => Some(c.host_type),
            SqlExpr::Constant(c) => Some(c.host_type),
            SqlExpr::Fragment(_) => None,
            SqlExpr::Function(f) => Some(f.return_type),
            SqlExpr::Convert(c) => Some(c.host_type),
        }
    }

    /// Resolved type mapping, if one has been applied.
    pub fn type_mapping(&self) -> Option<&TypeMapping> {
        match self {
            SqlExpr::Column(c) => c.type_mapping.as_ref(),
            SqlExpr::Constant(c) => c.type_mapping.as_ref(),
            SqlExpr::Fragment(_) => None,
            SqlExpr::Function(f) => f.type_mapping.as_ref(),
            SqlExpr::Convert(c) => c.type_mapping.as_ref(),
        }
    }

    /// Return this node with `mapping` attached. Fragments are returned as-is.
    pub fn with_type_mapping(self, mapping: TypeMapping) -> Self {
        match self {
            SqlExpr::Column(c) => SqlExpr::Column(ColumnExpr {
                type_mapping: Some(mapping),
                ..c
            }),
            SqlExpr::Constant(c) => SqlExpr::Constant(SqlConstant {
                type_mapping: Some(mapping),
                ..c
            }),
            SqlExpr::Fragment(f) => SqlExpr::Fragment(f),
            SqlExpr::Function(f) => SqlExpr::Function(SqlFunction {
                type_mapping: Some(mapping),
                ..f
            }),
            SqlExpr::Convert(c) => SqlExpr::Convert(SqlConvert {
                type_mapping: Some(mapping),
                ..c
            }),
        }
    }

    pub fn as_function(&self) -> Option<&SqlFunction> {
        match self {
            SqlExpr::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_convert(&self) -> Option<&SqlConvert> {
        match self {
            SqlExpr::Convert(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_fragment(&self) -> Option<&'static str> {
        match self {
            SqlExpr::Fragment(f) => Some(f.sql),
            _ => None,
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Create a nullable column reference with no type mapping applied yet.
pub fn column(name: impl Into<String>, host_type: HostType) -> SqlExpr {
    SqlExpr::Column(ColumnExpr {
        name: name.into(),
        host_type,
        nullable: true,
        type_mapping: None,
    })
}

/// Create a constant with no type mapping applied yet.
pub fn constant(value: Literal, host_type: HostType) -> SqlExpr {
    SqlExpr::Constant(SqlConstant {
        value,
        host_type,
        type_mapping: None,
    })
}

// =============================================================================
// Expression to Tokens
// =============================================================================

impl SqlExpr {
    /// Convert this expression to a token stream.
    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();

        match self {
            SqlExpr::Column(c) => {
                ts.push(Token::Ident(c.name.clone()));
            }

            SqlExpr::Constant(c) => {
                ts.push(match &c.value {
                    Literal::Int(n) => Token::LitInt(*n),
                    Literal::Float(f) => Token::LitFloat(*f),
                    Literal::String(s) => Token::LitString(s.clone()),
                    Literal::Bool(b) => Token::LitBool(*b),
                    Literal::Null => Token::LitNull,
                });
            }

            SqlExpr::Fragment(f) => {
                ts.push(Token::Raw(f.sql));
            }

            SqlExpr::Function(f) => {
                ts.push(Token::FunctionName(f.name.into()));
                ts.lparen();
                for (i, arg) in f.arguments.iter().enumerate() {
                    if i > 0 {
                        ts.comma().space();
                    }
                    ts.append(&arg.to_tokens());
                }
                ts.rparen();
            }

            SqlExpr::Convert(c) => {
                let store_type = c
                    .type_mapping
                    .as_ref()
                    .map(|m| m.store_type.to_string())
                    .unwrap_or_else(|| c.host_type.name().to_string());
                ts.push(Token::FunctionName("CONVERT".into()));
                ts.lparen();
                ts.push(Token::StoreType(store_type));
                ts.comma().space();
                ts.append(&c.operand.to_tokens());
                ts.rparen();
            }
        }

        ts
    }

    /// Render this expression as T-SQL text.
    pub fn to_sql(&self) -> String {
        self.to_sql_for_dialect(&TSql)
    }

    pub fn to_sql_for_dialect(&self, dialect: &dyn SqlDialect) -> String {
        self.to_tokens().serialize(dialect)
    }
}
