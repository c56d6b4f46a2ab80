//! Construction of SQL expression nodes with type mappings applied.

use std::sync::Arc;

use super::expr::{Literal, SqlConstant, SqlConvert, SqlExpr, SqlFragment, SqlFunction};
use super::types::{HostType, TypeMapping, TypeMappingSource};

/// Builds SQL nodes, resolving type mappings through a `TypeMappingSource`.
///
/// Cheap to clone; the mapping source is shared.
#[derive(Debug, Clone)]
pub struct SqlExpressionFactory {
    type_mapping_source: Arc<dyn TypeMappingSource>,
}

impl SqlExpressionFactory {
    pub fn new(type_mapping_source: Arc<dyn TypeMappingSource>) -> Self {
        Self {
            type_mapping_source,
        }
    }

    pub fn type_mapping_source(&self) -> &dyn TypeMappingSource {
        self.type_mapping_source.as_ref()
    }

    /// Function call node. The type mapping is used as given.
    pub fn function(
        &self,
        name: &'static str,
        arguments: Vec<SqlExpr>,
        nullable: bool,
        arguments_propagate_nullability: Vec<bool>,
        return_type: HostType,
        type_mapping: Option<TypeMapping>,
    ) -> SqlExpr {
        SqlExpr::Function(SqlFunction::new(
            name,
            arguments,
            nullable,
            arguments_propagate_nullability,
            return_type,
            type_mapping,
        ))
    }

    pub fn fragment(&self, sql: &'static str) -> SqlExpr {
        SqlExpr::Fragment(SqlFragment { sql })
    }

    /// Conversion of `operand` to `host_type`.
    ///
    /// The node gets the default mapping of the target type; the operand gets
    /// its own default mapping if it has none yet.
    pub fn convert(&self, operand: SqlExpr, host_type: HostType) -> SqlExpr {
        SqlExpr::Convert(SqlConvert {
            operand: Box::new(self.apply_default_type_mapping(operand)),
            host_type,
            type_mapping: self.type_mapping_source.find_mapping(host_type),
        })
    }

    /// Constant with the default mapping of `host_type`.
    pub fn constant(&self, value: Literal, host_type: HostType) -> SqlExpr {
        SqlExpr::Constant(SqlConstant {
            value,
            host_type,
            type_mapping: self.type_mapping_source.find_mapping(host_type),
        })
    }

    /// Attach the default mapping for the node's host type unless it already
    /// carries one.
    pub fn apply_default_type_mapping(&self, expr: SqlExpr) -> SqlExpr {
        if expr.type_mapping().is_some() {
            return expr;
        }
        match expr
            .host_type()
            .and_then(|t| self.type_mapping_source.find_mapping(t))
        {
            Some(mapping) => expr.with_type_mapping(mapping),
            None => expr,
        }
    }
}

impl Default for SqlExpressionFactory {
    fn default() -> Self {
        Self::new(Arc::new(super::types::SqlServerTypeMappingSource))
    }
}
