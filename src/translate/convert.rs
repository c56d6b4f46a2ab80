//! Value conversions (`Convert.ToInt32(x)`, `Convert.ToDateTime(x)`, ...).
//!
//! A supported conversion becomes `CONVERT(<type name>, <value>)`. Converting
//! a non-text value to a date-time goes through text first:
//! `CONVERT(datetime2, CONVERT(nvarchar(max), x))`. SQL Server does not treat
//! a direct numeric to datetime2 conversion the same way, so the extra step
//! is kept.

use super::method::MethodInfo;
use super::registry::{conversion_methods, convert_type_name};
use super::{MethodCallTranslator, Translation};
use crate::sql::{HostType, SqlExpr, SqlExpressionFactory};

#[derive(Debug, Clone)]
pub struct ConvertTranslator {
    factory: SqlExpressionFactory,
}

impl ConvertTranslator {
    pub fn new(factory: SqlExpressionFactory) -> Self {
        Self { factory }
    }
}

impl MethodCallTranslator for ConvertTranslator {
    fn name(&self) -> &'static str {
        "convert"
    }

    fn translate(
        &self,
        _instance: Option<&SqlExpr>,
        method: &MethodInfo,
        arguments: &[SqlExpr],
    ) -> Translation {
        if !conversion_methods().contains(&method.signature) {
            return Translation::NotRecognized;
        }
        let (Some(type_name), [argument]) = (convert_type_name(method.name()), arguments) else {
            return Translation::NotRecognized;
        };

        let to_convert = if method.return_type == HostType::DateTime
            && argument.host_type() != Some(HostType::String)
        {
            self.factory.convert(argument.clone(), HostType::String)
        } else {
            argument.clone()
        };

        log::trace!("{} recognized {}", self.name(), method.signature);

        Translation::Recognized(self.factory.function(
            "CONVERT",
            vec![self.factory.fragment(type_name), to_convert],
            true,
            vec![false, true],
            method.return_type,
            None,
        ))
    }
}
