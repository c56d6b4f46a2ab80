//! Lookup tables the translators consult: which methods they recognize and
//! what each maps to in SQL Server.
//!
//! All tables are derived from the method catalog exactly once and are
//! read-only afterwards. A table entry naming an operation the catalog does
//! not declare is a configuration error; the process-wide tables panic on it
//! the first time they are touched.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::catalog::{catalog, MethodCatalog};
use super::method::{DeclaringType, MethodSignature};
use crate::sql::HostType;

/// Errors building the lookup tables.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("Operation {declaring_type}.{name} is not declared in the method catalog")]
    MissingOperation {
        declaring_type: DeclaringType,
        name: &'static str,
    },

    #[error("Method {0} is not declared in the method catalog")]
    MissingMethod(MethodSignature),
}

// =============================================================================
// Value conversions
// =============================================================================

/// SQL Server type name for each supported `Convert` operation.
pub const CONVERT_TYPE_NAMES: [(&str, &str); 9] = [
    ("ToBoolean", "bit"),
    ("ToByte", "tinyint"),
    ("ToDecimal", "decimal(18, 2)"),
    ("ToDouble", "float"),
    ("ToInt16", "smallint"),
    ("ToInt32", "int"),
    ("ToInt64", "bigint"),
    ("ToString", "nvarchar(max)"),
    ("ToDateTime", "datetime2"),
];

/// Argument types a conversion overload may take to be supported.
pub const SUPPORTED_ARGUMENT_TYPES: [HostType; 11] = [
    HostType::Bool,
    HostType::Byte,
    HostType::DateTime,
    HostType::Decimal,
    HostType::Float64,
    HostType::Float32,
    HostType::Int32,
    HostType::Int64,
    HostType::Int16,
    HostType::String,
    HostType::Object,
];

/// SQL Server type name a conversion operation converts to.
pub fn convert_type_name(operation: &str) -> Option<&'static str> {
    CONVERT_TYPE_NAMES
        .iter()
        .find(|(name, _)| *name == operation)
        .map(|(_, type_name)| *type_name)
}

/// Every single-argument overload of every operation in
/// [`CONVERT_TYPE_NAMES`] whose parameter is in [`SUPPORTED_ARGUMENT_TYPES`].
pub fn build_conversion_registry(
    catalog: &MethodCatalog,
) -> Result<Vec<MethodSignature>, RegistryError> {
    let mut signatures = Vec::new();
    for (name, _) in CONVERT_TYPE_NAMES {
        let mut declared = catalog
            .declared_methods(DeclaringType::Convert, name)
            .peekable();
        if declared.peek().is_none() {
            return Err(RegistryError::MissingOperation {
                declaring_type: DeclaringType::Convert,
                name,
            });
        }
        signatures.extend(
            declared
                .filter(|m| {
                    matches!(m.parameters(), [param] if SUPPORTED_ARGUMENT_TYPES.contains(param))
                })
                .map(|m| m.signature.clone()),
        );
    }
    Ok(signatures)
}

static CONVERSION_METHODS: LazyLock<HashSet<MethodSignature>> = LazyLock::new(|| {
    build_conversion_registry(catalog())
        .unwrap_or_else(|e| panic!("conversion registry: {}", e))
        .into_iter()
        .collect()
});

/// The process-wide set of supported conversion signatures.
pub fn conversion_methods() -> &'static HashSet<MethodSignature> {
    &CONVERSION_METHODS
}

// =============================================================================
// Date arithmetic
// =============================================================================

/// `DATEADD` date-part keyword for each add-unit operation on `Date`.
pub const DATE_PART_NAMES: [(&str, &str); 3] = [
    ("AddYears", "year"),
    ("AddMonths", "month"),
    ("AddDays", "day"),
];

/// Map each add-unit signature `(Date, name, [int32])` to its date part.
pub fn build_date_part_table(
    catalog: &MethodCatalog,
) -> Result<HashMap<MethodSignature, &'static str>, RegistryError> {
    DATE_PART_NAMES
        .iter()
        .map(|(name, part)| {
            let signature = MethodSignature::new(DeclaringType::Date, *name, [HostType::Int32]);
            catalog
                .find(&signature)
                .map(|m| (m.signature.clone(), *part))
                .ok_or(RegistryError::MissingMethod(signature))
        })
        .collect()
}

/// Resolve the single-argument `Date.ToDateTime(time)` overload.
pub fn build_to_date_time(catalog: &MethodCatalog) -> Result<MethodSignature, RegistryError> {
    let signature = MethodSignature::new(DeclaringType::Date, "ToDateTime", [HostType::Time]);
    catalog
        .find(&signature)
        .map(|m| m.signature.clone())
        .ok_or(RegistryError::MissingMethod(signature))
}

static DATE_PARTS: LazyLock<HashMap<MethodSignature, &'static str>> = LazyLock::new(|| {
    build_date_part_table(catalog()).unwrap_or_else(|e| panic!("date part table: {}", e))
});

static TO_DATE_TIME: LazyLock<MethodSignature> = LazyLock::new(|| {
    build_to_date_time(catalog()).unwrap_or_else(|e| panic!("date registry: {}", e))
});

/// The process-wide add-unit table.
pub fn date_parts() -> &'static HashMap<MethodSignature, &'static str> {
    &DATE_PARTS
}

/// The process-wide `Date.ToDateTime(time)` signature.
pub fn to_date_time_method() -> &'static MethodSignature {
    &TO_DATE_TIME
}

/// Force construction of every table.
///
/// Call during startup so configuration errors surface before the first
/// query is translated.
pub fn init() {
    LazyLock::force(&CONVERSION_METHODS);
    LazyLock::force(&DATE_PARTS);
    LazyLock::force(&TO_DATE_TIME);
}
