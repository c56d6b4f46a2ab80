//! Host value types and their SQL Server type mappings.
//!
//! Every SQL expression node carries the host-language type of the value it
//! produces (`HostType`) and, once resolved, a `TypeMapping` naming the
//! concrete store type the database uses for it.
//!
//! The mapping from host type to store type is dialect-specific and lives
//! behind the `TypeMappingSource` trait. `SqlServerTypeMappingSource` is the
//! only implementation today.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A host-language value type, as seen on method parameters and return
/// values and on the SQL nodes built from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HostType {
    Bool,
    Byte,
    SByte,
    Char,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
    Decimal,
    String,
    /// Date and time of day.
    DateTime,
    /// Date without a time component.
    Date,
    /// Time of day without a date component.
    Time,
    /// Kind marker accepted by some date/time overloads (UTC, local, ...).
    DateTimeKind,
    /// Culture/format provider accepted by parsing overloads.
    FormatProvider,
    /// Untyped value.
    Object,
}

impl HostType {
    /// All host types, in declaration order.
    pub const ALL: [HostType; 20] = [
        HostType::Bool,
        HostType::Byte,
        HostType::SByte,
        HostType::Char,
        HostType::Int16,
        HostType::UInt16,
        HostType::Int32,
        HostType::UInt32,
        HostType::Int64,
        HostType::UInt64,
        HostType::Float32,
        HostType::Float64,
        HostType::Decimal,
        HostType::String,
        HostType::DateTime,
        HostType::Date,
        HostType::Time,
        HostType::DateTimeKind,
        HostType::FormatProvider,
        HostType::Object,
    ];

    /// Lower-case name used by `Display` and `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            HostType::Bool => "bool",
            HostType::Byte => "byte",
            HostType::SByte => "sbyte",
            HostType::Char => "char",
            HostType::Int16 => "int16",
            HostType::UInt16 => "uint16",
            HostType::Int32 => "int32",
            HostType::UInt32 => "uint32",
            HostType::Int64 => "int64",
            HostType::UInt64 => "uint64",
            HostType::Float32 => "float32",
            HostType::Float64 => "float64",
            HostType::Decimal => "decimal",
            HostType::String => "string",
            HostType::DateTime => "datetime",
            HostType::Date => "date",
            HostType::Time => "time",
            HostType::DateTimeKind => "datetimekind",
            HostType::FormatProvider => "formatprovider",
            HostType::Object => "object",
        }
    }

    /// Check if this type is textual.
    pub fn is_text(&self) -> bool {
        matches!(self, HostType::String)
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HostType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        HostType::ALL
            .iter()
            .find(|t| t.name() == lower)
            .copied()
            .ok_or_else(|| format!("unknown host type: {}", s))
    }
}

// =============================================================================
// Type Mappings
// =============================================================================

/// Association between a host type and the concrete SQL store type used for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeMapping {
    pub host_type: HostType,
    pub store_type: Cow<'static, str>,
}

impl TypeMapping {
    pub fn new(host_type: HostType, store_type: impl Into<Cow<'static, str>>) -> Self {
        Self {
            host_type,
            store_type: store_type.into(),
        }
    }
}

/// Resolves type mappings for a SQL dialect.
pub trait TypeMappingSource: fmt::Debug + Send + Sync {
    /// The default mapping for a host type, if the dialect can store it.
    fn find_mapping(&self, host_type: HostType) -> Option<TypeMapping>;

    /// A mapping for a host type using an explicitly requested store type.
    ///
    /// Returns `None` when the store type cannot hold values of `host_type`.
    fn find_mapping_with_store_type(
        &self,
        host_type: HostType,
        store_type: &str,
    ) -> Option<TypeMapping>;
}

/// SQL Server type mappings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServerTypeMappingSource;

impl SqlServerTypeMappingSource {
    fn default_store_type(host_type: HostType) -> Option<&'static str> {
        match host_type {
            HostType::Bool => Some("bit"),
            HostType::Byte => Some("tinyint"),
            HostType::SByte => Some("smallint"),
            HostType::Char => Some("nvarchar(1)"),
            HostType::Int16 => Some("smallint"),
            HostType::UInt16 => Some("int"),
            HostType::Int32 => Some("int"),
            HostType::UInt32 => Some("bigint"),
            HostType::Int64 => Some("bigint"),
            HostType::UInt64 => Some("decimal(20, 0)"),
            HostType::Float32 => Some("real"),
            HostType::Float64 => Some("float"),
            HostType::Decimal => Some("decimal(18, 2)"),
            HostType::String => Some("nvarchar(max)"),
            HostType::DateTime => Some("datetime2"),
            HostType::Date => Some("date"),
            HostType::Time => Some("time"),
            HostType::DateTimeKind | HostType::FormatProvider | HostType::Object => None,
        }
    }

    /// Store types that may hold a host type besides its default.
    fn alternative_store_types(host_type: HostType) -> &'static [&'static str] {
        match host_type {
            HostType::DateTime => &["datetime", "smalldatetime", "datetime2", "datetimeoffset"],
            HostType::String => &["nvarchar(max)", "varchar(max)", "ntext", "text"],
            HostType::Decimal => &["decimal(18, 2)", "money", "smallmoney"],
            _ => &[],
        }
    }
}

impl TypeMappingSource for SqlServerTypeMappingSource {
    fn find_mapping(&self, host_type: HostType) -> Option<TypeMapping> {
        Self::default_store_type(host_type).map(|store| TypeMapping::new(host_type, store))
    }

    fn find_mapping_with_store_type(
        &self,
        host_type: HostType,
        store_type: &str,
    ) -> Option<TypeMapping> {
        let requested = store_type.trim().to_lowercase();
        if Self::default_store_type(host_type) == Some(requested.as_str()) {
            return self.find_mapping(host_type);
        }
        Self::alternative_store_types(host_type)
            .iter()
            .find(|s| **s == requested)
            .map(|s| TypeMapping::new(host_type, *s))
    }
}
