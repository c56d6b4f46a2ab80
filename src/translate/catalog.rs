//! Static catalog of the methods the query pipeline can hand to translators.
//!
//! The catalog is the compile-time stand-in for inspecting the host types at
//! runtime: it lists every overload of every method on the declaring types
//! this crate knows about, including overloads no translator supports. The
//! translator registries are derived from it once, at first use.

use std::sync::LazyLock;

use super::method::{DeclaringType, MethodInfo, MethodSignature};
use crate::sql::HostType;

/// Conversion operations declared on `Convert`, with their return types.
const CONVERT_OPERATIONS: [(&str, HostType); 11] = [
    ("ToBoolean", HostType::Bool),
    ("ToByte", HostType::Byte),
    ("ToChar", HostType::Char),
    ("ToDecimal", HostType::Decimal),
    ("ToDouble", HostType::Float64),
    ("ToInt16", HostType::Int16),
    ("ToInt32", HostType::Int32),
    ("ToInt64", HostType::Int64),
    ("ToSingle", HostType::Float32),
    ("ToString", HostType::String),
    ("ToDateTime", HostType::DateTime),
];

/// Source types each `Convert` operation has a single-argument overload for.
const CONVERT_SOURCE_TYPES: [HostType; 16] = [
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
    HostType::Object,
];

static CATALOG: LazyLock<MethodCatalog> = LazyLock::new(MethodCatalog::standard);

/// The process-wide method catalog.
pub fn catalog() -> &'static MethodCatalog {
    &CATALOG
}

/// Resolve a signature to its full method description.
pub fn find(signature: &MethodSignature) -> Option<&'static MethodInfo> {
    catalog().find(signature)
}

/// A set of declared methods.
#[derive(Debug, Clone, Default)]
pub struct MethodCatalog {
    methods: Vec<MethodInfo>,
}

impl MethodCatalog {
    pub fn from_methods(methods: Vec<MethodInfo>) -> Self {
        Self { methods }
    }

    /// The methods of `Convert` and `Date`.
    pub fn standard() -> Self {
        let mut methods = Vec::new();

        for (name, return_type) in CONVERT_OPERATIONS {
            for source in CONVERT_SOURCE_TYPES {
                methods.push(MethodInfo::new(
                    MethodSignature::new(DeclaringType::Convert, name, [source]),
                    return_type,
                    true,
                ));
            }
            methods.push(MethodInfo::new(
                MethodSignature::new(
                    DeclaringType::Convert,
                    name,
                    [HostType::String, HostType::FormatProvider],
                ),
                return_type,
                true,
            ));
        }

        methods.extend([
            date("AddYears", &[HostType::Int32], HostType::Date, false),
            date("AddMonths", &[HostType::Int32], HostType::Date, false),
            date("AddDays", &[HostType::Int32], HostType::Date, false),
            date("ToDateTime", &[HostType::Time], HostType::DateTime, false),
            date(
                "ToDateTime",
                &[HostType::Time, HostType::DateTimeKind],
                HostType::DateTime,
                false,
            ),
            date("FromDateTime", &[HostType::DateTime], HostType::Date, true),
            date("FromDayNumber", &[HostType::Int32], HostType::Date, true),
        ]);

        Self { methods }
    }

    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }

    /// All overloads of `name` declared on `declaring_type`.
    pub fn declared_methods<'a>(
        &'a self,
        declaring_type: DeclaringType,
        name: &'a str,
    ) -> impl Iterator<Item = &'a MethodInfo> + 'a {
        self.methods
            .iter()
            .filter(move |m| m.declaring_type() == declaring_type && m.name() == name)
    }

    pub fn find(&self, signature: &MethodSignature) -> Option<&MethodInfo> {
        self.methods.iter().find(|m| &m.signature == signature)
    }
}

fn date(name: &'static str, params: &[HostType], ret: HostType, is_static: bool) -> MethodInfo {
    MethodInfo::new(
        MethodSignature::new(DeclaringType::Date, name, params.to_vec()),
        ret,
        is_static,
    )
}
