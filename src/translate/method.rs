//! Method identities as seen by translators.
//!
//! A `MethodSignature` is a plain value (declaring type, name, ordered
//! parameter types). Two signatures built independently for the same
//! operation compare equal and hash alike, so they work as keys in ordered or
//! hashed containers.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::sql::HostType;

/// Type that declares a translatable method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeclaringType {
    /// Static value-conversion helpers (`Convert.ToInt32(x)`).
    Convert,
    /// Date-only value type (`d.AddDays(n)`, `Date.FromDateTime(dt)`).
    Date,
}

impl DeclaringType {
    pub fn name(&self) -> &'static str {
        match self {
            DeclaringType::Convert => "Convert",
            DeclaringType::Date => "Date",
        }
    }
}

impl fmt::Display for DeclaringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeclaringType {
    type Err = MethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "convert" => Ok(DeclaringType::Convert),
            "date" | "dateonly" => Ok(DeclaringType::Date),
            _ => Err(MethodParseError::UnknownDeclaringType(s.to_string())),
        }
    }
}

/// Identity of a method: declaring type, name and ordered parameter types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodSignature {
    pub declaring_type: DeclaringType,
    pub name: Cow<'static, str>,
    pub parameters: Vec<HostType>,
}

impl MethodSignature {
    pub fn new(
        declaring_type: DeclaringType,
        name: impl Into<Cow<'static, str>>,
        parameters: impl Into<Vec<HostType>>,
    ) -> Self {
        Self {
            declaring_type,
            name: name.into(),
            parameters: parameters.into(),
        }
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.declaring_type, self.name)?;
        for (i, p) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", p)?;
        }
        f.write_str(")")
    }
}

/// Errors parsing a method descriptor such as `Convert.ToInt32(string)`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MethodParseError {
    #[error("Malformed method descriptor '{0}', expected Type.Name(param, ...)")]
    Malformed(String),

    #[error("Unknown declaring type: {0}")]
    UnknownDeclaringType(String),

    #[error("Unknown parameter type: {0}")]
    UnknownParameterType(String),

    #[error("Method not found in catalog: {0}")]
    NotInCatalog(MethodSignature),
}

impl FromStr for MethodSignature {
    type Err = MethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MethodParseError::Malformed(s.to_string());

        let s_trim = s.trim();
        let open = s_trim.find('(').ok_or_else(malformed)?;
        let params_src = s_trim[open + 1..]
            .strip_suffix(')')
            .ok_or_else(malformed)?;
        let (declaring, name) = s_trim[..open].split_once('.').ok_or_else(malformed)?;
        if name.trim().is_empty() {
            return Err(malformed());
        }

        let declaring_type = declaring.parse::<DeclaringType>()?;
        let parameters = params_src
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                p.parse::<HostType>()
                    .map_err(|_| MethodParseError::UnknownParameterType(p.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MethodSignature::new(
            declaring_type,
            name.trim().to_string(),
            parameters,
        ))
    }
}

/// A method as handed to translators: its signature plus what it returns and
/// whether it is invoked without a receiver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodInfo {
    pub signature: MethodSignature,
    pub return_type: HostType,
    pub is_static: bool,
}

impl MethodInfo {
    pub fn new(signature: MethodSignature, return_type: HostType, is_static: bool) -> Self {
        Self {
            signature,
            return_type,
            is_static,
        }
    }

    pub fn declaring_type(&self) -> DeclaringType {
        self.signature.declaring_type
    }

    pub fn name(&self) -> &str {
        &self.signature.name
    }

    pub fn parameters(&self) -> &[HostType] {
        &self.signature.parameters
    }
}
