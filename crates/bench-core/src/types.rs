//! Column type catalog for the bulkload-bench framework.
//!
//! `ColumnType` is the closed set of semantic types a synthetic table may
//! hold. Each type maps to exactly one value generator (see the
//! `bench-generator` crate) and one storage column type via [`ToDdl`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic type of a synthetic column.
///
/// # YAML / JSON Format
///
/// Types serialize as their lowercase token, the same one [`ColumnType::name`]
/// returns:
/// ```yaml
/// type: identifier
/// type: number
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// UUID-shaped row identifier, always column 0
    Identifier,

    /// Short word
    Text,

    /// Floating point number in `[0, 10000)`
    Number,

    /// UTC timestamp
    DateTime,

    /// Boolean
    Logical,
}

impl ColumnType {
    /// Every column type, identifier first.
    pub const ALL: [ColumnType; 5] = [
        ColumnType::Identifier,
        ColumnType::Text,
        ColumnType::Number,
        ColumnType::DateTime,
        ColumnType::Logical,
    ];

    /// Types that may be drawn for the non-identifier columns of a schema.
    pub const GENERATED: [ColumnType; 4] = [
        ColumnType::Text,
        ColumnType::Number,
        ColumnType::DateTime,
        ColumnType::Logical,
    ];

    /// Stable lowercase token, also used to derive column names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Text => "text",
            Self::Number => "number",
            Self::DateTime => "datetime",
            Self::Logical => "logical",
        }
    }

    /// Check if this is the identity column type.
    pub fn is_identifier(self) -> bool {
        matches!(self, Self::Identifier)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognised column type token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown column type: {0}")]
pub struct UnknownColumnType(pub String);

impl FromStr for ColumnType {
    type Err = UnknownColumnType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "identifier" => Ok(Self::Identifier),
            "text" => Ok(Self::Text),
            "number" => Ok(Self::Number),
            "datetime" => Ok(Self::DateTime),
            "logical" => Ok(Self::Logical),
            _ => Err(UnknownColumnType(s.to_string())),
        }
    }
}

/// Trait for DDL generation from [`ColumnType`].
///
/// Each storage engine implements this trait to map the catalog onto its
/// native column types.
pub trait ToDdl {
    /// Generate the DDL type definition for the given `ColumnType`.
    fn to_ddl(&self, column_type: ColumnType) -> &'static str;
}

/// SQLite DDL mapping.
///
/// SQLite applies type affinity rather than strict types, so these names are
/// chosen to read naturally in `sqlite_master` while landing on the expected
/// affinity (TEXT, REAL, NUMERIC).
pub struct SqliteDdl;

impl ToDdl for SqliteDdl {
    fn to_ddl(&self, column_type: ColumnType) -> &'static str {
        match column_type {
            ColumnType::Identifier => "CHAR(36)",
            ColumnType::Text => "TEXT",
            ColumnType::Number => "REAL",
            ColumnType::DateTime => "TIMESTAMP",
            ColumnType::Logical => "BOOLEAN",
        }
    }
}
