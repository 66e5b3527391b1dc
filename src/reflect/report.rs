use std::fmt;

use serde::Serialize;

use crate::avro::Schema;

/// A reflected schema together with every silent fallback taken on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub schema: Schema,
    pub degradations: Vec<Degradation>,
}

impl Report {
    pub fn is_lossless(&self) -> bool {
        self.degradations.is_empty()
    }
}

/// One place where the walk fell back instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Degradation {
    /// Dotted path of field names from the root, `[]` marking array items
    /// and `{}` map values.
    pub path: String,
    pub kind: DegradationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DegradationKind {
    /// No structural mapping; rendered as `string`.
    UnsupportedType { type_name: String },
    /// Map keyed by something other than text; rendered as `string`.
    NonStringMapKey { type_name: String },
    /// Member without an external name; left out of the record.
    UnnamedMember { ident: String },
    /// Mapper returned fields where a single type was required; rendered as `string`.
    MisplacedExpansion { type_name: String },
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at: &str = if self.path.is_empty() { "<root>" } else { &self.path };
        match &self.kind {
            DegradationKind::UnsupportedType { type_name } => {
                write!(f, "{at}: unsupported type `{type_name}` rendered as string")
            }
            DegradationKind::NonStringMapKey { type_name } => {
                write!(f, "{at}: map `{type_name}` has a non-string key, rendered as string")
            }
            DegradationKind::UnnamedMember { ident } => {
                write!(f, "{at}: member `{ident}` has no field name and was omitted")
            }
            DegradationKind::MisplacedExpansion { type_name } => {
                write!(f, "{at}: mapper expanded `{type_name}` into fields outside a record, rendered as string")
            }
        }
    }
}
