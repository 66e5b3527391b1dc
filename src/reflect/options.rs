use serde::{Deserialize, Serialize};

/// Serializable reflector settings, for hosts that load configuration from
/// a file. The mapper hook is code and is attached separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Force every field of every record into the `["null", T]` form.
    pub backward_transitive: bool,
    /// Tag key holding the field name and its options.
    pub primary_tag: String,
    /// Tag key whose presence keeps an otherwise unnamed member.
    pub secondary_tag: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            backward_transitive: false,
            primary_tag: "json".to_string(),
            secondary_tag: "avro".to_string(),
        }
    }
}
