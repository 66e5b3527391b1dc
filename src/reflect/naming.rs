/// Sentinel name meaning "no external name from this tag".
const SKIP: &str = "-";
const OMIT_EMPTY: &str = "omitempty";

/// External name and optionality resolved from a member's tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    /// `None` when the member is excluded from the record.
    pub name: Option<String>,
    pub optional: bool,
}

impl Naming {
    pub fn included(&self) -> bool {
        self.name.is_some()
    }
}

/// Resolve a member's field name from its primary and secondary tag values.
///
/// The primary tag is split on `,`: the first token names the field and the
/// rest are options, of which `omitempty` marks the field optional. An empty
/// or `-` name defers to the secondary tag, whose mere presence keeps the
/// member under its own identifier. The secondary tag never overrides a name
/// taken from the primary tag and never affects optionality.
pub fn resolve(primary: Option<&str>, secondary: Option<&str>, ident: &str) -> Naming {
    let mut tokens = primary.unwrap_or_default().split(',');
    let candidate = tokens.next().unwrap_or_default();
    let optional = tokens.any(|opt| opt == OMIT_EMPTY);

    let name = if !candidate.is_empty() && candidate != SKIP {
        Some(candidate.to_string())
    } else if secondary.is_some() {
        Some(ident.to_string())
    } else {
        None
    };

    Naming { name, optional }
}
