use regex::Regex;
use std::sync::OnceLock;

/// Per-member metadata in the conventional `key:"value" other:"value"` form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructTag(String);

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?:^|\s)([^\s:"]+):"((?:[^"\\]|\\.)*)""#).expect("tag pattern is valid")
    })
}

impl StructTag {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value stored under `key`.
    ///
    /// `Some("")` means the key is present with an empty value, `None` that
    /// it is absent.
    pub fn lookup(&self, key: &str) -> Option<String> {
        tag_pattern()
            .captures_iter(&self.0)
            .find(|caps| &caps[1] == key)
            .map(|caps| unquote(&caps[2]))
    }

    pub fn get(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_default()
    }
}

fn unquote(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
