use std::fmt;
use std::sync::Arc;

use crate::avro::{Field, Schema};
use crate::describe::TypeDesc;
use crate::reflect::options::Options;

/// Override hook consulted before any built-in classification.
///
/// It must be pure: the reflector neither memoizes nor serializes calls.
pub type Mapper = Arc<dyn Fn(&TypeDesc) -> Option<Mapped> + Send + Sync>;

/// What a [`Mapper`] substitutes for a type occurrence.
#[derive(Debug, Clone, PartialEq)]
pub enum Mapped {
    /// Used verbatim as the type.
    Schema(Schema),
    /// Spliced into the enclosing record in place of the member, in order.
    /// Only meaningful for a record member's type.
    Fields(Vec<Field>),
}

impl From<Schema> for Mapped {
    fn from(schema: Schema) -> Self {
        Mapped::Schema(schema)
    }
}

impl From<Vec<Field>> for Mapped {
    fn from(fields: Vec<Field>) -> Self {
        Mapped::Fields(fields)
    }
}

/// Configuration for reflecting type descriptions into Avro schemas.
///
/// Immutable once built; one value can serve any number of reflections,
/// including concurrent ones when the mapper is thread-safe.
#[derive(Clone, Default)]
pub struct Reflector {
    pub(crate) options: Options,
    pub(crate) mapper: Option<Mapper>,
}

impl fmt::Debug for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reflector")
            .field("options", &self.options)
            .field("mapper", &self.mapper.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Reflector {
    /// Create a reflector with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: Options) -> Self {
        Self {
            options,
            mapper: None,
        }
    }

    /// Make every field nullable with a `null` default.
    pub fn backward_transitive(mut self, enabled: bool) -> Self {
        self.options.backward_transitive = enabled;
        self
    }

    pub fn primary_tag(mut self, key: impl Into<String>) -> Self {
        self.options.primary_tag = key.into();
        self
    }

    pub fn secondary_tag(mut self, key: impl Into<String>) -> Self {
        self.options.secondary_tag = key.into();
        self
    }

    pub fn mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&TypeDesc) -> Option<Mapped> + Send + Sync + 'static,
    {
        self.mapper = Some(Arc::new(mapper));
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}
