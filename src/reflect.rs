mod classify;
pub mod naming;
pub mod options;
mod record;
pub mod report;
pub mod state;
mod walk;

pub use options::Options;
pub use report::{Degradation, DegradationKind, Report};
pub use state::{Mapped, Mapper, Reflector};

use crate::avro::Schema;
use crate::describe::{Kind, Reflect, TypeDesc};
use crate::error::{Error, ReflectError};
use crate::render;
use walk::Walk;

impl Reflector {
    /// Reflect `ty` as a record: its members become the record's fields.
    ///
    /// One level of `Optional` indirection around the root is removed first.
    pub fn record_schema(&self, ty: &TypeDesc) -> Result<Schema, ReflectError> {
        self.record_report(ty).map(|report| report.schema)
    }

    /// Reflect `ty` as the item type of an array-rooted schema.
    pub fn array_schema(&self, element: &TypeDesc) -> Result<Schema, ReflectError> {
        self.array_report(element).map(|report| report.schema)
    }

    /// Like [`Reflector::record_schema`], also listing every fallback taken.
    pub fn record_report(&self, ty: &TypeDesc) -> Result<Report, ReflectError> {
        let root = ty.deref_optional();
        let Kind::Record(desc) = root.kind() else {
            return Err(ReflectError::NotARecord {
                name: root.name().to_string(),
            });
        };

        let mut walk = Walk::default();
        let record = self.record(&mut walk, root, desc)?;
        Ok(walk.finish(Schema::Record(record)))
    }

    /// Like [`Reflector::array_schema`], also listing every fallback taken.
    pub fn array_report(&self, element: &TypeDesc) -> Result<Report, ReflectError> {
        let mut walk = Walk::default();
        walk.enter("[]");
        let items = self.element(&mut walk, element)?;
        walk.leave();
        Ok(walk.finish(Schema::array(items)))
    }

    /// Reflect `T` as a record and render the schema as JSON.
    pub fn reflect<T: Reflect + ?Sized>(&self) -> Result<String, Error> {
        let schema = self.record_schema(&T::type_desc())?;
        Ok(render::encode(&schema)?)
    }

    /// Reflect `T` as an array item type and render the schema as JSON.
    pub fn reflect_array<T: Reflect + ?Sized>(&self) -> Result<String, Error> {
        let schema = self.array_schema(&T::type_desc())?;
        Ok(render::encode(&schema)?)
    }
}
