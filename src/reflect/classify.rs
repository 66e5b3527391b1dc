use crate::avro::{Field, FieldType, Schema};
use crate::describe::{Kind, TypeDesc};
use crate::error::ReflectError;
use crate::reflect::report::DegradationKind;
use crate::reflect::state::{Mapped, Reflector};
use crate::reflect::walk::Walk;

/// Where a type occurrence sits relative to its enclosing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// The declared type of a record member.
    FieldDirect,
    /// An array item, a map value, or a root.
    Nested,
}

impl Placement {
    /// Records and maps merge into the field object when they are its direct type.
    fn structured(self, node: Schema) -> FieldType {
        match self {
            Placement::FieldDirect => FieldType::Inline(node),
            Placement::Nested => FieldType::Nested(node),
        }
    }
}

pub(crate) enum Resolved {
    Type(FieldType),
    /// Mapper expansion of one member into several fields.
    Fields(Vec<Field>),
}

fn is_textual(ty: &TypeDesc) -> bool {
    matches!(ty.kind(), Kind::String | Kind::Char)
}

impl Reflector {
    /// Classify one type occurrence.
    pub(crate) fn classify(
        &self,
        walk: &mut Walk,
        ty: &TypeDesc,
        placement: Placement,
    ) -> Result<Resolved, ReflectError> {
        let ty = ty.deref_optional();

        if let Some(mapped) = self.mapper.as_ref().and_then(|mapper| mapper(ty)) {
            tracing::trace!(type_name = ty.name(), "mapper override");
            return Ok(match mapped {
                Mapped::Schema(schema) => Resolved::Type(FieldType::Nested(schema)),
                Mapped::Fields(fields) => Resolved::Fields(fields),
            });
        }

        let node = match ty.kind() {
            Kind::String | Kind::Char => Schema::string(),
            Kind::I8
            | Kind::I16
            | Kind::I32
            | Kind::Isize
            | Kind::U8
            | Kind::U16
            | Kind::U32
            | Kind::Usize => Schema::int(),
            Kind::I64 | Kind::U64 => Schema::long(),
            Kind::F32 => Schema::float(),
            Kind::F64 => Schema::double(),
            Kind::Bool => Schema::boolean(),
            Kind::Sequence { element, .. } => {
                return self.array(walk, element).map(Resolved::Type);
            }
            Kind::Record(_) if ty.is_timestamp() => Schema::timestamp_millis(),
            Kind::Record(desc) => {
                let record = self.record(walk, ty, desc)?;
                return Ok(Resolved::Type(placement.structured(Schema::Record(record))));
            }
            Kind::Map { key, value } if is_textual(key) => {
                let map = self.map(walk, value)?;
                return Ok(Resolved::Type(placement.structured(map)));
            }
            Kind::Map { .. } => {
                // The whole map degrades, not just its key.
                walk.degrade(DegradationKind::NonStringMapKey {
                    type_name: ty.name().to_string(),
                });
                Schema::string()
            }
            Kind::Optional(_) | Kind::Opaque => {
                walk.degrade(DegradationKind::UnsupportedType {
                    type_name: ty.name().to_string(),
                });
                Schema::string()
            }
        };

        Ok(Resolved::Type(FieldType::Nested(node)))
    }

    /// Classify a type that must come out as a single schema node.
    pub(crate) fn element(&self, walk: &mut Walk, ty: &TypeDesc) -> Result<Schema, ReflectError> {
        match self.classify(walk, ty, Placement::Nested)? {
            Resolved::Type(field_type) => Ok(field_type.into_schema()),
            Resolved::Fields(_) => {
                walk.degrade(DegradationKind::MisplacedExpansion {
                    type_name: ty.deref_optional().name().to_string(),
                });
                Ok(Schema::string())
            }
        }
    }

    /// Arrays are never merged into a field object: as a field's direct type
    /// they stay one layer down under `"type"`.
    fn array(&self, walk: &mut Walk, element: &TypeDesc) -> Result<FieldType, ReflectError> {
        walk.enter("[]");
        let items = self.element(walk, element);
        walk.leave();
        Ok(FieldType::Nested(Schema::array(items?)))
    }

    fn map(&self, walk: &mut Walk, value: &TypeDesc) -> Result<Schema, ReflectError> {
        walk.enter("{}");
        let values = self.element(walk, value);
        walk.leave();
        Ok(Schema::map(values?))
    }
}
