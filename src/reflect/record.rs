use crate::avro::{Field, FieldType, Record};
use crate::common::names::short_name;
use crate::describe::{RecordDesc, TypeDesc};
use crate::error::ReflectError;
use crate::reflect::classify::{Placement, Resolved};
use crate::reflect::naming;
use crate::reflect::report::DegradationKind;
use crate::reflect::state::Reflector;
use crate::reflect::walk::Walk;

impl Reflector {
    /// Convert a record description into an Avro record.
    ///
    /// Members keep declaration order. Members without an external name are
    /// dropped, and a mapper expansion contributes all of its fields at the
    /// member's position.
    #[tracing::instrument(level = "debug", skip_all, fields(record = %ty.name()))]
    pub(crate) fn record(
        &self,
        walk: &mut Walk,
        ty: &TypeDesc,
        desc: &RecordDesc,
    ) -> Result<Record, ReflectError> {
        walk.enter_record(ty)?;

        let mut fields = Vec::with_capacity(desc.members().len());
        for member in desc.members() {
            let tag = member.tag();
            let naming = naming::resolve(
                tag.lookup(&self.options.primary_tag).as_deref(),
                tag.lookup(&self.options.secondary_tag).as_deref(),
                member.ident(),
            );
            let Some(name) = naming.name else {
                walk.degrade(DegradationKind::UnnamedMember {
                    ident: member.ident().to_string(),
                });
                continue;
            };

            walk.enter(&name);
            let resolved = self.classify(walk, &member.ty(), Placement::FieldDirect);
            walk.leave();

            match resolved? {
                Resolved::Type(field_type) => {
                    fields.push(self.install(name, field_type, naming.optional));
                }
                Resolved::Fields(expanded) => {
                    tracing::trace!(member = %name, count = expanded.len(), "splicing mapper fields");
                    fields.extend(
                        expanded
                            .into_iter()
                            .map(|field| self.reinstall(field, naming.optional)),
                    );
                }
            }
        }

        walk.leave_record();
        Ok(Record {
            name: short_name(ty.name()).to_string(),
            fields,
        })
    }

    fn install(&self, name: String, ty: FieldType, optional: bool) -> Field {
        if optional || self.options.backward_transitive {
            Field::nullable(name, ty.into_schema())
        } else {
            Field {
                name,
                ty,
                default: None,
            }
        }
    }

    /// Apply the member's optionality to a field produced by the mapper.
    /// Fields that are already nullable are kept as they are.
    fn reinstall(&self, field: Field, optional: bool) -> Field {
        if field.is_nullable() || !(optional || self.options.backward_transitive) {
            return field;
        }
        Field::nullable(field.name, field.ty.into_schema())
    }
}
