use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

/// Avro primitive type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    String,
}

impl Primitive {
    pub const fn as_str(self) -> &'static str {
        match self {
            Primitive::Null => "null",
            Primitive::Boolean => "boolean",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::String => "string",
        }
    }
}

impl Serialize for Primitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A node of the generated Avro schema tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Primitive(Primitive),
    /// A primitive refined by a `logicalType` annotation.
    Logical {
        base: Primitive,
        logical_type: String,
    },
    Record(Record),
    Array {
        items: Box<Schema>,
    },
    Map {
        values: Box<Schema>,
    },
    Union(Vec<Schema>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    pub fields: Vec<Field>,
}

/// How a field's type is attached to the field object.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Rendered under the field's `"type"` key.
    Nested(Schema),
    /// The structured body is merged into the field object itself and the
    /// field name takes the `"name"` slot.
    Inline(Schema),
}

impl FieldType {
    pub fn schema(&self) -> &Schema {
        match self {
            FieldType::Nested(s) | FieldType::Inline(s) => s,
        }
    }

    pub fn into_schema(self) -> Schema {
        match self {
            FieldType::Nested(s) | FieldType::Inline(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: FieldType,
    pub default: Option<Value>,
}

impl Schema {
    pub const fn null() -> Self {
        Schema::Primitive(Primitive::Null)
    }

    pub const fn boolean() -> Self {
        Schema::Primitive(Primitive::Boolean)
    }

    pub const fn int() -> Self {
        Schema::Primitive(Primitive::Int)
    }

    pub const fn long() -> Self {
        Schema::Primitive(Primitive::Long)
    }

    pub const fn float() -> Self {
        Schema::Primitive(Primitive::Float)
    }

    pub const fn double() -> Self {
        Schema::Primitive(Primitive::Double)
    }

    pub const fn string() -> Self {
        Schema::Primitive(Primitive::String)
    }

    /// `{"type": "long", "logicalType": "timestamp-millis"}`
    pub fn timestamp_millis() -> Self {
        Schema::Logical {
            base: Primitive::Long,
            logical_type: "timestamp-millis".to_string(),
        }
    }

    pub fn record(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Schema::Record(Record {
            name: name.into(),
            fields,
        })
    }

    pub fn array(items: Schema) -> Self {
        Schema::Array {
            items: Box::new(items),
        }
    }

    pub fn map(values: Schema) -> Self {
        Schema::Map {
            values: Box::new(values),
        }
    }

    /// Wrap a type in a union with `null`.
    ///
    /// Avro uses this pattern to make fields nullable.
    pub fn nullable(inner: Schema) -> Self {
        Schema::Union(vec![Schema::null(), inner])
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Schema::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Write every key of this node except a record's own `name`.
    fn write_body<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        match self {
            Schema::Primitive(p) => map.serialize_entry("type", p),
            Schema::Logical { base, logical_type } => {
                map.serialize_entry("type", base)?;
                map.serialize_entry("logicalType", logical_type)
            }
            Schema::Record(r) => {
                map.serialize_entry("type", "record")?;
                map.serialize_entry("fields", &r.fields)
            }
            Schema::Array { items } => {
                map.serialize_entry("type", "array")?;
                map.serialize_entry("items", items)
            }
            Schema::Map { values } => {
                map.serialize_entry("type", "map")?;
                map.serialize_entry("values", values)
            }
            Schema::Union(branches) => map.serialize_entry("type", branches),
        }
    }
}

impl Field {
    /// A required field; its type sits under `"type"`.
    pub fn new(name: impl Into<String>, ty: Schema) -> Self {
        Self {
            name: name.into(),
            ty: FieldType::Nested(ty),
            default: None,
        }
    }

    /// A field whose record or map body is merged into the field object.
    pub fn inline(name: impl Into<String>, ty: Schema) -> Self {
        Self {
            name: name.into(),
            ty: FieldType::Inline(ty),
            default: None,
        }
    }

    /// `{"name": .., "type": ["null", inner], "default": null}`
    pub fn nullable(name: impl Into<String>, inner: Schema) -> Self {
        Self {
            name: name.into(),
            ty: FieldType::Nested(Schema::nullable(inner)),
            default: Some(Value::Null),
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self.ty.schema(), Schema::Union(b) if b.first() == Some(&Schema::null()))
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Schema::Primitive(p) => p.serialize(serializer),
            Schema::Union(branches) => branches.serialize(serializer),
            Schema::Record(r) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("name", &r.name)?;
                self.write_body(&mut map)?;
                map.end()
            }
            _ => {
                let mut map = serializer.serialize_map(None)?;
                self.write_body(&mut map)?;
                map.end()
            }
        }
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        match &self.ty {
            FieldType::Nested(schema) => map.serialize_entry("type", schema)?,
            FieldType::Inline(schema) => schema.write_body(&mut map)?,
        }
        if let Some(default) = &self.default {
            map.serialize_entry("default", default)?;
        }
        map.end()
    }
}
