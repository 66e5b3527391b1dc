//! Structural type descriptions: the input to the reflector.
//!
//! A [`TypeDesc`] is a name plus a [`Kind`]. Rust types expose their
//! description through the [`Reflect`] trait; user records are described with
//! the [`TypeDesc::record`] builder.

pub mod impls;

use std::any::TypeId;
use std::borrow::Cow;

use crate::common::tags::StructTag;

/// Qualified name of the built-in timestamp type.
pub const TIMESTAMP_TYPE: &str = "std::time::SystemTime";

/// Types that can describe their own structure.
pub trait Reflect {
    fn type_desc() -> TypeDesc;
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDesc {
    name: String,
    kind: Kind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Char,
    String,
    /// One level of language-level indirection (`Option<T>`).
    Optional(Box<TypeDesc>),
    /// Growable (`len == None`) or fixed-size list.
    Sequence {
        element: Box<TypeDesc>,
        len: Option<usize>,
    },
    Map {
        key: Box<TypeDesc>,
        value: Box<TypeDesc>,
    },
    Record(RecordDesc),
    /// Anything without a structural mapping.
    Opaque,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordDesc {
    members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    ident: String,
    ty: TypeRef,
    tag: StructTag,
}

/// A member's type, either given up front or produced on demand.
///
/// Deferred descriptions let self-referential types be described without
/// building an infinite tree.
#[derive(Debug, Clone)]
pub enum TypeRef {
    Desc(Box<TypeDesc>),
    Deferred {
        id: TypeId,
        describe: fn() -> TypeDesc,
    },
}

// Deferred references compare by the Rust type they describe; resolving them
// here would never terminate for recursive types.
impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TypeRef::Desc(a), TypeRef::Desc(b)) => a == b,
            (TypeRef::Deferred { id: a, .. }, TypeRef::Deferred { id: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl TypeRef {
    pub fn resolve(&self) -> Cow<'_, TypeDesc> {
        match self {
            TypeRef::Desc(desc) => Cow::Borrowed(&**desc),
            TypeRef::Deferred { describe, .. } => Cow::Owned(describe()),
        }
    }
}

impl TypeDesc {
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Start describing a record type. Members are added in declaration order.
    pub fn record(name: impl Into<String>) -> Self {
        Self::new(name, Kind::Record(RecordDesc::default()))
    }

    pub fn optional(inner: TypeDesc) -> Self {
        Self::new(format!("Option<{}>", inner.name), Kind::Optional(Box::new(inner)))
    }

    pub fn sequence(element: TypeDesc) -> Self {
        Self::new(
            format!("Vec<{}>", element.name),
            Kind::Sequence {
                element: Box::new(element),
                len: None,
            },
        )
    }

    pub fn fixed_array(element: TypeDesc, len: usize) -> Self {
        Self::new(
            format!("[{}; {len}]", element.name),
            Kind::Sequence {
                element: Box::new(element),
                len: Some(len),
            },
        )
    }

    pub fn map(key: TypeDesc, value: TypeDesc) -> Self {
        Self::new(
            format!("Map<{}, {}>", key.name, value.name),
            Kind::Map {
                key: Box::new(key),
                value: Box::new(value),
            },
        )
    }

    pub fn opaque(name: impl Into<String>) -> Self {
        Self::new(name, Kind::Opaque)
    }

    /// Append a member whose type is described by `T`.
    ///
    /// Panics if `self` is not a record description.
    pub fn member<T: Reflect + ?Sized + 'static>(self, ident: &str, tag: &str) -> Self {
        let ty = TypeRef::Deferred {
            id: TypeId::of::<T>(),
            describe: T::type_desc,
        };
        self.push_member(ident, ty, tag)
    }

    /// Append a member with an explicit type description.
    ///
    /// Panics if `self` is not a record description.
    pub fn member_desc(self, ident: &str, ty: TypeDesc, tag: &str) -> Self {
        self.push_member(ident, TypeRef::Desc(Box::new(ty)), tag)
    }

    fn push_member(mut self, ident: &str, ty: TypeRef, tag: &str) -> Self {
        match &mut self.kind {
            Kind::Record(record) => record.members.push(Member {
                ident: ident.to_string(),
                ty,
                tag: StructTag::new(tag),
            }),
            other => panic!("cannot add member `{ident}` to non-record kind {other:?}"),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Strip one level of `Optional` indirection.
    pub fn deref_optional(&self) -> &TypeDesc {
        match &self.kind {
            Kind::Optional(inner) => &**inner,
            _ => self,
        }
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self.kind, Kind::Record(_)) && self.name == TIMESTAMP_TYPE
    }
}

impl RecordDesc {
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

impl Member {
    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn ty(&self) -> Cow<'_, TypeDesc> {
        self.ty.resolve()
    }

    pub fn tag(&self) -> &StructTag {
        &self.tag
    }
}
