use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use super::{Kind, Reflect, TypeDesc, TIMESTAMP_TYPE};

macro_rules! reflect_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_desc() -> TypeDesc {
                    TypeDesc::new(stringify!($ty), Kind::$kind)
                }
            }
        )*
    };
}

reflect_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    char => Char,
    String => String,
    str => String,
}

macro_rules! reflect_opaque {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_desc() -> TypeDesc {
                    TypeDesc::opaque(std::any::type_name::<$ty>())
                }
            }
        )*
    };
}

reflect_opaque!(i128, u128, (), Duration);

impl Reflect for SystemTime {
    fn type_desc() -> TypeDesc {
        TypeDesc::record(TIMESTAMP_TYPE)
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::optional(T::type_desc())
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::sequence(T::type_desc())
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::sequence(T::type_desc())
    }
}

impl<T: Reflect> Reflect for [T] {
    fn type_desc() -> TypeDesc {
        TypeDesc::sequence(T::type_desc())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_desc() -> TypeDesc {
        TypeDesc::fixed_array(T::type_desc(), N)
    }
}

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn type_desc() -> TypeDesc {
        TypeDesc::map(K::type_desc(), V::type_desc())
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn type_desc() -> TypeDesc {
        TypeDesc::map(K::type_desc(), V::type_desc())
    }
}

// Ownership wrappers are transparent; only `Option` counts as indirection.
macro_rules! reflect_transparent {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $wrapper<T> {
                fn type_desc() -> TypeDesc {
                    T::type_desc()
                }
            }
        )*
    };
}

reflect_transparent!(Box, Rc, Arc);

impl<T: Reflect + ?Sized> Reflect for &T {
    fn type_desc() -> TypeDesc {
        T::type_desc()
    }
}
