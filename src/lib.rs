//! # avroreflect
//!
//! Derive [Apache Avro](https://avro.apache.org/) schemas from structural
//! descriptions of Rust types.
//!
//! ## Features
//!
//! - Maps Rust primitives to Avro primitives (`int`, `long`, `float`, ...)
//! - Generates records, arrays and maps, following member tags for field names
//! - `omitempty` members become `["null", T]` unions with a `null` default
//! - Backward-transitive mode making every field nullable
//! - A mapper hook overriding classification for chosen types
//! - `SystemTime` as `{"type": "long", "logicalType": "timestamp-millis"}`
//!
//! ## Example
//!
//! ```
//! use avroreflect::{Reflect, Reflector, TypeDesc};
//!
//! struct Person {
//!     name: String,
//!     age: Option<i32>,
//! }
//!
//! impl Reflect for Person {
//!     fn type_desc() -> TypeDesc {
//!         TypeDesc::record("people.Person")
//!             .member::<String>("name", r#"json:"name""#)
//!             .member::<Option<i32>>("age", r#"json:"age,omitempty""#)
//!     }
//! }
//!
//! let json = Reflector::default().reflect::<Person>().unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"name":"Person","type":"record","fields":[{"name":"name","type":"string"},{"name":"age","type":["null","int"],"default":null}]}"#
//! );
//! ```
//!
//! Nothing is configured globally: build a [`Reflector`] where it is needed
//! and reuse it as often as you like.
//!
//! ## Crate Layout
//!
//! - [`avro`]: the schema tree (`Schema`, `Field`)
//! - [`describe`]: type descriptions and the [`Reflect`] trait
//! - [`reflect`]: the reflector, tag policy and fallback reporting
//! - [`render`]: JSON rendering
//! - [`common`]: tag parsing and naming helpers
pub mod avro;
pub mod common;
pub mod describe;
pub mod error;
pub mod reflect;
pub mod render;

pub use avro::{Field, FieldType, Primitive, Record, Schema};
pub use describe::{Kind, Reflect, TypeDesc};
pub use error::{Error, ReflectError, RenderError};
pub use reflect::{Mapped, Options, Reflector, Report};
