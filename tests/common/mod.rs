#![allow(dead_code)]

use std::collections::HashMap;
use std::time::SystemTime;

use avroreflect::{Reflect, TypeDesc};

pub struct Person;

impl Reflect for Person {
    fn type_desc() -> TypeDesc {
        TypeDesc::record("people.Person")
            .member::<String>("Name", r#"json:"name""#)
            .member::<i32>("Age", r#"json:"age,omitempty""#)
    }
}

pub struct Address;

impl Reflect for Address {
    fn type_desc() -> TypeDesc {
        TypeDesc::record("github.com.acme.geo.Address")
            .member::<String>("Street", r#"json:"street""#)
            .member::<Option<String>>("Zip", r#"json:"zip,omitempty""#)
    }
}

pub struct Event;

impl Reflect for Event {
    fn type_desc() -> TypeDesc {
        TypeDesc::record("crate::events::Event")
            .member::<u64>("Id", r#"json:"id""#)
            .member::<SystemTime>("CreatedAt", r#"json:"created_at""#)
            .member::<Vec<String>>("Tags", r#"json:"tags""#)
            .member::<HashMap<String, f64>>("Scores", r#"json:"scores""#)
            .member::<Address>("Location", r#"json:"location""#)
            .member::<Vec<Address>>("History", r#"json:"history""#)
            .member::<String>("internal", "")
            .member::<bool>("Ignored", r#"json:"-""#)
    }
}

/// A record that contains itself through a list.
pub struct Node;

impl Reflect for Node {
    fn type_desc() -> TypeDesc {
        TypeDesc::record("tree.Node")
            .member::<String>("Label", r#"json:"label""#)
            .member::<Vec<Node>>("Children", r#"json:"children""#)
    }
}

/// Opaque identifier that a mapper usually renders as a string.
pub struct Uuid;

impl Reflect for Uuid {
    fn type_desc() -> TypeDesc {
        TypeDesc::record("ids.Uuid")
            .member::<u64>("Hi", r#"json:"hi""#)
            .member::<u64>("Lo", r#"json:"lo""#)
    }
}
