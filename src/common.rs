pub mod names;
pub mod tags;

pub use names::*;
pub use tags::*;
