//! Generated classes and their registries.
//!
//! A generated class is a [`ClassSpec`] (name, route, URL logic) wrapped as
//! either a [`ModelClass`] or a [`CollectionClass`]. Classes are constructors:
//! [`ModelClass::create`] and [`CollectionClass::create`] produce the
//! [`Model`] and [`Collection`] instances that share base behavior.
//!
//! [`Registries`] builds classes from classified routes and stores them by
//! class name, models first so collections can link to them.

mod collection;
mod model;
mod registry;
mod spec;

pub use collection::{Collection, CollectionClass};
pub use model::{Model, ModelClass};
pub use registry::{BuildEvent, Registries};
pub use spec::ClassSpec;
