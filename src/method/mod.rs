//! Resolved methods: the view a compiler front end has of a method it compiles or calls.
//!
//! # Key Components
//!
//! - [`ResolvedMethod`] - The capability interface queried during IL generation
//! - [`BuilderMethod`] - Its implementation for builder-defined methods
//! - [`ResolvedMethodBuilder`] - Fluent construction of [`BuilderMethod`]s
//! - [`IlInjector`] - The body-generation object a method is identified by
//! - [`EntryPoint`], [`PersistentIdentifier`] - Compiled code address and method identity

mod builder;
mod builder_method;
mod injector;
mod resolved;
mod types;

pub use builder::ResolvedMethodBuilder;
pub use builder_method::BuilderMethod;
pub use injector::IlInjector;
pub use resolved::ResolvedMethod;
pub use types::{EntryPoint, MethodAccessFlags, MethodModifiers, PersistentIdentifier};
