//! Kind traits and the building blocks of reflected calls.
//!
//! - [`ReflectRef`], [`ReflectMut`], [`ReflectOwned`]: a value split by kind.
//! - [`Struct`]: declared fields and the embedded ancestor of a struct.
//! - [`Nullable`]: `Option<T>` and the untyped [`Null`].
//! - [`ArgList`], [`ArgDrain`], [`InvokeError`]: what a method invoker
//!   receives and how it fails.
//! - [`upcast_ref`], [`upcast_mut`]: view a value as one of its ancestors.

// -----------------------------------------------------------------------------
// Modules

mod args;
mod kind;
mod nullable_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use args::{ArgDrain, ArgList, InvokeError, receiver_mut};
pub use kind::{ReflectMut, ReflectOwned, ReflectRef};
pub use nullable_ops::{Null, Nullable};
pub use struct_ops::{Struct, StructFieldIter};
pub use struct_ops::{upcast_mut, upcast_mut_by_id, upcast_ref, upcast_ref_by_id};
