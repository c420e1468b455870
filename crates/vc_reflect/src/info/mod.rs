//! Run-time type descriptors.
//!
//! - [`TypePath`] / [`DynamicTypePath`]: stable type names.
//! - [`Type`]: a `TypeId` with its names.
//! - [`Typed`] / [`DynamicTyped`]: access to a type's [`TypeInfo`].
//! - [`TypeInfo`]: one of
//!     - [`StructInfo`]: declared [`NamedField`]s, [`MethodInfo`]s and an optional parent;
//!     - [`NullableInfo`]: `Option<T>` and [`Null`](crate::ops::Null);
//!     - [`PrimitiveInfo`]: scalars, see [`PrimitiveKind`];
//!     - [`OpaqueInfo`]: leaf values like `String`.
//! - [`Visibility`]: declared visibility of fields and methods.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod method_info;
mod nullable_info;
mod opaque_info;
mod primitive_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;
mod visibility;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use method_info::{Invoker, MethodInfo, ParamInfo, ReflectMethods};
pub use nullable_info::NullableInfo;
pub use opaque_info::OpaqueInfo;
pub use primitive_info::{PrimitiveInfo, PrimitiveKind};
pub use struct_info::StructInfo;
pub use type_info::{Ancestors, ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
pub use visibility::Visibility;
