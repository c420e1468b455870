//! Reflection for foreign types and helpers for writing impls.
//!
//! - [`concat`]: string concatenation for generic type paths.
//! - [`NonGenericTypeInfoCell`]: used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: used to implement [`Typed`] for generic types.
//! - [`is_declared`] / [`take_declared`]: used to implement [`FromReflect`]
//!   for structs and opaque types.
//! - `struct_xxx`: used by [`#[derive(Reflect)]`](crate::derive::Reflect).
//!
//! ## Implemented Menu
//!
//! - primitives: `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//! - opaque: `String`, `()`
//! - nullable: `Option<T>`, [`Null`](crate::ops::Null)
//!
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed
//! [`FromReflect`]: crate::FromReflect

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod utils;

mod native;
mod option;
mod primitive;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

pub use utils::{is_declared, struct_debug, struct_partial_eq, take_declared};

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use vc_reflect::impls;
///
/// let s = impls::concat(&["core::option::Option", "<", "u8", ">"]);
///
/// assert_eq!(s, "core::option::Option<u8>");
/// assert_eq!(s.capacity(), 24);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
