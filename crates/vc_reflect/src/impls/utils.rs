use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use crate::Reflect;
use crate::ops::{Null, ReflectOwned, ReflectRef, Struct, upcast_ref_by_id};

/// A function used for implementing [`FromReflect::is_acceptable`] of
/// structs and opaque types.
///
/// # Rules
///
/// 1. Look through nullables; null is never accepted.
/// 2. Accept `T` itself or any struct that embeds a `T` ancestor.
///
/// [`FromReflect::is_acceptable`]: crate::FromReflect::is_acceptable
#[inline(never)]
pub fn is_declared<T: Reflect>(value: &dyn Reflect) -> bool {
    value
        .unwrap_nullable()
        .and_then(|value| upcast_ref_by_id(value, TypeId::of::<T>()))
        .is_some()
}

/// A function used for implementing [`FromReflect::take_from_reflect`]
/// after [`is_declared`] accepted the value.
///
/// Unwraps nullables and gives up descendants until a `T` is left. A value
/// [`is_declared`] rejects comes back as `Err`, possibly already stripped.
///
/// # Example
///
/// ```
/// use vc_reflect::{FromReflect, Reflect, derive::Reflect};
/// use vc_reflect::impls::take_declared;
///
/// #[derive(Reflect, Debug, PartialEq)]
/// struct Shape {
///     sides: u8,
/// }
///
/// #[derive(Reflect)]
/// struct Square {
///     #[reflect(extends)]
///     shape: Shape,
///     side: f32,
/// }
///
/// let square = Square { shape: Shape { sides: 4 }, side: 2.0 };
/// let shape = take_declared::<Shape>(Box::new(Some(square))).unwrap();
/// assert_eq!(shape, Shape { sides: 4 });
/// ```
///
/// [`FromReflect::take_from_reflect`]: crate::FromReflect::take_from_reflect
#[inline(never)]
pub fn take_declared<T: Reflect>(mut value: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
    loop {
        value = match value.downcast::<T>() {
            Ok(value) => return Ok(*value),
            Err(value) => match value.reflect_owned() {
                ReflectOwned::Nullable(nullable) => match nullable.into_value() {
                    Some(inner) => inner,
                    None => return Err(Box::new(Null)),
                },
                ReflectOwned::Struct(value) => match value.into_parent() {
                    Some(parent) => parent,
                    None => return Err(Box::new(Null)),
                },
                other => return Err(other.into_reflect()),
            },
        };
    }
}

/// A function used for implementing [`Reflect::reflect_partial_eq`] of
/// structs.
///
/// # Rules
///
/// 1. If `y` is not a struct of the same type, return `Some(false)`.
/// 2. Compare the embedded ancestors, then each declared field in order.
/// 3. Return `None` as soon as one comparison is unsupported.
///
/// [`Reflect::reflect_partial_eq`]: crate::Reflect::reflect_partial_eq
#[inline(never)]
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return Some(false);
    };
    if x.ty_id() != y.ty_id() || x.field_len() != y.field_len() {
        return Some(false);
    }

    match (x.parent(), y.parent()) {
        (Some(x_parent), Some(y_parent)) => {
            if !x_parent.reflect_partial_eq(y_parent)? {
                return Some(false);
            }
        }
        (None, None) => {}
        _ => return Some(false),
    }

    for index in 0..x.field_len() {
        let (Some(x_field), Some(y_field)) = (x.field_at(index), y.field_at(index)) else {
            return Some(false);
        };
        if !x_field.reflect_partial_eq(y_field)? {
            return Some(false);
        }
    }
    Some(true)
}

/// A function used for implementing [`Reflect::reflect_debug`] of structs.
///
/// The embedded ancestor is printed first under the name `extends`.
///
/// ```
/// use vc_reflect::derive::Reflect;
/// use vc_reflect::Reflect as _;
///
/// #[derive(Reflect)]
/// struct Base {
///     id: u8,
/// }
///
/// #[derive(Reflect)]
/// struct Item {
///     #[reflect(extends)]
///     base: Base,
///     label: String,
/// }
///
/// let item = Item { base: Base { id: 1 }, label: "x".into() };
/// assert_eq!(
///     format!("{:?}", item.as_reflect()),
///     r#"Item { extends: Base { id: 1 }, label: "x" }"#,
/// );
/// ```
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
#[inline(never)]
pub fn struct_debug(x: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut info = f.debug_struct(x.reflect_type_ident());
    if let Some(parent) = x.parent() {
        info.field("extends", &parent);
    }
    for index in 0..x.field_len() {
        if let (Some(name), Some(value)) = (x.name_at(index), x.field_at(index)) {
            info.field(name, &value);
        }
    }
    info.finish()
}
