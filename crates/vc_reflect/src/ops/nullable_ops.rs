use alloc::boxed::Box;
use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{NullableInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// Nullable

/// A value that may hold nothing.
///
/// `Option<T>` is the nullable form of `T`; for a primitive `P`,
/// `Option<P>` is also its boxed form. [`Null`] is the untyped null.
pub trait Nullable: Reflect {
    /// The held value, `None` when null.
    fn value(&self) -> Option<&dyn Reflect>;

    fn value_mut(&mut self) -> Option<&mut dyn Reflect>;

    fn into_value(self: Box<Self>) -> Option<Box<dyn Reflect>>;

    #[inline]
    fn is_null(&self) -> bool {
        self.value().is_none()
    }
}

// -----------------------------------------------------------------------------
// Null

/// The null value, convertible into any `Option<T>`.
///
/// Use it to pass or store null without naming a type.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, ops::Null};
///
/// let mut slot = Some(String::from("filled"));
/// slot.set(Box::new(Null)).unwrap();
/// assert_eq!(slot, None);
///
/// let mut number = 1_i32;
/// assert!(number.set(Box::new(Null)).is_err());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct Null;

impl TypePath for Null {
    #[inline]
    fn type_path() -> &'static str {
        "vc_reflect::ops::Null"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Null"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Null"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("vc_reflect::ops")
    }
}

impl Typed for Null {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Nullable(NullableInfo::null::<Self>()))
    }
}

impl Reflect for Null {
    impl_reflect_cast_fn!(Nullable);

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Self::take_from_reflect(value)?;
        Ok(())
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        Some(other.is_null())
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Null")
    }

    fn reflect_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null")
    }
}

impl Nullable for Null {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        None
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut dyn Reflect> {
        None
    }

    #[inline]
    fn into_value(self: Box<Self>) -> Option<Box<dyn Reflect>> {
        None
    }
}

impl FromReflect for Null {
    #[inline]
    fn is_acceptable(value: &dyn Reflect) -> bool {
        value.is_null()
    }

    fn take_from_reflect(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        if value.is_null() { Ok(Null) } else { Err(value) }
    }
}
