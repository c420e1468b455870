use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind, TypeInfo};
use crate::ops::{ReflectMut, ReflectOwned, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// A value whose type can be inspected and whose parts can be reached at
/// run time.
///
/// Prefer [`#[derive(Reflect)]`](crate::derive::Reflect) over implementing
/// this by hand. Primitives, `String`, `()` and `Option<T>` are covered by
/// the crate.
///
/// # Type identity
///
/// `Box<dyn Reflect>::type_id` reports the box. Use [`Reflect::ty_id`]:
///
/// ```
/// use vc_reflect::Reflect;
/// use core::any::{Any, TypeId};
///
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Kinds
///
/// [`reflect_ref`](Reflect::reflect_ref), [`reflect_mut`](Reflect::reflect_mut)
/// and [`reflect_owned`](Reflect::reflect_owned) expose the value as one of
/// the kind traits ([`Struct`](crate::ops::Struct),
/// [`Nullable`](crate::ops::Nullable)) or as a leaf.
///
/// ```
/// use vc_reflect::{Reflect, ops::ReflectRef};
///
/// let value = Some(3_u8);
/// let ReflectRef::Nullable(nullable) = value.reflect_ref() else { unreachable!() };
/// assert_eq!(nullable.value().unwrap().downcast_ref::<u8>(), Some(&3));
/// ```
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// The [`TypeId`] of the underlying value, never of a container.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Replace this value with `value`, converting it the way an argument
    /// is converted (see [`FromReflect`](crate::FromReflect)).
    ///
    /// On failure the value is handed back untouched.
    ///
    /// ```
    /// use vc_reflect::Reflect;
    ///
    /// let mut wide = 0_i64;
    /// wide.set(7_i32.into_boxed_reflect()).unwrap();
    /// assert_eq!(wide, 7);
    ///
    /// let mut narrow = 0_i32;
    /// assert!(narrow.set(7_i64.into_boxed_reflect()).is_err());
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    fn reflect_kind(&self) -> ReflectKind;

    fn reflect_ref(&self) -> ReflectRef<'_>;

    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    fn reflect_owned(self: Box<Self>) -> ReflectOwned;

    /// Value equality through reflection, `None` when not supported.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Debug formatting. Defaults to the type path.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_path())
    }

    /// User facing formatting, as used in diagnostic messages.
    ///
    /// Defaults to [`reflect_debug`](Reflect::reflect_debug). Strings
    /// display raw and null displays as `null`.
    #[inline]
    fn reflect_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// dyn Reflect

impl dyn Reflect {
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Convert into `Box<T>`, handing the box back when the type differs.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            let any: Box<dyn Any> = self;
            Ok(any
                .downcast::<T>()
                .unwrap_or_else(|_| unreachable!("type id checked above")))
        } else {
            Err(self)
        }
    }

    /// Like [`downcast`](Self::downcast) but unboxes the value.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }

    /// Whether this is a nullable holding nothing, looking through
    /// nested nullables.
    pub fn is_null(&self) -> bool {
        match self.reflect_ref() {
            ReflectRef::Nullable(nullable) => nullable.value().is_none_or(Self::is_null),
            _ => false,
        }
    }

    /// The innermost non-null value, `self` for non-nullables.
    ///
    /// ```
    /// use vc_reflect::Reflect;
    ///
    /// let value = Some(Some(5_i8));
    /// let inner = value.as_reflect().unwrap_nullable().unwrap();
    /// assert_eq!(inner.downcast_ref::<i8>(), Some(&5));
    /// assert!(None::<i8>.as_reflect().unwrap_nullable().is_none());
    /// ```
    pub fn unwrap_nullable(&self) -> Option<&dyn Reflect> {
        match self.reflect_ref() {
            ReflectRef::Nullable(nullable) => nullable.value()?.unwrap_nullable(),
            other => Some(other.into_reflect()),
        }
    }

    /// Descriptor of the value actually held: the innermost non-null
    /// value's type, `None` for null.
    #[inline]
    pub fn value_type_info(&self) -> Option<&'static TypeInfo> {
        self.unwrap_nullable().map(|value| value.reflect_type_info())
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl fmt::Display for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_display(f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::ops::Null;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn downcast_hands_back_on_mismatch() {
        let value = 1_u16.into_boxed_reflect();
        let value = value.downcast::<u32>().unwrap_err();
        assert_eq!(*value.downcast::<u16>().unwrap(), 1);
    }

    #[test]
    fn null_detection() {
        assert!(Null.as_reflect().is_null());
        assert!(None::<String>.as_reflect().is_null());
        assert!(Some(None::<i32>).as_reflect().is_null());
        assert!(!Some(0_i32).as_reflect().is_null());
        assert!(!0_i32.as_reflect().is_null());
    }

    #[test]
    fn display_and_debug() {
        let text: &dyn Reflect = &String::from("foo");
        assert_eq!(format!("{text}"), "foo");
        assert_eq!(format!("{text:?}"), "\"foo\"");

        let none: &dyn Reflect = &None::<i32>;
        assert_eq!(format!("{none}"), "null");
        let some: &dyn Reflect = &Some(42_i32);
        assert_eq!(format!("{some}"), "42");
    }
}
