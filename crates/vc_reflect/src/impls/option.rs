use alloc::boxed::Box;
use core::fmt;

use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{NullableInfo, TypeInfo, TypePath, Typed};
use crate::ops::Nullable;
use crate::reflection::impl_reflect_cast_fn;
use crate::{FromReflect, Reflect};

// `Option<T>` is the nullable form of `T`. For primitives it doubles as the
// boxed form.

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: FromReflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Nullable(NullableInfo::new::<Self, T>()))
    }
}

impl<T: FromReflect + Typed> Reflect for Option<T> {
    impl_reflect_cast_fn!(Nullable);

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Self::take_from_reflect(value)?;
        Ok(())
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        match (self, other.unwrap_nullable()) {
            (None, None) => Some(true),
            (Some(value), Some(other)) => value.reflect_partial_eq(other),
            _ => Some(false),
        }
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => f.debug_tuple("Some").field(&value.as_reflect()).finish(),
            None => f.write_str("None"),
        }
    }

    fn reflect_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.reflect_display(f),
            None => f.write_str("null"),
        }
    }
}

impl<T: FromReflect + Typed> Nullable for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|value| value as &mut dyn Reflect)
    }

    #[inline]
    fn into_value(self: Box<Self>) -> Option<Box<dyn Reflect>> {
        (*self).map(Reflect::into_boxed_reflect)
    }
}

impl<T: FromReflect + Typed> FromReflect for Option<T> {
    fn is_acceptable(value: &dyn Reflect) -> bool {
        value.is_null() || T::is_acceptable(value)
    }

    fn take_from_reflect(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        if value.is_null() {
            return Ok(None);
        }
        match value.downcast::<Self>() {
            Ok(value) => Ok(*value),
            Err(value) => T::take_from_reflect(value).map(Some),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::info::{TypePath, Typed};
    use crate::ops::Null;
    use crate::{FromReflect, Reflect};
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn generic_paths() {
        assert_eq!(<Option<i32> as TypePath>::type_path(), "core::option::Option<i32>");
        assert_eq!(
            <Option<String> as TypePath>::type_name(),
            "Option<String>"
        );
        let info = <Option<u8> as Typed>::type_info().as_nullable().unwrap();
        assert!(info.inner().unwrap().type_is::<u8>());
    }

    #[test]
    fn accepts_null_and_inner_conversions() {
        assert_eq!(<Option<i64>>::take_from_reflect(Box::new(Null)).unwrap(), None);
        assert_eq!(<Option<i64>>::take_from_reflect(Box::new(None::<String>)).unwrap(), None);
        assert_eq!(<Option<i64>>::take_from_reflect(Box::new(3_i8)).unwrap(), Some(3));
        assert_eq!(<Option<i64>>::take_from_reflect(Box::new(Some(3_i64))).unwrap(), Some(3));
        assert!(!<Option<i8> as FromReflect>::is_acceptable(&3_i64));
    }

    #[test]
    fn formatting() {
        let some: &dyn Reflect = &Some(String::from("s"));
        assert_eq!(format!("{some:?}"), "Some(\"s\")");
        assert_eq!(format!("{some}"), "s");
        let none: &dyn Reflect = &None::<u8>;
        assert_eq!(format!("{none:?} {none}"), "None null");
    }

    #[test]
    fn equality_looks_through_nullables() {
        let value = Some(5_u16);
        assert_eq!(value.reflect_partial_eq(&5_u16), Some(true));
        assert_eq!(value.reflect_partial_eq(&Null), Some(false));
        assert_eq!(None::<u16>.reflect_partial_eq(&Null), Some(true));
    }
}
