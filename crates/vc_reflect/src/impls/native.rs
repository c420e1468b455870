use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::impls::{NonGenericTypeInfoCell, is_declared, take_declared};
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;
use crate::{FromReflect, Reflect};

/// Opaque leaves: no fields, no conversions, only themselves (or their
/// `Option`) are accepted.
macro_rules! impl_reflect_opaque {
    ($ty:ty, $path:literal, $name:literal, $module:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl FromReflect for $ty {
            #[inline]
            fn is_acceptable(value: &dyn Reflect) -> bool {
                is_declared::<Self>(value)
            }

            fn take_from_reflect(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
                if Self::is_acceptable(&*value) {
                    take_declared::<Self>(value)
                } else {
                    Err(value)
                }
            }
        }
    };
}

impl_reflect_opaque!(String, "alloc::string::String", "String", Some("alloc::string"));
impl_reflect_opaque!((), "()", "()", None);

impl Reflect for String {
    impl_reflect_cast_fn!(Opaque);

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Self::take_from_reflect(value)?;
        Ok(())
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        Some(other.downcast_ref::<String>().is_some_and(|other| self == other))
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }

    #[inline]
    fn reflect_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Reflect for () {
    impl_reflect_cast_fn!(Opaque);

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        Self::take_from_reflect(value)
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        Some(other.is::<()>())
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::info::TypePath;
    use crate::{FromReflect, Reflect};
    use alloc::boxed::Box;
    use alloc::string::String;

    #[test]
    fn string_accepts_itself_and_its_option() {
        assert_eq!(<String as TypePath>::type_path(), "alloc::string::String");
        let plain = String::take_from_reflect(Box::new(String::from("a"))).unwrap();
        assert_eq!(plain, "a");
        let boxed = String::take_from_reflect(Box::new(Some(String::from("b")))).unwrap();
        assert_eq!(boxed, "b");
        assert!(!<String as FromReflect>::is_acceptable(&None::<String>));
        assert!(!<String as FromReflect>::is_acceptable(&'c'));
    }

    #[test]
    fn unit_round_trip() {
        let mut unit = ();
        assert!(unit.set(Box::new(())).is_ok());
        assert!(unit.set(Box::new(0_u8)).is_err());
        assert_eq!(<() as TypePath>::type_path(), "()");
    }
}
