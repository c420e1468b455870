use alloc::boxed::Box;
use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{PrimitiveInfo, PrimitiveKind, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;
use crate::{FromReflect, Reflect};

/// Read a primitive out of a borrowed value, widening where allowed.
trait Widen: Sized {
    fn widen(value: &dyn Reflect) -> Option<Self>;
}

/// Implements the reflection traits for one primitive.
///
/// `from [..]` lists the primitives that widen into `$ty`; a trailing
/// `; char` adds the code-point conversion.
macro_rules! impl_reflect_primitive {
    ($ty:ident, $kind:ident $(, from [$($source:ident),* $(; $char:ident)?])?) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn type_name() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ty)
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Primitive(PrimitiveInfo::new::<Self>(PrimitiveKind::$kind))
                })
            }
        }

        impl Widen for $ty {
            #[allow(clippy::cast_lossless, reason = "macro covers lossy and lossless pairs")]
            fn widen(value: &dyn Reflect) -> Option<Self> {
                if let Some(value) = value.downcast_ref::<$ty>() {
                    return Some(*value);
                }
                $($(
                    if let Some(value) = value.downcast_ref::<$source>() {
                        return Some(*value as $ty);
                    }
                )*)?
                $($(
                    if let Some(value) = value.downcast_ref::<$char>() {
                        return Some(u32::from(*value) as $ty);
                    }
                )?)?
                None
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Primitive);

            fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
                *self = Self::take_from_reflect(value)?;
                Ok(())
            }

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                Some(other.downcast_ref::<$ty>().is_some_and(|other| self == other))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }

            #[inline]
            fn reflect_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }

        impl FromReflect for $ty {
            #[inline]
            fn is_acceptable(value: &dyn Reflect) -> bool {
                value.unwrap_nullable().and_then(<$ty as Widen>::widen).is_some()
            }

            fn take_from_reflect(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
                let widened = value.unwrap_nullable().and_then(<$ty as Widen>::widen);
                widened.ok_or(value)
            }
        }
    };
}

impl_reflect_primitive!(bool, Bool);
impl_reflect_primitive!(char, Char);
impl_reflect_primitive!(i8, I8);
impl_reflect_primitive!(i16, I16, from [i8]);
impl_reflect_primitive!(i32, I32, from [i8, i16; char]);
impl_reflect_primitive!(i64, I64, from [i8, i16, i32; char]);
impl_reflect_primitive!(f32, F32, from [i8, i16, i32, i64; char]);
impl_reflect_primitive!(f64, F64, from [i8, i16, i32, i64, f32; char]);
impl_reflect_primitive!(i128, I128);
impl_reflect_primitive!(isize, Isize);
impl_reflect_primitive!(u8, U8);
impl_reflect_primitive!(u16, U16);
impl_reflect_primitive!(u32, U32);
impl_reflect_primitive!(u64, U64);
impl_reflect_primitive!(u128, U128);
impl_reflect_primitive!(usize, Usize);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::info::{PrimitiveKind, TypePath, Typed};
    use crate::ops::Null;
    use crate::{FromReflect, Reflect};
    use alloc::boxed::Box;
    use alloc::format;

    #[test]
    fn paths_are_keywords() {
        assert_eq!(<i32 as TypePath>::type_path(), "i32");
        assert_eq!(<char as TypePath>::type_name(), "char");
        assert_eq!(<f64 as TypePath>::module_path(), None);
        let info = <u8 as Typed>::type_info().as_primitive().unwrap();
        assert_eq!(info.kind(), PrimitiveKind::U8);
    }

    #[test]
    fn widening_follows_the_promotion_table() {
        assert_eq!(i16::take_from_reflect(Box::new(3_i8)).unwrap(), 3);
        assert_eq!(i32::take_from_reflect(Box::new('A')).unwrap(), 65);
        assert_eq!(i64::take_from_reflect(Box::new(-7_i32)).unwrap(), -7);
        assert_eq!(f32::take_from_reflect(Box::new(2_i64)).unwrap(), 2.0);
        assert_eq!(f64::take_from_reflect(Box::new(1.5_f32)).unwrap(), 1.5);

        assert!(!<i16 as FromReflect>::is_acceptable(&'a'));
        assert!(!<i8 as FromReflect>::is_acceptable(&1_i16));
        assert!(!<f32 as FromReflect>::is_acceptable(&1.0_f64));
        assert!(!<u32 as FromReflect>::is_acceptable(&1_u8));
        assert!(!<char as FromReflect>::is_acceptable(&65_i32));
        assert!(!<bool as FromReflect>::is_acceptable(&1_i32));
    }

    #[test]
    fn accepts_boxed_form_but_not_null() {
        assert_eq!(i32::take_from_reflect(Box::new(Some(9_i32))).unwrap(), 9);
        assert_eq!(i64::take_from_reflect(Box::new(Some(9_i16))).unwrap(), 9);
        assert!(!<i32 as FromReflect>::is_acceptable(&None::<i32>));
        assert!(!<i32 as FromReflect>::is_acceptable(&Null));

        let rejected = i32::take_from_reflect(Box::new(Null)).unwrap_err();
        assert!(rejected.is::<Null>());
    }

    #[test]
    fn set_and_compare() {
        let mut value = 1.0_f64;
        value.set(Box::new(4_i32)).unwrap();
        assert_eq!(value, 4.0);
        assert_eq!(value.reflect_partial_eq(&4.0_f64), Some(true));
        assert_eq!(value.reflect_partial_eq(&4_i32), Some(false));

        let c: &dyn Reflect = &'q';
        assert_eq!(format!("{c} {c:?}"), "q 'q'");
    }
}
