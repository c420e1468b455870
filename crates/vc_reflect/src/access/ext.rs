use alloc::boxed::Box;

use crate::Reflect;
use crate::access::{AccessError, get_deep, get_deep_as, get_deep_mut, invoke_by_name, set_deep};
use crate::info::TypePath;
use crate::ops::{ArgList, Struct};

/// Method syntax for the functions of [`access`](crate::access).
///
/// Implemented for every `Reflect` type and for `dyn Reflect`.
///
/// # Examples
///
/// ```
/// use vc_reflect::{args, access::ReflectAccess, derive::{Reflect, reflect_methods}};
///
/// #[derive(Reflect, Default)]
/// struct Engine {
///     rpm: u32,
/// }
///
/// #[derive(Reflect, Default)]
/// #[reflect(methods)]
/// struct Car {
///     engine: Engine,
/// }
///
/// #[reflect_methods]
/// impl Car {
///     pub fn rev(&mut self, by: u32) -> u32 {
///         self.engine.rpm += by;
///         self.engine.rpm
///     }
/// }
///
/// let mut car = Car::default();
/// car.set_deep("engine.rpm", 900_u32).unwrap();
/// car.invoke("rev", args![100_u32]).unwrap();
/// assert_eq!(car.get_deep_as::<u32>("engine.rpm"), Ok(&1000));
/// ```
pub trait ReflectAccess {
    /// See [`get_deep`].
    fn get_deep(&self, path: &str) -> Result<&dyn Reflect, AccessError>;

    /// See [`get_deep_mut`].
    fn get_deep_mut(&mut self, path: &str) -> Result<&mut dyn Reflect, AccessError>;

    /// See [`get_deep_as`].
    fn get_deep_as<T: Reflect + TypePath>(&self, path: &str) -> Result<&T, AccessError>;

    /// See [`set_deep`].
    fn set_deep<T: Reflect>(&mut self, path: &str, value: T) -> Result<(), AccessError>;

    /// See [`invoke_by_name`].
    fn invoke(
        &mut self,
        name: &str,
        args: impl Into<ArgList>,
    ) -> Result<Box<dyn Reflect>, AccessError>;
}

macro_rules! impl_reflect_access {
    () => {
        #[inline(always)]
        fn get_deep(&self, path: &str) -> Result<&dyn Reflect, AccessError> {
            get_deep(self, path)
        }

        #[inline(always)]
        fn get_deep_mut(&mut self, path: &str) -> Result<&mut dyn Reflect, AccessError> {
            get_deep_mut(self, path)
        }

        #[inline(always)]
        fn get_deep_as<T: Reflect + TypePath>(&self, path: &str) -> Result<&T, AccessError> {
            get_deep_as::<T>(self, path)
        }

        #[inline(always)]
        fn set_deep<T: Reflect>(&mut self, path: &str, value: T) -> Result<(), AccessError> {
            set_deep(self, path, Box::new(value))
        }

        #[inline(always)]
        fn invoke(
            &mut self,
            name: &str,
            args: impl Into<ArgList>,
        ) -> Result<Box<dyn Reflect>, AccessError> {
            invoke_by_name(self, name, args)
        }
    };
}

impl<P: Reflect> ReflectAccess for P {
    impl_reflect_access!();
}

impl ReflectAccess for dyn Reflect {
    impl_reflect_access!();
}

impl ReflectAccess for dyn Struct {
    impl_reflect_access!();
}
