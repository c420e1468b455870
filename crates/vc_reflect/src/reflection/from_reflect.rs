use alloc::boxed::Box;

use crate::Reflect;

/// Build a concrete value out of a reflected one.
///
/// This is the single conversion used for argument passing and for field
/// assignment. Conversion is two phase: [`is_acceptable`] inspects a
/// borrowed value, [`take_from_reflect`] consumes it. An implementation
/// must succeed in `take_from_reflect` whenever `is_acceptable` returned
/// `true`, which lets callers validate a whole argument list before
/// consuming any of it.
///
/// What is accepted:
///
/// - primitives: the same primitive or its `Option`, plus every primitive
///   the promotion table widens into it (`i32` accepts `i8`, `i16`,
///   `char`, ...);
/// - `Option<T>`: any null, and whatever `T` accepts;
/// - structs: the struct itself (optionally inside `Some`) and structs
///   extending it, which give up their embedded ancestor;
/// - opaque types: only themselves, optionally inside `Some`.
///
/// # Examples
///
/// ```
/// use vc_reflect::{FromReflect, Reflect, ops::Null};
///
/// assert!(<f64 as FromReflect>::is_acceptable(&'x'));
/// assert_eq!(f64::take_from_reflect(Box::new('x')).unwrap(), 120.0);
///
/// assert!(!<i32 as FromReflect>::is_acceptable(&Null));
/// assert_eq!(<Option<i32>>::take_from_reflect(Box::new(Null)).unwrap(), None);
/// ```
///
/// [`is_acceptable`]: FromReflect::is_acceptable
/// [`take_from_reflect`]: FromReflect::take_from_reflect
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `FromReflect` so cannot be created through reflection",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`"
)]
pub trait FromReflect: Reflect + Sized {
    /// Whether `value` converts into `Self`.
    fn is_acceptable(value: &dyn Reflect) -> bool;

    /// Convert `value`, handing it back when it is not acceptable.
    fn take_from_reflect(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>>;
}
