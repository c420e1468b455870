use alloc::boxed::Box;
use alloc::string::ToString;

use crate::Reflect;
use crate::access::{AccessError, get_field, get_field_mut, set_field};
use crate::info::TypePath;
use crate::ops::ReflectMut;

// -----------------------------------------------------------------------------
// Intermediate steps

/// Resolve one non-final segment: the field's value, looking through
/// nullables, which must hold something.
fn step<'a>(object: &'a dyn Reflect, segment: &str) -> Result<&'a dyn Reflect, AccessError> {
    log::trace!("resolving `{segment}` on {}", object.reflect_type_path());
    let value = get_field(object, segment)?;
    value
        .unwrap_nullable()
        .ok_or_else(|| AccessError::NullIntermediate {
            type_path: object.reflect_type_path(),
            field: segment.to_string(),
        })
}

fn unwrap_nullable_mut(value: &mut dyn Reflect) -> Option<&mut dyn Reflect> {
    match value.reflect_mut() {
        ReflectMut::Nullable(nullable) => unwrap_nullable_mut(nullable.value_mut()?),
        other => Some(other.into_reflect()),
    }
}

fn step_mut<'a>(
    object: &'a mut dyn Reflect,
    segment: &str,
) -> Result<&'a mut dyn Reflect, AccessError> {
    let type_path = object.reflect_type_path();
    log::trace!("resolving `{segment}` on {type_path}");
    let value = get_field_mut(object, segment)?;
    unwrap_nullable_mut(value).ok_or_else(|| AccessError::NullIntermediate {
        type_path,
        field: segment.to_string(),
    })
}

// -----------------------------------------------------------------------------
// Deep access

/// The value at a dot separated field path such as `"customer.address.zip"`.
///
/// The path is split on its first `.`: the head names a field of `object`
/// whose value becomes the object for the rest of the path. Intermediate
/// `Option`s are looked through. The final segment is read with
/// [`get_field`], so a nullable final field is returned as is.
///
/// # Errors
///
/// - [`AccessError::FieldNotFound`] when a segment names no field, empty
///   segments (`"a."`, `"a..b"`, `"."`) included;
/// - [`AccessError::NullIntermediate`] when an intermediate field is null.
///
/// # Examples
///
/// ```
/// use vc_reflect::{access::get_deep, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Address {
///     zip: String,
/// }
///
/// #[derive(Reflect)]
/// struct Customer {
///     address: Option<Address>,
/// }
///
/// let customer = Customer { address: Some(Address { zip: "K1A".into() }) };
/// let zip = get_deep(&customer, "address.zip").unwrap();
/// assert_eq!(zip.downcast_ref::<String>().unwrap(), "K1A");
///
/// let nobody = Customer { address: None };
/// assert!(get_deep(&nobody, "address.zip").is_err());
/// ```
pub fn get_deep<'a>(object: &'a dyn Reflect, path: &str) -> Result<&'a dyn Reflect, AccessError> {
    let mut object = object;
    let mut path = path;
    while let Some((head, rest)) = path.split_once('.') {
        object = step(object, head)?;
        path = rest;
    }
    get_field(object, path)
}

/// Mutable form of [`get_deep`].
pub fn get_deep_mut<'a>(
    object: &'a mut dyn Reflect,
    path: &str,
) -> Result<&'a mut dyn Reflect, AccessError> {
    let mut object = object;
    let mut path = path;
    while let Some((head, rest)) = path.split_once('.') {
        object = step_mut(object, head)?;
        path = rest;
    }
    get_field_mut(object, path)
}

/// Store `value` at a dot separated field path.
///
/// Intermediate segments resolve as in [`get_deep`], the final one is
/// written with [`set_field`].
///
/// # Errors
///
/// Those of [`get_deep`] for the intermediate segments and those of
/// [`set_field`] for the final one.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, access::set_deep, derive::Reflect};
///
/// #[derive(Reflect, Default)]
/// struct Inner {
///     value: i64,
/// }
///
/// #[derive(Reflect, Default)]
/// struct Outer {
///     inner: Inner,
/// }
///
/// let mut outer = Outer::default();
/// set_deep(&mut outer, "inner.value", 12_i32.into_boxed_reflect()).unwrap();
/// assert_eq!(outer.inner.value, 12);
/// ```
pub fn set_deep(
    object: &mut dyn Reflect,
    path: &str,
    value: Box<dyn Reflect>,
) -> Result<(), AccessError> {
    let mut object = object;
    let mut path = path;
    while let Some((head, rest)) = path.split_once('.') {
        object = step_mut(object, head)?;
        path = rest;
    }
    set_field(object, path, value)
}

/// [`get_deep`] followed by a downcast to `T`.
///
/// A non-null `Option` at the end of the path is looked through when `T`
/// is not the `Option` itself.
///
/// # Errors
///
/// Those of [`get_deep`], and [`AccessError::InvalidDowncast`] when the
/// value is not a `T`.
///
/// ```
/// use vc_reflect::{access::get_deep_as, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Config {
///     retries: Option<u8>,
/// }
///
/// let config = Config { retries: Some(3) };
/// assert_eq!(get_deep_as::<u8>(&config, "retries"), Ok(&3));
/// assert_eq!(get_deep_as::<Option<u8>>(&config, "retries"), Ok(&Some(3)));
/// assert!(get_deep_as::<u16>(&config, "retries").is_err());
/// ```
pub fn get_deep_as<'a, T: Reflect + TypePath>(
    object: &'a dyn Reflect,
    path: &str,
) -> Result<&'a T, AccessError> {
    let value = get_deep(object, path)?;
    if let Some(value) = value.downcast_ref::<T>() {
        return Ok(value);
    }
    value
        .unwrap_nullable()
        .and_then(<dyn Reflect>::downcast_ref::<T>)
        .ok_or_else(|| AccessError::InvalidDowncast {
            expected: T::type_path(),
            actual: value.reflect_type_path(),
        })
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{get_deep, get_deep_as, get_deep_mut, set_deep};
    use crate::access::{AccessError, get_field, set_field};
    use crate::derive::Reflect;
    use crate::ops::Null;
    use crate::Reflect as _;

    #[derive(Reflect, Default)]
    struct FirstLevel {
        second: Option<SecondLevel>,
    }

    #[derive(Reflect, Default)]
    struct SecondLevel {
        third: Option<ThirdLevel>,
    }

    #[derive(Reflect, Default)]
    struct ThirdLevel {
        value: i32,
    }

    fn populated() -> FirstLevel {
        let mut first = FirstLevel::default();
        set_field(&mut first, "second", SecondLevel::default().into_boxed_reflect()).unwrap();
        set_deep(&mut first, "second.third", ThirdLevel::default().into_boxed_reflect()).unwrap();
        set_deep(&mut first, "second.third.value", 12_i32.into_boxed_reflect()).unwrap();
        first
    }

    fn is_field_not_found<T>(result: Result<T, AccessError>) -> bool {
        matches!(result, Err(AccessError::FieldNotFound { .. }))
    }

    #[test]
    fn three_level_get_and_set() {
        let first = populated();
        let second = first.second.as_ref().unwrap();
        let third = second.third.as_ref().unwrap();
        assert_eq!(third.value, 12);

        let slot = get_field(&first, "second").unwrap();
        assert!(core::ptr::addr_eq(slot, &first.second));
        let slot = get_deep(&first, "second.third").unwrap();
        assert!(core::ptr::addr_eq(slot, &second.third));
        assert_eq!(get_deep_as::<i32>(&first, "second.third.value"), Ok(&12));
        assert_eq!(get_deep_as::<ThirdLevel>(&first, "second.third").map(|t| t.value), Ok(12));
    }

    #[test]
    fn deep_writes_convert_and_replace() {
        let mut first = populated();
        set_deep(&mut first, "second.third.value", 'A'.into_boxed_reflect()).unwrap();
        assert_eq!(get_deep_as::<i32>(&first, "second.third.value"), Ok(&65));

        *get_deep_mut(&mut first, "second.third.value")
            .unwrap()
            .downcast_mut::<i32>()
            .unwrap() += 1;
        assert_eq!(get_deep_as::<i32>(&first, "second.third.value"), Ok(&66));

        set_deep(&mut first, "second.third", Null.into_boxed_reflect()).unwrap();
        assert!(first.second.as_ref().unwrap().third.is_none());
    }

    #[test]
    fn illegal_paths() {
        let mut first = populated();
        let value = || 12_i32.into_boxed_reflect();

        assert!(is_field_not_found(set_field(&mut first, "second.", value())));
        assert!(is_field_not_found(get_field(&first, "second.")));
        assert!(is_field_not_found(set_deep(&mut first, "second.", value())));
        assert!(is_field_not_found(get_deep(&first, "second.")));
        assert!(is_field_not_found(set_deep(&mut first, "second..third.value", value())));
        assert!(is_field_not_found(get_deep(&first, "second..")));
        assert!(is_field_not_found(set_deep(&mut first, ".", value())));
        assert!(is_field_not_found(get_deep(&first, ".")));
        assert!(is_field_not_found(set_field(&mut first, "does not exist", value())));
        assert!(is_field_not_found(get_field(&first, "does not exist")));
        assert!(is_field_not_found(get_deep(&first, "second.third.value.more")));
    }

    #[test]
    fn null_intermediate_is_an_error() {
        let mut first = FirstLevel::default();
        let err = set_deep(&mut first, "second.third", ThirdLevel::default().into_boxed_reflect())
            .unwrap_err();
        assert!(matches!(err, AccessError::NullIntermediate { ref field, .. } if field == "second"));
        assert!(matches!(
            get_deep(&first, "second.third"),
            Err(AccessError::NullIntermediate { .. })
        ));
        assert!(get_deep(&first, "second").unwrap().is_null());
    }

    #[test]
    fn typed_reads_report_the_found_type() {
        let first = populated();
        assert_eq!(
            get_deep_as::<i64>(&first, "second.third.value"),
            Err(AccessError::InvalidDowncast { expected: "i64", actual: "i32" })
        );
    }
}
