use alloc::boxed::Box;
use alloc::string::ToString;

use crate::Reflect;
use crate::access::{AccessError, find_field};
use crate::info::TypeInfo;

#[cold]
fn field_not_found(info: &TypeInfo, name: &str) -> AccessError {
    AccessError::FieldNotFound {
        type_path: info.type_path(),
        field: name.to_string(),
    }
}

/// The value of field `name` of `object`, declared by its type or an
/// ancestor. Visibility is not checked.
///
/// A nullable field is returned as is, not unwrapped.
///
/// # Errors
///
/// [`AccessError::FieldNotFound`] when no type in the hierarchy declares
/// `name`.
///
/// # Examples
///
/// ```
/// use vc_reflect::{access::get_field, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let point = Point { x: 1, y: 2 };
/// let y = get_field(&point, "y").unwrap();
/// assert_eq!(y.downcast_ref::<i32>(), Some(&2));
/// assert!(get_field(&point, "z").is_err());
/// ```
pub fn get_field<'a>(object: &'a dyn Reflect, name: &str) -> Result<&'a dyn Reflect, AccessError> {
    let info = object.reflect_type_info();
    find_field(info, name)
        .and_then(|field| field.get(object))
        .ok_or_else(|| field_not_found(info, name))
}

/// Mutable form of [`get_field`].
pub fn get_field_mut<'a>(
    object: &'a mut dyn Reflect,
    name: &str,
) -> Result<&'a mut dyn Reflect, AccessError> {
    let info = object.reflect_type_info();
    find_field(info, name)
        .and_then(move |field| field.get_mut(object))
        .ok_or_else(|| field_not_found(info, name))
}

/// Store `value` into field `name` of `object`.
///
/// The value goes through [`FromReflect`](crate::FromReflect) for the
/// field type, so a primitive field takes its boxed form and narrower
/// primitives, and a nullable field takes null.
///
/// # Errors
///
/// - [`AccessError::FieldNotFound`] when no type in the hierarchy declares
///   `name`;
/// - [`AccessError::IncompatibleValue`] when `value` does not convert into
///   the field type. The field is left untouched.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, access::set_field, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Counter {
///     total: i64,
/// }
///
/// let mut counter = Counter { total: 0 };
/// set_field(&mut counter, "total", 5_i32.into_boxed_reflect()).unwrap();
/// assert_eq!(counter.total, 5);
///
/// assert!(set_field(&mut counter, "total", 1.5_f64.into_boxed_reflect()).is_err());
/// ```
pub fn set_field(
    object: &mut dyn Reflect,
    name: &str,
    value: Box<dyn Reflect>,
) -> Result<(), AccessError> {
    let info = object.reflect_type_info();
    let field = find_field(info, name).ok_or_else(|| field_not_found(info, name))?;
    let slot = field
        .get_mut(object)
        .ok_or_else(|| field_not_found(info, name))?;

    slot.set(value).map_err(|value| AccessError::IncompatibleValue {
        type_path: info.type_path(),
        field: name.to_string(),
        field_type: field.type_path(),
        value_type: value.reflect_type_path(),
    })
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{get_field, get_field_mut, set_field};
    use crate::access::AccessError;
    use crate::derive::Reflect;
    use crate::ops::Null;
    use crate::Reflect as _;
    use alloc::string::{String, ToString};

    #[derive(Reflect, Default)]
    struct Account {
        owner: String,
        balance: i64,
        nickname: Option<String>,
    }

    #[derive(Reflect, Default)]
    struct Savings {
        #[reflect(extends)]
        account: Account,
        rate: f64,
        balance: i8,
    }

    #[test]
    fn reads_inherited_and_shadowed_fields() {
        let mut savings = Savings::default();
        savings.account.owner = String::from("ann");
        savings.account.balance = 100;
        savings.balance = -1;

        let owner = get_field(&savings, "owner").unwrap();
        assert_eq!(owner.downcast_ref::<String>().unwrap(), "ann");
        let balance = get_field(&savings, "balance").unwrap();
        assert_eq!(balance.downcast_ref::<i8>(), Some(&-1));

        *get_field_mut(&mut savings, "rate").unwrap().downcast_mut::<f64>().unwrap() = 0.5;
        assert_eq!(savings.rate, 0.5);
    }

    #[test]
    fn set_converts_through_from_reflect() {
        let mut account = Account::default();
        set_field(&mut account, "balance", 7_i16.into_boxed_reflect()).unwrap();
        assert_eq!(account.balance, 7);
        set_field(&mut account, "nickname", String::from("a").into_boxed_reflect()).unwrap();
        assert_eq!(account.nickname.as_deref(), Some("a"));
        set_field(&mut account, "nickname", Null.into_boxed_reflect()).unwrap();
        assert_eq!(account.nickname, None);
    }

    #[test]
    fn set_rejects_incompatible_values() {
        let mut account = Account::default();
        let err = set_field(&mut account, "balance", Null.into_boxed_reflect()).unwrap_err();
        assert!(matches!(
            err,
            AccessError::IncompatibleValue { field_type: "i64", value_type: "vc_reflect::ops::Null", .. }
        ));
        let err = set_field(&mut account, "owner", 1_u8.into_boxed_reflect()).unwrap_err();
        assert!(matches!(err, AccessError::IncompatibleValue { .. }));
        assert_eq!(account.owner, "");
    }

    #[test]
    fn missing_fields() {
        let mut account = Account::default();
        let err = get_field(&account, "missing").unwrap_err();
        assert!(err.to_string().ends_with("does not have field missing in its hierarchy."));
        assert!(get_field(&account, "").is_err());
        assert!(set_field(&mut account, "owner.", 1_u8.into_boxed_reflect()).is_err());
    }
}
