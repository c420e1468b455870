use alloc::vec::Vec;

use crate::access::AccessError;
use crate::info::{MethodInfo, NamedField, TypeInfo};

/// The field `name` declared by `info` or the nearest ancestor declaring it.
///
/// Fields of more derived types shadow same-named fields further up.
/// Types without fields, primitives included, simply yield `None`.
///
/// # Examples
///
/// ```
/// use vc_reflect::{access::find_field, derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Parent {
///     field1: String,
/// }
///
/// #[derive(Reflect)]
/// struct Child {
///     #[reflect(extends)]
///     parent: Parent,
///     field1: String,
///     field2: String,
/// }
///
/// let field = find_field(Child::type_info(), "field1").unwrap();
/// assert!(field.owner_is::<Child>());
/// assert!(find_field(Child::type_info(), "field3").is_none());
/// ```
pub fn find_field(info: &'static TypeInfo, name: &str) -> Option<&'static NamedField> {
    info.ancestors().find_map(|info| match info {
        TypeInfo::Struct(info) => info.field(name),
        _ => None,
    })
}

/// Every field declared by `info` and its ancestors, most derived first and
/// in declaration order within a type.
///
/// # Errors
///
/// [`AccessError::InvalidArgument`] when `info` is a primitive.
///
/// # Examples
///
/// ```
/// use vc_reflect::{access::list_fields, derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     foo: String,
/// }
///
/// #[derive(Reflect)]
/// struct Bar {
///     #[reflect(extends)]
///     base: Foo,
///     bar: String,
/// }
///
/// let names: Vec<_> = list_fields(Bar::type_info())
///     .unwrap()
///     .iter()
///     .map(|field| field.name())
///     .collect();
/// assert_eq!(names, ["bar", "foo"]);
///
/// assert!(list_fields(i32::type_info()).is_err());
/// ```
pub fn list_fields(info: &'static TypeInfo) -> Result<Vec<&'static NamedField>, AccessError> {
    if info.is_primitive() {
        return Err(AccessError::InvalidArgument {
            type_path: info.type_path(),
        });
    }
    Ok(info.ancestors().flat_map(TypeInfo::fields).collect())
}

/// The public methods of `info` and its ancestors, in dispatch order: a
/// type's own methods in declaration order, then its parent's and so on.
///
/// Non-public methods are left out entirely.
pub fn list_methods(info: &'static TypeInfo) -> Vec<&'static MethodInfo> {
    info.ancestors()
        .flat_map(TypeInfo::methods)
        .filter(|method| method.is_public())
        .collect()
}

/// The first public method named `name` in dispatch order.
///
/// Overloads are not considered: a name matching several methods always
/// picks the first one.
pub fn find_method(info: &'static TypeInfo, name: &str) -> Option<&'static MethodInfo> {
    info.ancestors()
        .flat_map(TypeInfo::methods)
        .find(|method| method.is_public() && method.name() == name)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{find_field, list_fields};
    use crate::access::AccessError;
    use crate::derive::Reflect;
    use crate::info::Typed;
    use alloc::string::String;
    use alloc::vec::Vec;

    #[derive(Reflect)]
    struct Baz;

    #[derive(Reflect)]
    struct Foo {
        foo: String,
    }

    #[derive(Reflect)]
    struct Bar {
        #[reflect(extends)]
        base: Foo,
        bar: String,
    }

    #[derive(Reflect)]
    struct Parent {
        field1: String,
    }

    #[derive(Reflect)]
    struct Child {
        #[reflect(extends)]
        parent: Parent,
        field1: String,
        field2: String,
    }

    fn names(fields: &[&crate::info::NamedField]) -> Vec<&'static str> {
        fields.iter().map(|field| field.name()).collect()
    }

    #[test]
    fn lists_most_derived_first() {
        assert!(list_fields(Baz::type_info()).unwrap().is_empty());
        assert_eq!(names(&list_fields(Foo::type_info()).unwrap()), ["foo"]);
        assert_eq!(names(&list_fields(Bar::type_info()).unwrap()), ["bar", "foo"]);
        assert_eq!(
            names(&list_fields(Child::type_info()).unwrap()),
            ["field1", "field2", "field1"]
        );
    }

    #[test]
    fn nearest_declaration_wins() {
        let field = find_field(Child::type_info(), "field1").unwrap();
        assert!(field.owner_is::<Child>());

        let inherited = find_field(Bar::type_info(), "foo").unwrap();
        assert!(inherited.owner_is::<Foo>());
        assert!(find_field(Bar::type_info(), "base").is_none());
        assert!(find_field(Bar::type_info(), "").is_none());
    }

    #[test]
    fn primitives_have_no_fields() {
        assert!(matches!(
            list_fields(i32::type_info()),
            Err(AccessError::InvalidArgument { type_path: "i32" })
        ));
        assert!(find_field(i32::type_info(), "value").is_none());
        assert!(list_fields(String::type_info()).unwrap().is_empty());
    }
}
