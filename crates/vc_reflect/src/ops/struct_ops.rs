use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::iter::FusedIterator;

use crate::Reflect;
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Struct

/// Access to the declared fields of a struct and to the ancestor it extends.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect). Field
/// lookups here only see fields declared by the struct itself; inherited
/// fields live in the [`parent`](Struct::parent) value.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Animal {
///     legs: u8,
/// }
///
/// #[derive(Reflect)]
/// struct Dog {
///     #[reflect(extends)]
///     animal: Animal,
///     name: String,
/// }
///
/// let dog = Dog { animal: Animal { legs: 4 }, name: "Rex".into() };
/// assert_eq!(dog.field_len(), 1);
/// assert!(dog.field("legs").is_none());
/// assert_eq!(dog.parent().unwrap().downcast_ref::<Animal>().unwrap().legs, 4);
/// ```
pub trait Struct: Reflect {
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    fn name_at(&self, index: usize) -> Option<&str>;

    fn field_len(&self) -> usize;

    /// The embedded value of the struct this one extends.
    #[inline]
    fn parent(&self) -> Option<&dyn Reflect> {
        None
    }

    #[inline]
    fn parent_mut(&mut self) -> Option<&mut dyn Reflect> {
        None
    }

    /// Give up everything but the embedded ancestor value.
    #[inline]
    fn into_parent(self: Box<Self>) -> Option<Box<dyn Reflect>> {
        None
    }
}

impl dyn Struct {
    /// Declared field values in declaration order.
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter {
            value: self,
            index: 0,
        }
    }
}

/// Iterator returned by [`iter_fields`](dyn Struct::iter_fields).
pub struct StructFieldIter<'a> {
    value: &'a dyn Struct,
    index: usize,
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    fn next(&mut self) -> Option<Self::Item> {
        let field = self.value.field_at(self.index)?;
        self.index += 1;
        Some(field)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.value.field_len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}

impl FusedIterator for StructFieldIter<'_> {}

// -----------------------------------------------------------------------------
// Upcasting

/// Walk from `value` up its embedded ancestors until one has type `id`.
pub fn upcast_ref_by_id(value: &dyn Reflect, id: TypeId) -> Option<&dyn Reflect> {
    if value.ty_id() == id {
        return Some(value);
    }
    match value.reflect_ref() {
        ReflectRef::Struct(value) => upcast_ref_by_id(value.parent()?, id),
        _ => None,
    }
}

/// Mutable form of [`upcast_ref_by_id`].
pub fn upcast_mut_by_id(value: &mut dyn Reflect, id: TypeId) -> Option<&mut dyn Reflect> {
    if value.ty_id() == id {
        return Some(value);
    }
    match value.reflect_mut() {
        ReflectMut::Struct(value) => upcast_mut_by_id(value.parent_mut()?, id),
        _ => None,
    }
}

/// View `value` as `T`, which is its own type or one it extends.
///
/// ```
/// use vc_reflect::{derive::Reflect, ops::upcast_ref};
///
/// #[derive(Reflect)]
/// struct Base {
///     id: u32,
/// }
///
/// #[derive(Reflect)]
/// struct Derived {
///     #[reflect(extends)]
///     base: Base,
/// }
///
/// let derived = Derived { base: Base { id: 9 } };
/// assert_eq!(upcast_ref::<Base>(&derived).unwrap().id, 9);
/// assert!(upcast_ref::<String>(&derived).is_none());
/// ```
#[inline]
pub fn upcast_ref<T: Any>(value: &dyn Reflect) -> Option<&T> {
    upcast_ref_by_id(value, TypeId::of::<T>())?.downcast_ref::<T>()
}

/// Mutable form of [`upcast_ref`].
#[inline]
pub fn upcast_mut<T: Any>(value: &mut dyn Reflect) -> Option<&mut T> {
    upcast_mut_by_id(value, TypeId::of::<T>())?.downcast_mut::<T>()
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::derive::{Reflect, reflect_methods};
    use crate::info::{TypePath, Typed};
    use crate::ops::{ArgList, InvokeError, Struct};
    use crate::{FromReflect, args};

    #[derive(Reflect)]
    struct Pair<T> {
        first: T,
        second: Option<T>,
    }

    #[derive(Reflect)]
    #[reflect(type_path = "shop::model::Item")]
    struct Item {
        pub name: String,
        #[reflect(ignore)]
        cache: Vec<u8>,
        stock: u32,
    }

    #[derive(Reflect)]
    #[reflect(methods)]
    struct Calc;

    #[reflect_methods]
    impl Calc {
        pub fn add(a: i32, b: i32) -> i32 {
            a + b
        }

        #[reflect(ignore)]
        pub fn name(&self) -> &str {
            "calc"
        }
    }

    #[test]
    fn declared_fields_in_order() {
        let mut item = Item {
            name: String::from("pen"),
            cache: Vec::new(),
            stock: 3,
        };
        assert_eq!(item.field_len(), 2);
        assert_eq!(item.name_at(0), Some("name"));
        assert_eq!(item.name_at(1), Some("stock"));
        assert!(item.field("cache").is_none());
        assert!(item.cache.is_empty());

        *item.field_mut("stock").unwrap().downcast_mut::<u32>().unwrap() = 7;
        assert_eq!(item.stock, 7);

        let fields = <dyn Struct>::iter_fields(&item);
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn custom_type_path() {
        assert_eq!(Item::type_path(), "shop::model::Item");
        assert_eq!(Item::type_name(), "Item");
        assert_eq!(Item::module_path(), Some("shop::model"));

        let info = Item::type_info().as_struct().unwrap();
        assert!(info.field("name").unwrap().visibility().is_public());
        assert!(!info.field("stock").unwrap().visibility().is_public());
    }

    #[test]
    fn generic_paths_name_their_arguments() {
        assert_eq!(<Pair<i32>>::type_name(), "Pair<i32>");
        assert!(<Pair<i32>>::type_path().ends_with("::Pair<i32>"));
        assert_ne!(<Pair<i32>>::type_info().ty_id(), <Pair<u8>>::type_info().ty_id());

        let mut pair = Pair { first: 1_i64, second: None };
        pair.field_mut("second").unwrap().set(Box::new(5_i32)).unwrap();
        assert_eq!(pair.second, Some(5));
    }

    #[test]
    fn structs_convert_only_from_themselves() {
        let value = Item {
            name: String::from("cup"),
            cache: Vec::new(),
            stock: 0,
        };
        assert!(!<Item as FromReflect>::is_acceptable(&1_u32));
        assert!(<Item as FromReflect>::is_acceptable(&Some(value)));
        assert!(Item::take_from_reflect(Box::new(1_u32)).is_err());
    }

    #[test]
    fn unit_structs_carry_methods() {
        let info = Calc::type_info();
        assert!(info.fields().is_empty());
        assert_eq!(info.methods().len(), 1);

        let add = &info.methods()[0];
        assert!(!add.has_receiver());
        assert_eq!(Calc.name(), "calc");
        let mut args: ArgList = args![2_i32, 'a'];
        let sum = add.invoke(&mut Calc, &mut args).unwrap();
        assert_eq!(sum.downcast_ref::<i32>(), Some(&99));

        let mut args = args![2_i64, 1_i32];
        let err = add.invoke(&mut Calc, &mut args).unwrap_err();
        assert_eq!(err, InvokeError::ArgumentType { index: 0 });
        assert_eq!(args.len(), 2);
    }
}
