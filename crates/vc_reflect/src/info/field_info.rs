use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{Type, TypeInfo, Typed, Visibility};
use crate::ops::{ReflectMut, ReflectRef, upcast_mut_by_id, upcast_ref_by_id};

// -----------------------------------------------------------------------------
// NamedField

/// Descriptor of a named struct field.
///
/// Besides the name and the field type, a field knows the struct that
/// declares it (its owner). [`get`](Self::get) and
/// [`get_mut`](Self::get_mut) accept an instance of the owner or of any
/// type extending it, and never check [`visibility`](Self::visibility).
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::Typed};
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
///     bar: i32,
/// }
///
/// let field = Foo::type_info().as_struct().unwrap().field("foo").unwrap();
/// assert!(field.owner_is::<Foo>());
///
/// let bar = Bar { base: Foo { foo: "x".into() }, bar: 1 };
/// let value = field.get(&bar).unwrap();
/// assert_eq!(value.downcast_ref::<String>().unwrap(), "x");
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty: Type,
    name: &'static str,
    // Built on first access, a function pointer keeps construction const.
    type_info: fn() -> &'static TypeInfo,
    owner: Option<Type>,
    visibility: Visibility,
}

impl NamedField {
    crate::info::impl_type_fn!(ty);

    /// Describe a field `name` of type `T`.
    ///
    /// The owner is filled in by [`StructInfo::new`](crate::info::StructInfo::new).
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            ty: Type::of::<T>(),
            name,
            type_info: T::type_info,
            owner: None,
            visibility: Visibility::Restricted,
        }
    }

    #[inline]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[inline]
    pub(crate) const fn with_owner(mut self, owner: Type) -> Self {
        self.owner = Some(owner);
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The field type's descriptor.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// The declaring struct, `None` for a field not attached to a struct yet.
    #[inline]
    pub const fn owner(&self) -> Option<&Type> {
        self.owner.as_ref()
    }

    #[inline]
    pub fn owner_is<T: Any>(&self) -> bool {
        self.owner.is_some_and(|owner| owner.id() == TypeId::of::<T>())
    }

    /// Read this field from `instance`.
    ///
    /// Returns `None` when `instance` is neither the owner nor extends it.
    pub fn get<'a>(&self, instance: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        let owner = match self.owner {
            Some(owner) => upcast_ref_by_id(instance, owner.id())?,
            None => instance,
        };
        match owner.reflect_ref() {
            ReflectRef::Struct(value) => value.field(self.name),
            _ => None,
        }
    }

    /// Mutable form of [`get`](Self::get).
    pub fn get_mut<'a>(&self, instance: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
        let owner = match self.owner {
            Some(owner) => upcast_mut_by_id(instance, owner.id())?,
            None => instance,
        };
        match owner.reflect_mut() {
            ReflectMut::Struct(value) => value.field_mut(self.name),
            _ => None,
        }
    }
}
