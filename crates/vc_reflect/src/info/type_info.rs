use core::fmt;
use core::iter::FusedIterator;

use thiserror::Error;

use crate::info::{MethodInfo, NamedField, Type};
use crate::info::{NullableInfo, OpaqueInfo, PrimitiveInfo, StructInfo};

// -----------------------------------------------------------------------------
// ReflectKind

/// The "kind" of a reflected type, one per [`TypeInfo`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    Nullable,
    Primitive,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Nullable => f.pad("Nullable"),
            Self::Primitive => f.pad("Primitive"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// A [`TypeInfo`] was not of the expected kind.
#[derive(Debug, Error)]
#[error("reflect kind mismatch: expected {expected}, received {received}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// The run-time descriptor of a reflected type.
///
/// Obtained with [`Typed::type_info`] for a known type, with
/// [`DynamicTyped::reflect_type_info`] for a `dyn Reflect`, or from a
/// [`TypeRegistry`]. Every descriptor is `'static` and built once.
///
/// Besides the shape of the type, a descriptor answers the questions the
/// [`access`](crate::access) layer needs: declared
/// [`fields`](Self::fields) and [`methods`](Self::methods), the
/// [`parent`](Self::parent) chain, [`is_primitive`](Self::is_primitive) and
/// [`is_assignable_from`](Self::is_assignable_from).
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
/// [`TypeRegistry`]: crate::registry::TypeRegistry
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Nullable(NullableInfo),
    Primitive(PrimitiveInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Narrow to the kind specific descriptor.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

macro_rules! impl_is_method {
    ($name:ident : $kind:ident) => {
        #[inline]
        pub const fn $name(&self) -> bool {
            matches!(self, Self::$kind(..))
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_nullable: Nullable => NullableInfo);
    impl_cast_method!(as_primitive: Primitive => PrimitiveInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    impl_is_method!(is_struct: Struct);
    impl_is_method!(is_nullable: Nullable);
    impl_is_method!(is_primitive: Primitive);
    impl_is_method!(is_opaque: Opaque);

    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Nullable(info) => info.ty(),
            Self::Primitive(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Nullable(_) => ReflectKind::Nullable,
            Self::Primitive(_) => ReflectKind::Primitive,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    #[inline]
    pub const fn ty_id(&self) -> core::any::TypeId {
        self.ty().id()
    }

    #[inline]
    pub fn type_is<T: core::any::Any>(&self) -> bool {
        self.ty().is::<T>()
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    /// Fields declared by this type itself, empty for non-structs.
    #[inline]
    pub fn fields(&self) -> &[NamedField] {
        match self {
            Self::Struct(info) => info.fields(),
            _ => &[],
        }
    }

    /// Methods declared by this type itself, public or not.
    #[inline]
    pub fn methods(&self) -> &[MethodInfo] {
        match self {
            Self::Struct(info) => info.methods(),
            _ => &[],
        }
    }

    /// The type this one extends, if any.
    #[inline]
    pub fn parent(&self) -> Option<&'static TypeInfo> {
        match self {
            Self::Struct(info) => info.parent(),
            _ => None,
        }
    }

    /// This type followed by its parent, grandparent and so on.
    #[inline]
    pub fn ancestors(&'static self) -> Ancestors {
        Ancestors { next: Some(self) }
    }

    /// Whether a value of type `source` can be stored where `self` is
    /// expected without any conversion besides wrapping.
    ///
    /// - every type is assignable from itself;
    /// - a struct is assignable from every struct extending it;
    /// - a nullable is assignable from null, from its inner type's
    ///   assignable types and from nullables wrapping them.
    ///
    /// Primitive widening is not assignability, see
    /// [`is_promotable`](crate::access::is_promotable).
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_reflect::info::Typed;
    ///
    /// assert!(<Option<i32>>::type_info().is_assignable_from(i32::type_info()));
    /// assert!(!i32::type_info().is_assignable_from(<Option<i32>>::type_info()));
    /// assert!(!i64::type_info().is_assignable_from(i32::type_info()));
    /// ```
    pub fn is_assignable_from(&self, source: &TypeInfo) -> bool {
        if self.ty_id() == source.ty_id() {
            return true;
        }
        match (self, source) {
            (Self::Nullable(target), Self::Nullable(source)) => match source.inner() {
                None => true,
                Some(source) => target
                    .inner()
                    .is_some_and(|target| target.is_assignable_from(source)),
            },
            (Self::Nullable(target), _) => target
                .inner()
                .is_some_and(|target| target.is_assignable_from(source)),
            (Self::Struct(_), Self::Struct(source)) => {
                let mut parent = source.parent();
                while let Some(info) = parent {
                    if info.ty_id() == self.ty_id() {
                        return true;
                    }
                    parent = info.parent();
                }
                false
            }
            _ => false,
        }
    }
}

// -----------------------------------------------------------------------------
// Ancestors

/// Iterator returned by [`TypeInfo::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors {
    next: Option<&'static TypeInfo>,
}

impl Iterator for Ancestors {
    type Item = &'static TypeInfo;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

impl FusedIterator for Ancestors {}
