use crate::info::{Type, TypeInfo, TypePath, Typed};

/// Descriptor of a value that may hold nothing.
///
/// `Option<T>` describes its `T` as the inner type. The universal
/// [`Null`](crate::ops::Null) value has no inner type.
#[derive(Clone, Debug)]
pub struct NullableInfo {
    ty: Type,
    inner: Option<fn() -> &'static TypeInfo>,
}

impl NullableInfo {
    crate::info::impl_type_fn!(ty);

    /// Describe nullable `T` wrapping `I`.
    #[inline]
    pub const fn new<T: TypePath, I: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            inner: Some(I::type_info),
        }
    }

    /// Describe a nullable that can only ever be null.
    #[inline]
    pub const fn null<T: TypePath>() -> Self {
        Self {
            ty: Type::of::<T>(),
            inner: None,
        }
    }

    #[inline]
    pub fn inner(&self) -> Option<&'static TypeInfo> {
        self.inner.map(|inner| inner())
    }
}
