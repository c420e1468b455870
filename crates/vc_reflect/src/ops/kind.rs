use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{Nullable, Struct};

macro_rules! impl_kind_fn {
    () => {
        pub fn kind(&self) -> ReflectKind {
            match self {
                Self::Struct(_) => ReflectKind::Struct,
                Self::Nullable(_) => ReflectKind::Nullable,
                Self::Primitive(_) => ReflectKind::Primitive,
                Self::Opaque(_) => ReflectKind::Opaque,
            }
        }
    };
}

// -----------------------------------------------------------------------------
// ReflectRef

/// A borrowed reflected value, split by kind.
///
/// Returned by [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Nullable(&'a dyn Nullable),
    Primitive(&'a dyn Reflect),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    impl_kind_fn!();

    pub fn as_struct(self) -> Result<&'a dyn Struct, ReflectKindError> {
        match self {
            Self::Struct(value) => Ok(value),
            _ => Err(ReflectKindError {
                expected: ReflectKind::Struct,
                received: self.kind(),
            }),
        }
    }

    pub fn as_nullable(self) -> Result<&'a dyn Nullable, ReflectKindError> {
        match self {
            Self::Nullable(value) => Ok(value),
            _ => Err(ReflectKindError {
                expected: ReflectKind::Nullable,
                received: self.kind(),
            }),
        }
    }

    /// Forget the kind again.
    pub fn into_reflect(self) -> &'a dyn Reflect {
        match self {
            Self::Struct(value) => value,
            Self::Nullable(value) => value,
            Self::Primitive(value) | Self::Opaque(value) => value,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutably borrowed reflected value, split by kind.
///
/// Returned by [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    Nullable(&'a mut dyn Nullable),
    Primitive(&'a mut dyn Reflect),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    impl_kind_fn!();

    pub fn as_struct(self) -> Result<&'a mut dyn Struct, ReflectKindError> {
        match self {
            Self::Struct(value) => Ok(value),
            other => Err(ReflectKindError {
                expected: ReflectKind::Struct,
                received: other.kind(),
            }),
        }
    }

    pub fn as_nullable(self) -> Result<&'a mut dyn Nullable, ReflectKindError> {
        match self {
            Self::Nullable(value) => Ok(value),
            other => Err(ReflectKindError {
                expected: ReflectKind::Nullable,
                received: other.kind(),
            }),
        }
    }

    /// Forget the kind again.
    pub fn into_reflect(self) -> &'a mut dyn Reflect {
        match self {
            Self::Struct(value) => value,
            Self::Nullable(value) => value,
            Self::Primitive(value) | Self::Opaque(value) => value,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectOwned

/// An owned reflected value, split by kind.
///
/// Returned by [`Reflect::reflect_owned`].
pub enum ReflectOwned {
    Struct(Box<dyn Struct>),
    Nullable(Box<dyn Nullable>),
    Primitive(Box<dyn Reflect>),
    Opaque(Box<dyn Reflect>),
}

impl ReflectOwned {
    impl_kind_fn!();

    /// Forget the kind again.
    pub fn into_reflect(self) -> Box<dyn Reflect> {
        match self {
            Self::Struct(value) => value,
            Self::Nullable(value) => value,
            Self::Primitive(value) | Self::Opaque(value) => value,
        }
    }
}
