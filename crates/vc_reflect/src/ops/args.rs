use alloc::boxed::Box;
use alloc::vec::{self, Vec};
use core::ops::Index;

use thiserror::Error;

use crate::info::TypePath;
use crate::ops::upcast_mut;
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// InvokeError

/// Low-level rejection of a call by a method's invoker.
///
/// Carries no explanation beyond the failing position. The
/// [`access`](crate::access) layer turns argument failures into
/// [`ArgumentDiagnostic`](crate::access::ArgumentDiagnostic)s.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvokeError {
    #[error("wrong number of arguments: expected {expected}, received {received}")]
    ArgumentCount { expected: usize, received: usize },
    #[error("argument type mismatch at position {index}")]
    ArgumentType { index: usize },
    #[error("object of type `{actual}` is not an instance of `{expected}`")]
    TargetMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl InvokeError {
    /// Whether the failure is about the arguments rather than the target.
    #[inline]
    pub const fn is_argument_error(&self) -> bool {
        matches!(self, Self::ArgumentCount { .. } | Self::ArgumentType { .. })
    }
}

// -----------------------------------------------------------------------------
// ArgList

/// Positional arguments of a reflected call.
///
/// Build one with [`args!`](crate::args) or from a `Vec<Box<dyn Reflect>>`.
///
/// # Examples
///
/// ```
/// use vc_reflect::{args, ops::Null};
///
/// let list = args![String::from("foo"), 42_i32, Null];
/// assert_eq!(list.len(), 3);
/// assert!(list[2].is_null());
/// assert_eq!(list.to_string(), "foo, 42, null");
/// ```
#[derive(Debug, Default)]
pub struct ArgList {
    values: Vec<Box<dyn Reflect>>,
}

impl ArgList {
    #[inline]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, value: Box<dyn Reflect>) {
        self.values.push(value);
    }

    /// Builder form of [`push`](Self::push).
    #[inline]
    pub fn with<T: Reflect>(mut self, value: T) -> Self {
        self.values.push(Box::new(value));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.values.get(index).map(|value| &**value)
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &dyn Reflect> + Clone {
        self.values.iter().map(|value| &**value)
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Box<dyn Reflect>> {
        self.values
    }

    /// Fail with [`InvokeError::ArgumentCount`] unless there are exactly
    /// `expected` arguments.
    #[inline]
    pub fn expect_len(&self, expected: usize) -> Result<(), InvokeError> {
        if self.values.len() == expected {
            Ok(())
        } else {
            Err(InvokeError::ArgumentCount {
                expected,
                received: self.values.len(),
            })
        }
    }

    /// Fail with [`InvokeError::ArgumentType`] unless the argument at
    /// `index` converts into `T`.
    #[inline]
    pub fn expect<T: FromReflect>(&self, index: usize) -> Result<(), InvokeError> {
        match self.get(index) {
            Some(value) if T::is_acceptable(value) => Ok(()),
            _ => Err(InvokeError::ArgumentType { index }),
        }
    }

    /// Move every argument out, leaving the list empty.
    #[inline]
    pub fn take_all(&mut self) -> ArgDrain {
        ArgDrain {
            iter: core::mem::take(&mut self.values).into_iter(),
            index: 0,
        }
    }
}

impl Index<usize> for ArgList {
    type Output = dyn Reflect;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &*self.values[index]
    }
}

impl From<Vec<Box<dyn Reflect>>> for ArgList {
    #[inline]
    fn from(values: Vec<Box<dyn Reflect>>) -> Self {
        Self { values }
    }
}

impl FromIterator<Box<dyn Reflect>> for ArgList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Reflect>>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl core::fmt::Display for ArgList {
    /// Arguments joined by `", "`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&vc_utils::Join::new(", ", self.iter()), f)
    }
}

// -----------------------------------------------------------------------------
// ArgDrain

/// Consumes arguments in order, converting each into its parameter type.
///
/// Returned by [`ArgList::take_all`].
pub struct ArgDrain {
    iter: vec::IntoIter<Box<dyn Reflect>>,
    index: usize,
}

impl ArgDrain {
    /// Convert the next argument into `T`.
    pub fn next_as<T: FromReflect>(&mut self) -> Result<T, InvokeError> {
        let index = self.index;
        self.index += 1;
        let value = self.iter.next().ok_or(InvokeError::ArgumentCount {
            expected: index + 1,
            received: index,
        })?;
        T::take_from_reflect(value).map_err(|_| InvokeError::ArgumentType { index })
    }
}

// -----------------------------------------------------------------------------
// Receiver

/// The receiver of a method declared on `T`, which may be `target` itself
/// or an ancestor embedded in it.
///
/// Used by invokers generated with
/// [`#[reflect_methods]`](crate::derive::reflect_methods).
pub fn receiver_mut<T: Reflect + TypePath>(target: &mut dyn Reflect) -> Result<&mut T, InvokeError> {
    let actual = target.reflect_type_path();
    upcast_mut::<T>(target).ok_or(InvokeError::TargetMismatch {
        expected: T::type_path(),
        actual,
    })
}

// -----------------------------------------------------------------------------
// args!

/// Build an [`ArgList`](crate::ops::ArgList) from plain values.
///
/// ```
/// use vc_reflect::args;
///
/// let empty = args![];
/// assert!(empty.is_empty());
///
/// let two = args![1_u8, 'c'];
/// assert_eq!(two.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::ops::ArgList::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::ops::ArgList::from(
            $crate::__macro_exports::alloc_utils::vec![
                $($crate::Reflect::into_boxed_reflect($value)),+
            ]
        )
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{ArgList, InvokeError};
    use alloc::string::{String, ToString};

    #[test]
    fn expect_checks_without_consuming() {
        let list = crate::args![String::from("a"), 3_i16];
        assert_eq!(list.expect_len(2), Ok(()));
        assert_eq!(list.expect::<String>(0), Ok(()));
        assert_eq!(list.expect::<i64>(1), Ok(()));
        assert_eq!(list.expect::<i8>(1), Err(InvokeError::ArgumentType { index: 1 }));
        assert_eq!(
            list.expect_len(3),
            Err(InvokeError::ArgumentCount { expected: 3, received: 2 })
        );
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn drain_converts_in_order() {
        let mut list = ArgList::new().with(7_u8).with('z');
        let mut drain = list.take_all();
        assert_eq!(drain.next_as::<u8>(), Ok(7));
        assert_eq!(drain.next_as::<char>(), Ok('z'));
        assert!(matches!(drain.next_as::<u8>(), Err(InvokeError::ArgumentCount { .. })));
        assert!(list.is_empty());
    }

    #[test]
    fn renders_like_a_call() {
        let list = crate::args![String::from("foo"), 42_i32];
        assert_eq!(list.to_string(), "foo, 42");
        assert_eq!(ArgList::new().to_string(), "");
    }
}
