use core::fmt;

/// Declared visibility of a reflected field or method.
///
/// Only `pub` items are [`Public`](Visibility::Public); `pub(crate)`,
/// `pub(super)` and private items are all [`Restricted`](Visibility::Restricted).
///
/// Field access ignores visibility. Method dispatch by name only sees
/// public methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    Public,
    #[default]
    Restricted,
}

impl Visibility {
    #[inline]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.pad("pub"),
            Self::Restricted => f.pad("restricted"),
        }
    }
}
