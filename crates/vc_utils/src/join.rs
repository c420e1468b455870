//! Rendering sequences into delimited strings.

use alloc::string::String;
use core::fmt::{self, Display, Write};

/// Lazily renders the items of a cloneable iterator separated by `separator`.
///
/// Every item is formatted through its [`Display`] impl. Nothing is
/// allocated until the value is formatted.
///
/// # Examples
///
/// ```
/// use vc_utils::Join;
///
/// let text = format!("({})", Join::new(", ", [1, 2, 3]));
/// assert_eq!(text, "(1, 2, 3)");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Join<'a, I> {
    separator: &'a str,
    items: I,
}

impl<'a, I> Join<'a, I>
where
    I: IntoIterator + Clone,
    I::Item: Display,
{
    #[inline]
    pub const fn new(separator: &'a str, items: I) -> Self {
        Self { separator, items }
    }
}

impl<I> Display for Join<'_, I>
where
    I: IntoIterator + Clone,
    I::Item: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.items.clone().into_iter();
        if let Some(first) = iter.next() {
            Display::fmt(&first, f)?;
            for item in iter {
                f.write_str(self.separator)?;
                Display::fmt(&item, f)?;
            }
        }
        Ok(())
    }
}

/// Renders `items` separated by `separator` into a new [`String`].
///
/// An empty sequence renders as the empty string.
///
/// # Examples
///
/// ```
/// assert_eq!(vc_utils::join("-", ["a", "b"]), "a-b");
/// assert_eq!(vc_utils::join("-", Vec::<u8>::new()), "");
/// ```
pub fn join<I>(separator: &str, items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        // Writing into a `String` cannot fail.
        let _ = write!(out, "{item}");
    }
    out
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Join, join};
    use alloc::format;
    use alloc::vec;

    #[test]
    fn single_item_has_no_separator() {
        assert_eq!(join(", ", ["only"]), "only");
    }

    #[test]
    fn lazy_matches_eager() {
        let items = vec![1.5_f32, 2.0, -3.25];
        assert_eq!(format!("{}", Join::new(" | ", &items)), join(" | ", &items));
    }
}
