//! Reflective access to fields and methods of live values.
//!
//! Built on two lookups over a [`TypeInfo`](crate::info::TypeInfo) and its
//! ancestors:
//!
//! - [`find_field`] / [`list_fields`]: fields, nearest declaration first;
//! - [`is_promotable`]: whether a value of one type may go where another
//!   is expected, with boxed primitives and numeric widening.
//!
//! On top of these:
//!
//! - [`get_field`], [`set_field`]: one field, anywhere in the hierarchy;
//! - [`get_deep`], [`set_deep`], [`get_deep_as`]: dot separated paths such
//!   as `"customer.address.zip"`;
//! - [`invoke_by_name`]: call the first public method with a name, with
//!   [`diagnose`] explaining rejected arguments;
//! - [`ReflectAccess`]: the same as methods on every reflected value.
//!
//! # Examples
//!
//! ```
//! use vc_reflect::{args, access::ReflectAccess, derive::{Reflect, reflect_methods}};
//!
//! #[derive(Reflect, Default)]
//! struct Third {
//!     value: i32,
//! }
//!
//! #[derive(Reflect, Default)]
//! struct Second {
//!     third: Option<Third>,
//! }
//!
//! #[derive(Reflect, Default)]
//! #[reflect(methods)]
//! struct First {
//!     second: Option<Second>,
//! }
//!
//! #[reflect_methods]
//! impl First {
//!     pub fn describe(&self, prefix: String, width: i64) -> String {
//!         format!("{prefix}:{width}")
//!     }
//! }
//!
//! let mut first = First::default();
//! first.set_deep("second", Second::default()).unwrap();
//! first.set_deep("second.third", Third::default()).unwrap();
//! first.set_deep("second.third.value", 12_i32).unwrap();
//! assert_eq!(first.get_deep_as::<i32>("second.third.value"), Ok(&12));
//!
//! // `i32` widens into the `i64` parameter.
//! let text = first.invoke("describe", args![String::from("w"), 8_i32]).unwrap();
//! assert_eq!(text.downcast_ref::<String>().unwrap(), "w:8");
//!
//! let err = first.invoke("describe", args![String::from("w")]).unwrap_err();
//! assert!(err.to_string().contains("expected 2 args, received 1"));
//! ```

// -----------------------------------------------------------------------------
// Modules

mod error;
mod ext;
mod field;
mod hierarchy;
mod invoke;
mod path;
mod promotion;

// -----------------------------------------------------------------------------
// Exports

pub use error::{AccessError, ArgumentDiagnostic};
pub use ext::ReflectAccess;
pub use field::{get_field, get_field_mut, set_field};
pub use hierarchy::{find_field, find_method, list_fields, list_methods};
pub use invoke::{assert_method_args, diagnose, invoke_by_name};
pub use path::{get_deep, get_deep_as, get_deep_mut, set_deep};
pub use promotion::{box_type, is_promotable};
