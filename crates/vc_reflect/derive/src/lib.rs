//! See following macros:
//!
//! - [`Reflect`]
//! - [`reflect_methods`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemImpl, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Full Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields (or a unit struct):
///
/// - `TypePath`
/// - `Typed`
/// - `Struct`
/// - `Reflect`
/// - `FromReflect`
///
/// Tuple structs, enums and unions are rejected, as are lifetime and const
/// parameters. Type parameters are supported.
///
/// ## Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "shop::model::Item")]
/// struct Item { /* ... */ }
/// ```
///
/// The path must not start with `::` and must not contain generics, the
/// type paths of generic arguments are appended automatically.
///
/// ## Inheritance
///
/// A struct extends another one by embedding it in a field marked
/// `extends`. The field itself is not a declared field, its own fields
/// and methods are inherited instead.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Base {
///     id: u64,
/// }
///
/// #[derive(Reflect)]
/// struct Item {
///     #[reflect(extends)]
///     base: Base,
///     name: String,
/// }
/// ```
///
/// At most one field may be marked `extends`.
///
/// ## Ignored Fields
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Item {
///     name: String,
///     #[reflect(ignore)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// Ignored fields are invisible to reflection, they are neither listed nor
/// reachable by path. Their type does not need to implement `Reflect`.
///
/// ## Methods
///
/// `#[reflect(methods)]` puts the methods of a [`#[reflect_methods]`](macro@reflect_methods)
/// impl block into the type's `StructInfo`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(methods)]
/// struct Counter {
///     count: i32,
/// }
///
/// #[reflect_methods]
/// impl Counter {
///     pub fn add(&mut self, by: i32) -> i32 {
///         self.count += by;
///         self.count
///     }
/// }
/// ```
///
/// ## Auto Registration
///
/// With the `auto_register` feature, `#[reflect(auto_register)]` submits a
/// non-generic type so that `TypeRegistry::auto_register` picks it up.
/// The attribute is ignored on generic types.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}

/// # Reflected Methods
///
/// Applied to an inherent impl block, implements `ReflectMethods` for its
/// self type. The block itself is emitted unchanged apart from
/// `#[reflect(...)]` attributes on methods.
///
/// Every method must take `&self`, `&mut self` or no receiver at all, and
/// pass owned values only. Async, unsafe and generic methods are rejected.
/// Mark a method `#[reflect(ignore)]` to leave it out.
///
/// ```rust, ignore
/// #[reflect_methods]
/// impl Account {
///     pub fn deposit(&mut self, amount: i64) -> i64 { /* ... */ }
///
///     fn audit(&self) -> bool { /* ... */ }
///
///     pub fn open(owner: String) -> Account { /* ... */ }
///
///     #[reflect(ignore)]
///     pub fn owner(&self) -> &str { /* ... */ }
/// }
/// ```
///
/// Invokers check the argument count, then every argument's type, and
/// only then convert the arguments and call the method.
#[proc_macro_attribute]
pub fn reflect_methods(args: TokenStream, input: TokenStream) -> TokenStream {
    if !args.is_empty() {
        let args = proc_macro2::TokenStream::from(args);
        return syn::Error::new_spanned(args, "`#[reflect_methods]` takes no arguments")
            .into_compile_error()
            .into();
    }

    let item = parse_macro_input!(input as ItemImpl);

    impls::match_methods_impls(item)
}
