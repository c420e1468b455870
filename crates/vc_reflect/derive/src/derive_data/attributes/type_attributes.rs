use proc_macro2::Span;
use syn::{Attribute, LitStr, Path, meta::ParseNestedMeta};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Type level attributes.
///
/// - `#[reflect(type_path = "my_crate::foo::Bar")]`
/// - `#[reflect(methods)]`
/// - `#[reflect(auto_register)]`
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// Custom type path, without generics.
    pub type_path: Option<Path>,
    /// The type has a `#[reflect_methods]` impl block.
    pub methods: Option<Span>,
    /// Submit the type for `TypeRegistry::auto_register`.
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| res.parse_meta(meta))?;
            }
        }
        Ok(res)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("type_path") {
            let lit: LitStr = meta.value()?.parse()?;
            let path: Path = lit.parse()?;
            if path.leading_colon.is_some() {
                return Err(syn::Error::new(
                    lit.span(),
                    "type path should not start with `::`",
                ));
            }
            check_duplicate(&self.type_path, &meta)?;
            self.type_path = Some(path);
        } else if meta.path.is_ident("methods") {
            check_duplicate(&self.methods, &meta)?;
            self.methods = Some(meta.path.require_ident()?.span());
        } else if meta.path.is_ident("auto_register") {
            check_duplicate(&self.auto_register, &meta)?;
            self.auto_register = Some(meta.path.require_ident()?.span());
        } else {
            return Err(meta.error(
                "unknown type attribute, expected `type_path`, `methods` or `auto_register`",
            ));
        }
        Ok(())
    }
}

fn check_duplicate<T>(slot: &Option<T>, meta: &ParseNestedMeta) -> syn::Result<()> {
    if slot.is_some() {
        Err(meta.error("duplicate attribute"))
    } else {
        Ok(())
    }
}
