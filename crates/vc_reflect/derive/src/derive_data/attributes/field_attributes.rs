use proc_macro2::Span;
use syn::Attribute;

use crate::REFLECT_ATTRIBUTE_NAME;

/// Field level attributes.
///
/// - `#[reflect(extends)]`: the field embeds the parent type.
/// - `#[reflect(ignore)]`: the field is invisible to reflection.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub extends: Option<Span>,
    pub ignore: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let slot = if meta.path.is_ident("extends") {
                    &mut res.extends
                } else if meta.path.is_ident("ignore") {
                    &mut res.ignore
                } else {
                    return Err(meta.error("unknown field attribute, expected `extends` or `ignore`"));
                };
                if slot.is_some() {
                    return Err(meta.error("duplicate attribute"));
                }
                *slot = Some(meta.path.require_ident()?.span());
                Ok(())
            })?;
        }

        if let (Some(_), Some(span)) = (res.extends, res.ignore) {
            return Err(syn::Error::new(span, "an `extends` field cannot be ignored"));
        }
        Ok(res)
    }
}
