use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, GenericParam, Ident, spanned::Spanned};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

/// A named field of the annotated struct.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    /// Named fields always have an ident.
    #[inline]
    pub fn ident(&self) -> &Ident {
        self.data
            .ident
            .as_ref()
            .unwrap_or_else(|| unreachable!("only named fields are collected"))
    }

    /// `Public` for `pub` fields, `Restricted` for everything else.
    pub fn visibility_tokens(&self, vc_reflect_path: &syn::Path) -> TokenStream {
        visibility_tokens(&self.data.vis, vc_reflect_path)
    }
}

pub(crate) fn visibility_tokens(vis: &syn::Visibility, vc_reflect_path: &syn::Path) -> TokenStream {
    let visibility_ = crate::path::visibility_(vc_reflect_path);
    match vis {
        syn::Visibility::Public(_) => quote!(#visibility_::Public),
        _ => quote!(#visibility_::Restricted),
    }
}

/// A struct with named fields (or a unit struct), ready for code generation.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        for param in &input.generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(lifetime) => {
                    return Err(syn::Error::new(
                        lifetime.span(),
                        "reflected types must be `'static`, lifetime parameters are not supported",
                    ));
                }
                GenericParam::Const(param) => {
                    return Err(syn::Error::new(
                        param.span(),
                        "const parameters are not supported by `#[derive(Reflect)]`",
                    ));
                }
            }
        }

        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => Some(&fields.named),
                Fields::Unit => None,
                Fields::Unnamed(fields) => {
                    return Err(syn::Error::new(
                        fields.span(),
                        "tuple structs are not supported by `#[derive(Reflect)]`, use named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "enums are not supported by `#[derive(Reflect)]`",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "unions are not supported by `#[derive(Reflect)]`",
                ));
            }
        };

        let mut fields = Vec::new();
        let mut parent_span = None;
        for data in named.into_iter().flatten() {
            let attrs = FieldAttributes::parse_attrs(&data.attrs)?;
            if let Some(span) = attrs.extends {
                if parent_span.replace(span).is_some() {
                    return Err(syn::Error::new(span, "a struct can extend only one type"));
                }
            }
            fields.push(StructField { data, attrs });
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let mut meta = ReflectMeta::new(attrs, &input.ident, &input.generics);
        meta.set_active_types(
            fields
                .iter()
                .filter(|field| field.attrs.ignore.is_none())
                .map(|field| field.data.ty.clone())
                .collect(),
        );

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Declared fields visible to reflection: not ignored and not the parent.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields
            .iter()
            .filter(|field| field.attrs.ignore.is_none() && field.attrs.extends.is_none())
    }

    /// The `#[reflect(extends)]` field.
    pub fn parent_field(&self) -> Option<&StructField<'a>> {
        self.fields.iter().find(|field| field.attrs.extends.is_some())
    }
}
