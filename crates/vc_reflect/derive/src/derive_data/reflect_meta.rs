use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, Token, Type, TypeGenerics, punctuated::Punctuated};

use super::TypeAttributes;
use crate::utils::StringExpr;

/// Everything about the annotated type that is not about its fields.
pub(crate) struct ReflectMeta<'a> {
    vc_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("vc_reflect_path", &self.vc_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            vc_reflect_path: crate::path::vc_reflect(),
            attrs,
            ident,
            generics,
            active_types: Vec::new(),
        }
    }

    /// Used by [`ReflectStruct`](crate::derive_data::ReflectStruct),
    /// set the active field types during initialization.
    #[inline]
    pub(super) fn set_active_types(&mut self, active_types: Vec<Type>) {
        self.active_types = active_types;
    }

    #[inline]
    pub fn vc_reflect_path(&self) -> &Path {
        &self.vc_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn real_ident(&self) -> &'a Ident {
        self.ident
    }

    /// Whether `Typed` and `TypePath` need per-instantiation storage.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// The custom path if any, split into module path and ident.
    fn custom_parts(&self) -> Option<(Option<String>, String)> {
        let path = self.attrs.type_path.as_ref()?;
        let mut segments: Vec<String> = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        let ident = segments.pop()?;
        let module = if segments.is_empty() {
            None
        } else {
            Some(segments.join("::"))
        };
        Some((module, ident))
    }

    #[inline]
    pub fn type_ident(&self) -> StringExpr {
        match self.custom_parts() {
            Some((_, ident)) => StringExpr::from_str(&ident),
            None => StringExpr::from_str(&self.ident.to_string()),
        }
    }

    #[inline]
    pub fn module_path(&self) -> Option<StringExpr> {
        match self.custom_parts() {
            Some((module, _)) => module.as_deref().map(StringExpr::from_str),
            None => Some(StringExpr::Const(quote!(::core::module_path!()))),
        }
    }

    /// Full path, with the type paths of generic parameters appended.
    pub fn type_path(&self) -> StringExpr {
        let ident = self.type_ident();
        let head = match self.module_path() {
            Some(module) => vec![module, StringExpr::from_str("::"), ident],
            None => vec![ident],
        };
        self.with_generic_args(head, |type_path_, param| {
            quote!(<#param as #type_path_>::type_path())
        })
    }

    /// Ident with the type names of generic parameters appended.
    pub fn type_name(&self) -> StringExpr {
        self.with_generic_args(vec![self.type_ident()], |type_path_, param| {
            quote!(<#param as #type_path_>::type_name())
        })
    }

    fn with_generic_args(
        &self,
        mut exprs: Vec<StringExpr>,
        arg: impl Fn(&TokenStream, &Ident) -> TokenStream,
    ) -> StringExpr {
        let type_path_ = crate::path::type_path_(&self.vc_reflect_path);
        let params: Vec<&Ident> = self.generics.type_params().map(|param| &param.ident).collect();

        if !params.is_empty() {
            exprs.push(StringExpr::from_str("<"));
            for (index, param) in params.into_iter().enumerate() {
                if index > 0 {
                    exprs.push(StringExpr::from_str(", "));
                }
                exprs.push(StringExpr::Borrowed(arg(&type_path_, param)));
            }
            exprs.push(StringExpr::from_str(">"));
        }
        StringExpr::from_iter(exprs, &self.vc_reflect_path)
    }

    /// Return the required generic parameters.
    ///
    /// The three parameters returned are `impl_generics`, `ty_generics`, `where_clause`.
    ///
    /// ## Type Params
    ///
    /// Every type parameter gets `TypePath`, and the type itself `Any + Send + Sync`.
    ///
    /// ## Field Types
    ///
    /// With `add_field_bounds`, every active field type (and the parent type)
    /// gets `Reflect + Typed + FromReflect`, which covers `Option<T>` fields
    /// whose impls need `T: FromReflect + Typed`.
    ///
    /// Nothing is added for non-generic types.
    pub fn split_generics(
        &self,
        add_field_bounds: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        use crate::path::fp::{AnyFP, SendFP, SyncFP};

        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut generic_where_clause = quote! { where };

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        if !self.impl_with_generic() {
            return (impl_generics, ty_generics, generic_where_clause);
        }

        generic_where_clause.extend(quote! { Self: #AnyFP + #SendFP + #SyncFP, });

        let vc_reflect_path = &self.vc_reflect_path;
        let type_path_ = crate::path::type_path_(vc_reflect_path);
        let mut predicates: Punctuated<TokenStream, Token![,]> = self
            .generics
            .type_params()
            .map(|param| {
                let ident = &param.ident;
                quote!(#ident: #type_path_)
            })
            .collect();

        if add_field_bounds {
            let reflect_ = crate::path::reflect_(vc_reflect_path);
            let typed_ = crate::path::typed_(vc_reflect_path);
            let from_reflect_ = crate::path::from_reflect_(vc_reflect_path);
            predicates.extend(
                self.active_types
                    .iter()
                    .map(|ty| quote!(#ty: #reflect_ + #typed_ + #from_reflect_)),
            );
        }

        generic_where_clause.extend(quote! { #predicates });

        (impl_generics, ty_generics, generic_where_clause)
    }
}
