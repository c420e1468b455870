use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// A string valued expression in generated code.
#[derive(Clone)]
pub(crate) enum StringExpr {
    /// Known at compile time, such as `"Foo"` or `module_path!()`.
    Const(TokenStream),
    /// A `&'static str` computed at run time.
    Borrowed(TokenStream),
    /// A `String` computed at run time.
    Owned(TokenStream),
}

impl StringExpr {
    #[inline]
    pub fn from_str(string: &str) -> Self {
        Self::Const(string.to_token_stream())
    }

    /// Returns tokens for a statically borrowed [string slice](str).
    pub fn into_borrowed(self) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => tokens,
            Self::Owned(owned) => quote! {
                &#owned as &str
            },
        }
    }

    /// Returns tokens for an [owned string](String).
    pub fn into_owned(self, vc_reflect_path: &syn::Path) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => {
                let alloc_utils_ = crate::path::alloc_utils_(vc_reflect_path);
                quote! {
                    #alloc_utils_::ToOwned::to_owned(#tokens)
                }
            }
            Self::Owned(owned) => owned,
        }
    }

    fn is_const(&self) -> bool {
        matches!(self, Self::Const(_))
    }

    /// Concatenate expressions.
    ///
    /// If all expressions are [`StringExpr::Const`] this will use [`concat`] to merge them.
    pub fn from_iter<T: IntoIterator<Item = StringExpr>>(
        iter: T,
        vc_reflect_path: &syn::Path,
    ) -> Self {
        let exprs: Vec<StringExpr> = iter.into_iter().collect();

        if exprs.iter().all(StringExpr::is_const) {
            let inner = exprs.into_iter().map(StringExpr::into_borrowed);
            Self::Const(quote! {
                ::core::concat!( #(#inner),* )
            })
        } else {
            let concat_ = crate::path::concat_(vc_reflect_path);
            let inner = exprs.into_iter().map(StringExpr::into_borrowed);
            Self::Owned(quote! {
                #concat_(&[ #(#inner),* ])
            })
        }
    }
}
