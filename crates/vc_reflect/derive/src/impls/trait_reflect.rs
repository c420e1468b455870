use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect` trait.
///
/// `set` converts through `FromReflect`, so it accepts whatever an
/// argument of this type would accept.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    reflect_kind_token: TokenStream,
    reflect_eq_tokens: TokenStream,
    reflect_debug_tokens: TokenStream,
) -> TokenStream {
    use crate::path::fp::ResultFP;

    let vc_reflect_path = meta.vc_reflect_path();

    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let from_reflect_ = crate::path::from_reflect_(vc_reflect_path);
    let alloc_utils_ = crate::path::alloc_utils_(vc_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(vc_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(vc_reflect_path);
    let reflect_owned_ = crate::path::reflect_owned_(vc_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #alloc_utils_::Box<dyn #reflect_>,
            ) -> #ResultFP<(), #alloc_utils_::Box<dyn #reflect_>> {
                *self = <Self as #from_reflect_>::take_from_reflect(value)?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind_token
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind_token(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#reflect_kind_token(self)
            }

            #[inline]
            fn reflect_owned(self: #alloc_utils_::Box<Self>) -> #reflect_owned_ {
                #reflect_owned_::#reflect_kind_token(self)
            }

            #reflect_eq_tokens

            #reflect_debug_tokens
        }
    }
}
