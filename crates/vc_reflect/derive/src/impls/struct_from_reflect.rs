use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate `FromReflect` for structs.
///
/// Accepts the struct itself, optionally inside nullables, and any struct
/// extending it. Field values are never rebuilt one by one.
pub(crate) fn impl_struct_from_reflect(meta: &ReflectMeta) -> TokenStream {
    use crate::path::fp::ResultFP;

    let vc_reflect_path = meta.vc_reflect_path();
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let from_reflect_ = crate::path::from_reflect_(vc_reflect_path);
    let alloc_utils_ = crate::path::alloc_utils_(vc_reflect_path);
    let is_declared_ = crate::path::is_declared_(vc_reflect_path);
    let take_declared_ = crate::path::take_declared_(vc_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #from_reflect_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn is_acceptable(value: &dyn #reflect_) -> bool {
                #is_declared_::<Self>(value)
            }

            fn take_from_reflect(
                value: #alloc_utils_::Box<dyn #reflect_>,
            ) -> #ResultFP<Self, #alloc_utils_::Box<dyn #reflect_>> {
                if #is_declared_::<Self>(&*value) {
                    #take_declared_::<Self>(value)
                } else {
                    #ResultFP::Err(value)
                }
            }
        }
    }
}
