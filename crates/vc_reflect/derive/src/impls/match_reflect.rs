use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, ItemImpl};

use crate::derive_data::{ReflectMethods, ReflectStruct};

/// Provided for `#[derive(Reflect)]`.
pub(crate) fn match_reflect_impls(ast: DeriveInput) -> TokenStream {
    // Parse attributes and fields infomation.
    let info = match ReflectStruct::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls = crate::impls::impl_struct(&info);

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}

/// Provided for `#[reflect_methods]`.
pub(crate) fn match_methods_impls(item: ItemImpl) -> TokenStream {
    let methods = match ReflectMethods::from_item(item) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let item = &methods.item;
    let methods_impl = crate::impls::impl_reflect_methods(&methods);

    TokenStream::from(quote! {
        #item

        const _: () = {
            #methods_impl
        };
    })
}
