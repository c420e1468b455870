use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{Ident, Type};

use crate::derive_data::{ReflectMethod, ReflectMethods, visibility_tokens};
use crate::path::fp::ResultFP;

/// Implement `ReflectMethods` for the self type of a `#[reflect_methods]`
/// impl block.
///
/// Each method gets an invoker closure which checks the argument count,
/// then every argument type, and only then consumes the arguments.
pub(crate) fn impl_reflect_methods(methods: &ReflectMethods) -> TokenStream {
    let vc_reflect_path = crate::path::vc_reflect();
    let reflect_ = crate::path::reflect_(&vc_reflect_path);
    let typed_ = crate::path::typed_(&vc_reflect_path);
    let type_path_ = crate::path::type_path_(&vc_reflect_path);
    let from_reflect_ = crate::path::from_reflect_(&vc_reflect_path);
    let reflect_methods_ = crate::path::reflect_methods_(&vc_reflect_path);
    let method_info_ = crate::path::method_info_(&vc_reflect_path);
    let alloc_utils_ = crate::path::alloc_utils_(&vc_reflect_path);

    let infos = methods
        .methods
        .iter()
        .map(|method| method_info_tokens(&vc_reflect_path, method));

    let item = &methods.item;
    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    let mut where_tokens = quote! { where };
    if let Some(where_clause) = where_clause {
        let predicates = where_clause.predicates.iter();
        where_tokens.extend(quote! { #(#predicates,)* });
    }
    // Generic blocks only; for concrete types a missing impl is reported
    // at the call site instead.
    if !item.generics.params.is_empty() {
        where_tokens.extend(quote! { Self: #reflect_ + #type_path_, });
        for method in &methods.methods {
            for (_, ty) in &method.params {
                where_tokens.extend(quote! { #ty: #from_reflect_ + #typed_, });
            }
            if let Some(ty) = &method.output {
                where_tokens.extend(quote! { #ty: #reflect_ + #typed_, });
            }
        }
    }

    quote! {
        impl #impl_generics #reflect_methods_ for #self_ty #where_tokens {
            fn reflect_methods() -> #alloc_utils_::Vec<#method_info_> {
                #alloc_utils_::vec![ #(#infos,)* ]
            }
        }
    }
}

fn method_info_tokens(vc_reflect_path: &syn::Path, method: &ReflectMethod) -> TokenStream {
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let method_info_ = crate::path::method_info_(vc_reflect_path);
    let param_info_ = crate::path::param_info_(vc_reflect_path);
    let arg_list_ = crate::path::arg_list_(vc_reflect_path);
    let invoke_error_ = crate::path::invoke_error_(vc_reflect_path);
    let receiver_mut_ = crate::path::receiver_mut_(vc_reflect_path);
    let alloc_utils_ = crate::path::alloc_utils_(vc_reflect_path);

    let ident = &method.ident;
    let name = ident.to_string();
    let visibility = visibility_tokens(&method.vis, vc_reflect_path);
    let return_ty = match &method.output {
        Some(ty) => ty.to_token_stream(),
        None => quote!(()),
    };

    let param_names = method.params.iter().map(|(name, _)| name);
    let param_types: Vec<&Type> = method.params.iter().map(|(_, ty)| ty).collect();
    let param_len = param_types.len();
    let param_indices = 0..param_len;

    let locals: Vec<Ident> = (0..param_len)
        .map(|index| Ident::new(&format!("__arg{index}"), Span::call_site()))
        .collect();

    let drain_tokens = if param_len == 0 {
        crate::utils::empty()
    } else {
        quote! {
            let mut __drain = __args.take_all();
            #( let #locals = __drain.next_as::<#param_types>()?; )*
        }
    };

    let (target, receiver_tokens, this, without_receiver) = if method.receiver {
        (
            quote!(__target),
            quote! { let __this = #receiver_mut_::<Self>(__target)?; },
            quote!(__this,),
            crate::utils::empty(),
        )
    } else {
        (
            quote!(_),
            crate::utils::empty(),
            crate::utils::empty(),
            quote!(.without_receiver()),
        )
    };

    quote! {
        #method_info_::new::<Self, #return_ty>(
            #name,
            #visibility,
            #alloc_utils_::vec![ #(#param_info_::new::<#param_types>(#param_names),)* ],
            |#target: &mut dyn #reflect_, __args: &mut #arg_list_|
                -> #ResultFP<#alloc_utils_::Box<dyn #reflect_>, #invoke_error_>
            {
                __args.expect_len(#param_len)?;
                #( __args.expect::<#param_types>(#param_indices)?; )*
                #receiver_tokens
                #drain_tokens
                #ResultFP::Ok(#reflect_::into_boxed_reflect(Self::#ident(#this #(#locals),*)))
            },
        )
        #without_receiver
    }
}
