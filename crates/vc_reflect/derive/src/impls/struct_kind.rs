use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::{get_auto_register_impl, impl_struct_from_reflect};
use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::{ReflectMeta, ReflectStruct};

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, get_struct_info_tokens(info));

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        quote!(Struct),
        get_struct_partial_eq_impl(meta),
        get_struct_debug_impl(meta),
    );

    // trait: FromReflect
    let from_reflect_trait_tokens = impl_struct_from_reflect(meta);

    // feature: auto_register
    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens

        #from_reflect_trait_tokens

        #auto_register_tokens
    }
}

/// Generate the `TypeInfo::Struct` expression.
fn get_struct_info_tokens(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();
    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let struct_info_ = crate::path::struct_info_(vc_reflect_path);
    let named_field_ = crate::path::named_field_(vc_reflect_path);

    let fields = info.active_fields().map(|field| {
        let ty = &field.data.ty;
        let name = field.ident().to_string();
        let visibility = field.visibility_tokens(vc_reflect_path);
        quote! {
            #named_field_::new::<#ty>(#name).with_visibility(#visibility)
        }
    });

    let parent = match info.parent_field() {
        Some(field) => {
            let ty = &field.data.ty;
            quote! { .with_parent::<#ty>() }
        }
        None => crate::utils::empty(),
    };

    let methods = if meta.attrs().methods.is_some() {
        let reflect_methods_ = crate::path::reflect_methods_(vc_reflect_path);
        quote! { .with_methods(<Self as #reflect_methods_>::reflect_methods()) }
    } else {
        crate::utils::empty()
    };

    quote! {
        #type_info_::Struct(
            #struct_info_::new::<Self>(&[ #(#fields,)* ])
                #parent
                #methods
        )
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    use crate::path::fp::OptionFP;
    let meta = info.meta();

    let vc_reflect_path = meta.vc_reflect_path();
    let struct_ = crate::path::struct_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let alloc_utils_ = crate::path::alloc_utils_(vc_reflect_path);
    let option_ = OptionFP.to_token_stream();

    let members: Vec<_> = info.active_fields().map(|field| field.ident()).collect();
    let field_names: Vec<String> = members.iter().map(ToString::to_string).collect();
    let field_indices: Vec<usize> = (0..members.len()).collect();
    let field_count = members.len();

    let parent_tokens = match info.parent_field() {
        Some(field) => {
            let parent = field.ident();
            quote! {
                #[inline]
                fn parent(&self) -> #OptionFP<&dyn #reflect_> {
                    #OptionFP::Some(&self.#parent)
                }

                #[inline]
                fn parent_mut(&mut self) -> #OptionFP<&mut dyn #reflect_> {
                    #OptionFP::Some(&mut self.#parent)
                }

                fn into_parent(
                    self: #alloc_utils_::Box<Self>,
                ) -> #OptionFP<#alloc_utils_::Box<dyn #reflect_>> {
                    let __this = *self;
                    #OptionFP::Some(#alloc_utils_::Box::new(__this.#parent))
                }
            }
        }
        None => crate::utils::empty(),
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #OptionFP<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(&self.#members),)*
                    _ => #OptionFP::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #OptionFP<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(&mut self.#members),)*
                    _ => #OptionFP::None,
                }
            }

            fn field_at(&self, index: usize) -> #OptionFP<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&self.#members),)*
                    _ => #OptionFP::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #OptionFP<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&mut self.#members),)*
                    _ => #OptionFP::None,
                }
            }

            fn name_at(&self, index: usize) -> #OptionFP<&str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #OptionFP::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #parent_tokens
        }
    }
}

/// Generate `Reflect::reflect_partial_eq` implementation tokens.
fn get_struct_partial_eq_impl(meta: &ReflectMeta) -> TokenStream {
    use crate::path::fp::OptionFP;
    let vc_reflect_path = meta.vc_reflect_path();
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let struct_partial_eq_ = crate::path::struct_partial_eq_(vc_reflect_path);

    quote! {
        #[inline]
        fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #OptionFP<bool> {
            #struct_partial_eq_(self, other)
        }
    }
}

/// Generate `Reflect::reflect_debug` implementation tokens.
fn get_struct_debug_impl(meta: &ReflectMeta) -> TokenStream {
    let struct_debug_ = crate::path::struct_debug_(meta.vc_reflect_path());
    quote! {
        #[inline]
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            #struct_debug_(self, f)
        }
    }
}
