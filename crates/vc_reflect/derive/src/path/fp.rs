//! Fully qualified paths of `core` items, so generated code does not
//! depend on what the caller has in scope.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($($name:ident => { $($path:tt)* }),* $(,)?) => {
        $(
            pub(crate) struct $name;

            impl ToTokens for $name {
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!($($path)*));
                }
            }
        )*
    };
}

define_fp! {
    AnyFP => { ::core::any::Any },
    SendFP => { ::core::marker::Send },
    SyncFP => { ::core::marker::Sync },
    OptionFP => { ::core::option::Option },
    ResultFP => { ::core::result::Result },
}
