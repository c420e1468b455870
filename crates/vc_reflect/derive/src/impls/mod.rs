// -----------------------------------------------------------------------------
// Modules

mod match_reflect;

mod method_kind;
mod struct_kind;

mod auto_register;
mod struct_from_reflect;
mod trait_reflect;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::{match_methods_impls, match_reflect_impls};

use auto_register::get_auto_register_impl;
use method_kind::impl_reflect_methods;
use struct_from_reflect::impl_struct_from_reflect;
use struct_kind::impl_struct;
use trait_reflect::impl_trait_reflect;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;
