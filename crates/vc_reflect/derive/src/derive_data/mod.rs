//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod reflect_meta;
mod reflect_methods;
mod reflect_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};

pub(crate) use reflect_meta::ReflectMeta;
pub(crate) use reflect_methods::{ReflectMethod, ReflectMethods};
pub(crate) use reflect_struct::{ReflectStruct, visibility_tokens};
