use alloc::boxed::Box;
use alloc::vec::Vec;

use vc_utils::hash::HashMap;

use crate::info::{MethodInfo, NamedField, Type, TypeInfo, TypePath, Typed};

// -----------------------------------------------------------------------------
// StructInfo

/// Descriptor of a struct with named fields.
///
/// Holds the fields the struct declares itself (in declaration order), the
/// methods registered for it and, for a struct that extends another one,
/// the parent's descriptor. Inherited members are reached through
/// [`TypeInfo::ancestors`].
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_indices: HashMap<&'static str, usize>,
    parent: Option<fn() -> &'static TypeInfo>,
    methods: Box<[MethodInfo]>,
}

impl StructInfo {
    crate::info::impl_type_fn!(ty);

    /// Describe struct `T` declaring `fields`.
    ///
    /// Every field is stamped with `T` as its owner.
    pub fn new<T: TypePath>(fields: &[NamedField]) -> Self {
        let ty = Type::of::<T>();
        let fields: Box<[NamedField]> = fields
            .iter()
            .map(|field| field.clone().with_owner(ty))
            .collect();
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty,
            fields,
            field_indices,
            parent: None,
            methods: Box::new([]),
        }
    }

    /// Record that this struct extends `P`.
    #[inline]
    pub fn with_parent<P: Typed>(mut self) -> Self {
        self.parent = Some(P::type_info);
        self
    }

    /// Attach the methods declared on this struct.
    #[inline]
    pub fn with_methods(mut self, methods: Vec<MethodInfo>) -> Self {
        self.methods = methods.into_boxed_slice();
        self
    }

    /// A declared field by name. Inherited fields are not searched.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.field_indices.get(name).map(|&index| &self.fields[index])
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Declared fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[NamedField] {
        &self.fields
    }

    /// Methods declared on this struct, public or not, in declaration order.
    #[inline]
    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }

    /// The descriptor of the struct this one extends.
    #[inline]
    pub fn parent(&self) -> Option<&'static TypeInfo> {
        self.parent.map(|parent| parent())
    }
}
