use alloc::string::String;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;

use vc_utils::TypeIdMap;
use vc_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::info::{TypeInfo, Typed};
use crate::ops::Null;

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of [`TypeInfo`]s, looked up by [`TypeId`], type path or
/// type name.
///
/// [Registering] a type also registers every type its descriptor refers to:
/// the parent, the field types, the parameter and return types of its
/// methods, and the inner type of a nullable.
///
/// # Example
///
/// ```
/// use vc_reflect::registry::TypeRegistry;
///
/// let registry = TypeRegistry::new();
///
/// let info = registry.get_with_type_name("String").unwrap();
/// assert_eq!(info.type_path(), "alloc::string::String");
/// assert!(registry.get_with_type_path("i64").unwrap().is_primitive());
/// ```
///
/// [Registering]: TypeRegistry::register
pub struct TypeRegistry {
    type_info_table: TypeIdMap<&'static TypeInfo>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
    auto_registered: bool,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.type_path_to_id.keys())
            .finish()
    }
}

impl TypeRegistry {
    /// Create an empty [`TypeRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_info_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
            auto_registered: false,
        }
    }

    /// Create a type registry with the built-in leaf types registered.
    ///
    /// - `()` `bool` `char`
    /// - `i8 - i128` `isize`
    /// - `u8 - u128` `usize`
    /// - `f32` `f64`
    /// - `String` and [`Null`]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<()>();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry.register::<Null>();
        registry
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(
        info: &TypeInfo,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let type_name = info.type_name();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, info.ty_id());
            }
        }

        type_path_to_id.insert(info.type_path(), info.ty_id());
    }

    // Returns `false` when the type was already present.
    fn register_internal(&mut self, info: &'static TypeInfo) -> bool {
        self.type_info_table.try_insert(info.ty_id(), || {
            Self::add_new_type_indices(
                info,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            info
        })
    }

    /// Register `T` and, if it was not registered yet, the types it refers to.
    ///
    /// # Example
    ///
    /// ```
    /// use core::any::TypeId;
    /// use vc_reflect::{derive::Reflect, registry::TypeRegistry};
    ///
    /// #[derive(Reflect)]
    /// struct Named {
    ///     name: Option<String>,
    ///     value: i32,
    /// }
    ///
    /// #[derive(Reflect)]
    /// struct Tagged {
    ///     #[reflect(extends)]
    ///     base: Named,
    ///     tag: u8,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// registry.register::<Tagged>();
    ///
    /// assert!(registry.contains(TypeId::of::<Tagged>()));
    /// assert!(registry.contains(TypeId::of::<Named>()));
    /// assert!(registry.contains(TypeId::of::<Option<String>>()));
    /// assert!(registry.contains(TypeId::of::<String>()));
    /// assert!(registry.contains(TypeId::of::<i32>()));
    /// ```
    #[inline]
    pub fn register<T: Typed>(&mut self) {
        self.register_info(T::type_info());
    }

    /// Register the type of `value`, see [`register`](Self::register).
    #[inline]
    pub fn register_by_val<T: Typed>(&mut self, _: &T) {
        self.register::<T>();
    }

    /// Register a descriptor and everything it refers to.
    ///
    /// Returns `false` when the type itself was already registered, in which
    /// case nothing is done.
    pub fn register_info(&mut self, info: &'static TypeInfo) -> bool {
        if !self.register_internal(info) {
            return false;
        }

        let mut pending: Vec<&'static TypeInfo> = Vec::new();
        push_dependencies(info, &mut pending);
        while let Some(next) = pending.pop() {
            if self.register_internal(next) {
                log::trace!("registered {} as a dependency", next.type_path());
                push_dependencies(next, &mut pending);
            }
        }
        true
    }

    /// Register every non-generic type declared with
    /// `#[derive(Reflect)]` and `#[reflect(auto_register)]`.
    ///
    /// Equivalent to calling [`register`](Self::register) for each of them.
    /// Repeated calls are cheap.
    ///
    /// Returns `true` when automatic registration is available on the
    /// current platform. Without the `auto_register` feature this does
    /// nothing and returns `false`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use core::any::TypeId;
    /// use vc_reflect::{derive::Reflect, registry::TypeRegistry};
    ///
    /// #[derive(Reflect)]
    /// #[reflect(auto_register)]
    /// struct Setting {
    ///     key: String,
    ///     value: Option<i64>,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Setting>()));
    /// assert!(registry.contains(TypeId::of::<Option<i64>>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            if !self.auto_registered {
                self.auto_registered = crate::__macro_exports::auto_register::__register_types(self);
            }
            self.auto_registered
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Whether the type with given [`TypeId`] has been registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_info_table.contains(&type_id)
    }

    /// The descriptor of the type with the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.type_info_table.get(&type_id).copied()
    }

    /// The descriptor of the type with the given [type path].
    ///
    /// [type path]: crate::info::TypePath::type_path
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&'static TypeInfo> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// The descriptor of the type with the given [type name].
    ///
    /// Returns `None` when the name is [ambiguous](Self::is_ambiguous).
    ///
    /// [type name]: crate::info::TypePath::type_name
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&'static TypeInfo> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Whether the given [type name] matches more than one registered type.
    ///
    /// ```
    /// use vc_reflect::registry::TypeRegistry;
    ///
    /// mod a {
    ///     #[derive(vc_reflect::derive::Reflect)]
    ///     pub struct Item { pub id: u8 }
    /// }
    /// mod b {
    ///     #[derive(vc_reflect::derive::Reflect)]
    ///     pub struct Item { pub id: u16 }
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// registry.register::<a::Item>();
    /// assert!(!registry.is_ambiguous("Item"));
    /// registry.register::<b::Item>();
    /// assert!(registry.is_ambiguous("Item"));
    /// assert!(registry.get_with_type_name("Item").is_none());
    /// ```
    ///
    /// [type name]: crate::info::TypePath::type_name
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.type_info_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_info_table.is_empty()
    }

    /// Every registered descriptor, in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> + '_ {
        self.type_info_table.values().copied()
    }
}

fn push_dependencies(info: &'static TypeInfo, pending: &mut Vec<&'static TypeInfo>) {
    match info {
        TypeInfo::Struct(info) => {
            pending.extend(info.parent());
            pending.extend(info.fields().iter().map(|field| field.type_info()));
            for method in info.methods() {
                pending.extend(method.params().iter().map(|param| param.type_info()));
                pending.push(method.return_info());
            }
        }
        TypeInfo::Nullable(info) => pending.extend(info.inner()),
        TypeInfo::Primitive(_) | TypeInfo::Opaque(_) => {}
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::TypeRegistry;
    use crate::derive::{Reflect, reflect_methods};
    use crate::info::Typed;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::any::TypeId;

    #[derive(Reflect)]
    struct Leaf {
        weight: f32,
    }

    #[derive(Reflect)]
    #[reflect(methods)]
    struct Tree {
        root: Option<Leaf>,
        label: String,
    }

    #[reflect_methods]
    impl Tree {
        pub fn grow(&mut self, by: u16) -> i128 {
            i128::from(by)
        }
    }

    #[derive(Reflect)]
    #[reflect(methods)]
    struct Cycle {
        id: u8,
    }

    #[reflect_methods]
    impl Cycle {
        pub fn link(&self) -> Link {
            Link { hops: self.id }
        }

        pub fn duplicate(&self) -> Cycle {
            Cycle { id: self.id }
        }
    }

    #[derive(Reflect)]
    #[reflect(methods)]
    struct Link {
        hops: u8,
    }

    #[reflect_methods]
    impl Link {
        pub fn back(&self, to: Cycle) -> u8 {
            to.id + self.hops
        }
    }

    #[test]
    fn builtin_leaves() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.len(), 19);
        assert!(registry.contains(TypeId::of::<u128>()));
        assert!(registry.get_with_type_name("Null").unwrap().is_nullable());
        assert!(TypeRegistry::empty().is_empty());
    }

    #[test]
    fn registration_follows_references() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Tree>();

        for id in [
            TypeId::of::<Tree>(),
            TypeId::of::<Option<Leaf>>(),
            TypeId::of::<Leaf>(),
            TypeId::of::<f32>(),
            TypeId::of::<String>(),
            TypeId::of::<u16>(),
            TypeId::of::<i128>(),
        ] {
            assert!(registry.contains(id));
        }
        assert_eq!(registry.len(), 7);
        assert!(!registry.register_info(Tree::type_info()));

        let paths: Vec<&str> = registry.iter().map(|info| info.type_path()).collect();
        assert!(paths.contains(&"core::option::Option<vc_reflect::registry::type_registry::tests::Leaf>"));
    }

    #[test]
    fn cyclic_references_terminate() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Cycle>();
        assert!(registry.contains(TypeId::of::<Link>()));
        assert!(registry.contains(TypeId::of::<u8>()));
        assert_eq!(registry.len(), 3);
        assert!(!registry.register_info(Link::type_info()));
    }

    #[test]
    fn lookups_by_path_and_name() {
        let mut registry = TypeRegistry::empty();
        registry.register_by_val(&Leaf { weight: 1.0 });
        let by_path = registry.get_with_type_path("vc_reflect::registry::type_registry::tests::Leaf");
        let by_name = registry.get_with_type_name("Leaf");
        assert!(core::ptr::eq(by_path.unwrap(), Leaf::type_info()));
        assert!(core::ptr::eq(by_name.unwrap(), Leaf::type_info()));
        assert!(registry.get_with_type_name("Tree").is_none());
    }

    #[cfg(feature = "auto_register")]
    mod auto {
        use super::TypeRegistry;
        use crate::derive::Reflect;
        use core::any::TypeId;

        #[derive(Reflect)]
        #[reflect(auto_register)]
        struct Registered {
            level: u64,
        }

        #[test]
        fn collects_marked_types() {
            let mut registry = TypeRegistry::empty();
            assert!(registry.auto_register());
            assert!(registry.contains(TypeId::of::<Registered>()));
            assert!(registry.contains(TypeId::of::<u64>()));
            let len = registry.len();
            assert!(registry.auto_register());
            assert_eq!(registry.len(), len);
        }
    }
}
