//! Items used by generated code. Not public API.

/// `alloc` items for crates that are `no_std` themselves.
pub mod alloc_utils {
    pub use ::alloc::borrow::ToOwned;
    pub use ::alloc::boxed::Box;
    pub use ::alloc::vec;
    pub use ::alloc::vec::Vec;
}

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::info::Typed;
    use crate::registry::TypeRegistry;

    /// One registration function, submitted by `#[reflect(auto_register)]`.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    // Always present where `inventory` works, so its absence means the
    // platform is not supported.
    fn __avail_flag(_: &mut TypeRegistry) {}

    inventory::submit! {
        __AutoRegisterFunc(__avail_flag)
    }

    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: Typed> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    /// Run every submitted function, `false` if none could be found.
    pub fn __register_types(registry: &mut TypeRegistry) -> bool {
        let mut available = false;
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
            available = true;
        }
        log::debug!("auto registration done, {} types known", registry.len());
        available
    }
}
