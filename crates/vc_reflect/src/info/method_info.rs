use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use vc_utils::Join;

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, Visibility};
use crate::ops::{ArgList, InvokeError};

// -----------------------------------------------------------------------------
// Invoker

/// Type-erased call of a registered method.
///
/// The first argument is the receiver. Associated functions ignore it. A
/// generated invoker checks the argument count and every argument before
/// consuming any of them, so on [`InvokeError::ArgumentCount`] and
/// [`InvokeError::ArgumentType`] the list is left untouched.
pub type Invoker = fn(&mut dyn Reflect, &mut ArgList) -> Result<Box<dyn Reflect>, InvokeError>;

// -----------------------------------------------------------------------------
// ParamInfo

/// A formal parameter of a reflected method.
#[derive(Clone, Debug)]
pub struct ParamInfo {
    ty: Type,
    name: &'static str,
    type_info: fn() -> &'static TypeInfo,
}

impl ParamInfo {
    crate::info::impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            ty: Type::of::<T>(),
            name,
            type_info: T::type_info,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

// -----------------------------------------------------------------------------
// MethodInfo

/// Descriptor of a method registered with
/// [`#[reflect_methods]`](crate::derive::reflect_methods).
///
/// `Display` renders a signature such as
/// `my_crate::Greeter::greet(alloc::string::String, i32) -> ()`.
#[derive(Clone)]
pub struct MethodInfo {
    name: &'static str,
    owner: Type,
    visibility: Visibility,
    receiver: bool,
    params: Box<[ParamInfo]>,
    return_ty: Type,
    return_info: fn() -> &'static TypeInfo,
    invoker: Invoker,
}

impl MethodInfo {
    /// Describe method `name` declared on `O`, returning `R`.
    pub fn new<O: TypePath, R: Typed>(
        name: &'static str,
        visibility: Visibility,
        params: Vec<ParamInfo>,
        invoker: Invoker,
    ) -> Self {
        Self {
            name,
            owner: Type::of::<O>(),
            visibility,
            receiver: true,
            params: params.into_boxed_slice(),
            return_ty: Type::of::<R>(),
            return_info: R::type_info,
            invoker,
        }
    }

    /// Mark this as an associated function without a `self` receiver.
    #[inline]
    pub fn without_receiver(mut self) -> Self {
        self.receiver = false;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The struct whose impl block declares the method.
    #[inline]
    pub const fn owner(&self) -> &Type {
        &self.owner
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    /// `false` for associated functions.
    #[inline]
    pub const fn has_receiver(&self) -> bool {
        self.receiver
    }

    #[inline]
    pub fn params(&self) -> &[ParamInfo] {
        &self.params
    }

    #[inline]
    pub fn param_len(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub const fn return_ty(&self) -> &Type {
        &self.return_ty
    }

    #[inline]
    pub fn return_info(&self) -> &'static TypeInfo {
        (self.return_info)()
    }

    /// Run the method on `target` without any diagnostics.
    ///
    /// Prefer [`invoke_by_name`](crate::access::invoke_by_name), which
    /// explains argument failures.
    #[inline]
    pub fn invoke(
        &self,
        target: &mut dyn Reflect,
        args: &mut ArgList,
    ) -> Result<Box<dyn Reflect>, InvokeError> {
        (self.invoker)(target, args)
    }
}

impl fmt::Display for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = Join::new(", ", self.params.iter().map(ParamInfo::type_path));
        write!(
            f,
            "{}::{}({}) -> {}",
            self.owner.path(),
            self.name,
            params,
            self.return_ty.path()
        )
    }
}

impl fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodInfo")
            .field("signature", &format_args!("{self}"))
            .field("visibility", &self.visibility)
            .field("receiver", &self.receiver)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ReflectMethods

/// The methods of a type, generated by
/// [`#[reflect_methods]`](crate::derive::reflect_methods).
///
/// Types deriving `Reflect` with `#[reflect(methods)]` put these into their
/// [`StructInfo`](crate::info::StructInfo).
pub trait ReflectMethods {
    fn reflect_methods() -> Vec<MethodInfo>;
}
