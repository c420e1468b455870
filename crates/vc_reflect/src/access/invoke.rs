use alloc::boxed::Box;
use alloc::string::ToString;

use crate::Reflect;
use crate::access::{AccessError, ArgumentDiagnostic, find_method, is_promotable};
use crate::info::MethodInfo;
use crate::ops::ArgList;

// -----------------------------------------------------------------------------
// Diagnostic

/// Why `args` does not fit `method`, `None` when it does.
///
/// Checks the count first, then each position in order: a null argument
/// for a primitive parameter, then an argument whose runtime type is not
/// [promotable](is_promotable) into the parameter type. Null arguments
/// for other parameters pass.
pub fn diagnose(method: &MethodInfo, args: &ArgList) -> Option<ArgumentDiagnostic> {
    let params = method.params();
    if params.len() != args.len() {
        return Some(ArgumentDiagnostic::Count {
            expected: params.len(),
            received: args.len(),
        });
    }

    for (index, (param, arg)) in params.iter().zip(args.iter()).enumerate() {
        let expected = param.type_info();
        match arg.value_type_info() {
            None if expected.is_primitive() => {
                return Some(ArgumentDiagnostic::NullPrimitive { index });
            }
            Some(actual) if !is_promotable(expected, actual) => {
                return Some(ArgumentDiagnostic::Type {
                    index,
                    expected: expected.type_path(),
                    actual: actual.type_path(),
                });
            }
            _ => {}
        }
    }
    None
}

/// Check that `args` fit `method` before calling it.
///
/// # Errors
///
/// [`AccessError::ArgumentMismatch`] naming the method, the arguments and
/// the first problem found by [`diagnose`].
///
/// # Examples
///
/// ```
/// use vc_reflect::{args, access::assert_method_args, derive::{Reflect, reflect_methods}};
/// use vc_reflect::info::Typed;
///
/// #[derive(Reflect)]
/// #[reflect(methods)]
/// struct Calc;
///
/// #[reflect_methods]
/// impl Calc {
///     pub fn scale(&self, label: String, factor: i32) -> String {
///         label.repeat(factor as usize)
///     }
/// }
///
/// let method = &Calc::type_info().methods()[0];
/// assert!(assert_method_args(method, &args![String::from("a"), 2_i8]).is_ok());
///
/// let err = assert_method_args(method, &args![0_i32, 0_i32]).unwrap_err();
/// assert!(err.to_string().ends_with(
///     "with arguments (0, 0): arg 0 expected type alloc::string::String, got type i32"
/// ));
/// ```
pub fn assert_method_args(method: &MethodInfo, args: &ArgList) -> Result<(), AccessError> {
    match diagnose(method, args) {
        None => Ok(()),
        Some(detail) => Err(AccessError::ArgumentMismatch {
            method: method.to_string(),
            args: args.to_string(),
            detail,
        }),
    }
}

// -----------------------------------------------------------------------------
// Invoke

/// Call the first public method named `name` on `target` with `args`.
///
/// Methods are searched in `target`'s type, then up its ancestors, each
/// type in declaration order. There is no overload resolution, and
/// non-public methods are never found. Associated functions are found
/// too and ignore `target`.
///
/// # Errors
///
/// - [`AccessError::MethodNotFound`] when no public method has that name;
/// - [`AccessError::ArgumentMismatch`] when the method rejects the
///   arguments and [`diagnose`] can tell why;
/// - [`AccessError::Invocation`] with the original failure otherwise.
///
/// # Examples
///
/// ```
/// use vc_reflect::{args, access::invoke_by_name, derive::{Reflect, reflect_methods}};
///
/// #[derive(Reflect)]
/// #[reflect(methods)]
/// struct Counter {
///     total: i64,
/// }
///
/// #[reflect_methods]
/// impl Counter {
///     pub fn add(&mut self, amount: i64) -> i64 {
///         self.total += amount;
///         self.total
///     }
/// }
///
/// let mut counter = Counter { total: 1 };
/// let result = invoke_by_name(&mut counter, "add", args![2_i32]).unwrap();
/// assert_eq!(result.downcast_ref::<i64>(), Some(&3));
///
/// let err = invoke_by_name(&mut counter, "add", args![]).unwrap_err();
/// assert!(err.to_string().contains("expected 1 args, received 0"));
/// ```
pub fn invoke_by_name(
    target: &mut dyn Reflect,
    name: &str,
    args: impl Into<ArgList>,
) -> Result<Box<dyn Reflect>, AccessError> {
    let mut args = args.into();
    let info = target.reflect_type_info();
    let Some(method) = find_method(info, name) else {
        return Err(AccessError::MethodNotFound {
            type_path: info.type_path(),
            method: name.to_string(),
        });
    };

    log::debug!("invoking {method} with ({args})");
    match method.invoke(target, &mut args) {
        Ok(value) => Ok(value),
        Err(err) if err.is_argument_error() => {
            assert_method_args(method, &args)?;
            log::warn!("{method} rejected ({args}) for no diagnosable reason: {err}");
            Err(AccessError::Invocation(err))
        }
        Err(err) => Err(AccessError::Invocation(err)),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{assert_method_args, invoke_by_name};
    use crate::access::{AccessError, ArgumentDiagnostic, is_promotable};
    use crate::derive::{Reflect, reflect_methods};
    use crate::info::{TypeInfo, Typed};
    use crate::ops::{ArgList, InvokeError, Null};
    use crate::{Reflect as _, args};
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::{String, ToString};
    use alloc::vec;

    #[derive(Reflect, Default)]
    #[reflect(methods)]
    struct Greeter {
        greeted: u32,
    }

    #[derive(Reflect, Default)]
    struct Token {
        id: u8,
    }

    #[reflect_methods]
    impl Greeter {
        pub fn my_method(&mut self, s: String, i: i32) -> String {
            self.greeted += 1;
            format!("{s}{i}")
        }

        fn private_method(&self, s: String, i: i32) -> String {
            format!("{s}{i}")
        }

        pub fn origin() -> u8 {
            7
        }

        pub fn take_token(&self, token: Token) -> u8 {
            token.id
        }

        pub fn f_byte(&self, _x: i8) {}
        pub fn f_char(&self, _x: char) {}
        pub fn f_short(&self, _x: i16) {}
        pub fn f_int(&self, _x: i32) {}
        pub fn f_long(&self, _x: i64) {}
        pub fn f_float(&self, _x: f32) {}
        pub fn f_double(&self, _x: f64) {}
    }

    #[derive(Reflect, Default)]
    #[reflect(methods)]
    struct LoudGreeter {
        #[reflect(extends)]
        base: Greeter,
    }

    #[reflect_methods]
    impl LoudGreeter {
        pub fn my_method(&self) -> String {
            String::from("HELLO")
        }
    }

    fn message(err: AccessError) -> String {
        err.to_string()
    }

    #[test]
    fn invokes_first_public_match() {
        let mut greeter = Greeter::default();
        let result = invoke_by_name(&mut greeter, "my_method", args![String::from("foo"), 42_i32]);
        assert_eq!(result.unwrap().downcast_ref::<String>().unwrap(), "foo42");
        assert_eq!(greeter.greeted, 1);

        let origin = invoke_by_name(&mut greeter, "origin", ArgList::new()).unwrap();
        assert_eq!(origin.take::<u8>().ok(), Some(7));
    }

    #[test]
    fn derived_types_shadow_and_inherit() {
        let mut loud = LoudGreeter::default();
        let result = invoke_by_name(&mut loud, "my_method", args![]).unwrap();
        assert_eq!(result.downcast_ref::<String>().unwrap(), "HELLO");

        invoke_by_name(&mut loud, "f_int", args![1_i16]).unwrap();
        let err = invoke_by_name(&mut loud, "my_method", args![String::from("a"), 1_i32]);
        assert!(message(err.unwrap_err()).contains("expected 0 args, received 2"));
    }

    #[test]
    fn argument_count_is_explained() {
        let mut greeter = Greeter::default();
        let err = invoke_by_name(&mut greeter, "my_method", args![String::from("foo")]).unwrap_err();
        let text = message(err.clone());
        assert!(text.starts_with("Error invoking "), "{text}");
        assert!(text.contains("with arguments (foo): expected 2 args, received 1"), "{text}");
        assert!(matches!(
            err,
            AccessError::ArgumentMismatch {
                detail: ArgumentDiagnostic::Count { expected: 2, received: 1 },
                ..
            }
        ));
        assert_eq!(greeter.greeted, 0);
    }

    #[test]
    fn argument_types_are_explained() {
        let method = &Greeter::type_info().methods()[0];
        assert!(assert_method_args(method, &args![String::from("foo"), 0_i32]).is_ok());
        assert!(assert_method_args(method, &args![String::from("null"), 0_i32]).is_ok());

        let err = assert_method_args(method, &args![]).unwrap_err();
        assert!(message(err).contains("expected 2 args, received 0"));

        let err = assert_method_args(method, &args![0_i32, 0_i32]).unwrap_err();
        assert!(
            message(err).contains("arg 0 expected type alloc::string::String, got type i32")
        );

        let err = assert_method_args(method, &args![String::from("foo"), Null]).unwrap_err();
        assert!(message(err).contains("with arguments (foo, null): arg 1 is a primitive, must not be null"));

        let mut greeter = Greeter::default();
        let err = invoke_by_name(&mut greeter, "my_method", args![String::from("foo"), 1_i64]);
        assert!(message(err.unwrap_err()).contains("arg 1 expected type i32, got type i64"));
    }

    #[test]
    fn unexplained_failures_are_raised_unchanged() {
        let mut greeter = Greeter::default();
        let err = invoke_by_name(&mut greeter, "take_token", args![Null]).unwrap_err();
        assert_eq!(err, AccessError::Invocation(InvokeError::ArgumentType { index: 0 }));

        let id = invoke_by_name(&mut greeter, "take_token", args![Some(Token { id: 4 })]).unwrap();
        assert_eq!(id.downcast_ref::<u8>(), Some(&4));
    }

    #[test]
    fn private_methods_are_invisible() {
        let mut greeter = Greeter::default();
        let missing = invoke_by_name(&mut greeter, "my_poor_brain", args![String::from("foo"), 42_i32]);
        let private = invoke_by_name(&mut greeter, "private_method", args![String::from("foo"), 42_i32]);

        let type_path = Greeter::type_info().type_path();
        assert_eq!(
            missing.unwrap_err(),
            AccessError::MethodNotFound { type_path, method: "my_poor_brain".into() }
        );
        assert_eq!(
            private.unwrap_err(),
            AccessError::MethodNotFound { type_path, method: "private_method".into() }
        );
        assert!(Greeter::type_info().methods().iter().any(|m| m.name() == "private_method"));
    }

    #[test]
    fn invocation_agrees_with_promotability() {
        let methods = ["f_byte", "f_char", "f_short", "f_int", "f_long", "f_float", "f_double"];
        let values: [fn() -> Box<dyn crate::Reflect>; 7] = [
            || 0_i8.into_boxed_reflect(),
            || '\0'.into_boxed_reflect(),
            || 0_i16.into_boxed_reflect(),
            || 0_i32.into_boxed_reflect(),
            || 0_i64.into_boxed_reflect(),
            || 0_f32.into_boxed_reflect(),
            || 0_f64.into_boxed_reflect(),
        ];

        let mut greeter = Greeter::default();
        for value in values {
            for name in methods {
                let argument = value();
                let source: &TypeInfo = argument.reflect_type_info();
                let method = Greeter::type_info()
                    .methods()
                    .iter()
                    .find(|method| method.name() == name)
                    .unwrap();
                let target = method.params()[0].type_info();

                let invoked = invoke_by_name(&mut greeter, name, ArgList::from(vec![argument]));
                assert_eq!(
                    invoked.is_ok(),
                    is_promotable(target, source),
                    "{name}({})",
                    source.type_path()
                );
            }
        }
    }
}
