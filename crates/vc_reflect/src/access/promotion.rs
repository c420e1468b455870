use core::any::TypeId;
use std::sync::LazyLock;

use vc_utils::TypeIdMap;
use vc_utils::hash::HashSet;

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// Tables

/// Primitive to boxed form (`P` to `Option<P>`).
static BOX_TYPES: LazyLock<TypeIdMap<fn() -> &'static TypeInfo>> = LazyLock::new(|| {
    let mut map = TypeIdMap::with_capacity(16);
    macro_rules! boxed {
        ($($ty:ty),* $(,)?) => {
            $( map.insert_type::<$ty>(<Option<$ty> as Typed>::type_info as fn() -> &'static TypeInfo); )*
        };
    }
    boxed!(
        bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    );
    map
});

/// Boxed source to the boxed targets it widens into.
static PROMOTIONS: LazyLock<TypeIdMap<HashSet<TypeId>>> = LazyLock::new(|| {
    let mut map = TypeIdMap::with_capacity(6);
    macro_rules! promote {
        ($from:ty => $($to:ty),+) => {
            map.insert_type::<Option<$from>>(
                [$(TypeId::of::<Option<$to>>()),+].into_iter().collect(),
            );
        };
    }
    promote!(i8 => i16, i32, i64, f32, f64);
    promote!(char => i32, i64, f32, f64);
    promote!(i16 => i32, i64, f32, f64);
    promote!(i32 => i64, f32, f64);
    promote!(i64 => f32, f64);
    promote!(f32 => f64);
    map
});

// -----------------------------------------------------------------------------
// Checks

/// The boxed form of a primitive type, `None` for every other type.
///
/// # Panics
///
/// When `info` is a primitive missing from the box table.
///
/// ```
/// use vc_reflect::{access::box_type, info::Typed};
///
/// let boxed = box_type(i32::type_info()).unwrap();
/// assert!(boxed.type_is::<Option<i32>>());
/// assert!(box_type(<Option<i32>>::type_info()).is_none());
/// ```
pub fn box_type(info: &TypeInfo) -> Option<&'static TypeInfo> {
    if !info.is_primitive() {
        return None;
    }
    match BOX_TYPES.get(&info.ty_id()) {
        Some(boxed) => Some(boxed()),
        None => panic!("Can't find box type for {}", info.type_path()),
    }
}

#[inline]
fn normalize(info: &TypeInfo) -> &TypeInfo {
    box_type(info).unwrap_or(info)
}

/// Whether a value of type `source` may be stored or passed where `target`
/// is expected.
///
/// Primitives are first replaced by their boxed form. The check then holds
/// when `target` is assignable from `source`
/// ([`TypeInfo::is_assignable_from`]) or when the promotion table widens
/// `source` into `target`:
///
/// | from   | to                           |
/// |--------|------------------------------|
/// | `i8`   | `i16` `i32` `i64` `f32` `f64` |
/// | `char` | `i32` `i64` `f32` `f64`       |
/// | `i16`  | `i32` `i64` `f32` `f64`       |
/// | `i32`  | `i64` `f32` `f64`             |
/// | `i64`  | `f32` `f64`                   |
/// | `f32`  | `f64`                         |
///
/// The relation is not symmetric.
///
/// The type of [`Null`](crate::ops::Null) is promotable into every
/// primitive, since the boxed form of the target accepts it.
/// Rejecting a null argument for a primitive parameter is left to
/// [`diagnose`](crate::access::diagnose).
///
/// # Panics
///
/// When a primitive is missing from the box table.
///
/// # Examples
///
/// ```
/// use vc_reflect::{access::is_promotable, info::Typed};
///
/// assert!(is_promotable(i64::type_info(), i32::type_info()));
/// assert!(!is_promotable(i32::type_info(), i64::type_info()));
/// assert!(is_promotable(<Option<f64>>::type_info(), char::type_info()));
/// assert!(is_promotable(bool::type_info(), <Option<bool>>::type_info()));
/// ```
pub fn is_promotable(target: &TypeInfo, source: &TypeInfo) -> bool {
    let target = normalize(target);
    let source = normalize(source);

    if target.is_assignable_from(source) {
        return true;
    }
    PROMOTIONS
        .get(&source.ty_id())
        .is_some_and(|targets| targets.contains(&target.ty_id()))
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{box_type, is_promotable};
    use crate::derive::Reflect;
    use crate::info::{TypeInfo, Typed};
    use crate::ops::Null;
    use alloc::string::String;

    #[derive(Reflect)]
    struct Foo {
        foo: String,
    }

    #[derive(Reflect)]
    struct Bar {
        #[reflect(extends)]
        base: Foo,
        bar: String,
    }

    #[derive(Reflect)]
    struct Baz;

    macro_rules! infos {
        ($($ty:ty),*) => { [$(<$ty as Typed>::type_info()),*] };
    }

    #[test]
    fn primitives_and_boxes_are_interchangeable() {
        let primitives = infos!(
            bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
        );
        for primitive in primitives {
            let boxed = box_type(primitive).unwrap();
            assert!(boxed.is_nullable());
            assert!(is_promotable(primitive, boxed), "{}", primitive.type_path());
            assert!(is_promotable(boxed, primitive), "{}", primitive.type_path());
        }
    }

    #[test]
    fn widening_is_one_way() {
        let pairs: [(&TypeInfo, &[&TypeInfo]); 6] = [
            (i8::type_info(), &infos!(i16, i32, i64, f32, f64)),
            (char::type_info(), &infos!(i32, i64, f32, f64)),
            (i16::type_info(), &infos!(i32, i64, f32, f64)),
            (i32::type_info(), &infos!(i64, f32, f64)),
            (i64::type_info(), &infos!(f32, f64)),
            (f32::type_info(), &infos!(f64)),
        ];
        for (from, targets) in pairs {
            for &to in targets {
                assert!(is_promotable(to, from), "{} -> {}", from.type_path(), to.type_path());
                assert!(!is_promotable(from, to), "{} -> {}", to.type_path(), from.type_path());
            }
        }
        assert!(!is_promotable(i16::type_info(), char::type_info()));
        assert!(!is_promotable(u64::type_info(), u8::type_info()));
    }

    #[test]
    fn structs_follow_the_ancestor_chain() {
        assert!(is_promotable(Foo::type_info(), Foo::type_info()));
        assert!(is_promotable(Foo::type_info(), Bar::type_info()));
        assert!(!is_promotable(Bar::type_info(), Foo::type_info()));
        assert!(!is_promotable(Baz::type_info(), Foo::type_info()));
        assert!(is_promotable(<Option<Foo>>::type_info(), Bar::type_info()));
        assert!(!is_promotable(String::type_info(), Foo::type_info()));
    }

    #[test]
    fn null_goes_into_boxed_primitives() {
        assert!(is_promotable(i64::type_info(), Null::type_info()));
        assert!(is_promotable(<Option<bool>>::type_info(), Null::type_info()));
        assert!(!is_promotable(Foo::type_info(), Null::type_info()));
    }
}
