use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

/// Types that have a notion of "truthiness".
///
/// This is what [`Stream::none_match()`](crate::Stream::none_match) inspects,
/// since it takes no predicate.
///
/// - `bool` is itself.
/// - Numbers are truthy when they are not zero. `NaN` is truthy.
/// - [`Option`] is truthy when it is `Some`. `()` is never truthy.
/// - Strings and collections are truthy when they are not empty.
/// - References and smart pointers forward to what they point to.
///
/// # Examples
///
/// ```
/// use streamfold::Truthy;
///
/// assert!(1_i32.is_truthy());
/// assert!(!0.0_f64.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(Some(0).is_truthy());
/// assert!(!Vec::<u8>::new().is_truthy());
/// ```
pub trait Truthy {
    /// Returns whether the value is truthy.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

macro_rules! num_impls {
    ($zero:expr => $($num_ty:ty)*) => {
        $(
            impl Truthy for $num_ty {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != $zero
                }
            }
        )*
    };
}

num_impls!(0 => i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
num_impls!(0.0 => f32 f64);

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

macro_rules! container_impls {
    ($($container:ty $(, $param:ident)*;)*) => {
        $(
            impl<$($param),*> Truthy for $container {
                #[inline]
                fn is_truthy(&self) -> bool {
                    !self.is_empty()
                }
            }
        )*
    };
}

container_impls! {
    str;
    String;
    [T], T;
    Vec<T>, T;
    VecDeque<T>, T;
    HashSet<T, S>, T, S;
    HashMap<K, V, S>, K, V, S;
    BTreeSet<T>, T;
    BTreeMap<K, V>, K, V;
}

macro_rules! forward_impls {
    ($($ptr:ty;)*) => {
        $(
            impl<T: Truthy + ?Sized> Truthy for $ptr {
                #[inline]
                fn is_truthy(&self) -> bool {
                    (**self).is_truthy()
                }
            }
        )*
    };
}

forward_impls! {
    &T;
    &mut T;
    Box<T>;
    Rc<T>;
    Arc<T>;
}

#[cfg(test)]
mod tests {
    use super::Truthy;

    #[test]
    fn falsy_values() {
        assert!(!false.is_truthy());
        assert!(!0_u8.is_truthy());
        assert!(!(-0.0_f64).is_truthy());
        assert!(!None::<i32>.is_truthy());
        assert!(!().is_truthy());
        assert!(!String::new().is_truthy());
        assert!(!(&[] as &[i32]).is_truthy());
    }

    #[test]
    fn truthy_values() {
        assert!(true.is_truthy());
        assert!((-3_i64).is_truthy());
        assert!(f32::NAN.is_truthy());
        assert!(Some(false).is_truthy());
        assert!("x".is_truthy());
        assert!(Box::new(vec![0]).is_truthy());
        assert!((&&1_u8).is_truthy());
    }
}
