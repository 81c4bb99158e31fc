/*!
# Edge Weights

Weights are numeric values attached to edges. Instead of fixing a single numeric type, all
algorithms are generic over the [`Weight`] trait which is implemented for every primitive
integer and float type via [`impl_weight!`].

Each weight type provides
- an *infinite* sentinel that marks unreachable nodes in distance tables
  (`MAX` for integers, `INFINITY` for floats),
- a total order so that edges can be sorted deterministically even for floats,
- checked addition via [`Weight::finite_add`]: a sum that overflows or hits the sentinel is
  rejected instead of silently wrapping or turning a reachable node into an unreachable one.

Signed integers and floats can represent negative weights. The graph itself accepts them;
algorithms that require non-negative weights (Dijkstra) reject them with
[`GraphError::InvalidWeight`](crate::error::GraphError::InvalidWeight).
*/

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

use num::{CheckedAdd, One, Zero};

/// Numeric type usable as an edge weight
pub trait Weight:
    Copy + Debug + Display + PartialOrd + Zero + One + Send + Sync + 'static
{
    /// Sentinel for "not reachable". Never a valid distance.
    const INFINITY: Self;

    /// Returns *true* if the weight is strictly below zero
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// Returns *true* if the weight is neither infinite nor NaN
    fn is_finite(&self) -> bool;

    /// Total order on weights. Equivalent to `Ord::cmp` for integers and `total_cmp` for floats.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Returns *true* if the weight can be used by algorithms requiring non-negative weights
    fn is_valid_non_negative(&self) -> bool {
        self.is_finite() && !self.is_negative()
    }

    /// Returns `self + other` if the sum is representable and finite, i.e. not [`Weight::INFINITY`]
    fn finite_add(&self, other: &Self) -> Option<Self>;

    /// Sums all weights with [`Weight::finite_add`]; `None` if some partial sum is not finite
    fn finite_sum<I>(weights: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        weights
            .into_iter()
            .try_fold(Self::zero(), |acc, w| acc.finite_add(&w))
    }
}

macro_rules! impl_weight {
    (int: $($t:ty),*) => {
        $(
            impl Weight for $t {
                const INFINITY: Self = <$t>::MAX;

                #[inline]
                fn is_finite(&self) -> bool {
                    *self != Self::INFINITY
                }

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                #[inline]
                fn finite_add(&self, other: &Self) -> Option<Self> {
                    CheckedAdd::checked_add(self, other).filter(|sum| Weight::is_finite(sum))
                }
            }
        )*
    };
    (float: $($t:ty),*) => {
        $(
            impl Weight for $t {
                const INFINITY: Self = <$t>::INFINITY;

                #[inline]
                fn is_finite(&self) -> bool {
                    <$t>::is_finite(*self)
                }

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }

                #[inline]
                fn finite_add(&self, other: &Self) -> Option<Self> {
                    let sum = *self + *other;
                    <$t>::is_finite(sum).then_some(sum)
                }
            }
        )*
    };
}

impl_weight!(int: i32, i64, u32, u64, usize);
impl_weight!(float: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinity_is_not_finite() {
        assert!(!<i64 as Weight>::INFINITY.is_finite());
        assert!(!<u32 as Weight>::INFINITY.is_finite());
        assert!(!<f64 as Weight>::INFINITY.is_finite());
        assert!(!f64::NAN.is_valid_non_negative());
    }

    #[test]
    fn negativity() {
        assert!((-1i64).is_negative());
        assert!(!0i64.is_negative());
        assert!(!3u32.is_negative());
        assert!(Weight::is_negative(&-0.5f64));
        assert!(!Weight::is_negative(&0.0f64));

        assert!(0i64.is_valid_non_negative());
        assert!(!(-2i32).is_valid_non_negative());
    }

    #[test]
    fn finite_add_near_limits() {
        assert_eq!(3u32.finite_add(&4), Some(7));
        assert_eq!((u32::MAX - 2).finite_add(&1), Some(u32::MAX - 1));
        assert_eq!((u32::MAX - 1).finite_add(&1), None);
        assert_eq!(3_000_000_000u32.finite_add(&3_000_000_000), None);
        assert_eq!((i64::MAX / 2).finite_add(&(i64::MAX / 2)), Some(i64::MAX - 1));
        assert_eq!((i64::MAX - 1).finite_add(&1), None);

        assert_eq!(0.5f64.finite_add(&0.25), Some(0.75));
        assert_eq!(f64::MAX.finite_add(&f64::MAX), None);
        assert_eq!(1.0f64.finite_add(&f64::NAN), None);
    }

    #[test]
    fn finite_sum_of_weights() {
        assert_eq!(u32::finite_sum([1, 2, 3]), Some(6));
        assert_eq!(u32::finite_sum([]), Some(0));
        assert_eq!(u32::finite_sum([u32::MAX / 2, u32::MAX / 2, 2]), None);
        assert_eq!(f64::finite_sum([1.5, 2.5]), Some(4.0));
        assert_eq!(f64::finite_sum([f64::MAX, f64::MAX, -f64::MAX]), None);
    }

    #[test]
    fn float_total_order() {
        let mut ws = vec![3.5f64, -1.0, 0.0, 2.25];
        ws.sort_by(Weight::total_cmp);
        assert_eq!(ws, vec![-1.0, 0.0, 2.25, 3.5]);
    }
}
