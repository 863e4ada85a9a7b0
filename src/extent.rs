use super::{Coordinate, MultiIndexIterator, Coordinates};

/// The size of an `R`-dimensional box of [`Coordinate`]s.
///
/// Each axis holds the number of distinct values that axis can take, so
/// the box contains exactly the `Coordinate`s `c` with `0 <= c[i] <
/// extent[i]` for every axis `i`. Every axis is expected to be
/// non-negative; an `Extent` with a negative axis is treated as empty.
///
/// Adding or subtracting a `Coordinate` translates the far edge of the box.
/// This is how the remaining size beyond an origin is computed; it does not
/// resize any storage.
///
/// ```
/// use ndview::{Coordinate, Extent};
/// let e = Extent::new([4, 5, 9]);
/// assert_eq!(e.size(), 180);
/// assert!(e.contains(Coordinate::new([3, 4, 8])));
/// assert!(!e.contains(Coordinate::new([3, 5, 0])));
/// assert_eq!(e - Coordinate::new([1, 2, 3]), Extent::new([3, 3, 6]));
/// ```
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct Extent<const R: usize>(pub(crate) [isize; R]);

impl<const R: usize> Extent<R> {
    const POSITIVE_RANK: () = assert!(R > 0, "Rank must be greater than 0");

    /// Constructs an `Extent` from the size of each axis.
    #[inline(always)]
    pub const fn new(axes: [isize; R]) -> Self {
        let () = Self::POSITIVE_RANK;
        Self(axes)
    }

    /// Returns the sizes of all axes.
    #[inline(always)]
    pub fn into_inner(self) -> [isize; R] { self.0 }

    /// Iterates over the sizes of all axes.
    pub fn axes(&self) -> std::slice::Iter<'_, isize> { self.0.iter() }

    /// The number of `Coordinate`s in `self`, i.e. the product of all axes.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not empty and the product overflows `usize`.
    #[inline(always)]
    pub fn size(&self) -> usize {
        if self.0.iter().any(|&e| e <= 0) { return 0; }
        self.0.iter().fold(1usize, |product, &e| {
            product.checked_mul(e as usize).unwrap_or_else(|| {
                panic!("Size {:?} has more elements than fit in a usize", self)
            })
        })
    }

    /// Returns `true` if `self` contains no `Coordinate`s.
    #[inline(always)]
    pub fn is_empty(&self) -> bool { self.size() == 0 }

    /// Returns `true` if `0 <= idx[i] < self[i]` for every axis `i`.
    #[inline(always)]
    pub fn contains(&self, idx: Coordinate<R>) -> bool {
        self.0.iter().zip(idx.0).all(|(&e, i)| 0 <= i && i < e)
    }

    /// Returns the last `Coordinate` in `self`, i.e. `self - 1` on every
    /// axis, or `None` if `self` is empty.
    pub fn last(&self) -> Option<Coordinate<R>> {
        if self.is_empty() { return None; }
        Some(self.to_coordinate() - Coordinate::new([1; R]))
    }

    /// Returns the size of each axis as a `Coordinate`.
    #[inline(always)]
    pub fn to_coordinate(self) -> Coordinate<R> { Coordinate::new(self.0) }

    /// The row-major stride of a dense buffer of this shape: the last axis
    /// has stride 1, and each other axis has the stride of the next axis
    /// times the size of the next axis.
    ///
    /// ```
    /// use ndview::{Coordinate, Extent};
    /// assert_eq!(Extent::new([4, 5, 9]).dense_stride(), Coordinate::new([45, 9, 1]));
    /// ```
    pub fn dense_stride(&self) -> Coordinate<R> {
        let mut stride = Coordinate::default();
        stride[R - 1] = 1;
        for axis in (0..R - 1).rev() {
            stride[axis] = stride[axis + 1] * self[axis + 1];
        }
        stride
    }

    /// A [`MultiIndexIterator`] at the first `Coordinate` of `self`, or at
    /// the end if `self` is empty.
    pub fn begin(self) -> MultiIndexIterator<R> { MultiIndexIterator::start(self) }

    /// A [`MultiIndexIterator`] one step past the last `Coordinate` of `self`.
    pub fn end(self) -> MultiIndexIterator<R> { MultiIndexIterator::end(self) }

    /// A [`MultiIndexIterator`] one step before the first `Coordinate` of
    /// `self`.
    pub fn before_start(self) -> MultiIndexIterator<R> { MultiIndexIterator::before_start(self) }

    /// Iterates over every `Coordinate` in `self`, with the last axis
    /// varying fastest.
    ///
    /// ```
    /// use ndview::{Extent};
    /// let all: Vec<_> = Extent::new([2, 3]).iter().map(|c| c.into_inner()).collect();
    /// assert_eq!(all, [[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]);
    /// ```
    pub fn iter(&self) -> Coordinates<R> { Coordinates::new(*self) }
}

impl_axes!(Extent);
impl_componentwise!(Add, add, AddAssign, add_assign for Extent with Coordinate);
impl_componentwise!(Sub, sub, SubAssign, sub_assign for Extent with Coordinate);
impl_scalar!(Mul, mul, MulAssign, mul_assign for Extent);
impl_scalar!(Div, div, DivAssign, div_assign for Extent);

impl<const R: usize> std::ops::Add<Extent<R>> for Coordinate<R> {
    type Output = Extent<R>;
    #[inline(always)]
    fn add(self, e: Extent<R>) -> Extent<R> { e + self }
}

impl<const R: usize> std::ops::Mul<Extent<R>> for isize {
    type Output = Extent<R>;
    #[inline(always)]
    fn mul(self, e: Extent<R>) -> Extent<R> { e * self }
}

impl From<isize> for Extent<1> {
    #[inline(always)]
    fn from(v: isize) -> Self { Self::new([v]) }
}

impl<const R: usize> IntoIterator for Extent<R> {
    type Item = Coordinate<R>;
    type IntoIter = Coordinates<R>;
    fn into_iter(self) -> Self::IntoIter { Coordinates::new(self) }
}

impl<const R: usize> IntoIterator for &Extent<R> {
    type Item = Coordinate<R>;
    type IntoIter = Coordinates<R>;
    fn into_iter(self) -> Self::IntoIter { Coordinates::new(*self) }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::strategy::{gen_extent, gen_coordinate};

    #[test]
    fn size() {
        assert_eq!(Extent::new([2, 3, 4]).size(), 24);
        assert_eq!(Extent::from(7isize).size(), 7);
        assert_eq!(Extent::new([2, 0, 4]).size(), 0);
        assert_eq!(Extent::<3>::default().size(), 0);
        assert!(Extent::<2>::default().is_empty());
    }

    #[test]
    fn contains() {
        let b = Extent::new([2, 3, 4]);
        assert!(b.contains(Coordinate::new([0, 0, 0])));
        assert!(b.contains(Coordinate::new([1, 2, 3])));
        assert!(!b.contains(Coordinate::new([1, 2, 4])));
        assert!(!b.contains(Coordinate::new([1, 3, 3])));
        assert!(!b.contains(Coordinate::new([2, 2, 3])));
        assert!(!b.contains(Coordinate::new([0, 0, -1])));
    }

    #[test]
    fn translate_and_scale() {
        let mut e = Extent::new([4, 8, 12]);
        let origin = Coordinate::new([1, 2, 3]);
        assert_eq!(e - origin, Extent::new([3, 6, 9]));
        assert_eq!(origin + e, Extent::new([5, 10, 15]));
        assert_eq!(e / 2, Extent::new([2, 4, 6]));
        e *= 3;
        assert_eq!(e, Extent::new([12, 24, 36]));
        e -= Coordinate::new([12, 0, 0]);
        assert_eq!(e, Extent::new([0, 24, 36]));
        assert!(e.is_empty());
    }

    #[test]
    fn last() {
        assert_eq!(Extent::new([4, 5, 9]).last(), Some(Coordinate::new([3, 4, 8])));
        assert_eq!(Extent::new([4, 0, 9]).last(), None);
    }

    #[test]
    fn split_first() {
        let (first, rest) = Extent::new([4, 5, 9]).split_first();
        assert_eq!(first, 4);
        assert_eq!(rest, Extent::new([5, 9]));
    }

    #[test]
    #[should_panic]
    fn size_overflow() {
        let _ = Extent::new([isize::MAX, isize::MAX]).size();
    }

    #[test]
    fn huge_but_empty() {
        assert_eq!(Extent::new([isize::MAX, isize::MAX, 0]).size(), 0);
        assert_eq!(Extent::new([isize::MAX, -1]).last(), None);
    }

    #[test]
    fn to_coordinate() {
        let e = Extent::new([4, 5, 9]);
        assert_eq!(e.to_coordinate(), Coordinate::new([4, 5, 9]));
        assert_eq!(e - e.to_coordinate(), Extent::default());
    }

    #[test]
    fn dense_stride_rank_one() {
        assert_eq!(Extent::new([17]).dense_stride(), Coordinate::new([1]));
    }

    proptest! {
        #[test]
        fn contains_agrees_with_iteration(
            e in gen_extent::<3>(5),
            c in gen_coordinate::<3>(6),
        ) {
            let listed = e.iter().any(|x| x == c);
            prop_assert_eq!(e.contains(c), listed);
        }
    }
}
