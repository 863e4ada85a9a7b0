use std::ops::{Deref, DerefMut, Index, IndexMut};

use super::{Coordinate, Extent, Layout, Dense};
use super::layout::{offset, section_origin};

/// An `R`-dimensional view of a borrowed buffer with an explicit stride.
///
/// The element at `idx` lives at offset `origin + idx.dot(stride)` in the
/// buffer. The stride may be anything: it may skip elements, run backwards,
/// or make distinct `Coordinate`s alias the same element. Nothing checks the
/// stride against the length of the buffer; an access that falls outside
/// the buffer panics when it is made.
///
/// [`slice()`](Strided::slice) is provided for ranks 2 to 8 only.
///
/// ```
/// use ndview::{Coordinate, Extent, StridedView, Layout};
/// let buffer: Vec<i32> = (0..4 * 8 * 12).collect();
/// // Every other element of the last axis.
/// let view = StridedView::new(&buffer[..], Extent::new([4, 8, 6]), Coordinate::new([96, 12, 2]));
/// assert_eq!(view[[1, 2, 3]], 96 + 24 + 6);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Strided<S, const R: usize> {
    data: S,
    origin: usize,
    bounds: Extent<R>,
    stride: Coordinate<R>,
}

/// A read-only [`Strided`] view.
pub type StridedView<'a, T, const R: usize> = Strided<&'a [T], R>;

/// A writable [`Strided`] view.
pub type StridedViewMut<'a, T, const R: usize> = Strided<&'a mut [T], R>;

impl<T, S: Deref<Target=[T]>, const R: usize> Strided<S, R> {
    /// Views `data` as an array of shape `bounds` whose all-zeros
    /// `Coordinate` is the first element of `data`.
    pub fn new(data: S, bounds: Extent<R>, stride: Coordinate<R>) -> Self {
        Self::with_origin(data, 0, bounds, stride)
    }

    /// Views `data` as an array of shape `bounds` whose all-zeros
    /// `Coordinate` is element `origin` of `data`.
    ///
    /// ```
    /// use ndview::{Coordinate, Extent, StridedView};
    /// let buffer = [1, 2, 3, 4];
    /// let reversed = StridedView::with_origin(&buffer[..], 3, Extent::new([4]), Coordinate::new([-1]));
    /// assert!(reversed.iter().eq(&[4, 3, 2, 1]));
    /// ```
    pub fn with_origin(data: S, origin: usize, bounds: Extent<R>, stride: Coordinate<R>) -> Self {
        Self {data, origin, bounds, stride}
    }

    /// The whole of the borrowed buffer, including any elements outside the
    /// view.
    pub fn data(&self) -> &[T] { &self.data }

    /// A read-only view of the same elements.
    pub fn view(&self) -> StridedView<'_, T, R> {
        Strided {data: &self.data[..], origin: self.origin, bounds: self.bounds, stride: self.stride}
    }

    /// Returns a view of the elements from `origin` to `origin + window`,
    /// with the same stride as `self`.
    ///
    /// # Panics
    ///
    /// Panics if `window` is not empty and does not lie within the bounds of
    /// `self`.
    pub fn section(self, origin: Coordinate<R>, window: Extent<R>) -> Self {
        let origin = section_origin(&self, origin, window);
        Self {data: self.data, origin, bounds: window, stride: self.stride}
    }

    /// Returns a view of everything from `origin` to the far edge of `self`,
    /// i.e. `self.section(origin, self.bounds() - origin)`.
    pub fn section_from(self, origin: Coordinate<R>) -> Self {
        let window = self.bounds - origin;
        self.section(origin, window)
    }

    /// Iterates over the elements in the order of [`Extent::iter()`].
    pub fn iter<'a>(&'a self) -> impl Iterator<Item=&'a T> + 'a where T: 'a {
        self.bounds.iter().map(move |idx| &self[idx])
    }
}

impl<T, S: DerefMut<Target=[T]>, const R: usize> Strided<S, R> {
    /// A writable view of the same elements, borrowing `self`.
    pub fn view_mut(&mut self) -> StridedViewMut<'_, T, R> {
        Strided {data: &mut self.data[..], origin: self.origin, bounds: self.bounds, stride: self.stride}
    }

    /// Overwrites every element with `f(idx)`, in the order of
    /// [`Extent::iter()`]. Where the stride aliases elements, the last
    /// write wins.
    pub fn fill_with(&mut self, mut f: impl FnMut(Coordinate<R>) -> T) {
        for idx in self.bounds {
            self[idx] = f(idx);
        }
    }
}

impl<T, S: Deref<Target=[T]>, const R: usize> Layout<R> for Strided<S, R> {
    #[inline(always)]
    fn bounds(&self) -> Extent<R> { self.bounds }
    #[inline(always)]
    fn stride(&self) -> Coordinate<R> { self.stride }
    #[inline(always)]
    fn origin(&self) -> usize { self.origin }
}

impl<T, S: Deref<Target=[T]>, const R: usize> From<Dense<S, R>> for Strided<S, R> {
    fn from(dense: Dense<S, R>) -> Self {
        let (origin, bounds, stride) = (dense.origin(), dense.bounds(), dense.stride());
        Self::with_origin(dense.into_data(), origin, bounds, stride)
    }
}

impl<'a, T, const R: usize> From<StridedViewMut<'a, T, R>> for StridedView<'a, T, R> {
    fn from(v: StridedViewMut<'a, T, R>) -> Self {
        Strided {data: v.data, origin: v.origin, bounds: v.bounds, stride: v.stride}
    }
}

impl<T, S: Deref<Target=[T]>, const R: usize> Index<Coordinate<R>> for Strided<S, R> {
    type Output = T;
    #[inline(always)]
    fn index(&self, idx: Coordinate<R>) -> &T { &self.data[self.offset_of(idx)] }
}

impl<T, S: DerefMut<Target=[T]>, const R: usize> IndexMut<Coordinate<R>> for Strided<S, R> {
    #[inline(always)]
    fn index_mut(&mut self, idx: Coordinate<R>) -> &mut T {
        let offset = self.offset_of(idx);
        &mut self.data[offset]
    }
}

impl<T, S: Deref<Target=[T]>, const R: usize> Index<[isize; R]> for Strided<S, R> {
    type Output = T;
    #[inline(always)]
    fn index(&self, idx: [isize; R]) -> &T { &self[Coordinate::new(idx)] }
}

impl<T, S: DerefMut<Target=[T]>, const R: usize> IndexMut<[isize; R]> for Strided<S, R> {
    #[inline(always)]
    fn index_mut(&mut self, idx: [isize; R]) -> &mut T { &mut self[Coordinate::new(idx)] }
}

impl<T, S: Deref<Target=[T]>> Index<isize> for Strided<S, 1> {
    type Output = T;
    #[inline(always)]
    fn index(&self, idx: isize) -> &T { &self[Coordinate::new([idx])] }
}

impl<T, S: DerefMut<Target=[T]>> IndexMut<isize> for Strided<S, 1> {
    #[inline(always)]
    fn index_mut(&mut self, idx: isize) -> &mut T { &mut self[Coordinate::new([idx])] }
}

// ----------------------------------------------------------------------------

/// Implement [`Strided::slice()`] for each listed `R => R - 1` pair.
macro_rules! impl_strided_slice {
    ($($r:literal => $lower:literal),*) => {
        $(
            impl<T, S: Deref<Target=[T]>> Strided<S, $r> {
                /// Fixes the leading axis at `index`, giving a view of one
                /// fewer dimension that shares storage with `self`.
                ///
                /// # Panics
                ///
                /// Panics unless `0 <= index < self.bounds()[0]`.
                pub fn slice(self, index: isize) -> Strided<S, $lower> {
                    let (first, bounds) = self.bounds.split_first();
                    assert!(
                        0 <= index && index < first,
                        "Slice {} is out of bounds for size {:?}", index, self.bounds,
                    );
                    let (first_stride, stride) = self.stride.split_first();
                    let origin = offset(self.origin, Coordinate::new([index]), Coordinate::new([first_stride]));
                    Strided {data: self.data, origin, bounds, stride}
                }
            }
        )*
    };
}

impl_strided_slice!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);

// ----------------------------------------------------------------------------
