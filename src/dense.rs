use std::ops::{Deref, DerefMut, Index, IndexMut};

use super::{Coordinate, Extent, Layout, Strided};
use super::layout::section_origin;

/// A row-major, contiguous `R`-dimensional view of a borrowed buffer.
///
/// `S` is the borrowed storage: `&[T]` for a [`DenseView`] or `&mut [T]`
/// for a [`DenseViewMut`]. The view never owns or copies its elements; the
/// borrow checker ensures it does not outlive the buffer.
///
/// The stride is not stored. It is derived from the [`Extent`]: the last
/// axis has stride 1, and each other axis has the stride of the next axis
/// times the size of the next axis. See [`Extent::dense_stride()`].
///
/// [`slice()`](Dense::slice) is provided for ranks 2 to 8 only.
///
/// ```
/// use ndview::{Coordinate, Extent, DenseView, Layout};
/// let buffer: Vec<i32> = (0..180).collect();
/// let view = DenseView::new(&buffer[..], Extent::new([4, 5, 9]));
/// assert_eq!(view.stride(), Coordinate::new([45, 9, 1]));
/// assert_eq!(view[[0, 0, 0]], 0);
/// assert_eq!(view[[1, 2, 3]], 66);
/// assert_eq!(view.slice(2).slice(3)[2], view[[2, 3, 2]]);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Dense<S, const R: usize> {
    data: S,
    origin: usize,
    bounds: Extent<R>,
}

/// A read-only [`Dense`] view.
pub type DenseView<'a, T, const R: usize> = Dense<&'a [T], R>;

/// A writable [`Dense`] view.
pub type DenseViewMut<'a, T, const R: usize> = Dense<&'a mut [T], R>;

impl<T, S: Deref<Target=[T]>, const R: usize> Dense<S, R> {
    /// Views the first `bounds.size()` elements of `data` as an array of
    /// shape `bounds`.
    ///
    /// # Panics
    ///
    /// Panics if `data` has fewer than `bounds.size()` elements.
    pub fn new(data: S, bounds: Extent<R>) -> Self {
        assert!(
            bounds.size() <= data.len(),
            "Size {:?} needs {} elements but the buffer has {}", bounds, bounds.size(), data.len(),
        );
        Self {data, origin: 0, bounds}
    }

    /// The whole of the borrowed buffer, including any elements outside the
    /// view.
    pub fn data(&self) -> &[T] { &self.data }

    /// Discards the layout and returns the borrowed buffer.
    pub fn into_data(self) -> S { self.data }

    /// A read-only view of the same elements.
    pub fn view(&self) -> DenseView<'_, T, R> {
        Dense {data: &self.data[..], origin: self.origin, bounds: self.bounds}
    }

    /// Returns a [`Strided`] view of the elements from `origin` to `origin +
    /// window`. The result shares storage with `self`.
    ///
    /// # Panics
    ///
    /// Panics if `window` is not empty and does not lie within the bounds of
    /// `self`.
    ///
    /// ```
    /// use ndview::{Coordinate, Extent, DenseView, Layout};
    /// let buffer: Vec<i32> = (0..180).collect();
    /// let view = DenseView::new(&buffer[..], Extent::new([4, 5, 9]));
    /// let section = view.section(Coordinate::new([1, 2, 3]), Extent::new([2, 3, 4]));
    /// assert_eq!(section.stride(), view.stride());
    /// assert_eq!(section[[1, 2, 3]], view[[2, 4, 6]]);
    /// ```
    pub fn section(self, origin: Coordinate<R>, window: Extent<R>) -> Strided<S, R> {
        let origin = section_origin(&self, origin, window);
        let stride = self.stride();
        Strided::with_origin(self.data, origin, window, stride)
    }

    /// Returns a [`Strided`] view of everything from `origin` to the far
    /// edge of `self`, i.e. `self.section(origin, self.bounds() - origin)`.
    pub fn section_from(self, origin: Coordinate<R>) -> Strided<S, R> {
        let window = self.bounds - origin;
        self.section(origin, window)
    }

    /// Iterates over the elements in the order of [`Extent::iter()`].
    pub fn iter<'a>(&'a self) -> impl Iterator<Item=&'a T> + 'a where T: 'a {
        self.bounds.iter().map(move |idx| &self[idx])
    }
}

impl<T, S: DerefMut<Target=[T]>, const R: usize> Dense<S, R> {
    /// The whole of the borrowed buffer, writable.
    pub fn data_mut(&mut self) -> &mut [T] { &mut self.data }

    /// A writable view of the same elements, borrowing `self`.
    pub fn view_mut(&mut self) -> DenseViewMut<'_, T, R> {
        Dense {data: &mut self.data[..], origin: self.origin, bounds: self.bounds}
    }

    /// Overwrites every element with `f(idx)`.
    ///
    /// ```
    /// use ndview::{Extent, DenseViewMut};
    /// let mut buffer = [0; 6];
    /// DenseViewMut::new(&mut buffer[..], Extent::new([2, 3])).fill_with(|c| c[0] * 10 + c[1]);
    /// assert_eq!(buffer, [0, 1, 2, 10, 11, 12]);
    /// ```
    pub fn fill_with(&mut self, mut f: impl FnMut(Coordinate<R>) -> T) {
        for idx in self.bounds {
            self[idx] = f(idx);
        }
    }
}

impl<T, S: Deref<Target=[T]>, const R: usize> Layout<R> for Dense<S, R> {
    #[inline(always)]
    fn bounds(&self) -> Extent<R> { self.bounds }
    #[inline(always)]
    fn stride(&self) -> Coordinate<R> { self.bounds.dense_stride() }
    #[inline(always)]
    fn origin(&self) -> usize { self.origin }
}

impl<T, S: Deref<Target=[T]>, const R: usize> Index<Coordinate<R>> for Dense<S, R> {
    type Output = T;
    #[inline(always)]
    fn index(&self, idx: Coordinate<R>) -> &T { &self.data[self.offset_of(idx)] }
}

impl<T, S: DerefMut<Target=[T]>, const R: usize> IndexMut<Coordinate<R>> for Dense<S, R> {
    #[inline(always)]
    fn index_mut(&mut self, idx: Coordinate<R>) -> &mut T {
        let offset = self.offset_of(idx);
        &mut self.data[offset]
    }
}

impl<T, S: Deref<Target=[T]>, const R: usize> Index<[isize; R]> for Dense<S, R> {
    type Output = T;
    #[inline(always)]
    fn index(&self, idx: [isize; R]) -> &T { &self[Coordinate::new(idx)] }
}

impl<T, S: DerefMut<Target=[T]>, const R: usize> IndexMut<[isize; R]> for Dense<S, R> {
    #[inline(always)]
    fn index_mut(&mut self, idx: [isize; R]) -> &mut T { &mut self[Coordinate::new(idx)] }
}

impl<T, S: Deref<Target=[T]>> Index<isize> for Dense<S, 1> {
    type Output = T;
    #[inline(always)]
    fn index(&self, idx: isize) -> &T { &self[Coordinate::new([idx])] }
}

impl<T, S: DerefMut<Target=[T]>> IndexMut<isize> for Dense<S, 1> {
    #[inline(always)]
    fn index_mut(&mut self, idx: isize) -> &mut T { &mut self[Coordinate::new([idx])] }
}

impl<'a, T, const R: usize> From<DenseViewMut<'a, T, R>> for DenseView<'a, T, R> {
    fn from(v: DenseViewMut<'a, T, R>) -> Self {
        Dense {data: v.data, origin: v.origin, bounds: v.bounds}
    }
}

// ----------------------------------------------------------------------------

impl<'a, T> From<&'a [T]> for DenseView<'a, T, 1> {
    fn from(buffer: &'a [T]) -> Self { Dense::new(buffer, Extent::new([buffer.len() as isize])) }
}

impl<'a, T> From<&'a Vec<T>> for DenseView<'a, T, 1> {
    fn from(buffer: &'a Vec<T>) -> Self { Self::from(&buffer[..]) }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for DenseView<'a, T, 1> {
    fn from(buffer: &'a [T; N]) -> Self { Self::from(&buffer[..]) }
}

impl<'a, T> From<&'a mut [T]> for DenseViewMut<'a, T, 1> {
    fn from(buffer: &'a mut [T]) -> Self {
        let bounds = Extent::new([buffer.len() as isize]);
        Dense::new(buffer, bounds)
    }
}

impl<'a, T> From<&'a mut Vec<T>> for DenseViewMut<'a, T, 1> {
    fn from(buffer: &'a mut Vec<T>) -> Self { Self::from(&mut buffer[..]) }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for DenseViewMut<'a, T, 1> {
    fn from(buffer: &'a mut [T; N]) -> Self { Self::from(&mut buffer[..]) }
}

// ----------------------------------------------------------------------------

/// Implement [`Dense::slice()`] for each listed `R => R - 1` pair.
macro_rules! impl_dense_slice {
    ($($r:literal => $lower:literal),*) => {
        $(
            impl<T, S: Deref<Target=[T]>> Dense<S, $r> {
                /// Fixes the leading axis at `index`, giving a view of one
                /// fewer dimension that shares storage with `self`.
                ///
                /// Chained calls select one axis at a time, so
                /// `view.slice(i).slice(j)[k]` is `view[[i, j, k]]`.
                ///
                /// # Panics
                ///
                /// Panics unless `0 <= index < self.bounds()[0]`.
                pub fn slice(self, index: isize) -> Dense<S, $lower> {
                    let (first, bounds) = self.bounds.split_first();
                    assert!(
                        0 <= index && index < first,
                        "Slice {} is out of bounds for size {:?}", index, self.bounds,
                    );
                    let origin = self.origin + (index * self.stride()[0]) as usize;
                    Dense {data: self.data, origin, bounds}
                }
            }
        )*
    };
}

impl_dense_slice!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::strategy::{gen_nonempty_extent, gen_section, sequential};

    fn sequential_view(bounds: Extent<3>, buffer: &[i64]) -> DenseView<'_, i64, 3> {
        DenseView::new(buffer, bounds)
    }

    #[test]
    fn constructors() {
        let bounds = Extent::new([4, 8, 12]);
        let buffer = sequential(bounds);
        let view = sequential_view(bounds, &buffer);
        for (expected, idx) in bounds.iter().enumerate() {
            assert_eq!(view[idx], expected as i64);
        }
        let copy = view;
        assert_eq!(copy.iter().count(), view.size());
        assert!(copy.iter().copied().eq(0..4 * 8 * 12));
    }

    #[test]
    fn observers() {
        let bounds = Extent::new([4, 8, 12]);
        let buffer = sequential(bounds);
        let view = sequential_view(bounds, &buffer);
        assert_eq!(view.bounds(), bounds);
        assert_eq!(view.size(), 4 * 8 * 12);
        assert_eq!(view.rank(), 3);
        assert_eq!(view.stride(), Coordinate::new([96, 12, 1]));
        assert_eq!(view.data().len(), buffer.len());
    }

    #[test]
    #[should_panic]
    fn buffer_too_small() {
        let buffer = [0u8; 10];
        let _ = DenseView::new(&buffer[..], Extent::new([3, 4]));
    }

    #[test]
    #[should_panic]
    fn out_of_bounds() {
        let buffer = [0u8; 12];
        let view = DenseView::new(&buffer[..], Extent::new([3, 4]));
        let _ = view[[0, 4]];
    }

    #[test]
    fn default_is_empty() {
        let view = DenseView::<f32, 3>::default();
        assert_eq!(view.size(), 0);
        assert_eq!(view.iter().count(), 0);
    }

    #[test]
    fn rank_one_from_buffers() {
        let vec = vec![3, 1, 4, 1, 5];
        let view: DenseView<i32, 1> = DenseView::from(&vec);
        assert_eq!(view.bounds(), Extent::new([5]));
        assert_eq!(view[2], 4);
        assert_eq!(view[Coordinate::from(4isize)], 5);

        let array = [2.0, 7.0];
        assert_eq!(DenseView::from(&array)[1], 7.0);

        let mut array = [0; 4];
        let mut view = DenseViewMut::from(&mut array);
        view[3] = 9;
        view[[1]] = 8;
        assert_eq!(array, [0, 8, 0, 9]);
    }

    #[test]
    fn slicing() {
        let bounds = Extent::new([4, 8, 12]);
        let buffer = sequential(bounds);
        let view = sequential_view(bounds, &buffer);
        let stride = view.stride();

        let sliced = view.slice(2);
        assert_eq!(sliced.bounds(), Extent::new([8, 12]));
        let mut expected = stride[0] * 2;
        for idx in sliced.bounds() {
            assert_eq!(sliced[idx], expected as i64);
            expected += stride[2];
        }

        let sliced2 = view.slice(2).slice(3);
        let mut expected = stride[0] * 2 + stride[1] * 3;
        for idx in sliced2.bounds() {
            assert_eq!(sliced2[idx], expected as i64);
            expected += stride[2];
        }

        assert_eq!(view.slice(2).slice(3)[3], (stride[0] * 2 + stride[1] * 3 + 3) as i64);
    }

    #[test]
    #[should_panic]
    fn slice_out_of_bounds() {
        let buffer = [0u8; 12];
        let _ = DenseView::new(&buffer[..], Extent::new([3, 4])).slice(3);
    }

    #[test]
    fn sectioning() {
        let bounds = Extent::new([4, 8, 12]);
        let buffer = sequential(bounds);
        let view = sequential_view(bounds, &buffer);
        let origin = Coordinate::new([1, 2, 3]);
        let start = origin.dot(view.stride());

        let window = Extent::new([2, 3, 4]);
        let section = view.section(origin, window);
        assert_eq!(section.bounds(), window);
        for idx in window {
            assert_eq!(section[idx], (start + idx.dot(view.stride())) as i64);
        }

        let rest = view.section_from(origin);
        assert_eq!(rest.bounds(), bounds - origin);
        for idx in rest.bounds() {
            assert_eq!(rest[idx], view[origin + idx]);
        }
    }

    #[test]
    fn section_of_every_window_coordinate() {
        let bounds = Extent::new([4, 5, 9]);
        let buffer = sequential(bounds);
        let view = DenseView::new(&buffer[..], bounds);
        let section = view.section(Coordinate::new([1, 2, 3]), Extent::new([2, 3, 4]));
        assert_eq!(section.bounds(), Extent::new([2, 3, 4]));
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    assert_eq!(section[[i, j, k]], view[[1 + i, 2 + j, 3 + k]]);
                }
            }
        }
        assert_eq!(section.iter().count(), 24);
    }

    #[test]
    fn empty_section_at_far_edge() {
        let bounds = Extent::new([4, 5]);
        let buffer = sequential(bounds);
        let view = DenseView::new(&buffer[..], bounds);
        let section = view.section_from(Coordinate::new([4, 0]));
        assert_eq!(section.size(), 0);
        assert_eq!(section.iter().count(), 0);
    }

    #[test]
    #[should_panic]
    fn section_too_big() {
        let bounds = Extent::new([4, 5]);
        let buffer = sequential(bounds);
        let view = DenseView::new(&buffer[..], bounds);
        let _ = view.section(Coordinate::new([1, 1]), Extent::new([3, 5]));
    }

    #[test]
    fn writing_through_sections() {
        let bounds = Extent::new([12, 8, 6]);
        let mut buffer = vec![0; bounds.size()];
        let mut view = DenseViewMut::new(&mut buffer[..], bounds);
        view[[5, 3, 2]] = 30;
        assert_eq!(view.view().slice(5)[[3, 2]], 30);
        assert_eq!(view.view().slice(5).slice(3)[2], 30);

        view.fill_with(|idx| idx[0] * idx[1] * idx[2]);
        for idx in bounds {
            assert_eq!(view[idx], idx[0] * idx[1] * idx[2]);
        }

        let mut section = view.view_mut().section(Coordinate::new([6, 3, 2]), Extent::new([3, 3, 2]));
        section[[0, 0, 0]] = -1;
        let sum: isize = section.iter().sum();
        assert_eq!(sum, (6..9).map(|i| (3..6).map(|j| (2..4).map(|k| i * j * k).sum::<isize>()).sum::<isize>()).sum::<isize>() - 36 - 1);
        assert_eq!(view[[6, 3, 2]], -1);

        let frozen = DenseView::from(view);
        assert_eq!(frozen[[6, 3, 2]], -1);
    }

    proptest! {
        #[test]
        fn access_is_linear_offset(bounds in gen_nonempty_extent::<3>(6)) {
            let buffer = sequential(bounds);
            let view = DenseView::new(&buffer[..], bounds);
            for idx in bounds {
                prop_assert_eq!(view[idx], idx.dot(view.stride()) as i64);
            }
        }

        #[test]
        fn slice_matches_leading_index(bounds in gen_nonempty_extent::<3>(6), k in 0isize..6) {
            let buffer = sequential(bounds);
            let view = DenseView::new(&buffer[..], bounds);
            let k = k % bounds[0];
            let sliced = view.slice(k);
            for idx in sliced.bounds() {
                prop_assert_eq!(sliced[idx], view[[k, idx[0], idx[1]]]);
            }
        }

        #[test]
        fn section_matches_source((bounds, origin, window) in gen_section::<3>(6)) {
            let buffer = sequential(bounds);
            let view = DenseView::new(&buffer[..], bounds);
            let section = view.section(origin, window);
            prop_assert_eq!(section.iter().count(), window.size());
            for idx in window {
                prop_assert_eq!(section[idx], view[origin + idx]);
            }
        }
    }
}
