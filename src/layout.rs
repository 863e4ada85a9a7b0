use super::{Coordinate, Extent};

/// An affine map from [`Coordinate`]s to offsets in a flat buffer.
///
/// The offset of `idx` is `origin() + idx.dot(stride())`. It is defined
/// only for `idx` inside [`bounds()`].
///
/// Both [`Dense`] and [`Strided`] views implement this trait, so code that
/// only needs to know where elements are can treat them alike.
///
/// [`bounds()`]: Self::bounds
/// [`Dense`]: super::Dense
/// [`Strided`]: super::Strided
pub trait Layout<const R: usize> {
    /// The `Coordinate`s that have an offset.
    fn bounds(&self) -> Extent<R>;

    /// The distance between consecutive elements along each axis.
    fn stride(&self) -> Coordinate<R>;

    /// The offset of the all-zeros `Coordinate`.
    fn origin(&self) -> usize;

    /// The number of axes.
    fn rank(&self) -> usize { R }

    /// The number of elements, i.e. `self.bounds().size()`.
    fn size(&self) -> usize { self.bounds().size() }

    /// Returns the offset of `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds, or if its offset would be negative.
    #[inline(always)]
    fn offset_of(&self, idx: Coordinate<R>) -> usize {
        let bounds = self.bounds();
        assert!(bounds.contains(idx), "Index {:?} is out of bounds for size {:?}", idx, bounds);
        offset(self.origin(), idx, self.stride())
    }
}

/// Returns `origin + idx.dot(stride)` without checking `idx`.
///
/// # Panics
///
/// Panics if the result is negative.
#[inline(always)]
pub(crate) fn offset<const R: usize>(origin: usize, idx: Coordinate<R>, stride: Coordinate<R>) -> usize {
    let offset = origin as isize + idx.dot(stride);
    usize::try_from(offset).unwrap_or_else(|_| {
        panic!("Index {:?} with stride {:?} is before the start of the buffer", idx, stride)
    })
}

/// Checks that the window `(origin, window)` lies inside `bounds`, and
/// returns the offset at which the window starts.
///
/// An empty window is always allowed; it starts at the start of `layout`.
pub(crate) fn section_origin<const R: usize>(
    layout: &impl Layout<R>,
    origin: Coordinate<R>,
    window: Extent<R>,
) -> usize {
    match window.last() {
        None => layout.origin(),
        Some(last) => {
            let bounds = layout.bounds();
            assert!(
                bounds.contains(origin + last),
                "Section {:?} at {:?} is out of bounds for size {:?}", window, origin, bounds,
            );
            layout.offset_of(origin)
        },
    }
}
