/// A position or displacement in an `R`-dimensional integer space.
///
/// A `Coordinate` is a free vector: it may be negative, and it may lie
/// outside any [`Extent`]. It is used as an index into a view, as the origin
/// of a section, and as a stride.
///
/// ```
/// use ndview::{Coordinate};
/// let c = Coordinate::new([1, 2, 3]);
/// let d = Coordinate::new([0, -1, 4]);
/// assert_eq!(c + d, Coordinate::new([1, 1, 7]));
/// assert_eq!(c * 2 - d, Coordinate::new([2, 5, 2]));
/// assert_eq!(-c, Coordinate::new([-1, -2, -3]));
/// assert_eq!(c.to_string(), "(1,2,3)");
/// ```
///
/// [`Extent`]: super::Extent
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct Coordinate<const R: usize>(pub(crate) [isize; R]);

impl<const R: usize> Coordinate<R> {
    const POSITIVE_RANK: () = assert!(R > 0, "Rank must be greater than 0");

    /// Constructs a `Coordinate` from one value per axis.
    #[inline(always)]
    pub const fn new(axes: [isize; R]) -> Self {
        let () = Self::POSITIVE_RANK;
        Self(axes)
    }

    /// Constructs a `Coordinate` from the leading values of `axes`. Axes for
    /// which no value is given are zero.
    ///
    /// # Panics
    ///
    /// Panics if `axes` has more than `R` values.
    ///
    /// ```
    /// use ndview::{Coordinate};
    /// assert_eq!(Coordinate::<3>::from_slice(&[4, 5]), Coordinate::new([4, 5, 0]));
    /// ```
    pub fn from_slice(axes: &[isize]) -> Self {
        assert!(axes.len() <= R, "{} values given for a Coordinate of rank {}", axes.len(), R);
        let mut c = Self::default();
        c.0[..axes.len()].copy_from_slice(axes);
        c
    }

    /// Returns the values of all axes.
    #[inline(always)]
    pub fn into_inner(self) -> [isize; R] { self.0 }

    /// Iterates over the values of all axes.
    pub fn iter(&self) -> std::slice::Iter<'_, isize> { self.0.iter() }

    /// Returns `sum(self[i] * stride[i])`.
    #[inline(always)]
    pub fn dot(self, stride: Self) -> isize {
        self.0.iter().zip(stride.0).map(|(&i, s)| i * s).sum()
    }
}

impl_axes!(Coordinate);
impl_componentwise!(Add, add, AddAssign, add_assign for Coordinate with Coordinate);
impl_componentwise!(Sub, sub, SubAssign, sub_assign for Coordinate with Coordinate);
impl_scalar!(Mul, mul, MulAssign, mul_assign for Coordinate);
impl_scalar!(Div, div, DivAssign, div_assign for Coordinate);

impl<const R: usize> std::ops::Mul<Coordinate<R>> for isize {
    type Output = Coordinate<R>;
    #[inline(always)]
    fn mul(self, c: Coordinate<R>) -> Coordinate<R> { c * self }
}

impl<const R: usize> std::ops::Neg for Coordinate<R> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self { self * -1 }
}

// ----------------------------------------------------------------------------

/// A rank-1 `Coordinate` behaves like a scalar.
///
/// ```
/// use ndview::{Coordinate};
/// let mut c = Coordinate::new([4]);
/// assert_eq!(c.post_increment(), Coordinate::new([4]));
/// assert_eq!(c.increment(), Coordinate::new([6]));
/// assert_eq!(isize::from(c), 6);
/// ```
impl Coordinate<1> {
    /// Adds one, and returns the new value.
    pub fn increment(&mut self) -> Self { self.0[0] += 1; *self }

    /// Subtracts one, and returns the new value.
    pub fn decrement(&mut self) -> Self { self.0[0] -= 1; *self }

    /// Adds one, and returns the old value.
    pub fn post_increment(&mut self) -> Self { let old = *self; self.0[0] += 1; old }

    /// Subtracts one, and returns the old value.
    pub fn post_decrement(&mut self) -> Self { let old = *self; self.0[0] -= 1; old }
}

impl From<isize> for Coordinate<1> {
    #[inline(always)]
    fn from(v: isize) -> Self { Self::new([v]) }
}

impl From<Coordinate<1>> for isize {
    #[inline(always)]
    fn from(c: Coordinate<1>) -> Self { c.0[0] }
}

impl std::ops::AddAssign<isize> for Coordinate<1> {
    #[inline(always)]
    fn add_assign(&mut self, v: isize) { self.0[0] += v; }
}

impl std::ops::SubAssign<isize> for Coordinate<1> {
    #[inline(always)]
    fn sub_assign(&mut self, v: isize) { self.0[0] -= v; }
}

// ----------------------------------------------------------------------------
