//! Enumerating the [`Coordinate`]s of an [`Extent`].
//!
//! [`MultiIndexIterator`] is a random-access cursor. It treats a
//! `Coordinate` as a mixed-radix number whose digits are the axes and whose
//! radices are the sizes of the `Extent`, with the last axis least
//! significant. Stepping by one is a carry or borrow, and advancing by `n`
//! is a single mixed-radix addition, so it costs `O(R)` whatever `n` is.
//!
//! A cursor can also rest one step before the first `Coordinate` or one
//! step past the last one. These are the [`Position::BeforeStart`] and
//! [`Position::End`] states, which can never be confused with a real
//! `Coordinate`.
//!
//! [`Coordinates`] wraps a pair of cursors as a [`std::iter::Iterator`].

use std::cmp::{Ordering};
use std::iter::{FusedIterator};

use super::{Coordinate, Extent};

/// Where a [`MultiIndexIterator`] is.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Position<const R: usize> {
    /// One step before the first `Coordinate`.
    BeforeStart,

    /// At a `Coordinate` inside the `Extent`.
    At(Coordinate<R>),

    /// One step past the last `Coordinate`.
    End,
}

/// A random-access cursor over the [`Coordinate`]s of an [`Extent`].
///
/// The order is lexicographic with the last axis varying fastest.
///
/// Two cursors compare equal if they are at the same [`Position`]; the
/// `Extent`s are not compared. Comparing or subtracting cursors over
/// different `Extent`s gives a meaningless answer.
///
/// ```
/// use ndview::{Coordinate, Extent};
/// let e = Extent::new([4, 5, 9]);
/// let mut it = e.begin() + 25;
/// assert_eq!(it.coordinate(), Coordinate::new([0, 2, 7]));
/// it += 128;
/// assert_eq!(it.coordinate(), Coordinate::new([3, 2, 0]));
/// assert_eq!(it - e.begin(), 153);
/// assert_eq!(e.end() - e.begin(), 180);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct MultiIndexIterator<const R: usize> {
    bounds: Extent<R>,
    position: Position<R>,
}

impl<const R: usize> MultiIndexIterator<R> {
    /// A cursor at `position` within `bounds`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is a `Coordinate` that `bounds` does not
    /// contain.
    pub fn new(bounds: Extent<R>, position: Position<R>) -> Self {
        if let Position::At(c) = position {
            assert!(bounds.contains(c), "Coordinate {:?} is out of bounds for size {:?}", c, bounds);
        }
        Self {bounds, position}
    }

    /// A cursor at the first `Coordinate` of `bounds`, i.e. all zeros. If
    /// `bounds` is empty, this is the same as [`Self::end()`].
    pub fn start(bounds: Extent<R>) -> Self {
        let position = if bounds.is_empty() { Position::End } else { Position::At(Coordinate::default()) };
        Self {bounds, position}
    }

    /// A cursor one step past the last `Coordinate` of `bounds`.
    pub fn end(bounds: Extent<R>) -> Self { Self {bounds, position: Position::End} }

    /// A cursor one step before the first `Coordinate` of `bounds`.
    pub fn before_start(bounds: Extent<R>) -> Self { Self {bounds, position: Position::BeforeStart} }

    /// The `Extent` this cursor enumerates.
    pub fn bounds(&self) -> Extent<R> { self.bounds }

    /// The current position.
    pub fn position(&self) -> Position<R> { self.position }

    /// The current `Coordinate`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is at [`Position::BeforeStart`] or
    /// [`Position::End`].
    pub fn coordinate(&self) -> Coordinate<R> {
        match self.position {
            Position::At(c) => c,
            p => panic!("Cannot dereference {:?} of size {:?}", p, self.bounds),
        }
    }

    /// The `Coordinate` `n` steps from the current one, i.e. `(self +
    /// n).coordinate()`.
    pub fn get(&self, n: isize) -> Coordinate<R> { (*self + n).coordinate() }

    /// Moves one step forward. Carries into slower axes as needed, and moves
    /// to [`Position::End`] after the last `Coordinate`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is already at the end.
    pub fn increment(&mut self) -> &mut Self {
        self.position = match self.position {
            Position::BeforeStart => Self::start(self.bounds).position,
            Position::At(mut c) => 'carry: {
                for axis in (0..R).rev() {
                    c[axis] += 1;
                    if c[axis] < self.bounds[axis] { break 'carry Position::At(c); }
                    c[axis] = 0;
                }
                Position::End
            },
            Position::End => panic!("Cannot increment past the end of size {:?}", self.bounds),
        };
        self
    }

    /// Moves one step backward. Borrows from slower axes as needed, and
    /// moves to [`Position::BeforeStart`] before the first `Coordinate`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is already before the start.
    pub fn decrement(&mut self) -> &mut Self {
        self.position = match self.position {
            Position::BeforeStart => panic!("Cannot decrement before the start of size {:?}", self.bounds),
            Position::At(mut c) => 'borrow: {
                for axis in (0..R).rev() {
                    c[axis] -= 1;
                    if c[axis] >= 0 { break 'borrow Position::At(c); }
                    c[axis] = self.bounds[axis] - 1;
                }
                Position::BeforeStart
            },
            Position::End => match self.bounds.last() {
                Some(c) => Position::At(c),
                None => Position::BeforeStart,
            },
        };
        self
    }

    /// Moves `n` steps, forward if `n` is positive and backward if it is
    /// negative.
    ///
    /// # Panics
    ///
    /// Panics if the result would be further than one step outside the
    /// `Extent`, i.e. before [`Position::BeforeStart`] or after
    /// [`Position::End`].
    pub fn advance(&mut self, n: isize) -> &mut Self {
        if n == 0 { return self; }
        self.position = if self.bounds.is_empty() {
            match self.ordinal() + n {
                -1 => Position::BeforeStart,
                0 => Position::End,
                _ => panic!("Advanced by {} out of range of size {:?}", n, self.bounds),
            }
        } else if n > 0 {
            self.carry_add(self.encoded(), n)
        } else {
            // Subtract by adding to the complement.
            let complement = self.carry_add(self.complement(self.encoded()), -n);
            match complement {
                Position::BeforeStart => Position::End,
                Position::At(c) => Position::At(self.complement(c)),
                Position::End => Position::BeforeStart,
            }
        };
        self
    }

    /// The number of steps from the start of the `Extent` to `self`. This is
    /// `-1` before the start and `bounds.size()` at the end.
    pub fn ordinal(&self) -> isize {
        match self.position {
            Position::BeforeStart => -1,
            Position::At(c) => self.bounds.axes().zip(c.0).fold(0, |n, (&e, i)| n * e + i),
            Position::End => self.bounds.size() as isize,
        }
    }

    // ------------------------------------------------------------------------

    /// The raw form of the current position as a `Coordinate`.
    ///
    /// A real `Coordinate` is returned as is. The end is encoded as the last
    /// `Coordinate` with the last axis incremented without carrying, and
    /// the before-start position as all zeros except `-1` in the last axis.
    ///
    /// ```
    /// use ndview::{Coordinate, Extent};
    /// let e = Extent::new([4, 5, 6]);
    /// assert_eq!(e.end().encoded(), Coordinate::new([3, 4, 6]));
    /// assert_eq!(e.before_start().encoded(), Coordinate::new([0, 0, -1]));
    /// ```
    pub fn encoded(&self) -> Coordinate<R> {
        match self.position {
            Position::BeforeStart => {
                let mut raw = Coordinate::default();
                raw[R - 1] = -1;
                raw
            },
            Position::At(c) => c,
            Position::End => {
                let mut raw = Coordinate::new(self.bounds.0.map(|e| e - 1));
                raw[R - 1] = self.bounds[R - 1];
                raw
            },
        }
    }

    /// The inverse of [`Self::encoded()`].
    ///
    /// # Panics
    ///
    /// Panics if `raw` is neither in `bounds` nor one of the two encodings
    /// described in [`Self::encoded()`].
    pub fn from_encoded(bounds: Extent<R>, raw: Coordinate<R>) -> Self {
        for candidate in [Self::before_start(bounds), Self::end(bounds)] {
            if candidate.encoded() == raw { return candidate; }
        }
        Self::new(bounds, Position::At(raw))
    }

    /// Replaces every axis `x` of `raw` with `bounds[axis] - 1 - x`.
    ///
    /// This maps the step count `k` to `size - 1 - k`, and swaps the
    /// encodings of the two sentinel positions.
    fn complement(&self, mut raw: Coordinate<R>) -> Coordinate<R> {
        for axis in 0..R {
            raw[axis] = self.bounds[axis] - 1 - raw[axis];
        }
        raw
    }

    /// Mixed-radix addition of `n` to `raw`.
    fn carry_add(&self, mut raw: Coordinate<R>, n: isize) -> Position<R> {
        let mut carry = n;
        for axis in (0..R).rev() {
            let digit = raw[axis] + carry;
            raw[axis] = digit.rem_euclid(self.bounds[axis]);
            carry = digit.div_euclid(self.bounds[axis]);
        }
        match carry {
            0 => Position::At(raw),
            1 if raw.iter().all(|&x| x == 0) => Position::End,
            -1 if Some(raw) == self.bounds.last() => Position::BeforeStart,
            _ => panic!("Advanced by {} out of range of size {:?}", n, self.bounds),
        }
    }
}

impl<const R: usize> PartialEq for MultiIndexIterator<R> {
    fn eq(&self, other: &Self) -> bool { self.position == other.position }
}

impl<const R: usize> Eq for MultiIndexIterator<R> {}

impl<const R: usize> PartialOrd for MultiIndexIterator<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl<const R: usize> Ord for MultiIndexIterator<R> {
    fn cmp(&self, other: &Self) -> Ordering { 0.cmp(&(*other - *self)) }
}

impl<const R: usize> std::ops::AddAssign<isize> for MultiIndexIterator<R> {
    fn add_assign(&mut self, n: isize) { self.advance(n); }
}

impl<const R: usize> std::ops::SubAssign<isize> for MultiIndexIterator<R> {
    fn sub_assign(&mut self, n: isize) { self.advance(-n); }
}

impl<const R: usize> std::ops::Add<isize> for MultiIndexIterator<R> {
    type Output = Self;
    fn add(mut self, n: isize) -> Self { self.advance(n); self }
}

impl<const R: usize> std::ops::Add<MultiIndexIterator<R>> for isize {
    type Output = MultiIndexIterator<R>;
    fn add(self, it: MultiIndexIterator<R>) -> MultiIndexIterator<R> { it + self }
}

impl<const R: usize> std::ops::Sub<isize> for MultiIndexIterator<R> {
    type Output = Self;
    fn sub(mut self, n: isize) -> Self { self.advance(-n); self }
}

impl<const R: usize> std::ops::Sub for MultiIndexIterator<R> {
    type Output = isize;
    fn sub(self, other: Self) -> isize { self.ordinal() - other.ordinal() }
}

// ----------------------------------------------------------------------------

/// An [`Iterator`] over the [`Coordinate`]s of an [`Extent`], in the order
/// of [`MultiIndexIterator`]. The return type of [`Extent::iter()`].
///
/// ```
/// use ndview::{Coordinate, Extent};
/// let mut it = Extent::new([4, 5, 9]).iter();
/// assert_eq!(it.len(), 180);
/// assert_eq!(it.nth(66), Some(Coordinate::new([1, 2, 3])));
/// assert_eq!(it.next_back(), Some(Coordinate::new([3, 4, 8])));
/// assert_eq!(it.len(), 112);
/// ```
#[derive(Debug, Clone)]
pub struct Coordinates<const R: usize> {
    front: MultiIndexIterator<R>,
    back: MultiIndexIterator<R>,
}

impl<const R: usize> Coordinates<R> {
    pub(crate) fn new(bounds: Extent<R>) -> Self {
        Self {front: bounds.begin(), back: bounds.end()}
    }

    /// Iterates from `front` (inclusive) to `back` (exclusive).
    ///
    /// # Panics
    ///
    /// Panics if `front` is after `back`, or if either is before the start.
    pub fn between(front: MultiIndexIterator<R>, back: MultiIndexIterator<R>) -> Self {
        assert!(front <= back, "{:?} is after {:?}", front.position, back.position);
        assert_ne!(front.position, Position::BeforeStart);
        Self {front, back}
    }
}

impl<const R: usize> Iterator for Coordinates<R> {
    type Item = Coordinate<R>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }
        let c = self.front.coordinate();
        self.front.increment();
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.back - self.front) as usize;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.front = self.back;
            return None;
        }
        self.front.advance(n as isize);
        self.next()
    }
}

impl<const R: usize> DoubleEndedIterator for Coordinates<R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }
        self.back.decrement();
        Some(self.back.coordinate())
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.back = self.front;
            return None;
        }
        self.back.advance(-(n as isize));
        self.next_back()
    }
}

impl<const R: usize> ExactSizeIterator for Coordinates<R> {}

impl<const R: usize> FusedIterator for Coordinates<R> {}

// ----------------------------------------------------------------------------
