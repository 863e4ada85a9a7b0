//! A pure-Rust library for addressing flat buffers as multi-dimensional
//! arrays, without copying or owning them.
//!
//! [`Coordinate<R>`] names one element of an `R`-dimensional array, and
//! [`Extent<R>`] gives the size of each axis. The rank `R` is a const
//! generic, so a `Coordinate` can only be used with an `Extent` (or a view)
//! of the same rank; mixing ranks is a compile-time error.
//!
//! [`MultiIndexIterator`] enumerates the `Coordinate`s of an `Extent` in
//! row-major order (the last axis varies fastest). It is a random-access
//! cursor: advancing by any distance, or measuring the distance between two
//! cursors, costs `O(R)`. [`Coordinates`] wraps it as an ordinary
//! [`std::iter::Iterator`].
//!
//! [`Dense`] and [`Strided`] are views of a borrowed slice. A `Dense` view
//! derives its stride from its `Extent`; a `Strided` view stores an
//! arbitrary stride, which may skip, reverse or alias elements. Both
//! implement [`Layout`]. Slicing a view on its leading axis gives a view of
//! rank `R - 1`, and sectioning gives a `Strided` view of a rectangular
//! sub-window. Both share the original storage.
//!
//! ```
//! use ndview::{Coordinate, Extent, DenseViewMut, Layout};
//! let mut buffer = vec![0; 4 * 5 * 9];
//! let mut view = DenseViewMut::new(&mut buffer[..], Extent::new([4, 5, 9]));
//! view.fill_with(|c| c[0] * 100 + c[1] * 10 + c[2]);
//! let section = view.view().section(Coordinate::new([1, 2, 3]), Extent::new([2, 3, 4]));
//! assert_eq!(section[[1, 2, 3]], 246);
//! assert_eq!(view.view().slice(2).slice(3)[2], 232);
//! ```

#[macro_use]
mod ops;

mod coordinate;
pub use coordinate::{Coordinate};

mod extent;
pub use extent::{Extent};

pub mod iter;
pub use iter::{MultiIndexIterator, Position, Coordinates};

mod layout;
pub use layout::{Layout};

mod dense;
pub use dense::{Dense, DenseView, DenseViewMut};

mod strided;
pub use strided::{Strided, StridedView, StridedViewMut};

#[cfg(test)]
mod strategy;
