//! Property-based generators for [`Coordinate`]s, [`Extent`]s and the
//! buffers that views borrow.
//!
//! These strategies are used by the `proptest` tests throughout the crate.
//! This module is only included in test builds (`#[cfg(test)]`).

use proptest::prelude::*;

use crate::{Coordinate, Extent};

/// Generates a `Coordinate` whose axes lie in `-max_abs..=max_abs`.
pub fn gen_coordinate<const R: usize>(max_abs: isize) -> impl Strategy<Value = Coordinate<R>> {
    proptest::collection::vec(-max_abs..=max_abs, R)
        .prop_map(|axes| Coordinate::from_slice(&axes))
}

/// Generates an `Extent` whose axes lie in `0..=max`. Some of the generated
/// `Extent`s are therefore empty.
pub fn gen_extent<const R: usize>(max: isize) -> impl Strategy<Value = Extent<R>> {
    proptest::collection::vec(0..=max, R)
        .prop_map(|axes| Extent::new(Coordinate::<R>::from_slice(&axes).into_inner()))
}

/// Generates a non-empty `Extent` whose axes lie in `1..=max`.
pub fn gen_nonempty_extent<const R: usize>(max: isize) -> impl Strategy<Value = Extent<R>> {
    proptest::collection::vec(1..=max, R)
        .prop_map(|axes| Extent::new(Coordinate::<R>::from_slice(&axes).into_inner()))
}

/// Generates an `Extent` together with a step count in `0..=size`, i.e.
/// anywhere from the first `Coordinate` to the end.
pub fn gen_extent_and_ordinal<const R: usize>(max: isize) -> impl Strategy<Value = (Extent<R>, isize)> {
    gen_extent::<R>(max).prop_flat_map(|e| (Just(e), 0..=e.size() as isize))
}

/// Generates a non-empty `Extent`, a `Coordinate` inside it, and a
/// sub-window that starts at that `Coordinate` and fits inside the `Extent`.
pub fn gen_section<const R: usize>(max: isize) -> impl Strategy<Value = (Extent<R>, Coordinate<R>, Extent<R>)> {
    gen_nonempty_extent::<R>(max).prop_flat_map(|e| {
        let origin = e.axes().map(|&a| 0..a).collect::<Vec<_>>();
        (Just(e), origin)
    }).prop_flat_map(|(e, origin)| {
        let origin = Coordinate::<R>::from_slice(&origin);
        let window = (0..R).map(|axis| 0..=e[axis] - origin[axis]).collect::<Vec<_>>();
        (Just(e), Just(origin), window)
    }).prop_map(|(e, origin, window)| {
        (e, origin, Extent::new(Coordinate::<R>::from_slice(&window).into_inner()))
    })
}

/// A buffer of `0, 1, 2, ...` long enough for a dense view of `e`.
pub fn sequential<const R: usize>(e: Extent<R>) -> Vec<i64> {
    (0..e.size() as i64).collect()
}
