//! Componentwise arithmetic for the fixed-rank integer vectors.
//!
//! [`Coordinate`] and [`Extent`] both wrap a `[isize; R]` and share the same
//! elementwise operator semantics. The macros in this module implement one
//! [`std::ops`] trait (and its `*Assign` partner) at a time, in the same way
//! for every pair of operand types.
//!
//! [`Coordinate`]: super::Coordinate
//! [`Extent`]: super::Extent

/// Implement `$lhs<R> $op $rhs<R>` elementwise, with output `$lhs<R>`.
macro_rules! impl_componentwise {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident for $lhs:ident with $rhs:ident) => {
        impl<const R: usize> std::ops::$op_assign<$rhs<R>> for $lhs<R> {
            #[inline(always)]
            fn $method_assign(&mut self, other: $rhs<R>) {
                for (a, b) in self.0.iter_mut().zip(other.0) {
                    std::ops::$op_assign::$method_assign(a, b);
                }
            }
        }

        impl<const R: usize> std::ops::$op<$rhs<R>> for $lhs<R> {
            type Output = $lhs<R>;
            #[inline(always)]
            fn $method(mut self, other: $rhs<R>) -> Self::Output {
                std::ops::$op_assign::$method_assign(&mut self, other);
                self
            }
        }
    };
}

/// Implement `$t<R> $op isize` by applying the scalar to every axis.
macro_rules! impl_scalar {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident for $t:ident) => {
        impl<const R: usize> std::ops::$op_assign<isize> for $t<R> {
            #[inline(always)]
            fn $method_assign(&mut self, v: isize) {
                for a in self.0.iter_mut() {
                    std::ops::$op_assign::$method_assign(a, v);
                }
            }
        }

        impl<const R: usize> std::ops::$op<isize> for $t<R> {
            type Output = $t<R>;
            #[inline(always)]
            fn $method(mut self, v: isize) -> Self::Output {
                std::ops::$op_assign::$method_assign(&mut self, v);
                self
            }
        }
    };
}

/// Implement the observers and conversions shared by every `[isize; R]`
/// wrapper: axis indexing, `Default`, `Display`, and conversion from arrays.
macro_rules! impl_axes {
    ($t:ident) => {
        impl<const R: usize> Default for $t<R> {
            fn default() -> Self { Self::new([0; R]) }
        }

        impl<const R: usize> From<[isize; R]> for $t<R> {
            #[inline(always)]
            fn from(axes: [isize; R]) -> Self { Self::new(axes) }
        }

        impl<const R: usize> From<$t<R>> for [isize; R] {
            #[inline(always)]
            fn from(t: $t<R>) -> Self { t.0 }
        }

        impl<const R: usize> std::ops::Index<usize> for $t<R> {
            type Output = isize;
            #[inline(always)]
            fn index(&self, axis: usize) -> &isize { &self.0[axis] }
        }

        impl<const R: usize> std::ops::IndexMut<usize> for $t<R> {
            #[inline(always)]
            fn index_mut(&mut self, axis: usize) -> &mut isize { &mut self.0[axis] }
        }

        impl<const R: usize> std::fmt::Display for $t<R> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "(")?;
                for (axis, a) in self.0.iter().enumerate() {
                    if axis > 0 { write!(f, ",")?; }
                    write!(f, "{}", a)?;
                }
                write!(f, ")")
            }
        }
    };
}

/// Drops the leading axis. `R1` must be `R - 1`.
pub(crate) fn tail<const R: usize, const R1: usize>(axes: &[isize; R]) -> [isize; R1] {
    let mut rest = [0; R1];
    rest.copy_from_slice(&axes[1..]);
    rest
}

/// Implement rank-reducing operations for each listed `R => R - 1` pair.
///
/// Const generic arithmetic is not available on stable Rust, so everything
/// that produces a rank-`(R-1)` value from a rank-`R` one is spelled out per
/// rank here.
macro_rules! impl_split_first {
    ($($r:literal => $lower:literal),*) => {
        $(
            impl $crate::Coordinate<$r> {
                /// Returns the leading axis and the remaining axes.
                pub fn split_first(self) -> (isize, $crate::Coordinate<$lower>) {
                    (self.0[0], $crate::Coordinate::new($crate::ops::tail(&self.0)))
                }
            }

            impl $crate::Extent<$r> {
                /// Returns the leading axis and the remaining axes.
                pub fn split_first(self) -> (isize, $crate::Extent<$lower>) {
                    (self.0[0], $crate::Extent::new($crate::ops::tail(&self.0)))
                }
            }
        )*
    };
}

impl_split_first!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);

// ----------------------------------------------------------------------------
