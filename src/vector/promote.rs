//! Mixed-dimension operators.
//!
//! Every binary operation of the vector layer is defined for all ordered
//! pairs of dimensions over {2, 3, 4} by a single rule: the lower-dimension
//! operand is [promoted][Vector::promote] (zero-filled) to the higher
//! dimension, then the one same-dimension implementation runs. Each operator
//! therefore has one elementwise implementation plus the macro-generated
//! promoting impls below, rather than nine hand-written variants.

use std::ops::{Add, Div, Mul, Sub};

use crate::traits::{Number, Zero};

use super::{Vec4, Vector};

/// The dot product, defined for operands of equal or differing dimensions.
///
/// Geometrically, the dot product provides information about the relative
/// angle of two vectors: positive means less than 90° apart, zero exactly
/// 90°, negative more than 90°.
///
/// The lower-dimension operand is zero-filled up to the other's dimension
/// first; since the new elements are zero they contribute nothing to the sum,
/// so `vec2(a, b).dot(vec3(c, d, e))` equals `a*c + b*d`.
///
/// # Examples
///
/// ```
/// # use linalg4::*;
/// assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
/// assert_eq!(vec2(1, 3).dot(vec3(4, -2, -1)), -2);
/// ```
pub trait Dot<Rhs = Self> {
    /// The scalar type of the product.
    type Output;

    /// Computes the dot product of `self` and `rhs`.
    fn dot(self, rhs: Rhs) -> Self::Output;
}

/// The cross product, defined for operands of equal or differing dimensions.
///
/// Both operands are promoted to 4 dimensions before the product is taken
/// (the `w` element is ignored), and the output is *always* a [`Vec4`] with
/// `w = 0` — even for two [`Vec2`][super::Vec2] inputs, where only the `z`
/// element can be nonzero. Returning the widest type keeps the result usable
/// as a homogeneous direction without a second promotion at the call site.
///
/// The right-hand rule applies: swapping the operands inverts the result.
///
/// # Examples
///
/// ```
/// # use linalg4::*;
/// assert_eq!(Vec4f::X.cross(Vec4f::Y), Vec4f::Z);
/// assert_eq!(Vec4f::Y.cross(Vec4f::X), -Vec4f::Z);
/// assert_eq!(vec2(1.0, 0.0).cross(vec3(0.0, 1.0, 0.0)), Vec4f::Z);
/// ```
pub trait Cross<Rhs = Self> {
    /// The vector type of the product (always 4-dimensional).
    type Output;

    /// Computes the cross product of `self` and `rhs`.
    fn cross(self, rhs: Rhs) -> Self::Output;
}

impl<T: Number, const N: usize> Dot for Vector<T, N> {
    type Output = T;

    fn dot(self, rhs: Self) -> T {
        self.into_array()
            .into_iter()
            .zip(rhs.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }
}

impl<T: Number> Cross for Vec4<T> {
    type Output = Vec4<T>;

    fn cross(self, rhs: Self) -> Vec4<T> {
        let [a1, a2, a3, _] = self.into_array();
        let [b1, b2, b3, _] = rhs.into_array();

        #[rustfmt::skip]
        let cross = crate::vec4(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
            T::ZERO,
        );
        cross
    }
}

/// Generates the promoting impls for one (lower, higher) dimension pair, in
/// both argument orders.
macro_rules! promoting_binops {
    ($($lo:literal => $hi:literal),+ $(,)?) => {
        $(
            impl<T: Number> Add<Vector<T, $hi>> for Vector<T, $lo> {
                type Output = Vector<T, $hi>;

                fn add(self, rhs: Vector<T, $hi>) -> Self::Output {
                    self.promote::<$hi>() + rhs
                }
            }

            impl<T: Number> Add<Vector<T, $lo>> for Vector<T, $hi> {
                type Output = Vector<T, $hi>;

                fn add(self, rhs: Vector<T, $lo>) -> Self::Output {
                    self + rhs.promote::<$hi>()
                }
            }

            impl<T: Number> Sub<Vector<T, $hi>> for Vector<T, $lo> {
                type Output = Vector<T, $hi>;

                fn sub(self, rhs: Vector<T, $hi>) -> Self::Output {
                    self.promote::<$hi>() - rhs
                }
            }

            impl<T: Number> Sub<Vector<T, $lo>> for Vector<T, $hi> {
                type Output = Vector<T, $hi>;

                fn sub(self, rhs: Vector<T, $lo>) -> Self::Output {
                    self - rhs.promote::<$hi>()
                }
            }

            impl<T: Number> Mul<Vector<T, $hi>> for Vector<T, $lo> {
                type Output = Vector<T, $hi>;

                fn mul(self, rhs: Vector<T, $hi>) -> Self::Output {
                    self.promote::<$hi>() * rhs
                }
            }

            impl<T: Number> Mul<Vector<T, $lo>> for Vector<T, $hi> {
                type Output = Vector<T, $hi>;

                fn mul(self, rhs: Vector<T, $lo>) -> Self::Output {
                    self * rhs.promote::<$hi>()
                }
            }

            impl<T: Number> Div<Vector<T, $hi>> for Vector<T, $lo> {
                type Output = Vector<T, $hi>;

                fn div(self, rhs: Vector<T, $hi>) -> Self::Output {
                    self.promote::<$hi>() / rhs
                }
            }

            impl<T: Number> Div<Vector<T, $lo>> for Vector<T, $hi> {
                type Output = Vector<T, $hi>;

                fn div(self, rhs: Vector<T, $lo>) -> Self::Output {
                    self / rhs.promote::<$hi>()
                }
            }

            impl<T: Zero + PartialEq + Copy> PartialEq<Vector<T, $hi>> for Vector<T, $lo> {
                fn eq(&self, other: &Vector<T, $hi>) -> bool {
                    self.promote::<$hi>() == *other
                }
            }

            impl<T: Zero + PartialEq + Copy> PartialEq<Vector<T, $lo>> for Vector<T, $hi> {
                fn eq(&self, other: &Vector<T, $lo>) -> bool {
                    *self == other.promote::<$hi>()
                }
            }

            impl<T: Number> Dot<Vector<T, $hi>> for Vector<T, $lo> {
                type Output = T;

                fn dot(self, rhs: Vector<T, $hi>) -> T {
                    self.promote::<$hi>().dot(rhs)
                }
            }

            impl<T: Number> Dot<Vector<T, $lo>> for Vector<T, $hi> {
                type Output = T;

                fn dot(self, rhs: Vector<T, $lo>) -> T {
                    self.dot(rhs.promote::<$hi>())
                }
            }
        )+
    };
}

promoting_binops! {
    2 => 3,
    2 => 4,
    3 => 4,
}

/// Generates the [`Cross`] impl for one ordered dimension pair. All eight
/// lower-dimension pairs funnel into the 4-dimensional implementation above.
macro_rules! promoting_cross {
    ($(($a:literal, $b:literal)),+ $(,)?) => {
        $(
            impl<T: Number> Cross<Vector<T, $b>> for Vector<T, $a> {
                type Output = Vec4<T>;

                fn cross(self, rhs: Vector<T, $b>) -> Vec4<T> {
                    self.promote::<4>().cross(rhs.promote::<4>())
                }
            }
        )+
    };
}

promoting_cross! {
    (2, 2), (2, 3), (2, 4),
    (3, 2), (3, 3), (3, 4),
    (4, 2), (4, 3),
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Vec2f, Vec3f, Vec4f};

    use super::*;

    #[test]
    fn mixed_arithmetic_promotes_the_smaller_side() {
        // 2 vs 3
        assert_eq!(vec2(1.0, 2.0) + vec3(3.0, 4.0, 5.0), vec3(4.0, 6.0, 5.0));
        assert_eq!(vec3(3.0, 4.0, 5.0) + vec2(1.0, 2.0), vec3(4.0, 6.0, 5.0));
        // 2 vs 4
        assert_eq!(vec2(1, 2) + vec4(1, 1, 1, 1), vec4(2, 3, 1, 1));
        assert_eq!(vec4(1, 1, 1, 1) - vec2(1, 2), vec4(0, -1, 1, 1));
        // 3 vs 4
        assert_eq!(vec3(1, 2, 3) + vec4(1, 1, 1, 1), vec4(2, 3, 4, 1));
        assert_eq!(vec4(1, 1, 1, 1) - vec3(1, 2, 3), vec4(0, -1, -2, 1));
    }

    #[test]
    fn mixed_equals_promoted() {
        // Promoting by hand and then operating gives the same result as the
        // mixed-dimension operator.
        let a = vec2(1.5, -2.5);
        let b = vec4(8.0, 16.0, 32.0, 64.0);
        assert_eq!(a + b, a.promote::<4>() + b);
        assert_eq!(a - b, a.promote::<4>() - b);
        assert_eq!(a * b, a.promote::<4>() * b);
        assert_eq!(b / a.promote::<4>(), b / a);
    }

    #[test]
    fn mixed_multiplication_zeroes_missing_elements() {
        // The promoted elements are 0, so they annihilate the other operand's.
        assert_eq!(vec2(2, 3) * vec4(4, 5, 6, 7), vec4(8, 15, 0, 0));
        assert_eq!(vec3(2, 3, 4) * vec2(5, 6), vec3(10, 18, 0));
    }

    #[test]
    fn mixed_division_produces_nonfinite_elements() {
        // 3/0 in the promoted lane: IEEE semantics, not an error.
        let q = vec4(1.0, 2.0, 3.0, 4.0) / vec2(1.0, 2.0);
        assert_eq!(q.x, 1.0);
        assert_eq!(q.y, 1.0);
        assert_eq!(q.z, f32::INFINITY);
        assert_eq!(q.w, f32::INFINITY);

        // 0/3 the other way around is merely zero.
        assert_eq!(vec2(3.0, 4.0) / vec4(1.0, 2.0, 3.0, 4.0), vec4(3.0, 2.0, 0.0, 0.0));
    }

    #[test]
    fn mixed_equality_is_exact_on_the_promoted_value() {
        assert!(vec2(1.0, 2.0) == vec3(1.0, 2.0, 0.0));
        assert!(vec3(1.0, 2.0, 0.0) == vec2(1.0, 2.0));
        assert!(vec2(1.0, 2.0) != vec3(1.0, 2.0, 5.0));
        assert!(vec2(1.0, 2.0) == vec4(1.0, 2.0, 0.0, 0.0));
        assert!(vec3(1.0, 2.0, 3.0) != vec4(1.0, 2.0, 3.0, 1.0));
        assert!(vec3(1.0, 2.0, 3.0) == vec4(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn mixed_dot() {
        // The zero-filled elements contribute nothing.
        assert_eq!(vec2(1, 2).dot(vec3(3, 4, 5)), 11);
        assert_eq!(vec3(3, 4, 5).dot(vec2(1, 2)), 11);
        assert_eq!(vec2(1, 2).dot(vec4(3, 4, 5, 6)), 11);
        assert_eq!(vec4(3, 4, 5, 6).dot(vec3(1, 2, -1)), 6);
    }

    #[test]
    fn cross_always_returns_vec4() {
        // Two planar vectors still produce a homogeneous direction.
        let c = vec2(1.0, 0.0).cross(vec2(0.0, 1.0));
        assert_eq!(c, vec4(0.0, 0.0, 1.0, 0.0));

        assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec4f::Z);
        assert_eq!(Vec3f::X.cross(vec2(0.0, 1.0)), Vec4f::Z);
        assert_eq!(vec2(0.0, 1.0).cross(Vec4f::Z), Vec4f::X);
        assert_eq!(Vec4f::Z.cross(Vec3f::X), Vec4f::Y);
    }

    #[test]
    fn cross_result_has_zero_w() {
        let c = vec4(1.0, 2.0, 3.0, 4.0).cross(vec3(5.0, 6.0, 7.0));
        assert_eq!(c.w, 0.0);

        let c = Vec2f::X.cross(Vec2f::X);
        assert_eq!(c, Vec4f::ZERO);
    }
}
