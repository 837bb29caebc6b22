//! `std::ops` implementations for [`Mat4`].

use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::{approx::ApproxEq, traits::Number, Vector};

use super::Mat4;

impl<T> Index<(usize, usize)> for Mat4<T> {
    type Output = T;

    /// Returns the element at `(row, col)`.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Mat4<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

impl<T, U> PartialEq<Mat4<U>> for Mat4<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Mat4<U>) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(lhs, rhs)| lhs.iter().zip(rhs).all(|(l, r)| l == r))
    }
}

impl<T: Eq> Eq for Mat4<T> {}

impl<T> ApproxEq for Mat4<T>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }
}

/// Matrix multiplication (composition of transforms).
///
/// With the row-vector convention, `a * b` applies `a` first: for any `v`,
/// `v * (a * b) == (v * a) * b`.
impl<T: Number> Mul<Mat4<T>> for Mat4<T> {
    type Output = Mat4<T>;

    fn mul(self, rhs: Mat4<T>) -> Self::Output {
        Mat4::from_fn(|row, col| {
            (0..4)
                .map(|i| self.0[row][i] * rhs.0[i][col])
                .fold(T::ZERO, |acc, p| acc + p)
        })
    }
}

impl<T: Number> MulAssign<Mat4<T>> for Mat4<T> {
    fn mul_assign(&mut self, rhs: Mat4<T>) {
        *self = *self * rhs;
    }
}

/// Matrix-Scalar multiplication (element-wise scaling).
impl<T: Number> Mul<T> for Mat4<T> {
    type Output = Mat4<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

fn transform<T: Number>(v: Vector<T, 4>, m: &Mat4<T>) -> Vector<T, 4> {
    Vector::from_fn(|col| {
        (0..4)
            .map(|row| v[row] * m.0[row][col])
            .fold(T::ZERO, |acc, p| acc + p)
    })
}

/// Transforms a row vector by a homogeneous matrix.
impl<T: Number> Mul<Mat4<T>> for Vector<T, 4> {
    type Output = Vector<T, 4>;

    fn mul(self, rhs: Mat4<T>) -> Self::Output {
        transform(self, &rhs)
    }
}

/// Transforms a 3-D point by a homogeneous matrix.
///
/// The point is promoted with `w = 1`, so translations apply to it. To
/// transform a *direction*, extend it with `w = 0` instead.
impl<T: Number> Mul<Mat4<T>> for Vector<T, 3> {
    type Output = Vector<T, 4>;

    fn mul(self, rhs: Mat4<T>) -> Self::Output {
        transform(self.extend(T::ONE), &rhs)
    }
}

/// Transforms a 2-D point by a homogeneous matrix.
///
/// The point is promoted with `z = 0` and `w = 1`.
impl<T: Number> Mul<Mat4<T>> for Vector<T, 2> {
    type Output = Vector<T, 4>;

    fn mul(self, rhs: Mat4<T>) -> Self::Output {
        transform(self.extend(T::ZERO).extend(T::ONE), &rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, vec4, Mat4f, Vec4f};

    use super::*;

    #[test]
    fn index() {
        let mut m = Mat4::from_fn(|row, col| (row * 4 + col) as i32);
        assert_eq!(m[(0, 0)], 0);
        assert_eq!(m[(1, 2)], 6);
        m[(1, 2)] = -1;
        assert_eq!(m[(1, 2)], -1);
        assert_eq!(m.get(4, 0), None);
        assert_eq!(m.get(0, 4), None);
        assert_eq!(m.get(3, 3), Some(&15));
    }

    #[test]
    fn matrix_multiplication() {
        let a = Mat4::from_rows([
            [1.0, 2.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let b = Mat4f::from_diagonal([2.0, 2.0, 2.0, 1.0]);
        assert_eq!(
            a * b,
            Mat4::from_rows([
                [2.0, 4.0, 0.0, 0.0],
                [0.0, 2.0, 0.0, 0.0],
                [0.0, 0.0, 2.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ])
        );

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn scalar_multiplication() {
        assert_eq!(
            Mat4::<i32>::IDENTITY * 3,
            Mat4::from_diagonal([3, 3, 3, 3])
        );
    }

    #[test]
    fn transform_chains_match_composition() {
        let a = Mat4f::rotation_z(0.4);
        let b = Mat4f::translation(-1.0, 5.0, 2.0);
        let v = vec3(1.0, 2.0, 3.0);
        assert_approx_eq!(v * a * b, v * (a * b)).abs(1e-6);
    }

    #[test]
    fn transform_promotes_points() {
        // The skew row only contributes when `w` is promoted to 1.
        let m = Mat4::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [100.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(vec3(0.0, 0.0, 0.0) * m, vec4(100.0, 0.0, 0.0, 1.0));
        assert_eq!(Vec4f::ZERO * m, Vec4f::ZERO);
    }
}
