use std::{array, fmt};

use crate::{
    traits::{Number, One, Sqrt, Trig, Zero},
    Cross, Dot, Vec3, Vec4,
};

mod ops;

/// A 4x4 homogeneous transform matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A row-major 4x4 matrix representing a homogeneous transform of 3-D space.
///
/// Vectors transform as *row* vectors: `v * m` applies `m` to `v`, and
/// `v * a * b` applies `a` first. A [`Vec3`] is treated as a point
/// (promoted with `w = 1`) when transformed; build a [`Vec4`] with `w = 0`
/// explicitly to transform a direction.
///
/// # Construction
///
/// - [`Mat4::ZERO`] and [`Mat4::IDENTITY`] are the fixed constants.
/// - [`Mat4::from_rows`] fills the matrix from raw elements or row vectors,
///   [`Mat4::from_fn`] invokes a closure with each element's row and column,
///   [`Mat4::from_diagonal`] builds a (scale) matrix from its diagonal.
/// - The graphics constructors [`translation`][Mat4::translation],
///   [`rotation_x`][Mat4::rotation_x]/[`y`][Mat4::rotation_y]/[`z`][Mat4::rotation_z],
///   [`reflect_xy`][Mat4::reflect_xy], [`perspective`][Mat4::perspective] and
///   [`look_at`][Mat4::look_at] cover the common transforms.
///
/// # Element Access
///
/// [`Mat4`] implements [`Index`][std::ops::Index] for `(usize, usize)`
/// tuples; the first element is the *row*, the second the *column*, 0-based.
/// [`Mat4::get`] is the checked variant. Equality (`==`) is exact over all 16
/// entries; tests compare with tolerances via
/// [`assert_approx_eq!`][crate::assert_approx_eq].
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<T>([[T; 4]; 4]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat4<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat4<T> {}

impl<T: Zero> Mat4<T> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([
        [T::ZERO, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ZERO],
    ]);
}

impl<T: Zero + One> Mat4<T> {
    /// The identity matrix: 1 on the diagonal, 0 everywhere else.
    ///
    /// Transforming any vector by this matrix returns the (point-promoted)
    /// vector unchanged.
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    ]);
}

impl<T> Mat4<T> {
    /// Creates a [`Mat4`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg4::*;
    /// let m = Mat4::from_rows([
    ///     [1, 0, 0, 0],
    ///     [0, 1, 0, 0],
    ///     [0, 0, 1, 0],
    ///     [0, 0, 0, 1],
    /// ]);
    /// assert_eq!(m, Mat4::IDENTITY);
    /// ```
    pub fn from_rows<U: Into<Vec4<T>>>(rows: [U; 4]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Mat4`] by invoking a closure with the position (row and
    /// column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Mat4<U>
    where
        F: FnMut(T) -> U,
    {
        Mat4(self.0.map(|row| row.map(|v| f(v))))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg4::*;
    /// let m = Mat4::from_fn(|row, col| (row * 10 + col) as i32);
    /// assert_eq!(m.transpose()[(3, 0)], m[(0, 3)]);
    /// ```
    pub fn transpose(self) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| self.0[col][row])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if
    /// out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns the row at index `row` as a [`Vec4`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is 4 or more.
    pub fn row(&self, row: usize) -> Vec4<T>
    where
        T: Copy,
    {
        self.0[row].into()
    }
}

impl<T: Number> Mat4<T> {
    /// Creates a matrix with the given diagonal and 0 outside the diagonal.
    ///
    /// Geometrically this is a (generally non-uniform) scale in `x`, `y` and
    /// `z` when the last diagonal element is 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg4::*;
    /// let scale = Mat4::from_diagonal(vec4(2.0, 3.0, 4.0, 1.0));
    /// assert_eq!(vec3(1.0, 1.0, 1.0) * scale, vec4(2.0, 3.0, 4.0, 1.0));
    /// ```
    pub fn from_diagonal<D: Into<Vec4<T>>>(diag: D) -> Self {
        let [x, y, z, w] = diag.into().into_array();
        Self::from_rows([
            [x, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, y, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, z, T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, w],
        ])
    }

    /// Creates a matrix that mirrors `x` and `y`: the identity with the
    /// `(0, 0)` and `(1, 1)` entries negated.
    pub fn reflect_xy() -> Self {
        Self::from_diagonal([-T::ONE, -T::ONE, T::ONE, T::ONE])
    }

    /// Creates a matrix translating points by `(x, y, z)`.
    ///
    /// Only points move; a direction ([`Vec4`] with `w = 0`) is unaffected
    /// by the translation row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg4::*;
    /// let m = Mat4::translation(10.0, 0.0, -2.0);
    /// assert_eq!(vec3(1.0, 2.0, 3.0) * m, vec4(11.0, 2.0, 1.0, 1.0));
    /// assert_eq!(Vec4f::X * m, Vec4f::X);
    /// ```
    pub fn translation(x: T, y: T, z: T) -> Self {
        Self::from_rows([
            [T::ONE, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE, T::ZERO],
            [x, y, z, T::ONE],
        ])
    }

    /// Creates a rotation of `radians` around the X axis.
    pub fn rotation_x(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = (radians.sin(), radians.cos());
        Self::from_rows([
            [T::ONE, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, cos, sin, T::ZERO],
            [T::ZERO, -sin, cos, T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Creates a rotation of `radians` around the Y axis.
    pub fn rotation_y(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = (radians.sin(), radians.cos());
        Self::from_rows([
            [cos, T::ZERO, sin, T::ZERO],
            [T::ZERO, T::ONE, T::ZERO, T::ZERO],
            [-sin, T::ZERO, cos, T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Creates a rotation of `radians` around the Z axis.
    pub fn rotation_z(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = (radians.sin(), radians.cos());
        Self::from_rows([
            [cos, sin, T::ZERO, T::ZERO],
            [-sin, cos, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE, T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Creates a perspective projection matrix mapping camera space to
    /// screen space.
    ///
    /// `width` and `height` are the screen dimensions in pixels (they only
    /// matter through their ratio), `fov_degrees` the vertical field of view
    /// in *degrees*, `z_near` and `z_far` the clipping planes. A transformed
    /// point carries its camera-space depth in `w`, ready for the
    /// perspective divide.
    pub fn perspective(width: T, height: T, fov_degrees: T, z_near: T, z_far: T) -> Self
    where
        T: Trig,
    {
        let aspect = height / width;
        let f = T::ONE / (fov_degrees.to_radians() / (T::ONE + T::ONE)).tan();
        let q = z_far / (z_far - z_near);
        Self::from_rows([
            [aspect * f, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, f, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, q, T::ONE],
            [T::ZERO, T::ZERO, -z_near * q, T::ZERO],
        ])
    }

    /// Creates a camera orientation matrix for a camera at `pos` looking at
    /// `target`.
    ///
    /// `up` is an *approximate* up direction; it is re-orthogonalized against
    /// the view direction (Gram-Schmidt), and a right vector completes the
    /// basis via the cross product. The result places the camera basis in
    /// its first three rows and `pos` in the last.
    ///
    /// The inputs are degenerate when `pos == target` or when `up` is
    /// parallel to the view direction; the zero-length normalizations then
    /// produce NaN rows rather than panicking.
    pub fn look_at(pos: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self
    where
        T: Sqrt,
    {
        let forward = (target - pos).normalize();
        let up = (up - forward * up.dot(forward)).normalize();
        let right = up.cross(forward);
        Self::from_rows([
            right,
            up.promote::<4>(),
            forward.promote::<4>(),
            pos.extend(T::ONE),
        ])
    }

    /// Inverts a rigid transform (a rotation combined with a translation).
    ///
    /// The upper-left 3x3 block must be orthonormal: this routine transposes
    /// it rather than computing a general inverse, and writes the negated,
    /// un-rotated translation into the last column with `(3, 3) = 1`.
    /// Calling it on a matrix with scale or shear silently produces an
    /// incorrect result; that precondition is not checked.
    pub fn invert(&self) -> Self {
        let m = &self.0;
        let mut inv = Self::from_fn(|row, col| {
            if row < 3 && col < 3 {
                m[col][row]
            } else {
                T::ZERO
            }
        });
        for row in 0..3 {
            inv.0[row][3] = -(m[3][0] * inv.0[0][row] + m[3][1] * inv.0[1][row] + m[3][2] * inv.0[2][row]);
        }
        inv.0[3][3] = T::ONE;
        inv
    }
}

impl<T: Default> Default for Mat4<T> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Mat4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug>(&'a [T; 4]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T> From<[[T; 4]; 4]> for Mat4<T> {
    #[inline]
    fn from(rows: [[T; 4]; 4]) -> Self {
        Self(rows)
    }
}

impl<T> From<Mat4<T>> for [[T; 4]; 4] {
    #[inline]
    fn from(value: Mat4<T>) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::{assert_approx_eq, vec2, vec3, vec4, Vec3f, Vec4f};

    use super::*;

    #[test]
    fn fmt() {
        let m = Mat4::from_fn(|row, col| (row * 10 + col) as i32);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(
            format!("{:?}", m),
            "[[0, 1, 2, 3], [10, 11, 12, 13], [20, 21, 22, 23], [30, 31, 32, 33]]"
        );

        // `#` modifier prints each row in its own line, but not each
        // individual element.
        assert_eq!(
            format!("{:#?}", Mat4::<i32>::IDENTITY),
            "
[
    [1, 0, 0, 0],
    [0, 1, 0, 0],
    [0, 0, 1, 0],
    [0, 0, 0, 1],
]
"
            .trim()
        );
    }

    #[test]
    fn constants_and_diagonal() {
        assert_eq!(Mat4f::ZERO[(2, 2)], 0.0);
        assert_eq!(Mat4f::IDENTITY[(2, 2)], 1.0);
        assert_eq!(Mat4f::IDENTITY[(2, 3)], 0.0);
        assert_eq!(
            Mat4::from_diagonal([1, 2, 3, 4]),
            Mat4::from_rows([
                [1, 0, 0, 0],
                [0, 2, 0, 0],
                [0, 0, 3, 0],
                [0, 0, 0, 4],
            ])
        );
    }

    #[test]
    fn identity_is_neutral() {
        let m = Mat4::from_fn(|row, col| (row * 4 + col) as f32);
        assert_eq!(Mat4f::IDENTITY * m, m);
        assert_eq!(m * Mat4f::IDENTITY, m);

        // Transforming by the identity is point promotion.
        assert_eq!(vec2(1.0, 2.0) * Mat4f::IDENTITY, vec4(1.0, 2.0, 0.0, 1.0));
        assert_eq!(vec3(1.0, 2.0, 3.0) * Mat4f::IDENTITY, vec4(1.0, 2.0, 3.0, 1.0));
        assert_eq!(vec4(1.0, 2.0, 3.0, 4.0) * Mat4f::IDENTITY, vec4(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn translation_moves_points_only() {
        let m = Mat4f::translation(10.0, 20.0, 30.0);
        assert_eq!(vec3(1.0, 2.0, 3.0) * m, vec4(11.0, 22.0, 33.0, 1.0));
        assert_eq!(vec2(1.0, 2.0) * m, vec4(11.0, 22.0, 30.0, 1.0));

        // Directions (w = 0) do not translate.
        assert_eq!(vec4(1.0, 2.0, 3.0, 0.0) * m, vec4(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn reflect_xy_negates_x_and_y() {
        let m = Mat4f::reflect_xy();
        assert_eq!(vec3(1.0, 2.0, 3.0) * m, vec4(-1.0, -2.0, 3.0, 1.0));
    }

    #[test]
    fn rotations() {
        // A quarter turn around Z maps X onto Y.
        let quarter = Mat4f::rotation_z(TAU / 4.0);
        assert_approx_eq!(Vec4f::X * quarter, Vec4f::Y).abs(1e-6);

        // Around X, Y maps onto Z; around Y, X maps onto Z.
        assert_approx_eq!(Vec4f::Y * Mat4f::rotation_x(TAU / 4.0), Vec4f::Z).abs(1e-6);
        assert_approx_eq!(Vec4f::X * Mat4f::rotation_y(TAU / 4.0), Vec4f::Z).abs(1e-6);

        // The rotation axis is fixed.
        assert_approx_eq!(Vec4f::Z * quarter, Vec4f::Z).abs(1e-6);

        // A full turn is the identity.
        assert_approx_eq!(Mat4f::rotation_y(TAU), Mat4f::IDENTITY).abs(1e-6);
    }

    #[test]
    fn multiply_is_associative() {
        let a = Mat4f::rotation_x(0.3);
        let b = Mat4f::translation(1.0, 2.0, 3.0);
        let c = Mat4f::perspective(640.0, 480.0, 90.0, 0.1, 100.0);
        assert_approx_eq!((a * b) * c, a * (b * c)).abs(1e-4);
    }

    #[test]
    fn multiply_applies_left_to_right() {
        let m = Mat4f::rotation_z(TAU / 4.0) * Mat4f::translation(10.0, 0.0, 0.0);
        // Rotate X onto Y first, then translate.
        assert_approx_eq!(Vec3f::X * m, vec4(10.0, 1.0, 0.0, 1.0)).abs(1e-6);
    }

    #[test]
    fn perspective_layout() {
        let m = Mat4f::perspective(640.0, 480.0, 90.0, 0.1, 100.0);
        let f = 1.0 / (45.0f32.to_radians()).tan();
        let q = 100.0 / (100.0 - 0.1);
        assert_approx_eq!(m[(0, 0)], 0.75 * f).abs(1e-6);
        assert_approx_eq!(m[(1, 1)], f).abs(1e-6);
        assert_approx_eq!(m[(2, 2)], q).abs(1e-6);
        assert_eq!(m[(2, 3)], 1.0);
        assert_approx_eq!(m[(3, 2)], -0.1 * q).abs(1e-6);
        assert_eq!(m[(3, 3)], 0.0);

        // The transformed point keeps its depth in w for the perspective
        // divide.
        let p = vec3(0.0, 0.0, 5.0) * m;
        assert_approx_eq!(p.w, 5.0).abs(1e-6);
    }

    #[test]
    fn look_at_builds_an_orthonormal_basis() {
        let m = Mat4f::look_at(
            vec3(4.0, 1.0, -3.0),
            vec3(0.0, 2.0, 5.0),
            vec3(0.3, 0.9, 0.1),
        );
        let right = m.row(0);
        let up = m.row(1);
        let forward = m.row(2);

        assert_approx_eq!(right.length(), 1.0).abs(1e-6);
        assert_approx_eq!(up.length(), 1.0).abs(1e-6);
        assert_approx_eq!(forward.length(), 1.0).abs(1e-6);
        assert_approx_eq!(right.dot(up), 0.0).abs(1e-6);
        assert_approx_eq!(right.dot(forward), 0.0).abs(1e-6);
        assert_approx_eq!(up.dot(forward), 0.0).abs(1e-6);

        // Last row carries the position, basis rows carry no translation.
        assert_eq!(m.row(3), vec4(4.0, 1.0, -3.0, 1.0));
        assert_eq!(right.w, 0.0);
        assert_eq!(up.w, 0.0);
        assert_eq!(forward.w, 0.0);
    }

    #[test]
    fn look_at_straight_ahead() {
        // Camera at origin looking down +Z with +Y up: the identity basis.
        let m = Mat4f::look_at(Vec3f::ZERO, Vec3f::Z, Vec3f::Y);
        assert_approx_eq!(m, Mat4f::IDENTITY).abs(1e-6);
    }

    #[test]
    fn invert_layout() {
        let m = Mat4f::rotation_y(0.7) * Mat4f::translation(2.0, -1.0, 4.0);
        let inv = m.invert();

        // The rotation block is transposed.
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(inv[(row, col)], m[(col, row)]);
            }
        }

        // The undone translation sits in the last column.
        let t = m.row(3).truncate();
        for row in 0..3 {
            let rot_col = vec3(inv[(0, row)], inv[(1, row)], inv[(2, row)]);
            assert_approx_eq!(inv[(row, 3)], -t.dot(rot_col)).abs(1e-6);
        }
        assert_eq!(inv[(3, 3)], 1.0);
        assert_eq!(inv.row(3).truncate(), Vec3f::ZERO);
    }
}
