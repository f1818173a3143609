use super::{consts::*, coords::*};

/// Row-major 3x3 matrix. Used as rotation between two cartesian bases
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix33 {
    pub a11: f64, pub a12: f64, pub a13: f64,
    pub a21: f64, pub a22: f64, pub a23: f64,
    pub a31: f64, pub a32: f64, pub a33: f64,
}

impl Default for Matrix33 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix33 {
    pub fn identity() -> Self {
        Self {
            a11: 1.0, a12: 0.0, a13: 0.0,
            a21: 0.0, a22: 1.0, a23: 0.0,
            a31: 0.0, a32: 0.0, a33: 1.0,
        }
    }

    /// Rotation around Z axis. Increases longitude-like angle
    /// (hour angle or azimuth) of a point by `angle` degrees
    pub fn rotation_z(angle: f64) -> Self {
        let (sin, cos) = f64::sin_cos(angle * DEGREE);
        Self {
            a11: cos,  a12: sin, a13: 0.0,
            a21: -sin, a22: cos, a23: 0.0,
            a31: 0.0,  a32: 0.0, a33: 1.0,
        }
    }

    /// Maps local equatorial cartesian point into horizontal one
    /// for site latitude `lat` (degrees) and vice versa.
    /// The matrix is symmetric and is its own inverse
    pub fn horizon_swap(lat: f64) -> Self {
        let (sin, cos) = f64::sin_cos(lat * DEGREE);
        Self {
            a11: -sin, a12: 0.0, a13: cos,
            a21: 0.0,  a22: 1.0, a23: 0.0,
            a31: cos,  a32: 0.0, a33: sin,
        }
    }

    /// `self * other`
    pub fn product(&self, other: &Matrix33) -> Matrix33 {
        let a = self;
        let b = other;
        Matrix33 {
            a11: a.a11 * b.a11 + a.a12 * b.a21 + a.a13 * b.a31,
            a12: a.a11 * b.a12 + a.a12 * b.a22 + a.a13 * b.a32,
            a13: a.a11 * b.a13 + a.a12 * b.a23 + a.a13 * b.a33,

            a21: a.a21 * b.a11 + a.a22 * b.a21 + a.a23 * b.a31,
            a22: a.a21 * b.a12 + a.a22 * b.a22 + a.a23 * b.a32,
            a23: a.a21 * b.a13 + a.a22 * b.a23 + a.a23 * b.a33,

            a31: a.a31 * b.a11 + a.a32 * b.a21 + a.a33 * b.a31,
            a32: a.a31 * b.a12 + a.a32 * b.a22 + a.a33 * b.a32,
            a33: a.a31 * b.a13 + a.a32 * b.a23 + a.a33 * b.a33,
        }
    }

    pub fn transposed(&self) -> Matrix33 {
        Matrix33 {
            a11: self.a11, a12: self.a21, a13: self.a31,
            a21: self.a12, a22: self.a22, a23: self.a32,
            a31: self.a13, a32: self.a23, a33: self.a33,
        }
    }

    pub fn determinant(&self) -> f64 {
        self.a11 * (self.a22 * self.a33 - self.a23 * self.a32) -
        self.a12 * (self.a21 * self.a33 - self.a23 * self.a31) +
        self.a13 * (self.a21 * self.a32 - self.a22 * self.a31)
    }

    pub fn is_identity(&self, eps: f64) -> bool {
        let id = Self::identity();
        [
            self.a11 - id.a11, self.a12 - id.a12, self.a13 - id.a13,
            self.a21 - id.a21, self.a22 - id.a22, self.a23 - id.a23,
            self.a31 - id.a31, self.a32 - id.a32, self.a33 - id.a33,
        ].iter().all(|d| d.abs() <= eps)
    }
}

/// Matrix times column vector
pub fn multiply(mat: &Matrix33, pt: &Point3D) -> Point3D {
    Point3D {
        x: mat.a11 * pt.x + mat.a12 * pt.y + mat.a13 * pt.z,
        y: mat.a21 * pt.x + mat.a22 * pt.y + mat.a23 * pt.z,
        z: mat.a31 * pt.x + mat.a32 * pt.y + mat.a33 * pt.z,
    }
}

/// Row vector times matrix (same as transposed matrix times column vector)
pub fn multiply_row(pt: &Point3D, mat: &Matrix33) -> Point3D {
    Point3D {
        x: pt.x * mat.a11 + pt.y * mat.a21 + pt.z * mat.a31,
        y: pt.x * mat.a12 + pt.y * mat.a22 + pt.z * mat.a32,
        z: pt.x * mat.a13 + pt.y * mat.a23 + pt.z * mat.a33,
    }
}

#[test]
fn test_multiply_directions() {
    let mat = Matrix33 {
        a11: 1.0, a12: 2.0, a13: 3.0,
        a21: 4.0, a22: 5.0, a23: 6.0,
        a31: 7.0, a32: 8.0, a33: 9.0,
    };
    let pt = Point3D { x: 1.0, y: 0.0, z: -1.0 };

    let col = multiply(&mat, &pt);
    assert_eq!(col, Point3D { x: -2.0, y: -2.0, z: -2.0 });

    let row = multiply_row(&pt, &mat);
    assert_eq!(row, Point3D { x: -6.0, y: -6.0, z: -6.0 });
    assert_eq!(row, multiply(&mat.transposed(), &pt));
}

#[test]
fn test_rotation_z() {
    let mat = Matrix33::rotation_z(30.0);
    let crd = LocalEqCoord { dec: 20.0, ha: 15.0 };
    let res = LocalEqCoord::from_sphere_pt(&multiply(&mat, &crd.to_sphere_pt()));
    assert!(f64::abs(res.dec - 20.0) < 1e-10);
    assert!(f64::abs(res.ha - 45.0) < 1e-10);

    let back = mat.product(&Matrix33::rotation_z(-30.0));
    assert!(back.is_identity(1e-15));
    assert!(f64::abs(mat.determinant() - 1.0) < 1e-15);
}

#[test]
fn test_horizon_swap_is_involution() {
    for lat in [-60.0, -12.5, 0.0, 42.0, 89.0] {
        let mat = Matrix33::horizon_swap(lat);
        assert_eq!(mat, mat.transposed());
        assert!(mat.product(&mat).is_identity(1e-15));
        assert!(f64::abs(mat.determinant() + 1.0) < 1e-15);
    }
}
