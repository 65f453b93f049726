use super::Matrix2;
use crate::prelude::*;
use std::ops::{Add, AddAssign, Mul, Sub};

pub trait Dot<I> {
    type Output;
    fn dot(self, rhs: I) -> Result<Self::Output>;
}

pub trait Transpose {
    fn transpose(&self) -> Self;
}

impl<T: Default + Copy> Transpose for Matrix2<T> {
    fn transpose(&self) -> Self {
        let mut transposed = Matrix2::new(self.cols(), self.rows());

        for row in 0..self.rows() {
            for col in 0..self.cols() {
                transposed[(col, row)] = self[(row, col)];
            }
        }
        transposed
    }
}

/// Matrix product. Fails unless the left operand's column count equals the
/// right operand's row count.
impl<'a, T> Dot<&Matrix2<T>> for &'a Matrix2<T>
where
    T: Mul<Output = T> + Default + AddAssign + Copy,
{
    type Output = Matrix2<T>;
    fn dot(self, rhs: &Matrix2<T>) -> Result<Self::Output> {
        if self.cols() != rhs.rows() {
            return Err(Error::DimensionErr);
        }

        let mut res = Matrix2::new(self.rows(), rhs.cols());

        for row in 0..self.rows() {
            for col in 0..rhs.cols() {
                let mut sum = T::default();
                for n in 0..self.cols() {
                    sum += self[(row, n)] * rhs[(n, col)]
                }
                res[(row, col)] = sum;
            }
        }

        Ok(res)
    }
}

/// Adds two Matrix2s element-wise.
impl<'a, T> Add for &'a Matrix2<T>
where
    T: Add<Output = T> + Default + Copy,
{
    type Output = Result<Matrix2<T>>;
    fn add(self, rhs: Self) -> Self::Output {
        elementwise(self, rhs, |a, b| a + b)
    }
}

/// Subtracts two Matrix2s element-wise.
impl<'a, T> Sub for &'a Matrix2<T>
where
    T: Sub<Output = T> + Default + Copy,
{
    type Output = Result<Matrix2<T>>;
    fn sub(self, rhs: Self) -> Self::Output {
        elementwise(self, rhs, |a, b| a - b)
    }
}

/// Multiplies two Matrix2s element-wise (Hadamard product).
impl<'a, T> Mul for &'a Matrix2<T>
where
    T: Mul<Output = T> + Default + Copy,
{
    type Output = Result<Matrix2<T>>;
    fn mul(self, rhs: Self) -> Self::Output {
        elementwise(self, rhs, |a, b| a * b)
    }
}

fn elementwise<T, F>(lhs: &Matrix2<T>, rhs: &Matrix2<T>, f: F) -> Result<Matrix2<T>>
where
    T: Default + Copy,
    F: Fn(T, T) -> T,
{
    if lhs.dim() != rhs.dim() {
        return Err(Error::DimensionErr);
    }

    let mut res = Matrix2::new(lhs.rows(), lhs.cols());
    for row in 0..lhs.rows() {
        for col in 0..lhs.cols() {
            res[(row, col)] = f(lhs[(row, col)], rhs[(row, col)]);
        }
    }

    Ok(res)
}
