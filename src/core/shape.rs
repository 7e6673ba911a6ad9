use crate::core::errors::*;
use anyhow::Result;
use std::{collections::HashSet, ops::Mul};

#[derive(Clone)]
pub(crate) struct Shape {
    pub sizes: Vec<usize>,
    pub strides: Vec<Stride>,
    pub offset: usize,
}

#[derive(Copy, Clone)]
pub(crate) enum Stride {
    Positive(usize),
    Negative(usize),
}

impl Shape {
    pub(crate) fn new(sizes: &[usize]) -> Shape {
        let mut current = 1;
        let mut strides: Vec<Stride> = sizes
            .iter()
            .rev()
            .map(|size| {
                let stride_val = current;
                current *= size;
                Stride::Positive(stride_val)
            })
            .collect();
        strides.reverse();

        Shape {
            sizes: sizes.to_vec(),
            strides,
            offset: 0,
        }
    }

    pub(crate) fn rank(&self) -> usize {
        self.sizes.len()
    }

    pub(crate) fn numel(&self) -> usize {
        self.sizes.iter().product()
    }

    // --- Shape operations ---

    pub(crate) fn view(&self, sizes: &[usize]) -> Result<Shape> {
        self.valid_contiguity()?;
        self.valid_reshape(sizes)?;

        let positive = self
            .strides
            .first()
            .ok_or(EmptyTensorError::View)?
            .is_positive();

        let mut current = 1;
        let mut strides = sizes
            .iter()
            .rev()
            .map(|size| {
                let stride_val = current;
                current *= size;
                Stride::new(stride_val, positive)
            })
            .collect::<Vec<Stride>>();
        strides.reverse();

        Ok(Shape {
            sizes: sizes.to_vec(),
            strides,
            offset: self.offset,
        })
    }

    pub(crate) fn flip(&self, flips: &[usize]) -> Result<Shape, DimensionError> {
        self.valid_dimensions(flips)?;

        let strides = self
            .strides
            .iter()
            .enumerate()
            .map(|(i, &stride)| {
                if flips.contains(&i) {
                    match stride {
                        Stride::Positive(stride_val) => Stride::Negative(stride_val),
                        Stride::Negative(stride_val) => Stride::Positive(stride_val),
                    }
                } else {
                    stride
                }
            })
            .collect();

        Ok(Shape {
            sizes: self.sizes.to_vec(),
            strides,
            offset: self.offset,
        })
    }

    pub(crate) fn flip_all(&self) -> Result<Shape, DimensionError> {
        self.flip(&Vec::from_iter(0..self.rank()))
    }

    // --- Index ---

    pub(crate) fn idx(&self, indices: &[usize]) -> usize {
        self.sizes
            .iter()
            .zip(self.strides.iter())
            .zip(indices)
            .map(|((&size, stride), &index)| stride.offset(index, size))
            .sum::<usize>()
            + self.offset
    }

    pub(crate) fn index(&self, indices: &[usize]) -> Result<usize, IndexError> {
        self.valid_indices(indices)?;

        Ok(self.idx(indices))
    }

    // --- Validation ---

    pub(crate) fn is_contiguous(&self) -> bool {
        for i in 0..self.rank().saturating_sub(1) {
            if self.strides[i] != self.strides[i + 1] * self.sizes[i + 1] {
                return false;
            }
        }

        true
    }

    pub(crate) fn valid_contiguity(&self) -> Result<(), NonContiguousError> {
        if self.is_contiguous() {
            Ok(())
        } else {
            Err(NonContiguousError)
        }
    }

    pub(crate) fn valid_reshape(&self, sizes: &[usize]) -> Result<(), ReshapeError> {
        if self.numel() != sizes.iter().product::<usize>() {
            return Err(ReshapeError {
                current_shape: self.sizes.to_vec(),
                new_shape: sizes.to_vec(),
            });
        }

        Ok(())
    }

    fn valid_indices(&self, indices: &[usize]) -> Result<(), IndexError> {
        if indices.len() != self.rank() {
            return Err(IndexError::IndicesLength {
                num_indices: indices.len(),
                num_dimensions: self.rank(),
            });
        }

        for (dimension, (&index, &size)) in indices.iter().zip(&self.sizes).enumerate() {
            if index >= size {
                return Err(IndexError::OutOfRange {
                    index,
                    dimension,
                    size,
                });
            }
        }

        Ok(())
    }

    pub(crate) fn valid_dimensions(&self, dimensions: &[usize]) -> Result<(), DimensionError> {
        let dim_range = self.rank().saturating_sub(1);
        let mut set = HashSet::with_capacity(dimensions.len());

        for &dimension in dimensions {
            if dim_range < dimension {
                return Err(DimensionError::OutOfRange {
                    dimension,
                    dim_range,
                });
            } else if !set.insert(dimension) {
                return Err(DimensionError::Repetition(dimension));
            }
        }

        Ok(())
    }
}

impl PartialEq for Shape {
    fn eq(&self, rhs: &Shape) -> bool {
        self.sizes == rhs.sizes && self.strides == rhs.strides
    }
}

impl Stride {
    pub(crate) fn new(stride_val: usize, positive: bool) -> Stride {
        if positive {
            Stride::Positive(stride_val)
        } else {
            Stride::Negative(stride_val)
        }
    }

    pub(crate) fn is_positive(&self) -> bool {
        matches!(self, Stride::Positive(_))
    }

    pub(crate) fn offset(&self, index: usize, size: usize) -> usize {
        match self {
            Stride::Positive(stride_val) => index * stride_val,
            Stride::Negative(stride_val) => (size - 1 - index) * stride_val,
        }
    }
}

impl Mul<usize> for Stride {
    type Output = Stride;

    fn mul(self, rhs: usize) -> Self::Output {
        match self {
            Stride::Positive(stride_val) => Stride::Positive(stride_val * rhs),
            Stride::Negative(stride_val) => Stride::Negative(stride_val * rhs),
        }
    }
}

impl PartialEq for Stride {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Stride::Positive(lhs), Stride::Positive(rhs)) => lhs == rhs,
            (Stride::Negative(lhs), Stride::Negative(rhs)) => lhs == rhs,
            (Stride::Positive(0), Stride::Negative(0)) => true,
            (Stride::Negative(0), Stride::Positive(0)) => true,
            _ => false,
        }
    }
}
