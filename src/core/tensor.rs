use anyhow::{bail, Result};
use num_traits::{One, Zero};
use std::{borrow::Cow, cmp::Ordering, iter::successors, ops::Add, sync::Arc};

use crate::core::{
    errors::*,
    iters::Indexer,
    shape::{Shape, Stride},
};

pub struct Tensor<T> {
    pub(crate) data: Arc<Vec<T>>,
    pub(crate) shape: Shape,
}

impl<T: Copy> Tensor<T> {
    pub(crate) fn init(data: Vec<T>, sizes: &[usize]) -> Tensor<T> {
        Tensor {
            data: Arc::new(data),
            shape: Shape::new(sizes),
        }
    }

    pub fn new(data: &[T], sizes: &[usize]) -> Result<Tensor<T>> {
        let data_length = data.len();
        let tensor_size = sizes.iter().product();

        if data_length != tensor_size {
            bail!(InvalidDataLengthError {
                data_length,
                tensor_size
            });
        }

        Ok(Tensor::init(data.to_vec(), sizes))
    }

    pub fn new_1d(data: &[T]) -> Tensor<T> {
        Tensor::init(data.to_vec(), &[data.len()])
    }

    pub fn same(element: T, sizes: &[usize]) -> Tensor<T> {
        Tensor::init(vec![element; sizes.iter().product()], sizes)
    }

    pub fn zeroes(sizes: &[usize]) -> Tensor<T>
    where
        T: Zero,
    {
        Tensor::same(T::zero(), sizes)
    }

    pub fn ones(sizes: &[usize]) -> Tensor<T>
    where
        T: One,
    {
        Tensor::same(T::one(), sizes)
    }

    pub fn arange(start: T, end: T, step: T) -> Result<Tensor<T>>
    where
        T: Add<Output = T> + PartialOrd + Zero,
    {
        let ascending = match step
            .partial_cmp(&T::zero())
            .ok_or(ArangeError::Comparison)?
        {
            Ordering::Greater if end > start => Ok(true),
            Ordering::Less if start > end => Ok(false),
            Ordering::Greater => Err(ArangeError::Positive),
            Ordering::Less => Err(ArangeError::Negative),
            Ordering::Equal => Err(ArangeError::Zero),
        }?;

        let data: Vec<T> = successors(Some(start), |&prev| {
            let curr = prev + step;
            let cond = end > curr;
            (ascending == cond).then_some(curr)
        })
        .collect();

        Ok(Tensor::new_1d(&data))
    }

    // --- Data ---

    pub fn data(&self) -> Cow<[T]> {
        if self.is_contiguous() {
            self.data_contiguous()
        } else {
            Cow::Owned(self.data_non_contiguous())
        }
    }

    pub(crate) fn data_contiguous(&self) -> Cow<[T]> {
        let start = self.offset();
        let end = start + self.numel();
        let positive = self.shape.strides.first().map_or(true, Stride::is_positive);

        if positive {
            Cow::Borrowed(&self.data[start..end])
        } else {
            let mut data = self.data[start..end].to_vec();
            data.reverse();
            Cow::Owned(data)
        }
    }

    pub(crate) fn data_non_contiguous(&self) -> Vec<T> {
        Indexer::new(&self.shape.sizes)
            .map(|index| self.idx(&index))
            .collect()
    }

    pub(crate) fn idx(&self, indices: &[usize]) -> T {
        self.data[self.shape.idx(indices)]
    }

    pub fn index(&self, indices: &[usize]) -> Result<T> {
        Ok(self.data[self.shape.index(indices)?])
    }

    // --- New Data, New Shape ---

    pub fn reshape(&self, sizes: &[usize]) -> Result<Tensor<T>> {
        self.shape.valid_reshape(sizes)?;

        Ok(Tensor::init(self.data_non_contiguous(), sizes))
    }

    // --- Maps and Zips ---

    pub fn unary_map<R: Copy>(&self, f: impl Fn(T) -> R) -> Tensor<R> {
        let data = if self.is_contiguous() {
            self.data_contiguous().iter().map(|&elem| f(elem)).collect()
        } else {
            Indexer::new(&self.shape.sizes)
                .map(|index| f(self.idx(&index)))
                .collect()
        };

        Tensor::init(data, &self.shape.sizes)
    }

    pub fn binary_map<R: Copy>(&self, rhs: T, f: impl Fn(T, T) -> R) -> Tensor<R> {
        self.unary_map(|elem| f(elem, rhs))
    }

    pub fn zip<R: Copy>(&self, rhs: &Tensor<T>, f: impl Fn(T, T) -> R) -> Result<Tensor<R>> {
        if self.shape.sizes != rhs.shape.sizes {
            bail!(ZipShapeError {
                lhs_sizes: self.shape.sizes.to_vec(),
                rhs_sizes: rhs.shape.sizes.to_vec(),
            });
        }

        let data = if self.is_contiguous() && rhs.is_contiguous() {
            self.data_contiguous()
                .iter()
                .zip(rhs.data_contiguous().iter())
                .map(|(&lhs_elem, &rhs_elem)| f(lhs_elem, rhs_elem))
                .collect()
        } else {
            Indexer::new(&self.shape.sizes)
                .map(|index| f(self.idx(&index), rhs.idx(&index)))
                .collect()
        };

        Ok(Tensor::init(data, &self.shape.sizes))
    }
}

impl<T> Tensor<T> {
    // --- Same Data, Different Shape ---

    pub(crate) fn with_shape(&self, shape: Shape) -> Tensor<T> {
        Tensor {
            data: Arc::clone(&self.data),
            shape,
        }
    }

    pub fn view(&self, sizes: &[usize]) -> Result<Tensor<T>> {
        Ok(self.with_shape(self.shape.view(sizes)?))
    }

    pub fn flip(&self, flips: &[usize]) -> Result<Tensor<T>> {
        Ok(self.with_shape(self.shape.flip(flips)?))
    }

    pub fn flip_all(&self) -> Result<Tensor<T>> {
        Ok(self.with_shape(self.shape.flip_all()?))
    }

    // --- Shape Attributes ---

    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    pub fn sizes(&self) -> &[usize] {
        &self.shape.sizes
    }

    pub fn offset(&self) -> usize {
        self.shape.offset
    }

    pub fn is_contiguous(&self) -> bool {
        self.shape.is_contiguous()
    }
}

impl<T: Copy + PartialEq> PartialEq for Tensor<T> {
    fn eq(&self, rhs: &Tensor<T>) -> bool {
        self.data == rhs.data && self.shape == rhs.shape
    }
}
