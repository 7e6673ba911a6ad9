use crate::{
    core::{errors::*, iters::Indexer},
    Tensor,
};
use anyhow::{bail, Result};
use std::{iter::Sum, ops::Mul, str::FromStr};

/// Resolution rule for neighborhood reads that land outside the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// Fill value: k k k k | a b c d | k k k k
    Constant,
    /// Half-sample mirror: d c b a | a b c d | d c b a
    Reflect,
    /// Edge value: a a a a | a b c d | d d d d
    Nearest,
    /// Periodic: a b c d | a b c d | a b c d
    Wrap,
}

impl<T> Tensor<T>
where
    T: Copy + Mul<Output = T> + Sum<T>,
{
    /// Sliding weighted sum of `self` against `kernel`. The output keeps the
    /// shape of `self`; `fill` is read only under `Boundary::Constant`.
    pub fn correlate(&self, kernel: &Tensor<T>, boundary: Boundary, fill: T) -> Result<Tensor<T>> {
        self.valid_stencil(kernel)?;

        let centers = kernel
            .sizes()
            .iter()
            .map(|&extent| (extent as isize - 1) / 2)
            .collect::<Vec<isize>>();

        let data = Indexer::new(self.sizes())
            .map(|index| {
                Indexer::new(kernel.sizes())
                    .map(|taps| {
                        kernel.idx(&taps) * self.neighbor(&index, &taps, &centers, boundary, fill)
                    })
                    .sum()
            })
            .collect();

        Ok(Tensor::init(data, self.sizes()))
    }

    /// Correlation against the kernel flipped along every axis.
    pub fn convolve(&self, kernel: &Tensor<T>, boundary: Boundary, fill: T) -> Result<Tensor<T>> {
        self.correlate(&kernel.flip_all()?, boundary, fill)
    }

    fn neighbor(
        &self,
        index: &[usize],
        taps: &[usize],
        centers: &[isize],
        boundary: Boundary,
        fill: T,
    ) -> T {
        let mut resolved = Vec::with_capacity(index.len());

        for dimension in 0..index.len() {
            let size = self.sizes()[dimension];
            let coord = index[dimension] as isize + taps[dimension] as isize - centers[dimension];

            match boundary.resolve(coord, size) {
                Some(coord) => resolved.push(coord),
                None => return fill,
            }
        }

        self.idx(&resolved)
    }

    fn valid_stencil(&self, kernel: &Tensor<T>) -> Result<()> {
        if self.rank() != kernel.rank() {
            bail!(KernelRankError {
                input_rank: self.rank(),
                kernel_rank: kernel.rank(),
            });
        }

        for (dimension, &extent) in kernel.sizes().iter().enumerate() {
            if extent % 2 == 0 {
                bail!(KernelExtentError { extent, dimension });
            }
        }

        if self.numel() == 0 {
            bail!(EmptyTensorError::Stencil);
        }

        Ok(())
    }
}

impl Boundary {
    fn resolve(&self, coord: isize, size: usize) -> Option<usize> {
        let size = size as isize;

        if (0..size).contains(&coord) {
            return Some(coord as usize);
        }

        match self {
            Boundary::Constant => None,
            Boundary::Nearest => Some(coord.clamp(0, size - 1) as usize),
            Boundary::Wrap => Some(coord.rem_euclid(size) as usize),
            Boundary::Reflect => {
                let phase = coord.rem_euclid(2 * size);
                let reflected = if phase < size {
                    phase
                } else {
                    2 * size - 1 - phase
                };

                Some(reflected as usize)
            }
        }
    }
}

impl FromStr for Boundary {
    type Err = BoundaryParseError;

    fn from_str(mode: &str) -> Result<Boundary, BoundaryParseError> {
        match mode {
            "constant" => Ok(Boundary::Constant),
            "reflect" => Ok(Boundary::Reflect),
            "nearest" => Ok(Boundary::Nearest),
            "wrap" => Ok(Boundary::Wrap),
            _ => Err(BoundaryParseError {
                mode: mode.to_string(),
            }),
        }
    }
}
