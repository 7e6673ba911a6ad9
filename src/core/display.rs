use prettytable::{
    format::consts::FORMAT_BOX_CHARS,
    {Cell, Row, Table},
};
use std::{
    any::type_name,
    fmt::{Debug, Display, Formatter, Result},
};

use crate::Tensor;

impl<T: Debug + Copy> Debug for Tensor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Tensor")
            .field("dtype", &type_name::<T>())
            .field("dims", &self.rank())
            .field("elems", &self.numel())
            .field("shape", &self.sizes())
            .finish()
    }
}

impl<T: Display + Debug + Copy> Display for Tensor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let n = self.rank();

        if (1..=8).contains(&n) {
            let table = if n % 2 == 1 {
                let row = odd_dimensions(self, n, 0);
                set_style(Table::init(vec![row]))
            } else {
                even_dimensions(self, n, 0)
            };

            write!(f, "{}", table)?;
        }

        writeln!(f, "{:?}", self)
    }
}

fn odd_dimensions<T>(tensor: &Tensor<T>, n: usize, stride_offset: usize) -> Row
where
    T: Copy + Display,
{
    let dim = tensor.rank() - n;
    let size = tensor.shape.sizes[dim];
    let stride = tensor.shape.strides[dim];

    let cells = if n == 1 {
        let offset = tensor.offset() + stride_offset;
        (0..size)
            .map(|index| {
                let element = tensor.data[stride.offset(index, size) + offset];
                Cell::new(&element.to_string())
            })
            .collect()
    } else {
        (0..size)
            .map(|index| {
                let offset = stride.offset(index, size) + stride_offset;
                Cell::from(&even_dimensions(tensor, n - 1, offset))
            })
            .collect()
    };

    Row::new(cells)
}

fn even_dimensions<T>(tensor: &Tensor<T>, n: usize, stride_offset: usize) -> Table
where
    T: Copy + Display,
{
    let dim = tensor.rank() - n;
    let size = tensor.shape.sizes[dim];
    let stride = tensor.shape.strides[dim];

    let rows = (0..size)
        .map(|index| {
            let offset = stride.offset(index, size) + stride_offset;
            odd_dimensions(tensor, n - 1, offset)
        })
        .collect();

    set_style(Table::init(rows))
}

fn set_style(mut table: Table) -> Table {
    table.set_format(*FORMAT_BOX_CHARS);
    table
}
