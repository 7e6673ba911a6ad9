use anyhow::Result;
use stencl::{Boundary, Tensor};

fn main() -> Result<()> {
    let input = Tensor::arange(0.0, 12.0, 1.0)?.view(&[3, 4])?;
    let kernel = Tensor::ones(&[3, 3]);

    for name in ["constant", "reflect", "nearest", "wrap"] {
        let boundary: Boundary = name.parse()?;
        let summed = input.correlate(&kernel, boundary, 0.0)?;

        println!("{}: \n{}", name, summed);
    }

    Ok(())
}
