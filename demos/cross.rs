use anyhow::Result;
use stencl::{Boundary, Tensor};

fn main() -> Result<()> {
    let samples = Tensor::new(
        &[
            29, 54, 3, 54, 7, 49, 47, 59, 28, 23, 6, 47, //
            41, 20, 9, 40, 52, 19, 24, 50, 56, 45, 38, 8, //
            30, 3, 15, 48, 60, 58, 24, 30, 52, 29, 25, 0, //
            17, 12, 0, 45, 37, 6, 33, 17, 28, 45, 60, 19, //
            5, 23, 11, 0, 10, 49, 9, 40, 54, 26, 27, 55,
        ],
        &[5, 4, 3],
    )?;

    // Each cell plus its six axis neighbors. The weights stay at 1, so this
    // sums the neighborhood rather than averaging it. Swapping the 1s for 1/7
    // would average in the interior but not at the border: under a constant
    // fill of 0 a border cell has fewer than 7 real members, and the
    // denominator would have to shrink with it. The kernel is symmetric under
    // full reversal, so correlate and convolve agree here.
    let kernel = Tensor::new(
        &[
            0, 0, 0, 0, 1, 0, 0, 0, 0, //
            0, 1, 0, 1, 1, 1, 0, 1, 0, //
            0, 0, 0, 0, 1, 0, 0, 0, 0,
        ],
        &[3, 3, 3],
    )?;

    let output = samples.correlate(&kernel, Boundary::Constant, 0)?;

    let extents = samples
        .sizes()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>();

    println!("({})", extents.join(", "));
    println!("{}", samples);
    println!("{}", output);

    Ok(())
}
