use anyhow::Result;
use image::{GrayImage, ImageBuffer, Luma};
use stencl::{Boundary, Tensor};

fn main() -> Result<()> {
    let (width, height) = (128u32, 96u32);

    let checker: GrayImage = ImageBuffer::from_fn(width, height, |x, y| {
        let tile = ((x / 16 + y / 16) % 2) as u8;
        Luma([40 + tile * 160])
    });

    let data = checker
        .pixels()
        .map(|pixel| pixel[0] as f32)
        .collect::<Vec<f32>>();
    let image_tensor = Tensor::new(&data, &[height as usize, width as usize])?;

    // A box mean. Reflect keeps every neighborhood full at the border, so
    // dividing by 9 stays a mean there too.
    let box_kernel = (Tensor::ones(&[3, 3]) / 9.0)?;

    let smooth = image_tensor
        .correlate(&box_kernel, Boundary::Reflect, 0.0)?
        .unary_map(|value| value.clamp(0.0, 255.0));

    write_image(&smooth, "smooth.png")
}

fn write_image(tensor: &Tensor<f32>, path: &str) -> Result<()> {
    let sizes = tensor.sizes();
    let width = sizes[1] as u32;
    let height = sizes[0] as u32;

    let u8_data = tensor.data().iter().map(|&value| value as u8).collect();

    let img: GrayImage =
        ImageBuffer::from_raw(width, height, u8_data).expect("Error saving output image.");
    img.save(path)?;

    println!("Image saved at {}", path);

    Ok(())
}
