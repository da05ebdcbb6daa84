use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

/// Side length of the square input the classifier was trained on.
pub const INPUT_SIZE: u32 = 256;

pub fn resize_image(image: &DynamicImage, size: u32) -> DynamicImage {
    image.resize_exact(size, size, imageops::FilterType::CatmullRom)
}

/// Batch of one image in NHWC layout, every element scaled into [0, 1].
fn image_to_tensor(image: &DynamicImage) -> Tensor {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    tract_ndarray::Array4::from_shape_fn(
        (1, height as usize, width as usize, 3),
        |(_, y, x, c)| {
            let pixel = rgb.get_pixel(x as u32, y as u32);
            pixel[c] as f32 / 255.0
        },
    )
    .into_tensor()
}

/// Any decoded image becomes a (1, 256, 256, 3) f32 tensor.
pub fn preprocess(image: &DynamicImage) -> Tensor {
    let resized = resize_image(image, INPUT_SIZE);
    image_to_tensor(&resized)
}
