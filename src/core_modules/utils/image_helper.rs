pub mod image_helper {
    use image::{ImageEncoder, RgbaImage};
    use std::path::Path;

    /// Encodes an RGBA image as PNG at `path`.
    pub fn save_png(path: impl AsRef<Path>, image: &RgbaImage) -> Result<(), image::error::ImageError> {
        let output = std::fs::File::create(path)?;
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder.write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgba8,
        )?;

        Ok(())
    }
}
