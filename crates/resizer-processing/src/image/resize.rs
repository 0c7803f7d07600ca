use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use resizer_core::SizeSpec;

/// Image resize operations
pub struct ImageResize;

impl ImageResize {
    /// Filter used for both up- and downscaling.
    pub const FILTER: FilterType = FilterType::Lanczos3;

    /// Resize image to exact dimensions.
    ///
    /// The source aspect ratio is ignored: the result is always
    /// `target.width() x target.height()`.
    pub fn resize_exact(img: &DynamicImage, target: SizeSpec) -> DynamicImage {
        let (orig_width, orig_height) = img.dimensions();
        tracing::debug!(
            orig_width,
            orig_height,
            target_width = target.width(),
            target_height = target.height(),
            "Resizing image"
        );

        img.resize_exact(target.width(), target.height(), Self::FILTER)
    }
}
