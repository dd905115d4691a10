use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, RgbaImage};
use logomark_core::{Orientation, WatermarkSettings};

#[derive(Debug, thiserror::Error)]
pub enum WatermarkError {
    #[error("Logo has zero size ({width}x{height})")]
    EmptyLogo { width: u32, height: u32 },

    #[error("Target image has zero size ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Scaled logo collapses to {width}x{height} on a {image_width}x{image_height} image")]
    LogoTooSmall {
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },
}

pub struct Watermark;

impl Watermark {
    /// Relative footprint of the logo for an orientation
    pub fn scale_factor(orientation: Orientation, settings: &WatermarkSettings) -> f64 {
        match orientation {
            Orientation::Portrait => settings.portrait_scale,
            Orientation::Landscape | Orientation::Square => settings.landscape_scale,
        }
    }

    /// Logo size that fits within `factor` of both image dimensions, keeping
    /// the logo aspect ratio. Fractional pixels are truncated.
    pub fn scaled_size(
        image: (u32, u32),
        logo: (u32, u32),
        orientation: Orientation,
        settings: &WatermarkSettings,
    ) -> (u32, u32) {
        let factor = Self::scale_factor(orientation, settings);
        let (img_width, img_height) = (image.0 as f64, image.1 as f64);
        let (logo_width, logo_height) = (logo.0 as f64, logo.1 as f64);

        let scale = (img_width * factor / logo_width).min(img_height * factor / logo_height);

        ((logo_width * scale) as u32, (logo_height * scale) as u32)
    }

    /// Top-left corner of the logo: bottom-left anchored with `margin` on both sides.
    /// `y` goes negative when the logo plus margin is taller than the image.
    pub fn position(image_height: u32, logo_height: u32, margin: u32) -> (i64, i64) {
        (
            margin as i64,
            image_height as i64 - logo_height as i64 - margin as i64,
        )
    }

    /// Overlay the logo on `img` and return an opaque RGB result.
    ///
    /// The logo is resized and faded on a private copy; `logo` itself is never
    /// modified.
    pub fn apply(
        img: &DynamicImage,
        logo: &RgbaImage,
        orientation: Orientation,
        settings: &WatermarkSettings,
    ) -> Result<DynamicImage, WatermarkError> {
        let (img_width, img_height) = img.dimensions();
        let (logo_width, logo_height) = logo.dimensions();

        if logo_width == 0 || logo_height == 0 {
            return Err(WatermarkError::EmptyLogo {
                width: logo_width,
                height: logo_height,
            });
        }
        if img_width == 0 || img_height == 0 {
            return Err(WatermarkError::EmptyImage {
                width: img_width,
                height: img_height,
            });
        }

        let (target_width, target_height) = Self::scaled_size(
            (img_width, img_height),
            (logo_width, logo_height),
            orientation,
            settings,
        );
        if target_width == 0 || target_height == 0 {
            return Err(WatermarkError::LogoTooSmall {
                width: target_width,
                height: target_height,
                image_width: img_width,
                image_height: img_height,
            });
        }

        let mut scaled = imageops::resize(logo, target_width, target_height, FilterType::Lanczos3);

        if settings.opacity < 1.0 {
            for pixel in scaled.pixels_mut() {
                pixel[3] = (pixel[3] as f32 * settings.opacity) as u8;
            }
        }

        let (x, y) = Self::position(img_height, target_height, settings.margin);

        tracing::debug!(
            orientation = %orientation,
            logo_width = target_width,
            logo_height = target_height,
            x = x,
            y = y,
            "Overlaying logo"
        );

        // Flatten first so the target's own alpha never weakens the logo mask
        let mut canvas = DynamicImage::ImageRgb8(img.to_rgb8()).to_rgba8();
        imageops::overlay(&mut canvas, &scaled, x, y);

        Ok(DynamicImage::ImageRgb8(
            DynamicImage::ImageRgba8(canvas).to_rgb8(),
        ))
    }

    /// Like [`Watermark::apply`], but a failed overlay degrades to the original
    /// image. The flag reports whether the logo was applied.
    pub fn apply_or_original(
        img: DynamicImage,
        logo: &RgbaImage,
        orientation: Orientation,
        settings: &WatermarkSettings,
    ) -> (DynamicImage, bool) {
        match Self::apply(&img, logo, orientation, settings) {
            Ok(watermarked) => (watermarked, true),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to add logo, keeping original image");
                (img, false)
            }
        }
    }
}
