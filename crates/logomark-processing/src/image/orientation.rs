use image::DynamicImage;
use std::io::Cursor;

/// Clockwise rotation that brings stored pixels upright
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Rotation {
    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::Rotate90 => 90,
            Rotation::Rotate180 => 180,
            Rotation::Rotate270 => 270,
        }
    }
}

/// EXIF orientation correction
pub struct ImageOrientation;

impl ImageOrientation {
    /// Read the EXIF orientation tag from encoded image data.
    ///
    /// Returns `None` when the container has no EXIF block, the block is
    /// malformed, or the tag is absent or not an integer.
    pub fn read_exif_orientation(data: &[u8]) -> Option<u32> {
        let mut cursor = Cursor::new(data);
        let exif = match exif::Reader::new().read_from_container(&mut cursor) {
            Ok(exif) => exif,
            Err(e) => {
                tracing::debug!(error = %e, "No readable EXIF data");
                return None;
            }
        };

        exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
    }

    /// Rotation needed for an EXIF orientation value.
    ///
    /// Only the pure rotations are corrected; mirrored orientations (2, 4, 5, 7)
    /// and unknown values leave the image as stored.
    pub fn correction_for(orientation: u32) -> Option<Rotation> {
        match orientation {
            3 => Some(Rotation::Rotate180),
            6 => Some(Rotation::Rotate90),
            8 => Some(Rotation::Rotate270),
            _ => None,
        }
    }

    /// Apply EXIF orientation correction to an image decoded from `data`
    pub fn apply_exif_orientation(img: DynamicImage, data: &[u8]) -> DynamicImage {
        let Some(orientation) = Self::read_exif_orientation(data) else {
            return img;
        };

        match Self::correction_for(orientation) {
            Some(rotation) => {
                tracing::debug!(
                    orientation = orientation,
                    rotate = rotation.degrees(),
                    "Applying EXIF orientation"
                );
                Self::rotate(img, rotation)
            }
            None => img,
        }
    }

    /// Rotate clockwise; the canvas follows the rotated content
    pub fn rotate(img: DynamicImage, rotation: Rotation) -> DynamicImage {
        match rotation {
            Rotation::Rotate90 => img.rotate90(),
            Rotation::Rotate180 => img.rotate180(),
            Rotation::Rotate270 => img.rotate270(),
        }
    }
}
