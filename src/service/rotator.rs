use image::GenericImageView;
use log::{debug, info};

use crate::error::RotateError;
use crate::models::rotation::{RotateInput, RotateOutput};
use crate::service::traits::i_service::RotatorServiceTrait;
use crate::utils::utils::{rotate_pixels_180, rotated_path};

/// Face rotator backed by the `image` crate.
///
/// Output format follows the output file's extension, which is the same as
/// the source's. The source file is only ever opened for reading.
pub struct ImageRotatorService;

impl ImageRotatorService {
    pub fn new() -> Self {
        ImageRotatorService
    }
}

impl Default for ImageRotatorService {
    fn default() -> Self {
        Self::new()
    }
}

impl RotatorServiceTrait for ImageRotatorService {
    fn rotate(&self, input: RotateInput) -> Result<RotateOutput, RotateError> {
        let output_path = rotated_path(&input.source, &input.suffix)
            .ok_or_else(|| RotateError::InvalidPath(input.source.clone()))?;

        let image = image::open(&input.source).map_err(|source| RotateError::Decode {
            path: input.source.clone(),
            source,
        })?;
        let (width, height) = image.dimensions();
        debug!("Decoded {} ({}x{})", input.source.display(), width, height);

        let rotated = rotate_pixels_180(&image);
        drop(image);

        rotated.save(&output_path).map_err(|source| RotateError::Encode {
            path: output_path.clone(),
            source,
        })?;
        info!("Wrote {}", output_path.display());

        Ok(RotateOutput {
            output_path,
            width,
            height,
        })
    }
}
