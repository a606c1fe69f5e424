use crate::error::RotateError;
use crate::models::rotation::{RotateInput, RotateOutput};

// Face rotator service interface
pub trait RotatorServiceTrait: Send + Sync {
    /// Rotates one image file by 180 degrees into a sibling file.
    /// # Arguments
    /// - input: source path and the suffix for the output name
    /// # Returns
    /// - the written output path and image dimensions, or the failing step
    fn rotate(&self, input: RotateInput) -> Result<RotateOutput, RotateError>;
}
