use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::models::face::FaceSpec;

pub const DEFAULT_DIRECTORY: &str = "public/vr/willow";
pub const ROTATED_SUFFIX: &str = "_rotated";

#[derive(Parser, Clone, Debug)]
#[command(
    name = "cubemap_rotate",
    version,
    about = "Rotate the top and bottom faces of a cubemap panorama by 180 degrees",
    long_about = "Rotates u.jpg (top) and d.jpg (bottom) in the given directory by 180 degrees and writes the results next to them as u_rotated.jpg and d_rotated.jpg. The original files are never modified.\nIf no directory is given, public/vr/willow is used."
)]
pub struct Cli {
    /// Directory holding the cubemap face images
    #[arg(
        value_name = "DIRECTORY",
        allow_hyphen_values = true,
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub directory: Option<PathBuf>,
}

/// Faces rotated on every run, in processing order.
pub fn default_faces() -> Vec<FaceSpec> {
    vec![
        FaceSpec::new("top", "u.jpg", ROTATED_SUFFIX),
        FaceSpec::new("bottom", "d.jpg", ROTATED_SUFFIX),
    ]
}

pub fn default_directory() -> PathBuf {
    PathBuf::from(DEFAULT_DIRECTORY)
}

pub fn validate_directory(directory: &Path) -> bool {
    if !directory.is_dir() {
        log::info!("Directory does not exist: {}", directory.display());
        return false;
    }
    true
}
