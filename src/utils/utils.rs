use std::io;
use std::path::{Path, PathBuf};

use image::DynamicImage;

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
pub fn setup_logging() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("logger init failed: {}", e)))
}

/// Inserts `suffix` between the file stem and the extension.
///
/// `u.jpg` becomes `u_rotated.jpg`; a name without an extension (including
/// dot-files such as `.jpg`) gets the suffix appended. Returns `None` when
/// the path has no file name.
pub fn rotated_path(path: &Path, suffix: &str) -> Option<PathBuf> {
    let mut name = path.file_stem()?.to_os_string();
    name.push(suffix);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    Some(path.with_file_name(name))
}

/// Point reflection through the image center: (x, y) -> (w-1-x, h-1-y).
pub fn rotate_pixels_180(image: &DynamicImage) -> DynamicImage {
    image.rotate180()
}
