use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct RotateInput {
    pub source: PathBuf,
    pub suffix: String,
}

#[derive(Debug)]
pub struct RotateOutput {
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
}
