use std::io;
use std::path::{Path, PathBuf};

use crate::models::face::{FaceReport, FaceSpec, RunOutcome};

// Everything a run needs
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub directory: PathBuf,
    pub faces: Vec<FaceSpec>,
}

// Where the configuration comes from
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// Receives each step of a run as soon as it happens
pub trait ReportPort {
    fn directory_missing(&mut self, directory: &Path) -> io::Result<()>;
    fn started(&mut self, directory: &Path) -> io::Result<()>;
    fn face_done(&mut self, report: &FaceReport) -> io::Result<()>;
    fn finished(&mut self) -> io::Result<()>;
}

// Runs the rotation over a configuration
pub trait RotationPort {
    fn execute(&self, config: AppConfig, reporter: &mut dyn ReportPort) -> io::Result<RunOutcome>;
}
