use std::io;

use crate::config::ports::{AppConfig, ReportPort};
use crate::models::face::RunOutcome;

// Facade interface
pub trait RotationFacadeTrait {
    /// Rotates every configured face found in the configured directory,
    /// handing each face's report to `reporter` before moving on.
    /// A missing directory or face is part of the outcome, not an error.
    fn execute_rotation(&self, config: AppConfig, reporter: &mut dyn ReportPort) -> io::Result<RunOutcome>;
}
