use std::io;

use log::info;

use crate::config::config::validate_directory;
use crate::config::ports::{AppConfig, ReportPort, RotationPort};
use crate::facade::traits::i_rotation::RotationFacadeTrait;
use crate::models::face::{FaceOutcome, FaceReport, FaceSpec, RunOutcome};
use crate::models::rotation::RotateInput;
use crate::service::rotator::ImageRotatorService;
use crate::service::traits::i_service::RotatorServiceTrait;

pub struct RotationFacade {
    rotator: Box<dyn RotatorServiceTrait>,
}

impl RotationFacade {
    pub fn new(rotator: Box<dyn RotatorServiceTrait>) -> Self {
        RotationFacade { rotator }
    }

    fn process_face(&self, config: &AppConfig, face: &FaceSpec) -> FaceReport {
        let source = config.directory.join(&face.file_name);

        let outcome = if !source.is_file() {
            info!("{} face not found: {}", face.label, source.display());
            FaceOutcome::Missing
        } else {
            let input = RotateInput {
                source: source.clone(),
                suffix: face.suffix.clone(),
            };
            match self.rotator.rotate(input) {
                Ok(output) => {
                    info!(
                        "{} face rotated ({}x{}): {}",
                        face.label,
                        output.width,
                        output.height,
                        output.output_path.display()
                    );
                    FaceOutcome::Rotated {
                        output_path: output.output_path,
                    }
                }
                Err(e) => {
                    info!("{} face failed: {}", face.label, e);
                    FaceOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            }
        };

        FaceReport {
            face: face.clone(),
            source,
            outcome,
        }
    }
}

impl Default for RotationFacade {
    fn default() -> Self {
        RotationFacade::new(Box::new(ImageRotatorService::new()))
    }
}

impl RotationFacadeTrait for RotationFacade {
    fn execute_rotation(&self, config: AppConfig, reporter: &mut dyn ReportPort) -> io::Result<RunOutcome> {
        if !validate_directory(&config.directory) {
            reporter.directory_missing(&config.directory)?;
            return Ok(RunOutcome::DirectoryMissing(config.directory));
        }

        info!("Processing {} faces in {}", config.faces.len(), config.directory.display());
        reporter.started(&config.directory)?;

        let mut faces = Vec::with_capacity(config.faces.len());
        for face in &config.faces {
            let report = self.process_face(&config, face);
            reporter.face_done(&report)?;
            faces.push(report);
        }
        reporter.finished()?;

        Ok(RunOutcome::Processed {
            directory: config.directory,
            faces,
        })
    }
}

// Runs the facade with the image-backed rotator
pub struct RotationAdapter;

impl RotationPort for RotationAdapter {
    fn execute(&self, config: AppConfig, reporter: &mut dyn ReportPort) -> io::Result<RunOutcome> {
        RotationFacade::default().execute_rotation(config, reporter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config::default_faces;
    use crate::error::RotateError;
    use crate::models::rotation::RotateOutput;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    type Events = Arc<Mutex<Vec<String>>>;

    // Logs "rotate <name>" and fails for sources whose file name is listed
    struct FakeRotator {
        fail_on: Vec<&'static str>,
        events: Events,
    }

    impl RotatorServiceTrait for FakeRotator {
        fn rotate(&self, input: RotateInput) -> Result<RotateOutput, RotateError> {
            let name = input.source.file_name().unwrap().to_str().unwrap().to_string();
            self.events.lock().unwrap().push(format!("rotate {}", name));
            if self.fail_on.contains(&name.as_str()) {
                return Err(RotateError::InvalidPath(input.source));
            }
            Ok(RotateOutput {
                output_path: input.source.with_file_name(format!("{}{}", name, input.suffix)),
                width: 1,
                height: 1,
            })
        }
    }

    struct RecordingReporter {
        events: Events,
    }

    impl ReportPort for RecordingReporter {
        fn directory_missing(&mut self, _directory: &Path) -> io::Result<()> {
            self.events.lock().unwrap().push("missing".to_string());
            Ok(())
        }

        fn started(&mut self, _directory: &Path) -> io::Result<()> {
            self.events.lock().unwrap().push("started".to_string());
            Ok(())
        }

        fn face_done(&mut self, report: &FaceReport) -> io::Result<()> {
            self.events
                .lock()
                .unwrap()
                .push(format!("done {}", report.face.file_name));
            Ok(())
        }

        fn finished(&mut self) -> io::Result<()> {
            self.events.lock().unwrap().push("finished".to_string());
            Ok(())
        }
    }

    fn run(fail_on: Vec<&'static str>, directory: PathBuf) -> (RunOutcome, Vec<String>) {
        let events = Events::default();
        let facade = RotationFacade::new(Box::new(FakeRotator {
            fail_on,
            events: Arc::clone(&events),
        }));
        let mut reporter = RecordingReporter {
            events: Arc::clone(&events),
        };
        let config = AppConfig {
            directory,
            faces: default_faces(),
        };
        let outcome = facade.execute_rotation(config, &mut reporter).unwrap();
        let events = events.lock().unwrap().clone();
        (outcome, events)
    }

    fn rotations(events: &[String]) -> usize {
        events.iter().filter(|e| e.starts_with("rotate")).count()
    }

    #[test]
    fn missing_directory_touches_no_face() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let (outcome, events) = run(vec![], missing.clone());

        assert!(matches!(outcome, RunOutcome::DirectoryMissing(ref p) if *p == missing));
        assert_eq!(events, ["missing"]);
    }

    #[test]
    fn absent_face_is_skipped_and_other_face_still_runs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("d.jpg"), b"x").unwrap();

        let (outcome, events) = run(vec![], dir.path().to_path_buf());

        let RunOutcome::Processed { faces, .. } = outcome else {
            panic!("directory exists");
        };
        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0].outcome, FaceOutcome::Missing);
        assert_eq!(faces[0].source, dir.path().join("u.jpg"));
        assert!(matches!(faces[1].outcome, FaceOutcome::Rotated { .. }));
        assert_eq!(events, ["started", "done u.jpg", "rotate d.jpg", "done d.jpg", "finished"]);
    }

    #[test]
    fn failure_on_one_face_does_not_stop_the_other() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("u.jpg"), b"x").unwrap();
        std::fs::write(dir.path().join("d.jpg"), b"x").unwrap();

        let (outcome, events) = run(vec!["u.jpg"], dir.path().to_path_buf());

        let RunOutcome::Processed { faces, .. } = outcome else {
            panic!("directory exists");
        };
        assert!(matches!(faces[0].outcome, FaceOutcome::Failed { .. }));
        assert!(matches!(faces[1].outcome, FaceOutcome::Rotated { .. }));
        assert_eq!(rotations(&events), 2);
    }

    #[test]
    fn each_face_is_reported_before_the_next_one_starts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("u.jpg"), b"x").unwrap();
        std::fs::write(dir.path().join("d.jpg"), b"x").unwrap();

        let (_, events) = run(vec![], dir.path().to_path_buf());

        assert_eq!(
            events,
            ["started", "rotate u.jpg", "done u.jpg", "rotate d.jpg", "done d.jpg", "finished"]
        );
    }

    #[test]
    fn directory_named_like_a_face_counts_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("u.jpg")).unwrap();

        let (outcome, events) = run(vec![], dir.path().to_path_buf());

        let RunOutcome::Processed { faces, .. } = outcome else {
            panic!("directory exists");
        };
        assert_eq!(faces[0].outcome, FaceOutcome::Missing);
        assert_eq!(faces[1].outcome, FaceOutcome::Missing);
        assert_eq!(rotations(&events), 0);
    }
}
