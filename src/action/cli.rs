use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;

use crate::config::config::{default_directory, default_faces, Cli};
use crate::config::ports::{AppConfig, ConfigPort, ReportPort, RotationPort};
use crate::facade::rotation_facade::RotationAdapter;
use crate::models::face::{FaceOutcome, FaceReport};
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};

/// Runs one rotation pass, printing each step to stdout as it happens.
///
/// Returns the directory that was used, whether or not it existed.
pub fn process_args(args: Vec<OsString>) -> io::Result<String> {
    let config_port: Box<dyn ConfigPort> = if args.len() == 1 {
        log::info!("No directory given, using {}", default_directory().display());
        Box::new(DefaultConfigAdapter::new(default_directory()))
    } else {
        Box::new(CliConfigAdapter::new(Cli::parse_from(args)))
    };

    let config = ConfigService::new(config_port).get_config()?;
    let directory = config.directory.display().to_string();

    let stdout = io::stdout();
    let mut reporter = ConsoleReporter::new(stdout.lock());
    let rotation_port: Box<dyn RotationPort> = Box::new(RotationAdapter);
    rotation_port.execute(config, &mut reporter)?;

    Ok(directory)
}

// Configuration taken from the parsed command line
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            directory: self.cli.directory.clone().unwrap_or_else(default_directory),
            faces: default_faces(),
        })
    }
}

/// Writes the human-readable report, flushing after every step.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        ConsoleReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportPort for ConsoleReporter<W> {
    fn directory_missing(&mut self, directory: &Path) -> io::Result<()> {
        writeln!(self.out, "❌ Directory {} does not exist", directory.display())?;
        self.out.flush()
    }

    fn started(&mut self, directory: &Path) -> io::Result<()> {
        writeln!(self.out, "🔄 Processing faces in directory: {}", directory.display())?;
        self.out.flush()
    }

    fn face_done(&mut self, report: &FaceReport) -> io::Result<()> {
        render_face(report, &mut self.out)?;
        self.out.flush()
    }

    fn finished(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "✨ Done! You can now use the rotated faces in your cubemap panorama.")?;
        writeln!(
            self.out,
            "📝 Note: after replacing the files you can remove the flipTopBottom: true option from the CubePanoramaViewer component."
        )?;
        self.out.flush()
    }
}

fn render_face<W: Write>(report: &FaceReport, out: &mut W) -> io::Result<()> {
    match &report.outcome {
        FaceOutcome::Missing => writeln!(
            out,
            "❌ {} face file {} not found",
            report.face.title(),
            report.source.display()
        ),
        FaceOutcome::Rotated { output_path } => {
            writeln!(out, "✅ Image rotated and saved as: {}", output_path.display())?;
            let output_name = output_path
                .file_name()
                .map(Path::new)
                .unwrap_or(output_path.as_path());
            writeln!(
                out,
                "ℹ️ To use the rotated image, rename {} to {}",
                output_name.display(),
                report.face.file_name
            )
        }
        FaceOutcome::Failed { error } => writeln!(
            out,
            "❌ Error while processing {}: {}",
            report.source.display(),
            error
        ),
    }
}
