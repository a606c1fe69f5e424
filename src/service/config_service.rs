use std::io;
use std::path::PathBuf;

use crate::config::config::default_faces;
use crate::config::ports::{AppConfig, ConfigPort};

// Picks the configuration source for a run
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// Used when no directory argument was given
pub struct DefaultConfigAdapter {
    directory: PathBuf,
}

impl DefaultConfigAdapter {
    pub fn new(directory: PathBuf) -> Self {
        DefaultConfigAdapter { directory }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            directory: self.directory.clone(),
            faces: default_faces(),
        })
    }
}
