use std::path::PathBuf;

// One cubemap face and the suffix used for its rotated copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceSpec {
    pub label: String,
    pub file_name: String,
    pub suffix: String,
}

impl FaceSpec {
    pub fn new(label: &str, file_name: &str, suffix: &str) -> Self {
        FaceSpec {
            label: label.to_string(),
            file_name: file_name.to_string(),
            suffix: suffix.to_string(),
        }
    }

    /// Label with its first letter upper-cased, for sentence starts.
    pub fn title(&self) -> String {
        let mut chars = self.label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceOutcome {
    Missing,
    Rotated { output_path: PathBuf },
    Failed { error: String },
}

#[derive(Debug, Clone)]
pub struct FaceReport {
    pub face: FaceSpec,
    pub source: PathBuf,
    pub outcome: FaceOutcome,
}

#[derive(Debug)]
pub enum RunOutcome {
    DirectoryMissing(PathBuf),
    Processed {
        directory: PathBuf,
        faces: Vec<FaceReport>,
    },
}
