use crate::sw::{PatchOutcome, has_service_worker, inject_service_worker};
use coi_shared::{CoiError, CoiResult};
use log::{debug, trace};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct HtmlFile {
    pub path: PathBuf,
    pub content: FileContent,
}

#[derive(Debug, Clone)]
pub struct FileContent {
    pub original: String,
    pub transformed: String,
}

impl HtmlFile {
    /// Reads the whole document at `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`CoiError::FileNotFound`] if nothing exists at `path`, and an
    /// I/O or UTF-8 error if it cannot be inspected or read as text.
    pub fn load<P: AsRef<Path>>(path: P) -> CoiResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Err(e) = fs_err::metadata(&path) {
            return Err(match e.kind() {
                ErrorKind::NotFound => CoiError::FileNotFound(path.display().to_string()),
                _ => e.into(),
            });
        }

        let bytes = fs_err::read(&path)?;
        let content = String::from_utf8(bytes)?;
        debug!(target: "coi", "loaded {} ({} bytes)", path.display(), content.len());

        Ok(Self {
            path,
            content: FileContent {
                original: content.clone(),
                transformed: content,
            },
        })
    }

    /// Applies the injection to the original text.
    pub fn inject(&mut self) -> PatchOutcome {
        if has_service_worker(&self.content.original) {
            debug!(target: "coi", "{} already contains the service worker snippet", self.path.display());
        }

        let (transformed, outcome) = inject_service_worker(&self.content.original);
        match outcome {
            PatchOutcome::Inserted { offset } => {
                trace!(target: "coi", "marker found at byte {offset}");
            }
            PatchOutcome::MarkerMissing => {
                debug!(target: "coi", "no </head> in {}, leaving content as is", self.path.display());
            }
        }

        self.content.transformed = transformed;
        outcome
    }

    /// Truncates the file and writes the transformed text back, even when
    /// nothing changed.
    pub fn write(&self) -> CoiResult {
        fs_err::write(&self.path, self.content.transformed.as_bytes())?;
        debug!(target: "coi", "wrote {} bytes to {}", self.content.transformed.len(), self.path.display());
        Ok(())
    }

    #[inline(always)]
    pub fn is_modified(&self) -> bool {
        self.content.original != self.content.transformed
    }
}

/// Loads `path`, injects the service worker snippet and overwrites the file in place.
pub fn patch_file<P: AsRef<Path>>(path: P) -> CoiResult<PatchOutcome> {
    let mut file = HtmlFile::load(path)?;
    let outcome = file.inject();
    if !file.is_modified() {
        debug!(target: "coi", "rewriting {} unchanged", file.path.display());
    }
    file.write()?;
    Ok(outcome)
}
