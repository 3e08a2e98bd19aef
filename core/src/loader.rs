use crate::error::{CoreError, CoreResult};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PRIMARY_PAGE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: PathBuf,
    pub content: String,
    pub sha256: String,
}

impl Page {
    pub fn from_text(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        let sha256 = sha256_hex(content.as_bytes());
        Self {
            path: path.into(),
            content,
            sha256,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePresence {
    pub file: String,
    pub present: bool,
}

/// Reads the whole page. Invalid UTF-8 is replaced rather than rejected.
pub fn load_page(path: &Path) -> CoreResult<Page> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            return Err(CoreError::MissingPage(name));
        }
        Err(e) => return Err(e.into()),
    };
    let sha256 = sha256_hex(&bytes);
    let content = String::from_utf8_lossy(&bytes).into_owned();
    debug!(path = %path.display(), bytes = bytes.len(), sha256 = %sha256, "loaded page");
    Ok(Page {
        path: path.to_path_buf(),
        content,
        sha256,
    })
}

pub fn companion_presence(root: &Path, files: &[String]) -> Vec<FilePresence> {
    files
        .iter()
        .map(|f| FilePresence {
            file: f.clone(),
            present: root.join(f).exists(),
        })
        .collect()
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}
