//! Image store for uploaded cover images.
//!
//! Every upload is written under a freshly generated name: 16 random bytes
//! as lower-case hex followed by the original file's extension. The
//! client-supplied name never reaches the filesystem.

use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;

/// Number of random bytes in a generated filename.
const NAME_BYTES: usize = 16;

/// Writes uploaded images into a single directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory uploads are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist `data` and return the generated filename.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> io::Result<String> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let filename = generate_image_filename(original_name);
        tokio::fs::write(self.dir.join(&filename), data).await?;

        tracing::debug!(%filename, bytes = data.len(), "Stored uploaded image");
        Ok(filename)
    }
}

/// Random hex name carrying over the extension of `original_name`.
pub fn generate_image_filename(original_name: &str) -> String {
    let mut bytes = [0u8; NAME_BYTES];
    rand::rng().fill(&mut bytes);

    let stem: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("{stem}{}", extension_of(original_name))
}

/// The final extension including its dot, or empty.
///
/// Leading dots do not start an extension: `.bashrc` has none.
fn extension_of(name: &str) -> &str {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    match base.rfind('.') {
        Some(idx) if idx > 0 && base[..idx].chars().any(|c| c != '.') => &base[idx..],
        _ => "",
    }
}
