use camino::Utf8Path;

use crate::error::FileError;

/// A file the user picked to upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalFile {
    name: String,
    /// The media type the file says it has, like `image/png`.
    media_type: Option<String>,
    bytes: Vec<u8>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, media_type: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.map(str::to_string),
            bytes,
        }
    }

    /// Reads a file from disk.
    ///
    /// Files on disk don't declare a media type, so it's sniffed from the
    /// first few bytes instead.
    #[tracing::instrument]
    pub async fn from_path(path: &Utf8Path) -> Result<Self, FileError> {
        let name = path
            .file_name()
            .ok_or_else(|| FileError::NoFileName(path.to_path_buf()))?
            .to_string();

        let bytes = tokio::fs::read(path)
            .await
            .inspect_err(|e| tracing::warn!("Failed to read local file. err: {e}"))
            .map_err(|err| FileError::ReadFailed {
                path: path.to_path_buf(),
                err,
            })?;

        let media_type = infer::get(&bytes).map(|ty| ty.mime_type());
        tracing::debug!("sniffed media type {media_type:?} for `{name}`");

        Ok(Self::new(name, media_type, bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether the declared media type is some kind of image.
    pub fn is_image(&self) -> bool {
        self.media_type
            .as_deref()
            .is_some_and(|ty| ty.starts_with("image/"))
    }
}

#[cfg(test)]
mod tests {
    use super::LocalFile;

    #[test]
    fn image_types() {
        let png = LocalFile::new("a.png", Some("image/png"), vec![]);
        let pdf = LocalFile::new("a.pdf", Some("application/pdf"), vec![]);
        let unknown = LocalFile::new("a", None, vec![]);

        assert!(png.is_image());
        assert!(!pdf.is_image());
        assert!(!unknown.is_image(), "no declared type isn't an image");
    }
}
