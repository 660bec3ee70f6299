use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::{WriteOptions, write_to};
use crate::{Document, Error};

/// Load a document from `path`.
pub fn load_file(path: impl AsRef<Path>) -> Result<Document, Error> {
    let mut doc = Document::new();
    doc.load_file(path)?;
    Ok(doc)
}

/// Save with default [`WriteOptions`].
pub fn save_file(doc: &Document, path: impl AsRef<Path>) -> Result<(), Error> {
    save_file_with_options(doc, path, &WriteOptions::default())
}

/// Create or truncate `path` (mode 0644 on Unix) and write `doc` into it.
///
/// Output is written in place: if a write fails, whatever reached the file
/// stays there.
pub fn save_file_with_options(
    doc: &Document,
    path: impl AsRef<Path>,
    options: &WriteOptions,
) -> Result<(), Error> {
    let path = path.as_ref();
    let file = open_for_write(path).map_err(|source| Error::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    write_to(doc, BufWriter::new(file), options).map_err(|source| Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), sections = doc.len(), "saved document");
    Ok(())
}

impl Document {
    /// Parse the file at `path` into this document.
    ///
    /// Like [`Document::load_text`], a malformed line leaves the lines before
    /// it applied.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_reader(BufReader::new(file))?;

        tracing::debug!(path = %path.display(), sections = self.len(), "loaded document");
        Ok(())
    }
}

fn open_for_write(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path)
}
