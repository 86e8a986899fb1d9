//! Pretty JSON writer for the grouped document.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

/// Writes one document as 2-space indented JSON followed by a newline.
pub struct JsonWriter<W: Write> {
    writer: BufWriter<W>,
}

impl JsonWriter<File> {
    pub fn to_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::to_writer(create_output(path)?))
    }
}

/// Create (or truncate) an output file, keeping the path in the error.
pub fn create_output(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    File::create(path).map_err(|source| Error::Create {
        path: path.to_path_buf(),
        source,
    })
}

impl<W: Write> JsonWriter<W> {
    pub fn to_writer(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    pub fn write_document<T: Serialize + ?Sized>(&mut self, doc: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, doc)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Unwrap the underlying writer, flushing anything buffered.
    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error().into())
    }
}
