//! Zip archive output.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use capsule_core::{ArchiveSink, CapsuleError, CapsuleResult, SnapshotTime};
use chrono::{Datelike, Timelike};
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// [`ArchiveSink`] appending deflated entries to a zip file.
///
/// Existing entries of the archive are kept, so successive runs accumulate
/// in one file. Call [`ZipSink::finish`] to write the central directory.
pub struct ZipSink {
    writer: ZipWriter<File>,
    options: FileOptions,
}

impl ZipSink {
    /// Open `path` for appending, creating the archive if it does not exist.
    ///
    /// Entries are stamped with the snapshot time.
    pub fn open(path: &Path, timestamp: SnapshotTime) -> CapsuleResult<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let writer = if file.metadata()?.len() == 0 {
            ZipWriter::new(file)
        } else {
            ZipWriter::new_append(file).map_err(archive_error)?
        };

        let mut options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        if let Some(modified) = zip_datetime(timestamp) {
            options = options.last_modified_time(modified);
        }

        Ok(ZipSink { writer, options })
    }

    pub fn finish(mut self) -> CapsuleResult<()> {
        self.writer.finish().map_err(archive_error)?;
        Ok(())
    }
}

impl ArchiveSink for ZipSink {
    fn write(&mut self, path: &str, payload: &[u8]) -> CapsuleResult<()> {
        self.writer
            .start_file(path, self.options)
            .map_err(archive_error)?;
        self.writer.write_all(payload)?;
        Ok(())
    }
}

fn archive_error(err: zip::result::ZipError) -> CapsuleError {
    CapsuleError::Archive(err.to_string())
}

/// Zip timestamps only cover 1980-2107; outside that the default is kept.
fn zip_datetime(timestamp: SnapshotTime) -> Option<DateTime> {
    let instant = timestamp.instant();
    let year = u16::try_from(instant.year()).ok()?;

    DateTime::from_date_and_time(
        year,
        instant.month() as u8,
        instant.day() as u8,
        instant.hour() as u8,
        instant.minute() as u8,
        instant.second() as u8,
    )
    .ok()
}
