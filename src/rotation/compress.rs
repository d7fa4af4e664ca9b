//! Gzip for rotated archives.

use crate::Error;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Writes `<path>.gz` and removes `path`. Returns the compressed path.
pub(super) fn compress_file(path: &Path) -> Result<PathBuf, Error> {
    let mut reader = BufReader::new(File::open(path)?);

    let gz_path = super::with_suffix(path, ".gz");
    let writer = BufWriter::new(File::create(&gz_path)?);
    let mut encoder = GzEncoder::new(writer, Compression::default());

    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)?;

    Ok(gz_path)
}
