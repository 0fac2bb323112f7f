//! Output sink - writes a password batch joined by newlines.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output file {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write passwords: {0}")]
    Write(#[from] io::Error),
}

/// Writes `passwords` separated by `\n`, without a trailing newline.
///
/// Entries are written one at a time, so the joined text is never held in memory.
///
/// # Returns
/// The number of passwords written.
pub fn write_passwords<W, I, S>(writer: W, passwords: I) -> Result<usize, OutputError>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(writer);
    let mut written = 0;

    for password in passwords {
        if written > 0 {
            writer.write_all(b"\n")?;
        }
        writer.write_all(password.as_ref().as_bytes())?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}

/// Creates (or truncates) `path` and writes the batch into it.
///
/// A partially written file is removed when writing fails.
pub fn write_passwords_to_path<P, I, S>(path: P, passwords: I) -> Result<usize, OutputError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    match write_passwords(file, passwords) {
        Ok(count) => {
            #[cfg(feature = "tracing")]
            tracing::info!("Wrote {} passwords to {:?}", count, path);
            Ok(count)
        }
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Writing passwords to {:?} FAILED: {}", path, e);
            discard_partial(path);
            Err(e)
        }
    }
}

fn discard_partial(path: &Path) {
    if let Err(_e) = std::fs::remove_file(path) {
        #[cfg(feature = "tracing")]
        tracing::warn!("Failed to remove partial output {:?}: {}", path, _e);
    }
}
