//! Saving decks to and loading decks from files.
//!
//! The file holds the [`codec`](crate::codec) text form of the deck and
//! nothing else.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::codec;
use crate::deck::Deck;
use crate::error::StoreError;

/// Permission bits for newly created deck files, before the umask.
#[cfg(unix)]
const FILE_MODE: u32 = 0o666;

/// Writes `deck` to `path`, creating the file or truncating it.
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns [`StoreError::Write`] if the file cannot be opened or written.
pub fn save(deck: &Deck, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();
    let text = codec::encode(deck);

    write_file(path, text.as_bytes()).map_err(|source| {
        log::warn!("saving deck to {} failed: {source}", path.display());
        StoreError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    log::debug!("saved {} cards to {}", deck.len(), path.display());
    Ok(())
}

/// Reads the deck stored at `path`.
///
/// # Errors
///
/// Returns [`StoreError::Read`] if the file cannot be read and
/// [`StoreError::Encoding`] if it is not valid UTF-8.
pub fn load(path: impl AsRef<Path>) -> Result<Deck, StoreError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| {
        log::warn!("loading deck from {} failed: {source}", path.display());
        StoreError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let text = core::str::from_utf8(&bytes).map_err(|_| StoreError::Encoding {
        path: path.to_path_buf(),
    })?;

    let deck = codec::decode(text);
    log::debug!("loaded {} cards from {}", deck.len(), path.display());
    Ok(deck)
}

fn write_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.flush()
}

impl Deck {
    /// Writes the deck to `path`. See [`save`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the file cannot be opened or written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        save(self, path)
    }

    /// Reads a deck from `path`. See [`load`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the file cannot be read and
    /// [`StoreError::Encoding`] if it is not valid UTF-8.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        load(path)
    }
}
