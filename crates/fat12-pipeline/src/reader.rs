//! Random-access byte reader over a FAT12 image

use crate::mmap::MmapImage;
use fat12_core::{Error, ReadSeek, Result};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Sector size assumed by every FAT12 image this tool reads
pub const SECTOR_SIZE: usize = 512;

/// How an [`ImageReader`] gets its bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// Memory-map the file (default, avoids a syscall per read)
    #[default]
    Mmap,
    /// Use buffered file I/O instead
    Buffered,
}

/// Random-access reader over a FAT12 image.
///
/// Presents `read_at`/`read_sector` semantics to callers regardless of
/// which backing stream is underneath; internal seeks are never observable
/// across calls.
pub struct ImageReader {
    inner: Box<dyn ReadSeek>,
}

impl ImageReader {
    /// Open an image file from disk
    pub fn open(path: &Path, mode: OpenMode) -> Result<Self> {
        let inner: Box<dyn ReadSeek> = match mode {
            OpenMode::Mmap => Box::new(MmapImage::open(path).map_err(|cause| Error::OpenFailed {
                path: path.to_path_buf(),
                cause,
            })?),
            OpenMode::Buffered => Box::new(File::open(path).map_err(|cause| Error::OpenFailed {
                path: path.to_path_buf(),
                cause,
            })?),
        };
        Ok(Self { inner })
    }

    /// Wrap any readable, seekable stream (tests use `Cursor<Vec<u8>>`)
    pub fn from_stream<R: Read + Seek + Send + 'static>(stream: R) -> Self {
        Self {
            inner: Box::new(stream),
        }
    }

    /// Read exactly `len` bytes starting at absolute `offset`
    pub fn read_at(&mut self, offset: u64, len: usize) -> Result<Vec<u8>> {
        self.inner.seek(SeekFrom::Start(offset))?;

        let mut buf = vec![0u8; len];
        let mut got = 0usize;
        loop {
            match self.inner.read(&mut buf[got..]) {
                Ok(0) => break,
                Ok(n) => got += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
            if got == len {
                break;
            }
        }

        if got != len {
            return Err(Error::ShortRead {
                offset,
                want: len,
                got,
            });
        }

        Ok(buf)
    }

    /// Convenience equal to `read_at(n * SECTOR_SIZE, SECTOR_SIZE)`
    pub fn read_sector(&mut self, n: u64) -> Result<Vec<u8>> {
        self.read_at(n * SECTOR_SIZE as u64, SECTOR_SIZE)
    }
}
