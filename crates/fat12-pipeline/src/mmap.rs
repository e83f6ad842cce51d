//! Memory-mapped byte source for a whole disk image

use memmap2::Mmap;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Upper bound on what we'll memory-map; well past any floppy or hard-disk
/// image this tool is meant for, just large enough to reject obvious
/// mistakes (mapping a device node, a sparse multi-terabyte file, etc.)
const MAX_MMAP_SIZE: u64 = 16 * 1024 * 1024 * 1024;

/// A `Read + Seek` view over a memory-mapped file
pub struct MmapImage {
    mmap: Mmap,
    position: u64,
}

impl MmapImage {
    /// Memory-map the file at `path`
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_file(&file)
    }

    /// Memory-map an already-open file
    pub fn from_file(file: &File) -> io::Result<Self> {
        let metadata = file.metadata()?;

        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "only regular files can be memory-mapped",
            ));
        }

        if metadata.len() > MAX_MMAP_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "file size {} exceeds memory mapping limit {}",
                    metadata.len(),
                    MAX_MMAP_SIZE
                ),
            ));
        }

        // SAFETY: file is a validated regular file opened read-only; the
        // mapping is MAP_PRIVATE (read-only) and the caller owns `file` for
        // at least as long as this struct lives.
        let mmap = unsafe { Mmap::map(file)? };
        Ok(Self { mmap, position: 0 })
    }

    pub fn len(&self) -> u64 {
        self.mmap.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }
}

impl Read for MmapImage {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.len().saturating_sub(self.position) as usize;
        if remaining == 0 {
            return Ok(0);
        }

        let to_read = buf.len().min(remaining);
        let start = self.position as usize;
        buf[..to_read].copy_from_slice(&self.mmap[start..start + to_read]);
        self.position += to_read as u64;
        Ok(to_read)
    }
}

impl Seek for MmapImage {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let new_pos = match pos {
            SeekFrom::Start(offset) => offset as i64,
            SeekFrom::End(offset) => self.len() as i64 + offset,
            SeekFrom::Current(offset) => self.position as i64 + offset,
        };

        if new_pos < 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek before beginning of image",
            ));
        }

        self.position = new_pos as u64;
        Ok(self.position)
    }
}
