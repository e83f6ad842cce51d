//! # fat12-pipeline
//!
//! A random-access byte source over a FAT12 image, memory-mapped by
//! default with a buffered-file fallback.

mod mmap;
mod reader;

pub use mmap::MmapImage;
pub use reader::{ImageReader, OpenMode, SECTOR_SIZE};
