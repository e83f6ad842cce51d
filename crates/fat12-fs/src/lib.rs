//! # fat12-fs
//!
//! The FAT12 on-disk structure decoder and directory-tree walker: boot
//! sector fields, the packed-nibble FAT entry decoder, directory-entry
//! classification, cluster→sector translation, and the iterative
//! subdirectory walk, plus the two report builders (volume summary, file
//! listing) that sit on top of them.

pub mod dir_entry;
pub mod fat_table;
pub mod geometry;
pub mod layout;
pub mod report;
pub mod walker;

pub use dir_entry::{classify, CreatedAt, DirRecord, FileRecord};
pub use geometry::Geometry;
pub use report::{render_listing, VolumeSummary};
pub use walker::{walk, walk_root, Visitor};
