//! Directory walker
//!
//! Traverses the root directory and any subdirectories it reaches,
//! invoking a visitor once per live record in pre-order (parents announced
//! before their children). Implemented as an explicit stack of directory
//! frames rather than recursion, which also gives us a natural place to
//! hang the visited-set cycle guard and stop-on-request cancellation.

use crate::dir_entry::{classify, DirRecord, FileRecord};
use crate::layout;
use fat12_core::{Error, Result};
use fat12_pipeline::ImageReader;
use std::collections::HashSet;
use std::ops::ControlFlow;

/// Callback invoked once per live directory record, in on-disk order
pub trait Visitor {
    /// A subdirectory (or the root) is about to be scanned
    fn enter_directory(&mut self, name: &str) -> ControlFlow<()> {
        let _ = name;
        ControlFlow::Continue(())
    }

    /// A volume-label record was found in the root directory
    fn volume_label(&mut self, label_bytes: &[u8; 11]) -> ControlFlow<()> {
        let _ = label_bytes;
        ControlFlow::Continue(())
    }

    /// A regular file record was found
    fn file(&mut self, record: &FileRecord) -> ControlFlow<()>;
}

struct Frame {
    start_sector: u64,
    length_sectors: u64,
    cursor: usize,
    is_root: bool,
}

impl Frame {
    fn entry_count(&self) -> usize {
        self.length_sectors as usize * layout::SECTOR_SIZE_ENTRIES
    }
}

/// Walk the root directory of the volume
pub fn walk_root(reader: &mut ImageReader, visitor: &mut dyn Visitor) -> Result<()> {
    let length_sectors = layout::ROOT_DIR_END_SECTOR - layout::ROOT_DIR_START_SECTOR + 1;
    walk(reader, layout::ROOT_DIR_START_SECTOR, length_sectors, visitor)
}

/// Walk an arbitrary directory range, recursing into subdirectories it
/// contains. `start_sector`/`length_sectors` describe the root directory
/// iff `start_sector == layout::ROOT_DIR_START_SECTOR` — that's the only
/// level a volume label is expected on.
pub fn walk(
    reader: &mut ImageReader,
    start_sector: u64,
    length_sectors: u64,
    visitor: &mut dyn Visitor,
) -> Result<()> {
    let is_root = start_sector == layout::ROOT_DIR_START_SECTOR;
    if is_root {
        if visitor.enter_directory("Root").is_break() {
            return Ok(());
        }
    }

    let mut visited: HashSet<(u64, u64)> = HashSet::new();
    visited.insert((start_sector, length_sectors));

    let mut stack = vec![Frame {
        start_sector,
        length_sectors,
        cursor: 0,
        is_root,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.cursor >= frame.entry_count() {
            stack.pop();
            continue;
        }

        let sector_in_dir = frame.cursor / layout::SECTOR_SIZE_ENTRIES;
        let entry_in_sector = frame.cursor % layout::SECTOR_SIZE_ENTRIES;
        let abs_sector = frame.start_sector + sector_in_dir as u64;
        let byte_offset =
            abs_sector * layout::SECTOR_SIZE_BYTES + (entry_in_sector * layout::DIR_ENTRY_SIZE) as u64;
        let is_root_frame = frame.is_root;
        frame.cursor += 1;

        let raw = reader.read_at(byte_offset, layout::DIR_ENTRY_SIZE)?;
        let mut entry_bytes = [0u8; layout::DIR_ENTRY_SIZE];
        entry_bytes.copy_from_slice(&raw);

        match classify(&entry_bytes) {
            DirRecord::EndOfDirectory => {
                stack.pop();
            }
            DirRecord::Free | DirRecord::LongNameFragment => {}
            DirRecord::VolumeLabel { label_bytes } => {
                if is_root_frame && visitor.volume_label(&label_bytes).is_break() {
                    return Ok(());
                }
            }
            DirRecord::RegularFile(record) => {
                if visitor.file(&record).is_break() {
                    return Ok(());
                }
            }
            DirRecord::Subdirectory(record) => {
                // "." and ".." links typically carry first_logical_cluster
                // 0 or 1 and are already downgraded to `Free` by the
                // classifier; this additionally rejects any directory
                // entry whose name itself starts with '.', since "." can
                // legitimately point at a cluster >= 2 (itself).
                if record.trimmed_name().starts_with('.') {
                    continue;
                }

                if visitor.enter_directory(&record.trimmed_name()).is_break() {
                    return Ok(());
                }

                if stack.len() >= layout::MAX_DIRECTORY_DEPTH {
                    return Err(Error::DirectoryTooDeep);
                }

                let child_start = layout::cluster_to_sector(record.first_logical_cluster as u32);
                let child_length = layout::sectors_for_size(record.size);
                let key = (child_start, child_length);

                if visited.insert(key) {
                    stack.push(Frame {
                        start_sector: child_start,
                        length_sectors: child_length,
                        cursor: 0,
                        is_root: false,
                    });
                } else {
                    tracing::debug!(
                        sector = child_start,
                        "skipping already-visited directory (cycle guard)"
                    );
                }
            }
        }
    }

    Ok(())
}
