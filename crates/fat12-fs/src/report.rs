//! Report builders — volume summary and file listing

use crate::dir_entry::FileRecord;
use crate::geometry::Geometry;
use crate::walker::{self, Visitor};
use crate::{fat_table, layout};
use fat12_core::Result;
use fat12_pipeline::ImageReader;
use std::fmt::Write as _;
use std::ops::ControlFlow;

/// The volume summary report: geometry plus derived free space and file count
#[derive(Debug, Clone)]
pub struct VolumeSummary {
    pub os_name: String,
    pub label: String,
    pub total_bytes: u64,
    pub free_bytes: u64,
    pub file_count: u32,
    pub sectors_per_fat: u16,
    pub num_fat_copies: u8,
}

impl VolumeSummary {
    /// Build the volume summary by combining the boot-sector geometry, the
    /// FAT free-space count, and a full walk of the directory tree to both
    /// count regular files and, if the boot sector carried no label,
    /// recover one from a root-level `VolumeLabel` record.
    pub fn build(reader: &mut ImageReader) -> Result<Self> {
        let geometry = Geometry::read(reader)?;
        let free_clusters = fat_table::free_cluster_count(reader, geometry.total_sectors)?;

        struct Tally {
            file_count: u32,
            recovered_label: Option<String>,
        }
        impl Visitor for Tally {
            fn volume_label(&mut self, label_bytes: &[u8; 11]) -> ControlFlow<()> {
                if self.recovered_label.is_none() {
                    self.recovered_label = Some(trim_label(label_bytes));
                }
                ControlFlow::Continue(())
            }

            fn file(&mut self, _record: &FileRecord) -> ControlFlow<()> {
                self.file_count += 1;
                ControlFlow::Continue(())
            }
        }

        let mut tally = Tally {
            file_count: 0,
            recovered_label: None,
        };
        walker::walk_root(reader, &mut tally)?;

        let label = match &geometry.label {
            Some(raw) => raw.trimmed(),
            None => tally.recovered_label.unwrap_or_default(),
        };

        tracing::info!(
            file_count = tally.file_count,
            free_clusters,
            "built volume summary"
        );

        Ok(Self {
            os_name: geometry.os_name.trimmed(),
            label,
            total_bytes: geometry.total_sectors as u64 * layout::SECTOR_SIZE_BYTES,
            free_bytes: free_clusters as u64 * layout::SECTOR_SIZE_BYTES,
            file_count: tally.file_count,
            sectors_per_fat: geometry.sectors_per_fat,
            num_fat_copies: geometry.num_fat_copies,
        })
    }

    /// Render the `"<label>: <value>"` lines in a fixed field order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "OS Name: {}", self.os_name);
        let _ = writeln!(out, "Label of the disk: {}", self.label);
        let _ = writeln!(out, "Total size of the disk: {}", self.total_bytes);
        let _ = writeln!(out, "Free size of the disk: {}", self.free_bytes);
        let _ = writeln!(out, "Number of files in the disk: {}", self.file_count);
        let _ = writeln!(
            out,
            "Number of sectors per FAT: {}",
            self.sectors_per_fat
        );
        let _ = writeln!(out, "Number of FAT copies: {}", self.num_fat_copies);
        out
    }
}

fn trim_label(bytes: &[u8; 11]) -> String {
    let end = bytes
        .iter()
        .rposition(|&b| b != b' ')
        .map(|idx| idx + 1)
        .unwrap_or(0);
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Render the full pre-order file listing report
pub fn render_listing(reader: &mut ImageReader) -> Result<String> {
    struct Printer {
        out: String,
    }

    impl Visitor for Printer {
        fn enter_directory(&mut self, name: &str) -> ControlFlow<()> {
            let _ = writeln!(self.out, "{name}");
            let _ = writeln!(self.out, "{}", "-".repeat(50));
            ControlFlow::Continue(())
        }

        fn file(&mut self, record: &FileRecord) -> ControlFlow<()> {
            let created = &record.created;
            let _ = writeln!(
                self.out,
                "F  {:<10}  {:<12}  {:04}-{:02}-{:02} {:02}:{:02}",
                record.size,
                record.display_name(),
                created.year,
                created.month,
                created.day,
                created.hour,
                created.minute
            );
            ControlFlow::Continue(())
        }
    }

    let mut printer = Printer { out: String::new() };
    walker::walk_root(reader, &mut printer)?;
    Ok(printer.out)
}
