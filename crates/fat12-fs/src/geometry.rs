//! Boot-sector decoder

use crate::layout;
use fat12_core::Result;
use fat12_pipeline::ImageReader;

/// Raw OS name / volume label field, as read from the boot sector: a
/// fixed-width, space-padded ASCII array. Trimming is a presentation
/// concern, not the decoder's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawField<const N: usize>(pub [u8; N]);

impl<const N: usize> RawField<N> {
    /// Trim trailing spaces, returning a lossy UTF-8 rendering for display
    pub fn trimmed(&self) -> String {
        let end = self
            .0
            .iter()
            .rposition(|&b| b != b' ')
            .map(|idx| idx + 1)
            .unwrap_or(0);
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }

    /// True if every byte is a space (0x20) or zero — the boot sector's two
    /// observed ways of saying "this field is absent"
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&b| b == b' ' || b == 0x00)
    }
}

/// Geometry and identity fields decoded from sector 0
#[derive(Debug, Clone)]
pub struct Geometry {
    /// OEM / OS name, as stored (space-padded)
    pub os_name: RawField<{ layout::OS_NAME_LENGTH_BYTES }>,
    /// Volume label as stored in the boot sector, if the field carries one
    pub label: Option<RawField<{ layout::LABEL_LENGTH_BYTES }>>,
    /// Total number of sectors in the volume
    pub total_sectors: u16,
    /// Number of sectors occupied by one copy of the FAT
    pub sectors_per_fat: u16,
    /// Number of FAT copies carried on the volume
    pub num_fat_copies: u8,
}

impl Geometry {
    /// Read geometry fields from the boot sector (sector 0) of `reader`
    pub fn read(reader: &mut ImageReader) -> Result<Self> {
        let boot = reader.read_sector(0)?;

        let os_name = RawField(read_array::<{ layout::OS_NAME_LENGTH_BYTES }>(
            &boot,
            layout::OS_NAME_START_BYTE,
        ));

        let label_bytes = RawField(read_array::<{ layout::LABEL_LENGTH_BYTES }>(
            &boot,
            layout::LABEL_START_BYTE,
        ));
        let label = if label_bytes.is_blank() {
            None
        } else {
            Some(label_bytes)
        };

        let total_sectors = le16(&boot, layout::TOTAL_SECTOR_COUNT_START_BYTE);
        let sectors_per_fat = le16(&boot, layout::SECTORS_PER_FAT_START_BYTE);
        let num_fat_copies = boot[layout::NUM_FAT_COPIES_START_BYTE];

        tracing::debug!(
            total_sectors,
            sectors_per_fat,
            num_fat_copies,
            "decoded boot sector geometry"
        );

        Ok(Self {
            os_name,
            label,
            total_sectors,
            sectors_per_fat,
            num_fat_copies,
        })
    }
}

fn read_array<const N: usize>(sector: &[u8], start: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&sector[start..start + N]);
    out
}

fn le16(sector: &[u8], start: usize) -> u16 {
    u16::from_le_bytes([sector[start], sector[start + 1]])
}
