//! Shared helper for building a synthetic 1.44 MiB FAT12 image in memory.

use fat12_fs::layout;

pub const IMAGE_SIZE: usize = 1_474_560;

pub struct ImageBuilder {
    pub bytes: Vec<u8>,
}

impl ImageBuilder {
    pub fn floppy() -> Self {
        let mut bytes = vec![0u8; IMAGE_SIZE];
        bytes[3..11].copy_from_slice(b"MSDOS5.0");
        bytes[16] = 2;
        bytes[19..21].copy_from_slice(&2880u16.to_le_bytes());
        bytes[22..24].copy_from_slice(&9u16.to_le_bytes());
        bytes[43..54].fill(b' ');
        Self { bytes }
    }

    pub fn with_label(mut self, label: &[u8; 11]) -> Self {
        self.bytes[43..54].copy_from_slice(label);
        self
    }

    fn write_entry(&mut self, byte_offset: u64, entry: &[u8; layout::DIR_ENTRY_SIZE]) {
        let start = byte_offset as usize;
        self.bytes[start..start + layout::DIR_ENTRY_SIZE].copy_from_slice(entry);
    }

    pub fn root_entry(mut self, index: usize, entry: &[u8; layout::DIR_ENTRY_SIZE]) -> Self {
        let offset =
            layout::ROOT_DIR_START_SECTOR * layout::SECTOR_SIZE_BYTES
                + (index * layout::DIR_ENTRY_SIZE) as u64;
        self.write_entry(offset, entry);
        self
    }

    pub fn entry_at_cluster(
        mut self,
        cluster: u32,
        index: usize,
        entry: &[u8; layout::DIR_ENTRY_SIZE],
    ) -> Self {
        let sector = layout::cluster_to_sector(cluster);
        let offset =
            sector * layout::SECTOR_SIZE_BYTES + (index * layout::DIR_ENTRY_SIZE) as u64;
        self.write_entry(offset, entry);
        self
    }
}

pub fn file_entry(name: &[u8; 11], first_cluster: u16, size: u32) -> [u8; layout::DIR_ENTRY_SIZE] {
    let mut bytes = [0u8; layout::DIR_ENTRY_SIZE];
    bytes[0..11].copy_from_slice(name);
    bytes[26..28].copy_from_slice(&first_cluster.to_le_bytes());
    bytes[28..32].copy_from_slice(&size.to_le_bytes());
    bytes
}

pub fn dir_entry(name: &[u8; 11], first_cluster: u16, size: u32) -> [u8; layout::DIR_ENTRY_SIZE] {
    let mut bytes = file_entry(name, first_cluster, size);
    bytes[11] = 0x10;
    bytes
}
