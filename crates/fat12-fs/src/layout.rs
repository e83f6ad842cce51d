//! Fixed on-disk layout of a FAT12 volume.
//!
//! Every offset and length the decoder needs lives in one place here, so
//! the rest of the crate is parameterized by layout instead of coupled to
//! scattered magic numbers.

/// Bytes per sector (fixed for the classic 1.44 MiB floppy layout)
pub const SECTOR_SIZE_BYTES: u64 = 512;

/// Directory entries per sector (512 / 32)
pub const SECTOR_SIZE_ENTRIES: usize = 16;

/// Size in bytes of one directory entry
pub const DIR_ENTRY_SIZE: usize = 32;

/// First sector of the root directory region
pub const ROOT_DIR_START_SECTOR: u64 = 19;

/// Last sector of the root directory region (inclusive)
pub const ROOT_DIR_END_SECTOR: u64 = 32;

/// First sector of the (only) FAT copy this decoder reads
pub const FAT_START_SECTOR: u64 = 1;

/// First data-region sector, corresponding to cluster 2
pub const DATA_REGION_START_SECTOR: u64 = 33;

/// First cluster number backed by the data region
pub const FIRST_DATA_CLUSTER: u32 = 2;

/// Boot-sector offset and length of the OEM/OS name field
pub const OS_NAME_START_BYTE: usize = 3;
pub const OS_NAME_LENGTH_BYTES: usize = 8;

/// Boot-sector offset and length of the volume label field
pub const LABEL_START_BYTE: usize = 43;
pub const LABEL_LENGTH_BYTES: usize = 11;

/// Boot-sector offset of the number-of-FAT-copies byte
pub const NUM_FAT_COPIES_START_BYTE: usize = 16;

/// Boot-sector offset and length of the total-sector-count field
pub const TOTAL_SECTOR_COUNT_START_BYTE: usize = 19;
pub const TOTAL_SECTOR_COUNT_LENGTH_BYTES: usize = 2;

/// Boot-sector offset and length of the sectors-per-FAT field
pub const SECTORS_PER_FAT_START_BYTE: usize = 22;
pub const SECTORS_PER_FAT_LENGTH_BYTES: usize = 2;

/// Directory-entry offset of the attribute byte
pub const DIR_ENTRY_ATTRIBUTE_BYTE: usize = 11;

/// Directory-entry offset and length of the filename field
pub const FILENAME_START_BYTE: usize = 0;
pub const FILENAME_LENGTH_BYTES: usize = 8;

/// Directory-entry offset and length of the extension field
pub const EXTENSION_START_BYTE: usize = 8;
pub const EXTENSION_LENGTH_BYTES: usize = 3;

/// Directory-entry offset and length of the creation time field
pub const FILE_CREATE_TIME_START_BYTE: usize = 14;
pub const FILE_CREATE_TIME_LENGTH_BYTES: usize = 2;

/// Directory-entry offset and length of the creation date field
pub const FILE_CREATE_DATE_START_BYTE: usize = 16;
pub const FILE_CREATE_DATE_LENGTH_BYTES: usize = 2;

/// Directory-entry offset and length of the first-logical-cluster field
pub const FIRST_LOGICAL_CLUSTER_START_BYTE: usize = 26;
pub const FIRST_LOGICAL_CLUSTER_LENGTH_BYTES: usize = 2;

/// Directory-entry offset and length of the file-size field
pub const FILE_SIZE_START_BYTE: usize = 28;
pub const FILE_SIZE_LENGTH_BYTES: usize = 4;

/// Attribute bitmask: volume label
pub const ATTRIBUTE_VOLUME_LABEL_BIT_MASK: u8 = 0x08;
/// Attribute bitmask: subdirectory
pub const ATTRIBUTE_SUBDIRECTORY_BIT_MASK: u8 = 0x10;
/// Attribute value (exact match, not a bitmask): long-filename fragment
pub const ATTRIBUTE_LONG_NAME: u8 = 0x0F;

/// Marker byte for "rest of directory is unused"
pub const DIR_ENTRY_END_MARKER: u8 = 0x00;
/// Marker byte for "this slot is free"
pub const DIR_ENTRY_FREE_MARKER: u8 = 0xE5;

/// Number of entries held by the fixed-size root directory (14 sectors * 16)
pub const ROOT_DIR_ENTRY_COUNT: usize =
    (ROOT_DIR_END_SECTOR - ROOT_DIR_START_SECTOR + 1) as usize * SECTOR_SIZE_ENTRIES;

/// Maximum directory-tree recursion depth before bailing with `DirectoryTooDeep`
pub const MAX_DIRECTORY_DEPTH: usize = 64;

/// Translate a first-logical-cluster number to its data-region sector
pub fn cluster_to_sector(first_logical_cluster: u32) -> u64 {
    DATA_REGION_START_SECTOR + first_logical_cluster as u64 - FIRST_DATA_CLUSTER as u64
}

/// Number of sectors needed to hold `size` bytes, rounded up
pub fn sectors_for_size(size: u32) -> u64 {
    (size as u64).div_ceil(SECTOR_SIZE_BYTES)
}
