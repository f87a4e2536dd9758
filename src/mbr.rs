// src/mbr.rs
//! Protective MBR sector layout and serialization

// ========== SECTOR LAYOUT ==========

pub const SECTOR_SIZE: usize = 512;
pub const BOOT_CODE_SIZE: usize = 440;
pub const PARTITION_RECORD_SIZE: usize = 16;
pub const PARTITION_RECORD_COUNT: usize = 4;

pub const DISK_SIGNATURE_OFFSET: usize = 440;
pub const UNKNOWN_OFFSET: usize = 444;
pub const PARTITION_RECORDS_OFFSET: usize = 446;
pub const SIGNATURE_OFFSET: usize = 510;

/// Boot signature, stored little-endian so the sector ends in 0x55 0xAA
pub const BOOT_SIGNATURE: u16 = 0xAA55;

/// Partition type byte marking the whole disk as GPT territory
pub const OS_TYPE_GPT_PROTECTIVE: u8 = 0xEE;

// TODO: derive from the real image size, min(disk_sectors - 1, u32::MAX)
pub const PLACEHOLDER_SIZE_IN_LBA: u32 = 0xDEAD;

// ========== PARTITION RECORD ==========

/// One 16-byte legacy partition table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionRecord {
    pub boot_indicator: u8,
    pub starting_chs: [u8; 3],
    pub os_type: u8,
    pub ending_chs: [u8; 3],
    pub starting_lba: u32,
    pub size_in_lba: u32,
}

impl PartitionRecord {
    pub const fn zeroed() -> Self {
        Self {
            boot_indicator: 0,
            starting_chs: [0, 0, 0],
            os_type: 0,
            ending_chs: [0, 0, 0],
            starting_lba: 0,
            size_in_lba: 0,
        }
    }

    /// The protective entry: type 0xEE starting at LBA 1, with the ending
    /// CHS pegged at the "overflow, use LBA" marker
    pub const fn protective() -> Self {
        Self {
            boot_indicator: 0x00,
            starting_chs: [0x00, 0x02, 0x00],
            os_type: OS_TYPE_GPT_PROTECTIVE,
            ending_chs: [0xFF, 0xFF, 0xFF],
            starting_lba: 1,
            size_in_lba: PLACEHOLDER_SIZE_IN_LBA,
        }
    }

    /// Write the 16 record bytes into `out`, integers little-endian
    pub fn dump(&self, out: &mut [u8]) {
        out[0] = self.boot_indicator;
        out[1..4].copy_from_slice(&self.starting_chs);
        out[4] = self.os_type;
        out[5..8].copy_from_slice(&self.ending_chs);
        out[8..12].copy_from_slice(&self.starting_lba.to_le_bytes());
        out[12..16].copy_from_slice(&self.size_in_lba.to_le_bytes());
    }

    pub fn parse(buffer: &[u8]) -> Self {
        Self {
            boot_indicator: buffer[0],
            starting_chs: [buffer[1], buffer[2], buffer[3]],
            os_type: buffer[4],
            ending_chs: [buffer[5], buffer[6], buffer[7]],
            starting_lba: u32::from_le_bytes([buffer[8], buffer[9], buffer[10], buffer[11]]),
            size_in_lba: u32::from_le_bytes([buffer[12], buffer[13], buffer[14], buffer[15]]),
        }
    }
}

// ========== FULL SECTOR ==========

/// The complete 512-byte boot sector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mbr {
    pub boot_code: [u8; BOOT_CODE_SIZE],
    pub disk_signature: u32,
    pub unknown: u16,
    pub partition_records: [PartitionRecord; PARTITION_RECORD_COUNT],
    pub signature: u16,
}

impl Mbr {
    /// Canonical protective sector: slot 0 holds the protective record,
    /// everything else is zero
    pub const fn protective() -> Self {
        Self {
            boot_code: [0; BOOT_CODE_SIZE],
            disk_signature: 0,
            unknown: 0,
            partition_records: [
                PartitionRecord::protective(),
                PartitionRecord::zeroed(),
                PartitionRecord::zeroed(),
                PartitionRecord::zeroed(),
            ],
            signature: BOOT_SIGNATURE,
        }
    }

    /// Serialize to the exact on-disk layout, each field at its documented
    /// offset
    pub fn encode(&self) -> [u8; SECTOR_SIZE] {
        let mut sector = [0u8; SECTOR_SIZE];

        sector[..BOOT_CODE_SIZE].copy_from_slice(&self.boot_code);
        sector[DISK_SIGNATURE_OFFSET..UNKNOWN_OFFSET]
            .copy_from_slice(&self.disk_signature.to_le_bytes());
        sector[UNKNOWN_OFFSET..PARTITION_RECORDS_OFFSET]
            .copy_from_slice(&self.unknown.to_le_bytes());

        for (i, record) in self.partition_records.iter().enumerate() {
            let offset = PARTITION_RECORDS_OFFSET + i * PARTITION_RECORD_SIZE;
            record.dump(&mut sector[offset..offset + PARTITION_RECORD_SIZE]);
        }

        sector[SIGNATURE_OFFSET..].copy_from_slice(&self.signature.to_le_bytes());
        sector
    }

    /// Decode a sector by the inverse layout
    pub fn parse(sector: &[u8]) -> Result<Self, String> {
        if sector.len() < SECTOR_SIZE {
            return Err(format!(
                "Sector too short: {} of {} bytes",
                sector.len(),
                SECTOR_SIZE
            ));
        }

        let mut boot_code = [0u8; BOOT_CODE_SIZE];
        boot_code.copy_from_slice(&sector[..BOOT_CODE_SIZE]);

        let disk_signature = u32::from_le_bytes([
            sector[440], sector[441], sector[442], sector[443],
        ]);
        let unknown = u16::from_le_bytes([sector[444], sector[445]]);

        let mut partition_records = [PartitionRecord::zeroed(); PARTITION_RECORD_COUNT];
        for (i, record) in partition_records.iter_mut().enumerate() {
            let offset = PARTITION_RECORDS_OFFSET + i * PARTITION_RECORD_SIZE;
            *record = PartitionRecord::parse(&sector[offset..offset + PARTITION_RECORD_SIZE]);
        }

        let signature = u16::from_le_bytes([sector[510], sector[511]]);

        Ok(Self {
            boot_code,
            disk_signature,
            unknown,
            partition_records,
            signature,
        })
    }
}

// ========== PUBLIC API FUNCTIONS ==========

/// Build the canonical 512-byte protective MBR sector
pub fn encode_protective_mbr() -> [u8; SECTOR_SIZE] {
    Mbr::protective().encode()
}

// ========== TESTS ==========
