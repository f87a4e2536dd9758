// src/image.rs
//! Writes the protective MBR sector to a target image file

use std::fs::File;
use std::io::Write;

use crate::mbr::{Mbr, SECTOR_SIZE};

/// Fixed output path for a plain invocation
pub const OUTPUT_PATH: &str = "out.img";

/// Write the sector through any writer in a single operation.
/// Anything other than a full 512-byte transfer is a failure.
pub fn write_mbr_into<W: Write>(writer: &mut W, mbr: &Mbr) -> Result<(), String> {
    let sector = mbr.encode();

    let written = writer
        .write(&sector)
        .map_err(|e| format!("Write failed: {}", e))?;
    if written != SECTOR_SIZE {
        return Err(format!(
            "Short write: wrote {} of {} bytes",
            written, SECTOR_SIZE
        ));
    }

    writer
        .flush()
        .map_err(|e| format!("Write failed: {}", e))?;

    Ok(())
}

/// Create or truncate `path` and write `mbr` as its first sector
pub fn write_mbr(path: &str, mbr: &Mbr) -> Result<(), String> {
    let mut file =
        File::create(path).map_err(|e| format!("Failed to open {}: {}", path, e))?;

    write_mbr_into(&mut file, mbr).map_err(|e| format!("Failed to write {}: {}", path, e))
}

// ========== PUBLIC API FUNCTIONS ==========

/// Write the canonical protective MBR to `path`
pub fn write_protective_mbr(path: &str) -> Result<(), String> {
    write_mbr(path, &Mbr::protective())
}

// ========== TESTS ==========

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mbr::encode_protective_mbr;

    /// Writer that accepts fewer bytes than offered
    struct TruncatingSink(usize);

    impl Write for TruncatingSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len().min(self.0))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_into_buffer() {
        let mut sink = Vec::new();
        write_mbr_into(&mut sink, &Mbr::protective()).unwrap();

        assert_eq!(sink.len(), 512);
        assert_eq!(&sink[..], &encode_protective_mbr()[..]);
    }

    #[test]
    fn test_short_write_is_an_error() {
        let mut sink = TruncatingSink(10);
        let err = write_mbr_into(&mut sink, &Mbr::protective()).unwrap_err();

        assert!(err.contains("wrote 10 of 512 bytes"));
    }
}
