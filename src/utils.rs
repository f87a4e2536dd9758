// src/utils.rs
//! Small display helpers

/// Print a hex table of the buffer, 16 bytes per row
pub fn hex_dump(bytes: &[u8]) {
    for (row, chunk) in bytes.chunks(16).enumerate() {
        print!("{:04X}: ", row * 16);
        for byte in chunk {
            print!("{:02X} ", byte);
        }
        println!();
    }
}
