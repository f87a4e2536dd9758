pub mod cli;
pub mod image;
pub mod mbr;
pub mod utils;

pub use image::{write_protective_mbr, OUTPUT_PATH};
pub use mbr::{encode_protective_mbr, Mbr, PartitionRecord};
