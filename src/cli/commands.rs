// src/cli/commands.rs
use std::fs;

use colored::*;

use crate::image::{self, OUTPUT_PATH};
use crate::mbr::Mbr;
use crate::utils;

/// Write the protective MBR to the fixed output path
pub fn write_image(verbose: bool, quiet: bool) -> Result<(), String> {
    let mbr = Mbr::protective();

    if quiet {
        return image::write_mbr(OUTPUT_PATH, &mbr);
    }

    println!();
    println!("{}", "╔══════════════════════════════════════════╗".cyan());
    println!("{}", "║      WRITING PROTECTIVE MBR SECTOR      ║".cyan().bold());
    println!("{}", "╚══════════════════════════════════════════╝".cyan());
    println!();

    println!("{}", "Building sector...".blue());
    println!("  {} Encoding partition record...", "→".cyan());

    let sector = mbr.encode();

    println!("  {} Writing to disk...", "→".cyan());

    image::write_mbr(OUTPUT_PATH, &mbr)?;

    println!("  {} Done", "✓".green());

    println!();
    println!("{}", "┌────────────────────────────────────────────┐".green());
    println!("{}", "│               SECTOR WRITTEN               │".green().bold());
    println!("{}", "├────────────────────────────────────────────┤".green());
    println!("│ {:<12} {:30} │", "File:".blue(), OUTPUT_PATH.white());

    if let Ok(metadata) = fs::metadata(OUTPUT_PATH) {
        println!("│ {:<12} {:30} │", "Size:".blue(),
            format!("{} bytes", metadata.len()).green());
    }

    println!("│ {:<12} {:30} │", "Type:".blue(),
        "GPT protective (0xEE)".white());
    println!("│ {:<12} {:30} │", "Signature:".blue(),
        format!("0x{:02X}{:02X}", sector[510], sector[511]).yellow());
    println!("{}", "└────────────────────────────────────────────┘".green());
    println!();

    if verbose {
        println!("{}", "Sector contents:".blue());
        utils::hex_dump(&sector);
        println!();
    }

    Ok(())
}
