// src/cli/parser.rs
use clap::Parser;

/// mbrgen - GPT protective MBR generator
#[derive(Parser)]
#[command(
    name = "mbrgen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Writes a GPT protective MBR sector to a disk image",
    long_about = r#"
mbrgen
======

Writes the legacy-compatible protective Master Boot Record that precedes a
GPT partition table. A plain invocation produces out.img, a 512-byte sector:

• 440 zero bytes of boot code
• zero disk signature
• one protective partition record (type 0xEE, starting at LBA 1)
• 0xAA55 boot signature
"#
)]
pub struct Cli {
    /// Hex dump the generated sector
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn parse() -> Self {
        Parser::parse()
    }
}
