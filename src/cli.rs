// CLI definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gadget-typist")]
#[command(author, version, about = "Types text through a USB HID keyboard gadget")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Gadget endpoint device node
    #[arg(
        long,
        global = true,
        env = "HID_DEVICE",
        default_value = gadget_typist::DEFAULT_DEVICE
    )]
    pub device: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Type a text file to the host through the gadget
    #[command(visible_alias = "t")]
    Type {
        /// Text file to type
        file: PathBuf,

        /// Key-down hold time in milliseconds
        #[arg(long, default_value_t = 10)]
        press_ms: u64,

        /// Settle time after release in milliseconds (must exceed the hold time)
        #[arg(long, default_value_t = 20)]
        settle_ms: u64,

        /// Per-report write timeout in milliseconds, 0 to block forever
        #[arg(long, default_value_t = 1000)]
        write_timeout_ms: u64,

        /// Suppress the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Verify a file only contains typeable characters
    #[command(visible_aliases = ["dry", "c"])]
    Check {
        /// Text file to verify
        file: PathBuf,
    },

    /// List every supported character with its keycode and modifier
    #[command(visible_alias = "k")]
    Keys,
}
