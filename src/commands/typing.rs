//! The typing session command

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use gadget_typist::{Gadget, Timing, Typist, TypistError};

pub fn run(
    device: &Path,
    file: &Path,
    press_ms: u64,
    settle_ms: u64,
    write_timeout_ms: u64,
    quiet: bool,
) -> Result<()> {
    let content = super::read_payload(file)?;
    let char_count = content.chars().count() as u64;

    let timing = Timing {
        press_hold: Duration::from_millis(press_ms),
        release_settle: Duration::from_millis(settle_ms),
    };

    let mut gadget = Gadget::open(device)
        .with_context(|| format!("Failed to open gadget device {}", device.display()))?;
    gadget.set_write_timeout(match write_timeout_ms {
        0 => None,
        ms => Some(Duration::from_millis(ms)),
    });

    let mut typist = Typist::new(gadget, timing)?;

    // Ctrl+C finishes the in-flight keystroke, then stops cleanly
    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = Arc::clone(&cancel);
        ctrlc::set_handler(move || cancel.store(true, Ordering::Relaxed))
            .context("Failed to install Ctrl+C handler")?;
    }
    typist.set_cancel_flag(Arc::clone(&cancel));

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(char_count)
    };
    pb.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} chars ({eta})",
        )?
        .progress_chars("##-"),
    );

    info!(file = %file.display(), chars = char_count, device = %device.display(), "typing payload");

    match typist.type_str_with(&content, |_| pb.inc(1)) {
        Ok(typed) => {
            pb.finish();
            info!(typed, "payload delivered");
            Ok(())
        }
        Err(e @ TypistError::Cancelled { .. }) => {
            pb.abandon();
            Err(anyhow::Error::new(e))
        }
        Err(e) => {
            pb.abandon();
            Err(anyhow::Error::new(e)).context("Typing aborted")
        }
    }
}
