//! USB HID gadget endpoint sink.
//!
//! Opens the gadget character device write-only and unbuffered so every
//! 8-byte report reaches the driver as a single write. The fd is opened
//! non-blocking and each write polls for writability first: a host that
//! stopped reading the endpoint surfaces as a timed-out write instead of a
//! process stuck in the kernel forever.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::fd::AsFd;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use tracing::debug;

/// Default gadget endpoint node
pub const DEFAULT_DEVICE: &str = "/dev/hidg0";

/// Write-only handle on a keyboard gadget endpoint
#[derive(Debug)]
pub struct Gadget {
    file: File,
    path: PathBuf,
    write_timeout: Option<Duration>,
}

impl Gadget {
    /// Open the endpoint node. Fails up front on a missing node or missing
    /// permissions, before any report is framed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .write(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)?;
        debug!(path = %path.display(), "opened gadget endpoint");
        Ok(Gadget {
            file,
            path: path.to_path_buf(),
            write_timeout: Some(Duration::from_secs(1)),
        })
    }

    /// Bound how long a report write may wait for the host.
    /// `None` blocks until the host reads, the kernel default.
    pub fn set_write_timeout(&mut self, timeout: Option<Duration>) {
        self.write_timeout = timeout;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn wait_writable(&self) -> io::Result<()> {
        let timeout = match self.write_timeout {
            // Clamped to u16::MAX ms
            Some(t) => PollTimeout::from(u16::try_from(t.as_millis()).unwrap_or(u16::MAX)),
            None => PollTimeout::NONE,
        };
        let mut fds = [PollFd::new(self.file.as_fd(), PollFlags::POLLOUT)];
        let ready = poll(&mut fds, timeout).map_err(io::Error::from)?;
        if ready == 0 {
            return Err(io::Error::new(
                io::ErrorKind::TimedOut,
                "gadget endpoint not accepting reports",
            ));
        }
        Ok(())
    }
}

impl Write for Gadget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        loop {
            self.wait_writable()?;
            match self.file.write(buf) {
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => continue,
                result => return result,
            }
        }
    }

    /// Unbuffered; nothing to flush
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
