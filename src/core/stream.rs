//! Stream helpers: rewind-and-read, the null device and descriptor redirection.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek};

use crate::error::{Error, Result};

#[cfg(unix)]
const NULL_DEVICE: &str = "/dev/null";
#[cfg(windows)]
const NULL_DEVICE: &str = "NUL";

fn stream_error(err: io::Error, operation: &str) -> Error {
    Error::internal_io(err.to_string(), Some(operation.to_string()))
}

/// Rewind, then read.
pub trait RereadExt: Read + Seek {
    /// Up to `length` bytes from the start, or everything when `None`.
    fn reread(&mut self, length: Option<usize>) -> Result<Vec<u8>> {
        self.rewind().map_err(|e| stream_error(e, "rewind"))?;

        let mut buffer = Vec::new();
        let read = match length {
            Some(length) => Read::take(&mut *self, length as u64).read_to_end(&mut buffer),
            None => self.read_to_end(&mut buffer),
        };
        read.map_err(|e| stream_error(e, "reread"))?;

        Ok(buffer)
    }

    fn reread_string(&mut self) -> Result<String> {
        self.rewind().map_err(|e| stream_error(e, "rewind"))?;

        let mut content = String::new();
        self.read_to_string(&mut content)
            .map_err(|e| stream_error(e, "reread"))?;

        Ok(content)
    }
}

impl<T: Read + Seek + ?Sized> RereadExt for T {}

/// Read/write handle on the null device.
pub fn void() -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(NULL_DEVICE)
        .map_err(|e| stream_error(e, "open null device"))
}

#[cfg(unix)]
pub use redirection::{redirect, squelch};

#[cfg(unix)]
mod redirection {
    use std::io::{self, Write};
    use std::os::fd::{AsRawFd, RawFd};

    use super::{stream_error, void};
    use crate::error::Result;

    /// Restores a descriptor from its saved copy when dropped.
    struct Restore {
        fd: RawFd,
        backup: RawFd,
    }

    impl Drop for Restore {
        fn drop(&mut self) {
            unsafe {
                libc::dup2(self.backup, self.fd);
                libc::close(self.backup);
            }
        }
    }

    /// Point `stream` at `target` while `f` runs, then restore it.
    ///
    /// The stream is flushed on both sides of the switch so buffered output lands
    /// where it was written.
    pub fn redirect<S, T, R, F>(stream: &mut S, target: &T, f: F) -> Result<R>
    where
        S: AsRawFd + Write,
        T: AsRawFd,
        F: FnOnce() -> R,
    {
        stream.flush().map_err(|e| stream_error(e, "flush"))?;

        let fd = stream.as_raw_fd();
        let backup = unsafe { libc::dup(fd) };
        if backup == -1 {
            return Err(stream_error(io::Error::last_os_error(), "duplicate descriptor"));
        }

        let status = unsafe { libc::dup2(target.as_raw_fd(), fd) };
        if status == -1 {
            let err = io::Error::last_os_error();
            unsafe { libc::close(backup) };
            return Err(stream_error(err, "redirect descriptor"));
        }

        let restore = Restore { fd, backup };
        let result = f();
        stream.flush().map_err(|e| stream_error(e, "flush"))?;
        drop(restore);

        Ok(result)
    }

    /// Silence `stream` while `f` runs.
    pub fn squelch<S, R, F>(stream: &mut S, f: F) -> Result<R>
    where
        S: AsRawFd + Write,
        F: FnOnce() -> R,
    {
        let null = void()?;
        redirect(stream, &null, f)
    }
}
