//! stdin reader for raw terminal input.
//!
//! Reads raw bytes on a dedicated thread, decodes them and pushes the
//! events into the scheduler's queue.
//!
//! The thread waits for stdin with a timeout and checks its `running` flag
//! between waits. [`StdinReader::stop`] clears the flag and joins the
//! thread, so once it returns no byte typed afterwards is consumed.

use std::io::{self, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::parser::InputDecoder;
use super::InputSink;
use crate::error::Error;

/// How long one wait for input lasts before `running` is checked again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A byte source that can wait for input.
pub(crate) trait Source: Read {
    /// Wait up to `timeout` for bytes. Returns false if none arrived.
    fn ready(&mut self, timeout: Duration) -> io::Result<bool>;
}

struct Stdin(io::StdinLock<'static>);

impl Read for Stdin {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

#[cfg(unix)]
impl Source for Stdin {
    fn ready(&mut self, timeout: Duration) -> io::Result<bool> {
        use std::os::fd::AsRawFd;

        let mut fd = libc::pollfd {
            fd: self.0.as_raw_fd(),
            events: libc::POLLIN,
            revents: 0,
        };
        let ms = timeout.as_millis().min(libc::c_int::MAX as u128) as libc::c_int;
        // SAFETY: one valid pollfd, and the count says one
        let rc = unsafe { libc::poll(&mut fd, 1, ms) };
        if rc < 0 {
            return Err(io::Error::last_os_error());
        }
        // POLLHUP and POLLERR count as ready: read() reports them
        Ok(rc > 0)
    }
}

#[cfg(not(unix))]
impl Source for Stdin {
    fn ready(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(true)
    }
}

/// Dedicated stdin reader thread.
pub struct StdinReader {
    handle: Option<JoinHandle<()>>,
    running: Arc<AtomicBool>,
}

impl StdinReader {
    /// Spawn the stdin reader thread.
    pub fn spawn(sink: Box<dyn InputSink>, flush_lone_escape: bool) -> io::Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        let handle = thread::Builder::new()
            .name("spark-stdin".to_string())
            .spawn(move || {
                let input = Stdin(io::stdin().lock());
                pump(input, sink.as_ref(), flush_lone_escape, &running_clone);
                running_clone.store(false, Ordering::SeqCst);
            })?;

        Ok(Self {
            handle: Some(handle),
            running,
        })
    }

    /// Stop the reader thread and wait for it to finish.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        let Some(handle) = self.handle.take() else {
            return;
        };

        // Without a timed wait the thread can sit in read() forever
        if cfg!(unix) {
            if handle.join().is_err() {
                log::warn!("stdin reader panicked");
            }
            log::debug!("stdin reader stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Drop for StdinReader {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Read from `input` until EOF, an error, or `running` goes false.
///
/// `running` is checked after every wait, before any byte is read, so
/// input that arrives after the flag is cleared stays unread.
pub(crate) fn pump<S: Source>(
    mut input: S,
    sink: &dyn InputSink,
    flush_lone_escape: bool,
    running: &AtomicBool,
) {
    let mut decoder = InputDecoder::new();
    let mut buf = [0u8; 256];

    while running.load(Ordering::SeqCst) {
        match input.ready(POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                sink.fail(Error::Io(e));
                break;
            }
        }
        if !running.load(Ordering::SeqCst) {
            break;
        }

        match input.read(&mut buf) {
            Ok(0) => {
                sink.fail(Error::InputClosed);
                break;
            }
            Ok(n) => {
                let mut events = decoder.decode(&buf[..n]);
                if flush_lone_escape {
                    events.extend(decoder.flush_lone_escape());
                }
                for event in events {
                    if !sink.push(event) {
                        return; // Nobody is listening any more
                    }
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                sink.fail(Error::Io(e));
                break;
            }
        }
    }
}
