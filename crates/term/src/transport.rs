//! Byte sinks for the serial line.

use std::io::{self, BufWriter, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// One-byte-at-a-time output towards the remote terminal.
///
/// Transmission is blocking and unacknowledged; failures are not reported at
/// this layer.
pub trait Transport: Send {
    fn transmit(&mut self, byte: u8);

    fn transmit_all(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.transmit(b);
        }
    }

    /// Push any buffered bytes onto the line.
    fn flush(&mut self) {}
}

impl Transport for Vec<u8> {
    fn transmit(&mut self, byte: u8) {
        self.push(byte);
    }

    fn transmit_all(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transmit(&mut self, byte: u8) {
        (**self).transmit(byte);
    }

    fn transmit_all(&mut self, bytes: &[u8]) {
        (**self).transmit_all(bytes);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}

/// Adapts any `io::Write` (stdout, an opened serial device) into a [`Transport`].
///
/// Write errors are logged once and otherwise ignored.
pub struct WriterTransport<W: Write> {
    writer: BufWriter<W>,
    reported: bool,
}

impl<W: Write> WriterTransport<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            reported: false,
        }
    }

    fn report(&mut self, err: io::Error) {
        if !self.reported {
            self.reported = true;
            log::warn!("serial transport write failed: {}", err);
        }
    }
}

impl<W: Write + Send> Transport for WriterTransport<W> {
    fn transmit(&mut self, byte: u8) {
        if let Err(e) = self.writer.write_all(&[byte]) {
            self.report(e);
        }
    }

    fn transmit_all(&mut self, bytes: &[u8]) {
        if let Err(e) = self.writer.write_all(bytes) {
            self.report(e);
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.writer.flush() {
            self.report(e);
        }
    }
}

/// In-memory line whose contents can be inspected from another handle.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CaptureTransport {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything transmitted so far.
    pub fn snapshot(&self) -> Vec<u8> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.bytes.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Transport for CaptureTransport {
    fn transmit(&mut self, byte: u8) {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(byte);
    }
}
