//! TerminalRenderer: encodes logical screen operations onto a transport.
//!
//! The renderer is stateless with respect to screen contents and synchronous:
//! every call has handed all of its bytes to the transport (and flushed it)
//! before returning. Callers sharing one renderer must serialize access, see
//! [`crate::RenderLock`].

use serial_pong_types::Region;

use crate::error::RenderError;
use crate::protocol::{self, NumberWidth, Sequence};
use crate::transport::Transport;

pub struct TerminalRenderer<T> {
    transport: T,
    region: Region,
}

impl<T: Transport> TerminalRenderer<T> {
    pub fn new(transport: T) -> Self {
        Self::with_region(transport, Region::SCREEN)
    }

    pub fn with_region(transport: T, region: Region) -> Self {
        Self { transport, region }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    pub fn clear(&mut self) {
        self.emit(&protocol::clear_screen());
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.emit(&protocol::cursor_visibility(visible));
    }

    /// Hide the cursor, clear, and hide it again (some terminals re-show it on reset).
    pub fn init_screen(&mut self) {
        let mut seq = Sequence::new();
        seq.extend(protocol::cursor_visibility(false));
        seq.extend(protocol::clear_screen());
        seq.extend(protocol::cursor_visibility(false));
        self.emit(&seq);
    }

    /// Position the cursor. No bounds check; each field keeps two digits.
    pub fn move_cursor(&mut self, col: u8, row: u8) {
        self.emit(&protocol::move_cursor(col, row));
    }

    /// Draw one content byte at (col, row).
    pub fn write_glyph(&mut self, col: i32, row: i32, glyph: u8) -> Result<(), RenderError> {
        let (c, r) = self.cell(col, row)?;
        let mut seq = protocol::move_cursor(c, r);
        seq.push(glyph);
        self.emit(&seq);
        Ok(())
    }

    /// Draw `value` as a two-digit, zero-padded field starting at (col, row).
    pub fn write_number(&mut self, col: i32, row: i32, value: u32) -> Result<(), RenderError> {
        self.write_field(col, row, value, NumberWidth::Two)
    }

    /// Three-digit variant of [`Self::write_number`].
    pub fn write_number3(&mut self, col: i32, row: i32, value: u32) -> Result<(), RenderError> {
        self.write_field(col, row, value, NumberWidth::Three)
    }

    /// Draw a line of text starting at (col, row), clipped at the right edge.
    ///
    /// Non-ASCII characters are sent as `?`.
    pub fn write_text(&mut self, col: i32, row: i32, text: &str) -> Result<(), RenderError> {
        let (c, r) = self.cell(col, row)?;
        let room = (self.region.x_max - col + 1) as usize;
        self.transport.transmit_all(&protocol::move_cursor(c, r));
        for ch in text.chars().take(room) {
            let byte = if ch.is_ascii() && !ch.is_ascii_control() {
                ch as u8
            } else {
                b'?'
            };
            self.transport.transmit(byte);
        }
        self.transport.flush();
        Ok(())
    }

    fn write_field(
        &mut self,
        col: i32,
        row: i32,
        value: u32,
        width: NumberWidth,
    ) -> Result<(), RenderError> {
        let (c, r) = self.cell(col, row)?;
        let mut seq = protocol::move_cursor(c, r);
        protocol::push_decimal(&mut seq, value, width);
        self.emit(&seq);
        Ok(())
    }

    fn cell(&self, col: i32, row: i32) -> Result<(u8, u8), RenderError> {
        if !self.region.contains(col, row) {
            return Err(RenderError::OutOfBounds { col, row });
        }
        Ok((col.rem_euclid(100) as u8, row.rem_euclid(100) as u8))
    }

    fn emit(&mut self, bytes: &[u8]) {
        self.transport.transmit_all(bytes);
        self.transport.flush();
    }
}
