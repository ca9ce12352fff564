//! VT100 control sequences.
//!
//! All encoders build into a fixed-capacity [`Sequence`] so the render path
//! never allocates.
//!
//! | Operation | Bytes |
//! |-----------|-------|
//! | Clear screen | `ESC c` |
//! | Hide cursor | `ESC [ ? 2 5 l` |
//! | Show cursor | `ESC [ ? 2 5 h` |
//! | Move cursor | `ESC [ rr ; cc H` (row first, two digits each) |

use arrayvec::ArrayVec;

pub const ESC: u8 = 0x1b;

/// Largest single operation is a cursor move followed by a three-digit field.
pub const MAX_SEQUENCE_LEN: usize = 16;

pub type Sequence = ArrayVec<u8, MAX_SEQUENCE_LEN>;

/// Width of a zero-padded decimal field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberWidth {
    Two,
    Three,
}

impl NumberWidth {
    pub fn digits(self) -> u32 {
        match self {
            NumberWidth::Two => 2,
            NumberWidth::Three => 3,
        }
    }

    /// Number of distinct values the field can show (100 or 1000).
    pub fn capacity(self) -> u32 {
        10u32.pow(self.digits())
    }
}

pub fn clear_screen() -> Sequence {
    let mut seq = Sequence::new();
    seq.push(ESC);
    seq.push(b'c');
    seq
}

pub fn cursor_visibility(visible: bool) -> Sequence {
    let mut seq = Sequence::new();
    seq.push(ESC);
    seq.push(b'[');
    seq.push(b'?');
    seq.push(b'2');
    seq.push(b'5');
    seq.push(if visible { b'h' } else { b'l' });
    seq
}

pub fn move_cursor(col: u8, row: u8) -> Sequence {
    let mut seq = Sequence::new();
    push_move_cursor(&mut seq, col, row);
    seq
}

pub fn push_move_cursor(seq: &mut Sequence, col: u8, row: u8) {
    seq.push(ESC);
    seq.push(b'[');
    push_decimal(seq, u32::from(row), NumberWidth::Two);
    seq.push(b';');
    push_decimal(seq, u32::from(col), NumberWidth::Two);
    seq.push(b'H');
}

/// Append `value` as a zero-padded decimal field.
///
/// Values wider than the field keep only their low-order digits.
pub fn push_decimal(seq: &mut Sequence, value: u32, width: NumberWidth) {
    let mut v = value % width.capacity();
    let mut digits = [b'0'; 3];
    let n = width.digits() as usize;
    for slot in digits[..n].iter_mut().rev() {
        *slot = b'0' + (v % 10) as u8;
        v /= 10;
    }
    seq.extend(digits[..n].iter().copied());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_cursor_is_row_first() {
        assert_eq!(move_cursor(12, 13).as_slice(), b"\x1b[13;12H");
        assert_eq!(move_cursor(3, 2).as_slice(), b"\x1b[02;03H");
    }

    #[test]
    fn decimal_fields_are_zero_padded_and_truncated() {
        let mut seq = Sequence::new();
        push_decimal(&mut seq, 7, NumberWidth::Two);
        assert_eq!(seq.as_slice(), b"07");

        let mut seq = Sequence::new();
        push_decimal(&mut seq, 123, NumberWidth::Two);
        assert_eq!(seq.as_slice(), b"23");

        let mut seq = Sequence::new();
        push_decimal(&mut seq, 42, NumberWidth::Three);
        assert_eq!(seq.as_slice(), b"042");

        let mut seq = Sequence::new();
        push_decimal(&mut seq, 1999, NumberWidth::Three);
        assert_eq!(seq.as_slice(), b"999");
    }

    #[test]
    fn fixed_sequences() {
        assert_eq!(clear_screen().as_slice(), &[0x1b, 0x63]);
        assert_eq!(cursor_visibility(false).as_slice(), b"\x1b[?25l");
        assert_eq!(cursor_visibility(true).as_slice(), b"\x1b[?25h");
    }
}
