use serial_pong::term::protocol::{self, NumberWidth};
use serial_pong::term::{RenderError, TerminalRenderer};

fn renderer() -> TerminalRenderer<Vec<u8>> {
    TerminalRenderer::new(Vec::new())
}

#[test]
fn move_cursor_row_then_column_two_digits_each() {
    let mut r = renderer();
    r.move_cursor(12, 13);
    assert_eq!(
        r.transport().as_slice(),
        &[0x1b, b'[', b'1', b'3', b';', b'1', b'2', b'H']
    );
}

#[test]
fn move_cursor_pads_single_digits() {
    let mut r = renderer();
    r.move_cursor(3, 2);
    assert_eq!(r.transport().as_slice(), b"\x1b[02;03H");
}

#[test]
fn clear_is_esc_c() {
    let mut r = renderer();
    r.clear();
    assert_eq!(r.transport().as_slice(), &[0x1b, 0x63]);
}

#[test]
fn cursor_visibility_sequences() {
    let mut r = renderer();
    r.set_cursor_visible(false);
    assert_eq!(r.transport().as_slice(), b"\x1b[?25l");

    let mut r = renderer();
    r.set_cursor_visible(true);
    assert_eq!(r.transport().as_slice(), b"\x1b[?25h");
}

#[test]
fn glyph_and_number_writes() {
    let mut r = renderer();
    r.write_glyph(80, 25, b'*').unwrap();
    r.write_number(3, 3, 7).unwrap();
    r.write_number(75, 3, 42).unwrap();
    r.write_number3(40, 4, 512).unwrap();
    assert_eq!(
        r.transport().as_slice(),
        b"\x1b[25;80H*\x1b[03;03H07\x1b[03;75H42\x1b[04;40H512".as_slice()
    );
}

#[test]
fn wide_values_wrap_silently() {
    let mut r = renderer();
    r.write_number(3, 3, 100).unwrap();
    r.write_number(3, 3, 257).unwrap();
    r.write_number3(3, 3, 1234).unwrap();
    assert_eq!(
        r.transport().as_slice(),
        b"\x1b[03;03H00\x1b[03;03H57\x1b[03;03H234".as_slice()
    );
}

#[test]
fn out_of_bounds_reports_cell() {
    let mut r = renderer();
    let err = r.write_glyph(81, 1, b'*').unwrap_err();
    assert_eq!(err, RenderError::OutOfBounds { col: 81, row: 1 });
    assert_eq!(err.to_string(), "cell (81, 1) is outside the printable region");
    assert!(r.transport().is_empty());
}

#[test]
fn field_capacities() {
    assert_eq!(NumberWidth::Two.capacity(), 100);
    assert_eq!(NumberWidth::Three.capacity(), 1000);
    assert_eq!(protocol::move_cursor(99, 99).as_slice(), b"\x1b[99;99H");
}
