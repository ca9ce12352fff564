use proptest::prelude::*;

use serial_pong::term::protocol;
use serial_pong::term::{RenderError, TerminalRenderer};
use serial_pong::types::{SCREEN_X_END, SCREEN_X_START, SCREEN_Y_END, SCREEN_Y_START};

fn in_bounds(col: i32, row: i32) -> bool {
    (SCREEN_X_START..=SCREEN_X_END).contains(&col) && (SCREEN_Y_START..=SCREEN_Y_END).contains(&row)
}

proptest! {
    #[test]
    fn glyph_writes_inside_screen_are_move_then_byte(
        col in SCREEN_X_START..=SCREEN_X_END,
        row in SCREEN_Y_START..=SCREEN_Y_END,
        glyph in 0x20u8..0x7f,
    ) {
        let mut r = TerminalRenderer::new(Vec::<u8>::new());
        r.write_glyph(col, row, glyph).unwrap();

        let mut expected = protocol::move_cursor(col as u8, row as u8).to_vec();
        expected.push(glyph);
        prop_assert_eq!(r.transport(), &expected);
    }

    #[test]
    fn number_writes_inside_screen_are_move_then_two_digits(
        col in SCREEN_X_START..=SCREEN_X_END,
        row in SCREEN_Y_START..=SCREEN_Y_END,
        value in 0u32..10_000,
    ) {
        let mut r = TerminalRenderer::new(Vec::<u8>::new());
        r.write_number(col, row, value).unwrap();

        let mut expected = protocol::move_cursor(col as u8, row as u8).to_vec();
        expected.extend(format!("{:02}", value % 100).bytes());
        prop_assert_eq!(r.transport(), &expected);
    }

    #[test]
    fn writes_outside_screen_emit_nothing(
        col in -200i32..200,
        row in -200i32..200,
        value in any::<u32>(),
    ) {
        prop_assume!(!in_bounds(col, row));
        let mut r = TerminalRenderer::new(Vec::<u8>::new());

        prop_assert_eq!(r.write_glyph(col, row, b'*'), Err(RenderError::OutOfBounds { col, row }));
        prop_assert_eq!(r.write_number(col, row, value), Err(RenderError::OutOfBounds { col, row }));
        prop_assert_eq!(r.write_number3(col, row, value), Err(RenderError::OutOfBounds { col, row }));
        prop_assert!(r.transport().is_empty());
    }
}
