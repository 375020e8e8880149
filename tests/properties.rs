use proptest::prelude::*;
use ssd1680::error::Error;
use ssd1680::register::{ram_x_range, ram_y_range, Border, UpdateControl1};
use ssd1680::text::{Cursor, Orientation};
use ssd1680::prelude::Color;

proptest! {
    #[test]
    fn x_range_accepts_exactly_aligned_nonempty_windows(left: u8, width: u8) {
        let result = ram_x_range(left, width);
        if left % 8 == 0 && width % 8 == 0 && width > 0 {
            let end = (u16::from(left) + u16::from(width)) / 8 - 1;
            prop_assert_eq!(result.unwrap(), [left / 8, end as u8]);
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn misaligned_x_is_an_alignment_error(left in 0u8..=255, width in (1u8..32).prop_map(|w| w * 8)) {
        prop_assume!(left % 8 != 0);
        let is_alignment = matches!(ram_x_range(left, width), Err(Error::Alignment { .. }));
        prop_assert!(is_alignment);
    }

    #[test]
    fn y_range_is_first_and_last_row(top in any::<u16>(), height in 1u16..=296) {
        let bytes = ram_y_range(top, height).unwrap();
        prop_assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), top);
        prop_assert_eq!(
            u16::from_le_bytes([bytes[2], bytes[3]]),
            top.wrapping_add(height - 1)
        );
    }

    #[test]
    fn update_control_decodes_what_it_encodes(
        bypass_black: bool,
        invert_black: bool,
        bypass_red: bool,
        invert_red: bool,
        narrow_scan: bool,
    ) {
        let control = UpdateControl1 { bypass_black, invert_black, bypass_red, invert_red, narrow_scan };
        prop_assert_eq!(UpdateControl1::from_bytes(control.to_bytes()), control);
    }

    #[test]
    fn border_byte_keeps_reserved_bits_clear(bits in 0u8..4, transition in any::<bool>()) {
        let border = Border { lut: Color::from_bits(bits), transition };
        prop_assert_eq!(border.to_byte() & !0b111, 0);
        prop_assert_eq!(Border::from_byte(border.to_byte()), border);
    }

    #[test]
    fn printable_bytes_always_draw(text in proptest::collection::vec(0x20u8..0x7F, 0..64)) {
        let mut cursor = Cursor::new(Orientation::Horizontal);
        let drawn = text.iter().filter_map(|&b| cursor.feed(b)).count();
        prop_assert_eq!(drawn, text.len());
        prop_assert_eq!(cursor.position(), (text.len() as u8, 0));
    }
}
