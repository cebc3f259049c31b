//! Visible rendering of non-printing bytes.
//!
//! Control characters print as `^X` for control-X, delete prints as `^?`,
//! and bytes with the high bit set print as `M-` followed by the rendering
//! of their low 7 bits.

/// Append the visible form of `byte` to `out`.
///
/// Tab is literal unless `show_tabs` is set, in which case it becomes `^I`.
pub fn escape_into(byte: u8, show_tabs: bool, out: &mut Vec<u8>) {
    match byte {
        b'\t' if show_tabs => out.extend_from_slice(b"^I"),
        b'\t' => out.push(b'\t'),
        0x20..=0x7E => out.push(byte),
        0x7F => out.extend_from_slice(b"^?"),
        0x80..=0x9F => {
            out.extend_from_slice(b"M-^");
            out.push(byte - 0x80 + 0x40);
        }
        0xA0..=0xFE => {
            out.extend_from_slice(b"M-");
            out.push(byte - 0x80);
        }
        0xFF => out.extend_from_slice(b"M-^?"),
        // 0x00..=0x1F, tab handled above
        _ => {
            out.push(b'^');
            out.push(byte + 0x40);
        }
    }
}

/// The visible form of a single byte.
pub fn escape(byte: u8, show_tabs: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(4);
    escape_into(byte, show_tabs, &mut out);
    out
}

/// Escape every byte of `text`.
pub fn escape_bytes(text: &[u8], show_tabs: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for &byte in text {
        escape_into(byte, show_tabs, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn esc(byte: u8) -> String {
        String::from_utf8(escape(byte, false)).unwrap()
    }

    #[test]
    fn test_printable_ascii_is_identity() {
        for byte in 0x20u8..=0x7E {
            assert_eq!(escape(byte, false), vec![byte]);
            assert_eq!(escape(byte, true), vec![byte]);
        }
        assert_eq!(esc(65), "A");
    }

    #[test]
    fn test_delete() {
        assert_eq!(esc(127), "^?");
    }

    #[test]
    fn test_meta_control() {
        assert_eq!(esc(0x80), "M-^@");
        assert_eq!(esc(130), "M-^B");
        assert_eq!(esc(0x9F), "M-^_");
        // high-bit tab is not affected by the tab rule
        assert_eq!(String::from_utf8(escape(0x89, true)).unwrap(), "M-^I");
        assert_eq!(esc(0x89), "M-^I");
    }

    #[test]
    fn test_meta_printable() {
        assert_eq!(esc(0xA0), "M- ");
        assert_eq!(esc(170), "M-*");
        assert_eq!(esc(0xFE), "M-~");
        assert_eq!(esc(255), "M-^?");
    }

    #[test]
    fn test_tab_rule() {
        assert_eq!(esc(9), "\t");
        assert_eq!(String::from_utf8(escape(9, true)).unwrap(), "^I");
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(esc(0), "^@");
        assert_eq!(esc(1), "^A");
        assert_eq!(esc(10), "^J");
        assert_eq!(esc(27), "^[");
        assert_eq!(esc(30), "^^");
        assert_eq!(esc(31), "^_");
    }

    #[test]
    fn test_total_over_all_bytes() {
        for byte in 0u8..=255 {
            let plain = escape(byte, false);
            let tabs = escape(byte, true);
            assert!(!plain.is_empty() && plain.len() <= 4, "byte {byte}");
            if byte != b'\t' {
                assert_eq!(plain, tabs, "byte {byte}");
            }
            // everything but a literal tab renders as printable ASCII
            if byte != b'\t' {
                assert!(
                    plain.iter().all(|b| (0x20..=0x7E).contains(b)),
                    "byte {byte}"
                );
            }
        }
    }

    #[test]
    fn test_escape_bytes_concatenates() {
        assert_eq!(escape_bytes(b"a\x01\tb\xff", false), b"a^A\tbM-^?".to_vec());
        assert_eq!(escape_bytes(b"a\x01\tb\xff", true), b"a^A^IbM-^?".to_vec());
    }
}
