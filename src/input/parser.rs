//! Escape sequence decoder for terminal input.
//!
//! Turns raw stdin bytes into key and mouse events:
//! - Control keys (bytes 0-31, 127)
//! - Printable ASCII and UTF-8 characters
//! - Alt+key (ESC + char)
//! - CSI sequences (arrows, Home/End, Insert/Delete, PgUp/PgDn, F1-F20, Backtab)
//! - SS3 sequences (arrows, F1-F4, alternate encodings)
//! - Kitty keyboard protocol (codepoint, modifiers, state)
//! - SGR and X10 mouse reports
//!
//! Decoding is resumable: an incomplete sequence stays buffered until the
//! next chunk arrives. Anything unrecognised is consumed and dropped.

use crate::event::{Key, KeyEvent, ModMask, MouseButton, MouseEvent, MouseKind};
use crate::types::Point;

/// Longest CSI sequence accepted before the buffered bytes are discarded.
const MAX_SEQUENCE_LEN: usize = 64;

// =============================================================================
// Types
// =============================================================================

/// A decoded input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

enum Step {
    Event(ParsedEvent),
    Incomplete,
    Dropped,
}

// =============================================================================
// Decoder
// =============================================================================

/// Input decoder state machine.
#[derive(Debug)]
pub struct InputDecoder {
    buf: Vec<u8>,
}

impl InputDecoder {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(64),
        }
    }

    /// Decode a chunk of bytes.
    ///
    /// Returns every complete event. Trailing bytes of an unfinished
    /// sequence are kept for the next call.
    pub fn decode(&mut self, data: &[u8]) -> Vec<ParsedEvent> {
        self.buf.extend_from_slice(data);
        let mut events = Vec::new();

        while !self.buf.is_empty() {
            match self.try_parse_one() {
                Step::Event(ev) => {
                    log::trace!("decoded {:?}", ev);
                    events.push(ev);
                }
                Step::Incomplete => break,
                Step::Dropped => {}
            }
        }

        events
    }

    /// Check if bytes of an unfinished sequence are buffered.
    pub fn has_pending(&self) -> bool {
        !self.buf.is_empty()
    }

    /// Emit a buffered bare ESC as the Esc key.
    ///
    /// A lone ESC is ambiguous until more bytes arrive. Terminals write a
    /// whole escape sequence at once, so an ESC at the end of a read is the
    /// key itself.
    pub fn flush_lone_escape(&mut self) -> Option<ParsedEvent> {
        if self.buf.as_slice() == [0x1B] {
            self.buf.clear();
            Some(key(Key::Esc, ModMask::NONE))
        } else {
            None
        }
    }

    /// Forget any buffered bytes.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    fn try_parse_one(&mut self) -> Step {
        let first = self.buf[0];

        match first {
            0x1B => self.parse_escape(),
            0x00..=0x1F | 0x7F => {
                self.consume(1);
                match Key::from_control_byte(first) {
                    Some(k) => Step::Event(key(k, ModMask::NONE)),
                    None => Step::Dropped,
                }
            }
            0x20..=0x7E => {
                self.consume(1);
                Step::Event(rune(first as char, ModMask::NONE))
            }
            0x80..=0xFF => self.parse_utf8(),
        }
    }

    fn parse_escape(&mut self) -> Step {
        if self.buf.len() < 2 {
            return Step::Incomplete;
        }

        match self.buf[1] {
            // CSI: ESC [
            b'[' => self.parse_csi(),
            // SS3: ESC O
            b'O' => self.parse_ss3(),
            // ESC ESC → Alt+Esc
            0x1B => {
                self.consume(2);
                Step::Event(key(Key::Esc, ModMask::ALT))
            }
            // Alt+char: ESC + printable
            0x20..=0x7E => {
                let ch = self.buf[1] as char;
                self.consume(2);
                Step::Event(rune(ch, ModMask::ALT))
            }
            // Alt+control: ESC + Enter, Backspace, Ctrl-letter
            b @ (0x00..=0x1A | 0x1C..=0x1F | 0x7F) => {
                self.consume(2);
                match Key::from_control_byte(b) {
                    Some(k) => Step::Event(key(k, ModMask::ALT)),
                    None => Step::Dropped,
                }
            }
            // Alt+char: ESC + UTF-8 scalar
            _ => match utf8_scalar(&self.buf[1..]) {
                Utf8::Char(ch, len) => {
                    self.consume(1 + len);
                    Step::Event(rune(ch, ModMask::ALT))
                }
                Utf8::Incomplete => Step::Incomplete,
                // Standalone ESC, the broken byte is dropped on its own
                Utf8::Invalid => {
                    self.consume(1);
                    Step::Event(key(Key::Esc, ModMask::NONE))
                }
            },
        }
    }

    fn parse_csi(&mut self) -> Step {
        // Minimum: ESC [ X
        if self.buf.len() < 3 {
            return Step::Incomplete;
        }

        match self.buf[2] {
            b'<' => return self.parse_sgr_mouse(),
            b'M' => return self.parse_x10_mouse(),
            _ => {}
        }

        // Find the final byte (0x40-0x7E)
        let Some(end) = self.buf[2..]
            .iter()
            .position(|b| (0x40..=0x7E).contains(b))
            .map(|i| i + 2)
        else {
            return self.incomplete_or_drop();
        };

        let final_byte = self.buf[end];
        let params = parse_params(&self.buf[2..end]);
        let event_type = sub_param(&self.buf[2..end], 1, 1);
        self.consume(end + 1);

        // Kitty keyboard: final byte is 'u'
        if final_byte == b'u' {
            return parse_kitty_key(&params, event_type);
        }

        let modifiers = match params.get(1) {
            Some(&p) if p > 0 => ModMask::from_xterm_param(p),
            _ => ModMask::NONE,
        };

        let code = match final_byte {
            b'A' => Some(Key::Up),
            b'B' => Some(Key::Down),
            b'C' => Some(Key::Right),
            b'D' => Some(Key::Left),
            b'H' => Some(Key::Home),
            b'F' => Some(Key::End),
            b'P' => Some(Key::F1),
            b'Q' => Some(Key::F2),
            b'R' => Some(Key::F3),
            b'S' => Some(Key::F4),
            b'Z' => Some(Key::Backtab),
            b'~' => tilde_key(params.first().copied().unwrap_or(0)),
            _ => None,
        };

        match code {
            Some(k) => Step::Event(key(k, modifiers)),
            None => {
                log::trace!("dropped CSI sequence with final byte {:?}", final_byte as char);
                Step::Dropped
            }
        }
    }

    fn parse_ss3(&mut self) -> Step {
        if self.buf.len() < 3 {
            return Step::Incomplete;
        }

        let code = match self.buf[2] {
            b'A' => Some(Key::Up),
            b'B' => Some(Key::Down),
            b'C' => Some(Key::Right),
            b'D' => Some(Key::Left),
            b'H' => Some(Key::Home),
            b'F' => Some(Key::End),
            b'P' => Some(Key::F1),
            b'Q' => Some(Key::F2),
            b'R' => Some(Key::F3),
            b'S' => Some(Key::F4),
            _ => None,
        };

        self.consume(3);
        match code {
            Some(k) => Step::Event(key(k, ModMask::NONE)),
            None => Step::Dropped,
        }
    }

    fn parse_sgr_mouse(&mut self) -> Step {
        // ESC [ < Pb ; Px ; Py M/m
        let start = 3;
        let Some(end) = self.buf[start..]
            .iter()
            .position(|&b| b == b'M' || b == b'm')
            .map(|i| i + start)
        else {
            return self.incomplete_or_drop();
        };

        let is_release = self.buf[end] == b'm';
        let parts = parse_params(&self.buf[start..end]);
        self.consume(end + 1);

        if parts.len() < 3 {
            return Step::Dropped;
        }

        let cb = parts[0];
        // 1-indexed → 0-indexed
        let pos = Point::new(to_cell(parts[1]), to_cell(parts[2]));
        let modifiers = mouse_modifiers(cb);

        let base = cb & 3;
        let kind = if cb & 64 != 0 {
            match base {
                0 => MouseKind::ScrollUp,
                1 => MouseKind::ScrollDown,
                _ => return Step::Dropped,
            }
        } else if cb & 32 != 0 {
            MouseKind::Move
        } else if is_release {
            MouseKind::Release(mouse_button(base))
        } else {
            MouseKind::Press(mouse_button(base))
        };

        Step::Event(ParsedEvent::Mouse(MouseEvent {
            pos,
            kind,
            modifiers,
        }))
    }

    fn parse_x10_mouse(&mut self) -> Step {
        // ESC [ M Cb Cx Cy
        if self.buf.len() < 6 {
            return Step::Incomplete;
        }

        let cb = self.buf[3].saturating_sub(32) as u32;
        let x = self.buf[4].saturating_sub(33) as u16;
        let y = self.buf[5].saturating_sub(33) as u16;
        self.consume(6);

        let base = cb & 3;
        let kind = if cb & 64 != 0 {
            match base {
                0 => MouseKind::ScrollUp,
                _ => MouseKind::ScrollDown,
            }
        } else if base == 3 {
            MouseKind::Release(MouseButton::Left)
        } else {
            MouseKind::Press(mouse_button(base))
        };

        Step::Event(ParsedEvent::Mouse(MouseEvent {
            pos: Point::new(x, y),
            kind,
            modifiers: mouse_modifiers(cb),
        }))
    }

    fn parse_utf8(&mut self) -> Step {
        match utf8_scalar(&self.buf) {
            Utf8::Char(ch, len) => {
                self.consume(len);
                Step::Event(rune(ch, ModMask::NONE))
            }
            Utf8::Incomplete => Step::Incomplete,
            Utf8::Invalid => self.drop_bytes(1),
        }
    }

    /// An unterminated sequence: wait for more bytes unless it has grown
    /// past any sane length.
    fn incomplete_or_drop(&mut self) -> Step {
        if self.buf.len() > MAX_SEQUENCE_LEN {
            let n = self.buf.len();
            self.drop_bytes(n)
        } else {
            Step::Incomplete
        }
    }

    fn drop_bytes(&mut self, n: usize) -> Step {
        log::trace!("dropped undecodable input {:02x?}", &self.buf[..n]);
        self.consume(n);
        Step::Dropped
    }

    fn consume(&mut self, n: usize) {
        self.buf.drain(..n);
    }
}

impl Default for InputDecoder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Helpers
// =============================================================================

enum Utf8 {
    /// A scalar and its encoded length
    Char(char, usize),
    Incomplete,
    Invalid,
}

/// Decode the UTF-8 scalar at the start of `bytes`.
fn utf8_scalar(bytes: &[u8]) -> Utf8 {
    let Some(&first) = bytes.first() else {
        return Utf8::Incomplete;
    };
    let expected_len = if first & 0xE0 == 0xC0 {
        2
    } else if first & 0xF0 == 0xE0 {
        3
    } else if first & 0xF8 == 0xF0 {
        4
    } else {
        return Utf8::Invalid;
    };

    // Bail out early on a broken continuation byte
    let available = bytes.len().min(expected_len);
    if bytes[1..available].iter().any(|b| b & 0xC0 != 0x80) {
        return Utf8::Invalid;
    }
    if bytes.len() < expected_len {
        return Utf8::Incomplete;
    }

    match std::str::from_utf8(&bytes[..expected_len]) {
        Ok(s) => match s.chars().next() {
            Some(ch) => Utf8::Char(ch, expected_len),
            None => Utf8::Invalid,
        },
        Err(_) => Utf8::Invalid,
    }
}

fn key(code: Key, modifiers: ModMask) -> ParsedEvent {
    ParsedEvent::Key(KeyEvent::new(code, modifiers))
}

fn rune(ch: char, modifiers: ModMask) -> ParsedEvent {
    ParsedEvent::Key(KeyEvent::rune(ch, modifiers))
}

/// Split `a;b:c;d` into numbers. Sub-parameters after `:` are ignored and
/// anything non-numeric reads as 0.
fn parse_params(bytes: &[u8]) -> Vec<u32> {
    let text = std::str::from_utf8(bytes).unwrap_or("");
    text.split(';')
        .map(|p| p.split(':').next().unwrap_or("").parse::<u32>().unwrap_or(0))
        .collect()
}

fn tilde_key(n: u32) -> Option<Key> {
    let f = |i: u32| Key::function(i as u8);
    match n {
        1 | 7 => Some(Key::Home),
        2 => Some(Key::Insert),
        3 => Some(Key::Delete),
        4 | 8 => Some(Key::End),
        5 => Some(Key::PgUp),
        6 => Some(Key::PgDn),
        11..=15 => f(n - 10),
        17..=21 => f(n - 11),
        23..=26 => f(n - 12),
        28..=29 => f(n - 13),
        31..=34 => f(n - 14),
        _ => None,
    }
}

/// Sub-parameter `sub` of parameter `index`, e.g. the `3` in `97;1:3`.
fn sub_param(bytes: &[u8], index: usize, sub: usize) -> Option<u32> {
    std::str::from_utf8(bytes)
        .ok()?
        .split(';')
        .nth(index)?
        .split(':')
        .nth(sub)?
        .parse()
        .ok()
}

fn parse_kitty_key(params: &[u32], event_type: Option<u32>) -> Step {
    let codepoint = params.first().copied().unwrap_or(0);
    let modifiers = match params.get(1) {
        Some(&p) if p > 0 => ModMask::from_xterm_param(p),
        _ => ModMask::NONE,
    };

    // 1 = press, 2 = repeat, 3 = release
    if event_type == Some(3) {
        return Step::Dropped;
    }

    let event = match codepoint {
        8 => key(Key::Backspace, modifiers),
        9 => key(Key::Tab, modifiers),
        13 => key(Key::Enter, modifiers),
        27 => key(Key::Esc, modifiers),
        127 => key(Key::Backspace2, modifiers),
        cp => match char::from_u32(cp) {
            Some(ch) if !ch.is_control() => rune(ch, modifiers),
            _ => return Step::Dropped,
        },
    };
    Step::Event(event)
}

fn mouse_button(base: u32) -> MouseButton {
    match base {
        0 => MouseButton::Left,
        1 => MouseButton::Middle,
        _ => MouseButton::Right,
    }
}

fn mouse_modifiers(cb: u32) -> ModMask {
    let mut modifiers = ModMask::NONE;
    if cb & 4 != 0 {
        modifiers |= ModMask::SHIFT;
    }
    if cb & 8 != 0 {
        modifiers |= ModMask::ALT;
    }
    if cb & 16 != 0 {
        modifiers |= ModMask::CTRL;
    }
    modifiers
}

fn to_cell(coord: u32) -> u16 {
    coord.saturating_sub(1).min(u16::MAX as u32) as u16
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_bytes(data: &[u8]) -> Vec<ParsedEvent> {
        let mut decoder = InputDecoder::new();
        decoder.decode(data)
    }

    fn mouse(ev: &ParsedEvent) -> MouseEvent {
        match ev {
            ParsedEvent::Mouse(m) => *m,
            other => panic!("Expected mouse event, got {:?}", other),
        }
    }

    #[test]
    fn test_ascii_chars() {
        let events = parse_bytes(b"abc");
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], rune('a', ModMask::NONE));
        assert_eq!(events[1], rune('b', ModMask::NONE));
        assert_eq!(events[2], rune('c', ModMask::NONE));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(parse_bytes(b"\r"), vec![key(Key::Enter, ModMask::NONE)]);
        assert_eq!(parse_bytes(b"\t"), vec![key(Key::Tab, ModMask::NONE)]);
        assert_eq!(parse_bytes(b"\x03"), vec![key(Key::CtrlC, ModMask::NONE)]);
        assert_eq!(parse_bytes(b"\x00"), vec![key(Key::CtrlSpace, ModMask::NONE)]);
        assert_eq!(parse_bytes(b"\x08"), vec![key(Key::Backspace, ModMask::NONE)]);
        assert_eq!(parse_bytes(b"\x7f"), vec![key(Key::Backspace2, ModMask::NONE)]);
        assert_eq!(parse_bytes(b"\x1c"), vec![key(Key::CtrlBackslash, ModMask::NONE)]);
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(parse_bytes(b"\x1b[A")[0], key(Key::Up, ModMask::NONE));
        assert_eq!(parse_bytes(b"\x1b[B")[0], key(Key::Down, ModMask::NONE));
        assert_eq!(parse_bytes(b"\x1b[C")[0], key(Key::Right, ModMask::NONE));
        assert_eq!(parse_bytes(b"\x1b[D")[0], key(Key::Left, ModMask::NONE));
        assert_eq!(parse_bytes(b"\x1bOA")[0], key(Key::Up, ModMask::NONE));
    }

    #[test]
    fn test_modified_arrow() {
        assert_eq!(
            parse_bytes(b"\x1b[1;5A")[0],
            key(Key::Up, ModMask::CTRL)
        );
        assert_eq!(
            parse_bytes(b"\x1b[1;4D")[0],
            key(Key::Left, ModMask::SHIFT | ModMask::ALT)
        );
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(parse_bytes(b"\x1bOP")[0], key(Key::F1, ModMask::NONE));
        assert_eq!(parse_bytes(b"\x1b[15~")[0], key(Key::F5, ModMask::NONE));
        assert_eq!(parse_bytes(b"\x1b[24~")[0], key(Key::F12, ModMask::NONE));
        assert_eq!(parse_bytes(b"\x1b[34~")[0], key(Key::F20, ModMask::NONE));
        assert_eq!(parse_bytes(b"\x1b[15;2~")[0], key(Key::F5, ModMask::SHIFT));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(parse_bytes(b"\x1b[2~")[0], key(Key::Insert, ModMask::NONE));
        assert_eq!(parse_bytes(b"\x1b[3~")[0], key(Key::Delete, ModMask::NONE));
        assert_eq!(parse_bytes(b"\x1b[5~")[0], key(Key::PgUp, ModMask::NONE));
        assert_eq!(parse_bytes(b"\x1b[6~")[0], key(Key::PgDn, ModMask::NONE));
        assert_eq!(parse_bytes(b"\x1b[H")[0], key(Key::Home, ModMask::NONE));
        assert_eq!(parse_bytes(b"\x1b[4~")[0], key(Key::End, ModMask::NONE));
    }

    #[test]
    fn test_backtab() {
        assert_eq!(parse_bytes(b"\x1b[Z")[0], key(Key::Backtab, ModMask::NONE));
    }

    #[test]
    fn test_alt_key() {
        assert_eq!(parse_bytes(b"\x1bx")[0], rune('x', ModMask::ALT));
        assert_eq!(parse_bytes(b"\x1b\x1b")[0], key(Key::Esc, ModMask::ALT));
    }

    #[test]
    fn test_alt_control_is_one_event() {
        assert_eq!(parse_bytes(b"\x1b\r"), vec![key(Key::Enter, ModMask::ALT)]);
        assert_eq!(parse_bytes(b"\x1b\x7f"), vec![key(Key::Backspace2, ModMask::ALT)]);
        assert_eq!(parse_bytes(b"\x1b\x01"), vec![key(Key::CtrlA, ModMask::ALT)]);
        assert_eq!(parse_bytes(b"\x1b\t"), vec![key(Key::Tab, ModMask::ALT)]);
    }

    #[test]
    fn test_alt_utf8_is_one_event() {
        assert_eq!(parse_bytes("\x1bé".as_bytes()), vec![rune('é', ModMask::ALT)]);

        // The scalar may arrive in pieces
        let mut decoder = InputDecoder::new();
        let bytes = "\x1b€".as_bytes();
        assert!(decoder.decode(&bytes[..2]).is_empty());
        assert_eq!(decoder.flush_lone_escape(), None);
        assert_eq!(decoder.decode(&bytes[2..]), vec![rune('€', ModMask::ALT)]);
    }

    #[test]
    fn test_escape_before_invalid_byte() {
        assert_eq!(
            parse_bytes(&[0x1b, 0xFF, b'a']),
            vec![key(Key::Esc, ModMask::NONE), rune('a', ModMask::NONE)]
        );
    }

    #[test]
    fn test_utf8() {
        let events = parse_bytes("é€😀".as_bytes());
        assert_eq!(
            events,
            vec![
                rune('é', ModMask::NONE),
                rune('€', ModMask::NONE),
                rune('😀', ModMask::NONE),
            ]
        );
    }

    #[test]
    fn test_resumes_across_chunks() {
        let mut decoder = InputDecoder::new();

        assert!(decoder.decode(b"\x1b[").is_empty());
        assert!(decoder.has_pending());
        assert_eq!(decoder.decode(b"1;5"), vec![]);
        assert_eq!(decoder.decode(b"C"), vec![key(Key::Right, ModMask::CTRL)]);
        assert!(!decoder.has_pending());

        let euro = "€".as_bytes();
        assert!(decoder.decode(&euro[..1]).is_empty());
        assert!(decoder.decode(&euro[1..2]).is_empty());
        assert_eq!(decoder.decode(&euro[2..]), vec![rune('€', ModMask::NONE)]);
    }

    #[test]
    fn test_unknown_sequence_dropped() {
        // focus report and an unknown final byte, followed by real input
        let events = parse_bytes(b"\x1b[I\x1b[99Xa");
        assert_eq!(events, vec![rune('a', ModMask::NONE)]);

        let events = parse_bytes(b"\x1b[99~b");
        assert_eq!(events, vec![rune('b', ModMask::NONE)]);
    }

    #[test]
    fn test_invalid_utf8_dropped() {
        let events = parse_bytes(&[0xE2, b'a', 0xFF, b'b']);
        assert_eq!(events, vec![rune('a', ModMask::NONE), rune('b', ModMask::NONE)]);
    }

    #[test]
    fn test_overlong_csi_discarded() {
        let mut decoder = InputDecoder::new();
        let mut junk = b"\x1b[".to_vec();
        junk.extend(std::iter::repeat_n(b'1', MAX_SEQUENCE_LEN + 4));
        assert!(decoder.decode(&junk).is_empty());
        assert!(!decoder.has_pending());
        assert_eq!(decoder.decode(b"z"), vec![rune('z', ModMask::NONE)]);
    }

    #[test]
    fn test_lone_escape() {
        let mut decoder = InputDecoder::new();
        assert!(decoder.decode(b"\x1b").is_empty());
        assert_eq!(decoder.flush_lone_escape(), Some(key(Key::Esc, ModMask::NONE)));
        assert!(!decoder.has_pending());
        assert_eq!(decoder.flush_lone_escape(), None);

        // A partial CSI is not a lone escape
        assert!(decoder.decode(b"\x1b[").is_empty());
        assert_eq!(decoder.flush_lone_escape(), None);
        assert!(decoder.has_pending());
    }

    #[test]
    fn test_kitty_keys() {
        assert_eq!(parse_bytes(b"\x1b[97;5u")[0], rune('a', ModMask::CTRL));
        assert_eq!(parse_bytes(b"\x1b[13u")[0], key(Key::Enter, ModMask::NONE));
        assert_eq!(parse_bytes(b"\x1b[27;1;2u")[0], key(Key::Esc, ModMask::NONE));
        assert!(parse_bytes(b"\x1b[97;1:3u").is_empty());
        assert_eq!(parse_bytes(b"\x1b[97;1:2u")[0], rune('a', ModMask::NONE));
    }

    #[test]
    fn test_sgr_mouse_press() {
        // ESC [ < 0 ; 10 ; 20 M → Left press at (9, 19)
        let events = parse_bytes(b"\x1b[<0;10;20M");
        let m = mouse(&events[0]);
        assert_eq!(m.kind, MouseKind::Press(MouseButton::Left));
        assert_eq!(m.pos, Point::new(9, 19));
        assert_eq!(m.modifiers, ModMask::NONE);
    }

    #[test]
    fn test_sgr_mouse_release_and_modifiers() {
        let events = parse_bytes(b"\x1b[<18;1;1m");
        let m = mouse(&events[0]);
        assert_eq!(m.kind, MouseKind::Release(MouseButton::Right));
        assert_eq!(m.pos, Point::new(0, 0));
        assert_eq!(m.modifiers, ModMask::CTRL);
    }

    #[test]
    fn test_sgr_scroll_and_motion() {
        assert_eq!(mouse(&parse_bytes(b"\x1b[<64;10;20M")[0]).kind, MouseKind::ScrollUp);
        assert_eq!(mouse(&parse_bytes(b"\x1b[<65;10;20M")[0]).kind, MouseKind::ScrollDown);
        assert_eq!(mouse(&parse_bytes(b"\x1b[<35;3;4M")[0]).kind, MouseKind::Move);
    }

    #[test]
    fn test_sgr_mouse_split() {
        let mut decoder = InputDecoder::new();
        assert!(decoder.decode(b"\x1b[<0;5").is_empty());
        let events = decoder.decode(b";7M");
        assert_eq!(mouse(&events[0]).pos, Point::new(4, 6));
    }

    #[test]
    fn test_x10_mouse() {
        // button 0 at column 1, row 1 (offset by 32 + 1)
        let events = parse_bytes(&[0x1b, b'[', b'M', 32, 33 + 4, 33 + 2]);
        let m = mouse(&events[0]);
        assert_eq!(m.kind, MouseKind::Press(MouseButton::Left));
        assert_eq!(m.pos, Point::new(4, 2));
    }
}
