//! Key identifiers, the key-name catalog and key press formatting.
//!
//! Control keys carry the byte value the terminal sends for them, so the
//! ASCII names (`Key::NUL` .. `Key::US`) and the historical aliases
//! (`Key::CTRL_H`, `Key::ESCAPE`, ...) are constants pointing at a single
//! variant. Every alias therefore formats under one display name.

use std::borrow::Cow;
use std::fmt;

use super::modifiers::ModMask;

/// Prefix carried by catalog names of control keys.
const CTRL_PREFIX: &str = "Ctrl-";

/// Name used for keys without a catalog entry.
const UNKNOWN: &str = "Unknown";

// =============================================================================
// Key
// =============================================================================

/// Identifies a key. Printable characters use [`Key::Rune`] together with
/// the `ch` field of [`KeyEvent`].
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    // Control codes. The value is the byte the terminal sends.
    CtrlSpace = 0x00,
    CtrlA = 0x01,
    CtrlB = 0x02,
    CtrlC = 0x03,
    CtrlD = 0x04,
    CtrlE = 0x05,
    CtrlF = 0x06,
    CtrlG = 0x07,
    Backspace = 0x08,
    Tab = 0x09,
    CtrlJ = 0x0A,
    CtrlK = 0x0B,
    CtrlL = 0x0C,
    Enter = 0x0D,
    CtrlN = 0x0E,
    CtrlO = 0x0F,
    CtrlP = 0x10,
    CtrlQ = 0x11,
    CtrlR = 0x12,
    CtrlS = 0x13,
    CtrlT = 0x14,
    CtrlU = 0x15,
    CtrlV = 0x16,
    CtrlW = 0x17,
    CtrlX = 0x18,
    CtrlY = 0x19,
    CtrlZ = 0x1A,
    Esc = 0x1B,
    CtrlBackslash = 0x1C,
    CtrlRightSq = 0x1D,
    CtrlCarat = 0x1E,
    CtrlUnderscore = 0x1F,
    Backspace2 = 0x7F,

    // Named keys.
    Rune = 256,
    Up,
    Down,
    Right,
    Left,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    Center,
    PgUp,
    PgDn,
    Home,
    End,
    Insert,
    Delete,
    Help,
    Exit,
    Clear,
    Cancel,
    Print,
    Pause,
    Backtab,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    F25,
    F26,
    F27,
    F28,
    F29,
    F30,
    F31,
    F32,
    F33,
    F34,
    F35,
    F36,
    F37,
    F38,
    F39,
    F40,
    F41,
    F42,
    F43,
    F44,
    F45,
    F46,
    F47,
    F48,
    F49,
    F50,
    F51,
    F52,
    F53,
    F54,
    F55,
    F56,
    F57,
    F58,
    F59,
    F60,
    F61,
    F62,
    F63,
    F64,
}

static CONTROL_KEYS: [Key; 32] = [
    Key::CtrlSpace,
    Key::CtrlA,
    Key::CtrlB,
    Key::CtrlC,
    Key::CtrlD,
    Key::CtrlE,
    Key::CtrlF,
    Key::CtrlG,
    Key::Backspace,
    Key::Tab,
    Key::CtrlJ,
    Key::CtrlK,
    Key::CtrlL,
    Key::Enter,
    Key::CtrlN,
    Key::CtrlO,
    Key::CtrlP,
    Key::CtrlQ,
    Key::CtrlR,
    Key::CtrlS,
    Key::CtrlT,
    Key::CtrlU,
    Key::CtrlV,
    Key::CtrlW,
    Key::CtrlX,
    Key::CtrlY,
    Key::CtrlZ,
    Key::Esc,
    Key::CtrlBackslash,
    Key::CtrlRightSq,
    Key::CtrlCarat,
    Key::CtrlUnderscore,
];

static NAMED_KEYS: [Key; 87] = [
    Key::Rune,
    Key::Up,
    Key::Down,
    Key::Right,
    Key::Left,
    Key::UpLeft,
    Key::UpRight,
    Key::DownLeft,
    Key::DownRight,
    Key::Center,
    Key::PgUp,
    Key::PgDn,
    Key::Home,
    Key::End,
    Key::Insert,
    Key::Delete,
    Key::Help,
    Key::Exit,
    Key::Clear,
    Key::Cancel,
    Key::Print,
    Key::Pause,
    Key::Backtab,
    Key::F1,
    Key::F2,
    Key::F3,
    Key::F4,
    Key::F5,
    Key::F6,
    Key::F7,
    Key::F8,
    Key::F9,
    Key::F10,
    Key::F11,
    Key::F12,
    Key::F13,
    Key::F14,
    Key::F15,
    Key::F16,
    Key::F17,
    Key::F18,
    Key::F19,
    Key::F20,
    Key::F21,
    Key::F22,
    Key::F23,
    Key::F24,
    Key::F25,
    Key::F26,
    Key::F27,
    Key::F28,
    Key::F29,
    Key::F30,
    Key::F31,
    Key::F32,
    Key::F33,
    Key::F34,
    Key::F35,
    Key::F36,
    Key::F37,
    Key::F38,
    Key::F39,
    Key::F40,
    Key::F41,
    Key::F42,
    Key::F43,
    Key::F44,
    Key::F45,
    Key::F46,
    Key::F47,
    Key::F48,
    Key::F49,
    Key::F50,
    Key::F51,
    Key::F52,
    Key::F53,
    Key::F54,
    Key::F55,
    Key::F56,
    Key::F57,
    Key::F58,
    Key::F59,
    Key::F60,
    Key::F61,
    Key::F62,
    Key::F63,
    Key::F64,
];

/// Offset of `F1` inside `NAMED_KEYS`.
const F1_OFFSET: usize = 23;

impl Key {
    // Historical aliases.
    pub const CTRL_H: Key = Key::Backspace;
    pub const CTRL_I: Key = Key::Tab;
    pub const CTRL_M: Key = Key::Enter;
    pub const CTRL_LEFT_SQ: Key = Key::Esc;
    pub const ESCAPE: Key = Key::Esc;
    pub const DEL: Key = Key::Backspace2;

    // ASCII control code names.
    pub const NUL: Key = Key::CtrlSpace;
    pub const SOH: Key = Key::CtrlA;
    pub const STX: Key = Key::CtrlB;
    pub const ETX: Key = Key::CtrlC;
    pub const EOT: Key = Key::CtrlD;
    pub const ENQ: Key = Key::CtrlE;
    pub const ACK: Key = Key::CtrlF;
    pub const BEL: Key = Key::CtrlG;
    pub const BS: Key = Key::Backspace;
    pub const TAB: Key = Key::Tab;
    pub const LF: Key = Key::CtrlJ;
    pub const VT: Key = Key::CtrlK;
    pub const FF: Key = Key::CtrlL;
    pub const CR: Key = Key::Enter;
    pub const SO: Key = Key::CtrlN;
    pub const SI: Key = Key::CtrlO;
    pub const DLE: Key = Key::CtrlP;
    pub const DC1: Key = Key::CtrlQ;
    pub const DC2: Key = Key::CtrlR;
    pub const DC3: Key = Key::CtrlS;
    pub const DC4: Key = Key::CtrlT;
    pub const NAK: Key = Key::CtrlU;
    pub const SYN: Key = Key::CtrlV;
    pub const ETB: Key = Key::CtrlW;
    pub const CAN: Key = Key::CtrlX;
    pub const EM: Key = Key::CtrlY;
    pub const SUB: Key = Key::CtrlZ;
    pub const ESC: Key = Key::Esc;
    pub const FS: Key = Key::CtrlBackslash;
    pub const GS: Key = Key::CtrlRightSq;
    pub const RS: Key = Key::CtrlCarat;
    pub const US: Key = Key::CtrlUnderscore;

    /// Numeric identifier of this key.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Look up a key by its numeric identifier.
    pub fn from_u16(code: u16) -> Option<Key> {
        match code {
            0x00..=0x1F => Some(CONTROL_KEYS[code as usize]),
            0x7F => Some(Key::Backspace2),
            256.. => NAMED_KEYS.get(code as usize - 256).copied(),
            _ => None,
        }
    }

    /// The key a terminal reports for a control byte (0x00-0x1F, 0x7F).
    pub fn from_control_byte(byte: u8) -> Option<Key> {
        match byte {
            0x00..=0x1F | 0x7F => Key::from_u16(byte as u16),
            _ => None,
        }
    }

    /// Function key `F<n>`, for n in 1..=64.
    pub fn function(n: u8) -> Option<Key> {
        if (1..=64).contains(&n) {
            Some(NAMED_KEYS[F1_OFFSET + n as usize - 1])
        } else {
            None
        }
    }

    /// Every key identifier, control codes first.
    pub fn all() -> impl Iterator<Item = Key> {
        CONTROL_KEYS
            .iter()
            .chain(std::iter::once(&Key::Backspace2))
            .chain(NAMED_KEYS.iter())
            .copied()
    }

    /// Catalog name of this key, if it has one.
    ///
    /// `Rune` has no catalog name: its display name is the literal character.
    pub const fn name(self) -> Option<&'static str> {
        let name = match self {
            Key::Enter => "Enter",
            Key::Backspace => "Backspace",
            Key::Tab => "Tab",
            Key::Backtab => "Backtab",
            Key::Esc => "Esc",
            Key::Backspace2 => "Backspace2",
            Key::Delete => "Delete",
            Key::Insert => "Insert",
            Key::Up => "Up",
            Key::Down => "Down",
            Key::Left => "Left",
            Key::Right => "Right",
            Key::Home => "Home",
            Key::End => "End",
            Key::PgUp => "PgUp",
            Key::PgDn => "PgDn",
            Key::CtrlSpace => "Ctrl-Space",
            Key::CtrlA => "Ctrl-A",
            Key::CtrlB => "Ctrl-B",
            Key::CtrlC => "Ctrl-C",
            Key::CtrlD => "Ctrl-D",
            Key::CtrlE => "Ctrl-E",
            Key::CtrlF => "Ctrl-F",
            Key::CtrlG => "Ctrl-G",
            Key::CtrlJ => "Ctrl-J",
            Key::CtrlK => "Ctrl-K",
            Key::CtrlL => "Ctrl-L",
            Key::CtrlN => "Ctrl-N",
            Key::CtrlO => "Ctrl-O",
            Key::CtrlP => "Ctrl-P",
            Key::CtrlQ => "Ctrl-Q",
            Key::CtrlR => "Ctrl-R",
            Key::CtrlS => "Ctrl-S",
            Key::CtrlT => "Ctrl-T",
            Key::CtrlU => "Ctrl-U",
            Key::CtrlV => "Ctrl-V",
            Key::CtrlW => "Ctrl-W",
            Key::CtrlX => "Ctrl-X",
            Key::CtrlY => "Ctrl-Y",
            Key::CtrlZ => "Ctrl-Z",
            Key::CtrlBackslash => "Ctrl-\\",
            Key::CtrlRightSq => "Ctrl-]",
            Key::CtrlCarat => "Ctrl-^",
            Key::CtrlUnderscore => "Ctrl-_",
            Key::F1 => "F1",
            Key::F2 => "F2",
            Key::F3 => "F3",
            Key::F4 => "F4",
            Key::F5 => "F5",
            Key::F6 => "F6",
            Key::F7 => "F7",
            Key::F8 => "F8",
            Key::F9 => "F9",
            Key::F10 => "F10",
            Key::F11 => "F11",
            Key::F12 => "F12",
            Key::F13 => "F13",
            Key::F14 => "F14",
            Key::F15 => "F15",
            Key::F16 => "F16",
            Key::F17 => "F17",
            Key::F18 => "F18",
            Key::F19 => "F19",
            Key::F20 => "F20",
            Key::F21 => "F21",
            Key::F22 => "F22",
            Key::F23 => "F23",
            Key::F24 => "F24",
            Key::F25 => "F25",
            Key::F26 => "F26",
            Key::F27 => "F27",
            Key::F28 => "F28",
            Key::F29 => "F29",
            Key::F30 => "F30",
            Key::F31 => "F31",
            Key::F32 => "F32",
            Key::F33 => "F33",
            Key::F34 => "F34",
            Key::F35 => "F35",
            Key::F36 => "F36",
            Key::F37 => "F37",
            Key::F38 => "F38",
            Key::F39 => "F39",
            Key::F40 => "F40",
            Key::F41 => "F41",
            Key::F42 => "F42",
            Key::F43 => "F43",
            Key::F44 => "F44",
            Key::F45 => "F45",
            Key::F46 => "F46",
            Key::F47 => "F47",
            Key::F48 => "F48",
            Key::F49 => "F49",
            Key::F50 => "F50",
            Key::F51 => "F51",
            Key::F52 => "F52",
            Key::F53 => "F53",
            Key::F54 => "F54",
            Key::F55 => "F55",
            Key::F56 => "F56",
            Key::F57 => "F57",
            Key::F58 => "F58",
            Key::F59 => "F59",
            Key::F60 => "F60",
            Key::F61 => "F61",
            Key::F62 => "F62",
            Key::F63 => "F63",
            Key::F64 => "F64",
            _ => return None,
        };
        Some(name)
    }
}

// =============================================================================
// KeyEvent
// =============================================================================

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    /// The typed character. Only meaningful when `key` is [`Key::Rune`].
    pub ch: char,
    pub modifiers: ModMask,
}

impl KeyEvent {
    /// Press of a non-printable key.
    pub const fn new(key: Key, modifiers: ModMask) -> Self {
        Self {
            key,
            ch: '\0',
            modifiers,
        }
    }

    /// Press of a printable character.
    pub const fn rune(ch: char, modifiers: ModMask) -> Self {
        Self {
            key: Key::Rune,
            ch,
            modifiers,
        }
    }

    /// User-facing description of the key press, e.g. `"Shift+Alt+x"`.
    ///
    /// Modifiers come first in Shift, Alt, Meta, Ctrl order. When Ctrl is
    /// held and the key is itself a `Ctrl-` key, the embedded prefix is
    /// dropped so the label never says Ctrl twice.
    pub fn name(&self) -> String {
        let base: Cow<'static, str> = match self.key.name() {
            Some(name) => Cow::Borrowed(name),
            None if self.key == Key::Rune => Cow::Owned(self.ch.to_string()),
            None => Cow::Borrowed(UNKNOWN),
        };

        let mods = self.modifiers.names();
        if mods.is_empty() {
            return base.into_owned();
        }

        let base: &str = &base;
        let base = if self.modifiers.contains(ModMask::CTRL) {
            base.strip_prefix(CTRL_PREFIX).unwrap_or(base)
        } else {
            base
        };
        format!("{}+{}", mods.join("+"), base)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Format a key press for display. Same as [`KeyEvent::name`].
pub fn format_key_event(event: &KeyEvent) -> String {
    event.name()
}

// =============================================================================
// Tests
// =============================================================================
