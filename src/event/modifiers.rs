//! Modifier keys that can accompany a key press or a mouse action.

bitflags::bitflags! {
    /// A set of held modifier keys.
    ///
    /// Flags are independent: any combination is valid. Combine with bitwise
    /// OR: `ModMask::SHIFT | ModMask::ALT`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModMask: u8 {
        const NONE  = 0;
        const SHIFT = 1 << 0;
        const CTRL  = 1 << 1;
        const ALT   = 1 << 2;
        const META  = 1 << 3;
    }
}

/// Display order used when a modifier set is written out.
const DISPLAY_ORDER: [(ModMask, &str); 4] = [
    (ModMask::SHIFT, "Shift"),
    (ModMask::ALT, "Alt"),
    (ModMask::META, "Meta"),
    (ModMask::CTRL, "Ctrl"),
];

impl ModMask {
    /// Decode an xterm-style CSI modifier parameter (1-based).
    pub fn from_xterm_param(param: u32) -> Self {
        let val = param.saturating_sub(1);
        let mut m = ModMask::NONE;
        if val & 1 != 0 {
            m |= ModMask::SHIFT;
        }
        if val & 2 != 0 {
            m |= ModMask::ALT;
        }
        if val & 4 != 0 {
            m |= ModMask::CTRL;
        }
        if val & 8 != 0 {
            m |= ModMask::META;
        }
        m
    }

    /// Names of the set flags, always in Shift, Alt, Meta, Ctrl order.
    pub fn names(self) -> Vec<&'static str> {
        DISPLAY_ORDER
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}
