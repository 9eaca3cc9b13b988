//! Global keybindings, consulted before a key reaches the root widget.
//!
//! Matching is exact: the key, the modifier set and, for printable keys,
//! the character must all be equal. A [`Key::Rune`] binding without a
//! character catches every character pressed with exactly its modifiers
//! that has no binding of its own. Registering an existing binding
//! replaces its action.

use std::collections::HashMap;
use std::fmt;

use crate::event::{Key, KeyEvent, ModMask};

const ANY_RUNE: &str = "Rune";

/// The key a binding listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: Key,
    /// Literal character, only for [`Key::Rune`]. `None` on a rune
    /// binding matches any character.
    pub ch: Option<char>,
    pub modifiers: ModMask,
}

impl KeyBinding {
    /// Binding for a non-printable key. Use [`KeyBinding::rune`] for characters.
    pub const fn new(key: Key, modifiers: ModMask) -> Self {
        Self {
            key,
            ch: None,
            modifiers,
        }
    }

    pub const fn rune(ch: char, modifiers: ModMask) -> Self {
        Self {
            key: Key::Rune,
            ch: Some(ch),
            modifiers,
        }
    }

    /// Display name, formatted like the key press it matches.
    pub fn name(&self) -> String {
        match (self.key, self.ch) {
            (_, Some(ch)) => KeyEvent::rune(ch, self.modifiers).name(),
            (Key::Rune, None) => {
                let mut parts = self.modifiers.names();
                parts.push(ANY_RUNE);
                parts.join("+")
            }
            (key, None) => KeyEvent::new(key, self.modifiers).name(),
        }
    }
}

impl From<&KeyEvent> for KeyBinding {
    fn from(event: &KeyEvent) -> Self {
        Self {
            key: event.key,
            ch: (event.key == Key::Rune).then_some(event.ch),
            modifiers: event.modifiers,
        }
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A bound action. Runs on the scheduler with the root widget.
pub type Action<R> = Box<dyn FnMut(&mut R)>;

pub struct KeybindingRegistry<R> {
    bindings: HashMap<KeyBinding, Action<R>>,
}

impl<R> KeybindingRegistry<R> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `action` to `binding`. Returns true if an earlier action was replaced.
    pub fn register<F>(&mut self, binding: KeyBinding, action: F) -> bool
    where
        F: FnMut(&mut R) + 'static,
    {
        let replaced = self.bindings.insert(binding, Box::new(action)).is_some();
        log::debug!(
            "keybinding {} {}",
            binding,
            if replaced { "replaced" } else { "registered" }
        );
        replaced
    }

    /// Remove a binding. Returns true if it existed.
    pub fn unregister(&mut self, binding: &KeyBinding) -> bool {
        self.bindings.remove(binding).is_some()
    }

    pub fn contains(&self, binding: &KeyBinding) -> bool {
        self.bindings.contains_key(binding)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Display names of all bound keys, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bindings.keys().map(KeyBinding::name).collect();
        names.sort();
        names
    }

    /// The action bound to this key press, if any.
    ///
    /// A character binding wins over a catch-all rune binding.
    pub fn get_mut(&mut self, event: &KeyEvent) -> Option<&mut Action<R>> {
        let exact = KeyBinding::from(event);
        let binding = if self.bindings.contains_key(&exact) {
            exact
        } else {
            KeyBinding { ch: None, ..exact }
        };
        self.bindings.get_mut(&binding)
    }
}

impl<R> Default for KeybindingRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}
