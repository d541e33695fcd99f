// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key-selected surfaces for the toggler demo.

use sdl2::keyboard::Keycode;

/// Which preloaded surface is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceSlot {
    Default,
    Shift,
}

impl SurfaceSlot {
    /// Slots in load order.
    pub const ALL: [SurfaceSlot; 2] = [SurfaceSlot::Default, SurfaceSlot::Shift];

    pub fn flipped(self) -> Self {
        match self {
            Self::Default => Self::Shift,
            Self::Shift => Self::Default,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Shift => "shift",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Default => 0,
            Self::Shift => 1,
        }
    }
}

/// One optional surface per [`SurfaceSlot`].
#[derive(Debug)]
pub struct SurfaceSet<S> {
    slots: [Option<S>; 2],
}

impl<S> SurfaceSet<S> {
    pub fn new() -> Self {
        Self {
            slots: [None, None],
        }
    }

    /// Store `surface` in `slot`, returning whatever was there before.
    pub fn insert(&mut self, slot: SurfaceSlot, surface: S) -> Option<S> {
        self.slots[slot.index()].replace(surface)
    }

    pub fn get(&self, slot: SurfaceSlot) -> Option<&S> {
        self.slots[slot.index()].as_ref()
    }

    pub fn take(&mut self, slot: SurfaceSlot) -> Option<S> {
        self.slots[slot.index()].take()
    }

    pub fn is_loaded(&self, slot: SurfaceSlot) -> bool {
        self.slots[slot.index()].is_some()
    }

    /// Drop every surface, last-loaded slot first.
    pub fn release(&mut self) {
        for slot in SurfaceSlot::ALL.iter().rev() {
            drop(self.take(*slot));
        }
    }
}

impl<S> Default for SurfaceSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-state machine flipped by a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggler {
    current: SurfaceSlot,
    toggle_key: Keycode,
}

impl Toggler {
    pub fn new(toggle_key: Keycode) -> Self {
        Self {
            current: SurfaceSlot::Default,
            toggle_key,
        }
    }

    pub fn current(&self) -> SurfaceSlot {
        self.current
    }

    /// Feed a key-down. Returns true if the current slot changed.
    pub fn key_down(&mut self, key: Keycode) -> bool {
        if key != self.toggle_key {
            return false;
        }
        self.current = self.current.flipped();
        true
    }
}
