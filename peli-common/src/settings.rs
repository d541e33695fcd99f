// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

/// Default window dimensions.
pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_TITLE: &str = "PELI";

/// SDL key name of the key that flips the displayed surface.
pub const DEFAULT_TOGGLE_KEY: &str = "Right Shift";

/// Global demo settings, populated from config INI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub window: WindowSettings,
    pub assets: AssetPaths,
    pub toggle_key: String,
    pub sprites: SpriteSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            assets: AssetPaths::default(),
            toggle_key: DEFAULT_TOGGLE_KEY.to_string(),
            sprites: SpriteSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vsync: true,
        }
    }
}

/// Image files, relative to the working directory unless absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    /// Bitmap shown while the toggler is in its default state.
    pub front: PathBuf,
    /// Bitmap shown after the toggle key flips the state.
    pub back: PathBuf,
    pub background: PathBuf,
    pub cursor: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            front: PathBuf::from("img/front.bmp"),
            back: PathBuf::from("img/back.bmp"),
            background: PathBuf::from("img/background.png"),
            cursor: PathBuf::from("img/cursor.png"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSettings {
    pub cursor_x: i32,
    pub cursor_y: i32,
    /// Frame clear color as RGB.
    pub clear_color: (u8, u8, u8),
}

impl Default for SpriteSettings {
    fn default() -> Self {
        Self {
            cursor_x: 240,
            cursor_y: 190,
            clear_color: (0xFF, 0xFF, 0xFF),
        }
    }
}

/// Parse a boolean INI value (`true`/`1`, anything else is false).
pub fn parse_bool(value: &str) -> bool {
    let v = value.trim();
    v.eq_ignore_ascii_case("true") || v == "1"
}

/// Parse an `r,g,b` triple. Returns `None` on any malformed component.
pub fn parse_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let mut parts = value.split(',').map(|p| p.trim().parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((r, g, b))
}
