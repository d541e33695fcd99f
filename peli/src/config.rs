// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use ini::Ini;
use log::{debug, info, warn};
use peli_common::settings::{parse_bool, parse_rgb, Settings};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "peli.ini";

/// Locate a peli.ini: working directory first, then the user config dir.
pub fn find_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    // XDG_CONFIG_HOME
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(&xdg).join("peli").join(CONFIG_FILE);
        if path.exists() {
            return Some(path);
        }
    }

    // ~/.config/peli/peli.ini
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(&home)
            .join(".config")
            .join("peli")
            .join(CONFIG_FILE);
        if path.exists() {
            return Some(path);
        }
    }

    None
}

/// Load settings, falling back to defaults for anything missing or broken.
pub fn load_config(path: Option<&PathBuf>) -> Settings {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                warn!("Config file not found: {}", p.display());
                return Settings::default();
            }
            p.clone()
        }
        None => match find_config_path() {
            Some(p) => p,
            None => {
                info!("No config found, using defaults");
                return Settings::default();
            }
        },
    };

    load_from_file(&config_path)
}

fn load_from_file(path: &Path) -> Settings {
    info!("Loading config from: {}", path.display());

    match Ini::load_from_file(path) {
        Ok(conf) => apply(&conf),
        Err(e) => {
            warn!("Failed to parse config: {}", e);
            Settings::default()
        }
    }
}

fn apply(conf: &Ini) -> Settings {
    let mut settings = Settings::default();

    // [Window]
    if let Some(section) = conf.section(Some("Window")) {
        if let Some(title) = section.get("title") {
            settings.window.title = title.to_string();
        }
        if let Some(width) = section.get("width") {
            settings.window.width = width.trim().parse().unwrap_or(settings.window.width);
        }
        if let Some(height) = section.get("height") {
            settings.window.height = height.trim().parse().unwrap_or(settings.window.height);
        }
        if let Some(vsync) = section.get("vsync") {
            settings.window.vsync = parse_bool(vsync);
        }
    }

    // [Assets]
    if let Some(section) = conf.section(Some("Assets")) {
        let assets = &mut settings.assets;
        for (key, slot) in [
            ("front", &mut assets.front),
            ("back", &mut assets.back),
            ("background", &mut assets.background),
            ("cursor", &mut assets.cursor),
        ] {
            if let Some(value) = section.get(key) {
                *slot = PathBuf::from(value.trim());
                debug!("Asset {}: {}", key, slot.display());
            }
        }
    }

    // [Input]
    if let Some(section) = conf.section(Some("Input")) {
        if let Some(key) = section.get("toggle_key") {
            settings.toggle_key = key.trim().to_string();
        }
    }

    // [Sprites]
    if let Some(section) = conf.section(Some("Sprites")) {
        if let Some(x) = section.get("cursor_x") {
            settings.sprites.cursor_x = x.trim().parse().unwrap_or(settings.sprites.cursor_x);
        }
        if let Some(y) = section.get("cursor_y") {
            settings.sprites.cursor_y = y.trim().parse().unwrap_or(settings.sprites.cursor_y);
        }
        if let Some(color) = section.get("clear_color") {
            match parse_rgb(color) {
                Some(rgb) => settings.sprites.clear_color = rgb,
                None => warn!("Ignoring malformed clear_color \"{}\"", color),
            }
        }
    }

    settings
}
