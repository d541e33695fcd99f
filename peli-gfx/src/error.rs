// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by window setup, media loading and drawing.
///
/// Each variant carries the platform's own error string. None of them are
/// fatal by themselves; callers log and carry on with whatever did load.
#[derive(Debug, Error)]
pub enum GfxError {
    #[error("SDL could not initialize! SDL Error: {0}")]
    Init(String),
    #[error("Window could not be created! SDL Error: {0}")]
    Window(String),
    #[error("Renderer could not be created! SDL Error: {0}")]
    Renderer(String),
    #[error("Unable to load image {}! SDL Error: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("Unable to create texture from {}! SDL Error: {reason}", .path.display())]
    Upload { path: PathBuf, reason: String },
    #[error("Draw failed: {0}")]
    Draw(String),
}
