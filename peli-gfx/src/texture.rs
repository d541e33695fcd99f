// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Single-owner texture resource.
//!
//! Decoding and upload happen once in [`ManagedTexture::load`]; drawing is a
//! plain copy of the already uploaded pixels every frame.

use std::path::Path;

use log::debug;
use sdl2::rect::Rect;

use crate::backend::{DrawTarget, TextureHandle, TextureSource};
use crate::error::GfxError;

/// A texture slot holding at most one handle plus its cached dimensions.
///
/// Invariant: `handle` is `Some` iff `width`/`height` describe a loaded
/// image. An empty slot reports `0x0`.
#[derive(Debug)]
pub struct ManagedTexture<T> {
    handle: Option<T>,
    width: u32,
    height: u32,
}

impl<T> ManagedTexture<T> {
    pub fn new() -> Self {
        Self {
            handle: None,
            width: 0,
            height: 0,
        }
    }

    /// Release the held texture, if any. Safe to call repeatedly.
    pub fn free(&mut self) {
        if let Some(handle) = self.handle.take() {
            drop(handle);
        }
        self.width = 0;
        self.height = 0;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_loaded(&self) -> bool {
        self.handle.is_some()
    }
}

impl<T: TextureHandle> ManagedTexture<T> {
    /// Replace the held texture with the image at `path`.
    ///
    /// The previous texture is released before the new one is created, so
    /// a failed reload leaves the slot empty rather than falling back.
    pub fn load<S>(&mut self, source: &S, path: impl AsRef<Path>) -> Result<(), GfxError>
    where
        S: TextureSource<Texture = T>,
    {
        self.free();

        let path = path.as_ref();
        let handle = source.load_texture(path)?;
        let (width, height) = handle.size();
        debug!("Texture {} ready: {}x{}", path.display(), width, height);

        self.handle = Some(handle);
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Draw the whole texture with its top-left corner at `(x, y)`.
    /// Does nothing when the slot is empty.
    pub fn render<D>(&self, target: &mut D, x: i32, y: i32) -> Result<(), GfxError>
    where
        D: DrawTarget<T>,
    {
        match &self.handle {
            Some(handle) => target.copy(handle, Rect::new(x, y, self.width, self.height)),
            None => Ok(()),
        }
    }
}

impl<T> Default for ManagedTexture<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ManagedTexture<T> {
    fn drop(&mut self) {
        self.free();
    }
}
