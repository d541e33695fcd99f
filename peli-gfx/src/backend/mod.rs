// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rendering backend abstraction.
//!
//! The scenes and the texture wrapper only talk to these traits. The SDL2
//! implementations live in `sdl_backend`; `null_backend` records every call
//! so resource lifecycles can be checked without a display.

pub mod null_backend;
pub mod sdl_backend;

use std::path::Path;

use sdl2::pixels::Color;
use sdl2::rect::Rect;

use crate::error::GfxError;

/// An owned, renderer-resident image. Dropping the handle releases it.
pub trait TextureHandle {
    /// Pixel dimensions as `(width, height)`.
    fn size(&self) -> (u32, u32);
}

/// Decodes image files and uploads them as textures.
pub trait TextureSource {
    type Texture: TextureHandle;

    fn load_texture(&self, path: &Path) -> Result<Self::Texture, GfxError>;
}

/// Decodes image files into CPU-side surfaces.
pub trait SurfaceSource {
    type Surface;

    fn load_surface(&self, path: &Path) -> Result<Self::Surface, GfxError>;
}

/// Hardware-accelerated frame target.
pub trait DrawTarget<T> {
    fn clear(&mut self, color: Color);
    /// Copy the whole of `texture` into `dst`.
    fn copy(&mut self, texture: &T, dst: Rect) -> Result<(), GfxError>;
    fn present(&mut self);
}

/// Software frame target: a window's backing surface.
pub trait BlitTarget<S> {
    /// Copy `surface` onto the target unscaled, anchored at the origin.
    fn blit(&mut self, surface: &S) -> Result<(), GfxError>;
    /// Push the target surface to the screen.
    fn update(&mut self) -> Result<(), GfxError>;
}
