// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! SDL2 implementations of the backend traits.

use std::path::Path;

use log::debug;
use sdl2::event::Event;
use sdl2::image::LoadSurface;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::Window;
use sdl2::EventPump;

use super::{BlitTarget, DrawTarget, SurfaceSource, TextureHandle, TextureSource};
use crate::error::GfxError;
use crate::run_loop::InputEvent;

/// Loads PNG (or any SDL_image format) files as textures of one renderer.
///
/// `C` is the renderer's context: a window for the demo, a software
/// surface when rendering off screen.
pub struct SdlTextureSource<'r, C> {
    creator: &'r TextureCreator<C>,
}

impl<'r, C> SdlTextureSource<'r, C> {
    pub fn new(creator: &'r TextureCreator<C>) -> Self {
        Self { creator }
    }
}

impl<'r, C> TextureSource for SdlTextureSource<'r, C> {
    type Texture = Texture<'r>;

    fn load_texture(&self, path: &Path) -> Result<Texture<'r>, GfxError> {
        let surface = Surface::from_file(path).map_err(|reason| GfxError::Decode {
            path: path.to_path_buf(),
            reason,
        })?;

        // The decoded surface is freed as soon as the texture exists.
        let texture = self
            .creator
            .create_texture_from_surface(&surface)
            .map_err(|e| GfxError::Upload {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!(
            "Uploaded {} ({}x{})",
            path.display(),
            surface.width(),
            surface.height()
        );
        Ok(texture)
    }
}

impl TextureHandle for Texture<'_> {
    fn size(&self) -> (u32, u32) {
        let query = self.query();
        (query.width, query.height)
    }
}

impl<'r, R: RenderTarget> DrawTarget<Texture<'r>> for Canvas<R> {
    fn clear(&mut self, color: Color) {
        self.set_draw_color(color);
        Canvas::clear(self);
    }

    fn copy(&mut self, texture: &Texture<'r>, dst: Rect) -> Result<(), GfxError> {
        Canvas::copy(self, texture, None, dst).map_err(GfxError::Draw)
    }

    fn present(&mut self) {
        Canvas::present(self);
    }
}

/// Loads uncompressed BMP files.
#[derive(Debug, Default, Clone, Copy)]
pub struct BmpSurfaceSource;

impl SurfaceSource for BmpSurfaceSource {
    type Surface = Surface<'static>;

    fn load_surface(&self, path: &Path) -> Result<Surface<'static>, GfxError> {
        let surface = Surface::load_bmp(path).map_err(|reason| GfxError::Decode {
            path: path.to_path_buf(),
            reason,
        })?;
        debug!(
            "Loaded {} ({}x{})",
            path.display(),
            surface.width(),
            surface.height()
        );
        Ok(surface)
    }
}

/// A window's backing surface.
///
/// SDL only hands out the window surface while the event pump is alive, so
/// both are borrowed for the duration of one frame.
pub struct WindowSurfaceTarget<'a> {
    window: &'a Window,
    event_pump: &'a EventPump,
}

impl<'a> WindowSurfaceTarget<'a> {
    pub fn new(window: &'a Window, event_pump: &'a EventPump) -> Self {
        Self { window, event_pump }
    }
}

impl BlitTarget<Surface<'static>> for WindowSurfaceTarget<'_> {
    fn blit(&mut self, surface: &Surface<'static>) -> Result<(), GfxError> {
        let mut screen = self
            .window
            .surface(self.event_pump)
            .map_err(GfxError::Draw)?;
        surface
            .blit(None, &mut screen, None)
            .map(|_| ())
            .map_err(GfxError::Draw)
    }

    fn update(&mut self) -> Result<(), GfxError> {
        self.window
            .surface(self.event_pump)
            .and_then(|screen| screen.update_window())
            .map_err(GfxError::Draw)
    }
}

/// Reduce an SDL event to the inputs the demos react to.
pub fn translate_event(event: &Event) -> InputEvent {
    match event {
        Event::Quit { .. } => InputEvent::Quit,
        Event::KeyDown {
            keycode: Some(key), ..
        } => InputEvent::KeyDown(*key),
        _ => InputEvent::Other,
    }
}

/// Drain every pending event without blocking.
pub fn drain_events(event_pump: &mut EventPump) -> Vec<InputEvent> {
    event_pump
        .poll_iter()
        .map(|event| translate_event(&event))
        .collect()
}
