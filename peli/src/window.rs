// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use log::info;
use peli_common::settings::WindowSettings;
use peli_gfx::GfxError;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl, VideoSubsystem};

/// Initialised SDL with its video subsystem.
///
/// Dropping the platform shuts SDL down, so it must outlive every window
/// and resource created from it.
pub struct Platform {
    pub sdl_context: Sdl,
    pub video: VideoSubsystem,
}

impl Platform {
    pub fn init() -> Result<Self, GfxError> {
        let sdl_context = sdl2::init().map_err(GfxError::Init)?;
        let video = sdl_context.video().map_err(GfxError::Init)?;
        Ok(Self { sdl_context, video })
    }

    /// Create a shown window at an undefined position.
    pub fn create_window(&self, settings: &WindowSettings) -> Result<Window, GfxError> {
        let window = self
            .video
            .window(&settings.title, settings.width, settings.height)
            .build()
            .map_err(|e| GfxError::Window(e.to_string()))?;

        info!(
            "Created window \"{}\": {}x{}",
            settings.title, settings.width, settings.height
        );
        Ok(window)
    }

    pub fn event_pump(&self) -> Result<EventPump, GfxError> {
        self.sdl_context.event_pump().map_err(GfxError::Init)
    }
}

/// Turn `window` into a hardware-accelerated canvas.
pub fn create_canvas(window: Window, vsync: bool) -> Result<Canvas<Window>, GfxError> {
    let mut builder = window.into_canvas().accelerated();
    if vsync {
        builder = builder.present_vsync();
    }
    let canvas = builder
        .build()
        .map_err(|e| GfxError::Renderer(e.to_string()))?;

    info!("Created accelerated renderer (vsync: {})", vsync);
    Ok(canvas)
}
