// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bitmap toggler: shows `front` until the toggle key swaps in `back`.

use anyhow::Result;
use log::{info, warn};
use peli_common::Settings;
use peli_gfx::backend::sdl_backend::{drain_events, BmpSurfaceSource, WindowSurfaceTarget};
use peli_gfx::{App, GfxError, InputEvent, ToggleScene};
use sdl2::keyboard::Keycode;
use sdl2::surface::Surface;
use sdl2::video::Window;
use sdl2::EventPump;

use crate::window::Platform;

struct SurfaceApp {
    scene: ToggleScene<Surface<'static>>,
    window: Window,
    event_pump: EventPump,
}

impl App for SurfaceApp {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        drain_events(&mut self.event_pump)
    }

    fn handle_event(&mut self, event: &InputEvent) {
        self.scene.handle_event(event);
    }

    fn draw_frame(&mut self) -> Result<(), GfxError> {
        let mut screen = WindowSurfaceTarget::new(&self.window, &self.event_pump);
        self.scene.draw(&mut screen)
    }
}

/// Resolve the configured toggle key, falling back to right shift.
fn toggle_key(name: &str) -> Keycode {
    match Keycode::from_name(name) {
        Some(key) => key,
        None => {
            warn!("Unknown toggle key \"{}\", using Right Shift", name);
            Keycode::RShift
        }
    }
}

pub fn run(settings: &Settings) -> Result<()> {
    let platform = Platform::init()?;
    let window = platform.create_window(&settings.window)?;
    let event_pump = platform.event_pump()?;

    let key = toggle_key(&settings.toggle_key);
    let mut app = SurfaceApp {
        scene: ToggleScene::new(key),
        window,
        event_pump,
    };

    // Each failed image has already been logged by the scene.
    let loaded = app.scene.load_media(
        &BmpSurfaceSource,
        &settings.assets.front,
        &settings.assets.back,
    );
    if loaded.is_err() {
        warn!("Failed to load media!");
    }

    info!("Press {} to switch images, close the window to exit", key.name());
    peli_gfx::run(&mut app);

    info!("Releasing surfaces");
    app.scene.release();
    Ok(())
}
