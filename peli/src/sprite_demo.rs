// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Textured scene: a background image with a cursor sprite on top.

use anyhow::{Context, Result};
use log::{info, warn};
use peli_common::Settings;
use peli_gfx::backend::sdl_backend::{drain_events, SdlTextureSource};
use peli_gfx::{App, GfxError, InputEvent, SpriteScene};
use sdl2::image::InitFlag;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;
use sdl2::EventPump;

use crate::window::{create_canvas, Platform};

struct SpriteApp<'r> {
    scene: SpriteScene<Texture<'r>>,
    canvas: Canvas<Window>,
    event_pump: EventPump,
}

impl App for SpriteApp<'_> {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        drain_events(&mut self.event_pump)
    }

    fn draw_frame(&mut self) -> Result<(), GfxError> {
        self.scene.draw(&mut self.canvas)
    }
}

pub fn run(settings: &Settings) -> Result<()> {
    let platform = Platform::init()?;
    let window = platform.create_window(&settings.window)?;
    let canvas = create_canvas(window, settings.window.vsync)?;
    let _image_context = sdl2::image::init(InitFlag::PNG)
        .map_err(GfxError::Init)
        .context("SDL_image could not initialize")?;

    let creator = canvas.texture_creator();
    let (r, g, b) = settings.sprites.clear_color;
    let mut app = SpriteApp {
        scene: SpriteScene::new(
            (settings.sprites.cursor_x, settings.sprites.cursor_y),
            Color::RGB(r, g, b),
        ),
        canvas,
        event_pump: platform.event_pump()?,
    };

    let loaded = app.scene.load_media(
        &SdlTextureSource::new(&creator),
        &settings.assets.background,
        &settings.assets.cursor,
    );
    if loaded.is_err() {
        warn!("Failed to load media!");
    }

    peli_gfx::run(&mut app);

    info!("Releasing textures");
    app.scene.release();
    Ok(())
}
