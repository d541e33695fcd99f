// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! What each demo draws, independent of the backend.

use std::path::Path;

use log::{error, info};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;

use crate::backend::{BlitTarget, DrawTarget, SurfaceSource, TextureHandle, TextureSource};
use crate::error::GfxError;
use crate::run_loop::InputEvent;
use crate::surface::{SurfaceSet, SurfaceSlot, Toggler};
use crate::texture::ManagedTexture;

/// Log a failed load and keep the first error while the remaining
/// loads are still attempted.
fn record_failure(first: &mut Option<GfxError>, result: Result<(), GfxError>) {
    if let Err(e) = result {
        error!("{}", e);
        first.get_or_insert(e);
    }
}

/// Two bitmaps, one on screen, flipped by a key.
pub struct ToggleScene<S> {
    surfaces: SurfaceSet<S>,
    toggler: Toggler,
}

impl<S> ToggleScene<S> {
    pub fn new(toggle_key: Keycode) -> Self {
        Self {
            surfaces: SurfaceSet::new(),
            toggler: Toggler::new(toggle_key),
        }
    }

    /// Load the default and shift bitmaps. Both are attempted and each
    /// failure is logged here; the first one is returned.
    pub fn load_media<L>(&mut self, source: &L, front: &Path, back: &Path) -> Result<(), GfxError>
    where
        L: SurfaceSource<Surface = S>,
    {
        let mut first = None;
        for (slot, path) in [(SurfaceSlot::Default, front), (SurfaceSlot::Shift, back)] {
            let loaded = source.load_surface(path).map(|surface| {
                self.surfaces.insert(slot, surface);
                info!("Loaded {} image {}", slot.label(), path.display());
            });
            record_failure(&mut first, loaded);
        }
        first.map_or(Ok(()), Err)
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        if let InputEvent::KeyDown(key) = event {
            if self.toggler.key_down(*key) {
                info!("Showing {} image", self.toggler.current().label());
            }
        }
    }

    pub fn current_slot(&self) -> SurfaceSlot {
        self.toggler.current()
    }

    pub fn surfaces(&self) -> &SurfaceSet<S> {
        &self.surfaces
    }

    /// Blit the current surface, if it loaded, then update the window.
    ///
    /// The window is updated even if the blit failed.
    pub fn draw<B>(&self, target: &mut B) -> Result<(), GfxError>
    where
        B: BlitTarget<S>,
    {
        let blitted = match self.surfaces.get(self.toggler.current()) {
            Some(surface) => target.blit(surface),
            None => Ok(()),
        };
        let updated = target.update();
        blitted.and(updated)
    }

    pub fn release(&mut self) {
        self.surfaces.release();
    }
}

/// Full-window background with a cursor sprite on top.
pub struct SpriteScene<T> {
    background: ManagedTexture<T>,
    cursor: ManagedTexture<T>,
    cursor_pos: (i32, i32),
    clear_color: Color,
}

impl<T> SpriteScene<T> {
    pub fn new(cursor_pos: (i32, i32), clear_color: Color) -> Self {
        Self {
            background: ManagedTexture::new(),
            cursor: ManagedTexture::new(),
            cursor_pos,
            clear_color,
        }
    }

    pub fn background(&self) -> &ManagedTexture<T> {
        &self.background
    }

    pub fn cursor(&self) -> &ManagedTexture<T> {
        &self.cursor
    }

    /// Free both textures, in reverse load order.
    pub fn release(&mut self) {
        self.cursor.free();
        self.background.free();
    }
}

impl<T: TextureHandle> SpriteScene<T> {
    pub fn load_media<L>(
        &mut self,
        source: &L,
        background: &Path,
        cursor: &Path,
    ) -> Result<(), GfxError>
    where
        L: TextureSource<Texture = T>,
    {
        let mut first = None;
        record_failure(&mut first, self.background.load(source, background));
        record_failure(&mut first, self.cursor.load(source, cursor));
        first.map_or(Ok(()), Err)
    }

    /// Clear, draw background then cursor, present.
    ///
    /// The frame is presented even if a copy failed.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), GfxError>
    where
        D: DrawTarget<T>,
    {
        target.clear(self.clear_color);
        let background = self.background.render(target, 0, 0);
        let (x, y) = self.cursor_pos;
        let cursor = self.cursor.render(target, x, y);
        target.present();
        background.and(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::null_backend::{NullBackend, NullTexture, Op};
    use sdl2::rect::Rect;

    const WHITE: Color = Color::RGB(0xFF, 0xFF, 0xFF);

    fn toggle_scene(backend: &NullBackend) -> ToggleScene<NullTexture> {
        backend.register_image("img/front.bmp", 640, 480);
        backend.register_image("img/back.bmp", 640, 480);
        let mut scene = ToggleScene::new(Keycode::RShift);
        scene
            .load_media(backend, Path::new("img/front.bmp"), Path::new("img/back.bmp"))
            .unwrap();
        scene
    }

    #[test]
    fn test_toggle_scene_blits_current() {
        let backend = NullBackend::new();
        let mut target = backend.clone();
        let mut scene = toggle_scene(&backend);
        backend.clear_ops();

        scene.draw(&mut target).unwrap();
        scene.handle_event(&InputEvent::KeyDown(Keycode::RShift));
        scene.draw(&mut target).unwrap();
        scene.handle_event(&InputEvent::KeyDown(Keycode::Space));
        scene.draw(&mut target).unwrap();

        assert_eq!(
            backend.ops(),
            vec![
                Op::Blit { id: 1 },
                Op::Update,
                Op::Blit { id: 2 },
                Op::Update,
                Op::Blit { id: 2 },
                Op::Update,
            ]
        );
    }

    #[test]
    fn test_toggle_scene_skips_missing_surface() {
        let backend = NullBackend::new();
        backend.register_image("img/front.bmp", 640, 480);
        let mut target = backend.clone();
        let mut scene = ToggleScene::new(Keycode::RShift);

        let err = scene
            .load_media(&backend, Path::new("img/front.bmp"), Path::new("img/back.bmp"))
            .unwrap_err();
        assert!(matches!(&err, GfxError::Decode { path, .. } if path == Path::new("img/back.bmp")));
        assert!(scene.surfaces().is_loaded(SurfaceSlot::Default));
        assert!(!scene.surfaces().is_loaded(SurfaceSlot::Shift));

        scene.handle_event(&InputEvent::KeyDown(Keycode::RShift));
        backend.clear_ops();
        scene.draw(&mut target).unwrap();
        assert_eq!(backend.ops(), vec![Op::Update]);
    }

    #[test]
    fn test_toggle_scene_returns_first_failure() {
        let backend = NullBackend::new();
        let mut scene: ToggleScene<NullTexture> = ToggleScene::new(Keycode::RShift);

        let err = scene
            .load_media(&backend, Path::new("img/front.bmp"), Path::new("img/back.bmp"))
            .unwrap_err();
        assert!(matches!(&err, GfxError::Decode { path, .. } if path == Path::new("img/front.bmp")));
        assert!(!scene.surfaces().is_loaded(SurfaceSlot::Default));
        assert!(!scene.surfaces().is_loaded(SurfaceSlot::Shift));
    }

    #[test]
    fn test_toggle_scene_release_order() {
        let backend = NullBackend::new();
        let mut scene = toggle_scene(&backend);
        backend.clear_ops();
        scene.release();
        assert_eq!(backend.ops(), vec![Op::Destroy { id: 2 }, Op::Destroy { id: 1 }]);
    }

    #[test]
    fn test_sprite_scene_frame() {
        let backend = NullBackend::new();
        backend.register_image("img/background.png", 640, 480);
        backend.register_image("img/cursor.png", 32, 32);
        let mut target = backend.clone();

        let mut scene = SpriteScene::new((240, 190), WHITE);
        scene
            .load_media(
                &backend,
                Path::new("img/background.png"),
                Path::new("img/cursor.png"),
            )
            .unwrap();
        backend.clear_ops();

        scene.draw(&mut target).unwrap();
        assert_eq!(
            backend.ops(),
            vec![
                Op::Clear(WHITE),
                Op::Copy {
                    id: 1,
                    dst: Rect::new(0, 0, 640, 480)
                },
                Op::Copy {
                    id: 2,
                    dst: Rect::new(240, 190, 32, 32)
                },
                Op::Present,
            ]
        );
    }

    #[test]
    fn test_sprite_scene_partial_media() {
        let backend = NullBackend::new();
        backend.register_image("img/cursor.png", 32, 32);
        let mut target = backend.clone();

        let mut scene = SpriteScene::new((240, 190), WHITE);
        let err = scene
            .load_media(
                &backend,
                Path::new("img/background.png"),
                Path::new("img/cursor.png"),
            )
            .unwrap_err();
        assert!(matches!(err, GfxError::Decode { .. }));
        assert!(!scene.background().is_loaded());
        assert!(scene.cursor().is_loaded());

        backend.clear_ops();
        scene.draw(&mut target).unwrap();
        assert_eq!(
            backend.ops(),
            vec![
                Op::Clear(WHITE),
                Op::Copy {
                    id: 1,
                    dst: Rect::new(240, 190, 32, 32)
                },
                Op::Present,
            ]
        );

        scene.release();
        assert_eq!(backend.live_handles(), 0);
    }

    #[test]
    fn test_toggle_scene_updates_window_after_failed_blit() {
        let backend = NullBackend::new();
        let mut target = backend.clone();
        let scene = toggle_scene(&backend);
        backend.clear_ops();
        backend.set_reject_draws(true);

        let err = scene.draw(&mut target).unwrap_err();
        assert!(matches!(err, GfxError::Draw(_)));
        assert_eq!(backend.ops(), vec![Op::Update]);
    }

    #[test]
    fn test_sprite_scene_presents_after_failed_copy() {
        let backend = NullBackend::new();
        backend.register_image("img/cursor.png", 32, 32);
        let mut target = backend.clone();
        let mut scene = SpriteScene::new((240, 190), WHITE);
        scene
            .load_media(
                &backend,
                Path::new("img/cursor.png"),
                Path::new("img/cursor.png"),
            )
            .unwrap();
        backend.clear_ops();
        backend.set_reject_draws(true);

        let err = scene.draw(&mut target).unwrap_err();
        assert!(matches!(err, GfxError::Draw(_)));
        assert_eq!(backend.ops(), vec![Op::Clear(WHITE), Op::Present]);
    }
}
