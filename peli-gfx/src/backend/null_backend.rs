// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Null backend: no window, no GPU. Every create, draw and release is
//! appended to a shared log instead.
//!
//! Images are registered up front with their dimensions; any other path
//! fails to decode, the same way a missing file does under SDL.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use sdl2::pixels::Color;
use sdl2::rect::Rect;

use super::{BlitTarget, DrawTarget, SurfaceSource, TextureHandle, TextureSource};
use crate::error::GfxError;

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Create { id: u32, path: PathBuf },
    Destroy { id: u32 },
    Clear(Color),
    Copy { id: u32, dst: Rect },
    Present,
    Blit { id: u32 },
    Update,
}

type OpLog = Rc<RefCell<Vec<Op>>>;

/// Recording backend. Clones share the same image table and log.
#[derive(Debug, Clone, Default)]
pub struct NullBackend {
    images: Rc<RefCell<HashMap<PathBuf, (u32, u32)>>>,
    log: OpLog,
    next_id: Rc<Cell<u32>>,
    reject_uploads: Rc<Cell<bool>>,
    reject_draws: Rc<Cell<bool>>,
}

impl NullBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `path` decodable as an image of the given size.
    pub fn register_image(&self, path: impl Into<PathBuf>, width: u32, height: u32) {
        self.images.borrow_mut().insert(path.into(), (width, height));
    }

    /// Decode succeeds but every upload fails while set.
    pub fn set_reject_uploads(&self, reject: bool) {
        self.reject_uploads.set(reject);
    }

    /// Every copy and blit fails, without being logged, while set.
    pub fn set_reject_draws(&self, reject: bool) {
        self.reject_draws.set(reject);
    }

    /// Snapshot of the calls made so far.
    pub fn ops(&self) -> Vec<Op> {
        self.log.borrow().clone()
    }

    pub fn clear_ops(&self) {
        self.log.borrow_mut().clear();
    }

    /// Number of handles created and not yet released.
    pub fn live_handles(&self) -> usize {
        self.log.borrow().iter().fold(0usize, |live, op| match op {
            Op::Create { .. } => live + 1,
            Op::Destroy { .. } => live.saturating_sub(1),
            _ => live,
        })
    }

    fn create(&self, path: &Path) -> Result<NullTexture, GfxError> {
        let (width, height) = self
            .images
            .borrow()
            .get(path)
            .copied()
            .ok_or_else(|| GfxError::Decode {
                path: path.to_path_buf(),
                reason: format!("Couldn't open {}", path.display()),
            })?;

        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.log.borrow_mut().push(Op::Create {
            id,
            path: path.to_path_buf(),
        });

        Ok(NullTexture {
            id,
            width,
            height,
            log: Rc::clone(&self.log),
        })
    }
}

/// Handle produced by [`NullBackend`]. Logs `Destroy` when dropped.
#[derive(Debug)]
pub struct NullTexture {
    id: u32,
    width: u32,
    height: u32,
    log: OpLog,
}

impl Drop for NullTexture {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Op::Destroy { id: self.id });
    }
}

impl TextureHandle for NullTexture {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl TextureSource for NullBackend {
    type Texture = NullTexture;

    fn load_texture(&self, path: &Path) -> Result<NullTexture, GfxError> {
        if self.reject_uploads.get() && self.images.borrow().contains_key(path) {
            return Err(GfxError::Upload {
                path: path.to_path_buf(),
                reason: "renderer rejected texture".to_string(),
            });
        }
        self.create(path)
    }
}

impl SurfaceSource for NullBackend {
    type Surface = NullTexture;

    fn load_surface(&self, path: &Path) -> Result<NullTexture, GfxError> {
        self.create(path)
    }
}

impl DrawTarget<NullTexture> for NullBackend {
    fn clear(&mut self, color: Color) {
        self.log.borrow_mut().push(Op::Clear(color));
    }

    fn copy(&mut self, texture: &NullTexture, dst: Rect) -> Result<(), GfxError> {
        if self.reject_draws.get() {
            return Err(GfxError::Draw("copy rejected".to_string()));
        }
        self.log.borrow_mut().push(Op::Copy {
            id: texture.id,
            dst,
        });
        Ok(())
    }

    fn present(&mut self) {
        self.log.borrow_mut().push(Op::Present);
    }
}

impl BlitTarget<NullTexture> for NullBackend {
    fn blit(&mut self, surface: &NullTexture) -> Result<(), GfxError> {
        if self.reject_draws.get() {
            return Err(GfxError::Draw("blit rejected".to_string()));
        }
        self.log.borrow_mut().push(Op::Blit { id: surface.id });
        Ok(())
    }

    fn update(&mut self) -> Result<(), GfxError> {
        self.log.borrow_mut().push(Op::Update);
        Ok(())
    }
}
