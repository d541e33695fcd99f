// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Graphics layer for the peli demos.
//!
//! Owns the texture wrapper, the surface toggler, both scenes and the frame
//! loop. SDL2 is reached only through the traits in [`backend`].

pub mod backend;
pub mod error;
pub mod run_loop;
pub mod scene;
pub mod surface;
pub mod texture;

pub use error::GfxError;
pub use run_loop::{run, App, InputEvent, RunState, RunStats};
pub use scene::{SpriteScene, ToggleScene};
pub use surface::{SurfaceSet, SurfaceSlot, Toggler};
pub use texture::ManagedTexture;
