// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Owned OpenGL object handles.
//!
//! Buffers, shaders, programs, textures and vertex arrays are wrapped in
//! types that delete their native object exactly once. Every OpenGL
//! command goes through the [`Gl`] trait and every window system call
//! through [`Windowing`], so the wrappers run unchanged against the
//! native backends or the recording doubles used in tests.
//!
//! ```no_run
//! use glhandles::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let windowing = GlfwWindowing::new()?;
//! let config = WindowConfig::with_serde_defaults();
//! let window = Window::open(&windowing, &config)?;
//!
//! let gl = NativeGl::new();
//! let vao = VertexArray::new(&gl);
//! vao.load(&[Vertex::default(); 3]);
//! # Ok(())
//! # }
//! ```

#[cfg(test)]
mod tests {
    mod config;
    mod enumerates;
    mod identifier;
    mod window;
}

pub mod backend;
pub mod config;
pub mod enumerates;
pub mod identifier;
pub mod objects;
pub mod window;

pub use backend::{
    Gl, GlfwWindowing, InputMode, NativeGl, Uniform, WindowError, WindowId, Windowing,
};
pub use config::{ConfigError, CursorModeSetting, WindowConfig};
pub use enumerates::*;
pub use identifier::*;
pub use objects::*;
pub use window::Window;
