// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Owned wrappers around OpenGL objects.
//!
//! Each wrapper holds a `&dyn Gl` and the names it owns. Names are
//! deleted once, on drop or on an explicit `destroy()`. `take()` moves
//! ownership into a new wrapper and leaves the source empty.

mod buffer;
mod program;
mod shader;
mod texture;
mod vertex_array;

pub use buffer::Buffer;
pub use program::Program;
pub use shader::{Shader, ShaderError, UNSPECIFIED_COMPILE_ERROR};
pub use texture::{Texture, TextureError};
pub use vertex_array::{Vertex, VertexArray};
