// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Driver seams.
//!
//! [`Gl`] covers the OpenGL commands issued by the object wrappers and
//! [`Windowing`] covers the window system. Each has one native
//! implementation ([`NativeGl`], [`GlfwWindowing`]) and, under `cfg(test)`
//! or the `mock` feature, one recording double.

mod driver;
mod glfw_windowing;
mod native_gl;
mod windowing;

#[cfg(debug_assertions)]
mod debug_output;

#[cfg(any(test, feature = "mock"))]
pub mod mock_gl;
#[cfg(any(test, feature = "mock"))]
pub mod mock_windowing;

pub use self::{driver::*, glfw_windowing::GlfwWindowing, native_gl::*, windowing::*};
