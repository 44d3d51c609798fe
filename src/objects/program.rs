// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use gl::types::*;
use std::{ffi::CString, fmt};

use super::shader::*;
use crate::{
    backend::{Gl, Uniform},
    enumerates::*,
    identifier::*,
};

/// Owned OpenGL program object.
///
/// Shaders handed to [`Program::add_shader`] are attached immediately
/// and kept alive until the next successful [`Program::link`]. A failed
/// link keeps both the program and its shaders, so the caller can
/// attach replacements and link again.
pub struct Program<'gl> {
    gl: &'gl dyn Gl,
    id: ProgramId,
    shaders: Vec<Shader<'gl>>,
}

impl<'gl> Program<'gl> {
    pub fn new(gl: &'gl dyn Gl) -> Self {
        let id = gl.new_program();
        log::debug!("Program {id} created");
        Self {
            gl,
            id,
            shaders: Vec::new(),
        }
    }

    pub fn add_shader(&mut self, shader: Shader<'gl>) {
        debug_assert!(self.id.is_valid(), "attaching to an empty program");
        self.gl.attach_shader(&self.id, shader.id());
        self.shaders.push(shader);
    }

    pub fn link(&mut self) -> Result<(), ShaderError> {
        debug_assert!(self.id.is_valid(), "linking an empty program");

        let code = self.gl.link(&self.id);
        if code.is_error() {
            log::warn!("Program {}: link call failed with {code}", self.id);
            return Err(ShaderError::LinkCallError(code));
        }

        let status = self.gl.program_parameter(&self.id, ProgramParameter::LinkStatus);
        if status == gl::FALSE as i32 {
            let log = self.gl.program_info_log(&self.id);
            log::warn!("Program {} failed to link: {log}", self.id);
            return Err(ShaderError::LinkError(log));
        }

        // Linked programs no longer need their shader objects.
        self.shaders.clear();
        Ok(())
    }

    /// Number of shaders attached since the last successful link.
    pub fn shader_count(&self) -> usize {
        self.shaders.len()
    }

    pub fn uniform_location(&self, name: &str) -> Result<GLint, ShaderError> {
        debug_assert!(self.id.is_valid());
        let name = CString::new(name)?;
        Ok(self.gl.uniform_location(&self.id, &name))
    }

    /// Looks up `name` and sets it on the current program.
    ///
    /// The program must be in use. Unknown names resolve to location
    /// `-1`, which the driver silently ignores.
    pub fn set_uniform(&self, name: &str, value: impl Into<Uniform>) -> Result<(), ShaderError> {
        let location = self.uniform_location(name)?;
        self.gl.set_uniform(location, value.into());
        Ok(())
    }

    pub fn use_program(&self) {
        debug_assert!(self.id.is_valid(), "using an empty program");
        self.gl.use_program(&self.id);
    }

    pub fn id(&self) -> &ProgramId {
        &self.id
    }

    /// Moves the program and its pending shaders out, leaving an empty one.
    pub fn take(&mut self) -> Self {
        Self {
            gl: self.gl,
            id: self.id.take(),
            shaders: std::mem::take(&mut self.shaders),
        }
    }

    /// Deletes the program now. No-op when already empty.
    pub fn destroy(&mut self) {
        if !self.id.is_valid() {
            return;
        }
        self.gl.delete_program(&self.id);
        log::debug!("Program {} deleted", self.id);
        self.id.clear();
    }
}

impl PartialEq for Program<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Program<'_> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for Program<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("id", &self.id)
            .field("shaders", &self.shaders)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Program<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "program id={}", self.id)
    }
}
