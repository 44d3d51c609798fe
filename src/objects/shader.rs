// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use crate::{backend::Gl, enumerates::*, identifier::*};

/// Message used when a failed compile leaves an empty info log.
pub const UNSPECIFIED_COMPILE_ERROR: &str = "Shader compilation failed with unspecified error";

#[allow(clippy::enum_variant_names)]
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("Shader file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Error compiling shader: {0}")]
    CompileCallError(ErrorCode),
    #[error("Shader compile error: {0}")]
    CompileError(String),
    #[error("Error linking program: {0}")]
    LinkCallError(ErrorCode),
    #[error("Shader link error: {0}")]
    LinkError(String),
    #[error("{0}")]
    NulError(#[from] std::ffi::NulError),
    #[error("I/O error")]
    IoError(#[from] io::Error),
}

/// Owned OpenGL shader object.
///
/// A shader built from source is compiled before the constructor
/// returns. When compilation fails the shader object is deleted right
/// away and the error carries the driver's info log.
pub struct Shader<'gl> {
    gl: &'gl dyn Gl,
    id: ShaderId,
}

impl<'gl> Shader<'gl> {
    /// Creates a shader, compiling `source` when one is given.
    pub fn new(gl: &'gl dyn Gl, kind: ShaderType, source: Option<&str>) -> Result<Self, ShaderError> {
        let mut shader = Self {
            gl,
            id: gl.new_shader(kind),
        };
        log::debug!("{kind:?} shader {} created", shader.id);

        if let Some(source) = source {
            shader.compile(source)?;
        }
        Ok(shader)
    }

    /// Reads the source at `path` and compiles it.
    ///
    /// The file is read before any driver call, so a missing file never
    /// allocates a shader object.
    pub fn from_path(
        gl: &'gl dyn Gl,
        kind: ShaderType,
        path: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ShaderError::FileNotFound(path.to_path_buf()),
            _ => ShaderError::IoError(err),
        })?;
        Self::new(gl, kind, Some(&source))
    }

    pub fn id(&self) -> &ShaderId {
        &self.id
    }

    /// Moves the shader out, leaving an empty one.
    pub fn take(&mut self) -> Self {
        Self {
            gl: self.gl,
            id: self.id.take(),
        }
    }

    /// Deletes the shader now. No-op when already empty.
    pub fn destroy(&mut self) {
        if !self.id.is_valid() {
            return;
        }
        self.gl.delete_shader(&self.id);
        log::debug!("Shader {} deleted", self.id);
        self.id.clear();
    }

    fn compile(&mut self, source: &str) -> Result<(), ShaderError> {
        debug_assert!(self.id.is_valid());

        self.gl.shader_source(&self.id, &[source]);

        let result = match self.gl.compile(&self.id) {
            ErrorCode::NoError => self.compile_status(),
            code => Err(ShaderError::CompileCallError(code)),
        };

        if let Err(err) = &result {
            log::warn!("Shader {}: {err}", self.id);
            self.destroy();
        }
        result
    }

    fn compile_status(&self) -> Result<(), ShaderError> {
        let status = self.gl.shader_parameter(&self.id, ShaderParameter::CompileStatus);
        if status != gl::FALSE as i32 {
            return Ok(());
        }

        let log = self.gl.shader_info_log(&self.id);
        Err(ShaderError::CompileError(if log.is_empty() {
            UNSPECIFIED_COMPILE_ERROR.to_string()
        } else {
            log
        }))
    }
}

impl Drop for Shader<'_> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for Shader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shader")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Shader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shader id={}", self.id)
    }
}
