// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Closed sets of OpenGL enumerants used by the object wrappers.
//!
//! Each enum maps onto the `GLenum` values accepted by the matching
//! OpenGL entry point. `Undefined` variants stand for "not set yet"
//! and map to `GL_NONE`; they are never valid arguments to the driver.

use gl::types::*;
use serde::*;
use std::fmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    #[default]
    Undefined,
    Array,
    ElementArray,
}

impl BufferTarget {
    pub fn raw(self) -> GLenum {
        match self {
            Self::Undefined => gl::NONE,
            Self::Array => gl::ARRAY_BUFFER,
            Self::ElementArray => gl::ELEMENT_ARRAY_BUFFER,
        }
    }
}

impl fmt::Display for BufferTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.raw())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShaderType {
    Vertex,
    Fragment,
    Geometry,
}

impl ShaderType {
    pub fn raw(self) -> GLenum {
        match self {
            Self::Vertex => gl::VERTEX_SHADER,
            Self::Fragment => gl::FRAGMENT_SHADER,
            Self::Geometry => gl::GEOMETRY_SHADER,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShaderParameter {
    CompileStatus,
    InfoLogLength,
}

impl ShaderParameter {
    pub fn raw(self) -> GLenum {
        match self {
            Self::CompileStatus => gl::COMPILE_STATUS,
            Self::InfoLogLength => gl::INFO_LOG_LENGTH,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProgramParameter {
    LinkStatus,
    InfoLogLength,
    AttachedShaders,
}

impl ProgramParameter {
    pub fn raw(self) -> GLenum {
        match self {
            Self::LinkStatus => gl::LINK_STATUS,
            Self::InfoLogLength => gl::INFO_LOG_LENGTH,
            Self::AttachedShaders => gl::ATTACHED_SHADERS,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextureTarget {
    #[default]
    Undefined,
    Texture2D,
}

impl TextureTarget {
    pub fn raw(self) -> GLenum {
        match self {
            Self::Undefined => gl::NONE,
            Self::Texture2D => gl::TEXTURE_2D,
        }
    }
}

impl fmt::Display for TextureTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.raw())
    }
}

/// Pixel layout of client-side image data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    Red,
    Rgb,
    Rgba,
}

impl TextureFormat {
    pub fn raw(self) -> GLenum {
        match self {
            Self::Red => gl::RED,
            Self::Rgb => gl::RGB,
            Self::Rgba => gl::RGBA,
        }
    }

    /// Sized internal format used for storage of this layout.
    pub fn internal_format(self) -> GLenum {
        match self {
            Self::Red => gl::R8,
            Self::Rgb => gl::RGB8,
            Self::Rgba => gl::RGBA8,
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Red => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextureParameter {
    MagFilter,
    MinFilter,
    WrapS,
    WrapT,
}

impl TextureParameter {
    pub fn raw(self) -> GLenum {
        match self {
            Self::MagFilter => gl::TEXTURE_MAG_FILTER,
            Self::MinFilter => gl::TEXTURE_MIN_FILTER,
            Self::WrapS => gl::TEXTURE_WRAP_S,
            Self::WrapT => gl::TEXTURE_WRAP_T,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextureParameterValue {
    Nearest,
    Linear,
    LinearMipmapLinear,
    Repeat,
    MirroredRepeat,
    ClampToEdge,
}

impl TextureParameterValue {
    pub fn raw(self) -> GLint {
        let value = match self {
            Self::Nearest => gl::NEAREST,
            Self::Linear => gl::LINEAR,
            Self::LinearMipmapLinear => gl::LINEAR_MIPMAP_LINEAR,
            Self::Repeat => gl::REPEAT,
            Self::MirroredRepeat => gl::MIRRORED_REPEAT,
            Self::ClampToEdge => gl::CLAMP_TO_EDGE,
        };
        value as GLint
    }
}

/// Server-side capabilities toggled with `glEnable`/`glDisable`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    DepthTest,
    Blend,
    CullFace,
}

impl Feature {
    pub fn raw(self) -> GLenum {
        match self {
            Self::DepthTest => gl::DEPTH_TEST,
            Self::Blend => gl::BLEND,
            Self::CullFace => gl::CULL_FACE,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolygonMode {
    Point,
    Line,
    #[default]
    Fill,
}

impl PolygonMode {
    pub fn raw(self) -> GLenum {
        match self {
            Self::Point => gl::POINT,
            Self::Line => gl::LINE,
            Self::Fill => gl::FILL,
        }
    }
}

/// Values reported by `glGetError`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    #[default]
    NoError,
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    InvalidFramebufferOperation,
    OutOfMemory,
    /// Anything outside the core error space, e.g. stack overflow
    /// codes from newer contexts.
    Unknown(GLenum),
}

impl ErrorCode {
    pub fn from_raw(raw: GLenum) -> Self {
        match raw {
            gl::NO_ERROR => Self::NoError,
            gl::INVALID_ENUM => Self::InvalidEnum,
            gl::INVALID_VALUE => Self::InvalidValue,
            gl::INVALID_OPERATION => Self::InvalidOperation,
            gl::INVALID_FRAMEBUFFER_OPERATION => Self::InvalidFramebufferOperation,
            gl::OUT_OF_MEMORY => Self::OutOfMemory,
            other => Self::Unknown(other),
        }
    }

    pub fn raw(self) -> GLenum {
        match self {
            Self::NoError => gl::NO_ERROR,
            Self::InvalidEnum => gl::INVALID_ENUM,
            Self::InvalidValue => gl::INVALID_VALUE,
            Self::InvalidOperation => gl::INVALID_OPERATION,
            Self::InvalidFramebufferOperation => gl::INVALID_FRAMEBUFFER_OPERATION,
            Self::OutOfMemory => gl::OUT_OF_MEMORY,
            Self::Unknown(raw) => raw,
        }
    }

    pub fn is_error(self) -> bool {
        self != Self::NoError
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoError => "GL_NO_ERROR",
            Self::InvalidEnum => "GL_INVALID_ENUM",
            Self::InvalidValue => "GL_INVALID_VALUE",
            Self::InvalidOperation => "GL_INVALID_OPERATION",
            Self::InvalidFramebufferOperation => "GL_INVALID_FRAMEBUFFER_OPERATION",
            Self::OutOfMemory => "GL_OUT_OF_MEMORY",
            Self::Unknown(_) => "unknown error",
        };
        write!(f, "{name} ({:#06x})", self.raw())
    }
}
