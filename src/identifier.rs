// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed OpenGL object names.
//!
//! OpenGL hands out plain `GLuint` names for every object kind. An
//! [`Identifier`] tags such a name with the kind of object it refers
//! to, so a buffer name can never be passed where a texture name is
//! expected. Zero is the "no object" name for every kind.

use gl::types::*;
use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// Marker types naming the OpenGL object kinds.
pub mod kind {
    /// Implemented by every identifier kind marker.
    pub trait Kind {
        const NAME: &'static str;
    }

    pub enum Buffer {}
    pub enum Shader {}
    pub enum Program {}
    pub enum Texture {}
    pub enum VertexArray {}

    impl Kind for Buffer {
        const NAME: &'static str = "Buffer";
    }

    impl Kind for Shader {
        const NAME: &'static str = "Shader";
    }

    impl Kind for Program {
        const NAME: &'static str = "Program";
    }

    impl Kind for Texture {
        const NAME: &'static str = "Texture";
    }

    impl Kind for VertexArray {
        const NAME: &'static str = "VertexArray";
    }
}

pub type BufferId = Identifier<kind::Buffer>;
pub type ShaderId = Identifier<kind::Shader>;
pub type ProgramId = Identifier<kind::Program>;
pub type TextureId = Identifier<kind::Texture>;
pub type VertexArrayId = Identifier<kind::VertexArray>;

/// OpenGL object name tagged with its object kind.
///
/// The identifier is a plain value: it does not own the object it
/// names and never talks to the driver. Ownership lives in the
/// wrappers under [`crate::objects`].
pub struct Identifier<K> {
    raw: GLuint,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Identifier<K> {
    pub const fn new(raw: GLuint) -> Self {
        Self {
            raw,
            _kind: PhantomData,
        }
    }

    /// Raw OpenGL name.
    pub const fn get(&self) -> GLuint {
        self.raw
    }

    /// Returns `true` for any name other than zero.
    pub const fn is_valid(&self) -> bool {
        self.raw != 0
    }

    /// Moves the name out, leaving zero behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn clear(&mut self) {
        self.raw = 0;
    }
}

impl<K> Default for Identifier<K> {
    fn default() -> Self {
        Self::new(0)
    }
}

// Manual impls: derives would require `K` itself to implement the trait.
impl<K> Clone for Identifier<K> {
    fn clone(&self) -> Self {
        Self::new(self.raw)
    }
}

impl<K> PartialEq for Identifier<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K> Eq for Identifier<K> {}

impl<K> Hash for Identifier<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<K> From<GLuint> for Identifier<K> {
    fn from(raw: GLuint) -> Self {
        Self::new(raw)
    }
}

impl<K> From<Identifier<K>> for GLuint {
    fn from(id: Identifier<K>) -> Self {
        id.raw
    }
}

impl<K> From<&Identifier<K>> for GLuint {
    fn from(id: &Identifier<K>) -> Self {
        id.raw
    }
}

impl<K: kind::Kind> fmt::Debug for Identifier<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Id({})", K::NAME, self.raw)
    }
}

impl<K> fmt::Display for Identifier<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
