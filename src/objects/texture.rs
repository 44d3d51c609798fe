// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use image::{ColorType, GenericImageView};
use std::{fmt, io, path::Path};

use crate::{backend::Gl, enumerates::*, identifier::*};

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("Invalid texture unit {0}, must be >= 0")]
    InvalidUnit(i32),
    #[error("Failed to decode image: {0}")]
    Image(image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<image::ImageError> for TextureError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(err) => Self::Io(err),
            err => Self::Image(err),
        }
    }
}

/// Owned OpenGL texture object bound to a fixed texture unit.
pub struct Texture<'gl> {
    gl: &'gl dyn Gl,
    id: TextureId,
    target: TextureTarget,
    unit: Option<u32>,
}

impl<'gl> Texture<'gl> {
    pub fn new(gl: &'gl dyn Gl, unit: i32, target: TextureTarget) -> Result<Self, TextureError> {
        Self::with_id(gl, unit, target, TextureId::default())
    }

    /// Adopts `id`, or allocates a fresh texture when `id` is zero.
    ///
    /// A negative `unit` is rejected before anything is allocated.
    pub fn with_id(
        gl: &'gl dyn Gl,
        unit: i32,
        target: TextureTarget,
        id: TextureId,
    ) -> Result<Self, TextureError> {
        let unit = u32::try_from(unit).map_err(|_| TextureError::InvalidUnit(unit))?;

        let id = if id.is_valid() {
            id
        } else {
            gl.new_textures(1).into_iter().next().unwrap_or_default()
        };
        log::debug!("Texture {id} created on unit {unit} with target {target}");

        Ok(Self {
            gl,
            id,
            target,
            unit: Some(unit),
        })
    }

    /// Activates the texture unit, then binds the texture to its target.
    pub fn bind(&self) {
        debug_assert!(self.id.is_valid(), "binding an empty texture");
        debug_assert!(
            self.target != TextureTarget::Undefined,
            "binding a texture without target"
        );
        if let Some(unit) = self.unit {
            self.gl.activate_texture_unit(unit);
        }
        self.gl.bind_texture(self.target, &self.id);
    }

    /// Defines level 0 of the bound texture. `None` allocates storage only.
    pub fn set_image(&self, width: u32, height: u32, format: TextureFormat, data: Option<&[u8]>) {
        if let Some(data) = data {
            debug_assert_eq!(
                data.len(),
                width as usize * height as usize * format.bytes_per_pixel(),
                "texel data does not match {width}x{height} {format:?}"
            );
        }
        self.gl.tex_image_2d(self.target, width, height, format, data);
    }

    pub fn generate_mipmap(&self) {
        self.gl.generate_mipmap(self.target);
    }

    pub fn set_parameter(&self, name: TextureParameter, value: TextureParameterValue) {
        self.gl.tex_parameter(self.target, name, value);
    }

    /// Decodes the image at `path` and uploads it into this texture.
    ///
    /// 8-bit grayscale images become single-channel red textures, images
    /// with any alpha channel become RGBA and the rest RGB. The texture is
    /// left bound.
    pub fn load_image(&self, path: impl AsRef<Path>, vflip: bool) -> Result<(), TextureError> {
        let path = path.as_ref();
        let img = image::open(path)?;
        let img = if vflip { img.flipv() } else { img };
        let (width, height) = img.dimensions();

        let (format, texels) = if img.color() == ColorType::L8 {
            (TextureFormat::Red, img.to_luma8().into_raw())
        } else if img.color().has_alpha() {
            (TextureFormat::Rgba, img.to_rgba8().into_raw())
        } else {
            (TextureFormat::Rgb, img.to_rgb8().into_raw())
        };

        self.bind();
        self.set_image(width, height, format, Some(texels.as_slice()));

        log::debug!(
            "Texture {} loaded from {} ({width}x{height})",
            self.id,
            path.display()
        );
        Ok(())
    }

    pub fn id(&self) -> &TextureId {
        &self.id
    }

    pub fn target(&self) -> TextureTarget {
        self.target
    }

    pub fn unit(&self) -> Option<u32> {
        self.unit
    }

    /// Moves the texture out, leaving an empty one with no target or unit.
    pub fn take(&mut self) -> Self {
        Self {
            gl: self.gl,
            id: self.id.take(),
            target: std::mem::take(&mut self.target),
            unit: self.unit.take(),
        }
    }

    /// Deletes the texture now. No-op when already empty.
    pub fn destroy(&mut self) {
        if !self.id.is_valid() {
            return;
        }
        self.gl.delete_textures(std::slice::from_ref(&self.id));
        log::debug!("Texture {} deleted", self.id);
        self.id.clear();
        self.target = TextureTarget::Undefined;
        self.unit = None;
    }
}

impl Drop for Texture<'_> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for Texture<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id)
            .field("target", &self.target)
            .field("unit", &self.unit)
            .finish_non_exhaustive()
    }
}
