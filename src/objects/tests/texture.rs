use image::{GrayImage, RgbImage, RgbaImage};
use pretty_assertions::assert_eq;

use super::super::*;
use crate::{
    backend::mock_gl::{GlCall, MockGl},
    enumerates::*,
    identifier::TextureId,
};

fn is_new_textures(call: &GlCall) -> bool {
    matches!(call, GlCall::NewTextures(_))
}

fn uploaded_format(gl: &MockGl) -> Option<(TextureFormat, Option<usize>)> {
    gl.calls().into_iter().find_map(|call| match call {
        GlCall::TexImage2D { format, bytes, .. } => Some((format, bytes)),
        _ => None,
    })
}

#[test]
fn test_negative_unit_rejected_before_allocation() {
    let gl = MockGl::new();

    let err = Texture::new(&gl, -1, TextureTarget::Texture2D).unwrap_err();
    assert!(matches!(err, TextureError::InvalidUnit(-1)));
    assert!(gl.calls().is_empty());
}

#[test]
fn test_explicit_id_skips_allocation() {
    let gl = MockGl::new();
    let texture =
        Texture::with_id(&gl, 2, TextureTarget::Texture2D, TextureId::new(15)).unwrap();

    assert_eq!(texture.id().get(), 15);
    assert_eq!(texture.unit(), Some(2));
    assert_eq!(gl.count(is_new_textures), 0);
}

#[test]
fn test_missing_id_allocates_once() {
    let gl = MockGl::new();
    let _texture = Texture::new(&gl, 0, TextureTarget::Texture2D).unwrap();

    assert_eq!(gl.calls(), vec![GlCall::NewTextures(1)]);
}

#[test]
fn test_bind_activates_unit_first() {
    let gl = MockGl::new();
    gl.queue_names(&[4]);
    let texture = Texture::new(&gl, 3, TextureTarget::Texture2D).unwrap();
    gl.clear_calls();

    texture.bind();
    assert_eq!(
        gl.calls(),
        vec![
            GlCall::ActivateTextureUnit(3),
            GlCall::BindTexture(TextureTarget::Texture2D, 4),
        ]
    );
}

#[test]
fn test_parameters_and_mipmaps_use_target() {
    let gl = MockGl::new();
    let texture = Texture::new(&gl, 0, TextureTarget::Texture2D).unwrap();
    gl.clear_calls();

    texture.set_parameter(TextureParameter::WrapS, TextureParameterValue::Repeat);
    texture.set_image(1, 1, TextureFormat::Rgba, Some(&[0u8, 0, 0, 255][..]));
    texture.generate_mipmap();
    assert_eq!(
        gl.calls(),
        vec![
            GlCall::TexParameter(
                TextureTarget::Texture2D,
                TextureParameter::WrapS,
                TextureParameterValue::Repeat
            ),
            GlCall::TexImage2D {
                target: TextureTarget::Texture2D,
                width: 1,
                height: 1,
                format: TextureFormat::Rgba,
                bytes: Some(4),
            },
            GlCall::GenerateMipmap(TextureTarget::Texture2D),
        ]
    );
}

#[test]
fn test_take_empties_source() {
    let gl = MockGl::new();
    gl.queue_names(&[6]);
    let mut source = Texture::new(&gl, 1, TextureTarget::Texture2D).unwrap();

    let taken = source.take();
    assert!(!source.id().is_valid());
    assert_eq!(source.target(), TextureTarget::Undefined);
    assert_eq!(source.unit(), None);
    assert_eq!(taken.id().get(), 6);
    assert_eq!(taken.target(), TextureTarget::Texture2D);
    assert_eq!(taken.unit(), Some(1));

    drop(source);
    assert_eq!(
        gl.count(|call| matches!(call, GlCall::DeleteTextures(_))),
        0
    );
    drop(taken);
    assert_eq!(gl.count(|call| *call == GlCall::DeleteTextures(vec![6])), 1);
}

#[test]
fn test_destroy_resets_metadata() {
    let gl = MockGl::new();
    let mut texture = Texture::new(&gl, 0, TextureTarget::Texture2D).unwrap();

    texture.destroy();
    texture.destroy();
    assert_eq!(texture.target(), TextureTarget::Undefined);
    assert_eq!(texture.unit(), None);
    assert_eq!(
        gl.count(|call| matches!(call, GlCall::DeleteTextures(_))),
        1
    );
}

#[test]
fn test_load_image_picks_format_from_channels() {
    let dir = std::env::temp_dir();

    let rgba = dir.join("glhandles-texture-rgba.png");
    RgbaImage::new(2, 3).save(&rgba).unwrap();
    let rgb = dir.join("glhandles-texture-rgb.png");
    RgbImage::new(2, 3).save(&rgb).unwrap();
    let gray = dir.join("glhandles-texture-gray.png");
    GrayImage::new(2, 3).save(&gray).unwrap();

    for (path, format) in [
        (&rgba, TextureFormat::Rgba),
        (&rgb, TextureFormat::Rgb),
        (&gray, TextureFormat::Red),
    ] {
        let gl = MockGl::new();
        let texture = Texture::new(&gl, 0, TextureTarget::Texture2D).unwrap();
        texture.load_image(path, true).unwrap();

        assert_eq!(
            uploaded_format(&gl),
            Some((format, Some(2 * 3 * format.bytes_per_pixel())))
        );
        assert_eq!(
            gl.count(|call| matches!(call, GlCall::BindTexture(..))),
            1
        );
        std::fs::remove_file(path).unwrap();
    }
}

#[test]
fn test_load_missing_image_is_io_error() {
    let gl = MockGl::new();
    let texture = Texture::new(&gl, 0, TextureTarget::Texture2D).unwrap();
    let path = std::env::temp_dir().join("glhandles-no-such-image.png");
    let _ = std::fs::remove_file(&path);

    let err = texture.load_image(&path, false).unwrap_err();
    assert!(matches!(err, TextureError::Io(_)));
    assert!(uploaded_format(&gl).is_none());
}
