use crate::enumerates::*;

#[test]
fn test_raw_values_match_gl() {
    assert_eq!(BufferTarget::Undefined.raw(), gl::NONE);
    assert_eq!(BufferTarget::Array.raw(), gl::ARRAY_BUFFER);
    assert_eq!(BufferTarget::ElementArray.raw(), gl::ELEMENT_ARRAY_BUFFER);
    assert_eq!(ShaderType::Geometry.raw(), gl::GEOMETRY_SHADER);
    assert_eq!(TextureTarget::Texture2D.raw(), gl::TEXTURE_2D);
    assert_eq!(PolygonMode::Line.raw(), gl::LINE);
    assert_eq!(
        TextureParameterValue::LinearMipmapLinear.raw(),
        gl::LINEAR_MIPMAP_LINEAR as i32
    );
}

#[test]
fn test_texture_format_sizes() {
    assert_eq!(TextureFormat::Red.internal_format(), gl::R8);
    assert_eq!(TextureFormat::Rgb.bytes_per_pixel(), 3);
    assert_eq!(TextureFormat::Rgba.bytes_per_pixel(), 4);
}

#[test]
fn test_error_code_round_trip() {
    for code in [
        ErrorCode::NoError,
        ErrorCode::InvalidEnum,
        ErrorCode::InvalidValue,
        ErrorCode::InvalidOperation,
        ErrorCode::InvalidFramebufferOperation,
        ErrorCode::OutOfMemory,
    ] {
        assert_eq!(ErrorCode::from_raw(code.raw()), code);
    }
    assert_eq!(ErrorCode::from_raw(0x0503), ErrorCode::Unknown(0x0503));
}

#[test]
fn test_error_code_display() {
    assert_eq!(
        ErrorCode::InvalidOperation.to_string(),
        "GL_INVALID_OPERATION (0x0502)"
    );
    assert!(!ErrorCode::NoError.is_error());
    assert!(ErrorCode::OutOfMemory.is_error());
}

#[test]
fn test_targets_display_as_hex() {
    assert_eq!(BufferTarget::Array.to_string(), "0x8892");
    assert_eq!(TextureTarget::Undefined.to_string(), "0x0000");
}
