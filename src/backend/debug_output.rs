// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! `GL_KHR_debug` message routing, debug builds only.

use gl::types::*;
use owo_colors::OwoColorize;
use std::ffi::CStr;

pub(super) fn install() -> bool {
    if !has_debug_extension() {
        log::debug!("No GL debug extension available; debug output disabled");
        return false;
    }

    unsafe {
        gl::Enable(gl::DEBUG_OUTPUT);
        gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        gl::DebugMessageCallback(Some(on_message), std::ptr::null());
        gl::DebugMessageControl(
            gl::DONT_CARE,
            gl::DONT_CARE,
            gl::DONT_CARE,
            0,
            std::ptr::null(),
            gl::TRUE,
        );
    }
    true
}

fn has_debug_extension() -> bool {
    let mut count = 0;
    unsafe { gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut count) };

    (0..count.max(0) as GLuint).any(|index| {
        let name = unsafe { gl::GetStringi(gl::EXTENSIONS, index) };
        if name.is_null() {
            return false;
        }
        let name = unsafe { CStr::from_ptr(name as *const _) };
        matches!(
            name.to_bytes(),
            b"GL_KHR_debug" | b"GL_ARB_debug_output"
        )
    })
}

fn source_name(source: GLenum) -> &'static str {
    match source {
        gl::DEBUG_SOURCE_API => "API",
        gl::DEBUG_SOURCE_WINDOW_SYSTEM => "WINDOW_SYSTEM",
        gl::DEBUG_SOURCE_SHADER_COMPILER => "SHADER_COMPILER",
        gl::DEBUG_SOURCE_THIRD_PARTY => "THIRD_PARTY",
        gl::DEBUG_SOURCE_APPLICATION => "APPLICATION",
        gl::DEBUG_SOURCE_OTHER => "OTHER",
        _ => "UNKNOWN",
    }
}

fn type_name(type_: GLenum) -> &'static str {
    match type_ {
        gl::DEBUG_TYPE_ERROR => "ERROR",
        gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "DEPRECATED_BEHAVIOR",
        gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "UNDEFINED_BEHAVIOR",
        gl::DEBUG_TYPE_PORTABILITY => "PORTABILITY",
        gl::DEBUG_TYPE_PERFORMANCE => "PERFORMANCE",
        gl::DEBUG_TYPE_MARKER => "MARKER",
        gl::DEBUG_TYPE_PUSH_GROUP => "PUSH_GROUP",
        gl::DEBUG_TYPE_POP_GROUP => "POP_GROUP",
        _ => "OTHER",
    }
}

/// Driver severity mapped onto a log level.
fn severity_level(severity: GLenum) -> log::Level {
    match severity {
        gl::DEBUG_SEVERITY_HIGH => log::Level::Error,
        gl::DEBUG_SEVERITY_MEDIUM => log::Level::Warn,
        gl::DEBUG_SEVERITY_LOW => log::Level::Info,
        _ => log::Level::Trace,
    }
}

extern "system" fn on_message(
    source: GLenum,
    type_: GLenum,
    id: GLuint,
    severity: GLenum,
    _length: GLsizei,
    message: *const GLchar,
    _user_param: *mut std::ffi::c_void,
) {
    if message.is_null() {
        return;
    }
    let message = unsafe { CStr::from_ptr(message) }.to_string_lossy();
    log::log!(
        severity_level(severity),
        "{} source={}, type={}, id={id}: {message}",
        "[GL]".white().bold(),
        source_name(source),
        type_name(type_),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_maps_to_log_level() {
        assert_eq!(severity_level(gl::DEBUG_SEVERITY_HIGH), log::Level::Error);
        assert_eq!(severity_level(gl::DEBUG_SEVERITY_MEDIUM), log::Level::Warn);
        assert_eq!(severity_level(gl::DEBUG_SEVERITY_LOW), log::Level::Info);
        assert_eq!(
            severity_level(gl::DEBUG_SEVERITY_NOTIFICATION),
            log::Level::Trace
        );
    }

    #[test]
    fn test_unknown_enums_have_fallback_names() {
        assert_eq!(source_name(gl::DEBUG_SOURCE_SHADER_COMPILER), "SHADER_COMPILER");
        assert_eq!(source_name(0), "UNKNOWN");
        assert_eq!(type_name(gl::DEBUG_TYPE_PERFORMANCE), "PERFORMANCE");
        assert_eq!(type_name(0), "OTHER");
    }
}
