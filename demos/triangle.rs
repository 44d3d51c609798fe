// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Draws a colored triangle. Escape closes the window.
//!
//! Usage: `cargo run --example triangle [config.toml]`

use glam::{Vec2, Vec3};
use glfw::{Action, Key};
use std::{cell::Cell, error::Error, path::Path, rc::Rc};

use glhandles::*;

const VERTEX_SHADER: &str = r#"
#version 410
layout(location = 0) in vec3 inPosition;
layout(location = 1) in vec2 inTexCoord;
layout(location = 2) in vec3 inNormal;

out vec3 fragColor;

void main() {
    fragColor = abs(inNormal) * 0.5 + vec3(inTexCoord, 0.5) * 0.5;
    gl_Position = vec4(inPosition, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"
#version 410
in vec3 fragColor;
out vec4 outColor;

uniform float uIntensity;

void main() {
    outColor = vec4(fragColor * uIntensity, 1.0);
}
"#;

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init()
        .unwrap();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => WindowConfig::from_toml_file(Path::new(&path))?,
        None => WindowConfig::with_serde_defaults(),
    };

    let windowing = GlfwWindowing::new()?;
    let window = Window::open(&windowing, &config)?;

    let gl = NativeGl::new();
    #[cfg(debug_assertions)]
    if !gl.enable_debug_output() {
        log::info!("OpenGL debug output not available");
    }
    config.apply_render_state(&gl);

    let mut program = Program::new(&gl);
    program.add_shader(Shader::new(&gl, ShaderType::Vertex, Some(VERTEX_SHADER))?);
    program.add_shader(Shader::new(&gl, ShaderType::Fragment, Some(FRAGMENT_SHADER))?);
    program.link()?;

    let vertex_array = VertexArray::new(&gl);
    vertex_array.load_indexed(
        &[
            Vertex::new(Vec3::new(-0.5, -0.5, 0.0), Vec2::new(0.0, 0.0), Vec3::X),
            Vertex::new(Vec3::new(0.5, -0.5, 0.0), Vec2::new(1.0, 0.0), Vec3::Y),
            Vertex::new(Vec3::new(0.0, 0.5, 0.0), Vec2::new(0.5, 1.0), Vec3::Z),
        ],
        &[0, 1, 2],
    );

    let close_requested = Rc::new(Cell::new(false));
    let flag = Rc::clone(&close_requested);
    window.set_key_callback(Box::new(move |_, key, _, action, _| {
        if key == Key::Escape && action == Action::Press {
            flag.set(true);
        }
    }));
    let resized = Rc::new(Cell::new(None));
    let size = Rc::clone(&resized);
    window.set_framebuffer_size_callback(Box::new(move |_, width: i32, height: i32| {
        size.set(Some((width.max(0) as u32, height.max(0) as u32)));
    }));

    while !window.should_close() {
        windowing.poll_events();
        if close_requested.get() {
            window.set_should_close(true);
        }
        if let Some((width, height)) = resized.take() {
            gl.set_viewport(width, height);
        }

        gl.clear();
        program.use_program();
        program.set_uniform("uIntensity", 1.0f32)?;
        vertex_array.bind();
        gl.draw_elements(3);

        let error = gl.get_error();
        if error.is_error() {
            log::warn!("OpenGL error: {error}");
        }
        window.swap_buffers();
    }

    Ok(())
}
