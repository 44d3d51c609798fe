// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use glam::Vec4;
use glfw::{CursorMode, OpenGlProfileHint, WindowHint};
use serde::*;
use std::{fs, io, path::Path};
use thiserror::Error;

use crate::{backend::Gl, enumerates::*};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("TOML parse error")]
    TomlParse(#[from] toml::de::Error),
}

#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorModeSetting {
    #[default]
    Normal,
    Hidden,
    Disabled,
}

impl From<CursorModeSetting> for CursorMode {
    fn from(mode: CursorModeSetting) -> Self {
        match mode {
            CursorModeSetting::Normal => CursorMode::Normal,
            CursorModeSetting::Hidden => CursorMode::Hidden,
            CursorModeSetting::Disabled => CursorMode::Disabled,
        }
    }
}

/// Window and context settings, usually read from a TOML file.
///
/// ```toml
/// title = "Triangle"
/// width = 1280
/// height = 720
/// gl_version = [4, 1]
/// clear_color = [0.1, 0.1, 0.1, 1.0]
/// polygon_mode = "line"
/// cursor_mode = "hidden"
/// ```
///
/// Missing keys take their defaults.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct WindowConfig {
    #[serde(default = "defaults::title")]
    pub title: String,

    #[serde(
        default = "defaults::width",
        deserialize_with = "validators::at_least_one"
    )]
    pub width: u32,

    #[serde(
        default = "defaults::height",
        deserialize_with = "validators::at_least_one"
    )]
    pub height: u32,

    /// OpenGL context version as `(major, minor)`.
    #[serde(default = "defaults::gl_version")]
    pub gl_version: (u32, u32),

    #[serde(default = "defaults::enabled")]
    pub core_profile: bool,

    #[serde(default = "defaults::enabled")]
    pub resizable: bool,

    /// MSAA samples. Zero disables multisampling.
    #[serde(default)]
    pub samples: u32,

    #[serde(
        default = "defaults::clear_color",
        deserialize_with = "validators::clamp_color"
    )]
    pub clear_color: [f32; 4],

    #[serde(default)]
    pub polygon_mode: PolygonMode,

    #[serde(default)]
    pub depth_test: bool,

    #[serde(default)]
    pub cursor_mode: CursorModeSetting,
}

impl WindowConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_serde_defaults() -> Self {
        toml::from_str("").unwrap_or_default()
    }

    /// Window hints matching this configuration, in application order.
    pub fn hints(&self) -> Vec<WindowHint> {
        let (major, minor) = self.gl_version;
        let profile = if self.core_profile {
            OpenGlProfileHint::Core
        } else {
            OpenGlProfileHint::Any
        };

        vec![
            WindowHint::ContextVersion(major, minor),
            WindowHint::OpenGlProfile(profile),
            WindowHint::OpenGlForwardCompat(self.core_profile),
            WindowHint::Resizable(self.resizable),
            WindowHint::Samples((self.samples > 0).then_some(self.samples)),
        ]
    }

    /// Sets clear color, polygon mode, depth test and viewport.
    pub fn apply_render_state(&self, gl: &dyn Gl) {
        gl.set_clear_color(Vec4::from_array(self.clear_color));
        gl.polygon_mode(self.polygon_mode);
        if self.depth_test {
            gl.enable(Feature::DepthTest);
        } else {
            gl.disable(Feature::DepthTest);
        }
        gl.set_viewport(self.width, self.height);
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: defaults::title(),
            width: defaults::width(),
            height: defaults::height(),
            gl_version: defaults::gl_version(),
            core_profile: defaults::enabled(),
            resizable: defaults::enabled(),
            samples: 0,
            clear_color: defaults::clear_color(),
            polygon_mode: PolygonMode::default(),
            depth_test: false,
            cursor_mode: CursorModeSetting::default(),
        }
    }
}

pub mod defaults {
    pub fn title() -> String {
        env!("CARGO_PKG_NAME").to_string()
    }

    pub fn width() -> u32 {
        800
    }

    pub fn height() -> u32 {
        600
    }

    pub fn gl_version() -> (u32, u32) {
        (4, 1)
    }

    pub fn enabled() -> bool {
        true
    }

    pub fn clear_color() -> [f32; 4] {
        [0.0, 0.0, 0.0, 1.0]
    }
}

mod validators {
    use super::*;

    pub fn at_least_one<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        Ok(value.max(1))
    }

    pub fn clamp_color<'de, D>(deserializer: D) -> Result<[f32; 4], D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <[f32; 4]>::deserialize(deserializer)?;
        Ok(value.map(|channel| channel.clamp(0.0, 1.0)))
    }
}
