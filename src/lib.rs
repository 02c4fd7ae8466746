// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Letterswap: type some text, then select, drag and swap its letters

use std::path::{Path, PathBuf};

use anyhow::Context;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

mod components;
mod data;
pub mod editing;
pub mod model;
pub mod render;
pub mod settings;
mod theme;
mod views;

use data::AppState;
use settings::Settings;
use views::editor_view;

/// Entry point for the Letterswap application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("letterswap=info".parse().unwrap())
                .add_directive("wgpu=warn".parse().unwrap())
                .add_directive("naga=warn".parse().unwrap())
                .add_directive("wgpu_core=warn".parse().unwrap())
                .add_directive("wgpu_hal=warn".parse().unwrap()),
        )
        .init();

    let args = CommandLine::parse(std::env::args().skip(1));
    let settings = load_settings(args.config.as_deref());
    let mut initial_state = AppState::new(settings);

    if let Some(text) = &args.text {
        initial_state.apply_text(text);
    }

    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Parsed command line: `letterswap [TEXT] [--config PATH]`
#[derive(Debug, Default, PartialEq, Eq)]
struct CommandLine {
    text: Option<String>,
    config: Option<PathBuf>,
}

impl CommandLine {
    fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            if arg == "--config" {
                match args.next() {
                    Some(path) => parsed.config = Some(PathBuf::from(path)),
                    None => tracing::error!("--config needs a path"),
                }
            } else if parsed.text.is_none() {
                parsed.text = Some(arg);
            } else {
                tracing::warn!("Ignoring extra argument: {}", arg);
                tracing::warn!("Usage: letterswap [TEXT] [--config PATH]");
            }
        }

        parsed
    }
}

/// Load settings from `path`, or from `letterswap.toml` in the working
/// directory when no path was given
///
/// A missing default file is not an error. Anything else that goes
/// wrong is logged and the built-in defaults are used instead.
fn load_settings(path: Option<&Path>) -> Settings {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(settings::config::FILE_NAME), false),
    };

    if !explicit && !path.exists() {
        return Settings::default();
    }

    match Settings::load(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))
    {
        Ok(settings) => {
            tracing::info!("Loaded settings from {}", path.display());
            settings
        }
        Err(err) => {
            tracing::warn!("{:#}; using defaults", err);
            Settings::default()
        }
    }
}

/// Build the single-window UI
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let content = editor_view(state);

    let window_size = LogicalSize::new(960.0, 540.0);
    let window_view = window(state.main_window_id, "Letterswap", content);
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments() {
        assert_eq!(CommandLine::parse(args(&[])), CommandLine::default());
    }

    #[test]
    fn text_and_config_in_any_order() {
        let expected = CommandLine {
            text: Some("hello".to_string()),
            config: Some(PathBuf::from("custom.toml")),
        };
        assert_eq!(
            CommandLine::parse(args(&["hello", "--config", "custom.toml"])),
            expected
        );
        assert_eq!(
            CommandLine::parse(args(&["--config", "custom.toml", "hello"])),
            expected
        );
    }

    #[test]
    fn first_positional_wins() {
        let parsed = CommandLine::parse(args(&["one", "two"]));
        assert_eq!(parsed.text.as_deref(), Some("one"));
    }

    #[test]
    fn dangling_config_flag_is_ignored() {
        let parsed = CommandLine::parse(args(&["--config"]));
        assert_eq!(parsed, CommandLine::default());
    }

    #[test]
    fn unreadable_explicit_config_falls_back_to_defaults() {
        let settings = load_settings(Some(Path::new("does/not/exist/letterswap.toml")));
        assert_eq!(settings, Settings::default());
    }
}
