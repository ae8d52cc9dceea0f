// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Headless Kestrel playground.
//! Loads the `scene` config, composes its transform pipeline and logs where
//! each sample point lands.

mod config;
mod scene;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigService, FsConfigStore};

#[derive(Parser, Debug)]
#[command(author, version, about = "Kestrel math playground")]
struct Args {
    /// Directory holding `scene.json` (defaults to the platform config directory)
    #[arg(long)]
    config_dir: Option<PathBuf>,
    /// Write the built-in scene to the config directory when none is stored
    #[arg(long)]
    save_default: bool,
}

/// Directives from `RUST_LOG` when given, `info` otherwise. Unparsable
/// directives are skipped.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let store = match args.config_dir {
        Some(dir) => FsConfigStore::with_base(dir.clone())
            .with_context(|| format!("failed to open config dir {}", dir.display()))?,
        None => FsConfigStore::new().context("failed to open platform config dir")?,
    };
    info!(path = %store.path_for(scene::SCENE_KEY).display(), "scene config");
    let service = ConfigService::new(store);

    let scene = scene::load_or_default(&service, args.save_default)
        .context("failed to load scene config")?;
    let transform = scene.build_transform();
    info!(
        steps = scene.pipeline.len(),
        matrix = %transform.matrix(),
        "composed pipeline"
    );

    for point in &scene.points {
        let output = transform.transform(*point);
        if scene::is_finite(output) {
            info!(input = %point, output = %output, "transformed point");
        } else {
            warn!(input = %point, output = %output, "pipeline is degenerate for this point");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn log_filter_keeps_a_requested_global_level() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn log_filter_keeps_target_directives() {
        let filter = log_filter(Some("kestrel_playground=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
