//! Demo binary: run the full effect scene in a window.
//!
//! Run with: `cargo run`. Set `RUST_LOG` to adjust log verbosity.

use neonfx::prelude::*;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), ViewerError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    info!("launching neonfx demo scene");
    let scene = Scene::new();
    neonfx::viewer::run(scene)
}
