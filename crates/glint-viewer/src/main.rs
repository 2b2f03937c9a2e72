mod app;
mod cli;

use anyhow::Result;
use winit::dpi::LogicalSize;

use glint_engine::device::GpuInit;
use glint_engine::logging::{init_logging, LoggingConfig};
use glint_engine::render::QuadConfig;
use glint_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    let matches = cli::command().get_matches();
    let opts = cli::parse(&matches)?;

    init_logging(LoggingConfig {
        env_filter: opts.log_filter.clone(),
        ..Default::default()
    });

    log::info!(
        "starting viewer {}x{} with {} texture(s)",
        opts.width,
        opts.height,
        opts.texture_paths.len()
    );

    let runtime_config = RuntimeConfig {
        title: opts.title.clone(),
        initial_size: LogicalSize::new(opts.width as f64, opts.height as f64),
        capture_cursor: opts.capture_cursor,
    };

    let quad_config = QuadConfig {
        texture_paths: opts.texture_paths.clone(),
    };

    Runtime::run(
        runtime_config,
        GpuInit::default(),
        app::ViewerApp::new(quad_config, opts.pulse),
    )
}
