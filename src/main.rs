use anyhow::{Context, Result};

mod app;

fn main() -> Result<()> {
    let args = file_mover::cli::parse();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let result = runtime.block_on(app::run(args));
    // A producer blocked on stdin must not hold the process open.
    runtime.shutdown_background();
    result
}
