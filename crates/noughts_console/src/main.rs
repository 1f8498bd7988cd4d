//! Interactive console noughts & crosses.
//!
//! A single interactive session with no flags: two players at one
//! keyboard, alternating row/column entry until someone wins or the
//! board fills.

use anyhow::Result;
use noughts_console::Presenter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the rendered board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    Presenter::new(stdin, stdout).run()?;

    Ok(())
}
