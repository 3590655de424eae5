//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() -> eyre::Result<()> {
    fengshui_cli::init_logging();
    fengshui_cli::run()?;
    Ok(())
}
