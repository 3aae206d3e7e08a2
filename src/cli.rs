// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::demos::DemoKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-kit")]
#[command(about = "Procedural 3D scene demos", long_about = None)]
pub struct Cli {
    /// Demo to run
    #[arg(long, value_enum, default_value = "earth-view")]
    pub demo: DemoKind,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Step N frames without opening a window, then exit
    #[arg(long)]
    pub headless_frames: Option<u64>,

    /// Disable the UI overlay
    #[arg(long = "no-ui")]
    pub no_ui: bool,
}
