// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "plane-painter")]
#[command(about = "Paint on a 3D plane; hold Space to orbit the camera", long_about = None)]
pub struct Cli {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}
