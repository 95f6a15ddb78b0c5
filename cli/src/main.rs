//! `create-sprite`: combine individual SVG icons into one symbol sprite.
//!
//! Runs once, offline, before the site is served. Logs go to stderr so
//! `--stdout` output can be piped.

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

mod sprite;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::sprite::{DEFAULT_OUTPUT_NAME, SpriteError, build_sprite, write_sprite};

#[derive(Parser, Debug)]
#[command(name = "create-sprite", about = "Combine SVG icons into a single symbol sprite")]
struct Cli {
    /// Directory holding the individual icon files.
    #[arg(long, env = "SPRITE_INPUT_DIR", default_value = "./svg")]
    input_dir: PathBuf,

    /// Sprite file to write. Defaults to `icons.svg` inside the input directory.
    #[arg(long, env = "SPRITE_OUTPUT")]
    output: Option<PathBuf>,

    /// Print the sprite instead of writing it.
    #[arg(long, default_value_t = false)]
    stdout: bool,
}

impl Cli {
    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input_dir.join(DEFAULT_OUTPUT_NAME))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("create_sprite=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> Result<(), SpriteError> {
    let cli = Cli::parse();
    init_tracing();
    run(&cli)
}

fn run(cli: &Cli) -> Result<(), SpriteError> {
    let output = cli.output_path();
    let sprite = build_sprite(&cli.input_dir, output.file_name())?;

    if cli.stdout {
        println!("{}", sprite.render());
    } else {
        write_sprite(&output, &sprite)?;
        tracing::info!(path = %output.display(), "sprite created");
    }
    tracing::info!(count = sprite.len(), "total icons");
    Ok(())
}
