//! Interactive side-by-side comparison demo.
//!
//! Run with `cargo run --example compare`. Options:
//! - `--theme <file.toml>`: restyle the snapshot export
//! - `--out <dir>`: directory for exported PNGs (default: current directory)
//!
//! Set `SNAPDIFF_LOG=debug` to write a trace log to `snapdiff.log`; logging
//! goes to a file because stderr would fight the alternate screen.

use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use snapdiff::raster::SvgRasterizer;
use snapdiff::snapshot::Theme;
use snapdiff::{App, AppConfig};

fn main() -> std::io::Result<()> {
    if let Ok(filter) = env::var("SNAPDIFF_LOG") {
        let log = File::create("snapdiff.log")?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(log))
            .with_ansi(false)
            .init();
    }

    let mut config = AppConfig::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--theme" => {
                if let Some(path) = args.next() {
                    match Theme::load(&PathBuf::from(path)) {
                        Ok(theme) => config.theme = theme,
                        Err(err) => eprintln!("ignoring theme: {err}"),
                    }
                }
            }
            "--out" => {
                if let Some(dir) = args.next() {
                    config.out_dir = PathBuf::from(dir);
                }
            }
            other => eprintln!("unknown argument: {other}"),
        }
    }

    let mut rasterizer = SvgRasterizer::new();
    if let Some(font) = &config.theme.font_file {
        rasterizer = rasterizer.with_font_file(font);
    }

    App::new(config).run(&rasterizer)
}
