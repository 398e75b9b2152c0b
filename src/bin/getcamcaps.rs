//! Prints the sensor's selectable still-capture modes as a JSON array.
//!
//! Exits 1 only when `v4l2-ctl` is unusable (or configuration is invalid);
//! finding no formats still prints `[]` and exits 0. Positional arguments are
//! ignored.

use anyhow::{Context, Result};
use camcaps::{Config, enumerate, logging, render_records};
use std::env;
use std::io::{self, Write};

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    parse_cli();
    let config = Config::from_env()?;
    let records = enumerate(&config)?;
    let rendered = render_records(&records)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("writing capability records to stdout")?;
    stdout.flush().context("flushing stdout")?;
    Ok(())
}

/// Only `-h`/`--help` is recognized; anything else is ignored.
fn parse_cli() {
    if env::args()
        .skip(1)
        .any(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        usage_and_exit(0);
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage: getcamcaps\n\nLists media-bus formats and frame sizes of a camera subdevice as JSON.\n\nEnvironment:\n  CAMCAPS_V4L2_CTL  v4l2-ctl program (default: v4l2-ctl)\n  CAMCAPS_DEVICE    subdevice path (default: /dev/v4l-subdev0)\n  CAMCAPS_PAD       pad number (default: 0)\n  CAMCAPS_LOG       log filter for stderr diagnostics (default: warn)"
    );
    std::process::exit(code);
}
