use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use indentcolor::libs::progopts::{self, ColorMode};
use indentcolor::libs::re;
use indentcolor::{log, println_stderr, rcfile, tools};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    ")"
);

/// Color indentation-formatted reports by nesting level.
#[derive(Parser, Debug)]
#[command(name = "indentcolor", version, long_version = LONG_VERSION)]
struct Args {
    /// Report to read; stdin when absent or "-"
    file: Option<String>,

    /// When to emit color
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Palette file (YAML); defaults to $INDENTCOLOR_RC or
    /// ~/.config/indentcolor/palette.yaml
    #[arg(long, value_name = "PATH")]
    palette: Option<String>,

    /// Remove styling instead of adding it
    #[arg(long, conflicts_with_all = ["color", "palette"])]
    strip: bool,
}

fn read_input(file: &Option<String>) -> io::Result<String> {
    let path = file.as_deref().unwrap_or("-");
    if progopts::is_stdin_path(path) {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn write_output(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()
}

fn main() {
    let args = Args::parse();

    let text = match read_input(&args.file) {
        Ok(x) => x,
        Err(e) => {
            println_stderr!("indentcolor: read input: {}", e);
            process::exit(1);
        }
    };
    log!("read {} bytes, {} lines", text.len(), text.split('\n').count());

    let output = if args.strip {
        log!("strip, input styled: {}", re::has_styles(&text));
        indentcolor::strip_styles(&text).into_owned()
    } else {
        let is_tty = progopts::is_stdout_tty();
        let no_color = tools::no_color_requested();
        let enabled = progopts::should_colorize(args.color, no_color, is_tty);
        log!("color={:?} tty={} no_color={} -> {}", args.color, is_tty, no_color, enabled);

        if enabled {
            let palette = match &args.palette {
                Some(path) => rcfile::load_palette(path),
                None => rcfile::load_default_palette(),
            };
            let palette = match palette {
                Ok(x) => x,
                Err(e) => {
                    println_stderr!("indentcolor: {}", e);
                    process::exit(2);
                }
            };
            indentcolor::colorize_with(&text, &palette)
        } else {
            text
        }
    };

    if let Err(e) = write_output(&output) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return;
        }
        println_stderr!("indentcolor: write output: {}", e);
        process::exit(1);
    }
}
