/// When to emit color, as given by `--color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

pub fn is_stdout_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}

/// Decide whether the output gets colorized.
/// `auto` colors only a terminal, and never when `NO_COLOR` is set.
pub fn should_colorize(mode: ColorMode, no_color: bool, is_tty: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => !no_color && is_tty,
    }
}

pub fn is_stdin_path(path: &str) -> bool {
    path.is_empty() || path == "-"
}
