use std::env;
use std::path::Path;

#[macro_export]
macro_rules! println_stderr {
    ($fmt:expr) => (
        match writeln!(&mut ::std::io::stderr(), $fmt) {
            Ok(_) => {}
            Err(e) => println!("write to stderr failed: {:?}", e)
        }
    );
    ($fmt:expr, $($arg:tt)*) => (
        match writeln!(&mut ::std::io::stderr(), $fmt, $($arg)*) {
            Ok(_) => {}
            Err(e) => println!("write to stderr failed: {:?}", e)
        }
    );
}

pub fn get_user_home() -> String {
    match env::var("HOME") {
        Ok(x) => x,
        Err(e) => {
            log!("indentcolor: env HOME error: {:?}", e);
            String::new()
        }
    }
}

/// Where the palette file is looked up when none is given on the command line.
pub fn get_rc_file() -> String {
    if let Ok(x) = env::var("INDENTCOLOR_RC") {
        if !x.is_empty() {
            return x;
        }
    }
    let home = get_user_home();
    let dir = Path::new(&home).join(".config").join("indentcolor");
    dir.join("palette.yaml").to_string_lossy().to_string()
}

/// `NO_COLOR` counts only when set to a non-empty value.
pub fn no_color_requested() -> bool {
    match env::var_os("NO_COLOR") {
        Some(x) => !x.is_empty(),
        None => false,
    }
}
