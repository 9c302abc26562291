// plain SGR sequences; output goes to a stream, so no '\x01'/'\x02'
// wrapping as a line editor prompt would need.
// full list - https://misc.flogisoft.com/bash/tip_colors_and_formatting
pub const RESET: &str = "\x1B[0m";
pub const BOLD: &str = "\x1B[1m";
pub const UNDERLINED: &str = "\x1B[4m";

pub const BLACK: &str = "\x1B[30m";
pub const RED: &str = "\x1B[31m";
pub const GREEN: &str = "\x1B[32m";
pub const YELLOW: &str = "\x1B[33m";
pub const BLUE: &str = "\x1B[34m";
pub const MAGENTA: &str = "\x1B[35m";
pub const CYAN: &str = "\x1B[36m";
pub const GRAY: &str = "\x1B[90m";
pub const WHITE: &str = "\x1B[97m";

pub const BLACK_B: &str = "\x1B[30m\x1B[1m";
pub const RED_B: &str = "\x1B[31m\x1B[1m";
pub const GREEN_B: &str = "\x1B[32m\x1B[1m";
pub const YELLOW_B: &str = "\x1B[33m\x1B[1m";
pub const BLUE_B: &str = "\x1B[34m\x1B[1m";
pub const CYAN_B: &str = "\x1B[36m\x1B[1m";
pub const WHITE_B: &str = "\x1B[97m\x1B[1m";

/// Look up a style by its lower-case name, e.g. `"cyan"` or `"green_b"`.
pub fn style_by_name(name: &str) -> Option<&'static str> {
    let seq = match name {
        "reset" => RESET,
        "bold" => BOLD,
        "underlined" => UNDERLINED,
        "black" => BLACK,
        "red" => RED,
        "green" => GREEN,
        "yellow" => YELLOW,
        "blue" => BLUE,
        "magenta" => MAGENTA,
        "cyan" => CYAN,
        "gray" | "grey" => GRAY,
        "white" => WHITE,
        "black_b" => BLACK_B,
        "red_b" => RED_B,
        "green_b" => GREEN_B,
        "yellow_b" => YELLOW_B,
        "blue_b" => BLUE_B,
        "cyan_b" => CYAN_B,
        "white_b" => WHITE_B,
        _ => return None,
    };
    Some(seq)
}
