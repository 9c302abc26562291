use std::borrow::Cow;

use regex::Regex;

lazy_static! {
    // CSI ... m, i.e. any SGR sequence
    static ref SGR: Regex = Regex::new(r"\x1B\[[0-9;]*m").expect("valid SGR pattern");
}

/// Remove every SGR escape sequence from `text`.
pub fn strip_styles(text: &str) -> Cow<'_, str> {
    SGR.replace_all(text, "")
}

pub fn has_styles(text: &str) -> bool {
    SGR.is_match(text)
}
