use std::borrow::Cow;

use crate::libs::colored;
use crate::palette::Palette;

/// Number of leading space characters. Tabs and anything else stop the count.
pub fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Nesting level of a line: two spaces per level, odd widths truncated.
pub fn level_of(line: &str) -> usize {
    indent_width(line) / 2
}

/// Style a single line (without its line break).
///
/// Blank and whitespace-only lines come back borrowed and untouched.
/// Otherwise the style goes right after the leading spaces and the reset
/// goes after everything else, trailing padding included.
pub fn colorize_line<'a>(line: &'a str, palette: &Palette) -> Cow<'a, str> {
    if line.trim().is_empty() {
        return Cow::Borrowed(line);
    }

    let (indent, content) = line.split_at(indent_width(line));
    let style = palette.style_for(indent.len() / 2);

    let mut result =
        String::with_capacity(line.len() + style.len() + colored::RESET.len());
    result.push_str(indent);
    result.push_str(style);
    result.push_str(content);
    result.push_str(colored::RESET);
    Cow::Owned(result)
}

/// Colorize `text` with the default palette.
pub fn colorize(text: &str) -> String {
    colorize_with(text, &Palette::default())
}

/// Colorize every line of `text` by its indentation level.
///
/// The input must already be column-aligned; line count and line breaks
/// are preserved, including a trailing newline.
pub fn colorize_with(text: &str, palette: &Palette) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(&colorize_line(line, palette));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::colored::*;
    use crate::libs::re::strip_styles;

    fn top() -> String {
        format!("{}{}", BOLD, CYAN)
    }

    #[test]
    fn test_indent_width() {
        assert_eq!(indent_width(""), 0);
        assert_eq!(indent_width("Name:"), 0);
        assert_eq!(indent_width("  Labels:"), 2);
        assert_eq!(indent_width("     x"), 5);
        assert_eq!(indent_width("    "), 4);
        assert_eq!(indent_width("\tfoo"), 0);
        assert_eq!(indent_width("  \t  foo"), 2);
    }

    #[test]
    fn test_level_of() {
        assert_eq!(level_of("Name:"), 0);
        assert_eq!(level_of(" x"), 0);
        assert_eq!(level_of("  x"), 1);
        assert_eq!(level_of("     x"), 2);
        assert_eq!(level_of("            role=db"), 6);
    }

    #[test]
    fn test_top_level_line() {
        assert_eq!(
            colorize("Name:  foo"),
            format!("{}Name:  foo{}", top(), RESET)
        );
    }

    #[test]
    fn test_section_line() {
        assert_eq!(
            colorize("  Labels:"),
            format!("  {}Labels:{}", BOLD, RESET)
        );
    }

    #[test]
    fn test_subsection_line() {
        assert_eq!(
            colorize("    app=foo"),
            format!("    {}app=foo{}", GREEN, RESET)
        );
    }

    #[test]
    fn test_sub_subsection_line() {
        assert_eq!(
            colorize("      Ready:  True"),
            format!("      {}Ready:  True{}", YELLOW, RESET)
        );
    }

    #[test]
    fn test_continuation_line() {
        assert_eq!(
            colorize("            role=db"),
            format!("            {}role=db{}", top(), RESET)
        );
        assert_eq!(
            colorize("        x"),
            format!("        {}x{}", top(), RESET)
        );
    }

    #[test]
    fn test_odd_indent_truncates() {
        assert_eq!(colorize("     x"), format!("     {}x{}", GREEN, RESET));
        assert_eq!(colorize(" x"), format!(" {}x{}", top(), RESET));
    }

    #[test]
    fn test_blank_lines_untouched() {
        assert_eq!(colorize(""), "");
        assert_eq!(colorize("   "), "   ");
        assert_eq!(colorize(" \t "), " \t ");
        assert_eq!(colorize("\n\n"), "\n\n");

        let out = colorize("A\n\nB");
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "");
        assert_eq!(lines[0], format!("{}A{}", top(), RESET));
        assert_eq!(lines[2], format!("{}B{}", top(), RESET));
    }

    #[test]
    fn test_reset_after_padding() {
        assert_eq!(
            colorize("  Key:   "),
            format!("  {}Key:   {}", BOLD, RESET)
        );
    }

    #[test]
    fn test_tab_indent_is_level_zero() {
        assert_eq!(colorize("\tfoo"), format!("{}\tfoo{}", top(), RESET));
    }

    #[test]
    fn test_trailing_newline_kept() {
        let out = colorize("Name:  foo\n");
        assert_eq!(out, format!("{}Name:  foo{}\n", top(), RESET));
    }

    #[test]
    fn test_colorize_line_borrows_blank() {
        let p = Palette::default();
        assert!(matches!(colorize_line("  ", &p), Cow::Borrowed("  ")));
        assert!(matches!(colorize_line("x", &p), Cow::Owned(_)));
    }

    #[test]
    fn test_custom_palette() {
        let p = Palette::from_names("red", "", "blue", "white").unwrap();
        let out = colorize_with("a\n  b\n    c\n      d\n          e", &p);
        let expected = format!(
            "{r}a{z}\n  b{z}\n    {b}c{z}\n      {w}d{z}\n          {r}e{z}",
            r = RED,
            b = BLUE,
            w = WHITE,
            z = RESET,
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_describe_report() {
        let text = "Name:         web-0\n\
                    Namespace:    default\n\
                    Labels:       app=web\n\
                    \x20             role=db\n\
                    Containers:\n\
                    \x20 nginx:\n\
                    \x20   Image:   nginx:1.25\n\
                    \x20   State:   Running\n\
                    \x20     Started:  Mon, 01 Jan 2024\n\
                    \n\
                    Events:  <none>\n";
        let out = colorize(text);
        assert_eq!(out.split('\n').count(), text.split('\n').count());
        assert_eq!(strip_styles(&out), text);

        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines[1], format!("{}Namespace:    default{}", top(), RESET));
        assert_eq!(lines[3], format!("              {}role=db{}", top(), RESET));
        assert_eq!(lines[5], format!("  {}nginx:{}", BOLD, RESET));
        assert_eq!(lines[6], format!("    {}Image:   nginx:1.25{}", GREEN, RESET));
        assert_eq!(
            lines[8],
            format!("      {}Started:  Mon, 01 Jan 2024{}", YELLOW, RESET)
        );
        assert_eq!(lines[9], "");
        assert_eq!(lines[11], "");
    }
}
