use crate::libs::colored;

/// Deepest nesting level with its own style. Anything deeper is treated
/// as a wrapped continuation of a top-level value.
pub const MAX_LEVEL: usize = 3;

/// Level to style table used by the colorizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// level 0 and continuation lines
    pub top_level: String,
    /// level 1
    pub section: String,
    /// level 2
    pub subsection: String,
    /// level 3
    pub sub_subsection: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            top_level: format!("{}{}", colored::BOLD, colored::CYAN),
            section: colored::BOLD.to_string(),
            subsection: colored::GREEN.to_string(),
            sub_subsection: colored::YELLOW.to_string(),
        }
    }
}

impl Palette {
    /// Build a palette from style names such as `"bold cyan"`.
    /// An empty string leaves that level unstyled.
    pub fn from_names(
        top_level: &str,
        section: &str,
        subsection: &str,
        sub_subsection: &str,
    ) -> Result<Palette, String> {
        Ok(Palette {
            top_level: parse_style(top_level)?,
            section: parse_style(section)?,
            subsection: parse_style(subsection)?,
            sub_subsection: parse_style(sub_subsection)?,
        })
    }

    pub fn style_for(&self, level: usize) -> &str {
        match level {
            0 => &self.top_level,
            1 => &self.section,
            2 => &self.subsection,
            3 => &self.sub_subsection,
            // continuation line
            _ => &self.top_level,
        }
    }
}

/// Turn a whitespace separated list of style names into one sequence.
pub fn parse_style(names: &str) -> Result<String, String> {
    let mut seq = String::new();
    for name in names.split_whitespace() {
        match colored::style_by_name(&name.to_lowercase()) {
            Some(x) => seq.push_str(x),
            None => return Err(format!("unknown style name: {:?}", name)),
        }
    }
    Ok(seq)
}
