use std::fs::File;
use std::io::Read;
use std::path::Path;

use yaml_rust::yaml;
use yaml_rust::YamlLoader;

use crate::palette::{self, Palette};
use crate::tools;

const KEYS: [&str; 4] = ["top-level", "section", "subsection", "sub-subsection"];

/// Load the palette from the default rc file location.
/// A missing file simply means the default palette.
pub fn load_default_palette() -> Result<Palette, String> {
    let rc_file = tools::get_rc_file();
    if !Path::new(&rc_file).exists() {
        log!("no rc file at {}", rc_file);
        return Ok(Palette::default());
    }
    load_palette(&rc_file)
}

/// Load the palette from `path`, which must exist.
pub fn load_palette(path: &str) -> Result<Palette, String> {
    let mut file = match File::open(path) {
        Ok(x) => x,
        Err(e) => return Err(format!("open {}: {}", path, e)),
    };
    let mut text = String::new();
    if let Err(e) = file.read_to_string(&mut text) {
        return Err(format!("read {}: {}", path, e));
    }
    log!("loading palette from {}", path);
    match parse_palette(&text) {
        Ok(x) => Ok(x),
        Err(e) => Err(format!("{}: {}", path, e)),
    }
}

/// Parse a YAML mapping like:
///
/// ```yaml
/// top-level: bold cyan
/// section: bold
/// subsection: green
/// sub-subsection: yellow
/// ```
///
/// Missing keys keep their default style; a key with no value means no style.
pub fn parse_palette(text: &str) -> Result<Palette, String> {
    let docs = match YamlLoader::load_from_str(text) {
        Ok(x) => x,
        Err(e) => return Err(format!("bad yaml: {}", e)),
    };

    let mut result = Palette::default();
    let doc = match docs.first() {
        Some(x) => x,
        None => return Ok(result),
    };
    let map = match doc {
        yaml::Yaml::Hash(h) => h,
        yaml::Yaml::Null => return Ok(result),
        _ => return Err("palette must be a mapping".to_string()),
    };

    for (k, v) in map {
        let key = match k.as_str() {
            Some(x) => x,
            None => return Err(format!("bad palette key: {:?}", k)),
        };
        let names = match v {
            yaml::Yaml::String(s) => s.as_str(),
            yaml::Yaml::Null => "",
            _ => return Err(format!("{}: expected a string of style names", key)),
        };
        let style = palette::parse_style(names).map_err(|e| format!("{}: {}", key, e))?;
        match key {
            "top-level" => result.top_level = style,
            "section" => result.section = style,
            "subsection" => result.subsection = style,
            "sub-subsection" => result.sub_subsection = style,
            _ => {
                return Err(format!(
                    "unknown palette key {:?}, expected one of {}",
                    key,
                    KEYS.join(", ")
                ));
            }
        }
    }
    Ok(result)
}
