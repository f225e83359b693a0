use include_dir::{include_dir, Dir};
use tera::{Error as TeraError, Tera};

// System prompt templates, one per tool
static PROMPTS: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/prompts");

/// Compile every embedded prompt template into one `Tera` instance.
///
/// Templates are registered under their file name, e.g. `health_check.md`.
pub fn load_templates() -> Result<Tera, TeraError> {
    let mut sources = Vec::new();
    for file in PROMPTS.files() {
        let Some(name) = file.path().file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(contents) = file.contents_utf8() else {
            return Err(TeraError::msg(format!("Prompt template {} is not UTF-8", name)));
        };
        sources.push((name, contents));
    }

    let mut tera = Tera::default();
    tera.add_raw_templates(sources)?;
    Ok(tera)
}
