use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::FormError;

pub const FILE_EXTENSION: &str = "txt";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("placeholder pattern is valid"));

/// Sanitize filename to remove invalid characters
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            _ => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

fn placeholder_value<'a>(key: &str, name: &'a str, author: &'a str) -> Option<&'a str> {
    match key {
        "name" => Some(name),
        "author" => Some(author),
        _ => None,
    }
}

/// Fill `{name}` and `{author}` into the filename format.
///
/// Any other placeholder is an error. The result is sanitized and must not
/// be empty.
pub fn render_filename(format: &str, name: &str, author: &str) -> Result<String, FormError> {
    if let Some(caps) = PLACEHOLDER
        .captures_iter(format)
        .find(|caps| placeholder_value(&caps[1], name, author).is_none())
    {
        return Err(FormError::UnknownPlaceholder(caps[1].to_string()));
    }

    let rendered = PLACEHOLDER.replace_all(format, |caps: &Captures| {
        placeholder_value(&caps[1], name, author)
            .unwrap_or_default()
            .to_string()
    });

    let sanitized = sanitize_filename(&rendered);
    let filename = trim_filename(&sanitized);
    if filename.is_empty() {
        return Err(FormError::EmptyFilename);
    }
    Ok(filename.to_string())
}

fn trim_filename(filename: &str) -> &str {
    filename.trim_matches(|c| c == '.' || c == ' ')
}

/// Lenient variant of [`render_filename`] for the live preview: unknown
/// placeholders are left as typed.
pub fn preview_filename(format: &str, name: &str, author: &str) -> String {
    let rendered = PLACEHOLDER.replace_all(format, |caps: &Captures| {
        placeholder_value(&caps[1], name, author)
            .map(str::to_string)
            .unwrap_or_else(|| caps[0].to_string())
    });
    trim_filename(&sanitize_filename(&rendered)).to_string()
}

pub fn build_filepath(save_dir: Option<&Path>, filename: &str) -> PathBuf {
    let file = format!("{}.{}", filename, FILE_EXTENSION);
    match save_dir {
        Some(dir) => dir.join(file),
        None => PathBuf::from(file),
    }
}
