//! SVG sprite assembly.
//!
//! Every `*.svg` file in a directory becomes one `<symbol>` in a single hidden
//! `<svg>` document, so pages can reference icons as `icons.svg#<name>-icon`.

#[cfg(test)]
#[path = "sprite_test.rs"]
mod sprite_test;

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// `viewBox` used when an icon does not declare one.
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

/// File name of the generated sprite inside the icon directory.
pub const DEFAULT_OUTPUT_NAME: &str = "icons.svg";

static VIEW_BOX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"viewBox="([^"]+)""#).expect("literal pattern"));
static SVG_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<svg[^>]*>").expect("literal pattern"));
static XML_DECL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<\?xml[^>]*\?>").expect("literal pattern"));

#[derive(Debug, thiserror::Error)]
pub enum SpriteError {
    #[error("failed to read icon directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read icon {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write sprite {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One icon converted to a `<symbol>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    /// Source file name, kept as a comment in the sprite.
    pub file_name: String,
    pub id: String,
    pub view_box: String,
    /// Markup between the icon's `<svg>` tags.
    pub inner: String,
}

impl Symbol {
    /// Parse one icon file's contents.
    #[must_use]
    pub fn parse(file_name: &str, content: &str) -> Self {
        Self {
            file_name: file_name.to_owned(),
            id: symbol_id(file_name),
            view_box: extract_view_box(content),
            inner: extract_inner(content),
        }
    }
}

/// Combined sprite document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sprite {
    pub symbols: Vec<Symbol>,
}

impl Sprite {
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Serialize the sprite as a hidden SVG document.
    #[must_use]
    pub fn render(&self) -> String {
        let body = self
            .symbols
            .iter()
            .map(|symbol| {
                format!(
                    "\n    <!-- {} -->\n    <symbol id=\"{}\" viewBox=\"{}\">\n        {}\n    </symbol>",
                    symbol.file_name, symbol.id, symbol.view_box, symbol.inner
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("<svg xmlns=\"http://www.w3.org/2000/svg\" style=\"display: none;\">\n{body}\n</svg>")
    }
}

/// Symbol identifier for an icon file: the stem suffixed with `-icon`.
#[must_use]
pub fn symbol_id(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or(file_name);
    format!("{stem}-icon")
}

/// The icon's `viewBox` attribute, or [`DEFAULT_VIEW_BOX`].
#[must_use]
pub fn extract_view_box(content: &str) -> String {
    VIEW_BOX
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| DEFAULT_VIEW_BOX.to_owned(), |m| m.as_str().to_owned())
}

/// Everything inside the outer `<svg>` element, trimmed.
///
/// Only the first opening tag and the first closing tag are removed.
#[must_use]
pub fn extract_inner(content: &str) -> String {
    let without_decl = XML_DECL.replace(content, "");
    let without_open = SVG_OPEN.replace(&without_decl, "");
    without_open.replacen("</svg>", "", 1).trim().to_owned()
}

/// Icon files in `dir`, sorted by name.
///
/// A file named [`DEFAULT_OUTPUT_NAME`] is never an icon and is always left
/// out, as is `skip` (the sprite being written).
///
/// # Errors
///
/// Returns [`SpriteError::ReadDir`] if the directory cannot be listed.
pub fn icon_files(dir: &Path, skip: Option<&OsStr>) -> Result<Vec<PathBuf>, SpriteError> {
    let entries = fs::read_dir(dir).map_err(|source| SpriteError::ReadDir { path: dir.to_path_buf(), source })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "svg"))
        .filter(|path| {
            path.file_name()
                .is_some_and(|name| name != DEFAULT_OUTPUT_NAME && skip.is_none_or(|skip| name != skip))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Read every icon in `dir` and assemble the sprite.
///
/// # Errors
///
/// Returns [`SpriteError::ReadDir`] or [`SpriteError::ReadFile`] on I/O failure.
pub fn build_sprite(dir: &Path, skip: Option<&OsStr>) -> Result<Sprite, SpriteError> {
    let mut sprite = Sprite::default();
    for path in icon_files(dir, skip)? {
        let content = fs::read_to_string(&path).map_err(|source| SpriteError::ReadFile { path: path.clone(), source })?;
        let file_name = path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
        let symbol = Symbol::parse(&file_name, &content);
        tracing::info!(file = %symbol.file_name, id = %symbol.id, "processed icon");
        sprite.symbols.push(symbol);
    }
    if sprite.is_empty() {
        tracing::warn!(dir = %dir.display(), "no .svg icons found");
    }
    Ok(sprite)
}

/// Write the rendered sprite to `path`.
///
/// # Errors
///
/// Returns [`SpriteError::Write`] if the file cannot be written.
pub fn write_sprite(path: &Path, sprite: &Sprite) -> Result<(), SpriteError> {
    fs::write(path, sprite.render()).map_err(|source| SpriteError::Write { path: path.to_path_buf(), source })
}
