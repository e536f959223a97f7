//! Resolución del tipo MIME a partir de la extensión del nombre de archivo.

use super::result::{GENERIC_MAJOR, GENERIC_MINOR, Mime};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Tabla cerrada extensión → (tipo, subtipo). La comparación distingue mayúsculas.
pub const EXTENSION_TABLE: [(&str, &str, &str); 25] = [
    ("js", "application", "javascript"),
    ("css", "text", "css"),
    ("htm", "text", "html"),
    ("html", "text", "html"),
    ("jpg", "image", "jpeg"),
    ("jpeg", "image", "jpeg"),
    ("png", "image", "png"),
    ("gif", "image", "gif"),
    ("jar", "application", "jar"),
    ("pdf", "application", "pdf"),
    ("webp", "image", "webp"),
    ("tif", "image", "tiff"),
    ("tiff", "image", "tiff"),
    ("bmp", "image", "bmp"),
    ("ico", "image", "x-icon"),
    ("gz", "application", "gzip"),
    ("tar", "application", "tar"),
    ("zip", "application", "zip"),
    ("txt", "text", "plain"),
    ("rss", "application", "rss+xml"),
    ("atom", "application", "atom+xml"),
    ("xml", "text", "xml"),
    ("json", "application", "json"),
    ("war", "application", "octet-stream"),
    ("svg", "image", "svg+xml"),
];

static EXTENSION_MAP: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        EXTENSION_TABLE
            .iter()
            .map(|&(ext, major, minor)| (ext, (major, minor)))
            .collect()
    });

/// Extrae el texto posterior al último `.`; sin punto, devuelve el nombre completo.
pub(crate) fn extract_extension(filename: &str) -> &str {
    filename.rsplit('.').next().unwrap_or(filename)
}

/// Clasifica `filename` sólo por su extensión. Nunca falla.
pub fn resolve_by_extension(filename: &str) -> Mime {
    let extension = extract_extension(filename);
    let (major, minor) = EXTENSION_MAP
        .get(extension)
        .copied()
        .unwrap_or((GENERIC_MAJOR, GENERIC_MINOR));

    tracing::trace!(filename, extension, major, minor, "extensión resuelta");
    Mime::new(major, minor, filename, extension)
}
