//! Resultado inmutable de una detección de tipo MIME.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tipo principal usado cuando no hay una clasificación mejor.
pub const GENERIC_MAJOR: &str = "application";
/// Subtipo usado cuando no hay una clasificación mejor.
pub const GENERIC_MINOR: &str = "octet-stream";

/// Tipo MIME detectado junto con el nombre y la extensión de origen.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Mime {
    major: String,
    minor: String,
    filename: String,
    extension: String,
}

impl Mime {
    /// Construye un resultado a partir de sus cuatro componentes.
    pub fn new(
        major: impl Into<String>,
        minor: impl Into<String>,
        filename: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
            filename: filename.into(),
            extension: extension.into(),
        }
    }

    /// Clasificación genérica `application/octet-stream` sin archivo asociado.
    pub fn generic() -> Self {
        Self::new(GENERIC_MAJOR, GENERIC_MINOR, "", "")
    }

    /// Tipo principal, por ejemplo `image`.
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Subtipo, por ejemplo `png`.
    pub fn minor(&self) -> &str {
        &self.minor
    }

    /// Ruta tal como la entregó quien llamó a la detección.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Segmento posterior al último `.` del nombre, o el nombre completo si no hay punto.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Indica si el resultado es `application/octet-stream`.
    pub fn is_generic(&self) -> bool {
        self.major == GENERIC_MAJOR && self.minor == GENERIC_MINOR
    }

    /// Devuelve el tipo combinado `major/minor`.
    pub fn as_string(&self) -> String {
        format!("{}/{}", self.major, self.minor)
    }

    /// Conserva el tipo y reemplaza el origen por el de otra detección.
    pub(crate) fn with_source(self, filename: &str, extension: &str) -> Self {
        Self {
            filename: filename.to_string(),
            extension: extension.to_string(),
            ..self
        }
    }
}

impl fmt::Display for Mime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.major, self.minor)
    }
}
