//! Clasificación del tipo MIME a partir del contenido inicial del archivo.

use super::result::Mime;
use infer::Infer;

/// Estrategia intercambiable que interpreta el prefijo leído de un archivo.
pub trait ContentClassifier: Send + Sync {
    /// Devuelve la mejor coincidencia para `prefix`, o el genérico si no hay ninguna.
    fn classify(&self, prefix: &[u8]) -> Mime;
}

/// Clasificador sin firmas: siempre responde `application/octet-stream`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubClassifier;

impl ContentClassifier for StubClassifier {
    fn classify(&self, _prefix: &[u8]) -> Mime {
        Mime::generic()
    }
}

/// Clasificador por firmas (números mágicos) apoyado en `infer`.
///
/// Sólo ve los primeros [`PREFIX_LIMIT`](crate::mime::PREFIX_LIMIT) bytes del
/// archivo, así que las firmas ubicadas más allá (por ejemplo `ustar` en el
/// desplazamiento 257 de un `tar`) nunca coinciden y el resultado es el genérico.
pub struct SignatureClassifier {
    infer: Infer,
}

impl SignatureClassifier {
    /// Crea el clasificador con el catálogo de firmas de `infer`.
    pub fn new() -> Self {
        Self {
            infer: Infer::new(),
        }
    }
}

impl Default for SignatureClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentClassifier for SignatureClassifier {
    fn classify(&self, prefix: &[u8]) -> Mime {
        self.infer
            .get(prefix)
            .and_then(|kind| kind.mime_type().split_once('/'))
            .filter(|(major, minor)| !major.is_empty() && !minor.is_empty())
            .map(|(major, minor)| Mime::new(major, minor, "", ""))
            .unwrap_or_else(Mime::generic)
    }
}

/// Atajo que aplica el clasificador sin firmas.
pub fn classify(prefix: &[u8]) -> Mime {
    StubClassifier.classify(prefix)
}
