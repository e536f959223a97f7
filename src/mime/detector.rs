//! Orquestación de la detección: pista por extensión y, según la política, lectura de contenido.

use super::classifier::{ContentClassifier, SignatureClassifier, StubClassifier};
use super::extension::resolve_by_extension;
use super::prefix::{PREFIX_LIMIT, read_prefix};
use super::result::Mime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cuándo se inspecciona el contenido después de resolver la extensión.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SniffPolicy {
    /// Siempre se lee el prefijo; la pista sólo sobrevive si la lectura falla.
    #[default]
    Always,
    /// Sólo se lee el prefijo cuando la extensión no dio un tipo conocido.
    WhenGeneric,
    /// Nunca se toca el sistema de archivos.
    Never,
}

/// Clasificador de contenido que construye [`Detector::new`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    #[default]
    Stub,
    Signature,
}

/// Opciones de detección; los campos ausentes toman su valor por defecto.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorOptions {
    pub policy: SniffPolicy,
    pub prefix_limit: usize,
    pub classifier: ClassifierKind,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            policy: SniffPolicy::default(),
            prefix_limit: PREFIX_LIMIT,
            classifier: ClassifierKind::default(),
        }
    }
}

/// Detector reutilizable y seguro de compartir entre hilos.
pub struct Detector {
    policy: SniffPolicy,
    prefix_limit: usize,
    classifier: Box<dyn ContentClassifier>,
}

impl Detector {
    /// Construye un detector a partir de sus opciones.
    pub fn new(options: DetectorOptions) -> Self {
        let classifier: Box<dyn ContentClassifier> = match options.classifier {
            ClassifierKind::Stub => Box::new(StubClassifier),
            ClassifierKind::Signature => Box::new(SignatureClassifier::new()),
        };
        Self::with_classifier(options.policy, options.prefix_limit, classifier)
    }

    /// Construye un detector con una estrategia de clasificación propia.
    pub fn with_classifier(
        policy: SniffPolicy,
        prefix_limit: usize,
        classifier: Box<dyn ContentClassifier>,
    ) -> Self {
        Self {
            policy,
            prefix_limit,
            classifier,
        }
    }

    /// Política con la que se decide si leer el contenido.
    pub fn policy(&self) -> SniffPolicy {
        self.policy
    }

    /// Detecta el tipo de `filename`. Los errores de lectura nunca se propagan:
    /// se devuelve la pista por extensión.
    pub fn detect(&self, filename: &str) -> Mime {
        let hint = resolve_by_extension(filename);

        let sniff = match self.policy {
            SniffPolicy::Always => true,
            SniffPolicy::WhenGeneric => hint.is_generic(),
            SniffPolicy::Never => false,
        };
        if !sniff {
            return hint;
        }

        match read_prefix(filename, self.prefix_limit) {
            Ok(prefix) => {
                let verdict = self.classifier.classify(&prefix);
                tracing::debug!(
                    filename,
                    bytes = prefix.len(),
                    mime = %verdict,
                    "contenido clasificado"
                );
                verdict.with_source(hint.filename(), hint.extension())
            }
            Err(error) => {
                tracing::debug!(filename, %error, hint = %hint, "se usa la pista por extensión");
                hint
            }
        }
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(DetectorOptions::default())
    }
}

impl fmt::Debug for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Detector")
            .field("policy", &self.policy)
            .field("prefix_limit", &self.prefix_limit)
            .finish_non_exhaustive()
    }
}

/// Punto de entrada principal: detección con las opciones por defecto. Nunca falla.
pub fn detect(filename: &str) -> Mime {
    Detector::default().detect(filename)
}
