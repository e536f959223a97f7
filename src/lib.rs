//! Detección rápida y aproximada del tipo MIME de un archivo.

pub mod mime;

pub use mime::{
    ClassifierKind, ContentClassifier, Detector, DetectorOptions, Mime, PrefixError,
    SignatureClassifier, SniffPolicy, StubClassifier, classify, detect, read_prefix,
    resolve_by_extension,
};
