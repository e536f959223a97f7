//! Identificación del tipo MIME probable de un archivo.

mod classifier;
mod detector;
mod extension;
mod prefix;
mod result;

pub use classifier::{ContentClassifier, SignatureClassifier, StubClassifier, classify};
pub use detector::{ClassifierKind, Detector, DetectorOptions, SniffPolicy, detect};
pub use extension::{EXTENSION_TABLE, resolve_by_extension};
pub use prefix::{PREFIX_LIMIT, PrefixError, read_prefix};
pub use result::{GENERIC_MAJOR, GENERIC_MINOR, Mime};
