//! Lectura acotada de los primeros bytes de un archivo regular.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Máximo de bytes que se leen del inicio de un archivo.
pub const PREFIX_LIMIT: usize = 50;

#[derive(Debug, Error)]
pub enum PrefixError {
    #[error("no se pudo obtener la metadata de `{}`: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("`{}` es un directorio, no un archivo", path.display())]
    InvalidTarget { path: PathBuf },
    #[error("no se pudo abrir `{}`: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no se pudo leer `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Lee exactamente `limit` bytes (nunca más de [`PREFIX_LIMIT`]) desde el inicio de `path`.
///
/// Un archivo más corto que el límite es una lectura fallida. El descriptor se
/// cierra al salir de la función en cualquier caso.
pub fn read_prefix(path: impl AsRef<Path>, limit: usize) -> Result<Vec<u8>, PrefixError> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|source| PrefixError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.is_dir() {
        return Err(PrefixError::InvalidTarget {
            path: path.to_path_buf(),
        });
    }

    let mut file = File::open(path).map_err(|source| PrefixError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let limit = limit.min(PREFIX_LIMIT);
    let mut buffer = vec![0_u8; limit];
    file.read_exact(&mut buffer)
        .map_err(|source| PrefixError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(buffer)
}
