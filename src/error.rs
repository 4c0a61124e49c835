//! Tipos de error del simulador.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Alias de `Result` para las operaciones del simulador.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errores que pueden producirse al cargar datos o configurar una simulación.
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// El archivo de entrada no se pudo abrir. Es fatal para el programa.
    #[error("no se pudo abrir el archivo {}: {source}", .path.display())]
    InputUnavailable {
        /// Ruta que se intentó abrir
        path: PathBuf,
        /// Error del sistema operativo
        #[source]
        source: io::Error,
    },

    /// Un registro con campos numéricos inválidos. El cargador lo omite.
    #[error("datos inválidos en la línea {line} ({content:?}): {reason}")]
    MalformedRecord {
        /// Número de línea (1-indexado)
        line: usize,
        /// Contenido original de la línea
        content: String,
        /// Motivo del rechazo
        reason: String,
    },

    /// Quantum nulo, negativo o no numérico para Round Robin.
    #[error("quantum inválido: {0}")]
    InvalidQuantum(String),

    /// Error de E/S posterior a la apertura o de consola.
    #[error("error de E/S: {0}")]
    Io(#[from] io::Error),
}
