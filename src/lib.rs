//! # Simulador de Planificación de CPU
//!
//! Esta biblioteca simula tres disciplinas clásicas de planificación de
//! procesos sobre una lista fija de procesos con tiempo de llegada y tiempo
//! de servicio conocidos, con fines didácticos.
//!
//! ## Características principales
//!
//! - **Algoritmos**: FIFO y LIFO (no preemptivos) y Round Robin con quantum
//!   configurable, todos sobre un reloj virtual que salta los tiempos ociosos.
//! - **Métricas**: tiempo de finalización, retorno, espera e índice de
//!   penalización por proceso, más sus promedios.
//! - **Simulaciones puras**: cada algoritmo recibe el conjunto de procesos
//!   sin modificarlo y devuelve su propia copia con resultados, por lo que
//!   las ejecuciones pueden lanzarse en paralelo.
//!
//! ## Estructura del proyecto
//!
//! - `process`: registro de un proceso
//! - `metrics`: cálculo de métricas y promedios
//! - `scheduler`: los algoritmos FIFO, LIFO y Round Robin
//! - `loader`: lectura de procesos desde CSV
//! - `report`: tablas y reportes de texto
//! - `simulation`: orquestación y medición de las ejecuciones

pub mod error;
pub mod loader;
pub mod metrics;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod simulation;

// Re-exportar las estructuras principales para facilitar su uso
pub use error::{Result, SchedulerError};
pub use loader::{load_processes, LoadReport, SkippedRecord};
pub use metrics::{MetricsCalculator, SimulationMetrics};
pub use process::{Process, Ticks};
pub use scheduler::{Quantum, SchedulingAlgorithm};
pub use simulation::{AlgorithmRun, Simulation};

/// Configuración por defecto del simulador
pub mod config {
    /// Archivo de procesos leído cuando no se indica otro
    pub const DEFAULT_INPUT_PATH: &str = "prueba.csv";

    /// Decimales con que se muestra el índice de penalización
    pub const INDEX_DECIMALS: usize = 4;

    /// Nivel de diagnósticos cuando `RUST_LOG` no está definido
    pub const DEFAULT_LOG_FILTER: &str = "warn";
}
