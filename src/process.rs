//! # Módulo de Procesos
//!
//! Este módulo define el registro de un proceso: los datos de entrada
//! (identificador, llegada y servicio) y los campos que cada algoritmo
//! completa al simularlo.

use std::fmt;

/// Unidad de tiempo virtual de la simulación.
pub type Ticks = u64;

/// Representa un proceso a planificar.
///
/// Los campos de entrada (`id`, `arrival`, `service`) se cargan una sola vez.
/// Cada simulador trabaja sobre su propia copia y rellena `completion`,
/// `turnaround`, `wait` y `penalty_index`; antes de simular valen 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Process {
    /// Identificador opaco del proceso
    pub id: String,
    /// Tiempo de llegada (ti)
    pub arrival: Ticks,
    /// Tiempo de servicio requerido (t), siempre > 0
    pub service: Ticks,
    /// Tiempo de finalización (tf)
    pub completion: Ticks,
    /// Tiempo de retorno (T = tf - ti)
    pub turnaround: Ticks,
    /// Tiempo de espera (E = T - t)
    pub wait: Ticks,
    /// Índice de penalización (I = t / T)
    pub penalty_index: f64,
}

impl Process {
    /// Crea un proceso sin métricas calculadas.
    ///
    /// # Arguments
    ///
    /// * `id` - Identificador del proceso
    /// * `arrival` - Tick a partir del cual el proceso puede ejecutarse
    /// * `service` - Ticks de CPU que necesita para terminar
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::Process;
    ///
    /// let process = Process::new("A", 0, 5);
    /// assert_eq!(process.id, "A");
    /// assert_eq!(process.completion, 0);
    /// ```
    pub fn new(id: impl Into<String>, arrival: Ticks, service: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival,
            service,
            completion: 0,
            turnaround: 0,
            wait: 0,
            penalty_index: 0.0,
        }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ti={}, t={})", self.id, self.arrival, self.service)
    }
}
