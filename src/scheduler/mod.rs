//! # Módulo de Algoritmos de Planificación
//!
//! Este módulo reúne los tres algoritmos simulados y el quantum de Round
//! Robin. Cada simulador es una función pura: recibe el conjunto de procesos
//! (sin modificarlo) y devuelve una copia con las métricas calculadas.
//!
//! - `sequential`: FIFO y LIFO, que ejecutan cada proceso hasta terminar
//! - `round_robin`: reparto por quantum recorriendo la lista completa en cada pasada

pub mod round_robin;
pub mod sequential;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SchedulerError};
use crate::metrics::SimulationMetrics;
use crate::process::{Process, Ticks};

pub use round_robin::round_robin;
pub use sequential::{fifo, lifo};

/// Quantum de Round Robin: máximo de ticks contiguos por visita.
///
/// Solo puede construirse con un valor positivo, de modo que el simulador
/// nunca recibe un quantum que le impida avanzar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quantum(Ticks);

impl Quantum {
    /// Crea un quantum validado.
    ///
    /// # Errors
    ///
    /// `SchedulerError::InvalidQuantum` si `ticks` es 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::Quantum;
    ///
    /// assert_eq!(Quantum::new(3).unwrap().get(), 3);
    /// assert!(Quantum::new(0).is_err());
    /// ```
    pub fn new(ticks: Ticks) -> Result<Self> {
        if ticks == 0 {
            return Err(SchedulerError::InvalidQuantum(
                "el quantum debe ser > 0".to_string(),
            ));
        }
        Ok(Self(ticks))
    }

    /// Valor del quantum en ticks.
    pub fn get(self) -> Ticks {
        self.0
    }

    /// Ticks que se ejecutan en una visita a un proceso con `remaining` pendientes.
    pub fn slice(self, remaining: Ticks) -> Ticks {
        remaining.min(self.0)
    }
}

impl FromStr for Quantum {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| SchedulerError::InvalidQuantum(format!("{:?} no es un entero", s.trim())))?;
        if value <= 0 {
            return Err(SchedulerError::InvalidQuantum(format!(
                "el quantum debe ser > 0 (recibido {})",
                value
            )));
        }
        Self::new(value as Ticks)
    }
}

impl fmt::Display for Quantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Algoritmos de planificación disponibles.
///
/// - FIFO y LIFO ejecutan cada proceso hasta completarlo; difieren en el
///   sentido en que recorren la lista al elegir al siguiente
/// - Round Robin reparte la CPU en porciones de un quantum
#[derive(Clone, Debug, PartialEq)]
pub enum SchedulingAlgorithm {
    /// First-In First-Out: gana el primero elegible en orden de carga.
    Fifo,

    /// Last-In First-Out: gana el último elegible en orden de carga.
    Lifo,

    /// Round Robin: pasadas completas sobre la lista con quantum fijo.
    RoundRobin {
        /// Tiempo máximo de ejecución continua por visita
        quantum: Quantum,
    },
}

impl SchedulingAlgorithm {
    /// Crea el algoritmo FIFO.
    pub fn fifo() -> Self {
        Self::Fifo
    }

    /// Crea el algoritmo LIFO.
    pub fn lifo() -> Self {
        Self::Lifo
    }

    /// Crea el algoritmo Round Robin con el quantum especificado.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::{Quantum, SchedulingAlgorithm};
    ///
    /// let algorithm = SchedulingAlgorithm::round_robin(Quantum::new(2).unwrap());
    /// assert_eq!(algorithm.to_string(), "Round Robin (quantum 2)");
    /// ```
    pub fn round_robin(quantum: Quantum) -> Self {
        Self::RoundRobin { quantum }
    }

    /// Nombre corto usado en tablas y líneas de resumen.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lifo => "LIFO",
            Self::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Obtiene una descripción textual del algoritmo.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::SchedulingAlgorithm;
    ///
    /// assert_eq!(
    ///     SchedulingAlgorithm::fifo().description(),
    ///     "First-In First-Out (no preemptivo)"
    /// );
    /// ```
    pub fn description(&self) -> String {
        match self {
            Self::Fifo => "First-In First-Out (no preemptivo)".to_string(),
            Self::Lifo => "Last-In First-Out (no preemptivo)".to_string(),
            Self::RoundRobin { quantum } => {
                format!("Round Robin preemptivo (quantum: {} ticks)", quantum)
            }
        }
    }

    /// Simula el algoritmo sobre una copia de `processes`.
    ///
    /// El conjunto de entrada no se modifica, de modo que el mismo slice puede
    /// alimentar a varios algoritmos.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::{Process, SchedulingAlgorithm};
    ///
    /// let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
    /// let metrics = SchedulingAlgorithm::fifo().simulate(&processes);
    /// assert_eq!(metrics.processes[1].completion, 8);
    /// assert_eq!(processes[1].completion, 0);
    /// ```
    pub fn simulate(&self, processes: &[Process]) -> SimulationMetrics {
        match self {
            Self::Fifo => fifo(processes),
            Self::Lifo => lifo(processes),
            Self::RoundRobin { quantum } => round_robin(processes, *quantum),
        }
    }
}

impl fmt::Display for SchedulingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fifo | Self::Lifo => write!(f, "{}", self.name()),
            Self::RoundRobin { quantum } => write!(f, "Round Robin (quantum {})", quantum),
        }
    }
}

/// Menor llegada entre los procesos pendientes; destino del salto de reloj
/// cuando ningún proceso es elegible.
pub(crate) fn next_arrival(processes: &[Process], pending: impl Fn(usize) -> bool) -> Option<Ticks> {
    processes
        .iter()
        .enumerate()
        .filter(|(i, _)| pending(*i))
        .map(|(_, p)| p.arrival)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_creation() {
        let algorithm = SchedulingAlgorithm::fifo();
        assert_eq!(algorithm, SchedulingAlgorithm::Fifo);
        assert_eq!(algorithm.name(), "FIFO");
    }

    #[test]
    fn test_round_robin_creation() {
        let quantum = Quantum::new(4).unwrap();
        let algorithm = SchedulingAlgorithm::round_robin(quantum);

        match algorithm {
            SchedulingAlgorithm::RoundRobin { quantum: q } => assert_eq!(q, quantum),
            _ => panic!("Expected RoundRobin variant"),
        }

        assert_eq!(algorithm.name(), "Round Robin");
    }

    #[test]
    fn test_quantum_rejects_zero() {
        assert!(matches!(Quantum::new(0), Err(SchedulerError::InvalidQuantum(_))));
    }

    #[test]
    fn test_quantum_parsing() {
        assert_eq!("3".parse::<Quantum>().unwrap().get(), 3);
        assert_eq!(" 7 \n".parse::<Quantum>().unwrap().get(), 7);
        assert!("0".parse::<Quantum>().is_err());
        assert!("-2".parse::<Quantum>().is_err());
        assert!("dos".parse::<Quantum>().is_err());
    }

    #[test]
    fn test_quantum_slice() {
        let quantum = Quantum::new(3).unwrap();
        assert_eq!(quantum.slice(8), 3);
        assert_eq!(quantum.slice(2), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SchedulingAlgorithm::fifo()), "FIFO");
        assert_eq!(format!("{}", SchedulingAlgorithm::lifo()), "LIFO");

        let rr = SchedulingAlgorithm::round_robin(Quantum::new(2).unwrap());
        assert_eq!(format!("{}", rr), "Round Robin (quantum 2)");
        assert!(rr.description().contains("Round Robin"));
    }

    #[test]
    fn test_next_arrival_ignores_finished() {
        let processes = vec![
            Process::new("A", 1, 1),
            Process::new("B", 9, 1),
            Process::new("C", 4, 1),
        ];
        assert_eq!(next_arrival(&processes, |i| i != 0), Some(4));
        assert_eq!(next_arrival(&processes, |_| false), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn arb_processes()(
            specs in prop::collection::vec((0u64..30, 1u64..10), 1..12),
        ) -> Vec<Process> {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (arrival, service))| Process::new(format!("P{}", i), arrival, service))
                .collect()
        }
    }

    fn all_algorithms(quantum: Ticks) -> Vec<SchedulingAlgorithm> {
        vec![
            SchedulingAlgorithm::fifo(),
            SchedulingAlgorithm::lifo(),
            SchedulingAlgorithm::round_robin(Quantum::new(quantum).unwrap()),
        ]
    }

    proptest! {
        /// Invariante: ningún proceso termina antes de llegada + servicio
        #[test]
        fn invariant_completion_after_minimum_runtime(
            processes in arb_processes(),
            quantum in 1u64..6,
        ) {
            for algorithm in all_algorithms(quantum) {
                let metrics = algorithm.simulate(&processes);
                prop_assert_eq!(metrics.processes.len(), processes.len());
                prop_assert_eq!(metrics.completion_order.len(), processes.len());
                for p in &metrics.processes {
                    prop_assert!(p.completion >= p.arrival + p.service);
                }
            }
        }

        /// Invariante: T = tf - ti, E = T - t e I = t / T en (0, 1]
        #[test]
        fn invariant_metric_identities(
            processes in arb_processes(),
            quantum in 1u64..6,
        ) {
            for algorithm in all_algorithms(quantum) {
                for p in &algorithm.simulate(&processes).processes {
                    prop_assert_eq!(p.turnaround, p.completion - p.arrival);
                    prop_assert_eq!(p.wait, p.turnaround - p.service);
                    prop_assert!(p.turnaround > 0);
                    prop_assert!(p.penalty_index > 0.0 && p.penalty_index <= 1.0);
                    prop_assert_eq!(p.penalty_index, p.service as f64 / p.turnaround as f64);
                }
            }
        }

        /// Invariante: la CPU nunca ejecuta dos procesos a la vez, así que el
        /// último tf es al menos la suma de servicios
        #[test]
        fn invariant_makespan_covers_total_service(
            processes in arb_processes(),
            quantum in 1u64..6,
        ) {
            let total: Ticks = processes.iter().map(|p| p.service).sum();
            for algorithm in all_algorithms(quantum) {
                let last = algorithm
                    .simulate(&processes)
                    .processes
                    .iter()
                    .map(|p| p.completion)
                    .max()
                    .unwrap_or(0);
                prop_assert!(last >= total);
            }
        }

        /// Con llegadas no decrecientes y quantum >= max(t), Round Robin equivale a FIFO
        #[test]
        fn invariant_large_quantum_round_robin_matches_fifo(
            specs in prop::collection::vec((0u64..30, 1u64..10), 1..12),
        ) {
            let mut specs = specs;
            specs.sort_by_key(|(arrival, _)| *arrival);
            let processes: Vec<Process> = specs
                .into_iter()
                .enumerate()
                .map(|(i, (arrival, service))| Process::new(format!("P{}", i), arrival, service))
                .collect();
            let max_service = processes.iter().map(|p| p.service).max().unwrap_or(1);

            let fifo_metrics = SchedulingAlgorithm::fifo().simulate(&processes);
            let rr_metrics = SchedulingAlgorithm::round_robin(Quantum::new(max_service).unwrap())
                .simulate(&processes);

            prop_assert_eq!(&fifo_metrics.completion_order, &rr_metrics.completion_order);
            for (f, r) in fifo_metrics.processes.iter().zip(&rr_metrics.processes) {
                prop_assert_eq!(f.completion, r.completion);
            }
        }
    }
}
