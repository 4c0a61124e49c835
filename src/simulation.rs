//! # Módulo de Simulación Principal
//!
//! Coordina la ejecución de los algoritmos sobre un mismo conjunto de
//! procesos: cada algoritmo recibe su propia copia, se mide su duración real
//! y se arman los reportes.

use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use tracing::info;

use crate::metrics::SimulationMetrics;
use crate::process::Process;
use crate::report;
use crate::scheduler::{Quantum, SchedulingAlgorithm};

/// Resultado de ejecutar un algoritmo, con su duración real.
#[derive(Debug, Clone)]
pub struct AlgorithmRun {
    /// Algoritmo ejecutado
    pub algorithm: SchedulingAlgorithm,
    /// Métricas obtenidas
    pub metrics: SimulationMetrics,
    /// Tiempo de reloj que tomó la simulación
    pub elapsed: Duration,
}

/// Orquestador de las ejecuciones.
///
/// Guarda el conjunto de procesos cargado y la lista de algoritmos a
/// comparar. El conjunto nunca se modifica entre ejecuciones.
pub struct Simulation {
    /// Procesos en orden de carga
    processes: Vec<Process>,
    /// Algoritmos a ejecutar, en el orden en que se reportan
    algorithms: Vec<SchedulingAlgorithm>,
}

impl Simulation {
    /// Crea una simulación con los tres algoritmos en el orden Round Robin,
    /// FIFO y LIFO.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::{Process, Quantum, Simulation};
    ///
    /// let simulation = Simulation::new(vec![Process::new("A", 0, 5)], Quantum::new(2).unwrap());
    /// let runs = simulation.run_all();
    /// assert_eq!(runs.len(), 3);
    /// assert_eq!(runs[0].algorithm.name(), "Round Robin");
    /// ```
    pub fn new(processes: Vec<Process>, quantum: Quantum) -> Self {
        Self::with_algorithms(
            processes,
            vec![
                SchedulingAlgorithm::round_robin(quantum),
                SchedulingAlgorithm::fifo(),
                SchedulingAlgorithm::lifo(),
            ],
        )
    }

    /// Crea una simulación con una lista personalizada de algoritmos.
    pub fn with_algorithms(processes: Vec<Process>, algorithms: Vec<SchedulingAlgorithm>) -> Self {
        Self {
            processes,
            algorithms,
        }
    }

    /// Ejecuta un algoritmo y mide cuánto tarda.
    pub fn run(&self, algorithm: &SchedulingAlgorithm) -> AlgorithmRun {
        info!(%algorithm, processes = self.processes.len(), "iniciando simulación");

        let start = Instant::now();
        let metrics = algorithm.simulate(&self.processes);
        let elapsed = start.elapsed();

        info!(%algorithm, elapsed_us = elapsed.as_micros() as u64, "simulación completada");

        AlgorithmRun {
            algorithm: algorithm.clone(),
            metrics,
            elapsed,
        }
    }

    /// Ejecuta todos los algoritmos uno tras otro.
    pub fn run_all(&self) -> Vec<AlgorithmRun> {
        self.algorithms.iter().map(|algorithm| self.run(algorithm)).collect()
    }

    /// Ejecuta todos los algoritmos en hilos separados.
    ///
    /// Cada hilo trabaja sobre su propia copia de los procesos; los
    /// resultados se devuelven en el mismo orden que `run_all`.
    pub fn run_all_concurrent(&self) -> Vec<AlgorithmRun> {
        thread::scope(|scope| {
            let handles: Vec<_> = self
                .algorithms
                .iter()
                .map(|algorithm| scope.spawn(move || self.run(algorithm)))
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
                .collect()
        })
    }

    /// Genera el reporte de una ejecución: la tabla (si se pide), la línea de
    /// promedios y la línea de duración.
    pub fn generate_report(&self, run: &AlgorithmRun, show_table: bool) -> String {
        let name = run.algorithm.name();
        let mut output = String::new();

        if show_table {
            output.push_str(&report::process_table(&run.metrics, name));
        }
        output.push_str(&report::summary_line(&run.metrics, name));
        output.push('\n');
        output.push_str(&report::timing_line(name, run.elapsed));
        output.push('\n');

        output
    }

    /// Genera un reporte en formato CSV de una ejecución.
    pub fn generate_csv_report(&self, run: &AlgorithmRun) -> String {
        report::csv_report(&run.metrics)
    }
}
