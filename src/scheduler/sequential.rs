//! FIFO y LIFO: despacho no preemptivo sobre un reloj virtual.
//!
//! Ambos comparten el mismo bucle. En cada iteración se busca un proceso
//! pendiente que ya haya llegado; si existe se ejecuta hasta terminar, y si
//! no, el reloj salta a la próxima llegada. Solo cambia el sentido en que se
//! recorre la lista de carga al elegir.

use tracing::debug;

use super::next_arrival;
use crate::metrics::{MetricsCalculator, SimulationMetrics};
use crate::process::{Process, Ticks};

/// Sentido del recorrido al buscar el siguiente proceso elegible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanOrder {
    /// Del primero al último cargado (FIFO)
    LoadOrder,
    /// Del último al primero cargado (LIFO)
    ReverseLoadOrder,
}

impl ScanOrder {
    /// Índice del primer proceso pendiente con `arrival <= clock` en este sentido.
    fn pick(self, processes: &[Process], completed: &[bool], clock: Ticks) -> Option<usize> {
        let eligible = |i: &usize| !completed[*i] && processes[*i].arrival <= clock;
        match self {
            Self::LoadOrder => (0..processes.len()).find(eligible),
            Self::ReverseLoadOrder => (0..processes.len()).rev().find(eligible),
        }
    }
}

/// Simula FIFO sobre una copia de `processes`.
///
/// Ante varios procesos elegibles gana el de menor posición de carga.
///
/// # Examples
///
/// ```rust
/// use cpu_scheduling_simulator::{scheduler, Process};
///
/// let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
/// let metrics = scheduler::fifo(&processes);
/// assert_eq!(metrics.processes[0].completion, 5);
/// assert_eq!(metrics.processes[1].completion, 8);
/// assert_eq!(metrics.processes[1].wait, 4);
/// ```
pub fn fifo(processes: &[Process]) -> SimulationMetrics {
    run_to_completion(processes, ScanOrder::LoadOrder)
}

/// Simula LIFO sobre una copia de `processes`.
///
/// Ante varios procesos elegibles gana el de mayor posición de carga.
pub fn lifo(processes: &[Process]) -> SimulationMetrics {
    run_to_completion(processes, ScanOrder::ReverseLoadOrder)
}

fn run_to_completion(processes: &[Process], order: ScanOrder) -> SimulationMetrics {
    let calculator = MetricsCalculator::new();
    let mut results = processes.to_vec();
    let mut completed = vec![false; processes.len()];
    let mut completion_order = Vec::with_capacity(processes.len());
    let mut clock: Ticks = 0;

    while completion_order.len() < processes.len() {
        match order.pick(processes, &completed, clock) {
            Some(idx) => {
                let finish = clock + processes[idx].service;
                debug!(
                    process = %processes[idx].id,
                    start = clock,
                    finish,
                    ?order,
                    "proceso ejecutado hasta completar"
                );

                completed[idx] = true;
                calculator.complete(&mut results[idx], finish);
                completion_order.push(processes[idx].id.clone());
                clock = finish;
            }
            None => {
                // Nadie elegible: la CPU queda ociosa hasta la próxima llegada
                let Some(next) = next_arrival(processes, |i| !completed[i]) else {
                    break;
                };
                debug!(from = clock, to = next, "CPU ociosa, avanzando reloj");
                clock = next;
            }
        }
    }

    calculator.summarize(results, completion_order)
}
