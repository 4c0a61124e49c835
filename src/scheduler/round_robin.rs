//! Round Robin por pasadas.
//!
//! Cada pasada recorre la lista completa en orden de carga y concede a cada
//! proceso elegible hasta un quantum de CPU. La elegibilidad se evalúa al
//! visitar cada proceso con el reloj ya avanzado por los anteriores de la
//! misma pasada. No hay cola circular: un proceso situado antes de la
//! posición actual que llega a mitad de pasada espera a la siguiente.

use tracing::debug;

use super::{next_arrival, Quantum};
use crate::metrics::{MetricsCalculator, SimulationMetrics};
use crate::process::{Process, Ticks};

/// Resultado de una pasada completa sobre la lista.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PassOutcome {
    /// Al menos un proceso recibió CPU
    Advanced,
    /// Ningún proceso pendiente había llegado
    Idled,
}

/// Estado mutable de una simulación Round Robin.
struct RoundRobinRun<'a> {
    processes: &'a [Process],
    quantum: Quantum,
    calculator: MetricsCalculator,
    results: Vec<Process>,
    remaining: Vec<Ticks>,
    completed: Vec<bool>,
    completion_order: Vec<String>,
    clock: Ticks,
}

impl<'a> RoundRobinRun<'a> {
    fn new(processes: &'a [Process], quantum: Quantum) -> Self {
        Self {
            processes,
            quantum,
            calculator: MetricsCalculator::new(),
            results: processes.to_vec(),
            remaining: processes.iter().map(|p| p.service).collect(),
            completed: vec![false; processes.len()],
            completion_order: Vec::with_capacity(processes.len()),
            clock: 0,
        }
    }

    fn finished(&self) -> bool {
        self.completion_order.len() == self.processes.len()
    }

    /// Una pasada en orden de carga; el reloj avanza tras cada porción.
    fn pass(&mut self) -> PassOutcome {
        let mut outcome = PassOutcome::Idled;

        for idx in 0..self.processes.len() {
            if self.completed[idx] || self.processes[idx].arrival > self.clock {
                continue;
            }

            let slice = self.quantum.slice(self.remaining[idx]);
            self.remaining[idx] -= slice;
            self.clock += slice;
            outcome = PassOutcome::Advanced;

            debug!(
                process = %self.processes[idx].id,
                slice,
                remaining = self.remaining[idx],
                clock = self.clock,
                "porción de quantum ejecutada"
            );

            if self.remaining[idx] == 0 {
                self.completed[idx] = true;
                self.calculator.complete(&mut self.results[idx], self.clock);
                self.completion_order.push(self.processes[idx].id.clone());
            }
        }

        outcome
    }

    /// Salta el reloj hasta la próxima llegada pendiente.
    fn skip_idle(&mut self) -> bool {
        let completed = &self.completed;
        match next_arrival(self.processes, |i| !completed[i]) {
            Some(next) => {
                debug!(from = self.clock, to = next, "CPU ociosa, avanzando reloj");
                self.clock = self.clock.max(next);
                true
            }
            None => false,
        }
    }

    fn into_metrics(self) -> SimulationMetrics {
        self.calculator.summarize(self.results, self.completion_order)
    }
}

/// Simula Round Robin sobre una copia de `processes`.
///
/// # Examples
///
/// ```rust
/// use cpu_scheduling_simulator::{scheduler, Process, Quantum};
///
/// let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
/// let metrics = scheduler::round_robin(&processes, Quantum::new(2).unwrap());
/// assert_eq!(metrics.processes[0].completion, 8);
/// assert_eq!(metrics.processes[1].completion, 7);
/// ```
pub fn round_robin(processes: &[Process], quantum: Quantum) -> SimulationMetrics {
    let mut run = RoundRobinRun::new(processes, quantum);

    while !run.finished() {
        if run.pass() == PassOutcome::Idled && !run.skip_idle() {
            break;
        }
    }

    run.into_metrics()
}
