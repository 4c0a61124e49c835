//! # Módulo de Métricas
//!
//! Este módulo calcula las métricas derivadas de cada proceso a partir de su
//! tiempo de finalización y agrega los promedios de una ejecución completa.

use average::{Estimate, Mean};

use crate::process::{Process, Ticks};

/// Resultado de ejecutar un algoritmo sobre un conjunto de procesos.
///
/// Los procesos se conservan en el orden de carga; `completion_order`
/// registra en qué orden terminaron.
#[derive(Debug, Clone)]
pub struct SimulationMetrics {
    /// Procesos con sus métricas calculadas, en orden de carga
    pub processes: Vec<Process>,
    /// Identificadores en orden de finalización
    pub completion_order: Vec<String>,
    /// Tiempo de retorno promedio
    pub average_turnaround: f64,
    /// Tiempo de espera promedio
    pub average_wait: f64,
    /// Índice de penalización promedio
    pub average_penalty_index: f64,
}

/// Calculadora de métricas.
///
/// No guarda estado: deriva T, E e I de la finalización de cada proceso y
/// promedia los resultados de una ejecución.
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Crea una nueva instancia del calculador de métricas.
    pub fn new() -> Self {
        Self
    }

    /// Registra la finalización de un proceso y calcula sus métricas.
    ///
    /// # Arguments
    ///
    /// * `process` - Proceso que acaba de terminar
    /// * `completion` - Tick en que terminó
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::{MetricsCalculator, Process};
    ///
    /// let mut process = Process::new("B", 1, 3);
    /// MetricsCalculator::new().complete(&mut process, 8);
    /// assert_eq!(process.turnaround, 7);
    /// assert_eq!(process.wait, 4);
    /// assert!((process.penalty_index - 3.0 / 7.0).abs() < 1e-12);
    /// ```
    pub fn complete(&self, process: &mut Process, completion: Ticks) {
        process.completion = completion;
        process.turnaround = completion.saturating_sub(process.arrival);
        process.wait = process.turnaround.saturating_sub(process.service);
        process.penalty_index = if process.turnaround > 0 {
            process.service as f64 / process.turnaround as f64
        } else {
            0.0
        };
    }

    /// Calcula los promedios de una ejecución.
    ///
    /// Con un conjunto vacío todos los promedios valen 0.
    pub fn summarize(&self, processes: Vec<Process>, completion_order: Vec<String>) -> SimulationMetrics {
        let average_turnaround = mean(processes.iter().map(|p| p.turnaround as f64));
        let average_wait = mean(processes.iter().map(|p| p.wait as f64));
        let average_penalty_index = mean(processes.iter().map(|p| p.penalty_index));

        SimulationMetrics {
            processes,
            completion_order,
            average_turnaround,
            average_wait,
            average_penalty_index,
        }
    }
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    values.collect::<Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_without_wait() {
        let mut process = Process::new("A", 0, 5);
        MetricsCalculator::new().complete(&mut process, 5);

        assert_eq!(process.completion, 5);
        assert_eq!(process.turnaround, 5);
        assert_eq!(process.wait, 0);
        assert_eq!(process.penalty_index, 1.0);
    }

    #[test]
    fn test_complete_with_wait() {
        let mut process = Process::new("B", 1, 3);
        MetricsCalculator::new().complete(&mut process, 8);

        assert_eq!(process.turnaround, 7);
        assert_eq!(process.wait, 4);
        assert_eq!(format!("{:.4}", process.penalty_index), "0.4286");
    }

    #[test]
    fn test_zero_turnaround_has_zero_index() {
        // Caso degenerado: finaliza en el mismo tick en que llega
        let mut process = Process::new("Z", 4, 0);
        MetricsCalculator::new().complete(&mut process, 4);

        assert_eq!(process.turnaround, 0);
        assert_eq!(process.penalty_index, 0.0);
    }

    #[test]
    fn test_summarize_averages() {
        let calculator = MetricsCalculator::new();
        let mut a = Process::new("A", 0, 5);
        let mut b = Process::new("B", 1, 3);
        calculator.complete(&mut a, 5);
        calculator.complete(&mut b, 8);

        let metrics = calculator.summarize(vec![a, b], vec!["A".into(), "B".into()]);

        assert_eq!(metrics.average_turnaround, 6.0);
        assert_eq!(metrics.average_wait, 2.0);
        assert!((metrics.average_penalty_index - (1.0 + 3.0 / 7.0) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_summarize_empty_set() {
        let metrics = MetricsCalculator::default().summarize(Vec::new(), Vec::new());

        assert!(metrics.processes.is_empty());
        assert_eq!(metrics.average_turnaround, 0.0);
        assert_eq!(metrics.average_wait, 0.0);
        assert_eq!(metrics.average_penalty_index, 0.0);
    }
}
