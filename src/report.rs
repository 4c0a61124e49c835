//! # Módulo de Reportes
//!
//! Genera las tablas por proceso, las líneas de promedios y la exportación
//! CSV de una ejecución. No imprime nada: devuelve `String` para que el
//! llamador decida dónde escribir.

use std::time::Duration;

use crate::config;
use crate::metrics::SimulationMetrics;

const TABLE_RULE: &str = "+------------------------------------------------+";

/// Genera la tabla completa de procesos de un algoritmo.
///
/// Columnas: Proceso, ti, t, tf, T, E e I (con cuatro decimales).
///
/// # Examples
///
/// ```rust
/// use cpu_scheduling_simulator::{report, scheduler, Process};
///
/// let metrics = scheduler::fifo(&[Process::new("A", 0, 5), Process::new("B", 1, 3)]);
/// let table = report::process_table(&metrics, "FIFO");
/// assert!(table.contains("Resultados para FIFO"));
/// assert!(table.contains("0.4286"));
/// ```
pub fn process_table(metrics: &SimulationMetrics, algorithm: &str) -> String {
    let mut table = String::new();

    table.push_str(&format!("Resultados para {}:\n", algorithm));
    table.push_str(TABLE_RULE);
    table.push('\n');
    table.push_str("| Proceso |  ti |  t  |  tf |  T  |  E  |    I   |\n");
    table.push_str(TABLE_RULE);
    table.push('\n');

    for process in &metrics.processes {
        table.push_str(&format!(
            "| {:>7} | {:>3} | {:>3} | {:>3} | {:>3} | {:>3} | {:>6.prec$} |\n",
            process.id,
            process.arrival,
            process.service,
            process.completion,
            process.turnaround,
            process.wait,
            process.penalty_index,
            prec = config::INDEX_DECIMALS,
        ));
    }

    table.push_str(TABLE_RULE);
    table.push('\n');
    table
}

/// Línea de promedios de un algoritmo, sin salto de línea final.
///
/// # Examples
///
/// ```rust
/// use cpu_scheduling_simulator::{report, scheduler, Process};
///
/// let metrics = scheduler::fifo(&[Process::new("A", 0, 5), Process::new("B", 1, 3)]);
/// assert_eq!(report::summary_line(&metrics, "FIFO"), "FIFO - Promedios: T=6, E=2, I=0.714286");
/// ```
pub fn summary_line(metrics: &SimulationMetrics, algorithm: &str) -> String {
    format!(
        "{} - Promedios: T={}, E={}, I={}",
        algorithm,
        format_average(metrics.average_turnaround),
        format_average(metrics.average_wait),
        format_average(metrics.average_penalty_index),
    )
}

/// Línea con la duración real de la ejecución de un algoritmo.
pub fn timing_line(algorithm: &str, elapsed: Duration) -> String {
    format!(
        "Tiempo de ejecucion {}: {} microsegundos",
        algorithm,
        elapsed.as_micros()
    )
}

/// Exporta los resultados de una ejecución en formato CSV.
pub fn csv_report(metrics: &SimulationMetrics) -> String {
    let mut csv = String::new();

    csv.push_str("id,arrival,service,completion,turnaround,wait,penalty_index\n");
    for process in &metrics.processes {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{:.prec$}\n",
            process.id,
            process.arrival,
            process.service,
            process.completion,
            process.turnaround,
            process.wait,
            process.penalty_index,
            prec = config::INDEX_DECIMALS,
        ));
    }

    csv
}

/// Cifras significativas de los promedios en la línea de resumen.
const AVERAGE_SIGNIFICANT_DIGITS: usize = 6;

/// Formatea un promedio con seis cifras significativas y sin ceros finales,
/// en notación científica (`1.23457e+06`) si el exponente es < -4 o >= 6.
fn format_average(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }

    let scientific = format!("{:.*e}", AVERAGE_SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= AVERAGE_SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (AVERAGE_SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
