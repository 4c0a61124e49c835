//! # Módulo de Carga de Procesos
//!
//! Lee registros `id,llegada,servicio` de una fuente de líneas. Un registro
//! con campos numéricos inválidos se omite con un diagnóstico y la carga
//! continúa con el resto.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Result, SchedulerError};
use crate::process::{Process, Ticks};

const DELIMITER: char = ',';

/// Registro omitido durante la carga.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Número de línea (1-indexado)
    pub line: usize,
    /// Contenido original de la línea
    pub content: String,
    /// Motivo del rechazo
    pub reason: String,
}

impl From<SkippedRecord> for SchedulerError {
    fn from(record: SkippedRecord) -> Self {
        SchedulerError::MalformedRecord {
            line: record.line,
            content: record.content,
            reason: record.reason,
        }
    }
}

/// Resultado de una carga: procesos válidos en orden de aparición y
/// registros descartados.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Procesos válidos, en orden de carga
    pub processes: Vec<Process>,
    /// Registros omitidos con su diagnóstico
    pub skipped: Vec<SkippedRecord>,
}

/// Carga los procesos desde un archivo CSV.
///
/// # Errors
///
/// `SchedulerError::InputUnavailable` si el archivo no se puede abrir, o
/// `SchedulerError::Io` si falla la lectura a mitad del archivo.
pub fn load_processes(path: impl AsRef<Path>) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SchedulerError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let report = parse_records(BufReader::new(file))?;
    info!(
        path = %path.display(),
        loaded = report.processes.len(),
        skipped = report.skipped.len(),
        "procesos cargados"
    );
    Ok(report)
}

/// Interpreta los registros de cualquier fuente de líneas.
///
/// Las líneas en blanco se ignoran sin diagnóstico. Una línea que no es
/// UTF-8 válido, o cuyos tiempos harían desbordar el reloj virtual junto con
/// los registros ya aceptados, se omite como cualquier otro registro inválido.
///
/// # Examples
///
/// ```rust
/// use cpu_scheduling_simulator::loader::parse_records;
///
/// let input = "A,0,5\nB,x,3\nC,2,1\n";
/// let report = parse_records(input.as_bytes()).unwrap();
/// assert_eq!(report.processes.len(), 2);
/// assert_eq!(report.skipped.len(), 1);
/// assert_eq!(report.skipped[0].line, 2);
/// ```
pub fn parse_records<R: BufRead>(reader: R) -> Result<LoadReport> {
    let mut report = LoadReport::default();
    let mut horizon = ClockHorizon::default();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let parsed = match String::from_utf8(bytes) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                let parsed = parse_record(&line).and_then(|process| horizon.admit(process));
                (line, parsed)
            }
            Err(e) => {
                let line = String::from_utf8_lossy(e.as_bytes()).into_owned();
                (line, Err("la línea no es UTF-8 válido".to_string()))
            }
        };

        match parsed {
            (_, Ok(process)) => report.processes.push(process),
            (line, Err(reason)) => {
                let skipped = SkippedRecord {
                    line: index + 1,
                    content: line.trim_end_matches('\r').to_string(),
                    reason,
                };
                warn!("{}", SchedulerError::from(skipped.clone()));
                report.skipped.push(skipped);
            }
        }
    }

    Ok(report)
}

/// Cota del reloj virtual para los procesos aceptados.
///
/// Ningún simulador avanza el reloj más allá de la mayor llegada más la
/// suma de todos los servicios, así que basta con que esa suma quepa en `Ticks`.
#[derive(Debug, Default)]
struct ClockHorizon {
    max_arrival: Ticks,
    total_service: Ticks,
}

impl ClockHorizon {
    fn admit(&mut self, process: Process) -> std::result::Result<Process, String> {
        let max_arrival = self.max_arrival.max(process.arrival);
        let total_service = self
            .total_service
            .checked_add(process.service)
            .filter(|total| max_arrival.checked_add(*total).is_some())
            .ok_or_else(|| "los tiempos desbordan el reloj de simulación".to_string())?;

        self.max_arrival = max_arrival;
        self.total_service = total_service;
        Ok(process)
    }
}

/// Convierte una línea en un proceso, o devuelve el motivo del rechazo.
fn parse_record(line: &str) -> std::result::Result<Process, String> {
    let mut fields = line.split(DELIMITER).map(str::trim);

    let id = fields.next().unwrap_or_default();
    let arrival = fields.next().ok_or_else(|| "falta el tiempo de llegada".to_string())?;
    let service = fields.next().ok_or_else(|| "falta el tiempo de servicio".to_string())?;

    let arrival: Ticks = arrival
        .parse()
        .map_err(|_| format!("tiempo de llegada inválido: {:?}", arrival))?;
    let service: Ticks = service
        .parse()
        .map_err(|_| format!("tiempo de servicio inválido: {:?}", service))?;
    if service == 0 {
        return Err("el tiempo de servicio debe ser > 0".to_string());
    }

    Ok(Process::new(id, arrival, service))
}
