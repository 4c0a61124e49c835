use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cpu_scheduling_simulator::{config, load_processes, Quantum, SchedulerError, Simulation};

/// Opciones de línea de comandos. Lo que no se indique se pregunta por consola.
#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    input: Option<String>,
    show_tables: Option<bool>,
    quantum: Option<Quantum>,
    concurrent: bool,
}

/// Parseo de CLI: [ARCHIVO] [--tablas|--sin-tablas] [--quantum N] [--paralelo]
fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut idx = 0;

    while idx < args.len() {
        match args[idx].as_str() {
            "--tablas" => options.show_tables = Some(true),
            "--sin-tablas" => options.show_tables = Some(false),
            "--paralelo" => options.concurrent = true,
            "--quantum" | "-q" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "Falta el valor de --quantum".to_string())?;
                let quantum = value.parse::<Quantum>().map_err(|e| e.to_string())?;
                options.quantum = Some(quantum);
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Opción desconocida: {}", flag));
            }
            path => {
                if options.input.is_some() {
                    return Err(format!("Archivo de entrada repetido: {}", path));
                }
                options.input = Some(path.to_string());
            }
        }
        idx += 1;
    }

    Ok(options)
}

/// Muestra una pregunta y lee una línea de respuesta (vacía si la entrada terminó).
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

fn ask_show_tables<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    let answer = prompt(input, output, "¿Desea ver las tablas completas de procesos? (s/n): ")?;
    Ok(answer.starts_with(&['s', 'S'][..]))
}

fn ask_quantum<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Quantum, SchedulerError> {
    let answer = prompt(input, output, "Ingrese el quantum para el algoritmo Round Robin: ")?;
    answer.parse()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    // ---------- CLI ----------
    let args: Vec<String> = env::args().collect();
    let options = parse_args(args.get(1..).unwrap_or_default()).unwrap_or_else(|e| {
        eprintln!(
            "Uso:\n  {} [ARCHIVO] [--tablas|--sin-tablas] [--quantum N] [--paralelo]\n\
             ARCHIVO es un CSV con líneas id,llegada,servicio (por defecto {}).\nError: {}",
            args.first().map(String::as_str).unwrap_or("bin"),
            config::DEFAULT_INPUT_PATH,
            e
        );
        std::process::exit(2);
    });

    // ---------- CARGA ----------
    let path = options.input.as_deref().unwrap_or(config::DEFAULT_INPUT_PATH);
    let loaded = load_processes(path)?;

    // ---------- CONFIGURACIÓN INTERACTIVA ----------
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let show_tables = match options.show_tables {
        Some(show) => show,
        None => ask_show_tables(&mut input, &mut output)?,
    };
    let quantum = match options.quantum {
        Some(quantum) => quantum,
        None => ask_quantum(&mut input, &mut output).context("no se puede ejecutar Round Robin")?,
    };

    // ---------- SIMULACIÓN ----------
    let simulation = Simulation::new(loaded.processes, quantum);
    let runs = if options.concurrent {
        simulation.run_all_concurrent()
    } else {
        simulation.run_all()
    };

    // ---------- IMPRESIÓN DEL INFORME ----------
    for run in &runs {
        println!("{}", simulation.generate_report(run, show_tables));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let options = parse_args(&[]).unwrap();
        assert_eq!(options, CliOptions::default());
        // Sin --quantum no hay valor por defecto: se pregunta al usuario
        assert_eq!(options.quantum, None);
    }

    #[test]
    fn test_parse_args_full() {
        let options = parse_args(&args(&["datos.csv", "--sin-tablas", "--quantum", "3", "--paralelo"])).unwrap();

        assert_eq!(options.input.as_deref(), Some("datos.csv"));
        assert_eq!(options.show_tables, Some(false));
        assert_eq!(options.quantum, Some(Quantum::new(3).unwrap()));
        assert!(options.concurrent);
    }

    #[test]
    fn test_parse_args_rejects_invalid_quantum() {
        assert!(parse_args(&args(&["--quantum", "0"])).is_err());
        assert!(parse_args(&args(&["--quantum", "-1"])).is_err());
        assert!(parse_args(&args(&["--quantum"])).is_err());
    }

    #[test]
    fn test_parse_args_rejects_unknown_flag() {
        assert!(parse_args(&args(&["--verbose"])).is_err());
        assert!(parse_args(&args(&["a.csv", "b.csv"])).is_err());
    }

    #[test]
    fn test_ask_show_tables() {
        let mut output = Vec::new();
        assert!(ask_show_tables(&mut "s\n".as_bytes(), &mut output).unwrap());
        assert!(ask_show_tables(&mut "Si\n".as_bytes(), &mut output).unwrap());
        assert!(!ask_show_tables(&mut "n\n".as_bytes(), &mut output).unwrap());
        assert!(!ask_show_tables(&mut "".as_bytes(), &mut output).unwrap());
        assert!(String::from_utf8(output).unwrap().contains("(s/n)"));
    }

    #[test]
    fn test_ask_quantum() {
        let mut output = Vec::new();
        assert_eq!(ask_quantum(&mut "4\n".as_bytes(), &mut output).unwrap().get(), 4);
        assert!(matches!(
            ask_quantum(&mut "0\n".as_bytes(), &mut output),
            Err(SchedulerError::InvalidQuantum(_))
        ));
        assert!(ask_quantum(&mut "".as_bytes(), &mut output).is_err());
    }
}
