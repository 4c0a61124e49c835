//! Ejemplo básico de uso del simulador de planificación

use cpu_scheduling_simulator::{Process, Quantum, Simulation};

fn main() -> anyhow::Result<()> {
    println!("=== Ejemplo: Uso Básico del Simulador ===\n");

    let processes = vec![
        Process::new("A", 0, 3),
        Process::new("B", 2, 6),
        Process::new("C", 4, 4),
        Process::new("D", 6, 5),
        Process::new("E", 8, 2),
    ];

    let simulation = Simulation::new(processes, Quantum::new(2)?);
    let runs = simulation.run_all();

    for run in &runs {
        println!("--- {} ---", run.algorithm.description());
        println!("{}", simulation.generate_report(run, true));
    }

    // Comparación de resultados
    println!("=== Comparación de Algoritmos ===");
    println!("| Algoritmo   | T promedio | E promedio | I promedio | Orden de finalización |");
    println!("|-------------|------------|------------|------------|-----------------------|");
    for run in &runs {
        println!(
            "| {:<11} | {:>10.2} | {:>10.2} | {:>10.4} | {:<21} |",
            run.algorithm.name(),
            run.metrics.average_turnaround,
            run.metrics.average_wait,
            run.metrics.average_penalty_index,
            run.metrics.completion_order.join(" "),
        );
    }

    // Generar archivos CSV para análisis posterior
    for run in &runs {
        let file = format!("{}_results.csv", run.algorithm.name().to_lowercase().replace(' ', "_"));
        std::fs::write(&file, simulation.generate_csv_report(run))?;
        println!("📁 Archivo CSV generado: {}", file);
    }

    Ok(())
}
