use super::console::Console;
use crate::Kinetics::arrhenius::rate_constants_for_T_range;
use crate::Kinetics::saponification_sweep::simulate_sweep;
use crate::Kinetics::second_order_IVP::IntegrationMethod;
use crate::ReferenceData::experimental_curves::SweepParameter;
use crate::settings::SimulationSettings;
use log::info;
use prettytable::{Table, row};
use std::io::{BufRead, Write};
use std::path::Path;
use strum::IntoEnumIterator;

pub const DEFAULT_REPORT_FILE: &str = "saponification_report.json";

/// Asks for the reaction inputs, simulates the chosen sweep and prints the comparison
pub fn run_simulation<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &mut SimulationSettings,
) -> Result<(), String> {
    console.header("Saponification Simulation")?;
    let mut run = settings.clone();
    input_reaction_parameters(console, &mut run)?;
    run.parameter = choose_sweep(console, run.parameter)?;
    run.method = choose_method(console, run.method)?;
    run.check().map_err(|e| e.to_string())?;

    let library = run.library().map_err(|e| e.to_string())?;
    let curves = library.curves(run.parameter).map_err(|e| e.to_string())?;

    console.say("Solving...")?;
    let report = simulate_sweep(run.parameter, curves, &run.reaction(), run.method, &run.solver)
        .map_err(|e| e.to_string())?;
    *settings = run;
    report
        .write_report(&mut console.out)
        .map_err(|e| e.to_string())?;
    console.say(&format!("Experimental data from {}", library.source))?;

    if console.confirm("\nExport results to JSON?")? {
        let file_name = console
            .ask(&format!("File name [{}]: ", DEFAULT_REPORT_FILE))?
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_REPORT_FILE.to_string());
        report
            .save_result(Path::new(&file_name))
            .map_err(|e| e.to_string())?;
        console.say(&format!("Results saved to {}", file_name))?;
    }
    Ok(())
}

fn input_reaction_parameters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &mut SimulationSettings,
) -> Result<(), String> {
    console.say("\nEnter parameters (empty line keeps the current value):")?;
    settings.frequency_factor = console.ask_or("Frequency factor A (1/s)", settings.frequency_factor)?;
    settings.activation_energy =
        console.ask_or("Activation energy Ea (J/mol)", settings.activation_energy)?;
    settings.simulation_temperature =
        console.ask_or("Temperature T (K)", settings.simulation_temperature)?;
    Ok(())
}

pub fn choose_sweep<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    current: SweepParameter,
) -> Result<SweepParameter, String> {
    let items: Vec<(SweepParameter, String)> = SweepParameter::iter()
        .map(|p| (p, format!("{} ({})", p.display_name(), p.label_unit())))
        .collect();
    console.choose("Parameter to analyze", &items, current)
}

pub fn choose_method<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    current: IntegrationMethod,
) -> Result<IntegrationMethod, String> {
    let items: Vec<(IntegrationMethod, String)> = IntegrationMethod::iter()
        .map(|m| (m, format!("{:?}: {}", m, m.description())))
        .collect();
    console.choose("Integration method", &items, current)
}

/// Solver tolerances, step budget and data file; optionally written to `config_file`
pub fn edit_settings<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &mut SimulationSettings,
    config_file: &Path,
) -> Result<(), String> {
    console.header("Settings")?;
    let mut edited = settings.clone();
    input_reaction_parameters(console, &mut edited)?;
    edited.solver.rtol = console.ask_or("Relative tolerance", edited.solver.rtol)?;
    edited.solver.atol = console.ask_or("Absolute tolerance", edited.solver.atol)?;
    edited.solver.step_size = console.ask_or("Radau step size (s)", edited.solver.step_size)?;
    edited.solver.max_iterations =
        console.ask_or("Maximum number of steps", edited.solver.max_iterations)?;

    let current_file = edited
        .data_file
        .clone()
        .unwrap_or_else(|| "built-in".to_string());
    match console
        .ask(&format!(
            "Reference data file, '-' for built-in [{}]: ",
            current_file
        ))?
        .as_deref()
    {
        None | Some("") => {}
        Some("-") => edited.data_file = None,
        Some(file_name) => edited.data_file = Some(file_name.to_string()),
    }
    edited.check().map_err(|e| e.to_string())?;
    if edited.data_file.is_some() {
        edited.library().map_err(|e| e.to_string())?;
    }
    *settings = edited;

    if console.confirm(&format!("Save settings to {}?", config_file.display()))? {
        settings.save(config_file).map_err(|e| e.to_string())?;
        console.say("Settings saved")?;
    }
    info!("settings updated: {:?}", settings);
    Ok(())
}

/// Rate constants over a temperature range for the current A and Ea
pub fn arrhenius_table<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &SimulationSettings,
) -> Result<(), String> {
    console.header("Arrhenius Table")?;
    let T_min: f64 = console.ask_or("T min (K)", 293.0)?;
    let T_max: f64 = console.ask_or("T max (K)", 323.0)?;
    let n: usize = console.ask_or("Number of points", 7)?;
    let rows = rate_constants_for_T_range(
        settings.frequency_factor,
        settings.activation_energy,
        T_min,
        T_max,
        n,
    )
    .map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.add_row(row!["T (K)", "1000/T (1/K)", "k (L/mol/s)"]);
    for (T, k) in rows {
        table.add_row(row![
            format!("{:.2}", T),
            format!("{:.4}", 1000.0 / T),
            format!("{:.4e}", k)
        ]);
    }
    write!(console.out, "{}", table).map_err(|e| e.to_string())?;
    Ok(())
}
