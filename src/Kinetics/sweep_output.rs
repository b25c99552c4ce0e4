//! # Output of sweep reports
//!
//! Formatted tables (prettytable) for the terminal, with time in minutes and
//! concentrations in mol/L, and JSON export/import of whole reports.

use super::saponification_sweep::{ConditionResult, SweepReport};
use crate::ReferenceData::data_error::DataError;
use log::{error, info};
use prettytable::{Table, row};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

impl ConditionResult {
    /// Experimental and simulated [NaOH] side by side
    pub fn comparison_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Time (min)", "Exp [NaOH] (mol/L)", "Sim [NaOH] (mol/L)"]);
        for ((t, c_exp), (_, c_sim)) in self
            .experimental
            .points()
            .iter()
            .zip(self.simulated.points().iter())
        {
            table.add_row(row![
                format!("{:.1}", t / 60.0),
                format!("{:.4}", c_exp),
                format!("{:.4}", c_sim)
            ]);
        }
        table
    }
}

impl SweepReport {
    /// Inputs and the rate constant at the simulation temperature
    pub fn parameters_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Parameter", "Value", "Units"]);
        table.add_row(row!["Frequency Factor (A)", format!("{:.3e}", self.reaction.A), "1/s"]);
        table.add_row(row![
            "Activation Energy (Ea)",
            format!("{:.1}", self.reaction.Ea),
            "J/mol"
        ]);
        table.add_row(row![
            "Simulation Temperature (T)",
            format!("{:.2}", self.reaction.T),
            "K"
        ]);
        table.add_row(row![
            "Rate Constant (k)",
            format!("{:.2e}", self.simulation_rate_constant),
            "L/mol/s"
        ]);
        table.add_row(row!["Method", self.method.description(), "-"]);
        table
    }

    /// One row per condition: rate constant used and deviation from the experiment
    pub fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row![
            self.parameter.display_name(),
            "k (L/mol/s)",
            "Final Exp (mol/L)",
            "Final Sim (mol/L)",
            "RMSE (mol/L)",
            "Max |dC| (mol/L)"
        ]);
        for condition in &self.conditions {
            let final_exp = condition.experimental.concentration.last().copied();
            let final_sim = condition.simulated.final_concentration();
            table.add_row(row![
                condition.label,
                format!("{:.3e}", condition.rate_constant),
                fmt_optional(final_exp),
                fmt_optional(final_sim),
                format!("{:.2e}", condition.deviation.rmse),
                format!("{:.2e}", condition.deviation.max_abs)
            ]);
        }
        table
    }

    /// Writes parameters, per-condition comparison and summary tables to `out`
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n=== [NaOH] vs Time: Effect of {} ===", self.parameter)?;
        writeln!(out, "\nSimulation Parameters:")?;
        write!(out, "{}", self.parameters_table())?;
        if self.high_rate_constant {
            writeln!(
                out,
                "\nThe calculated rate constant is very high. Simulation results may drop instantly to zero. Try reducing A or Ea."
            )?;
        }
        for condition in &self.conditions {
            writeln!(out, "\n{} {}:", self.parameter, condition.label)?;
            write!(out, "{}", condition.comparison_table())?;
        }
        writeln!(out, "\nSummary:")?;
        write!(out, "{}", self.summary_table())?;
        Ok(())
    }

    pub fn pretty_print(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = self.write_report(&mut handle) {
            error!("failed to print sweep report: {}", e);
        }
    }

    /// Writes the report as pretty JSON
    pub fn save_result(&self, path: &Path) -> Result<(), DataError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("saved {} sweep report to '{}'", self.parameter, path.display());
        Ok(())
    }

    pub fn load_result(path: &Path) -> Result<Self, DataError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn fmt_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::Kinetics::arrhenius::ReactionParameters;
    use crate::Kinetics::ode_solver::SolverSettings;
    use crate::Kinetics::saponification_sweep::{SweepReport, simulate_sweep};
    use crate::Kinetics::second_order_IVP::IntegrationMethod;
    use crate::ReferenceData::al_mesfer_2017::al_mesfer_2017;
    use crate::ReferenceData::experimental_curves::SweepParameter;
    use tempfile::NamedTempFile;

    fn report() -> SweepReport {
        let library = al_mesfer_2017();
        simulate_sweep(
            SweepParameter::Temperature,
            library.curves(SweepParameter::Temperature).unwrap(),
            &ReactionParameters::new(0.5, 43094.0, 298.0),
            IntegrationMethod::Analytic,
            &SolverSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_comparison_table_in_minutes() {
        let report = report();
        let table = report.conditions[0].comparison_table();
        // header + 7 samples
        assert_eq!(table.len(), 8);
        let text = table.to_string();
        assert!(text.contains("48.0"));
        assert!(text.contains("0.0333"));
    }

    #[test]
    fn test_summary_table() {
        let report = report();
        let table = report.summary_table();
        assert_eq!(table.len(), 4);
        let text = table.to_string();
        for label in ["293K", "303K", "313K"] {
            assert!(text.contains(label));
        }
        assert!(report.parameters_table().to_string().contains("L/mol/s"));
    }

    #[test]
    fn test_write_report() {
        let report = report();
        let mut out: Vec<u8> = Vec::new();
        report.write_report(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Effect of Temperature"));
        assert!(text.contains("Temperature 303K:"));
        assert!(text.contains("Summary:"));
        assert!(!text.contains("very high"));
    }

    #[test]
    fn test_save_and_load_result() {
        let report = report();
        let file = NamedTempFile::new().unwrap();
        report.save_result(file.path()).unwrap();
        let loaded = SweepReport::load_result(file.path()).unwrap();
        assert_eq!(loaded, report);
    }

    #[test]
    fn test_numerical_reports_survive_json_exactly() {
        use strum::IntoEnumIterator;
        let library = al_mesfer_2017();
        let reactions = [
            ReactionParameters::new(0.5, 43094.0, 298.0),
            ReactionParameters::new(3.7e5, 41234.5, 307.3),
            ReactionParameters::new(1.9e7, 45678.9, 311.1),
        ];
        for reaction in reactions {
            for parameter in SweepParameter::iter() {
                for method in [IntegrationMethod::Analytic, IntegrationMethod::RK45] {
                    let report = simulate_sweep(
                        parameter,
                        library.curves(parameter).unwrap(),
                        &reaction,
                        method,
                        &SolverSettings::default(),
                    )
                    .unwrap();
                    let file = NamedTempFile::new().unwrap();
                    report.save_result(file.path()).unwrap();
                    let loaded = SweepReport::load_result(file.path()).unwrap();
                    assert_eq!(loaded, report, "{:?} {:?} {:?}", reaction, parameter, method);
                }
            }
        }
    }
}
