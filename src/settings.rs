//! # Settings Module
//!
//! ## Purpose
//! Holds the inputs of a simulation run (Arrhenius parameters, simulation temperature,
//! sweep to analyse, integration method and solver tolerances) and persists them as JSON.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "frequency_factor": 0.5,
//!   "activation_energy": 43094.0,
//!   "simulation_temperature": 298.0,
//!   "parameter": "Temperature",
//!   "method": "RK45",
//!   "solver": { "rtol": 1e-10, "atol": 1e-14, "first_step": null, "step_size": 0.1, "max_iterations": 100000 },
//!   "data_file": null
//! }
//! ```
//! Missing fields take their default values; a missing file gives the default settings.
//! `data_file: null` selects the bundled Al Mesfer 2017 data.

use crate::Kinetics::arrhenius::ReactionParameters;
use crate::Kinetics::ode_solver::SolverSettings;
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::second_order_IVP::IntegrationMethod;
use crate::ReferenceData::al_mesfer_2017::al_mesfer_2017;
use crate::ReferenceData::data_error::DataError;
use crate::ReferenceData::experimental_curves::{ReferenceLibrary, SweepParameter};
use crate::Utils::load_from_file::load_and_validate_library;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "saponification_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// A [1/s]
    pub frequency_factor: f64,
    /// Ea [J/mol]
    pub activation_energy: f64,
    /// T [K]
    pub simulation_temperature: f64,
    pub parameter: SweepParameter,
    pub method: IntegrationMethod,
    pub solver: SolverSettings,
    /// JSON reference library; the bundled data when `None`
    pub data_file: Option<String>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            frequency_factor: 0.5,
            activation_energy: 43094.0,
            simulation_temperature: 298.0,
            parameter: SweepParameter::Temperature,
            method: IntegrationMethod::RK45,
            solver: SolverSettings::default(),
            data_file: None,
        }
    }
}

impl SimulationSettings {
    /// Loads settings from `config_file`, or the defaults if the file does not exist
    pub fn load(config_file: &Path) -> Result<Self, DataError> {
        if !config_file.exists() {
            info!(
                "no settings file '{}', using defaults",
                config_file.display()
            );
            return Ok(Self::default());
        }
        let content = fs::read_to_string(config_file)?;
        let settings: SimulationSettings = serde_json::from_str(&content)?;
        settings.check()?;
        info!("loaded settings from '{}'", config_file.display());
        Ok(settings)
    }

    pub fn save(&self, config_file: &Path) -> Result<(), DataError> {
        self.check()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_file, content)?;
        info!("saved settings to '{}'", config_file.display());
        Ok(())
    }

    pub fn reaction(&self) -> ReactionParameters {
        ReactionParameters::new(
            self.frequency_factor,
            self.activation_energy,
            self.simulation_temperature,
        )
    }

    /// Validates every numeric input without running a simulation
    pub fn check(&self) -> Result<(), KineticsError> {
        self.solver.check()?;
        self.reaction().rate_constant()?;
        Ok(())
    }

    /// Reference library selected by `data_file`
    pub fn library(&self) -> Result<ReferenceLibrary, DataError> {
        match &self.data_file {
            Some(file_name) => load_and_validate_library(file_name),
            None => Ok(al_mesfer_2017()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_defaults() {
        let settings = SimulationSettings::default();
        assert_eq!(settings.frequency_factor, 0.5);
        assert_eq!(settings.activation_energy, 43094.0);
        assert_eq!(settings.simulation_temperature, 298.0);
        assert_eq!(settings.parameter, SweepParameter::Temperature);
        assert_eq!(settings.method, IntegrationMethod::RK45);
        assert!(settings.check().is_ok());
        assert_eq!(settings.library().unwrap(), al_mesfer_2017());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = SimulationSettings::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, SimulationSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let settings = SimulationSettings {
            frequency_factor: 2.0e3,
            activation_energy: 30000.0,
            simulation_temperature: 310.0,
            parameter: SweepParameter::AgitationRate,
            method: IntegrationMethod::BDF,
            solver: SolverSettings {
                rtol: 1e-8,
                atol: 1e-12,
                first_step: Some(0.5),
                max_iterations: 5000,
                ..SolverSettings::default()
            },
            data_file: None,
        };
        settings.save(&path).unwrap();
        assert_eq!(SimulationSettings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_uses_defaults_for_the_rest() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"simulation_temperature": 313.0, "parameter": "Volume"}}"#).unwrap();
        let settings = SimulationSettings::load(file.path()).unwrap();
        assert_eq!(settings.simulation_temperature, 313.0);
        assert_eq!(settings.parameter, SweepParameter::Volume);
        assert_eq!(settings.frequency_factor, 0.5);
        assert_eq!(settings.solver, SolverSettings::default());
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"simulation_temperature": 0.0}}"#).unwrap();
        let result = SimulationSettings::load(file.path());
        assert!(matches!(
            result,
            Err(DataError::Kinetics(KineticsError::Domain(_)))
        ));

        let settings = SimulationSettings {
            frequency_factor: -1.0,
            ..SimulationSettings::default()
        };
        assert!(settings.check().unwrap_err().is_invalid_input());
        let dir = tempdir().unwrap();
        assert!(settings.save(&dir.path().join("bad.json")).is_err());
    }

    #[test]
    fn test_missing_data_file() {
        let settings = SimulationSettings {
            data_file: Some("no_such_reference_file.json".to_string()),
            ..SimulationSettings::default()
        };
        assert!(matches!(settings.library(), Err(DataError::NotFound(_))));
    }
}
