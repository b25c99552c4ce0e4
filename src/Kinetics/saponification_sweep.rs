//! # Simulation of one experimental sweep
//!
//! For every condition of the selected sweep the second-order model is integrated
//! over the experimental sampling times, starting from the first measured value.
//!
//! Rate constant per condition:
//! - labels that encode a temperature ("303K") use `k = A*exp(-Ea/(R*T_label))`
//! - every other label (volume, agitation, concentration) uses the single
//!   rate constant at the simulation temperature
//!
//! Conditions are independent of each other, the report is the same whatever the
//! evaluation order.

use super::arrhenius::{ReactionParameters, compute_rate_constant};
use super::ode_solver::SolverSettings;
use super::kinetics_error::KineticsError;
use super::second_order_IVP::{ConcentrationTrajectory, IntegrationMethod, integrate_trajectory_with};
use crate::ReferenceData::experimental_curves::{ExperimentalCurve, SweepParameter};
use log::{info, warn};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// Above this rate constant [L/mol/s] the simulated curves drop to zero almost at once
pub const HIGH_RATE_CONSTANT: f64 = 1.0;

/// Difference between measured and simulated concentrations at the measurement times
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deviation {
    /// root-mean-square deviation [mol/L]
    pub rmse: f64,
    /// largest absolute deviation [mol/L]
    pub max_abs: f64,
}

impl Deviation {
    pub fn between(experimental: &[f64], simulated: &[f64]) -> Result<Self, KineticsError> {
        if experimental.len() != simulated.len() {
            return Err(KineticsError::InvalidInput(format!(
                "cannot compare {} experimental points with {} simulated points",
                experimental.len(),
                simulated.len()
            )));
        }
        if experimental.is_empty() {
            return Ok(Self {
                rmse: 0.0,
                max_abs: 0.0,
            });
        }
        let exp = DVector::from_column_slice(experimental);
        let sim = DVector::from_column_slice(simulated);
        let residual = exp - sim;
        let n = residual.len() as f64;
        Ok(Self {
            rmse: residual.norm() / n.sqrt(),
            max_abs: residual.amax(),
        })
    }
}

/// Simulated counterpart of one experimental curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionResult {
    pub label: String,
    /// temperature read from the label, if it is a temperature label
    pub label_temperature: Option<f64>,
    /// rate constant used for this condition [L/mol/s]
    pub rate_constant: f64,
    pub experimental: ExperimentalCurve,
    pub simulated: ConcentrationTrajectory,
    pub deviation: Deviation,
}

/// Result of simulating all conditions of a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub parameter: SweepParameter,
    pub reaction: ReactionParameters,
    pub method: IntegrationMethod,
    /// rate constant at the simulation temperature [L/mol/s]
    pub simulation_rate_constant: f64,
    /// `simulation_rate_constant` exceeds [`HIGH_RATE_CONSTANT`]
    pub high_rate_constant: bool,
    pub conditions: Vec<ConditionResult>,
}

impl SweepReport {
    pub fn condition(&self, label: &str) -> Option<&ConditionResult> {
        self.conditions.iter().find(|c| c.label == label)
    }
}

/// Rate constant for one condition: label temperature if present, otherwise `k_sim`
pub fn condition_rate_constant(
    reaction: &ReactionParameters,
    curve: &ExperimentalCurve,
    k_sim: f64,
) -> Result<f64, KineticsError> {
    match curve.condition_temperature() {
        Some(T) => compute_rate_constant(reaction.A, reaction.Ea, T),
        None => Ok(k_sim),
    }
}

/// Simulates one experimental condition
pub fn simulate_condition(
    reaction: &ReactionParameters,
    curve: &ExperimentalCurve,
    k_sim: f64,
    method: IntegrationMethod,
    settings: &SolverSettings,
) -> Result<ConditionResult, KineticsError> {
    let C0 = curve.initial_concentration().ok_or_else(|| {
        KineticsError::InvalidInput(format!("curve '{}' has no points", curve.label))
    })?;
    let k = condition_rate_constant(reaction, curve, k_sim)?;
    let simulated = integrate_trajectory_with(C0, k, &curve.time, method, settings)?;
    let deviation = Deviation::between(&curve.concentration, &simulated.concentrations())?;
    Ok(ConditionResult {
        label: curve.label.clone(),
        label_temperature: curve.condition_temperature(),
        rate_constant: k,
        experimental: curve.clone(),
        simulated,
        deviation,
    })
}

/// Simulates every curve of a sweep with the given reaction parameters
pub fn simulate_sweep(
    parameter: SweepParameter,
    curves: &[ExperimentalCurve],
    reaction: &ReactionParameters,
    method: IntegrationMethod,
    settings: &SolverSettings,
) -> Result<SweepReport, KineticsError> {
    let k_sim = reaction.rate_constant()?;
    let high_rate_constant = k_sim > HIGH_RATE_CONSTANT;
    if high_rate_constant {
        warn!(
            "rate constant {:.2e} L/mol/s is very high, simulated concentration may drop to zero at once; try reducing A or Ea",
            k_sim
        );
    }

    let conditions = curves
        .iter()
        .map(|curve| simulate_condition(reaction, curve, k_sim, method, settings))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "simulated {} conditions of the {} sweep, k_sim = {:.3e} L/mol/s",
        conditions.len(),
        parameter,
        k_sim
    );
    Ok(SweepReport {
        parameter,
        reaction: *reaction,
        method,
        simulation_rate_constant: k_sim,
        high_rate_constant,
        conditions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReferenceData::al_mesfer_2017::al_mesfer_2017;
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    fn default_reaction() -> ReactionParameters {
        ReactionParameters::new(0.5, 43094.0, 298.0)
    }

    fn run(parameter: SweepParameter, reaction: &ReactionParameters) -> SweepReport {
        let library = al_mesfer_2017();
        simulate_sweep(
            parameter,
            library.curves(parameter).unwrap(),
            reaction,
            IntegrationMethod::RK45,
            &SolverSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_temperature_sweep_uses_label_temperatures() {
        let reaction = default_reaction();
        let report = run(SweepParameter::Temperature, &reaction);
        assert_eq!(report.conditions.len(), 3);
        for (label, T) in [("293K", 293.0), ("303K", 303.0), ("313K", 313.0)] {
            let condition = report.condition(label).unwrap();
            assert_eq!(condition.label_temperature, Some(T));
            assert_relative_eq!(
                condition.rate_constant,
                compute_rate_constant(0.5, 43094.0, T).unwrap(),
                max_relative = 1e-14
            );
        }
        // hotter runs decay faster
        let k: Vec<f64> = report.conditions.iter().map(|c| c.rate_constant).collect();
        assert!(k[0] < k[1] && k[1] < k[2]);
    }

    #[test]
    fn test_other_sweeps_use_simulation_rate_constant() {
        let reaction = default_reaction();
        let k_sim = reaction.rate_constant().unwrap();
        for parameter in SweepParameter::iter().filter(|p| *p != SweepParameter::Temperature) {
            let report = run(parameter, &reaction);
            assert_eq!(report.simulation_rate_constant, k_sim);
            for condition in &report.conditions {
                assert_eq!(condition.label_temperature, None);
                assert_eq!(condition.rate_constant, k_sim);
            }
        }
    }

    #[test]
    fn test_simulated_curves_follow_experimental_times() {
        let report = run(SweepParameter::Volume, &default_reaction());
        for condition in &report.conditions {
            assert_eq!(condition.simulated.times(), condition.experimental.time);
            assert_eq!(condition.simulated.C0, 0.05);
            assert_eq!(condition.simulated.len(), 7);
        }
    }

    #[test]
    fn test_high_rate_constant_flag() {
        let report = run(SweepParameter::Volume, &default_reaction());
        assert!(!report.high_rate_constant);

        let fast = ReactionParameters::new(1e9, 1000.0, 298.0);
        let report = run(SweepParameter::Volume, &fast);
        assert!(report.high_rate_constant);
        for condition in &report.conditions {
            let C = condition.simulated.concentrations();
            assert!(C[1] < 1e-6);
            assert!(C.iter().all(|c| *c >= 0.0));
        }
    }

    #[test]
    fn test_order_independent() {
        let library = al_mesfer_2017();
        let reaction = ReactionParameters::new(5e4, 30000.0, 298.0);
        let curves = library.curves(SweepParameter::Temperature).unwrap();
        let reversed: Vec<ExperimentalCurve> = curves.iter().rev().cloned().collect();
        let settings = SolverSettings::default();
        let forward = simulate_sweep(
            SweepParameter::Temperature,
            curves,
            &reaction,
            IntegrationMethod::RK45,
            &settings,
        )
        .unwrap();
        let backward = simulate_sweep(
            SweepParameter::Temperature,
            &reversed,
            &reaction,
            IntegrationMethod::RK45,
            &settings,
        )
        .unwrap();
        for condition in &forward.conditions {
            assert_eq!(Some(condition), backward.condition(&condition.label));
        }
    }

    #[test]
    fn test_zero_temperature_propagates() {
        let library = al_mesfer_2017();
        let result = simulate_sweep(
            SweepParameter::Volume,
            library.curves(SweepParameter::Volume).unwrap(),
            &ReactionParameters::new(0.5, 43094.0, 0.0),
            IntegrationMethod::Analytic,
            &SolverSettings::default(),
        );
        assert!(result.unwrap_err().is_domain());
    }

    #[test]
    fn test_deviation() {
        let d = Deviation::between(&[0.05, 0.04, 0.03], &[0.05, 0.04, 0.03]).unwrap();
        assert_eq!(d.rmse, 0.0);
        assert_eq!(d.max_abs, 0.0);

        let d = Deviation::between(&[0.05, 0.04], &[0.05, 0.01]).unwrap();
        assert_relative_eq!(d.max_abs, 0.03, epsilon = 1e-15);
        assert_relative_eq!(d.rmse, 0.03 / 2.0_f64.sqrt(), epsilon = 1e-15);

        assert!(Deviation::between(&[0.05], &[0.05, 0.04]).is_err());
    }

    #[test]
    fn test_zero_rate_deviation_equals_raw_drop() {
        // with k = 0 the model stays at C0, deviation is the measured drop
        let reaction = ReactionParameters::new(0.0, 43094.0, 298.0);
        let report = run(SweepParameter::Temperature, &reaction);
        let condition = report.condition("313K").unwrap();
        assert!(condition.simulated.concentrations().iter().all(|c| *c == 0.05));
        assert_relative_eq!(condition.deviation.max_abs, 0.05 - 0.0061, epsilon = 1e-12);
    }
}
