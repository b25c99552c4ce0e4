//! # Numerical integration of the symbolic rate law
//!
//! The rate law is handed to the RustedSciThe `UniversalODESolver` as a symbolic
//! expression of `C` with `t` as the argument. Output samples are reached by solving
//! one interval `[t_i, t_(i+1)]` at a time and restarting from the value at its end,
//! so every sample is an endpoint of a solve and nothing is interpolated.
//!
//! Solver parameters follow the RustedSciThe conventions:
//! - adaptive solvers (RK45, BDF) use `rtol`, `atol`, `first_step`, `max_step`
//! - fixed step implicit solvers (Radau) use `step_size`, `tolerance` and `max_iterations`

use super::kinetics_error::KineticsError;
use RustedSciThe::numerical::ODE_api2::{SolverParam, SolverType, UniversalODESolver};
use RustedSciThe::symbolic::symbolic_engine::Expr;
use log::debug;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// largest iteration limit accepted by every solver
pub const MAX_ITERATIONS_LIMIT: usize = 1_000_000_000;

/// Numerical settings passed to the ODE solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// relative tolerance
    pub rtol: f64,
    /// absolute tolerance [mol/L]
    pub atol: f64,
    /// first trial step of the adaptive solvers [s]; estimated by the solver when `None`
    pub first_step: Option<f64>,
    /// step of the fixed step implicit solvers [s]
    pub step_size: f64,
    /// iteration limit handed to the solver
    pub max_iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            rtol: 1e-10,
            atol: 1e-14,
            first_step: None,
            step_size: 0.1,
            max_iterations: 100_000,
        }
    }
}

impl SolverSettings {
    pub fn check(&self) -> Result<(), KineticsError> {
        if !(self.rtol > 0.0) || !self.rtol.is_finite() {
            return Err(KineticsError::InvalidInput(format!(
                "rtol must be positive, got {}",
                self.rtol
            )));
        }
        if !(self.atol > 0.0) || !self.atol.is_finite() {
            return Err(KineticsError::InvalidInput(format!(
                "atol must be positive, got {}",
                self.atol
            )));
        }
        if let Some(h) = self.first_step {
            if !(h > 0.0) || !h.is_finite() {
                return Err(KineticsError::InvalidInput(format!(
                    "first_step must be positive, got {}",
                    h
                )));
            }
        }
        if !(self.step_size > 0.0) || !self.step_size.is_finite() {
            return Err(KineticsError::InvalidInput(format!(
                "step_size must be positive, got {}",
                self.step_size
            )));
        }
        if self.max_iterations == 0 || self.max_iterations > MAX_ITERATIONS_LIMIT {
            return Err(KineticsError::InvalidInput(format!(
                "max_iterations must be between 1 and {}, got {}",
                MAX_ITERATIONS_LIMIT, self.max_iterations
            )));
        }
        Ok(())
    }

    /// Full parameter map for an interval of length `span`
    pub fn solver_params(&self, span: f64) -> HashMap<String, SolverParam> {
        let first_step = self.first_step.map(|h| h.min(span));
        let max_iterations = self.max_iterations.min(MAX_ITERATIONS_LIMIT);
        HashMap::from([
            ("step_size".to_owned(), SolverParam::Float(self.step_size.min(span))),
            ("tolerance".to_owned(), SolverParam::Float(self.rtol)),
            (
                "max_iterations".to_owned(),
                SolverParam::Int(max_iterations.try_into().unwrap_or(100_000)),
            ),
            ("rtol".to_owned(), SolverParam::Float(self.rtol)),
            ("atol".to_owned(), SolverParam::Float(self.atol)),
            ("max_step".to_owned(), SolverParam::Float(span)),
            ("first_step".to_owned(), SolverParam::OptionalFloat(first_step)),
            ("vectorized".to_owned(), SolverParam::Bool(false)),
            ("jac_sparsity".to_owned(), SolverParam::OptionalMatrix(None)),
            ("parallel".to_owned(), SolverParam::Bool(false)),
        ])
    }
}

/// Solves `dC/dt = rate_law(C)` from `(t_start, C_start)` to `t_end` and returns `C(t_end)`
pub fn integrate_interval(
    rate_law: &Expr,
    solver_type: &SolverType,
    C_start: f64,
    t_start: f64,
    t_end: f64,
    settings: &SolverSettings,
) -> Result<f64, KineticsError> {
    if t_end < t_start {
        return Err(KineticsError::InvalidInput(format!(
            "cannot integrate backwards from t = {} to t = {}",
            t_start, t_end
        )));
    }
    if t_end == t_start || C_start == 0.0 {
        return Ok(C_start);
    }
    let span = t_end - t_start;
    let mut ode = UniversalODESolver::new(
        vec![rate_law.clone()],
        vec!["C".to_owned()],
        "t".to_owned(),
        solver_type.clone(),
        t_start,
        DVector::from_vec(vec![C_start]),
        t_end,
    );
    ode.set_parameters(settings.solver_params(span));
    ode.initialize();
    ode.solve();

    let (t_result, C_result) = ode.get_result();
    let t_reached = t_result
        .as_ref()
        .and_then(|t| t.iter().last().copied())
        .ok_or_else(|| {
            KineticsError::InvalidInput(format!(
                "solver returned no result on [{}, {}]",
                t_start, t_end
            ))
        })?;
    // one variable: the last stored element is C at the last time point
    let C_end = C_result
        .as_ref()
        .and_then(|C| C.iter().last().copied())
        .ok_or_else(|| {
            KineticsError::InvalidInput(format!(
                "solver returned no concentration on [{}, {}]",
                t_start, t_end
            ))
        })?;
    if (t_end - t_reached).abs() > 1e-9 * t_end.abs().max(1.0) {
        return Err(KineticsError::InvalidInput(format!(
            "solver stopped at t = {} before reaching t = {} (iteration limit {})",
            t_reached, t_end, settings.max_iterations
        )));
    }
    if !C_end.is_finite() {
        return Err(KineticsError::InvalidInput(format!(
            "solver diverged on [{}, {}]",
            t_start, t_end
        )));
    }
    debug!("C({}) = {:e} -> C({}) = {:e}", t_start, C_start, t_end, C_end);
    Ok(C_end)
}
