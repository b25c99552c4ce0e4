//! # Arrhenius rate constant
//!
//! Temperature dependence of the saponification rate constant
//!
//! ```text
//! k = A * exp(-Ea/(R*T))
//! ```
//!
//! Where:
//! - `A`: frequency factor [1/s]
//! - `Ea`: activation energy [J/mol]
//! - `R`: gas constant (8.314 J/mol/K)
//! - `T`: temperature [K]
//!
//! The numeric function [`compute_rate_constant`] is the one used by the simulation.
//! [`arrhenius_sym`] returns the same relation as a symbolic expression of `T`,
//! which can be lambdified or differentiated like the rest of the kinetic expressions.

use super::kinetics_error::KineticsError;
use RustedSciThe::symbolic::symbolic_engine::Expr;
use serde::{Deserialize, Serialize};

/// Gas constant [J/mol/K]
pub const R: f64 = 8.314;

/// Inputs of one evaluation: frequency factor [1/s], activation energy [J/mol], temperature [K]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionParameters {
    pub A: f64,
    pub Ea: f64,
    pub T: f64,
}

impl ReactionParameters {
    pub fn new(A: f64, Ea: f64, T: f64) -> Self {
        Self { A, Ea, T }
    }

    /// Rate constant at `self.T`
    pub fn rate_constant(&self) -> Result<f64, KineticsError> {
        compute_rate_constant(self.A, self.Ea, self.T)
    }

    /// Same parameters at another temperature
    pub fn at_temperature(&self, T: f64) -> Self {
        Self { T, ..*self }
    }
}

/// Rate constant `k = A*exp(-Ea/(R*T))` [L/mol/s] with `R = 8.314`.
///
/// # Errors
/// * `Domain` - `T` is zero or negative, or the result is not finite
/// * `InvalidInput` - `A` is negative, or `A`/`Ea`/`T` is not finite
///
/// # Examples
/// ```
/// use SaponKin::Kinetics::arrhenius::compute_rate_constant;
/// let k = compute_rate_constant(0.5, 43094.0, 298.0).unwrap();
/// assert!(k > 0.0 && k < 1e-7);
/// ```
pub fn compute_rate_constant(A: f64, Ea: f64, T: f64) -> Result<f64, KineticsError> {
    compute_rate_constant_with_R(A, Ea, T, R)
}

/// [`compute_rate_constant`] with an explicit gas constant
pub fn compute_rate_constant_with_R(
    A: f64,
    Ea: f64,
    T: f64,
    R_gas: f64,
) -> Result<f64, KineticsError> {
    if !A.is_finite() || !Ea.is_finite() || !T.is_finite() || !R_gas.is_finite() {
        return Err(KineticsError::InvalidInput(format!(
            "Arrhenius parameters must be finite (A = {}, Ea = {}, T = {}, R = {})",
            A, Ea, T, R_gas
        )));
    }
    if A < 0.0 {
        return Err(KineticsError::InvalidInput(format!(
            "frequency factor must be non-negative, got {}",
            A
        )));
    }
    if T == 0.0 {
        return Err(KineticsError::Domain(
            "temperature is zero: Ea/(R*T) is undefined".to_string(),
        ));
    }
    if T < 0.0 {
        return Err(KineticsError::Domain(format!(
            "absolute temperature must be positive, got {} K",
            T
        )));
    }
    if R_gas <= 0.0 {
        return Err(KineticsError::Domain(format!(
            "gas constant must be positive, got {}",
            R_gas
        )));
    }

    let k = A * f64::exp(-Ea / (R_gas * T));
    if !k.is_finite() {
        return Err(KineticsError::Domain(format!(
            "rate constant overflows for A = {}, Ea = {}, T = {}",
            A, Ea, T
        )));
    }
    Ok(k)
}

/// Symbolic rate constant as a function of the variable `T`
pub fn arrhenius_sym(A: f64, Ea: f64) -> Expr {
    let A = Expr::Const(A);
    let Ea = Expr::Const(Ea);
    let R_sym = Expr::Const(R);
    let T = Expr::Var("T".to_string());
    A * Expr::Exp(Box::new(-Ea / (R_sym * T)))
}

/// Rate constants on `n` evenly spaced temperatures from `T_min` to `T_max` inclusive
pub fn rate_constants_for_T_range(
    A: f64,
    Ea: f64,
    T_min: f64,
    T_max: f64,
    n: usize,
) -> Result<Vec<(f64, f64)>, KineticsError> {
    if n == 0 {
        return Ok(Vec::new());
    }
    if T_max < T_min {
        return Err(KineticsError::InvalidInput(format!(
            "T_max ({}) is below T_min ({})",
            T_max, T_min
        )));
    }
    let dT = if n > 1 {
        (T_max - T_min) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n)
        .map(|i| {
            let T = T_min + dT * i as f64;
            compute_rate_constant(A, Ea, T).map(|k| (T, k))
        })
        .collect()
}
