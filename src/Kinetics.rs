/// Arrhenius rate constant, numeric and symbolic
///
///  # Examples
/// ```
/// use SaponKin::Kinetics::arrhenius::{compute_rate_constant, arrhenius_sym};
/// let k = compute_rate_constant(0.5, 43094.0, 298.0).unwrap();
/// let k_sym = arrhenius_sym(0.5, 43094.0);
/// let k_from_sym = k_sym.lambdify1D()(298.0);
/// assert!((k - k_from_sym).abs() < 1e-12 * k);
/// ```
pub mod arrhenius;
/// Second-order decay of NaOH concentration `dC/dt = -k*C^2`: closed form and
/// RustedSciThe ODE solvers (RK45, BDF, Radau) sampled at given times.
/// The caller supplies the initial concentration, the rate constant and a strictly increasing
/// vector of time samples; the module returns the concentration trajectory at those times.
///  # Examples
/// ```
/// use SaponKin::Kinetics::second_order_IVP::{integrate_trajectory_with, IntegrationMethod};
/// use SaponKin::Kinetics::ode_solver::SolverSettings;
/// let times = vec![0.0, 480.0, 960.0];
/// let numeric = integrate_trajectory_with(0.05, 1e-3, &times, IntegrationMethod::RK45, &SolverSettings::default()).unwrap();
/// let exact = integrate_trajectory_with(0.05, 1e-3, &times, IntegrationMethod::Analytic, &SolverSettings::default()).unwrap();
/// for (a, b) in numeric.concentrations().iter().zip(exact.concentrations()) {
///     assert!((a - b).abs() < 1e-9);
/// }
/// ```
pub mod second_order_IVP;
/// Symbolic rate law through the RustedSciThe ODE solvers, one output interval at a time
pub mod ode_solver;
pub mod kinetics_error;
/// Runs the kinetic model for every condition of an experimental sweep and compares
/// the simulated curves with the measured ones
pub mod saponification_sweep;
/// tabular terminal output and JSON export of sweep reports
pub mod sweep_output;
