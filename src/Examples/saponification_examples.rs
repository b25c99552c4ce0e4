use std::io::{self, Write};

pub fn sapon_examples<W: Write>(task: usize, out: &mut W) -> io::Result<()> {
    //
    match task {
        0 => {
            // Arrhenius rate constant: numeric and symbolic forms
            use crate::Kinetics::arrhenius::{arrhenius_sym, compute_rate_constant};
            let (A, Ea) = (0.5, 43094.0);
            let k_sym = arrhenius_sym(A, Ea);
            writeln!(out, "k(T) = {}", k_sym)?;
            let k_fun = k_sym.lambdify1D();
            for T in [293.0, 298.0, 303.0, 313.0] {
                match compute_rate_constant(A, Ea, T) {
                    Ok(k) => writeln!(
                        out,
                        "T = {} K, k = {:.4e} L/mol/s, symbolic {:.4e}",
                        T,
                        k,
                        k_fun(T)
                    )?,
                    Err(e) => writeln!(out, "T = {} K: {}", T, e)?,
                }
            }
            // undefined temperature
            if let Err(e) = compute_rate_constant(A, Ea, 0.0) {
                writeln!(out, "T = 0 K: {}", e)?;
            }
        }
        1 => {
            // one trajectory, every method
            use crate::Kinetics::ode_solver::SolverSettings;
            use crate::Kinetics::second_order_IVP::{IntegrationMethod, integrate_trajectory_with};
            use crate::ReferenceData::al_mesfer_2017::TIME_S;
            use strum::IntoEnumIterator;
            let (C0, k) = (0.05, 0.04);
            for method in IntegrationMethod::iter() {
                match integrate_trajectory_with(C0, k, &TIME_S, method, &SolverSettings::default()) {
                    Ok(trajectory) => {
                        writeln!(out, "{:?}: {:?}", method, trajectory.concentrations())?;
                    }
                    Err(e) => writeln!(out, "{:?}: {}", method, e)?,
                }
            }
        }
        2 => {
            // temperature sweep against the bundled measurements
            use crate::Kinetics::saponification_sweep::simulate_sweep;
            use crate::ReferenceData::experimental_curves::SweepParameter;
            use crate::settings::SimulationSettings;
            let settings = SimulationSettings::default();
            let library = crate::ReferenceData::al_mesfer_2017::al_mesfer_2017();
            let report = library
                .curves(SweepParameter::Temperature)
                .map_err(|e| e.to_string())
                .and_then(|curves| {
                    simulate_sweep(
                        SweepParameter::Temperature,
                        curves,
                        &settings.reaction(),
                        settings.method,
                        &settings.solver,
                    )
                    .map_err(|e| e.to_string())
                });
            match report {
                Ok(report) => report.write_report(out)?,
                Err(e) => writeln!(out, "{}", e)?,
            }
        }
        3 => {
            // very fast reaction: concentration collapses in the first interval
            use crate::Kinetics::arrhenius::ReactionParameters;
            use crate::Kinetics::ode_solver::SolverSettings;
            use crate::Kinetics::saponification_sweep::simulate_sweep;
            use crate::Kinetics::second_order_IVP::IntegrationMethod;
            use crate::ReferenceData::experimental_curves::SweepParameter;
            let library = crate::ReferenceData::al_mesfer_2017::al_mesfer_2017();
            let reaction = ReactionParameters::new(1.0e12, 20000.0, 298.0);
            let report = library
                .curves(SweepParameter::AgitationRate)
                .map_err(|e| e.to_string())
                .and_then(|curves| {
                    simulate_sweep(
                        SweepParameter::AgitationRate,
                        curves,
                        &reaction,
                        IntegrationMethod::RK45,
                        &SolverSettings::default(),
                    )
                    .map_err(|e| e.to_string())
                });
            match report {
                Ok(report) => {
                    writeln!(out, "high rate constant: {}", report.high_rate_constant)?;
                    report.write_report(out)?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            }
        }
        _ => {
            writeln!(out, "There is no example with number {}", task)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(task: usize) -> String {
        let mut out: Vec<u8> = Vec::new();
        sapon_examples(task, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_arrhenius_example() {
        let text = run(0);
        assert!(text.contains("T = 298 K, k = "));
        assert!(text.contains("T = 0 K: Domain error"));
    }

    #[test]
    fn test_methods_example() {
        let text = run(1);
        for name in ["Analytic:", "RK45:", "BDF:", "Radau:"] {
            assert!(text.contains(name), "{} missing", name);
        }
        assert!(!text.contains("error"));
    }

    #[test]
    fn test_temperature_sweep_example() {
        let text = run(2);
        assert!(text.contains("Effect of Temperature"));
        assert!(!text.contains("very high"));
    }

    #[test]
    fn test_fast_reaction_example() {
        let text = run(3);
        assert!(text.contains("high rate constant: true"));
        assert!(text.contains("very high"));
    }

    #[test]
    fn test_unknown_example() {
        assert!(run(7).contains("There is no example with number 7"));
    }
}
