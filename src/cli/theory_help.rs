use super::console::Console;
use std::io::{BufRead, Write};

pub const OVERVIEW: &str = r#"
SAPONIFICATION OF ETHYL ACETATE
===============================

Ethyl acetate reacts with sodium hydroxide (NaOH) in a batch reactor:

    CH3COOC2H5 + NaOH -> CH3COONa + C2H5OH

giving sodium acetate and ethanol. The toolkit follows the NaOH concentration
over time and compares the kinetic model with measured curves for four sweeps:
reaction temperature, reactor volume, agitation rate and initial concentration.
"#;

pub const THEORY: &str = r#"
THEORY & KINETICS
=================

Rate law
--------
Second-order irreversible reaction with equal initial concentrations:

    -dC/dt = k * C^2,      C(0) = C0

Integrated form:

    1/C = 1/C0 + k*t   =>   C(t) = C0 / (1 + k*C0*t)

Arrhenius equation
------------------
    k = A * exp(-Ea / (R*T))

    A  - frequency factor (1/s)
    Ea - activation energy (J/mol)
    R  - gas constant, 8.314 J/(mol*K)
    T  - temperature (K)

Integration methods
-------------------
    Analytic  - integrated rate law above
    RK45      - adaptive Runge-Kutta 4(5), rtol 1e-10, atol 1e-14 by default
    BDF       - adaptive backward differentiation formulas for stiff cases
    Radau     - implicit Radau IIA with a fixed step (0.1 s by default)

Temperature sweep curves use k evaluated at the temperature in the curve label
(e.g. "303K"); all other sweeps use k at the simulation temperature.
"#;

pub const REFERENCES: &str = r#"
REFERENCES
==========

- Al Mesfer, M. K. (2017). Experimental Study of Batch Reactor Performance for
  Ethyl Acetate Saponification. International Journal of Chemical Reactor
  Engineering. DOI:10.1515/ijcre-2016-0174
- Fogler, H. S. (2006). Elements of Chemical Reaction Engineering.
- Bursali, N., Ertunc, S., & Akay, B. (2006). Chem. Eng. Process., 45, 980-989.

Summary highlights
------------------
- Al Mesfer (2017) studied ethyl acetate saponification in a batch reactor
  using NaOH.
- Temperature has a strong inverse effect on NaOH concentration over time.
- Conductivity was used to track NaOH consumption and validate second-order
  kinetics.
"#;

pub fn theory_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), String> {
    loop {
        console.header("Theory & References")?;
        console.option("1", "Overview")?;
        console.option("2", "Theory & kinetics")?;
        console.option("3", "References")?;
        console.option("0", "Back to main menu")?;
        let Some(choice) = console.ask("Enter your choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => console.say(OVERVIEW)?,
            "2" => console.say(THEORY)?,
            "3" => console.say(REFERENCES)?,
            "0" => return Ok(()),
            _ => console.say("Invalid choice. Please try again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_theory_menu() {
        let mut console = Console::new(Cursor::new(b"2\n3\n9\n0\n".to_vec()), Vec::new());
        theory_menu(&mut console).unwrap();
        let text = String::from_utf8(console.out).unwrap();
        assert!(text.contains("C(t) = C0 / (1 + k*C0*t)"));
        assert!(text.contains("ijcre-2016-0174"));
        assert!(text.contains("Invalid choice"));
    }
}
