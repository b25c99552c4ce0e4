//! Experimental concentration curves grouped by the swept reactor parameter.

use super::data_error::DataError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use strum_macros::EnumIter;

/// Reactor parameter varied across the curves of one sweep
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum SweepParameter {
    Temperature,
    Volume,
    AgitationRate,
    InitialConcentration,
}

impl SweepParameter {
    pub fn display_name(&self) -> &'static str {
        match self {
            SweepParameter::Temperature => "Temperature",
            SweepParameter::Volume => "Volume",
            SweepParameter::AgitationRate => "Agitation Rate",
            SweepParameter::InitialConcentration => "Initial Concentration",
        }
    }

    /// unit carried by the condition labels of this sweep
    pub fn label_unit(&self) -> &'static str {
        match self {
            SweepParameter::Temperature => "K",
            SweepParameter::Volume => "L",
            SweepParameter::AgitationRate => "rpm",
            SweepParameter::InitialConcentration => "M",
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SweepParameter {
    type Err = DataError;

    /// Accepts display names, variant names and short codes, case and space insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "temperature" | "t" => Ok(SweepParameter::Temperature),
            "volume" | "v" => Ok(SweepParameter::Volume),
            "agitationrate" | "agitation" | "rpm" => Ok(SweepParameter::AgitationRate),
            "initialconcentration" | "concentration" | "c0" => {
                Ok(SweepParameter::InitialConcentration)
            }
            _ => Err(DataError::NotFound(format!("unknown sweep parameter '{}'", s))),
        }
    }
}

/// Measured NaOH concentration [mol/L] at times [s] for one labelled condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentalCurve {
    pub label: String,
    pub time: Vec<f64>,
    pub concentration: Vec<f64>,
}

impl ExperimentalCurve {
    pub fn new(label: &str, time: Vec<f64>, concentration: Vec<f64>) -> Self {
        Self {
            label: label.to_string(),
            time,
            concentration,
        }
    }

    /// First measured concentration, used as C0 of the simulation
    pub fn initial_concentration(&self) -> Option<f64> {
        self.concentration.first().copied()
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.time
            .iter()
            .copied()
            .zip(self.concentration.iter().copied())
            .collect()
    }

    /// Temperature encoded in labels like "293K"; `None` for any other label
    pub fn condition_temperature(&self) -> Option<f64> {
        parse_temperature_label(&self.label)
    }

    pub fn check(&self) -> Result<(), DataError> {
        if self.time.is_empty() {
            return Err(DataError::InvalidData(format!(
                "curve '{}' has no points",
                self.label
            )));
        }
        if self.time.len() != self.concentration.len() {
            return Err(DataError::InvalidData(format!(
                "curve '{}' has {} times but {} concentrations",
                self.label,
                self.time.len(),
                self.concentration.len()
            )));
        }
        for (i, t) in self.time.iter().enumerate() {
            if !(*t >= 0.0) || !t.is_finite() {
                return Err(DataError::InvalidData(format!(
                    "curve '{}': time {} is negative or not finite",
                    self.label, t
                )));
            }
            if i > 0 && *t <= self.time[i - 1] {
                return Err(DataError::InvalidData(format!(
                    "curve '{}': times are not strictly increasing at index {}",
                    self.label, i
                )));
            }
        }
        if self
            .concentration
            .iter()
            .any(|c| !(*c >= 0.0) || !c.is_finite())
        {
            return Err(DataError::InvalidData(format!(
                "curve '{}' contains a negative or non-finite concentration",
                self.label
            )));
        }
        if self.concentration[0] <= 0.0 {
            return Err(DataError::InvalidData(format!(
                "curve '{}' starts at zero concentration",
                self.label
            )));
        }
        Ok(())
    }
}

fn temperature_label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\+?(\d+)\s*K\s*$").expect("valid temperature label regex"))
}

/// "293K" -> 293.0. Only an integer number of kelvins followed by `K` is a temperature,
/// "1.2L", "70rpm" or "0.025M" are not.
pub fn parse_temperature_label(label: &str) -> Option<f64> {
    temperature_label_regex()
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .map(|T| T as f64)
}

/// A named collection of sweeps, each with its experimental curves in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLibrary {
    pub source: String,
    pub sweeps: BTreeMap<SweepParameter, Vec<ExperimentalCurve>>,
}

impl ReferenceLibrary {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            sweeps: BTreeMap::new(),
        }
    }

    pub fn insert_sweep(&mut self, parameter: SweepParameter, curves: Vec<ExperimentalCurve>) {
        self.sweeps.insert(parameter, curves);
    }

    pub fn curves(&self, parameter: SweepParameter) -> Result<&[ExperimentalCurve], DataError> {
        self.sweeps
            .get(&parameter)
            .map(|curves| curves.as_slice())
            .ok_or_else(|| {
                DataError::NotFound(format!(
                    "sweep '{}' is not in library '{}'",
                    parameter, self.source
                ))
            })
    }

    pub fn parameters(&self) -> Vec<SweepParameter> {
        self.sweeps.keys().copied().collect()
    }

    pub fn check(&self) -> Result<(), DataError> {
        if self.sweeps.is_empty() {
            return Err(DataError::InvalidData(format!(
                "library '{}' contains no sweeps",
                self.source
            )));
        }
        for (parameter, curves) in &self.sweeps {
            if curves.is_empty() {
                return Err(DataError::InvalidData(format!(
                    "sweep '{}' contains no curves",
                    parameter
                )));
            }
            for curve in curves {
                curve.check()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_temperature_label() {
        assert_eq!(parse_temperature_label("293K"), Some(293.0));
        assert_eq!(parse_temperature_label(" 313K "), Some(313.0));
        assert_eq!(parse_temperature_label("1.2L"), None);
        assert_eq!(parse_temperature_label("70rpm"), None);
        assert_eq!(parse_temperature_label("0.025M"), None);
        assert_eq!(parse_temperature_label("293.5K"), None);
        assert_eq!(parse_temperature_label("K"), None);
        assert_eq!(parse_temperature_label(""), None);
    }

    #[test]
    fn test_sweep_parameter_from_str() {
        for parameter in SweepParameter::iter() {
            let parsed: SweepParameter = parameter.display_name().parse().unwrap();
            assert_eq!(parsed, parameter);
            let parsed: SweepParameter = format!("{:?}", parameter).parse().unwrap();
            assert_eq!(parsed, parameter);
        }
        assert_eq!(
            "agitation_rate".parse::<SweepParameter>().unwrap(),
            SweepParameter::AgitationRate
        );
        assert!("pressure".parse::<SweepParameter>().is_err());
    }

    #[test]
    fn test_curve_check() {
        let good = ExperimentalCurve::new("293K", vec![0.0, 480.0], vec![0.05, 0.0333]);
        assert!(good.check().is_ok());
        assert_eq!(good.initial_concentration(), Some(0.05));
        assert_eq!(good.condition_temperature(), Some(293.0));
        assert_eq!(good.points(), vec![(0.0, 0.05), (480.0, 0.0333)]);

        let bad = [
            ExperimentalCurve::new("empty", vec![], vec![]),
            ExperimentalCurve::new("ragged", vec![0.0, 480.0], vec![0.05]),
            ExperimentalCurve::new("unsorted", vec![0.0, 480.0, 240.0], vec![0.05, 0.04, 0.03]),
            ExperimentalCurve::new("negative t", vec![-1.0, 480.0], vec![0.05, 0.04]),
            ExperimentalCurve::new("negative C", vec![0.0, 480.0], vec![0.05, -0.04]),
            ExperimentalCurve::new("zero C0", vec![0.0, 480.0], vec![0.0, 0.0]),
        ];
        for curve in bad {
            assert!(curve.check().is_err(), "{} should be rejected", curve.label);
        }
    }

    #[test]
    fn test_library_lookup() {
        let mut library = ReferenceLibrary::new("test");
        assert!(library.check().is_err());
        library.insert_sweep(
            SweepParameter::Volume,
            vec![ExperimentalCurve::new("1.2L", vec![0.0, 480.0], vec![0.05, 0.0222])],
        );
        assert!(library.check().is_ok());
        assert_eq!(library.curves(SweepParameter::Volume).unwrap().len(), 1);
        assert!(matches!(
            library.curves(SweepParameter::Temperature),
            Err(DataError::NotFound(_))
        ));
        assert_eq!(library.parameters(), vec![SweepParameter::Volume]);
    }
}
