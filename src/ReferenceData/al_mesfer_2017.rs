//! Batch reactor data for ethyl acetate saponification by NaOH.
//!
//! Al Mesfer, M. K. (2017). Experimental Study of Batch Reactor Performance for Ethyl
//! Acetate Saponification. International Journal of Chemical Reactor Engineering.
//! DOI:10.1515/ijcre-2016-0174
//!
//! NaOH concentration [mol/L] sampled every 8 minutes. Values are kept exactly as
//! published, including the 0.067 reading of the 1.8 L run.

use super::experimental_curves::{ExperimentalCurve, ReferenceLibrary, SweepParameter};

pub const SOURCE: &str = "Al Mesfer et al., 2017";

/// sampling times [s]
pub const TIME_S: [f64; 7] = [0.0, 480.0, 960.0, 1440.0, 1920.0, 2400.0, 2880.0];

const TEMPERATURE: [(&str, [f64; 7]); 3] = [
    ("293K", [0.0500, 0.0333, 0.0233, 0.0178, 0.0156, 0.0144, 0.0125]),
    ("303K", [0.0500, 0.0256, 0.0189, 0.0144, 0.0122, 0.0100, 0.0078]),
    ("313K", [0.0500, 0.0200, 0.0133, 0.0100, 0.0083, 0.0067, 0.0061]),
];

const VOLUME: [(&str, [f64; 7]); 3] = [
    ("1.2L", [0.0500, 0.0222, 0.0156, 0.0128, 0.0100, 0.0089, 0.0083]),
    ("1.4L", [0.0500, 0.0289, 0.0222, 0.0178, 0.0156, 0.0144, 0.0133]),
    ("1.8L", [0.0500, 0.067, 0.0289, 0.0256, 0.0222, 0.0200, 0.0167]),
];

const AGITATION_RATE: [(&str, [f64; 7]); 3] = [
    ("70rpm", [0.0500, 0.0189, 0.0133, 0.0100, 0.0078, 0.0067, 0.0056]),
    ("110rpm", [0.0500, 0.0256, 0.0189, 0.0156, 0.0128, 0.0111, 0.0100]),
    ("150rpm", [0.0500, 0.0333, 0.0267, 0.0222, 0.0200, 0.0178, 0.0156]),
];

const INITIAL_CONCENTRATION: [(&str, [f64; 7]); 3] = [
    ("0.025M", [0.0500, 0.0360, 0.0260, 0.0200, 0.0160, 0.0120, 0.0111]),
    ("0.050M", [0.0500, 0.0389, 0.0300, 0.0244, 0.0211, 0.0189, 0.0167]),
    ("0.075M", [0.0500, 0.0392, 0.0313, 0.0256, 0.0222, 0.0200, 0.0178]),
];

fn curves(table: &[(&str, [f64; 7])]) -> Vec<ExperimentalCurve> {
    table
        .iter()
        .map(|(label, conc)| ExperimentalCurve::new(label, TIME_S.to_vec(), conc.to_vec()))
        .collect()
}

/// The four sweeps of the study, three conditions each
pub fn al_mesfer_2017() -> ReferenceLibrary {
    let mut library = ReferenceLibrary::new(SOURCE);
    library.insert_sweep(SweepParameter::Temperature, curves(&TEMPERATURE));
    library.insert_sweep(SweepParameter::Volume, curves(&VOLUME));
    library.insert_sweep(SweepParameter::AgitationRate, curves(&AGITATION_RATE));
    library.insert_sweep(
        SweepParameter::InitialConcentration,
        curves(&INITIAL_CONCENTRATION),
    );
    library
}
