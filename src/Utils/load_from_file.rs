use crate::ReferenceData::data_error::DataError;
use crate::ReferenceData::experimental_curves::ReferenceLibrary;
use log::{error, info, warn};
use std::fs;
use std::path::Path;

/// Reference library stored in a JSON file
pub struct LoadData {
    pub file_name: String,
}

impl LoadData {
    pub fn new(file_name: String) -> Self {
        LoadData { file_name }
    }
    pub fn load_library(&self) -> Result<ReferenceLibrary, DataError> {
        load_and_validate_library(&self.file_name)
    }
    pub fn save_library(&self, library: &ReferenceLibrary) -> Result<(), DataError> {
        save_library(&self.file_name, library)
    }
}

/// Parses a JSON document of the form
/// ```json
/// {
///   "source": "my lab, 2024",
///   "sweeps": {
///     "Temperature": [ {"label": "293K", "time": [0, 480], "concentration": [0.05, 0.033]} ]
///   }
/// }
/// ```
/// Sweep keys are `Temperature`, `Volume`, `AgitationRate`, `InitialConcentration`.
pub fn load_library_from_file(file_name: &str) -> Result<ReferenceLibrary, DataError> {
    let path = Path::new(file_name);
    if !path.exists() {
        return Err(DataError::NotFound(format!(
            "File '{}' does not exist",
            file_name
        )));
    }
    let content = fs::read_to_string(path)?;

    match serde_json::from_str::<ReferenceLibrary>(&content) {
        Ok(library) => {
            info!("Successfully parsed reference data from file '{}'", file_name);
            Ok(library)
        }
        Err(e) => {
            error!(
                "Error parsing reference data at line {}, column {} in file '{}': {}",
                e.line(),
                e.column(),
                file_name,
                e
            );
            // If possible, show the problematic line
            if let Some(problem_line) = content.lines().nth(e.line().saturating_sub(1)) {
                error!("Problematic line: {}", problem_line);
                if e.column() >= 1 && e.column() <= problem_line.len() + 1 {
                    error!("{}^", " ".repeat(e.column() - 1));
                }
            }
            Err(DataError::JsonError(e))
        }
    }
}

/// Loads a reference library and checks every curve
pub fn load_and_validate_library(file_name: &str) -> Result<ReferenceLibrary, DataError> {
    let library = load_library_from_file(file_name)?;

    for (parameter, curves) in &library.sweeps {
        if curves.is_empty() {
            warn!("Sweep '{}' in '{}' contains no curves", parameter, file_name);
        }
        for curve in curves {
            if curve.concentration.windows(2).any(|w| w[1] > w[0]) {
                warn!(
                    "Curve '{}' of sweep '{}' is not monotone; kept as measured",
                    curve.label, parameter
                );
            }
        }
    }
    library.check()?;

    info!(
        "Loaded and validated {} sweeps from file '{}'",
        library.sweeps.len(),
        file_name
    );
    Ok(library)
}

pub fn save_library(file_name: &str, library: &ReferenceLibrary) -> Result<(), DataError> {
    library.check()?;
    let content = serde_json::to_string_pretty(library)?;
    fs::write(file_name, content)?;
    info!("Saved reference data to '{}'", file_name);
    Ok(())
}
