use super::cli_examples::examples_menu;
use super::cli_simulation::{arrhenius_table, edit_settings, run_simulation};
use super::console::{BLUE, Console, RESET};
use super::theory_help::theory_menu;
use crate::settings::{DEFAULT_CONFIG_FILE, SimulationSettings};
use log::error;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Menu on stdin/stdout with settings from the default config file
pub fn run_interactive_menu() {
    let config_file = Path::new(DEFAULT_CONFIG_FILE);
    let mut settings = match SimulationSettings::load(config_file) {
        Ok(settings) => settings,
        Err(e) => {
            error!("could not read settings, using defaults: {}", e);
            SimulationSettings::default()
        }
    };
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    if let Err(e) = main_menu(&mut console, &mut settings, config_file) {
        error!("terminal error: {}", e);
    }
}

/// Runs until "0" or end of input. Errors of a menu action are shown and the menu returns;
/// only terminal I/O failures end the loop with `Err`.
pub fn main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &mut SimulationSettings,
    config_file: &Path,
) -> Result<(), String> {
    loop {
        show_main_menu(console)?;
        let Some(choice) = console.ask("Enter your choice: ")? else {
            return Ok(());
        };
        let result = match choice.as_str() {
            "1" => run_simulation(console, settings),
            "2" => edit_settings(console, settings, config_file),
            "3" => arrhenius_table(console, settings),
            "4" => theory_menu(console),
            "5" => examples_menu(console),
            "0" => {
                console.say("Goodbye!")?;
                return Ok(());
            }
            _ => console.say("Invalid choice. Please try again."),
        };
        if let Err(e) = result {
            console.error(&e)?;
        }
    }
}

fn show_main_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), String> {
    console.say(&format!(
        "{}\n Saponification kinetics: ethyl acetate + NaOH in a batch reactor,\n second-order model vs experimental data\n{}",
        BLUE, RESET
    ))?;
    console.option("1", "Run simulation")?;
    console.option("2", "Edit settings")?;
    console.option("3", "Arrhenius table")?;
    console.option("4", "Theory & references")?;
    console.option("5", "Examples")?;
    console.option("0", "Exit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run(input: &str) -> (String, SimulationSettings) {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.json");
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut settings = SimulationSettings::default();
        main_menu(&mut console, &mut settings, &config).unwrap();
        (String::from_utf8(console.out).unwrap(), settings)
    }

    #[test]
    fn test_exit() {
        let (text, settings) = run("0\n");
        assert!(text.contains("Goodbye!"));
        assert_eq!(settings, SimulationSettings::default());
    }

    #[test]
    fn test_end_of_input_leaves_menu() {
        let (text, _) = run("7\n");
        assert!(text.contains("Invalid choice"));
    }

    #[test]
    fn test_failed_action_returns_to_menu() {
        // zero temperature in the simulation dialog, then exit
        let (text, settings) = run("1\n\n\n0\n\n\n0\n");
        assert!(text.contains("Error: Domain error"));
        assert!(text.contains("Goodbye!"));
        assert_eq!(settings, SimulationSettings::default());
    }

    #[test]
    fn test_simulation_from_menu() {
        let (text, _) = run("1\n\n\n\n4\n1\nn\n0\n");
        assert!(text.contains("Effect of Initial Concentration"));
        assert!(text.contains("Summary:"));
    }
}
