/// Main menu of the terminal front end
pub mod cli_main;
/// Simulation dialog, settings editor and Arrhenius table
pub mod cli_simulation;
pub mod cli_examples;
/// Reader/writer based prompts and ANSI colours
pub mod console;
/// Overview, theory and references text
pub mod theory_help;
