use super::console::Console;
use crate::Examples::saponification_examples::sapon_examples;
use std::io::{BufRead, Write};

pub fn examples_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), String> {
    loop {
        console.header("Examples")?;
        console.option("1", "Arrhenius rate constant, numeric and symbolic")?;
        console.option("2", "One trajectory, every integration method")?;
        console.option("3", "Temperature sweep vs Al Mesfer 2017")?;
        console.option("4", "Very fast reaction")?;
        console.option("0", "Back to main menu")?;
        let Some(choice) = console.ask("Enter your choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => run_example(console, 0)?,
            "2" => run_example(console, 1)?,
            "3" => run_example(console, 2)?,
            "4" => run_example(console, 3)?,
            "0" => return Ok(()),
            _ => console.say("Invalid choice. Please try again.")?,
        }
    }
}

fn run_example<R: BufRead, W: Write>(console: &mut Console<R, W>, task: usize) -> Result<(), String> {
    sapon_examples(task, &mut console.out).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_examples_menu_writes_to_console() {
        let mut console = Console::new(Cursor::new(b"1
4
8
0
".to_vec()), Vec::new());
        examples_menu(&mut console).unwrap();
        let text = String::from_utf8(console.out).unwrap();
        assert!(text.contains("k(T) = "));
        assert!(text.contains("high rate constant: true"));
        assert!(text.contains("Invalid choice"));
    }
}
