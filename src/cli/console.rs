use std::io::{BufRead, Write};
use std::str::FromStr;

/* colors
Blue (\x1b[34m) - headers
Yellow (\x1b[33m) - menu options
Cyan (\x1b[36m) - prompts
Red (\x1b[31m) - errors
*/
pub const BLUE: &str = "\x1b[34m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const RED: &str = "\x1b[31m";
pub const RESET: &str = "\x1b[0m";

/// Line-oriented terminal dialog over any reader/writer pair
pub struct Console<R: BufRead, W: Write> {
    input: R,
    pub out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Console { input, out }
    }

    pub fn say(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.out, "{}", text).map_err(|e| e.to_string())
    }

    pub fn header(&mut self, text: &str) -> Result<(), String> {
        self.say(&format!("{}\n=== {} ==={}", BLUE, text, RESET))
    }

    pub fn option(&mut self, key: &str, text: &str) -> Result<(), String> {
        self.say(&format!("{}{}. {}{}", YELLOW, key, text, RESET))
    }

    pub fn error(&mut self, text: &str) -> Result<(), String> {
        self.say(&format!("{}Error: {}{}", RED, text, RESET))
    }

    /// Prints `prompt` and reads one trimmed line. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, String> {
        write!(self.out, "{}{}{}", CYAN, prompt, RESET).map_err(|e| e.to_string())?;
        self.out.flush().map_err(|e| e.to_string())?;
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Reads a value; an empty line keeps `current`
    pub fn ask_or<T>(&mut self, name: &str, current: T) -> Result<T, String>
    where
        T: FromStr + std::fmt::Display + Copy,
    {
        let answer = self.ask(&format!("{} [{}]: ", name, current))?;
        match answer.as_deref() {
            None | Some("") => Ok(current),
            Some(text) => parse_value(name, text),
        }
    }

    /// Numbered choice from `items`; an empty line keeps `current`
    pub fn choose<T: Copy + PartialEq>(
        &mut self,
        title: &str,
        items: &[(T, String)],
        current: T,
    ) -> Result<T, String> {
        self.say(&format!("\n{}:", title))?;
        for (i, (item, name)) in items.iter().enumerate() {
            let marker = if *item == current { " (current)" } else { "" };
            self.option(&(i + 1).to_string(), &format!("{}{}", name, marker))?;
        }
        let answer = self.ask(&format!("Enter choice (1-{}): ", items.len()))?;
        match answer.as_deref() {
            None | Some("") => Ok(current),
            Some(text) => {
                let index: usize = parse_value(title, text)?;
                items
                    .get(index.wrapping_sub(1))
                    .map(|(item, _)| *item)
                    .ok_or_else(|| format!("Invalid {} choice", title.to_lowercase()))
            }
        }
    }

    pub fn confirm(&mut self, prompt: &str) -> Result<bool, String> {
        let answer = self.ask(&format!("{} (y/n): ", prompt))?;
        Ok(matches!(
            answer.as_deref().map(str::to_lowercase).as_deref(),
            Some("y") | Some("yes")
        ))
    }
}

pub fn parse_value<T: FromStr>(name: &str, text: &str) -> Result<T, String> {
    text.trim()
        .parse::<T>()
        .map_err(|_| format!("Invalid {} format", name))
}
