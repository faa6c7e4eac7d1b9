use std::io::{self, BufRead, Write};

use colored::Colorize;

use muster_career::{CareerResult, ChoiceProvider};

/// Asks the player on stdin. An empty answer or end of input takes the
/// first option.
pub struct StdinChoices<R> {
    input: R,
}

impl StdinChoices<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> StdinChoices<R> {
    fn ask(&mut self, prompt: &str, options: &[String]) -> CareerResult<usize> {
        let mut err = io::stderr();
        writeln!(err, "{}", prompt.bold())?;
        for (i, option) in options.iter().enumerate() {
            writeln!(err, "  {}) {option}", i + 1)?;
        }
        let mut line = String::new();
        loop {
            write!(err, "> ")?;
            err.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(0);
            }
            match parse_answer(line.trim(), options) {
                Some(index) => return Ok(index),
                None => writeln!(err, "{}", "pick a number or a label".yellow())?,
            }
        }
    }
}

impl<R: BufRead> ChoiceProvider for StdinChoices<R> {
    fn choose(&mut self, prompt: &str, options: &[String]) -> CareerResult<usize> {
        if options.len() == 1 {
            return Ok(0);
        }
        self.ask(prompt, options)
    }
}

/// A 1-based number or a label, ignoring case. Empty means the first.
fn parse_answer(answer: &str, options: &[String]) -> Option<usize> {
    if answer.is_empty() {
        return Some(0);
    }
    if let Ok(n) = answer.parse::<usize>() {
        return match n {
            1.. if n <= options.len() => Some(n - 1),
            _ => None,
        };
    }
    options.iter().position(|o| o.eq_ignore_ascii_case(answer))
}
