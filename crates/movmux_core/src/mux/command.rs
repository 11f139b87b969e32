//! Synthesized command and display helpers.

use std::fmt;

/// A program and its argument list, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuxCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl MuxCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Program and arguments, one option per line.
    pub fn pretty(&self) -> String {
        format!("{} \\\n{}", self.program, format_tokens_pretty(&self.args))
    }
}

impl fmt::Display for MuxCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Format tokens for pretty display (one option per line).
pub fn format_tokens_pretty(tokens: &[String]) -> String {
    let mut result = String::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];

        if token.starts_with('-') && i + 1 < tokens.len() && !tokens[i + 1].starts_with('-') {
            // Option with value
            result.push_str(token);
            result.push(' ');
            result.push_str(&tokens[i + 1]);
            i += 2;
        } else {
            result.push_str(token);
            i += 1;
        }
        result.push_str(if i >= tokens.len() { "\n" } else { " \\\n" });
    }

    result
}
