use crate::cycle::LineOutcome;
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    file: Option<String>,
    #[serde(flatten)]
    outcome: &'a LineOutcome,
}

/// Write the transformed text exactly, without adding a trailing newline.
pub fn print_text(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Print one file's output under a `==> path <==` header, newline-terminated,
/// so several files never run together.
pub fn print_text_section(source: Option<&Path>, text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(section(source, text).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn section(source: Option<&Path>, text: &str) -> String {
    let name = source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());
    let mut out = format!("==> {} <==\n{}", name, text);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

pub fn print_json(source: Option<&Path>, outcomes: &[LineOutcome]) -> Result<()> {
    let file = source.map(|p| p.display().to_string());
    let lines: Vec<JsonLine<'_>> = outcomes
        .iter()
        .map(|outcome| JsonLine {
            file: file.clone(),
            outcome,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&lines)?);
    Ok(())
}

/// Show which rule was applied to each line, on stderr.
pub fn print_explain(source: Option<&Path>, outcomes: &[LineOutcome], colored: bool) {
    let name = source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    if colored {
        eprintln!("\n{}", name.bold().underline());
    } else {
        eprintln!("\n{}", name);
    }

    for outcome in outcomes {
        let rule = format!("{:<18}", outcome.rule.to_string());
        if colored {
            eprintln!(
                "  {} {} {} {} {}",
                format!("{:>4}", outcome.line).blue().bold(),
                rule.cyan(),
                outcome.input.dimmed(),
                "→".dimmed(),
                outcome.output.green()
            );
        } else {
            eprintln!(
                "  {:>4} {} {} → {}",
                outcome.line, rule, outcome.input, outcome.output
            );
        }
    }
}

pub fn print_rewrite_summary(rewritten: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if rewritten == 0 {
        if colored {
            println!("{}", "Nothing to rewrite!".green().bold());
        } else {
            println!("Nothing to rewrite!");
        }
        return;
    }

    let file_word = if rewritten == 1 { "file" } else { "files" };
    if colored {
        println!(
            "{} {} {} rewritten out of {}",
            "✓".green().bold(),
            rewritten.to_string().green().bold(),
            file_word,
            files.len()
        );
    } else {
        println!(
            "✓ {} {} rewritten out of {}",
            rewritten,
            file_word,
            files.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Rule;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_section_is_newline_terminated() {
        let path = Path::new("a.txt");
        assert_eq!(section(Some(path), "FooBar"), "==> a.txt <==\nFooBar\n");
        assert_eq!(section(Some(path), "FooBar\n"), "==> a.txt <==\nFooBar\n");
        assert_eq!(section(None, ""), "==> <stdin> <==\n\n");
    }

    #[test]
    fn test_json_line_shape() {
        let outcome = LineOutcome {
            line: 1,
            input: "user_name".to_string(),
            output: "UserName".to_string(),
            rule: Rule::ToPascal,
        };
        let line = JsonLine {
            file: Some("a.txt".to_string()),
            outcome: &outcome,
        };
        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["file"], "a.txt");
        assert_eq!(value["line"], 1);
        assert_eq!(value["output"], "UserName");
        assert_eq!(value["rule"], "to-pascal");
    }
}
