use crate::classify::{classify, Rotation, Rule};
use crate::config::Config;
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r?\n").unwrap();
}

/// The result of transforming one line of a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineOutcome {
    /// 1-indexed line number within the selection
    pub line: usize,
    pub input: String,
    pub output: String,
    pub rule: Rule,
}

/// Applies the style rotation to every line of a block of text.
#[derive(Debug, Clone, Copy)]
pub struct Cycler {
    delimiter: char,
    rotation: Rotation,
}

impl Default for Cycler {
    fn default() -> Self {
        Self {
            delimiter: crate::convert::DEFAULT_DELIMITER,
            rotation: Rotation::default(),
        }
    }
}

impl Cycler {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            delimiter: config.delimiter,
            rotation: config.rotation,
        })
    }

    /// Transform each line independently and rejoin them with `\n`.
    pub fn transform(&self, text: &str) -> String {
        split_lines(text)
            .map(|line| self.transform_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Host entry point: a missing selection is reported instead of ignored.
    pub fn transform_selection(&self, selection: Option<&str>) -> Result<String> {
        selection
            .map(|text| self.transform(text))
            .ok_or(Error::NoSelection)
    }

    pub fn transform_line(&self, line: &str) -> String {
        let rule = classify(line, self.delimiter, self.rotation);
        debug!(%rule, line, "classified line");
        rule.apply(line, self.delimiter)
    }

    /// Like [`Cycler::transform`], but keeps the rule chosen for every line.
    pub fn outcomes(&self, text: &str) -> Vec<LineOutcome> {
        split_lines(text)
            .enumerate()
            .map(|(idx, line)| {
                let rule = classify(line, self.delimiter, self.rotation);
                LineOutcome {
                    line: idx + 1,
                    input: line.to_string(),
                    output: rule.apply(line, self.delimiter),
                    rule,
                }
            })
            .collect()
    }
}

/// Split on `\n` or `\r\n`, keeping empty lines including a trailing one.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK.split(text)
}

/// Transform `text` with the default delimiter and rotation.
pub fn transform(text: &str) -> String {
    Cycler::default().transform(text)
}
