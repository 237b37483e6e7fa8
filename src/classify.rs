//! Per-line style classification.
//!
//! A line is reduced to a [`Shape`] (is the delimiter present, what case is the
//! first letter, how are the letters cased overall) and the shape is mapped to
//! the [`Rule`] that produces the next style in the rotation:
//!
//! | delimiter | first letter | casing      | rule (full)          |
//! |-----------|--------------|-------------|----------------------|
//! | any       | none         | any         | unchanged            |
//! | yes       | upper        | any         | to camel             |
//! | yes       | lower        | any         | to Pascal            |
//! | no        | lower        | all lower   | to Pascal            |
//! | no        | lower        | mixed       | to separated         |
//! | no        | upper        | capitalized | uppercase            |
//! | no        | upper        | all upper   | lowercase            |
//! | no        | upper        | mixed       | to upper separated   |
//!
//! Applied repeatedly this cycles `user_name → UserName → USER_NAME →
//! userName → user_name`, and single words cycle `hello → Hello → HELLO`.

use crate::convert::{to_camel_case_with, to_pascal_case_with, to_separated_case};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    /// No uppercase letters
    AllLower,
    /// No lowercase letters, and more than one uppercase letter
    AllUpper,
    /// Only the first letter is uppercase
    Capitalized,
    Mixed,
}

/// The observable features of a line that drive dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub has_delimiter: bool,
    /// Case of the first cased letter, `None` if the line has no cased letters
    pub first_letter: Option<LetterCase>,
    pub casing: Casing,
}

impl Shape {
    pub fn of(line: &str, delimiter: char) -> Self {
        let mut first_letter = None;
        let mut uppers = 0usize;
        let mut lowers = 0usize;

        for ch in line.chars() {
            let case = if ch.is_uppercase() {
                uppers += 1;
                LetterCase::Upper
            } else if ch.is_lowercase() {
                lowers += 1;
                LetterCase::Lower
            } else {
                continue;
            };
            first_letter.get_or_insert(case);
        }

        let casing = if uppers == 0 {
            Casing::AllLower
        } else if uppers == 1 && first_letter == Some(LetterCase::Upper) {
            Casing::Capitalized
        } else if lowers == 0 {
            Casing::AllUpper
        } else {
            Casing::Mixed
        };

        Self {
            has_delimiter: line.contains(delimiter),
            first_letter,
            casing,
        }
    }
}

/// Which dispatcher variant to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    /// Single words cycle through Capitalized, UPPER and lower
    #[default]
    Full,
    /// Single words are passed to the camel splitter like any other line
    Simple,
}

impl FromStr for Rotation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Rotation::Full),
            "simple" => Ok(Rotation::Simple),
            _ => Err(Error::InvalidRotation(s.to_string())),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Full => write!(f, "full"),
            Rotation::Simple => write!(f, "simple"),
        }
    }
}

/// The conversion applied to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    Unchanged,
    ToCamel,
    ToPascal,
    ToSeparated,
    ToUpperSeparated,
    Uppercase,
    Lowercase,
}

impl Rule {
    pub fn for_shape(shape: Shape, rotation: Rotation) -> Self {
        let Some(first) = shape.first_letter else {
            return Rule::Unchanged;
        };

        match (shape.has_delimiter, first, rotation, shape.casing) {
            (true, LetterCase::Upper, _, _) => Rule::ToCamel,
            (true, LetterCase::Lower, _, _) => Rule::ToPascal,
            (false, LetterCase::Lower, Rotation::Simple, _) => Rule::ToSeparated,
            (false, LetterCase::Upper, Rotation::Simple, _) => Rule::ToUpperSeparated,
            (false, LetterCase::Lower, Rotation::Full, Casing::AllLower) => Rule::ToPascal,
            (false, LetterCase::Lower, Rotation::Full, _) => Rule::ToSeparated,
            (false, LetterCase::Upper, Rotation::Full, Casing::Capitalized) => Rule::Uppercase,
            (false, LetterCase::Upper, Rotation::Full, Casing::AllUpper) => Rule::Lowercase,
            (false, LetterCase::Upper, Rotation::Full, _) => Rule::ToUpperSeparated,
        }
    }

    pub fn apply(self, line: &str, delimiter: char) -> String {
        match self {
            Rule::Unchanged => line.to_string(),
            Rule::ToCamel => to_camel_case_with(line, delimiter),
            Rule::ToPascal => to_pascal_case_with(line, delimiter),
            Rule::ToSeparated => to_separated_case(line, delimiter),
            Rule::ToUpperSeparated => to_separated_case(line, delimiter).to_uppercase(),
            Rule::Uppercase => line.to_uppercase(),
            Rule::Lowercase => line.to_lowercase(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Unchanged => "unchanged",
            Rule::ToCamel => "to-camel",
            Rule::ToPascal => "to-pascal",
            Rule::ToSeparated => "to-separated",
            Rule::ToUpperSeparated => "to-upper-separated",
            Rule::Uppercase => "uppercase",
            Rule::Lowercase => "lowercase",
        };
        f.write_str(name)
    }
}

/// Pick the rule for a single line.
pub fn classify(line: &str, delimiter: char, rotation: Rotation) -> Rule {
    Rule::for_shape(Shape::of(line, delimiter), rotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(line: &str) -> Rule {
        classify(line, '_', Rotation::Full)
    }

    #[test]
    fn test_shape_detection() {
        let shape = Shape::of("userName", '_');
        assert!(!shape.has_delimiter);
        assert_eq!(shape.first_letter, Some(LetterCase::Lower));
        assert_eq!(shape.casing, Casing::Mixed);

        assert_eq!(Shape::of("Hello", '_').casing, Casing::Capitalized);
        assert_eq!(Shape::of("HELLO", '_').casing, Casing::AllUpper);
        assert_eq!(Shape::of("hello", '_').casing, Casing::AllLower);
        assert_eq!(Shape::of("  42 == x", '_').first_letter, Some(LetterCase::Lower));
        assert_eq!(Shape::of("--", '_').first_letter, None);
    }

    #[test]
    fn test_full_rotation_table() {
        assert_eq!(full(""), Rule::Unchanged);
        assert_eq!(full("  + - "), Rule::Unchanged);
        assert_eq!(full("USER_NAME"), Rule::ToCamel);
        assert_eq!(full("user_name"), Rule::ToPascal);
        assert_eq!(full("hello"), Rule::ToPascal);
        assert_eq!(full("userName"), Rule::ToSeparated);
        assert_eq!(full("Hello"), Rule::Uppercase);
        assert_eq!(full("HELLO"), Rule::Lowercase);
        assert_eq!(full("UserName"), Rule::ToUpperSeparated);
    }

    #[test]
    fn test_simple_rotation_table() {
        let simple = |line| classify(line, '_', Rotation::Simple);
        assert_eq!(simple("user_name"), Rule::ToPascal);
        assert_eq!(simple("USER_NAME"), Rule::ToCamel);
        assert_eq!(simple("hello"), Rule::ToSeparated);
        assert_eq!(simple("HELLO"), Rule::ToUpperSeparated);
        assert_eq!(simple("Hello"), Rule::ToUpperSeparated);
    }

    #[test]
    fn test_single_letter_is_capitalized() {
        assert_eq!(full("A"), Rule::Uppercase);
        assert_eq!(Rule::Uppercase.apply("A", '_'), "A");
    }

    #[test]
    fn test_classification_uses_configured_delimiter() {
        assert_eq!(classify("user-name", '-', Rotation::Full), Rule::ToPascal);
        assert_eq!(classify("user_name", '-', Rotation::Full), Rule::ToPascal);
        assert_eq!(classify("User_Name", '-', Rotation::Full), Rule::ToUpperSeparated);
    }

    #[test]
    fn test_rotation_parsing() {
        assert_eq!("full".parse::<Rotation>().unwrap(), Rotation::Full);
        assert_eq!("SIMPLE".parse::<Rotation>().unwrap(), Rotation::Simple);
        assert!("sideways".parse::<Rotation>().is_err());
        assert_eq!(Rotation::default().to_string(), "full");
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Rule::ToUpperSeparated.to_string(), "to-upper-separated");
        assert_eq!(
            serde_json::to_string(&Rule::ToCamel).unwrap(),
            "\"to-camel\""
        );
    }
}
