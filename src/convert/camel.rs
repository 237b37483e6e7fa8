use super::DEFAULT_DELIMITER;

/// Convert `user_name` style text to lower camel case (`userName`).
///
/// Delimiters are dropped and the letter after each one is uppercased, every
/// other letter is lowercased. Text without a delimiter is returned as-is.
pub fn to_camel_case(name: &str) -> String {
    to_camel_case_with(name, DEFAULT_DELIMITER)
}

pub fn to_camel_case_with(name: &str, delimiter: char) -> String {
    if !name.contains(delimiter) {
        return name.to_string();
    }

    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = false;

    for ch in name.chars() {
        if ch == delimiter {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(ch.to_lowercase());
        }
    }

    result
}

/// Convert text to Pascal case (`UserName`).
///
/// A word starts at the beginning of the text, after a delimiter, or after any
/// other non-alphanumeric character. Word starts are uppercased and the rest
/// lowercased. Delimiters are dropped, other punctuation is kept.
pub fn to_pascal_case(input: &str) -> String {
    to_pascal_case_with(input, DEFAULT_DELIMITER)
}

pub fn to_pascal_case_with(input: &str, delimiter: char) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = true;

    for ch in input.chars() {
        if ch == delimiter {
            capitalize_next = true;
        } else if ch.is_alphanumeric() {
            if capitalize_next {
                result.extend(ch.to_uppercase());
                capitalize_next = false;
            } else {
                result.extend(ch.to_lowercase());
            }
        } else {
            result.push(ch);
            capitalize_next = true;
        }
    }

    result
}
