/// Convert camel or Pascal case text to lowercase delimiter-separated words.
///
/// A delimiter is placed at every lowercase-to-uppercase transition. A run of
/// two or more uppercase letters is kept together as one word, and when such a
/// run is followed by a lowercase letter its last capital opens the next word:
/// `HTTPServer` becomes `http_server` and `IOError` becomes `io_error`.
///
/// Every letter in the output is lowercase. Callers wanting `UPPER_SNAKE`
/// uppercase the result.
pub fn to_separated_case(input: &str, delimiter: char) -> String {
    let mut result = String::with_capacity(input.len() + input.len() / 4);
    let mut chars = input.chars().peekable();
    let mut prev: Option<char> = None;
    // Whether the last emitted letter belongs to an uppercase run.
    let mut in_run = false;

    while let Some(ch) = chars.next() {
        let next = chars.peek().copied();

        if ch.is_uppercase() {
            let prev_upper = prev.is_some_and(char::is_uppercase);
            let next_upper = next.is_some_and(char::is_uppercase);

            if prev_upper {
                if next.is_some_and(char::is_lowercase) {
                    result.push(delimiter);
                    in_run = false;
                } else {
                    in_run = true;
                }
            } else {
                if opens_word(prev, delimiter) {
                    result.push(delimiter);
                }
                in_run = next_upper;
            }
            result.extend(ch.to_lowercase());
        } else {
            if in_run && ch != delimiter && ch.is_alphanumeric() {
                result.push(delimiter);
            }
            result.push(ch);
            in_run = false;
        }

        prev = Some(ch);
    }

    result
}

/// A boundary before an uppercase letter needs a delimiter unless the text
/// already separates the words there.
fn opens_word(prev: Option<char>, delimiter: char) -> bool {
    prev.is_some_and(|p| p != delimiter && !p.is_whitespace())
}
