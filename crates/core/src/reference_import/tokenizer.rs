//! Splitting one line of delimited text into field values.

/// Field delimiter shared by every reference file format.
pub const DELIMITER: char = ',';

/// Field splitting strategy for one source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tokenizer {
    /// Split on every delimiter. No quoting or escaping.
    Plain,
    /// Honour double-quoted fields with `""` as an escaped quote.
    Quoted,
}

impl Tokenizer {
    pub fn tokenize(self, line: &str) -> Vec<String> {
        match self {
            Self::Plain => split_plain(line),
            Self::Quoted => split_quoted(line),
        }
    }
}

/// Split a line on [`DELIMITER`] with no escaping.
pub fn split_plain(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(String::from).collect()
}

/// Split a line on [`DELIMITER`], treating delimiters inside double quotes
/// as literal text.
///
/// Never fails: an unterminated quote swallows the rest of the line into
/// the current field. Callers validate the resulting field count.
pub fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == DELIMITER {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}
