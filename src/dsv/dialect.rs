//! Delimiter dialects
//!
//! A dialect is the pair of strings that separate cells and rows, plus an
//! optional quote character. Both separators may be longer than one byte.

use serde::{Deserialize, Serialize};

use super::index::ParseError;

/// Separators and quoting used to interpret a raw DSV buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialect {
    /// Separator between cells of a row
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Separator between rows
    #[serde(default = "default_row_delimiter")]
    pub row_delimiter: String,
    /// Quote character; delimiters between quotes are cell content
    #[serde(default)]
    pub quote: Option<char>,
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_row_delimiter() -> String {
    "\n".to_string()
}

impl Default for Dialect {
    fn default() -> Self {
        Self::csv()
    }
}

impl Dialect {
    /// Build a dialect from arbitrary separators, without quoting
    pub fn new(delimiter: impl Into<String>, row_delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            row_delimiter: row_delimiter.into(),
            quote: None,
        }
    }

    pub fn csv() -> Self {
        Self::new(",", "\n")
    }

    pub fn tsv() -> Self {
        Self::new("\t", "\n")
    }

    pub fn psv() -> Self {
        Self::new("|", "\n")
    }

    pub fn semicolon() -> Self {
        Self::new(";", "\n")
    }

    /// Enable quoting with the given character
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = Some(quote);
        self
    }

    /// Reject separators the tokenizer cannot work with
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.delimiter.is_empty() {
            return Err(ParseError::new("column delimiter must not be empty"));
        }
        if self.row_delimiter.is_empty() {
            return Err(ParseError::new("row delimiter must not be empty"));
        }
        if let Some(q) = self.quote.filter(|q| !q.is_ascii()) {
            return Err(ParseError::new(format!("quote character {:?} must be ASCII", q)));
        }
        Ok(())
    }

    /// Detect dialect from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" | "tab" => Self::tsv(),
            "psv" => Self::psv(),
            _ => Self::csv(),
        }
    }

    /// Detect dialect by counting candidate delimiters in the first few lines
    ///
    /// The row delimiter is `\r\n` when the first line ends with it.
    pub fn detect(content: &str) -> Self {
        let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

        let comma_count = first_lines.matches(',').count();
        let tab_count = first_lines.matches('\t').count();
        let pipe_count = first_lines.matches('|').count();
        let semi_count = first_lines.matches(';').count();

        let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

        let dialect = if max == 0 {
            Self::csv()
        } else if tab_count == max {
            Self::tsv()
        } else if pipe_count == max {
            Self::psv()
        } else if semi_count == max {
            Self::semicolon()
        } else {
            Self::csv()
        };

        dialect.with_detected_row_delimiter(content)
    }

    /// Switch to `\r\n` rows when the first line of `content` ends with it
    pub fn with_detected_row_delimiter(mut self, content: &str) -> Self {
        if content
            .find('\n')
            .is_some_and(|nl| nl > 0 && content.as_bytes()[nl - 1] == b'\r')
        {
            self.row_delimiter = "\r\n".to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Dialect::from_extension("csv"), Dialect::csv());
        assert_eq!(Dialect::from_extension("CSV"), Dialect::csv());
        assert_eq!(Dialect::from_extension("tsv"), Dialect::tsv());
        assert_eq!(Dialect::from_extension("psv"), Dialect::psv());
        assert_eq!(Dialect::from_extension("txt"), Dialect::csv());
    }

    #[test]
    fn test_detect_tab() {
        assert_eq!(Dialect::detect("a\tb\tc\n1\t2\t3\n"), Dialect::tsv());
    }

    #[test]
    fn test_detect_semicolon() {
        assert_eq!(Dialect::detect("a;b;c\n1;2;3\n"), Dialect::semicolon());
    }

    #[test]
    fn test_validate() {
        assert!(Dialect::csv().validate().is_ok());
        assert!(Dialect::new(",", "").validate().is_err());
        assert!(Dialect::csv().with_quote('é').validate().is_err());
    }

    #[test]
    fn test_detect_crlf_rows() {
        let dialect = Dialect::detect("a,b\r\n1,2\r\n");
        assert_eq!(dialect.delimiter, ",");
        assert_eq!(dialect.row_delimiter, "\r\n");
    }

    #[test]
    fn test_detect_empty_defaults_to_csv() {
        assert_eq!(Dialect::detect(""), Dialect::csv());
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let dialect: Dialect = serde_yaml::from_str("delimiter: \"::\"").unwrap();
        assert_eq!(dialect.delimiter, "::");
        assert_eq!(dialect.row_delimiter, "\n");
        assert_eq!(dialect.quote, None);
    }
}
