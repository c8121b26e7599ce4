//! Record stream: turns record-file text into tokenized rows.
//!
//! Format:
//! ```text
//! # kind, date, label, lead days
//! b, 1990-06-15, Alice
//! a, 2010-09-04, "Sam, Kim", 7
//! t, 2025-01-01, Pay rent
//! ```
//!
//! - Fields are comma separated; whitespace around a field is dropped
//! - A field may be double-quoted to hold commas; `""` inside quotes is a `"`
//! - Empty lines and lines whose first field starts with `#` are skipped
//! - Rows keep their 1-based line number for error messages

use std::fs;
use std::path::Path;

use log::trace;

use crate::error::ReminderError;

/// One tokenized line of a record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number in the source text.
    pub line: usize,
    pub fields: Vec<String>,
}

impl Row {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Build a row from string slices (line number 1).
    pub fn from_fields(fields: &[&str]) -> Self {
        Self::new(1, fields.iter().map(|f| f.to_string()).collect())
    }

    /// The leading kind tag, or `""` for an empty row.
    pub fn tag(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or("")
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// An empty or whitespace-only line.
    ///
    /// A line of bare commas is not blank: it reaches the classifier and
    /// fails there on its empty tag.
    pub fn is_blank(&self) -> bool {
        match self.fields.as_slice() {
            [] => true,
            [only] => only.is_empty(),
            _ => false,
        }
    }

    /// First field starts with `#`.
    pub fn is_comment(&self) -> bool {
        self.tag().starts_with('#')
    }

    /// Blank and comment rows never reach the classifier.
    pub fn is_ignored(&self) -> bool {
        self.is_blank() || self.is_comment()
    }
}

/// Split one line into trimmed fields.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut was_quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c != '"' {
                current.push(c);
            } else if chars.peek() == Some(&'"') {
                chars.next();
                current.push('"');
            } else {
                in_quotes = false;
            }
            continue;
        }

        match c {
            ',' => {
                fields.push(finish_field(&mut current, was_quoted));
                was_quoted = false;
            }
            '"' if !was_quoted && current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
                was_quoted = true;
            }
            // whitespace after a closing quote
            c if was_quoted && c.is_whitespace() => {}
            c => current.push(c),
        }
    }

    fields.push(finish_field(&mut current, was_quoted));
    fields
}

fn finish_field(current: &mut String, was_quoted: bool) -> String {
    let field = std::mem::take(current);
    if was_quoted {
        field
    } else {
        field.trim().to_string()
    }
}

/// Tokenize record text, dropping blank and comment rows.
pub fn read_rows(text: &str) -> impl Iterator<Item = Row> + '_ {
    text.lines()
        .enumerate()
        .map(|(idx, line)| Row::new(idx + 1, split_fields(line)))
        .filter(|row| {
            let ignored = row.is_ignored();
            if ignored {
                trace!("Skipping line {}", row.line);
            }
            !ignored
        })
}

/// Read a whole record file into memory.
pub fn read_file(path: &Path) -> Result<String, ReminderError> {
    fs::read_to_string(path).map_err(|source| ReminderError::Io {
        path: path.to_path_buf(),
        source,
    })
}
