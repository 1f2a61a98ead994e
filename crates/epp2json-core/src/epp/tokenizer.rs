//! CSV tokenizer for single EPP lines.
//!
//! EPP records are comma-separated with double-quoted text fields. The `csv`
//! crate is lenient about stray quotes, so quoting is checked first and a
//! misplaced quote is reported as [`MalformedLine`] instead of being folded
//! into a field.

use csv::{ReaderBuilder, StringRecord, Terminator};

use crate::error::MalformedLine;

/// Split one line into fields.
///
/// Only the first record is read; anything after its line break is ignored.
/// Records end at `\n`, and a `\r` directly before it is dropped. A lone `\r`
/// stays part of its field. Input without any record is an error.
pub fn tokenize_line(line: &str) -> Result<Vec<String>, MalformedLine> {
    let line = skip_blank_lines(line);
    if line.is_empty() {
        return Err(MalformedLine::Empty);
    }

    let record_text = first_record(line)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(record_text.as_bytes());

    let mut record = StringRecord::new();
    let found = reader
        .read_record(&mut record)
        .map_err(|e| MalformedLine::Csv(e.to_string()))?;

    if !found {
        return Err(MalformedLine::Empty);
    }

    Ok(record.iter().map(str::to_string).collect())
}

/// Drop leading `\n` and `\r\n` lines.
fn skip_blank_lines(mut line: &str) -> &str {
    loop {
        if let Some(rest) = line.strip_prefix('\n') {
            line = rest;
        } else if let Some(rest) = line.strip_prefix("\r\n") {
            line = rest;
        } else {
            return line;
        }
    }
}

#[derive(Clone, Copy)]
enum State {
    FieldStart,
    Unquoted,
    Quoted { opened_at: usize },
    QuoteInQuoted { opened_at: usize },
}

/// Find the first record and reject quotes that RFC 4180 does not allow.
///
/// The returned slice excludes the terminating `\n` and one `\r` before it.
fn first_record(line: &str) -> Result<&str, MalformedLine> {
    let mut state = State::FieldStart;
    let mut chars = line.char_indices().enumerate().peekable();

    while let Some((idx, (offset, ch))) = chars.next() {
        let column = idx + 1;
        let at_line_end = matches!(chars.peek(), None | Some((_, (_, '\n'))));

        state = match (state, ch) {
            (State::FieldStart | State::Unquoted | State::QuoteInQuoted { .. }, '\n') => {
                return Ok(strip_cr(&line[..offset]));
            }
            (State::FieldStart, '"') => State::Quoted { opened_at: column },
            (State::FieldStart | State::Unquoted, ',') => State::FieldStart,
            (State::FieldStart | State::Unquoted, '"') => {
                return Err(MalformedLine::BareQuote { column });
            }
            (State::FieldStart | State::Unquoted, _) => State::Unquoted,
            (State::Quoted { opened_at }, '"') => State::QuoteInQuoted { opened_at },
            (State::Quoted { .. }, _) => state,
            // `""` is an escaped quote inside the field.
            (State::QuoteInQuoted { opened_at }, '"') => State::Quoted { opened_at },
            (State::QuoteInQuoted { .. }, ',') => State::FieldStart,
            (State::QuoteInQuoted { .. }, '\r') if at_line_end => state,
            (State::QuoteInQuoted { .. }, _) => {
                return Err(MalformedLine::ExtraneousQuote { column });
            }
        };
    }

    match state {
        State::Quoted { opened_at } => Err(MalformedLine::UnterminatedQuote { column: opened_at }),
        _ => Ok(strip_cr(line)),
    }
}

fn strip_cr(record: &str) -> &str {
    record.strip_suffix('\r').unwrap_or(record)
}
