//! Bulk loading: source adapters over in-memory text, files, and gzip files.
//!
//! Every adapter funnels into one per-mode decode loop, so logically
//! identical input produces identical collections regardless of where it was
//! read from. The first record that fails to decode aborts the load with the
//! error wrapped in its 0-based record index; no partial collection escapes.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use rowcast_model::{FieldDef, Record};

use crate::delimited::decode_delimited;
use crate::error::{DecodeError, Result};
use crate::fixed::decode_fixed_width;

/// Per-call options for delimited loading.
///
/// `delimiter` and `quote` are forwarded verbatim to the tokenizer; this
/// crate attaches no meaning to them.
#[derive(Debug, Clone)]
pub struct DelimitedOptions {
    fields: Option<Vec<FieldDef>>,
    delimiter: u8,
    quote: u8,
}

impl Default for DelimitedOptions {
    fn default() -> Self {
        Self {
            fields: None,
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl DelimitedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field definition sequence. Without one, records pass through
    /// as trimmed token sequences.
    pub fn with_fields(mut self, fields: Vec<FieldDef>) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Set the field delimiter (default `,`).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character (default `"`).
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    pub fn fields(&self) -> Option<&[FieldDef]> {
        self.fields.as_deref()
    }
}

/// Decode an in-memory delimited blob.
pub fn read_delimited_str(data: &str, options: &DelimitedOptions) -> Result<Vec<Record>> {
    decode_delimited_source(data.as_bytes(), options)
}

/// Decode a plain-text delimited file.
pub fn read_delimited_path(path: &Path, options: &DelimitedOptions) -> Result<Vec<Record>> {
    let file = open_source(path)?;
    decode_delimited_source(BufReader::new(file), options)
}

/// Decode a gzip-compressed delimited file.
///
/// Decompression is streamed record by record; the file is never expanded
/// into memory as a whole.
pub fn read_delimited_gzip(path: &Path, options: &DelimitedOptions) -> Result<Vec<Record>> {
    let file = open_source(path)?;
    decode_delimited_source(GzDecoder::new(BufReader::new(file)), options)
}

/// Decode an in-memory fixed-width blob.
pub fn read_fixed_width_str(data: &str, fields: &[FieldDef]) -> Result<Vec<Record>> {
    decode_fixed_source(data.as_bytes(), fields)
}

/// Decode a plain-text fixed-width file.
pub fn read_fixed_width_path(path: &Path, fields: &[FieldDef]) -> Result<Vec<Record>> {
    let file = open_source(path)?;
    decode_fixed_source(BufReader::new(file), fields)
}

/// Decode a gzip-compressed fixed-width file, streaming the decompression.
pub fn read_fixed_width_gzip(path: &Path, fields: &[FieldDef]) -> Result<Vec<Record>> {
    let file = open_source(path)?;
    decode_fixed_source(GzDecoder::new(BufReader::new(file)), fields)
}

/// Open a source file, distinguishing not-found from other read failures.
fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DecodeError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DecodeError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

fn decode_delimited_source<R: Read>(reader: R, options: &DelimitedOptions) -> Result<Vec<Record>> {
    let mut tokenizer = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .quote(options.quote)
        .from_reader(reader);

    let mut out = Vec::new();
    for (index, row) in tokenizer.records().enumerate() {
        let row = row.map_err(|e| DecodeError::at_record(index, e.into()))?;
        let tokens: Vec<&str> = row.iter().collect();
        let record = decode_delimited(&tokens, options.fields())
            .map_err(|e| DecodeError::at_record(index, e))?;
        out.push(record);
    }

    tracing::debug!(records = out.len(), "decoded delimited source");
    Ok(out)
}

fn decode_fixed_source<R: Read>(reader: R, fields: &[FieldDef]) -> Result<Vec<Record>> {
    let mut out = Vec::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|e| DecodeError::at_record(index, DecodeError::Io(e)))?;
        // Skip BOM if present
        let line = if index == 0 {
            line.strip_prefix('\u{feff}').unwrap_or(&line)
        } else {
            &line
        };
        let record =
            decode_fixed_width(line, fields).map_err(|e| DecodeError::at_record(index, e))?;
        out.push(record);
    }

    tracing::debug!(records = out.len(), "decoded fixed-width source");
    Ok(out)
}
