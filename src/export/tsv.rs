//! TSV serialization of issued-name records.
//!
//! One line per record, `id\treversedName\tnotBefore\tserial\n`, no header and
//! no quoting.

use std::io::{self, Write};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::debug;

use crate::error_handling::ExportError;
use crate::storage::IssuedNameRecord;

/// Writes every record from `records` to `sink`.
///
/// Stops at the first record that fails to decode. Lines written before the
/// failure are flushed to `sink` and stay there.
///
/// # Returns
///
/// The number of lines written.
///
/// # Errors
///
/// - `ExportError::Scan` if a record cannot be decoded (1-based row number)
/// - `ExportError::Write` if the sink fails
pub fn write_tsv<I, W>(records: I, sink: W) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = Result<IssuedNameRecord, sqlx::Error>>,
    W: Write,
{
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);

    let mut rows = 0;
    for (index, record) in records.into_iter().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(source) => {
                writer.flush()?;
                return Err(ExportError::Scan {
                    row: index + 1,
                    source,
                });
            }
        };
        writer
            .write_record(record.fields())
            .map_err(io::Error::from)?;
        rows += 1;
    }
    writer.flush()?;

    debug!("Wrote {rows} TSV lines");
    Ok(rows)
}
