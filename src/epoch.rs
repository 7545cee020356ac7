//! Block epoch decoding
use crate::{navigation::layout::column, ParsingError};
use hifitime::Epoch;

/// Epoch descriptor columns: (name, start, end)
const EPOCH_COLUMNS: [(&str, usize, usize); 6] = [
    ("year", 4, 8),
    ("month", 9, 11),
    ("day", 12, 14),
    ("hours", 15, 17),
    ("minutes", 18, 20),
    ("seconds", 21, 23),
];

/// Expands a possibly two-digit year.
/// Values below 80 belong to the 21st century, 80..=99 to the 20th
/// (GPS time starts in 1980). Four digit years are returned as is.
/// This departs from the legacy pivot, which only expanded values below 80
/// and left 80..=99 untouched (year 0080 to 0099).
pub(crate) fn expand_year(y: i32) -> i32 {
    if y < 80 {
        y + 2000
    } else if y < 100 {
        y + 1900
    } else {
        y
    }
}

/// Best effort description of the epoch columns, for diagnostics
pub(crate) fn epoch_text(line: &str) -> &str {
    column(line, 4, 23).trim()
}

/// Decodes the UTC [Epoch] of a block from its first line.
/// Seconds are truncated to the second.
pub(crate) fn parse_block_epoch(line: &str) -> Result<Epoch, ParsingError> {
    let mut fields = [0_i32; 6];
    for (nth, &(name, start, end)) in EPOCH_COLUMNS.iter().enumerate() {
        let content = column(line, start, end).trim();
        fields[nth] = if name == "seconds" {
            content
                .parse::<f64>()
                .map(|s| s.trunc() as i32)
                .map_err(|_| ParsingError::EpochField(name, content.to_string()))?
        } else {
            content
                .parse::<i32>()
                .map_err(|_| ParsingError::EpochField(name, content.to_string()))?
        };
    }

    let [y, m, d, hh, mm, ss] = fields;
    let y = expand_year(y);

    let invalid = || ParsingError::InvalidDate(epoch_text(line).to_string());

    let (m, d, hh, mm, ss) = (
        u8::try_from(m).map_err(|_| invalid())?,
        u8::try_from(d).map_err(|_| invalid())?,
        u8::try_from(hh).map_err(|_| invalid())?,
        u8::try_from(mm).map_err(|_| invalid())?,
        u8::try_from(ss).map_err(|_| invalid())?,
    );

    Epoch::maybe_from_gregorian_utc(y, m, d, hh, mm, ss, 0).map_err(|_| invalid())
}
