//! NAV RINEX header section.
//! The header is not required to decode the ephemerides,
//! it is therefore decoded on a best effort basis and never fails.
use crate::{navigation::layout::column, version::Version};
use gnss::prelude::Constellation;
use std::str::FromStr;

/// Header section terminator
pub const HEADER_END_MARKER: &str = "END OF HEADER";

/// Returns true if given header line is a comment
pub(crate) fn is_rinex_comment(content: &str) -> bool {
    content.len() > 60 && content.trim_end().ends_with("COMMENT")
}

/// Decoded header fields
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Header {
    /// RINEX revision
    pub version: Option<Version>,
    /// File type letter ('N' for navigation data)
    pub file_type: Option<char>,
    /// Constellation this file is dedicated to
    pub constellation: Option<Constellation>,
    /// Program that produced this file
    pub program: Option<String>,
    /// Operator, agency...
    pub run_by: Option<String>,
    /// Production date, unparsed
    pub date: Option<String>,
    /// Comments, in order of appearance
    pub comments: Vec<String>,
}

impl Header {
    /// Returns true if this describes a navigation file
    pub fn is_navigation(&self) -> bool {
        self.file_type.map(|c| c == 'N').unwrap_or(true)
    }

    /// Decodes one header line. Unknown labels are ignored.
    pub(crate) fn parse_line(&mut self, line: &str) {
        let label = column(line, 60, line.len()).trim();
        let content = column(line, 0, 60);

        if is_rinex_comment(line) {
            self.comments.push(content.trim_end().to_string());
        } else if label.contains("RINEX VERSION / TYPE") {
            let vers = column(line, 0, 20).trim();
            match Version::from_str(vers) {
                Ok(version) => self.version = Some(version),
                Err(e) => warn!("invalid rinex version \"{}\": {}", vers, e),
            }

            self.file_type = column(line, 20, 40).trim().chars().next();

            let constell = column(line, 40, 60).trim();
            if let Some(code) = constell.chars().next() {
                self.constellation = Constellation::from_str(&code.to_string()).ok();
            }
        } else if label.contains("PGM / RUN BY / DATE") {
            let non_empty = |s: &str| {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else {
                    Some(s.to_string())
                }
            };
            self.program = non_empty(column(line, 0, 20));
            self.run_by = non_empty(column(line, 20, 40));
            self.date = non_empty(column(line, 40, 60));
        }
    }
}
