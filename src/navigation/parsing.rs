//! Navigation body parser.
//!
//! The parser is a push based state machine, fed one line at a time.
//! Malformed blocks never interrupt the process: they are logged,
//! dropped, and parsing resumes on the next record boundary.
use crate::{
    epoch::{epoch_text, parse_block_epoch},
    header::{Header, HEADER_END_MARKER},
    navigation::{
        layout::{column, BLOCK_LINES, MIN_BLOCK_START_LEN},
        Ephemeris, Record,
    },
    prelude::{Epoch, SV},
    ParsingError,
};

use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
enum State {
    /// Header section, until [HEADER_END_MARKER]
    SeekingHeader,
    /// Waiting for the first line of a block
    AwaitingBlock,
    /// Gathering the lines of one block
    InBlock {
        sv: SV,
        epoch: Epoch,
        lines: Vec<String>,
    },
    /// Skipping lines until one starts with given character.
    /// `None`: any non blank character.
    Resyncing(Option<char>),
}

/// Returns true if this line starts a new record:
/// continuation lines are always indented.
fn is_record_boundary(line: &str) -> bool {
    line.chars().next().map(|c| !c.is_whitespace()).unwrap_or(false)
}

/// Decodes the identifier and epoch descriptor of a block
fn parse_block_start(line: &str) -> Result<(SV, Epoch), ParsingError> {
    if line.len() < MIN_BLOCK_START_LEN {
        return Err(ParsingError::LineTooShort);
    }

    let id = column(line, 0, 3).trim();
    let starts_alphabetic = id
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic())
        .unwrap_or(false);

    if !starts_alphabetic {
        return Err(ParsingError::InvalidIdentifier(id.to_string()));
    }

    let sv = SV::from_str(id).map_err(|e| ParsingError::SVParsing(id.to_string(), e))?;
    let epoch = parse_block_epoch(line)?;
    Ok((sv, epoch))
}

/// [BlockParser] groups navigation lines into 8-line blocks
/// and decodes them into [Ephemeris].
#[derive(Debug, Clone)]
pub struct BlockParser {
    state: State,
    header: Header,
    record: Record,
    /// Number of blocks dropped so far
    dropped: usize,
}

impl Default for BlockParser {
    fn default() -> Self {
        Self {
            state: State::SeekingHeader,
            header: Header::default(),
            record: Record::new(),
            dropped: 0,
        }
    }
}

impl BlockParser {
    /// Consumes one line of the file
    pub fn feed(&mut self, line: &str) {
        let state = std::mem::replace(&mut self.state, State::AwaitingBlock);
        self.state = self.step(state, line);
    }

    /// Terminates the process, returns the decoded [Header] and [Record].
    /// A block interrupted by the end of file is dropped.
    pub fn finish(mut self) -> (Header, Record) {
        let state = std::mem::replace(&mut self.state, State::AwaitingBlock);
        match state {
            State::SeekingHeader => {
                debug!("no header terminator: empty record");
            },
            State::InBlock { sv, epoch, lines } => {
                self.drop_block(sv, epoch, ParsingError::TruncatedBlock(lines.len()));
            },
            _ => {},
        }
        if self.dropped > 0 {
            warn!("{} block(s) could not be decoded", self.dropped);
        }
        (self.header, self.record)
    }

    /// Returns the number of blocks dropped so far
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    fn step(&mut self, state: State, line: &str) -> State {
        match state {
            State::SeekingHeader => {
                if line.contains(HEADER_END_MARKER) {
                    if !self.header.is_navigation() {
                        warn!("header does not describe navigation data");
                    }
                    State::AwaitingBlock
                } else {
                    self.header.parse_line(line);
                    State::SeekingHeader
                }
            },
            State::AwaitingBlock => self.block_start(line),
            State::InBlock {
                sv,
                epoch,
                mut lines,
            } => {
                if is_record_boundary(line) {
                    self.drop_block(sv, epoch, ParsingError::TruncatedBlock(lines.len()));
                    return self.block_start(line);
                }
                lines.push(line.to_string());
                if lines.len() < BLOCK_LINES {
                    return State::InBlock { sv, epoch, lines };
                }
                let lines = lines.iter().map(|l| l.as_str()).collect::<Vec<_>>();
                let eph = Ephemeris::decode(sv, epoch, &lines);
                trace!("{}({}) - toe={}", epoch, sv, eph.toe);
                self.record.entry(sv).or_default().push(eph);
                State::AwaitingBlock
            },
            State::Resyncing(target) => {
                let resynced = match target {
                    Some(c) => line.starts_with(c),
                    None => is_record_boundary(line),
                };
                if resynced {
                    self.block_start(line)
                } else {
                    State::Resyncing(target)
                }
            },
        }
    }

    /// Processes a possible block start
    fn block_start(&mut self, line: &str) -> State {
        match parse_block_start(line) {
            Ok((sv, epoch)) => State::InBlock {
                sv,
                epoch,
                lines: vec![line.to_string()],
            },
            Err(ParsingError::LineTooShort) => {
                if !line.trim().is_empty() {
                    trace!("skipping short line \"{}\"", line);
                }
                State::AwaitingBlock
            },
            Err(e) => {
                let id = column(line, 0, 3).trim();
                warn!(
                    "{} \"{}\": block dropped ({}), resynchronizing",
                    id,
                    epoch_text(line),
                    e
                );
                self.dropped += 1;
                let target = id.chars().next().filter(|c| !c.is_whitespace());
                State::Resyncing(target)
            },
        }
    }

    fn drop_block(&mut self, sv: SV, epoch: Epoch, e: ParsingError) {
        warn!("{}({}): block dropped ({})", epoch, sv, e);
        self.dropped += 1;
    }
}
