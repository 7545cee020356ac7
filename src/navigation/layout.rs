//! Column layout of legacy (LNAV) ephemeris blocks.
//!
//! The layout is described as data: each [FieldDescriptor] locates
//! one [OrbitField] within the 8-line block. Every field is
//! [FIELD_WIDTH] characters wide.

/// Number of lines per ephemeris block
pub const BLOCK_LINES: usize = 8;

/// Width of one numeric field
pub const FIELD_WIDTH: usize = 19;

/// Minimal length of the first line of a block
/// (identifier and epoch descriptor)
pub const MIN_BLOCK_START_LEN: usize = 23;

/// Returns `line[start..end]` with lenient boundaries:
/// the range is clamped to the line length, and an empty
/// string is returned when the range does not fall on
/// character boundaries.
pub fn column(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        return "";
    }
    line.get(start..end).unwrap_or("")
}

/// All parameters contained in one ephemeris block
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OrbitField {
    ClockBias,
    ClockDrift,
    ClockDriftRate,
    Iode,
    Crs,
    DeltaN,
    M0,
    Cuc,
    E,
    Cus,
    SqrtA,
    Toe,
    Cic,
    Omega0,
    Cis,
    I0,
    Crc,
    Omega,
    OmegaDot,
    Idot,
    CodesL2,
    Week,
    L2pFlag,
    SvAccuracy,
    SvHealth,
    Tgd,
    Iodc,
    TransmissionTime,
    FitInterval,
}

impl std::fmt::Display for OrbitField {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Self::ClockBias => "clock_bias",
            Self::ClockDrift => "clock_drift",
            Self::ClockDriftRate => "clock_drift_rate",
            Self::Iode => "iode",
            Self::Crs => "crs",
            Self::DeltaN => "delta_n",
            Self::M0 => "m0",
            Self::Cuc => "cuc",
            Self::E => "e",
            Self::Cus => "cus",
            Self::SqrtA => "sqrt_a",
            Self::Toe => "toe",
            Self::Cic => "cic",
            Self::Omega0 => "omega0",
            Self::Cis => "cis",
            Self::I0 => "i0",
            Self::Crc => "crc",
            Self::Omega => "omega",
            Self::OmegaDot => "omega_dot",
            Self::Idot => "idot",
            Self::CodesL2 => "codes_l2",
            Self::Week => "week",
            Self::L2pFlag => "l2p_flag",
            Self::SvAccuracy => "sv_accuracy",
            Self::SvHealth => "sv_health",
            Self::Tgd => "tgd",
            Self::Iodc => "iodc",
            Self::TransmissionTime => "transmission_time",
            Self::FitInterval => "fit_interval",
        };
        f.write_str(name)
    }
}

/// Locates one [OrbitField] within a block
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Line index within the block
    pub line: usize,
    /// Byte offset within that line
    pub offset: usize,
    /// Described parameter
    pub field: OrbitField,
}

impl FieldDescriptor {
    const fn new(line: usize, offset: usize, field: OrbitField) -> Self {
        Self {
            line,
            offset,
            field,
        }
    }

    /// Extracts the raw content of this field, from the block lines.
    /// Missing lines or columns are returned as empty strings.
    pub fn extract<'a>(&self, lines: &[&'a str]) -> &'a str {
        match lines.get(self.line) {
            Some(line) => column(line, self.offset, self.offset + FIELD_WIDTH),
            None => "",
        }
    }
}

/// Legacy navigation message layout
pub const LNAV_LAYOUT: [FieldDescriptor; 29] = [
    FieldDescriptor::new(0, 23, OrbitField::ClockBias),
    FieldDescriptor::new(0, 42, OrbitField::ClockDrift),
    FieldDescriptor::new(0, 61, OrbitField::ClockDriftRate),
    FieldDescriptor::new(1, 4, OrbitField::Iode),
    FieldDescriptor::new(1, 23, OrbitField::Crs),
    FieldDescriptor::new(1, 42, OrbitField::DeltaN),
    FieldDescriptor::new(1, 61, OrbitField::M0),
    FieldDescriptor::new(2, 4, OrbitField::Cuc),
    FieldDescriptor::new(2, 23, OrbitField::E),
    FieldDescriptor::new(2, 42, OrbitField::Cus),
    FieldDescriptor::new(2, 61, OrbitField::SqrtA),
    FieldDescriptor::new(3, 4, OrbitField::Toe),
    FieldDescriptor::new(3, 23, OrbitField::Cic),
    FieldDescriptor::new(3, 42, OrbitField::Omega0),
    FieldDescriptor::new(3, 61, OrbitField::Cis),
    FieldDescriptor::new(4, 4, OrbitField::I0),
    FieldDescriptor::new(4, 23, OrbitField::Crc),
    FieldDescriptor::new(4, 42, OrbitField::Omega),
    FieldDescriptor::new(4, 61, OrbitField::OmegaDot),
    FieldDescriptor::new(5, 4, OrbitField::Idot),
    FieldDescriptor::new(5, 23, OrbitField::CodesL2),
    FieldDescriptor::new(5, 42, OrbitField::Week),
    FieldDescriptor::new(5, 61, OrbitField::L2pFlag),
    FieldDescriptor::new(6, 4, OrbitField::SvAccuracy),
    FieldDescriptor::new(6, 23, OrbitField::SvHealth),
    FieldDescriptor::new(6, 42, OrbitField::Tgd),
    FieldDescriptor::new(6, 61, OrbitField::Iodc),
    FieldDescriptor::new(7, 4, OrbitField::TransmissionTime),
    // optional: only present on lengthy lines
    FieldDescriptor::new(7, 23, OrbitField::FitInterval),
];
