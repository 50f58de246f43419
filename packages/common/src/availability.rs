use std::fmt;

/// Administrative state of a motocompresor record.
///
/// The backend sends this as an integer code in the `disponible` field. Codes
/// outside `1..=5` are kept on the record but have no status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AvailabilityStatus {
    /// Compressor is running.
    Operating,
    /// Installed and ready, not running.
    Available,
    /// Cancelled while still in the program.
    CancelledInProgram,
    /// Taken out of service.
    Decommissioned,
    Cancelled,
}

impl AvailabilityStatus {
    /// All statuses in code order.
    pub const ALL: [AvailabilityStatus; 5] = [
        AvailabilityStatus::Operating,
        AvailabilityStatus::Available,
        AvailabilityStatus::CancelledInProgram,
        AvailabilityStatus::Decommissioned,
        AvailabilityStatus::Cancelled,
    ];

    pub fn code(self) -> i32 {
        match self {
            Self::Operating => 1,
            Self::Available => 2,
            Self::CancelledInProgram => 3,
            Self::Decommissioned => 4,
            Self::Cancelled => 5,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// Human-readable label used in KPI tables and chart series.
    pub fn label(self) -> &'static str {
        match self {
            Self::Operating => "Operating",
            Self::Available => "Available",
            Self::CancelledInProgram => "Cancelled in program",
            Self::Decommissioned => "Decommissioned",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
