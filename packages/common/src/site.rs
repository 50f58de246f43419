use std::fmt;

/// Display name used when a well references a site code outside the table.
pub const UNKNOWN_SITE: &str = "Unknown";

/// Operational site ("activo") a well belongs to.
///
/// The code/name table is fixed: every code maps to exactly one name and back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Site {
    Samaria,
    Muspac,
    FiveP,
    Bellota,
    PozaRica,
}

impl Site {
    /// All sites in code order.
    pub const ALL: [Site; 5] = [
        Site::Samaria,
        Site::Muspac,
        Site::FiveP,
        Site::Bellota,
        Site::PozaRica,
    ];

    /// Backend integer code.
    pub fn id(self) -> i32 {
        match self {
            Self::Samaria => 1,
            Self::Muspac => 2,
            Self::FiveP => 3,
            Self::Bellota => 4,
            Self::PozaRica => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Samaria => "Samaria",
            Self::Muspac => "Muspac",
            Self::FiveP => "5P",
            Self::Bellota => "Bellota",
            Self::PozaRica => "Poza Rica",
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|site| site.id() == id)
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|site| site.name() == name)
    }

    /// Resolve a site code to its display name, falling back to [`UNKNOWN_SITE`].
    pub fn name_of(id: i32) -> &'static str {
        Self::from_id(id).map_or(UNKNOWN_SITE, Site::name)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
