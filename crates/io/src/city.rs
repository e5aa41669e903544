//! The closed set of cities with published trip data.

/// A city whose trip records can be loaded.
///
/// The set is closed: exactly three exports exist, with fixed file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// All cities with published data.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Looks up a city by its lowercase name.
    ///
    /// Returns `None` for anything other than exactly `"chicago"`,
    /// `"new york city"`, or `"washington"`; trimming and lowercasing are
    /// the caller's job.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "chicago" => Some(City::Chicago),
            "new york city" => Some(City::NewYorkCity),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }

    /// The lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// The conventional file name of the city's export.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}
