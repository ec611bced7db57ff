//! Trip request entity
//!
//! The transient form state: rebuilt from current widget values on every
//! interaction, handed to the planner on submit, never persisted.

use std::fmt;

/// Lower bound for the travelling party size
pub const MIN_MEMBER_COUNT: u32 = 1;

/// Bounds for the trip duration in days
pub const MIN_DURATION_DAYS: u32 = 1;
pub const MAX_DURATION_DAYS: u32 = 30;

/// A single trip-planning request
///
/// Emptiness checks use `String::is_empty` throughout: whitespace-only
/// input counts as present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    pub destination: String,
    pub budget: Budget,
    pub member_count: u32,
    pub duration_days: u32,
    pub purpose: String,
    pub preferences: String,
    pub wants_followup: bool,
    pub activities: String,
    pub accommodation: Option<Accommodation>,
    pub transportation: Option<Transit>,
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            destination: String::new(),
            budget: Budget::Moderate,
            member_count: 1,
            duration_days: 3,
            purpose: String::new(),
            preferences: String::new(),
            wants_followup: false,
            activities: String::new(),
            accommodation: None,
            transportation: None,
        }
    }
}

impl TripRequest {
    /// Check whether any of the three follow-up fields carries an answer
    pub fn has_followup_answers(&self) -> bool {
        !self.activities.is_empty() || self.accommodation.is_some() || self.transportation.is_some()
    }

    /// Preferences string as sent to the model
    ///
    /// The follow-up block is appended if and only if the user opted into
    /// follow-up questions AND at least one follow-up field is non-empty.
    /// Unanswered fields render as empty strings inside the block.
    pub fn merged_preferences(&self) -> String {
        if !self.wants_followup || !self.has_followup_answers() {
            return self.preferences.clone();
        }

        let accommodation = self.accommodation.map(|a| a.to_string()).unwrap_or_default();
        let transportation = self.transportation.map(|t| t.to_string()).unwrap_or_default();

        format!(
            "{}\nActivities: {}\nAccommodation: {}\nTransportation: {}",
            self.preferences, self.activities, accommodation, transportation
        )
    }
}

/// Trip budget tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Budget {
    Low,
    #[default]
    Moderate,
    High,
}

impl Budget {
    /// All options, in display order
    pub const ALL: &'static [Budget] = &[Budget::Low, Budget::Moderate, Budget::High];

    pub fn next(self) -> Self {
        cycle(Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(Self::ALL, self, -1)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Budget::Low => "Low",
            Budget::Moderate => "Moderate",
            Budget::High => "High",
        };
        write!(f, "{}", label)
    }
}

/// Preferred accommodation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accommodation {
    #[default]
    Hotels,
    Hostels,
    VacationRentals,
    Other,
}

impl Accommodation {
    pub const ALL: &'static [Accommodation] = &[
        Accommodation::Hotels,
        Accommodation::Hostels,
        Accommodation::VacationRentals,
        Accommodation::Other,
    ];

    pub fn next(self) -> Self {
        cycle(Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(Self::ALL, self, -1)
    }
}

impl fmt::Display for Accommodation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Accommodation::Hotels => "Hotels",
            Accommodation::Hostels => "Hostels",
            Accommodation::VacationRentals => "Vacation Rentals",
            Accommodation::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Preferred mode of local transportation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transit {
    #[default]
    PublicTransit,
    CarRental,
    Biking,
    Walking,
    Other,
}

impl Transit {
    pub const ALL: &'static [Transit] = &[
        Transit::PublicTransit,
        Transit::CarRental,
        Transit::Biking,
        Transit::Walking,
        Transit::Other,
    ];

    pub fn next(self) -> Self {
        cycle(Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(Self::ALL, self, -1)
    }
}

impl fmt::Display for Transit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Transit::PublicTransit => "Public Transit",
            Transit::CarRental => "Car Rental",
            Transit::Biking => "Biking",
            Transit::Walking => "Walking",
            Transit::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Step through a fixed option list, wrapping at both ends
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: isize) -> T {
    let len = all.len() as isize;
    let idx = all.iter().position(|v| *v == current).unwrap_or(0) as isize;
    all[((idx + step).rem_euclid(len)) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let request = TripRequest::default();

        assert_eq!(request.budget, Budget::Moderate);
        assert_eq!(request.member_count, 1);
        assert_eq!(request.duration_days, 3);
        assert!(!request.wants_followup);
        assert!(request.accommodation.is_none());
        assert!(request.transportation.is_none());
    }

    #[test]
    fn test_merged_preferences_without_followup() {
        let request = TripRequest {
            preferences: "vegetarian".to_string(),
            activities: "hiking".to_string(),
            accommodation: Some(Accommodation::Hostels),
            wants_followup: false,
            ..TripRequest::default()
        };

        // Follow-up answers present but the toggle is off: nothing appended
        assert_eq!(request.merged_preferences(), "vegetarian");
    }

    #[test]
    fn test_merged_preferences_followup_all_empty() {
        let request = TripRequest {
            preferences: "vegetarian".to_string(),
            wants_followup: true,
            ..TripRequest::default()
        };

        // Toggle on but nothing answered: preferences pass through unchanged
        assert_eq!(request.merged_preferences(), "vegetarian");
    }

    #[test]
    fn test_merged_preferences_appends_block() {
        let request = TripRequest {
            preferences: "vegetarian".to_string(),
            wants_followup: true,
            activities: "hiking, museums".to_string(),
            accommodation: Some(Accommodation::VacationRentals),
            transportation: Some(Transit::Biking),
            ..TripRequest::default()
        };

        assert_eq!(
            request.merged_preferences(),
            "vegetarian\nActivities: hiking, museums\nAccommodation: Vacation Rentals\nTransportation: Biking"
        );
    }

    #[test]
    fn test_merged_preferences_partial_followup_renders_empty_slots() {
        let request = TripRequest {
            preferences: String::new(),
            wants_followup: true,
            activities: "food tours".to_string(),
            ..TripRequest::default()
        };

        assert_eq!(
            request.merged_preferences(),
            "\nActivities: food tours\nAccommodation: \nTransportation: "
        );
    }

    #[test]
    fn test_enum_cycling_wraps() {
        assert_eq!(Budget::High.next(), Budget::Low);
        assert_eq!(Budget::Low.prev(), Budget::High);
        assert_eq!(Accommodation::Hotels.prev(), Accommodation::Other);
        assert_eq!(Transit::Other.next(), Transit::PublicTransit);
    }

    #[test]
    fn test_display_labels_match_option_lists() {
        assert_eq!(Budget::Moderate.to_string(), "Moderate");
        assert_eq!(Accommodation::VacationRentals.to_string(), "Vacation Rentals");
        assert_eq!(Transit::PublicTransit.to_string(), "Public Transit");
    }

    proptest! {
        /// Toggle off: merged preferences always equal the raw input
        #[test]
        fn prop_no_followup_passes_through(prefs in ".*", activities in ".*") {
            let request = TripRequest {
                preferences: prefs.clone(),
                activities,
                accommodation: Some(Accommodation::Other),
                wants_followup: false,
                ..TripRequest::default()
            };
            prop_assert_eq!(request.merged_preferences(), prefs);
        }

        /// Toggle on with any answer: block is appended with verbatim values
        #[test]
        fn prop_followup_block_contains_values(prefs in ".*", activities in ".+") {
            let request = TripRequest {
                preferences: prefs.clone(),
                activities: activities.clone(),
                wants_followup: true,
                ..TripRequest::default()
            };
            let merged = request.merged_preferences();
            prop_assert!(merged.starts_with(&prefs));
            let activities_line = format!("\nActivities: {}", activities);
            prop_assert!(merged.contains(&activities_line));
        }
    }
}
