//! Fixed trip content for the Home and Planning pages.

pub(crate) const TRIP_TITLE: &str = "Darjeeling Winter Expedition";
pub(crate) const TRIP_TAGLINE: &str =
    "A magical journey through the misty mountains, tea gardens, and serene landscapes of Darjeeling";

pub(crate) const HIGHLIGHTS: [&str; 4] = [
    "Sunrise at Tiger Hill",
    "Mirik Lake & Lepchajagat",
    "Takdah Monastery",
    "Orange Valley Tea Garden",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TimelineFact {
    pub label: &'static str,
    pub value: &'static str,
}

pub(crate) const TIMELINE: [TimelineFact; 4] = [
    TimelineFact {
        label: "Departure",
        value: "26th December",
    },
    TimelineFact {
        label: "Return",
        value: "2nd January",
    },
    TimelineFact {
        label: "Total Nights",
        value: "5 Nights",
    },
    TimelineFact {
        label: "Key Locations",
        value: "Takdah, Darjeeling, Lamahatta, Sittong",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TrainStop {
    pub time: &'static str,
    pub place: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TrainLeg {
    pub heading: &'static str,
    pub name: &'static str,
    pub number: &'static str,
    pub date: &'static str,
    pub stops: [TrainStop; 2],
}

impl TrainLeg {
    /// `Garib Rath (12517) • 26th December`
    pub fn summary(&self) -> String {
        format!("{} ({}) • {}", self.name, self.number, self.date)
    }
}

pub(crate) const TRAINS: [TrainLeg; 2] = [
    TrainLeg {
        heading: "Departure Train",
        name: "Garib Rath",
        number: "12517",
        date: "26th December",
        stops: [
            TrainStop {
                time: "9:45 PM",
                place: "Kolkata Station",
            },
            TrainStop {
                time: "7:45 AM",
                place: "NJP Station",
            },
        ],
    },
    TrainLeg {
        heading: "Return Train",
        name: "Kanchan Kanya",
        number: "13150",
        date: "1st January",
        stops: [
            TrainStop {
                time: "7:55 PM",
                place: "Siliguri Junction",
            },
            TrainStop {
                time: "8:20 AM",
                place: "Arrival",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_summary_format() {
        assert_eq!(TRAINS[0].summary(), "Garib Rath (12517) • 26th December");
        assert_eq!(TRAINS[1].summary(), "Kanchan Kanya (13150) • 1st January");
    }
}
