use serde::{Deserialize, Serialize};

/// One of the three top-level pages of the app.
///
/// Keys (`home`, `planning`, `essentials`) are what the navbar emits and what
/// `Display`/`FromStr` speak.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Page {
    #[default]
    Home,
    Planning,
    Essentials,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 3] = [Page::Home, Page::Planning, Page::Essentials];

    /// Lenient parse: anything unrecognised lands on `Home`.
    pub fn from_key(key: &str) -> Self {
        key.trim().parse().unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Planning => "Planning",
            Page::Essentials => "Essentials",
        }
    }
}

/// A user-submitted ticket link. The text is never validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LinkEntry {
    pub text: String,
}

impl LinkEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Label shown in the list; positions are 1-based.
    pub fn display_label(index: usize) -> String {
        format!("Ticket Link {}", index + 1)
    }
}

/// The fixed packing list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum ChecklistItem {
    WarmClothing,
    ComfortableShoes,
    RainJacket,
    Medications,
    PowerBank,
    Camera,
    Sunglasses,
    Toiletries,
    WaterBottle,
    Snacks,
}

impl ChecklistItem {
    pub const COUNT: usize = 10;

    /// Display order.
    pub const ALL: [ChecklistItem; Self::COUNT] = [
        ChecklistItem::WarmClothing,
        ChecklistItem::ComfortableShoes,
        ChecklistItem::RainJacket,
        ChecklistItem::Medications,
        ChecklistItem::PowerBank,
        ChecklistItem::Camera,
        ChecklistItem::Sunglasses,
        ChecklistItem::Toiletries,
        ChecklistItem::WaterBottle,
        ChecklistItem::Snacks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChecklistItem::WarmClothing => "Warm clothing (layers)",
            ChecklistItem::ComfortableShoes => "Comfortable shoes",
            ChecklistItem::RainJacket => "Rain jacket",
            ChecklistItem::Medications => "Medications",
            ChecklistItem::PowerBank => "Power bank",
            ChecklistItem::Camera => "Camera",
            ChecklistItem::Sunglasses => "Sunglasses",
            ChecklistItem::Toiletries => "Toiletries",
            ChecklistItem::WaterBottle => "Water bottle",
            ChecklistItem::Snacks => "Snacks",
        }
    }

    /// Slot in a fixed-size per-item array. Matches the position in `ALL`.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
