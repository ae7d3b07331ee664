use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_newtype!(StoryId);
id_newtype!(ExhibitionId);

/// Fixed accent palette shared by every card, hero and detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentColor {
    Blue,
    Violet,
    Orange,
    Yellow,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPair {
    pub background: &'static str,
    pub foreground: &'static str,
}

pub const WHITE: &str = "#FFFFFF";
pub const BLACK: &str = "#000000";

impl AccentColor {
    pub const ALL: [AccentColor; 5] = [
        AccentColor::Blue,
        AccentColor::Violet,
        AccentColor::Orange,
        AccentColor::Yellow,
        AccentColor::Green,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Violet => "violet",
            AccentColor::Orange => "orange",
            AccentColor::Yellow => "yellow",
            AccentColor::Green => "green",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            AccentColor::Blue => "#5A5FEF",
            AccentColor::Violet => "#A880FF",
            AccentColor::Orange => "#FF5C45",
            AccentColor::Yellow => "#FFD700",
            AccentColor::Green => "#59F5B1",
        }
    }

    /// Yellow and green carry dark text; the rest carry white.
    pub fn is_light(self) -> bool {
        matches!(self, AccentColor::Yellow | AccentColor::Green)
    }

    pub fn palette(self) -> ColorPair {
        ColorPair {
            background: self.hex(),
            foreground: if self.is_light() { BLACK } else { WHITE },
        }
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccentColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccentColor::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownAccentColor(s.to_string()))
    }
}

/// Colors for a card: the active card takes its accent pair, every other
/// card renders white with black text.
pub fn card_colors(accent: AccentColor, is_active: bool) -> ColorPair {
    if is_active {
        accent.palette()
    } else {
        ColorPair {
            background: WHITE,
            foreground: BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhibitionKind {
    Exhibition,
    Event,
    Workshop,
}

impl ExhibitionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ExhibitionKind::Exhibition => "exhibition",
            ExhibitionKind::Event => "event",
            ExhibitionKind::Workshop => "workshop",
        }
    }
}

impl FromStr for ExhibitionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exhibition" => Ok(ExhibitionKind::Exhibition),
            "event" => Ok(ExhibitionKind::Event),
            "workshop" => Ok(ExhibitionKind::Workshop),
            _ => Err(DomainError::UnknownKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhibitionStatus {
    Current,
    Upcoming,
    Past,
}

impl ExhibitionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ExhibitionStatus::Current => "current",
            ExhibitionStatus::Upcoming => "upcoming",
            ExhibitionStatus::Past => "past",
        }
    }
}

impl FromStr for ExhibitionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(ExhibitionStatus::Current),
            "upcoming" => Ok(ExhibitionStatus::Upcoming),
            "past" => Ok(ExhibitionStatus::Past),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub time_period: String,
    pub geography: String,
    pub theme: Vec<String>,
    pub accent_color: AccentColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exhibition {
    pub id: ExhibitionId,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub kind: ExhibitionKind,
    pub status: ExhibitionStatus,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Human-readable date range as printed on cards.
    pub dates: String,
    pub location: String,
    pub accent_color: AccentColor,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_stories: Vec<String>,
}

/// Accessors shared by every record that can appear in a listing or a
/// carousel.
pub trait Listable {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn slug(&self) -> &str;
    fn accent_color(&self) -> AccentColor;
}

impl Listable for Story {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn accent_color(&self) -> AccentColor {
        self.accent_color
    }
}

impl Listable for Exhibition {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn accent_color(&self) -> AccentColor {
        self.accent_color
    }
}
