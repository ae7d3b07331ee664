//! Sample content bundled with the site. Loaded once per process and never
//! mutated afterwards.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use shared::{
    domain::{
        AccentColor, Exhibition, ExhibitionId, ExhibitionKind, ExhibitionStatus, Story, StoryId,
    },
    protocol::{FilterOptions, TimePeriodOption},
};

static STORIES: Lazy<Vec<Story>> = Lazy::new(build_stories);
static EXHIBITIONS: Lazy<Vec<Exhibition>> = Lazy::new(build_exhibitions);

const THEMES: &[&str] = &["work", "family", "conflict", "identity", "food", "journeys"];

const TIME_PERIODS: &[(&str, &str)] = &[
    ("pre-1900", "Before 1900"),
    ("1900-1945", "1900 - 1945"),
    ("1945-1970", "1945 - 1970"),
    ("1970-2000", "1970 - 2000"),
    ("2000-present", "2000 - present"),
];

const GEOGRAPHIES: &[&str] = &[
    "Europe",
    "Caribbean",
    "South Asia",
    "East Asia",
    "Africa",
    "Middle East",
];

pub fn stories() -> &'static [Story] {
    &STORIES
}

pub fn exhibitions() -> &'static [Exhibition] {
    &EXHIBITIONS
}

pub fn themes() -> &'static [&'static str] {
    THEMES
}

pub fn time_periods() -> &'static [(&'static str, &'static str)] {
    TIME_PERIODS
}

pub fn geographies() -> &'static [&'static str] {
    GEOGRAPHIES
}

pub fn filter_options() -> FilterOptions {
    FilterOptions {
        themes: THEMES.iter().map(|t| t.to_string()).collect(),
        time_periods: TIME_PERIODS
            .iter()
            .map(|(value, label)| TimePeriodOption {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect(),
        geographies: GEOGRAPHIES.iter().map(|g| g.to_string()).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn story(
    id: &str,
    title: &str,
    slug: &str,
    time_period: &str,
    geography: &str,
    theme: &[&str],
    accent_color: AccentColor,
    excerpt: &str,
) -> Story {
    Story {
        id: StoryId::new(id),
        title: title.into(),
        slug: slug.into(),
        excerpt: excerpt.into(),
        time_period: time_period.into(),
        geography: geography.into(),
        theme: theme.iter().map(|t| t.to_string()).collect(),
        accent_color,
    }
}

// Ordered oldest to newest; "newest first" listings reverse this order.
fn build_stories() -> Vec<Story> {
    vec![
        story(
            "s1",
            "Huguenot Weavers of Spitalfields",
            "huguenot-weavers",
            "pre-1900",
            "Europe",
            &["work", "identity"],
            AccentColor::Violet,
            "Fleeing persecution in France, thousands of Protestant refugees settled in the east of London and turned its garrets into the silk-weaving heart of the city, leaving a mark on its streets, churches and names.",
        ),
        story(
            "s2",
            "Lascars on the London Docks",
            "lascars-london-docks",
            "pre-1900",
            "South Asia",
            &["work", "journeys"],
            AccentColor::Orange,
            "Sailors recruited across the Indian Ocean crewed the ships of empire and, stranded between voyages, built the first South Asian communities around the docks of the Thames.",
        ),
        story(
            "s3",
            "Kindertransport Letters",
            "kindertransport-letters",
            "1900-1945",
            "Europe",
            &["family", "conflict"],
            AccentColor::Blue,
            "Ten thousand children travelled alone from Nazi-controlled Europe in the months before the war. Their letters home trace new lives, foster families and the silence that followed.",
        ),
        story(
            "s4",
            "Arrival at Tilbury",
            "arrival-at-tilbury",
            "1945-1970",
            "Caribbean",
            &["journeys", "identity", "work"],
            AccentColor::Yellow,
            "The passengers who stepped off at Tilbury in 1948 answered a call to rebuild a country after the war, and found both opportunity and a colour bar waiting for them on the quayside.",
        ),
        story(
            "s5",
            "The Curry House Kitchen",
            "curry-house-kitchen",
            "1970-2000",
            "South Asia",
            &["food", "work", "family"],
            AccentColor::Green,
            "Behind the counter of a thousand high-street restaurants, families from Sylhet built businesses that reshaped how a nation eats, one late shift at a time.",
        ),
        story(
            "s6",
            "Expelled from Uganda",
            "expelled-from-uganda",
            "1970-2000",
            "Africa",
            &["conflict", "family"],
            AccentColor::Orange,
            "Given ninety days to leave the country of their birth, tens of thousands of Ugandan Asians arrived with little more than a suitcase and rebuilt their lives in market towns across Britain.",
        ),
        story(
            "s7",
            "Chinatown Supper Clubs",
            "chinatown-supper-clubs",
            "1945-1970",
            "East Asia",
            &["food", "identity"],
            AccentColor::Violet,
            "Seamen's cafes grew into supper clubs and then into a neighbourhood, as Cantonese cooks moved from the docks of Limehouse to the narrow streets of Soho.",
        ),
        story(
            "s8",
            "A Phone Call Home",
            "a-phone-call-home",
            "2000-present",
            "Middle East",
            &["family", "journeys"],
            AccentColor::Blue,
            "From prepaid cards to video calls on a cracked screen, the ways people keep in touch with family left behind have changed, but the waiting for news has not.",
        ),
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn build_exhibitions() -> Vec<Exhibition> {
    vec![
        Exhibition {
            id: ExhibitionId::new("e1"),
            title: "All Our Stories".into(),
            slug: "all-our-stories".into(),
            short_description: "Our flagship exhibition brings together hundreds of objects, voices and photographs charting how movement to and from Britain has shaped who we are.".into(),
            kind: ExhibitionKind::Exhibition,
            status: ExhibitionStatus::Current,
            start_date: date(2024, 3, 1),
            end_date: Some(date(2025, 12, 31)),
            dates: "1 March 2024 - 31 December 2025".into(),
            location: "Main Gallery".into(),
            accent_color: AccentColor::Violet,
            related_stories: vec!["arrival-at-tilbury".into(), "expelled-from-uganda".into()],
        },
        Exhibition {
            id: ExhibitionId::new("e2"),
            title: "Taste of Home".into(),
            slug: "taste-of-home".into(),
            short_description: "A hands-on family workshop exploring recipes carried across borders, with cooking demonstrations and a shared table at the end.".into(),
            kind: ExhibitionKind::Workshop,
            status: ExhibitionStatus::Upcoming,
            start_date: date(2024, 9, 14),
            end_date: None,
            dates: "14 September 2024".into(),
            location: "Learning Studio".into(),
            accent_color: AccentColor::Green,
            related_stories: vec!["curry-house-kitchen".into(), "chinatown-supper-clubs".into()],
        },
        Exhibition {
            id: ExhibitionId::new("e3"),
            title: "Departures".into(),
            slug: "departures".into(),
            short_description: "Photographs of the moment of leaving: airports, harbours and railway platforms from six decades of emigration.".into(),
            kind: ExhibitionKind::Exhibition,
            status: ExhibitionStatus::Past,
            start_date: date(2023, 5, 10),
            end_date: Some(date(2023, 11, 30)),
            dates: "10 May 2023 - 30 November 2023".into(),
            location: "Gallery Two".into(),
            accent_color: AccentColor::Blue,
            related_stories: vec!["a-phone-call-home".into()],
        },
        Exhibition {
            id: ExhibitionId::new("e4"),
            title: "Late Night: Sound System".into(),
            slug: "late-night-sound-system".into(),
            short_description: "An evening of music, talks and dancing celebrating the sound system culture that migrants brought to Britain's cities.".into(),
            kind: ExhibitionKind::Event,
            status: ExhibitionStatus::Upcoming,
            start_date: date(2024, 10, 25),
            end_date: None,
            dates: "25 October 2024".into(),
            location: "Main Hall".into(),
            accent_color: AccentColor::Orange,
            related_stories: vec!["arrival-at-tilbury".into()],
        },
        Exhibition {
            id: ExhibitionId::new("e5"),
            title: "Threads".into(),
            slug: "threads".into(),
            short_description: "Textiles, looms and pattern books from three centuries of migrant weavers and garment workers.".into(),
            kind: ExhibitionKind::Exhibition,
            status: ExhibitionStatus::Current,
            start_date: date(2024, 6, 1),
            end_date: Some(date(2025, 2, 28)),
            dates: "1 June 2024 - 28 February 2025".into(),
            location: "Gallery Three".into(),
            accent_color: AccentColor::Yellow,
            related_stories: vec!["huguenot-weavers".into(), "lascars-london-docks".into()],
        },
        Exhibition {
            id: ExhibitionId::new("e6"),
            title: "Oral History Drop-in".into(),
            slug: "oral-history-drop-in".into(),
            short_description: "Bring a memory, a photograph or an object and record your own migration story with our oral history team.".into(),
            kind: ExhibitionKind::Workshop,
            status: ExhibitionStatus::Current,
            start_date: date(2024, 4, 6),
            end_date: None,
            dates: "Every Saturday from 6 April 2024".into(),
            location: "Learning Studio".into(),
            accent_color: AccentColor::Blue,
            related_stories: vec!["kindertransport-letters".into()],
        },
    ]
}
