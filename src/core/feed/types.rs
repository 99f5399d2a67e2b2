/// Maximum number of cards rendered from a feed, taken in document order.
pub const NEWS_ITEM_LIMIT: usize = 3;

/// Link value meaning "no link available".
pub const PLACEHOLDER_LINK: &str = "#";

/// One `<item>` as it appears in the feed document. Empty elements are
/// stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFeedItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub pub_date: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedOn {
    /// Three-letter English month, e.g. "Sep".
    pub month: String,
    /// Zero-padded day of month, e.g. "08".
    pub day: String,
    pub year: i32,
}

impl PublishedOn {
    pub fn new(month: &str, day: &str, year: i32) -> Self {
        Self {
            month: month.to_string(),
            day: day.to_string(),
            year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNewsItem {
    pub title: String,
    pub summary: String,
    pub link: String,
    pub published_on: PublishedOn,
}

impl DisplayNewsItem {
    /// Whether the link leaves the site and should open in a new context.
    pub fn is_external(&self) -> bool {
        self.link.starts_with("http")
    }
}

/// Static collection shown whenever the live feed cannot be loaded.
pub fn fallback_news() -> Vec<DisplayNewsItem> {
    vec![
        DisplayNewsItem {
            title: "Annual Flu Vaccination Now Available".to_string(),
            summary: "Protect yourself and your family this flu season. Schedule your annual flu vaccination today for optimal protection.".to_string(),
            link: PLACEHOLDER_LINK.to_string(),
            published_on: PublishedOn::new("Sep", "15", 2025),
        },
        DisplayNewsItem {
            title: "Heart Health Awareness Month".to_string(),
            summary: "Learn about the importance of cardiovascular health and simple lifestyle changes that can make a significant difference.".to_string(),
            link: PLACEHOLDER_LINK.to_string(),
            published_on: PublishedOn::new("Sep", "08", 2025),
        },
        DisplayNewsItem {
            title: "New Telehealth Services Available".to_string(),
            summary: "We are now offering convenient telehealth consultations for follow-up appointments and routine check-ins.".to_string(),
            link: PLACEHOLDER_LINK.to_string(),
            published_on: PublishedOn::new("Aug", "28", 2025),
        },
    ]
}
