//! Mock statistics shown on the dashboard and statistics pages.

/// A headline figure with an optional week-over-week change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change_percent: Option<i8>,
    pub detail: Option<&'static str>,
}

impl StatCard {
    const fn plain(title: &'static str, value: &'static str) -> Self {
        Self {
            title,
            value,
            change_percent: None,
            detail: None,
        }
    }

    const fn trending(
        title: &'static str,
        value: &'static str,
        change_percent: i8,
        detail: &'static str,
    ) -> Self {
        Self {
            title,
            value,
            change_percent: Some(change_percent),
            detail: Some(detail),
        }
    }

    /// `+5%`, `-3%`, or empty when the card has no trend.
    pub fn change_label(&self) -> String {
        match self.change_percent {
            Some(p) if p >= 0 => format!("+{p}%"),
            Some(p) => format!("{p}%"),
            None => String::new(),
        }
    }

    pub fn is_declining(&self) -> bool {
        self.change_percent.is_some_and(|p| p < 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityEntry {
    pub user: &'static str,
    pub action: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerSample {
    pub day: &'static str,
    pub viewers: u64,
    pub sessions: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationShare {
    pub country: &'static str,
    pub users: u32,
}

impl LocationShare {
    /// Share shown next to the user count, `round(users / 40)` percent.
    pub fn percent(&self) -> u32 {
        (self.users as f64 / 40.0).round() as u32
    }
}

pub const DASHBOARD_CARDS: [StatCard; 4] = [
    StatCard::plain("Total Users", "2,345"),
    StatCard::plain("Active Streams", "126"),
    StatCard::plain("VOD Content", "1,087"),
    StatCard::plain("Monthly Revenue", "$12,345"),
];

pub const MONTHLY_STREAMS: [(&str, u64); 7] = [
    ("Jan", 400),
    ("Feb", 600),
    ("Mar", 800),
    ("Apr", 1200),
    ("May", 800),
    ("Jun", 1600),
    ("Jul", 1800),
];

/// Share of traffic per protocol on the dashboard, in percent.
pub const POPULAR_SERVICES: [(&str, u16); 4] =
    [("HLS", 42), ("RTMP", 28), ("WebRTC", 18), ("RTSP", 12)];

pub const RECENT_ACTIVITY: [ActivityEntry; 5] = [
    ActivityEntry {
        user: "Carlos Rodriguez",
        action: "Started a new RTMP stream",
        time: "5 minutes ago",
    },
    ActivityEntry { user: "Maria Garcia", action: "Purchased HLS Package", time: "1 hour ago" },
    ActivityEntry { user: "John Smith", action: "Updated player settings", time: "2 hours ago" },
    ActivityEntry { user: "Sara Johnson", action: "Added new VOD content", time: "5 hours ago" },
    ActivityEntry { user: "Michael Brown", action: "Changed security settings", time: "1 day ago" },
];

pub const SUMMARY_CARDS: [StatCard; 4] = [
    StatCard::trending("Active Users", "1,248", 5, "+125 since last week"),
    StatCard::trending("Active Streams", "348", 12, "+38 since last week"),
    StatCard::trending("Bandwidth", "625 GB", -3, "-18 GB since last week"),
    StatCard::trending("New Signups", "57", 8, "+4 since last week"),
];

pub const VIEWERS: [ViewerSample; 7] = [
    ViewerSample { day: "Mon", viewers: 4000, sessions: 2400 },
    ViewerSample { day: "Tue", viewers: 3000, sessions: 1398 },
    ViewerSample { day: "Wed", viewers: 2000, sessions: 9800 },
    ViewerSample { day: "Thu", viewers: 2780, sessions: 3908 },
    ViewerSample { day: "Fri", viewers: 1890, sessions: 4800 },
    ViewerSample { day: "Sat", viewers: 2390, sessions: 3800 },
    ViewerSample { day: "Sun", viewers: 3490, sessions: 4300 },
];

pub const SERVICE_DISTRIBUTION: [(&str, u64); 5] =
    [("RTMP", 45), ("HLS", 30), ("WebRTC", 15), ("RTSP", 5), ("VOD", 5)];

pub const WEEKLY_BANDWIDTH: [(&str, u64); 4] =
    [("Week 1", 350), ("Week 2", 420), ("Week 3", 380), ("Week 4", 510)];

pub const TOP_LOCATIONS: [LocationShare; 5] = [
    LocationShare { country: "United States", users: 1456 },
    LocationShare { country: "Mexico", users: 824 },
    LocationShare { country: "Spain", users: 756 },
    LocationShare { country: "Argentina", users: 498 },
    LocationShare { country: "Colombia", users: 387 },
];

/// Reporting window picked on the statistics page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsPeriod {
    Today,
    Yesterday,
    #[default]
    Last7Days,
    Last30Days,
    Last90Days,
    Custom,
}

impl StatsPeriod {
    const ORDER: [StatsPeriod; 6] = [
        StatsPeriod::Today,
        StatsPeriod::Yesterday,
        StatsPeriod::Last7Days,
        StatsPeriod::Last30Days,
        StatsPeriod::Last90Days,
        StatsPeriod::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatsPeriod::Today => "Today",
            StatsPeriod::Yesterday => "Yesterday",
            StatsPeriod::Last7Days => "Last 7 days",
            StatsPeriod::Last30Days => "Last 30 days",
            StatsPeriod::Last90Days => "Last 90 days",
            StatsPeriod::Custom => "Custom",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|p| *p == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_percent_rounds() {
        let percents: Vec<u32> = TOP_LOCATIONS.iter().map(|l| l.percent()).collect();
        assert_eq!(percents, vec![36, 21, 19, 12, 10]);
    }

    #[test]
    fn test_change_labels() {
        assert_eq!(SUMMARY_CARDS[0].change_label(), "+5%");
        assert_eq!(SUMMARY_CARDS[2].change_label(), "-3%");
        assert!(SUMMARY_CARDS[2].is_declining());
        assert_eq!(DASHBOARD_CARDS[0].change_label(), "");
    }

    #[test]
    fn test_period_cycles_back_to_start() {
        let mut period = StatsPeriod::default();
        assert_eq!(period.label(), "Last 7 days");
        for _ in 0..6 {
            period = period.next();
        }
        assert_eq!(period, StatsPeriod::Last7Days);
        assert_eq!(StatsPeriod::Custom.next(), StatsPeriod::Today);
    }
}
