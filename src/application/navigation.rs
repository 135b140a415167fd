//! Sidebar navigation: the pages of the dashboard and how they are grouped.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Dashboard,
    Stats,
    Users,
    Plans,
    Store,
    Streams,
    Player,
    Vod,
    Control,
    Mail,
    ServerStatus,
    Database,
    Firewall,
    Reports,
    Settings,
}

pub struct NavSection {
    pub title: &'static str,
    pub pages: &'static [Page],
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        title: "Main",
        pages: &[Page::Dashboard, Page::Stats],
    },
    NavSection {
        title: "User Management",
        pages: &[Page::Users, Page::Plans, Page::Store],
    },
    NavSection {
        title: "Streaming",
        pages: &[Page::Streams, Page::Player, Page::Vod],
    },
    NavSection {
        title: "System",
        pages: &[Page::Control, Page::Mail, Page::ServerStatus, Page::Database],
    },
    NavSection {
        title: "Security",
        pages: &[Page::Firewall, Page::Reports],
    },
    NavSection {
        title: "",
        pages: &[Page::Settings],
    },
];

impl Page {
    /// Every page in sidebar order.
    pub fn all() -> impl Iterator<Item = Page> {
        NAV_SECTIONS.iter().flat_map(|section| section.pages.iter().copied())
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Stats => "Statistics",
            Page::Users => "Users",
            Page::Plans => "Plans & Services",
            Page::Store => "Store",
            Page::Streams => "Stream Control",
            Page::Player => "Player",
            Page::Vod => "Video On Demand",
            Page::Control => "Control Panel",
            Page::Mail => "Mail Server",
            Page::ServerStatus => "Server Status",
            Page::Database => "Database",
            Page::Firewall => "Firewall",
            Page::Reports => "Reports",
            Page::Settings => "Settings",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Stats => "stats",
            Page::Users => "users",
            Page::Plans => "plans",
            Page::Store => "store",
            Page::Streams => "streams",
            Page::Player => "player",
            Page::Vod => "vod",
            Page::Control => "control",
            Page::Mail => "mail",
            Page::ServerStatus => "server-status",
            Page::Database => "database",
            Page::Firewall => "firewall",
            Page::Reports => "reports",
            Page::Settings => "settings",
        }
    }

    pub fn next(self) -> Page {
        let pages: Vec<Page> = Page::all().collect();
        let index = pages.iter().position(|p| *p == self).unwrap_or(0);
        pages[(index + 1) % pages.len()]
    }

    pub fn previous(self) -> Page {
        let pages: Vec<Page> = Page::all().collect();
        let index = pages.iter().position(|p| *p == self).unwrap_or(0);
        pages[(index + pages.len() - 1) % pages.len()]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('/').to_lowercase();
        if wanted.is_empty() {
            return Ok(Page::Dashboard);
        }
        Page::all()
            .find(|page| page.slug() == wanted)
            .ok_or_else(|| format!("unknown page: {s}"))
    }
}
