//! Page selection from the URL path, hash fragment, and navigation events

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Name of the in-page event views broadcast to request navigation
pub const NAVIGATE_EVENT: &str = "navigate";

/// The closed set of pages rendered inside the shared header and footer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    #[default]
    Home,
    Features,
    Pricing,
    Faqs,
    Contact,
    About,
    Privacy,
    Terms,
    Security,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page identifier: {0}")]
pub struct UnknownPage(pub String);

impl PageId {
    pub const ALL: [Self; 9] = [
        Self::Home,
        Self::Features,
        Self::Pricing,
        Self::Faqs,
        Self::Contact,
        Self::About,
        Self::Privacy,
        Self::Terms,
        Self::Security,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Features => "features",
            Self::Pricing => "pricing",
            Self::Faqs => "faqs",
            Self::Contact => "contact",
            Self::About => "about",
            Self::Privacy => "privacy",
            Self::Terms => "terms",
            Self::Security => "security",
        }
    }

    /// Link text used in the header and footer
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Features => "Features",
            Self::Pricing => "Pricing",
            Self::Faqs => "FAQs",
            Self::Contact => "Contact",
            Self::About => "About Us",
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Service",
            Self::Security => "Security",
        }
    }

    /// Total mapping from a fragment (with or without `#`) to a page
    ///
    /// Empty and unrecognized fragments select [`PageId::Home`].
    pub fn from_hash(hash: &str) -> Self {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        fragment.parse().unwrap_or_default()
    }

    /// Fragment (without `#`) that reconstructs this page; home keeps the root URL clean
    pub fn to_hash(self) -> &'static str {
        match self {
            Self::Home => "",
            other => other.as_str(),
        }
    }
}

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full-page views served outside the header/footer shell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandalonePage {
    Login,
    Signup,
}

impl StandalonePage {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/login" => Some(Self::Login),
            "/signup" => Some(Self::Signup),
            _ => None,
        }
    }
}

/// What the application renders for a location
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Standalone(StandalonePage),
    Page(PageId),
}

impl Route {
    /// Reserved paths win; otherwise the fragment picks the page
    pub fn resolve(pathname: &str, hash: &str) -> Self {
        StandalonePage::from_path(pathname)
            .map_or_else(|| Self::Page(PageId::from_hash(hash)), Self::Standalone)
    }
}

/// Side effects a routing transition asks the host to perform
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub page: PageId,
    /// New fragment (without `#`) to write to the URL, if any
    pub set_hash: Option<&'static str>,
    pub scroll_to_top: bool,
}

/// Current-page bookkeeping
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageRouter {
    current: PageId,
}

impl PageRouter {
    pub fn new(current: PageId) -> Self {
        Self { current }
    }

    pub fn from_hash(hash: &str) -> Self {
        Self::new(PageId::from_hash(hash))
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    /// Browser back/forward: re-derive the page from the fragment
    pub fn on_history_change(&mut self, hash: &str) -> Navigation {
        self.current = PageId::from_hash(hash);
        Navigation {
            page: self.current,
            set_hash: None,
            scroll_to_top: false,
        }
    }

    /// A broadcast navigation event carrying a page identifier
    pub fn on_navigate_event(&mut self, detail: &str) -> Navigation {
        self.current = detail.parse().unwrap_or_default();
        Navigation {
            page: self.current,
            set_hash: None,
            scroll_to_top: true,
        }
    }

    /// Explicit navigation from a header or footer link
    pub fn navigate(&mut self, page: PageId) -> Navigation {
        self.current = page;
        Navigation {
            page,
            set_hash: Some(page.to_hash()),
            scroll_to_top: true,
        }
    }
}
