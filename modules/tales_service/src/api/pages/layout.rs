//! Page chrome: document shell, navigation bar, footer and link helpers

use crate::contract::{BrowseView, TaleQuery};

/// Top-level navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Explore,
    About,
    Contact,
    /// Reader and error pages: nothing highlighted
    None,
}

const NAV_LINKS: [(NavItem, &str, &str); 4] = [
    (NavItem::Home, "Home", "/"),
    (NavItem::Explore, "Explore", "/explore"),
    (NavItem::About, "About", "/about"),
    (NavItem::Contact, "Contact", "/contact"),
];

impl From<BrowseView> for NavItem {
    fn from(view: BrowseView) -> Self {
        match view {
            BrowseView::Home => Self::Home,
            BrowseView::Explore => Self::Explore,
        }
    }
}

/// Escape text for HTML element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Query string for a browse link
///
/// `view` is included for reader links, which need to know where they came from.
pub fn browse_query(view: Option<BrowseView>, query: &TaleQuery, limit: usize) -> String {
    let mut qs = url::form_urlencoded::Serializer::new(String::new());
    if let Some(view) = view {
        qs.append_pair("view", view.as_str());
    }
    if let Some(search) = &query.search {
        qs.append_pair("search", search);
    }
    if let Some(nation) = &query.nation {
        qs.append_pair("nation", nation);
    }
    qs.append_pair("limit", &limit.to_string());
    qs.finish()
}

fn navbar(active: NavItem) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(item, label, href)| {
            let class = if *item == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{href}\"{class}>{label}</a>")
        })
        .collect();
    format!(
        "<nav class=\"navbar\"><div class=\"nav-inner\">\
<a class=\"brand\" href=\"/\">Folktales</a>\
<div class=\"nav-links\">{links}</div></div></nav>"
    )
}

fn footer() -> &'static str {
    "<footer class=\"footer\"><p>&copy; 2025 Folktales App. All rights reserved.</p></footer>"
}

/// Banner shown while tales come from the offline snapshot
pub fn offline_banner() -> &'static str {
    "<div class=\"offline-banner\">You are offline. Showing limited tales from offline storage.</div>"
}

/// Full HTML document around `body`
pub fn document(title: &str, active: NavItem, body: &str) -> String {
    format!(
        "<!doctype html>\
<html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title} | Folktales</title>\
<link rel=\"stylesheet\" href=\"/assets/style.css\">\
</head><body>{nav}<main>{body}</main>{footer}</body></html>",
        title = escape_html(title),
        nav = navbar(active),
        footer = footer(),
    )
}
