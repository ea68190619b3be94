//! HTML renderers for each page

use super::layout::{browse_query, document, escape_html, offline_banner, NavItem};
use crate::contract::{BrowseView, ContactMessage, ReaderPage, Tale, TalePage};

// ===== Catalog (home / explore) =====

/// Home or explore page
pub fn catalog(page: &TalePage, nations: &[String]) -> String {
    let view = page.view;
    let mut body = String::new();

    body.push_str(&hero(page));
    if page.is_offline() {
        body.push_str(offline_banner());
    }

    body.push_str("<section class=\"catalog\">");
    body.push_str(&filter_form(page, nations));
    body.push_str(&grid(page));

    if page.has_more {
        // Jump to the first tale the next step reveals
        body.push_str(&format!(
            "<div class=\"more\"><a class=\"button\" href=\"{path}?{qs}#tale-{first_new}\">View More</a></div>",
            path = view.path(),
            qs = escape_html(&browse_query(None, &page.query, page.next_limit)),
            first_new = page.query.limit,
        ));
    }
    body.push_str("</section>");

    let title = match view {
        BrowseView::Home => "Home",
        BrowseView::Explore => "Explore",
    };
    document(title, view.into(), &body)
}

fn hero(page: &TalePage) -> String {
    match page.view {
        BrowseView::Home => format!(
            "<section class=\"hero hero-home\"><h1>Welcome to Folktales App</h1>\
<p>Explore amazing folktales from all around the world. Stay updated with the latest stories we add every week!</p>\
<a class=\"button\" href=\"/random?{qs}\">Read a Random Tale</a></section>",
            qs = escape_html(&browse_query(Some(page.view), &page.query, page.query.limit)),
        ),
        BrowseView::Explore => {
            "<section class=\"hero hero-explore\"><h1>Explore Folktales</h1></section>".to_string()
        }
    }
}

/// Search box and nation select
///
/// Home carries the current limit through a filter change; explore starts
/// over at one page.
fn filter_form(page: &TalePage, nations: &[String]) -> String {
    let search = page.query.search.as_deref().unwrap_or_default();
    let selected = page.query.nation.as_deref();

    let mut options = format!(
        "<option value=\"\"{}>All Nations</option>",
        if selected.is_none() { " selected" } else { "" }
    );
    for nation in nations {
        let sel = if selected == Some(nation.as_str()) { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{n}\"{sel}>{n}</option>",
            n = escape_html(nation)
        ));
    }

    let keep_limit = match page.view {
        BrowseView::Home => format!(
            "<input type=\"hidden\" name=\"limit\" value=\"{}\">",
            page.query.limit
        ),
        BrowseView::Explore => String::new(),
    };

    format!(
        "<form class=\"filters\" method=\"get\" action=\"{action}\">\
<input type=\"text\" name=\"search\" placeholder=\"Search stories...\" value=\"{search}\">\
<select name=\"nation\">{options}</select>{keep_limit}\
<button type=\"submit\">Search</button></form>",
        action = page.view.path(),
        search = escape_html(search),
    )
}

fn grid(page: &TalePage) -> String {
    if page.tales.is_empty() {
        return "<p class=\"empty\">No tales found.</p>".to_string();
    }

    let reader_qs = escape_html(&browse_query(Some(page.view), &page.query, page.query.limit));
    let cards: String = page
        .tales
        .iter()
        .enumerate()
        .map(|(index, tale)| card(index, tale, &reader_qs))
        .collect();
    format!("<div class=\"grid\">{cards}</div>")
}

fn card(index: usize, tale: &Tale, reader_qs: &str) -> String {
    format!(
        "<article class=\"tale-card\" id=\"tale-{index}\">\
<h2>{title}</h2><p class=\"preview\">{text}</p>\
<p class=\"source\">Source: {source}</p>\
<span class=\"nation\">{nation}</span>\
<a class=\"button\" href=\"/read/{index}?{reader_qs}\">View Tale</a></article>",
        title = escape_html(&tale.title),
        text = escape_html(&tale.text),
        source = escape_html(&tale.source),
        nation = escape_html(&tale.nation),
    )
}

// ===== Reader =====

/// Full-screen reader at a position of a browse page
pub fn reader(reader: &ReaderPage) -> String {
    let page = &reader.page;
    let close_href = format!(
        "{}?{}",
        page.view.path(),
        browse_query(None, &page.query, page.query.limit)
    );
    let qs = browse_query(Some(page.view), &page.query, page.query.limit);

    let prev = match reader.position.prev() {
        Some(p) => format!(
            "<a class=\"button\" href=\"/read/{}?{}\">Previous</a>",
            p.index,
            escape_html(&qs)
        ),
        None => "<span class=\"button disabled\">Previous</span>".to_string(),
    };
    let next = match reader.position.next() {
        Some(p) => format!(
            "<a class=\"button\" href=\"/read/{}?{}\">Next</a>",
            p.index,
            escape_html(&qs)
        ),
        None => "<span class=\"button disabled\">Next</span>".to_string(),
    };

    let mut body = String::new();
    if page.is_offline() {
        body.push_str(offline_banner());
    }
    body.push_str(&tale_panel(
        &reader.tale,
        &close_href,
        &format!("<div class=\"reader-nav\">{prev}{next}</div>"),
    ));
    document(&reader.tale.title, NavItem::None, &body)
}

/// Reader for a single tale opened by identifier
pub fn single_tale(tale: &Tale) -> String {
    document(&tale.title, NavItem::None, &tale_panel(tale, "/", ""))
}

fn tale_panel(tale: &Tale, close_href: &str, footer: &str) -> String {
    let paragraphs: String = tale
        .text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", escape_html(p)))
        .collect();

    format!(
        "<div class=\"reader\"><div class=\"reader-panel\">\
<a class=\"close\" href=\"{close}\" aria-label=\"Close\">&#x2715;</a>\
<h2>{title}</h2><div class=\"reader-text\">{paragraphs}</div>\
<div class=\"reader-meta\"><span class=\"nation\">{nation}</span><p>{source}</p></div>\
{footer}</div></div>",
        close = escape_html(close_href),
        title = escape_html(&tale.title),
        nation = escape_html(&tale.nation),
        source = escape_html(&tale.source),
    )
}

// ===== Static pages =====

pub fn about() -> String {
    let values = [
        (
            "Cultural Preservation",
            "We honor and preserve the essence of global folktales.",
        ),
        (
            "Accessibility",
            "Stories should be easily available to everyone, everywhere.",
        ),
        (
            "Creativity &amp; Inspiration",
            "Encouraging imagination through the magic of stories.",
        ),
    ];
    let values: String = values
        .iter()
        .map(|(title, desc)| format!("<div class=\"value\"><h3>{title}</h3><p>{desc}</p></div>"))
        .collect();

    let body = format!(
        "<section class=\"hero hero-about\"><h1>About Folktales App</h1>\
<p>Preserving cultural heritage through the magic of stories.</p></section>\
<section class=\"mission\">\
<div class=\"panel\"><h2>Our Mission</h2><p>To collect and share folktales from every culture, \
making them accessible to people everywhere while preserving their original charm and wisdom.</p></div>\
<div class=\"panel\"><h2>Our Vision</h2><p>To become the go-to platform for folktales, \
inspiring imagination and cultural appreciation for generations to come.</p></div>\
</section><section class=\"values\"><h2>Our Core Values</h2><div class=\"grid\">{values}</div></section>"
    );
    document("About", NavItem::About, &body)
}

/// Contact form, optionally re-filled after a validation error
pub fn contact_form(previous: Option<&ContactMessage>, error: Option<&str>) -> String {
    let (name, email, message) = previous
        .map(|m| {
            (
                escape_html(&m.name),
                escape_html(&m.email),
                escape_html(&m.message),
            )
        })
        .unwrap_or_default();
    let error = error
        .map(|e| format!("<p class=\"form-error\">{}</p>", escape_html(e)))
        .unwrap_or_default();

    let body = format!(
        "<section class=\"contact\"><h1>Get in Touch</h1>\
<p>Have a question, suggestion, or just want to say hello? Fill out the form below and we&#39;ll get back to you soon!</p>\
{error}<form class=\"contact-form\" method=\"post\" action=\"/contact\">\
<input type=\"text\" name=\"name\" placeholder=\"Your Name\" required value=\"{name}\">\
<input type=\"email\" name=\"email\" placeholder=\"Your Email\" required value=\"{email}\">\
<textarea name=\"message\" placeholder=\"Your Message\" required>{message}</textarea>\
<button type=\"submit\">Send Message</button></form></section>",
    );
    document("Contact", NavItem::Contact, &body)
}

pub fn contact_thanks() -> String {
    let body = "<section class=\"contact\"><div class=\"panel\"><h2>Thank you!</h2>\
<p>Your message has been sent successfully. We&#39;ll get back to you soon.</p></div></section>";
    document("Contact", NavItem::Contact, body)
}

/// Small error page
pub fn error_page(title: &str, detail: &str) -> String {
    let body = format!(
        "<section class=\"error\"><h1>{}</h1><p>{}</p><a class=\"button\" href=\"/\">Back to tales</a></section>",
        escape_html(title),
        escape_html(detail)
    );
    document(title, NavItem::None, &body)
}
