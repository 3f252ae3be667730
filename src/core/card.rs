use std::fmt::Write as _;

use crate::catalog::{AppDescriptor, AppIcon, LearnMore};

/// Attribute carried by placeholder "Learn More" links; its value is the app name.
pub const DETAILS_ATTR: &str = "data-app-details";

/// Renders one app card.
///
/// Pure: the same descriptor and listing always produce the same markup.
/// Placeholder links get `href="#"` plus [`DETAILS_ATTR`]; the browser glue
/// turns clicks on them into a notice instead of navigation.
pub fn create_app_card(app: &AppDescriptor, developer_listing: &str) -> String {
    let name = escape_html(&app.name);

    let icon = match &app.icon {
        AppIcon::Image(path) => format!(
            r#"<img src="{}" alt="{name} icon" loading="lazy">"#,
            escape_html(path)
        ),
        AppIcon::Glyph(class) => format!(r#"<i class="{}"></i>"#, escape_html(class)),
    };

    let learn_more = match app.learn_more() {
        LearnMore::Link(url) => {
            format!(r#"<a href="{}" class="btn-details">Learn More</a>"#, escape_html(url))
        }
        LearnMore::Placeholder { .. } => {
            format!(r##"<a href="#" class="btn-details" {DETAILS_ATTR}="{name}">Learn More</a>"##)
        }
    };

    let mut out = String::with_capacity(512);
    out.push_str(r#"<div class="app-card">"#);
    let _ = write!(out, r#"<div class="app-icon">{icon}</div>"#);
    let _ = write!(
        out,
        r#"<div class="app-info"><h3>{name}</h3><p>{}</p><small class="app-category">{}</small></div>"#,
        escape_html(&app.description),
        escape_html(&app.category),
    );
    let _ = write!(
        out,
        r#"<div class="app-actions"><a href="{}" target="_blank" rel="noopener noreferrer" class="btn-play"><i class="fab fa-google-play"></i> View on Play Store</a>{learn_more}</div>"#,
        escape_html(app.store_url(developer_listing)),
    );
    out.push_str("</div>");
    out
}

/// Minimal escaping for text and double-quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
