use crate::domain::model::RenderedList;
use std::borrow::Cow;

pub const DEFAULT_HEADING: &str = "Servicios Disponibles:";

/// Escapes text for use inside an HTML element so it displays verbatim.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Renders a heading followed by one `<li>` per service, in input order.
pub fn render_service_list<S: AsRef<str>>(heading: &str, services: &[S]) -> RenderedList {
    let mut html = format!("<h3>{}</h3><ul>", escape_html(heading));
    for service in services {
        html.push_str("<li>");
        html.push_str(&escape_html(service.as_ref()));
        html.push_str("</li>");
    }
    html.push_str("</ul>");

    RenderedList {
        html,
        item_count: services.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_renders_heading_and_empty_list() {
        let rendered = render_service_list::<String>(DEFAULT_HEADING, &[]);

        assert_eq!(rendered.html, "<h3>Servicios Disponibles:</h3><ul></ul>");
        assert_eq!(rendered.item_count, 0);
    }

    #[test]
    fn test_items_rendered_in_order() {
        let services = ["Consultoría", "Desarrollo de Software", "Soporte Técnico"];
        let rendered = render_service_list(DEFAULT_HEADING, &services);

        assert_eq!(
            rendered.html,
            "<h3>Servicios Disponibles:</h3><ul>\
             <li>Consultoría</li><li>Desarrollo de Software</li><li>Soporte Técnico</li></ul>"
        );
        assert_eq!(rendered.item_count, 3);
        assert_eq!(rendered.html.matches("<li>").count(), 3);
    }

    #[test]
    fn test_markup_in_service_names_is_escaped() {
        let rendered = render_service_list("Q&A", &["<b>Soporte</b>", "Tom's \"desk\""]);

        assert_eq!(
            rendered.html,
            "<h3>Q&amp;A</h3><ul><li>&lt;b&gt;Soporte&lt;/b&gt;</li>\
             <li>Tom&#39;s &quot;desk&quot;</li></ul>"
        );
    }

    #[test]
    fn test_escape_borrows_plain_text() {
        assert!(matches!(escape_html("Soporte Técnico"), Cow::Borrowed(_)));
    }
}
