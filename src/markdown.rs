//! Custom Markdown Parser
//!
//! Extends pulldown-cmark with a color syntax: %r%red%r%

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser};

/// Color codes and their hex values
const COLORS: &[(&str, &str)] = &[
    ("r", "#e74c3c"), // red
    ("g", "#27ae60"), // green
    ("b", "#3498db"), // blue
    ("o", "#e67e22"), // orange
];

/// Parse markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let events = Parser::new_ext(text, options).flat_map(|event| match event {
        Event::Text(text) if contains_color(&text) => color_events(&text),
        other => vec![other],
    });

    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

fn contains_color(text: &str) -> bool {
    COLORS
        .iter()
        .any(|(code, _)| text.contains(&format!("%{}%", code)))
}

/// Split text on color markers; an unclosed marker stays literal.
fn color_events(text: &str) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let earliest = COLORS
            .iter()
            .filter_map(|(code, color)| {
                let marker = format!("%{}%", code);
                remaining.find(&marker).map(|pos| (pos, marker, *color))
            })
            .min_by_key(|(pos, _, _)| *pos);

        let Some((pos, marker, color)) = earliest else {
            events.push(Event::Text(CowStr::from(remaining.to_string())));
            break;
        };

        if pos > 0 {
            events.push(Event::Text(CowStr::from(remaining[..pos].to_string())));
        }
        let after = &remaining[pos + marker.len()..];

        match after.find(&marker) {
            Some(end) => {
                events.push(Event::Html(CowStr::from(format!(
                    "<span style=\"color: {}\">",
                    color
                ))));
                if end > 0 {
                    events.push(Event::Text(CowStr::from(after[..end].to_string())));
                }
                events.push(Event::Html(CowStr::from("</span>")));
                remaining = &after[end + marker.len()..];
            }
            None => {
                events.push(Event::Text(CowStr::from(marker)));
                remaining = after;
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_markdown() {
        assert_eq!(parse_markdown("**bold**"), "<p><strong>bold</strong></p>\n");
    }

    #[test]
    fn test_color_span() {
        let html = parse_markdown("%r%late%r% line");
        assert_eq!(html, "<p><span style=\"color: #e74c3c\">late</span> line</p>\n");
    }

    #[test]
    fn test_two_colors() {
        let html = parse_markdown("%b%a%b% and %g%b%g%");
        assert!(html.contains("<span style=\"color: #3498db\">a</span>"));
        assert!(html.contains("<span style=\"color: #27ae60\">b</span>"));
    }

    #[test]
    fn test_unclosed_marker_is_literal() {
        assert_eq!(parse_markdown("%r%open"), "<p>%r%open</p>\n");
    }
}
