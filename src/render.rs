//! Terminal Rendering
//!
//! Plain-text view of the board, derived only from view state.

use std::fmt::Write;

use crate::labels::BoardSettings;
use crate::model::{Comment, Moment};

/// Render the moment list with comments in the board's language
pub fn render_moments(moments: &[Moment], settings: &BoardSettings) -> String {
    let labels = settings.labels();
    let mut out = String::new();

    let _ = writeln!(out, "{}", labels.list_heading);
    let _ = writeln!(out, "{}", "=".repeat(60));

    if moments.is_empty() {
        let _ = writeln!(out, "{}", labels.empty_list);
        return out;
    }

    for moment in moments {
        let _ = writeln!(out, "[{}] {}", moment.id, moment.title);
        if !moment.description.is_empty() {
            for line in moment.description.lines() {
                let _ = writeln!(out, "    {}", line);
            }
        }
        if let Some(image) = &moment.image {
            let _ = writeln!(out, "    {}", describe_image(image));
        }
        let _ = writeln!(
            out,
            "    {} | {}",
            format_timestamp(&moment.created_at),
            format_timestamp(&moment.updated_at)
        );

        let _ = writeln!(out, "  {}", labels.comments_heading);
        for comment in &moment.comments {
            let _ = writeln!(out, "    {}", render_comment(comment, settings));
        }
        let _ = writeln!(out, "{}", "-".repeat(60));
    }

    out
}

/// One comment line: `username: text` plus the rating label when enabled
pub fn render_comment(comment: &Comment, settings: &BoardSettings) -> String {
    let mut line = format!("{}: {}", comment.username, comment.text);
    if settings.ratings_enabled {
        let labels = settings.labels();
        let label = comment.rate.map(|r| labels.rating(r)).unwrap_or("");
        line.push_str(&format!(" ({} {})", labels.rating_field, label));
    }
    line
}

/// Short description of a data URI, never the payload itself
fn describe_image(image: &str) -> String {
    let mime = crate::image::data_uri_mime(image).unwrap_or("image");
    format!("<{}, {} bytes encoded>", mime, image.len())
}

/// Format a server timestamp for display; unparseable values pass through
pub fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }

    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip() -> Moment {
        Moment {
            id: 7,
            title: "Trip".to_string(),
            description: "Beach day".to_string(),
            image: None,
            created_at: "2024-03-01T10:20:00Z".to_string(),
            updated_at: "t1".to_string(),
            comments: vec![Comment {
                id: 1,
                username: "ana".to_string(),
                text: "nice".to_string(),
                moment_id: 7,
                rate: Some(4),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_render_rated_board() {
        let out = render_moments(&[trip()], &BoardSettings::rated());
        assert!(out.contains("[7] Trip"));
        assert!(out.contains("Comentários:"));
        assert!(out.contains("ana: nice (Avaliação: Muito bom)"));
        assert!(out.contains("2024-03-01 10:20 | t1"));
    }

    #[test]
    fn test_render_plain_board_hides_rating() {
        let out = render_moments(&[trip()], &BoardSettings::plain());
        assert!(out.contains("ana: nice\n"));
        assert!(!out.contains("Very good"));
    }

    #[test]
    fn test_out_of_range_rating_renders_empty_label() {
        let comment = Comment {
            username: "bo".to_string(),
            text: "hm".to_string(),
            rate: Some(6),
            ..Default::default()
        };
        assert_eq!(
            render_comment(&comment, &BoardSettings::rated()),
            "bo: hm (Avaliação: )"
        );
    }

    #[test]
    fn test_render_empty() {
        let out = render_moments(&[], &BoardSettings::plain());
        assert!(out.contains("No moments yet."));
    }

    #[test]
    fn test_image_summary() {
        let mut moment = trip();
        moment.image = Some("data:image/png;base64,YWJj".to_string());
        let out = render_moments(&[moment], &BoardSettings::rated());
        assert!(out.contains("<image/png, 26 bytes encoded>"));
    }
}
