use super::models::Event;
use super::time::span;
use crate::webhook::models::{Author, Embed, Image};

/// Accent color for event embeds
pub const EMBED_COLOR: u32 = 0xd14537;

/// Build the embed for a single event.
///
/// Pure and total: the output depends only on the event and the site URL,
/// never on the current time.
pub fn format_event(events_site_url: &str, event: &Event) -> Embed {
    let mut description = format!(
        ":calendar_spiral: {}\n",
        span(event.unix_start_time, event.unix_end_time)
    );
    description.push_str(&format!(":map: {}", event.location));
    if !event.mazemap_link.is_empty() {
        description.push_str(&format!(" [Mazemap]({})", event.mazemap_link));
    }
    description.push_str("\n\n");
    description.push_str(&format!("{}\n\n{}", event.summary, event.description));

    Embed {
        title: event.name.clone(),
        url: Some(format!("{}/{}", events_site_url, event.id)),
        description,
        author: Author {
            name: event.organizer.clone(),
            url: None,
            icon_url: None,
        },
        color: EMBED_COLOR,
        fields: None,
        image: if event.image.is_empty() {
            None
        } else {
            Some(Image {
                url: event.image.clone(),
            })
        },
    }
}
