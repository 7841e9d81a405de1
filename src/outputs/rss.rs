//! RSS 2.0 output.
//!
//! ```text
//! rss
//! └── channel: title, link, description, language
//!     └── item*: title, link, guid, pubDate (RFC 2822)
//! ```

use super::OutputError;
use crate::models::{FeedItem, FeedResult};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

const CHANNEL_LANGUAGE: &str = "zh-cn";

/// Render `feed` as an indented RSS 2.0 document.
pub fn render_feed(feed: &FeedResult) -> Result<String, OutputError> {
    let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);

    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    w.write_event(Event::Start(
        BytesStart::new("rss").with_attributes([("version", "2.0")]),
    ))?;
    w.write_event(Event::Start(BytesStart::new("channel")))?;

    write_text_element(&mut w, "title", &feed.title)?;
    write_text_element(&mut w, "link", &feed.link)?;
    write_text_element(&mut w, "description", &feed.title)?;
    write_text_element(&mut w, "language", CHANNEL_LANGUAGE)?;

    for item in &feed.items {
        write_item(&mut w, item)?;
    }

    w.write_event(Event::End(BytesEnd::new("channel")))?;
    w.write_event(Event::End(BytesEnd::new("rss")))?;

    Ok(String::from_utf8(w.into_inner())?)
}

fn write_item<W: Write>(w: &mut Writer<W>, item: &FeedItem) -> Result<(), OutputError> {
    w.write_event(Event::Start(BytesStart::new("item")))?;
    write_text_element(w, "title", &item.title)?;
    write_text_element(w, "link", &item.link)?;
    w.write_event(Event::Start(
        BytesStart::new("guid").with_attributes([("isPermaLink", "true")]),
    ))?;
    w.write_event(Event::Text(BytesText::new(&item.link)))?;
    w.write_event(Event::End(BytesEnd::new("guid")))?;
    write_text_element(w, "pubDate", &item.published_at.to_rfc2822())?;
    w.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

fn write_text_element<W: Write>(
    w: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), OutputError> {
    w.write_event(Event::Start(BytesStart::new(name)))?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
