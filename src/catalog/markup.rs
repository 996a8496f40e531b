// SPDX-License-Identifier: MPL-2.0
//! Page markup reader.
//!
//! Walks an HTML/XHTML gallery page with `quick-xml` and collects:
//! - media items: elements whose class list contains `media-box`, with their
//!   `data-*` annotations and nested image/video sources and price text
//! - filter buttons: elements whose class list contains `filter-btn` and that
//!   carry a `data-filter` annotation
//!
//! The reader is lenient in the ways real pages need: void elements (`<img>`,
//! `<source>`, ...) may be left unclosed, attributes may have no value
//! (`muted`, `autoplay`), and stray end tags are ignored. Inline `<script>`
//! bodies containing `<` are not supported; reference scripts externally.

use crate::error::{Error, Result};
use quick_xml::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;

const ITEM_CLASS: &str = "media-box";
const FILTER_CLASS: &str = "filter-btn";
const ACTIVE_CLASS: &str = "active";
const PRICE_CLASS: &str = "media-price";

const VOID_ELEMENTS: [&str; 9] = [
    "img", "source", "input", "br", "hr", "meta", "link", "wbr", "track",
];

/// One media item as found on the page, before any defaulting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupNode {
    attributes: BTreeMap<String, String>,
    /// `src` of the first nested `<img>`.
    pub image_source: Option<String>,
    /// `src` of the first `<source>` inside a `<video>`, or of the video itself.
    pub video_source: Option<String>,
    /// `poster` of the first nested `<video>`.
    pub poster: Option<String>,
    /// Text content of the first nested `.media-price` element.
    pub price_text: Option<String>,
}

impl MarkupNode {
    /// Creates a node from attribute pairs. Attribute names are matched
    /// case-insensitively.
    pub fn with_attributes<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            attributes: pairs
                .into_iter()
                .map(|(k, v)| (k.into().to_ascii_lowercase(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Returns the value of an annotation, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Replaces the value of an existing annotation. Absent annotations are
    /// left absent.
    pub fn replace_attribute(&mut self, name: &str, value: String) {
        if let Some(slot) = self.attributes.get_mut(&name.to_ascii_lowercase()) {
            *slot = value;
        }
    }
}

/// A filter control declared on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    /// Raw `data-filter` value.
    pub value: String,
    /// Whether the button carries the `active` class.
    pub active: bool,
}

/// Everything the gallery reads from a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMarkup {
    pub items: Vec<MarkupNode>,
    pub filters: Vec<FilterButton>,
}

#[derive(Debug)]
struct Frame {
    name: String,
    opens_item: bool,
    opens_video: bool,
    opens_price: bool,
}

#[derive(Debug, Default)]
struct Walker {
    page: PageMarkup,
    stack: Vec<Frame>,
    item: Option<MarkupNode>,
    video_depth: usize,
    price: Option<String>,
}

impl Walker {
    fn open(&mut self, element: &BytesStart<'_>, self_closing: bool) {
        let name = lowercase_name(element.local_name().as_ref());
        let attributes = collect_attributes(element);
        let classes: Vec<&str> = attributes
            .get("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default();
        let has_class = |class: &str| classes.iter().any(|c| c.eq_ignore_ascii_case(class));

        if has_class(FILTER_CLASS) {
            if let Some(value) = attributes.get("data-filter") {
                self.page.filters.push(FilterButton {
                    value: value.clone(),
                    active: has_class(ACTIVE_CLASS),
                });
            }
        }

        let mut frame = Frame {
            name: name.clone(),
            opens_item: false,
            opens_video: false,
            opens_price: false,
        };

        if self.item.is_none() && has_class(ITEM_CLASS) {
            self.item = Some(MarkupNode {
                attributes: attributes.clone(),
                ..MarkupNode::default()
            });
            frame.opens_item = true;
        } else if let Some(item) = self.item.as_mut() {
            match name.as_str() {
                "video" => {
                    if item.video_source.is_none() {
                        item.video_source = attributes.get("src").cloned();
                    }
                    if item.poster.is_none() {
                        item.poster = attributes.get("poster").cloned();
                    }
                    frame.opens_video = true;
                }
                "source" if self.video_depth > 0 => {
                    if item.video_source.is_none() {
                        item.video_source = attributes.get("src").cloned();
                    }
                }
                "img" => {
                    if item.image_source.is_none() {
                        item.image_source = attributes.get("src").cloned();
                    }
                }
                _ => {}
            }
            if has_class(PRICE_CLASS) && item.price_text.is_none() && self.price.is_none() {
                self.price = Some(String::new());
                frame.opens_price = true;
            }
        }

        if self_closing || VOID_ELEMENTS.contains(&name.as_str()) {
            self.close_frame(frame);
        } else {
            if frame.opens_video {
                self.video_depth += 1;
            }
            self.stack.push(frame);
        }
    }

    fn text(&mut self, content: &str) {
        if let Some(price) = self.price.as_mut() {
            if !price.is_empty() && !content.is_empty() {
                price.push(' ');
            }
            price.push_str(content.trim());
        }
    }

    fn close(&mut self, name: &str) {
        if VOID_ELEMENTS.contains(&name) {
            return;
        }
        let Some(position) = self.stack.iter().rposition(|frame| frame.name == name) else {
            return;
        };
        while self.stack.len() > position {
            if let Some(frame) = self.stack.pop() {
                if frame.opens_video {
                    self.video_depth = self.video_depth.saturating_sub(1);
                }
                self.close_frame(frame);
            }
        }
    }

    fn close_frame(&mut self, frame: Frame) {
        if frame.opens_price {
            if let (Some(item), Some(price)) = (self.item.as_mut(), self.price.take()) {
                item.price_text = Some(price);
            }
        }
        if frame.opens_item {
            self.finish_item();
        }
    }

    fn finish_item(&mut self) {
        if let Some(mut item) = self.item.take() {
            if let Some(price) = self.price.take() {
                item.price_text = Some(price);
            }
            self.video_depth = 0;
            self.page.items.push(item);
        }
    }

    fn finish(mut self) -> PageMarkup {
        while let Some(frame) = self.stack.pop() {
            self.close_frame(frame);
        }
        self.finish_item();
        self.page
    }
}

/// Parses a gallery page.
///
/// # Errors
///
/// Returns [`Error::Markup`] when the document is syntactically broken
/// beyond what the lenient reader tolerates (e.g. an unterminated tag).
pub fn parse(source: &str) -> Result<PageMarkup> {
    let mut reader = Reader::from_str(source);
    {
        let config = reader.config_mut();
        config.trim_text(true);
        config.check_end_names = false;
    }

    let mut walker = Walker::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => walker.open(e, false),
            Ok(Event::Empty(ref e)) => walker.open(e, true),
            Ok(Event::Text(ref e)) => {
                let raw = reader
                    .decoder()
                    .decode(e.as_ref())
                    .map_err(|err| markup_error(&reader, err))?;
                walker.text(&unescape_html(&raw));
            }
            Ok(Event::End(ref e)) => {
                let name = lowercase_name(e.local_name().as_ref());
                walker.close(&name);
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(markup_error(&reader, err)),
            _ => {}
        }
    }

    let page = walker.finish();
    tracing::debug!(
        items = page.items.len(),
        filters = page.filters.len(),
        "parsed gallery markup"
    );
    Ok(page)
}

fn markup_error(reader: &Reader<&[u8]>, err: impl std::fmt::Display) -> Error {
    Error::Markup(format!("at byte {}: {}", reader.error_position(), err))
}

/// Resolves character references and HTML named entities (`&nbsp;`,
/// `&eacute;`, ...). Text with an unknown entity is kept as written.
fn unescape_html(raw: &str) -> String {
    escape::unescape_with(raw, escape::resolve_html5_entity)
        .map(|unescaped| unescaped.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

fn lowercase_name(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).to_ascii_lowercase()
}

fn collect_attributes(element: &BytesStart<'_>) -> BTreeMap<String, String> {
    element
        .html_attributes()
        .filter_map(std::result::Result::ok)
        .map(|attr| {
            let key = lowercase_name(attr.key.as_ref());
            let value = unescape_html(&String::from_utf8_lossy(&attr.value));
            (key, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div class="filters">
    <button class="filter-btn active" data-filter="all">All</button>
    <button class="filter-btn" data-filter="image">Images</button>
    <button class="filter-btn" data-filter="video">Videos</button>
    <button class="filter-btn">No category</button>
  </div>
  <div class="grid">
    <div class="media-box" data-title="Sunset" data-tags="Nature, Sky" data-type="image"
         data-premium="false" data-is-free="true" data-download-url="downloads/sunset.jpg">
      <img src="images/sunset.jpg" alt="Sunset">
      <span class="media-price">$0</span>
    </div>
    <div class="media-box" data-title="Waves &amp; Rocks" data-type="video" data-premium="true">
      <video muted loop playsinline poster="images/waves.jpg">
        <source src="videos/waves.mp4" type="video/mp4">
      </video>
      <p class="media-price">Price <b>$4.99</b></p>
    </div>
    <div class="media-box" data-title="Bare"/>
  </div>
</body>
</html>"#;

    #[test]
    fn collects_items_in_source_order() {
        let page = parse(PAGE).expect("page should parse");
        let titles: Vec<_> = page
            .items
            .iter()
            .map(|item| item.attribute("data-title").unwrap_or_default())
            .collect();
        assert_eq!(titles, ["Sunset", "Waves & Rocks", "Bare"]);
    }

    #[test]
    fn reads_nested_sources_and_price() {
        let page = parse(PAGE).expect("page should parse");

        let image = &page.items[0];
        assert_eq!(image.image_source.as_deref(), Some("images/sunset.jpg"));
        assert_eq!(image.video_source, None);
        assert_eq!(image.price_text.as_deref(), Some("$0"));
        assert_eq!(image.attribute("DATA-TAGS"), Some("Nature, Sky"));

        let video = &page.items[1];
        assert_eq!(video.video_source.as_deref(), Some("videos/waves.mp4"));
        assert_eq!(video.poster.as_deref(), Some("images/waves.jpg"));
        assert_eq!(video.price_text.as_deref(), Some("Price $4.99"));
        assert_eq!(video.attribute("data-download-url"), None);
    }

    #[test]
    fn self_closing_item_has_no_content() {
        let page = parse(PAGE).expect("page should parse");
        let bare = &page.items[2];
        assert_eq!(bare.image_source, None);
        assert_eq!(bare.price_text, None);
    }

    #[test]
    fn collects_filter_buttons_with_active_flag() {
        let page = parse(PAGE).expect("page should parse");
        assert_eq!(
            page.filters,
            vec![
                FilterButton { value: "all".into(), active: true },
                FilterButton { value: "image".into(), active: false },
                FilterButton { value: "video".into(), active: false },
            ]
        );
    }

    #[test]
    fn unclosed_item_is_still_collected() {
        let page = parse(r#"<div class="media-box" data-title="Open"><img src="a.png">"#)
            .expect("lenient parse");
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].image_source.as_deref(), Some("a.png"));
    }

    #[test]
    fn nested_media_box_does_not_start_a_second_item() {
        let page = parse(
            r#"<div class="media-box" data-title="Outer"><div class="media-box" data-title="Inner"></div></div>"#,
        )
        .expect("page should parse");
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].attribute("data-title"), Some("Outer"));
    }

    #[test]
    fn broken_tag_is_a_markup_error() {
        let result = parse(r#"<div class="media-box" data-title="x"#);
        assert!(matches!(result, Err(Error::Markup(_))));
    }

    #[test]
    fn node_from_pairs_is_case_insensitive() {
        let node = MarkupNode::with_attributes([("Data-Title", "Mixed")]);
        assert_eq!(node.attribute("data-title"), Some("Mixed"));
        assert_eq!(node.attribute("data-tags"), None);
    }

    #[test]
    fn html_entities_are_resolved_in_text_and_attributes() {
        let page = parse(
            r#"<div class="media-box" data-title="Caf&eacute; &amp; Co">
  <span class="media-price">$5&nbsp;USD</span>
</div>"#,
        )
        .expect("page should parse");
        let item = &page.items[0];
        assert_eq!(item.attribute("data-title"), Some("Café & Co"));
        assert_eq!(item.price_text.as_deref(), Some("$5\u{a0}USD"));
    }

    #[test]
    fn unknown_entity_is_kept_verbatim() {
        let page = parse(r#"<div class="media-box" data-title="Tom &bogus; Jerry"></div>"#)
            .expect("page should parse");
        assert_eq!(page.items[0].attribute("data-title"), Some("Tom &bogus; Jerry"));
    }
}
