//! Scroll spy and smooth section navigation for the portfolio page.
//!
//! A long-lived `document::eval` bridge posts a [`ScrollSample`] on every
//! scroll event. The Rust side turns it into two signals: whether the page is
//! scrolled past the configured threshold, and which [`Section`] sits under
//! the navbar.

use content::Section;
use dioxus::prelude::*;
use serde::Deserialize;

use crate::js::js_string_escape;
use crate::site_config;

/// One report from the scroll bridge.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ScrollSample {
    /// `window.scrollY`
    pub y: f64,
    /// `offsetTop` of each section anchor, in [`Section::ALL`] order.
    /// `None` when the anchor is not in the document.
    pub offsets: Vec<Option<f64>>,
    /// `window.innerHeight`
    #[serde(default)]
    pub viewport: f64,
    /// `document.documentElement.scrollHeight`
    #[serde(default)]
    pub page_height: f64,
}

impl ScrollSample {
    /// Whether the viewport touches the end of the document.
    pub fn at_bottom(&self) -> bool {
        self.page_height > 0.0 && self.y + self.viewport >= self.page_height - 1.0
    }
}

/// Whether the page has scrolled past `threshold` pixels.
pub fn is_scrolled(y: f64, threshold: f64) -> bool {
    y > threshold
}

/// The last section whose top edge has reached the bottom of the navbar.
///
/// Returns `None` while the hero is still in view. Once the page is scrolled
/// all the way down the last section wins, even when it is too short to
/// reach the navbar.
pub fn active_section(sample: &ScrollSample, nav_height: f64) -> Option<Section> {
    let present = Section::ALL
        .iter()
        .zip(sample.offsets.iter())
        .filter_map(|(section, top)| top.map(|top| (*section, top)));
    if sample.at_bottom() {
        return present.last().map(|(section, _)| section);
    }

    // One pixel of slack so a smooth scroll that lands exactly on the anchor counts
    let line = sample.y + nav_height + 1.0;
    present
        .filter(|(_, top)| *top <= line)
        .last()
        .map(|(section, _)| section)
}

/// Signals driven by the scroll bridge.
#[derive(Clone, Copy, PartialEq)]
pub struct ScrollSpy {
    pub scrolled: Signal<bool>,
    pub active: Signal<Option<Section>>,
}

/// Install the scroll bridge for the current page.
pub fn use_scroll_spy() -> ScrollSpy {
    let mut scrolled = use_signal(|| false);
    let mut active = use_signal(|| Option::<Section>::None);

    use_effect(move || {
        let nav = &site_config().navigation;
        let threshold = nav.scroll_threshold;
        let nav_height = nav.nav_height;

        spawn(async move {
            let mut eval = document::eval(&scroll_bridge_js());
            loop {
                match eval.recv::<ScrollSample>().await {
                    Ok(sample) => {
                        let is_past = is_scrolled(sample.y, threshold);
                        if *scrolled.peek() != is_past {
                            scrolled.set(is_past);
                        }
                        let section = active_section(&sample, nav_height);
                        if *active.peek() != section {
                            active.set(section);
                        }
                    }
                    Err(e) => {
                        tracing::debug!("Scroll bridge closed: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    ScrollSpy { scrolled, active }
}

/// Smooth-scroll the viewport to `section`'s anchor.
pub fn scroll_to_section(section: Section) {
    let js = format!(
        r#"(function() {{
            var el = document.getElementById({id_js});
            if (el) {{ el.scrollIntoView({{ behavior: 'smooth' }}); }}
        }})();"#,
        id_js = js_string_escape(section.id()),
    );
    document::eval(&js);
}

fn scroll_bridge_js() -> String {
    let ids = Section::ALL
        .iter()
        .map(|section| js_string_escape(section.id()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"(function() {{
            var ids = [{ids}];
            if (window._portfolioScrollSpy) {{
                window.removeEventListener('scroll', window._portfolioScrollSpy);
            }}
            var report = function() {{
                dioxus.send({{
                    y: window.scrollY,
                    viewport: window.innerHeight,
                    page_height: document.documentElement.scrollHeight,
                    offsets: ids.map(function(id) {{
                        var el = document.getElementById(id);
                        return el ? el.offsetTop : null;
                    }})
                }});
            }};
            window._portfolioScrollSpy = report;
            window.addEventListener('scroll', report, {{ passive: true }});
            report();
        }})();"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(y: f64) -> ScrollSample {
        ScrollSample {
            y,
            offsets: vec![Some(800.0), Some(1400.0), Some(2200.0), Some(3000.0)],
            viewport: 900.0,
            page_height: 3610.0,
        }
    }

    #[test]
    fn test_is_scrolled_is_strict() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }

    #[test]
    fn test_no_section_in_hero() {
        assert_eq!(active_section(&sample(0.0), 64.0), None);
        assert_eq!(active_section(&sample(700.0), 64.0), None);
    }

    #[test]
    fn test_section_under_navbar_is_active() {
        // Smooth scroll to #about stops with its top behind the navbar
        assert_eq!(active_section(&sample(736.0), 64.0), Some(Section::About));
        assert_eq!(active_section(&sample(1000.0), 64.0), Some(Section::About));
        assert_eq!(active_section(&sample(1336.0), 64.0), Some(Section::Projects));
        assert_eq!(active_section(&sample(2500.0), 64.0), Some(Section::Blog));
        assert_eq!(active_section(&sample(9000.0), 64.0), Some(Section::Contact));
    }

    #[test]
    fn test_short_last_section_is_active_at_bottom() {
        // Contact never reaches the navbar line on a 900px viewport
        assert_eq!(active_section(&sample(2709.0), 64.0), Some(Section::Contact));
        assert_eq!(active_section(&sample(2710.0), 64.0), Some(Section::Contact));
        assert_eq!(active_section(&sample(2600.0), 64.0), Some(Section::Blog));
    }

    #[test]
    fn test_bottom_skips_missing_last_anchor() {
        let sample = ScrollSample {
            y: 2710.0,
            offsets: vec![Some(800.0), Some(1400.0), Some(2200.0), None],
            viewport: 900.0,
            page_height: 3610.0,
        };
        assert!(sample.at_bottom());
        assert_eq!(active_section(&sample, 64.0), Some(Section::Blog));
    }

    #[test]
    fn test_bridge_payload_decodes() {
        let json = r#"{"y": 0, "viewport": 900, "page_height": 3610, "offsets": [800, null, 2200, 3000]}"#;
        let sample: ScrollSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.offsets[1], None);
        assert!(!sample.at_bottom());
    }

    #[test]
    fn test_missing_anchors_are_skipped() {
        let sample = ScrollSample {
            y: 2500.0,
            offsets: vec![Some(800.0), None, None, Some(3000.0)],
            ..ScrollSample::default()
        };
        assert_eq!(active_section(&sample, 64.0), Some(Section::About));
    }

    #[test]
    fn test_short_offsets_list() {
        let sample = ScrollSample {
            y: 5000.0,
            offsets: vec![Some(800.0)],
            ..ScrollSample::default()
        };
        assert_eq!(active_section(&sample, 64.0), Some(Section::About));
        assert_eq!(active_section(&ScrollSample::default(), 64.0), None);
    }

    #[test]
    fn test_bridge_lists_every_section() {
        let js = scroll_bridge_js();
        assert!(js.contains("page_height: document.documentElement.scrollHeight"));
        for section in Section::ALL {
            assert!(js.contains(&format!("\"{}\"", section.id())));
        }
    }
}
