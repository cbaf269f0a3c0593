//! Page sections and the label → anchor lookup used by the sticky nav bar.

/// Vertical space reserved under the sticky nav bar when jumping to a
/// section. Matches the `scroll-mt-32` margin (8rem) on every section.
pub const NAV_OFFSET_PX: f64 = 128.0;

/// Every anchored section on the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Greeting block at the top of the page.
    Hero,
    /// Description, competitions and photo.
    About,
    /// Experience timeline.
    Experience,
    /// Project carousel and skills grid.
    Projects,
    /// Contact links.
    Connect,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Connect,
    ];

    /// Sections listed in the nav bar, in display order.
    pub const NAV: [Section; 4] =
        [Section::About, Section::Experience, Section::Projects, Section::Connect];

    /// Label shown in the nav bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Hero",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Connect => "Connect",
        }
    }

    /// Element id of the section, i.e. the lowercased label.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Connect => "connect",
        }
    }

    /// `#anchor` form used in link hrefs.
    pub fn href(self) -> String {
        format!("#{}", self.anchor_id())
    }

    /// Resolve a nav label (case-insensitive) to its section.
    pub fn from_label(label: &str) -> Option<Section> {
        let label = label.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.label().eq_ignore_ascii_case(label))
    }

    /// Resolve an element id or `#fragment` to its section.
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        let anchor = anchor.trim().trim_start_matches('#');
        Section::ALL
            .into_iter()
            .find(|section| section.anchor_id() == anchor)
    }
}

/// Document scroll position that puts an element's top edge `offset` pixels
/// below the top of the window.
///
/// `element_top` is the element's current top relative to the viewport
/// (`getBoundingClientRect().top`), `scroll_y` the current document scroll.
pub fn section_scroll_top(element_top: f64, scroll_y: f64, offset: f64) -> f64 {
    (scroll_y + element_top - offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_labels_map_to_lowercase_anchors() {
        let anchors: Vec<_> = Section::NAV.iter().map(|s| s.anchor_id()).collect();
        assert_eq!(anchors, ["about", "experience", "projects", "connect"]);
        for section in Section::ALL {
            assert_eq!(section.anchor_id(), section.label().to_lowercase());
        }
    }

    #[test]
    fn label_lookup_is_case_insensitive() {
        assert_eq!(Section::from_label("PROJECTS"), Some(Section::Projects));
        assert_eq!(Section::from_label(" about "), Some(Section::About));
        assert_eq!(Section::from_label("Blog"), None);
    }

    #[test]
    fn anchor_lookup_accepts_fragment() {
        assert_eq!(Section::from_anchor("#connect"), Some(Section::Connect));
        assert_eq!(Section::from_anchor("experience"), Some(Section::Experience));
        assert_eq!(Section::from_anchor("#"), None);
        assert_eq!(Section::Experience.href(), "#experience");
    }

    #[test]
    fn every_nav_section_lands_under_the_nav_bar() {
        // Sections laid out at fixed document positions.
        let doc_tops = [
            (Section::About, 640.0),
            (Section::Experience, 1500.0),
            (Section::Projects, 2300.0),
            (Section::Connect, 3900.0),
        ];
        for scroll_y in [0.0, 900.0, 2500.0] {
            for (section, doc_top) in doc_tops {
                let element_top = doc_top - scroll_y;
                let target = section_scroll_top(element_top, scroll_y, NAV_OFFSET_PX);
                assert_eq!(doc_top - target, NAV_OFFSET_PX, "{section:?} from {scroll_y}");
            }
        }
    }

    #[test]
    fn section_near_top_clamps_to_zero() {
        assert_eq!(section_scroll_top(40.0, 0.0, NAV_OFFSET_PX), 0.0);
    }
}
