//! Page sections and active-section tracking for the navigation bar

use std::fmt;

/// One full-viewport content block of the page, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Process,
    Solutions,
    Portfolio,
    Testimonials,
    Faq,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Process,
        SectionId::Solutions,
        SectionId::Portfolio,
        SectionId::Testimonials,
        SectionId::Faq,
        SectionId::Contact,
    ];

    /// DOM id of the section element
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Process => "process",
            SectionId::Solutions => "solutions",
            SectionId::Portfolio => "portfolio",
            SectionId::Testimonials => "testimonials",
            SectionId::Faq => "faq",
            SectionId::Contact => "contact",
        }
    }

    /// Section whose element carries this DOM id
    pub fn from_dom_id(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Label used in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Process => "Process",
            SectionId::Solutions => "Solutions",
            SectionId::Portfolio => "Work",
            SectionId::Testimonials => "Clients",
            SectionId::Faq => "FAQ",
            SectionId::Contact => "Contact",
        }
    }

    /// In-page link target
    pub fn href(&self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remembers the latest intersection ratio of every section and derives the
/// one the navigation bar should highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTracker {
    ratios: [f64; SectionId::ALL.len()],
    active: SectionId,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self {
            ratios: [0.0; SectionId::ALL.len()],
            active: SectionId::Home,
        }
    }
}

impl SectionTracker {
    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn ratio(&self, id: SectionId) -> f64 {
        self.ratios[id as usize]
    }

    /// Record one observation and return the (possibly unchanged) active section.
    ///
    /// The most visible section wins; ties go to the one earlier on the page.
    /// When nothing is visible the previous choice is kept.
    pub fn observe(&mut self, id: SectionId, ratio: f64) -> SectionId {
        self.ratios[id as usize] = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let mut best: Option<(SectionId, f64)> = None;
        for section in SectionId::ALL {
            let r = self.ratios[section as usize];
            if r <= 0.0 {
                continue;
            }
            match best {
                Some((_, best_ratio)) if r <= best_ratio => {}
                _ => best = Some((section, r)),
            }
        }

        if let Some((section, _)) = best {
            self.active = section;
        }
        self.active
    }

    /// Jump straight to a section, e.g. after a nav click
    pub fn force(&mut self, id: SectionId) {
        self.active = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_dom_ids() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_dom_id(id.as_str()), Some(id));
        }
        assert_eq!(SectionId::from_dom_id("pricing"), None);
    }

    #[test]
    fn test_href_and_display() {
        assert_eq!(SectionId::Faq.href(), "#faq");
        assert_eq!(SectionId::Portfolio.to_string(), "portfolio");
    }

    #[test]
    fn test_starts_on_home() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn test_most_visible_section_wins() {
        let mut tracker = SectionTracker::default();
        tracker.observe(SectionId::Home, 0.2);
        let active = tracker.observe(SectionId::About, 0.7);

        assert_eq!(active, SectionId::About);
    }

    #[test]
    fn test_tie_goes_to_earlier_section() {
        let mut tracker = SectionTracker::default();
        tracker.observe(SectionId::Faq, 0.5);
        let active = tracker.observe(SectionId::Testimonials, 0.5);

        assert_eq!(active, SectionId::Testimonials);
    }

    #[test]
    fn test_keeps_last_active_when_nothing_visible() {
        let mut tracker = SectionTracker::default();
        tracker.observe(SectionId::Contact, 0.9);
        let active = tracker.observe(SectionId::Contact, 0.0);

        assert_eq!(active, SectionId::Contact);
    }

    #[test]
    fn test_leaving_section_hands_over() {
        let mut tracker = SectionTracker::default();
        tracker.observe(SectionId::Process, 1.0);
        tracker.observe(SectionId::Solutions, 0.1);
        let active = tracker.observe(SectionId::Process, 0.0);

        assert_eq!(active, SectionId::Solutions);
    }

    #[test]
    fn test_bad_ratios_are_sanitized() {
        let mut tracker = SectionTracker::default();
        tracker.observe(SectionId::About, f64::NAN);
        assert_eq!(tracker.ratio(SectionId::About), 0.0);

        tracker.observe(SectionId::About, 4.0);
        assert_eq!(tracker.ratio(SectionId::About), 1.0);
    }

    #[test]
    fn test_force() {
        let mut tracker = SectionTracker::default();
        tracker.force(SectionId::Faq);
        assert_eq!(tracker.active(), SectionId::Faq);
    }
}
