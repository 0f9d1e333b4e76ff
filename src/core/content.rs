//! Static page content
//!
//! Everything the sections render is compiled in: services, projects,
//! testimonials, FAQ entries, process steps and headline numbers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: 120, suffix: "+", label: "Projects shipped" },
    Stat { value: 9, suffix: "", label: "Years in business" },
    Stat { value: 40, suffix: "+", label: "Happy clients" },
    Stat { value: 98, suffix: "%", label: "Client retention" },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Discover",
        description: "We dig into your goals, your users and your constraints before a single line of code is written.",
    },
    ProcessStep {
        title: "Design",
        description: "Wireframes, prototypes and a visual language tested with real people, iterated until it clicks.",
    },
    ProcessStep {
        title: "Build",
        description: "Short sprints, weekly demos and a codebase you will be proud to own long after launch.",
    },
    ProcessStep {
        title: "Launch",
        description: "Release, monitoring and a smooth hand-over. We stay around to measure, learn and improve.",
    },
];

pub const SOLUTIONS: &[Solution] = &[
    Solution {
        icon: "code",
        title: "Web Applications",
        summary: "Fast, accessible web products built on modern stacks and designed to scale with your business.",
        features: &["Single-page and server-rendered apps", "Design systems", "Performance audits"],
    },
    Solution {
        icon: "mobile",
        title: "Mobile Apps",
        summary: "Native-feeling iOS and Android apps from one codebase, with offline support where it matters.",
        features: &["Cross-platform delivery", "Push notifications", "App store launch"],
    },
    Solution {
        icon: "cloud",
        title: "Cloud & DevOps",
        summary: "Infrastructure that deploys itself: CI/CD, observability and cost-aware architecture.",
        features: &["Infrastructure as code", "Zero-downtime deploys", "Monitoring and alerting"],
    },
    Solution {
        icon: "spark",
        title: "AI Integration",
        summary: "Practical machine learning features that earn their place: search, summarisation, automation.",
        features: &["Retrieval and search", "Workflow automation", "Model evaluation"],
    },
    Solution {
        icon: "palette",
        title: "Product Design",
        summary: "Research-driven UX and UI that turns complicated workflows into something people enjoy.",
        features: &["User research", "Interactive prototypes", "Usability testing"],
    },
    Solution {
        icon: "shield",
        title: "Maintenance & Support",
        summary: "Long-term care for the software you depend on, with clear response times and no surprises.",
        features: &["Security updates", "Dependency upgrades", "Dedicated support hours"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Harbor Logistics",
        category: "Web",
        description: "Real-time fleet dashboard replacing a tangle of spreadsheets for a regional shipping company.",
        image: "/images/portfolio/harbor.svg",
        tags: &["Dashboard", "Maps", "Realtime"],
    },
    Project {
        title: "Pulse Health",
        category: "Mobile",
        description: "Patient companion app with appointment booking, reminders and secure messaging.",
        image: "/images/portfolio/pulse.svg",
        tags: &["iOS", "Android", "HIPAA"],
    },
    Project {
        title: "Fernwood Market",
        category: "E-commerce",
        description: "Headless storefront for an organic grocer, doubling conversion on mobile within a quarter.",
        image: "/images/portfolio/fernwood.svg",
        tags: &["Storefront", "Payments"],
    },
    Project {
        title: "Ledgerline",
        category: "Web",
        description: "Accounting workspace for small firms with bank sync and automated reconciliation.",
        image: "/images/portfolio/ledgerline.svg",
        tags: &["Fintech", "Automation"],
    },
    Project {
        title: "Trailmate",
        category: "Mobile",
        description: "Offline-first hiking guide with route recording and community trail reports.",
        image: "/images/portfolio/trailmate.svg",
        tags: &["Offline", "GPS"],
    },
    Project {
        title: "Atelier Nord",
        category: "E-commerce",
        description: "Luxury furniture catalogue with 3D product previews and a configurator.",
        image: "/images/portfolio/atelier.svg",
        tags: &["3D", "Configurator"],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They understood our business faster than some of our own hires. The platform launched on time and our ops team finally sleeps at night.",
        author: "Maria Jensen",
        role: "COO",
        company: "Harbor Logistics",
    },
    Testimonial {
        quote: "Clear communication, honest estimates and a product our patients actually like using. We have already started the next phase together.",
        author: "Dr. Samuel Okafor",
        role: "Founder",
        company: "Pulse Health",
    },
    Testimonial {
        quote: "Our mobile revenue doubled after the relaunch. The team cared about details we did not even know we were missing.",
        author: "Lena Park",
        role: "Head of Digital",
        company: "Fernwood Market",
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How long does a typical project take?",
        answer: "Most products reach a first release in 8 to 16 weeks. After the discovery phase you get a timeline with clear milestones.",
    },
    FaqEntry {
        question: "How much does it cost?",
        answer: "Every project is scoped individually. We offer fixed-price packages for well-defined work and monthly retainers for ongoing development.",
    },
    FaqEntry {
        question: "Do you work with startups?",
        answer: "Yes. Roughly half of our clients are early-stage companies. We help shape an MVP that is small enough to ship and solid enough to grow.",
    },
    FaqEntry {
        question: "Who owns the code?",
        answer: "You do. All source code, designs and documentation are transferred to you, and we are happy to onboard your in-house team.",
    },
    FaqEntry {
        question: "Can you take over an existing project?",
        answer: "Absolutely. We start with a code and infrastructure audit, then propose a plan to stabilise and extend what you already have.",
    },
    FaqEntry {
        question: "What happens after launch?",
        answer: "We offer maintenance plans covering monitoring, security updates and new features, so your product keeps improving.",
    },
];

/// Filter label that shows every project
pub const ALL_CATEGORIES: &str = "All";

/// Filter labels: "All" followed by each category in first-appearance order
pub fn project_categories(projects: &[Project]) -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORIES];
    for project in projects {
        if !categories.contains(&project.category) {
            categories.push(project.category);
        }
    }
    categories
}

/// Projects matching a filter label, in their original order
pub fn filter_projects(projects: &[Project], category: &str) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .copied()
        .collect()
}

/// Index wrap-around for the testimonial carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    pub fn go_to(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }
}

/// Single-open accordion: toggling the open entry closes it
pub fn toggle_accordion(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_not_empty() {
        assert!(!STATS.is_empty());
        assert!(!PROCESS_STEPS.is_empty());
        assert!(!SOLUTIONS.is_empty());
        assert!(!PROJECTS.is_empty());
        assert!(!TESTIMONIALS.is_empty());
        assert!(!FAQ.is_empty());
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        assert_eq!(
            project_categories(PROJECTS),
            vec!["All", "Web", "Mobile", "E-commerce"]
        );
        assert_eq!(project_categories(&[]), vec!["All"]);
    }

    #[test]
    fn test_filter_keeps_order() {
        let web = filter_projects(PROJECTS, "Web");
        let titles: Vec<_> = web.iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Harbor Logistics", "Ledgerline"]);

        assert_eq!(filter_projects(PROJECTS, ALL_CATEGORIES).len(), PROJECTS.len());
        assert!(filter_projects(PROJECTS, "Games").is_empty());
    }

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_carousel_go_to_ignores_out_of_range() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.go_to(2), 2);
        assert_eq!(carousel.go_to(5), 2);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
    }

    #[test]
    fn test_accordion_single_open() {
        assert_eq!(toggle_accordion(None, 2), Some(2));
        assert_eq!(toggle_accordion(Some(2), 2), None);
        assert_eq!(toggle_accordion(Some(2), 4), Some(4));
    }
}
