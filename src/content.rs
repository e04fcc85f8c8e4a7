// Static portfolio content
//
// Everything the three sections display. Pure data; the views decide layout.

/// Name shown on the header button that opens the menu
pub const OWNER_MARK: &str = "SKETU";

/// Footer copyright holder
pub const COPYRIGHT_HOLDER: &str = "SKeTU";

/// Home section headline, one entry per line
pub const HEADLINE: [&str; 5] = [
    "HELLO, I'M DEBASISH [SKetU]",
    "A SELF-TAUGHT SOFTWARE ENTHUSIAST",
    "EXPLORING PYTHON & FULL-STACK DEVELOPMENT",
    "FASCINATED BY DEVOPS & LINUX",
    "DRIVEN BY A PASSION FOR KNOWLEDGE AND GROWTH",
];

/// Repeated behind the works card
pub const WORKS_BACKDROP: &str = "• Explore My Craft •";

/// Fixed first line of the contact heading
pub const CONTACT_GREETING: &str = "Hello,";

/// Words cycled under the greeting in the contact section
pub const ABOUT_WORDS: [&str; 10] = [
    "Developer",
    "Coder",
    "Builder",
    "Learner",
    "Investor",
    "Entrepreneur",
    "Designer",
    "Innovator",
    "Freelancer",
    "Consultant",
];

pub const CONTACT_PITCH: &str = "I'm passionate about crafting unique digital experiences. \
Let's team up and create something extraordinary together!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        category: "Admin Panel",
        title: "Custom Dashboard",
        description: "Building a custom admin panel for a client to manage their products and orders.",
        url: "https://sketu-l.github.io/dashboard",
    },
    Project {
        category: "Telegram Bots",
        title: "Custom Telegram Bot",
        description: "Creating a custom bot for Telegram with mini webapp features (the bot is down for now but the webapp isn't).",
        url: "https://t.me/deez_nutswhen_bot",
    },
    Project {
        category: "DevOps",
        title: "CI Pipeline",
        description: "Setting up a CI pipeline in RisingTechOSS.",
        url: "https://github.com/RisingOSS-devices/RisingOS-Builder",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const CONTACT_LINKS: [ContactLink; 5] = [
    ContactLink {
        name: "Email",
        href: "mailto:SKeTU-l@proton.me",
    },
    ContactLink {
        name: "LinkedIn",
        href: "https://linkedin.com/in/SKetU",
    },
    ContactLink {
        name: "GitHub",
        href: "https://github.com/SKetU-l",
    },
    ContactLink {
        name: "Telegram",
        href: "https://t.me/SKetUl",
    },
    ContactLink {
        name: "Instagram",
        href: "https://instagram.com/SKetU.l",
    },
];

/// Cycles through `ABOUT_WORDS`
#[derive(Debug, Clone, Default)]
pub struct RotatingText {
    index: usize,
}

impl RotatingText {
    pub fn current(&self) -> &'static str {
        ABOUT_WORDS[self.index]
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % ABOUT_WORDS.len();
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// Project carousel for the works section; wraps in both directions
#[derive(Debug, Clone, Default)]
pub struct WorksCarousel {
    index: usize,
}

impl WorksCarousel {
    pub fn current(&self) -> &'static Project {
        &PROJECTS[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % PROJECTS.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + PROJECTS.len() - 1) % PROJECTS.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotating_text_wraps() {
        let mut text = RotatingText::default();
        assert_eq!(text.current(), "Developer");
        for _ in 0..ABOUT_WORDS.len() {
            text.advance();
        }
        assert_eq!(text.current(), "Developer");
        text.advance();
        assert_eq!(text.current(), "Coder");
        text.reset();
        assert_eq!(text.current(), "Developer");
    }

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut works = WorksCarousel::default();
        works.prev();
        assert_eq!(works.index(), PROJECTS.len() - 1);
        works.next();
        assert_eq!(works.index(), 0);
        assert_eq!(works.current().title, "Custom Dashboard");
    }
}
