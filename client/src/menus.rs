//! Declarative navigation tables for the marketing header and the account
//! sidebar.
//!
//! DESIGN
//! ======
//! Menus are static data rather than inline markup so the header, the mobile
//! menu, and the tests all read the same tree. Account entries are derived
//! from folder names under `/account`; display names and descriptions follow
//! from the name.

#[cfg(test)]
#[path = "menus_test.rs"]
mod menus_test;

// =============================================================================
// SITE TREE
// =============================================================================

/// One entry of the marketing navigation tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub href: &'static str,
    pub description: &'static str,
    pub children: &'static [MenuItem],
}

impl MenuItem {
    const fn leaf(label: &'static str, href: &'static str, description: &'static str) -> Self {
        Self { label, href, description, children: &[] }
    }

    /// Child with the given label, if any.
    pub fn child(&self, label: &str) -> Option<&'static MenuItem> {
        self.children.iter().find(|c| c.label == label)
    }

    /// Description shown in the desktop hover panel: the hovered child's, or
    /// this entry's own when nothing (or an unknown label) is hovered.
    pub fn panel_description(&self, hovered: Option<&str>) -> &'static str {
        hovered.and_then(|label| self.child(label)).map_or(self.description, |c| c.description)
    }

    /// Heading shown in the desktop hover panel.
    pub fn panel_title(&self, hovered: Option<&str>) -> &'static str {
        hovered.and_then(|label| self.child(label)).map_or(self.label, |c| c.label)
    }

    /// Links that leave the site open in the same tab but skip client routing.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

pub const SITE_MENU: [MenuItem; 3] = [
    MenuItem {
        label: "Training Solutions",
        href: "/training",
        description: "Comprehensive training programs and instructional design services to elevate your organization's learning capabilities.",
        children: &[
            MenuItem::leaf(
                "In Person Training",
                "/in-person",
                "Face-to-face training sessions with expert instructors for hands-on learning experiences.",
            ),
            MenuItem::leaf(
                "Online Training Hosting",
                "/online-training",
                "Robust online learning platforms and hosting solutions for remote training delivery.",
            ),
            MenuItem::leaf(
                "Instruction Design",
                "/instruction-design",
                "Custom instructional design and curriculum development tailored to your learning objectives.",
            ),
        ],
    },
    MenuItem {
        label: "Resources",
        href: "/resources",
        description: "Access our comprehensive library of learning resources, tools, and educational content.",
        children: &[
            MenuItem::leaf(
                "Learning Management System",
                "/resources/lms",
                "Advanced LMS platform for managing, tracking, and delivering training programs efficiently.",
            ),
            MenuItem::leaf(
                "Blog",
                "https://inspire.ghost.io",
                "Latest insights, tips, and trends in corporate training and professional development.",
            ),
            MenuItem::leaf(
                "FAQs",
                "/resources/faqs",
                "Frequently asked questions about our services, training programs, and learning solutions.",
            ),
            MenuItem::leaf(
                "Company EEO Policies",
                "/resources/eeo-policies",
                "Our commitment to equal employment opportunity and inclusive workplace practices.",
            ),
            MenuItem::leaf(
                "Whitepaper",
                "/resources/whitepaper",
                "In-depth research and analysis on learning and development best practices.",
            ),
        ],
    },
    MenuItem {
        label: "Company",
        href: "/company",
        description: "Learn about our mission, values, and the team behind Envesti Solutions.",
        children: &[
            MenuItem::leaf(
                "About Us",
                "/about-us",
                "Discover our story, expertise, and commitment to transforming workplace learning.",
            ),
            MenuItem::leaf(
                "Contact",
                "/schedule-meeting",
                "Get in touch with our team for consultations, support, or partnership opportunities.",
            ),
            MenuItem::leaf(
                "Careers",
                "/careers",
                "Join our team and help shape the future of corporate training and development.",
            ),
        ],
    },
];

// =============================================================================
// CONTACT
// =============================================================================

/// Label/text pair shown in contact dropdowns, linked when `href` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactItem {
    pub label: &'static str,
    pub text: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_ITEMS: [ContactItem; 2] = [
    ContactItem { label: "Email", text: "contact@envesti.com", href: Some("mailto:contact@envesti.com") },
    ContactItem { label: "Phone", text: "+1 (555) 123-4567", href: Some("tel:+15551234567") },
];

// =============================================================================
// FOOTER
// =============================================================================

/// Plain footer link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> FooterLink {
    FooterLink { label, href }
}

pub const QUICK_LINKS: [FooterLink; 5] = [
    link("Home", "/"),
    link("About Us", "/about"),
    link("Services", "/services"),
    link("Contact", "/contact"),
    link("Blog", "/blog"),
];

pub const COMPANY_LINKS: [FooterLink; 5] = [
    link("Careers", "/careers"),
    link("Partners", "/partners"),
    link("Privacy Policy", "/privacy"),
    link("Terms of Service", "/terms"),
    link("Support", "/support"),
];

pub const SOCIAL_LINKS: [FooterLink; 3] = [link("LinkedIn", "#"), link("Twitter", "#"), link("Facebook", "#")];

// =============================================================================
// ACCOUNT SIDEBAR
// =============================================================================

pub const ACCOUNT_BASE: &str = "/account";

/// Folder under `/account` and its nested folders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountFolder {
    pub name: &'static str,
    pub children: &'static [&'static str],
}

pub const ACCOUNT_FOLDERS: [AccountFolder; 5] = [
    AccountFolder { name: "dashboard", children: &[] },
    AccountFolder { name: "organization", children: &["people", "departments"] },
    AccountFolder { name: "team", children: &[] },
    AccountFolder { name: "kids", children: &[] },
    AccountFolder { name: "training", children: &[] },
];

/// Resolved sidebar link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Folder name, also the icon key.
    pub key: &'static str,
    pub name: String,
    pub href: String,
    pub description: String,
    pub children: Vec<SidebarEntry>,
}

/// `"case-files"` -> `"Case Files"`.
pub fn display_name(folder: &str) -> String {
    folder
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn folder_description(folder: &str) -> String {
    let known = match folder {
        "dashboard" => "Overview and key metrics",
        "organization" => "Organization management and settings",
        "team" => "Team members and structure",
        "kids" => "Kids database and case management",
        "training" => "Training courses and compliance",
        "profile" => "Your account and preferences",
        "people" => "Manage organization members",
        "departments" => "Department structure and management",
        _ => return format!("{} management", display_name(folder)),
    };
    known.to_owned()
}

fn entry(key: &'static str, href: String, children: Vec<SidebarEntry>) -> SidebarEntry {
    SidebarEntry { key, name: display_name(key), href, description: folder_description(key), children }
}

/// Main sidebar entries, in folder order.
pub fn account_navigation() -> Vec<SidebarEntry> {
    ACCOUNT_FOLDERS
        .iter()
        .map(|folder| {
            let children = folder
                .children
                .iter()
                .map(|child| entry(child, format!("{ACCOUNT_BASE}/{}/{child}", folder.name), Vec::new()))
                .collect();
            entry(folder.name, format!("{ACCOUNT_BASE}/{}", folder.name), children)
        })
        .collect()
}

/// Profile link pinned below the main entries.
pub fn profile_entry() -> SidebarEntry {
    entry("profile", format!("{ACCOUNT_BASE}/profile"), Vec::new())
}

/// Glyph shown beside a sidebar entry.
pub fn folder_icon(key: &str) -> &'static str {
    match key {
        "dashboard" => "▦",
        "organization" => "🏢",
        "team" => "👥",
        "kids" => "🧸",
        "training" => "🎓",
        "profile" => "👤",
        "people" => "✔",
        "departments" => "🏛",
        _ => "📁",
    }
}
