//! # Content records rendered by the portfolio
//!
//! Every record here is built from `&'static` data in [`crate::portfolio`].
//! Nothing is created or mutated at runtime; the UI only iterates the tables.
//!
//! | Type | Rendered as |
//! |------|-------------|
//! | [`Profile`] | Hero heading, about text and footer line. |
//! | [`Project`] | A project card with tech chips and a link. |
//! | [`BlogPost`] | A blog card with date and read time. |
//! | [`SocialLink`] | A round icon link in the contact section. |
//! | [`Section`] | A page anchor and its navbar entry. |

/// The site owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub contact_blurb: &'static str,
    pub footer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Tech stack chips, in display order.
    pub tech: &'static [&'static str],
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Human-readable publication date: "March 15, 2024"
    pub date: &'static str,
    /// "5 min read"
    pub read_time: &'static str,
}

/// Which icon a [`SocialLink`] is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialKind {
    Email,
    GitHub,
    LinkedIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    /// Accessible label: "GitHub"
    pub label: &'static str,
    pub href: &'static str,
}

/// A navigable section of the portfolio page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Blog,
    Contact,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Blog,
        Section::Contact,
    ];

    /// The element id of the section anchor.
    pub fn id(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }

    /// Navbar label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_are_unique() {
        let mut ids: Vec<&str> = Section::ALL.iter().map(Section::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }
}
