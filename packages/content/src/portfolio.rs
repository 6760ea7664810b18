//! Static content of the portfolio page.

use crate::models::{BlogPost, Profile, Project, SocialKind, SocialLink};

pub const PROFILE: Profile = Profile {
    name: "Alex Johnson",
    role: "Creative Developer & Designer",
    tagline: "I craft beautiful digital experiences with clean code and thoughtful design. \
              Passionate about creating solutions that make a difference.",
    about: &[
        "With over 5 years of experience in web development and design, I specialize in \
         creating modern, accessible, and performant applications that users love.",
        "My journey began with curiosity about how things work on the web, and has \
         evolved into a passion for crafting digital experiences that solve real problems.",
    ],
    contact_blurb: "Have a project in mind? I'd love to hear about it. \
                    Let's create something amazing together.",
    footer: "© 2024 Alex Johnson. Built with Rust and Dioxus.",
};

pub const SKILLS: &[&str] = &["React", "TypeScript", "Node.js", "Python", "Design", "UI/UX"];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "Modern shopping experience with React and Stripe integration",
        tech: &["React", "Node.js", "MongoDB"],
        url: "https://github.com/alexjohnson/e-commerce-platform",
    },
    Project {
        title: "Task Management App",
        description: "Collaborative workspace for teams with real-time updates",
        tech: &["TypeScript", "Socket.io", "PostgreSQL"],
        url: "https://github.com/alexjohnson/task-management-app",
    },
    Project {
        title: "Portfolio Website",
        description: "Responsive portfolio with smooth animations and dark mode",
        tech: &["React", "Tailwind", "Framer Motion"],
        url: "https://github.com/alexjohnson/portfolio",
    },
];

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Building Modern React Applications",
        excerpt: "Best practices for scalable React development in 2024",
        date: "March 15, 2024",
        read_time: "5 min read",
    },
    BlogPost {
        title: "The Art of Minimalist Design",
        excerpt: "How less can be more in user interface design",
        date: "March 10, 2024",
        read_time: "7 min read",
    },
    BlogPost {
        title: "TypeScript Tips and Tricks",
        excerpt: "Advanced TypeScript patterns for better code quality",
        date: "March 5, 2024",
        read_time: "6 min read",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::Email,
        label: "Email",
        href: "mailto:alex@example.com",
    },
    SocialLink {
        kind: SocialKind::GitHub,
        label: "GitHub",
        href: "https://github.com/alexjohnson",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "LinkedIn",
        href: "https://linkedin.com/in/alexjohnson",
    },
];

/// The `mailto:` link behind the "Start a Project" button.
pub fn contact_email_href() -> &'static str {
    SOCIAL_LINKS
        .iter()
        .find(|link| link.kind == SocialKind::Email)
        .map(|link| link.href)
        .unwrap_or("mailto:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_have_content() {
        assert!(!PROJECTS.is_empty());
        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.tech.is_empty());
            assert!(project.url.starts_with("https://"));
        }
        for post in POSTS {
            assert!(!post.title.is_empty());
            assert!(post.read_time.ends_with("min read"));
        }
    }

    #[test]
    fn test_social_labels_are_unique() {
        let mut labels: Vec<&str> = SOCIAL_LINKS.iter().map(|l| l.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), SOCIAL_LINKS.len());
    }

    #[test]
    fn test_contact_email_href() {
        assert_eq!(contact_email_href(), "mailto:alex@example.com");
    }
}
