use content::portfolio::{contact_email_href, PROFILE, SOCIAL_LINKS};
use content::{Section, SocialKind};
use dioxus::prelude::*;

use super::SectionHeading;
use crate::brand_icons::{FaGithub, FaLinkedin};
use crate::icons::FaEnvelope;
use crate::Icon;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section {
            id: Section::Contact.id(),
            class: "page-section page-section--tinted",
            div {
                class: "section-inner section-inner--narrow",
                SectionHeading { title: "Let's Work Together" }
                p { class: "contact-blurb", "{PROFILE.contact_blurb}" }
                div {
                    class: "social-links",
                    for link in SOCIAL_LINKS {
                        a {
                            key: "{link.label}",
                            class: "social-link",
                            href: "{link.href}",
                            "aria-label": "{link.label}",
                            title: "{link.label}",
                            {match link.kind {
                                SocialKind::Email => rsx! { Icon { icon: FaEnvelope, width: 22, height: 22 } },
                                SocialKind::GitHub => rsx! { Icon { icon: FaGithub, width: 22, height: 22 } },
                                SocialKind::LinkedIn => rsx! { Icon { icon: FaLinkedin, width: 22, height: 22 } },
                            }}
                        }
                    }
                }
                a {
                    class: "btn btn-primary btn-lg",
                    href: contact_email_href(),
                    "Start a Project"
                }
            }
        }
    }
}
