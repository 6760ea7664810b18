//! # Cover-letter template
//!
//! A fixed Upwork proposal with four substitution points. The page keeps a
//! [`TemplateFields`] in a signal and calls [`CoverLetter::render`] on every
//! keystroke; rendering is plain string formatting, so user text is inserted
//! verbatim and never re-expanded.
//!
//! [`CoverLetter::export`] packages the same text as a [`TextFile`] for the
//! download button.

use serde::Deserialize;

/// File name of the downloaded letter.
pub const COVER_LETTER_FILENAME: &str = "upwork-cover-letter-template.txt";

/// MIME type of the downloaded letter.
pub const COVER_LETTER_MIME: &str = "text/plain";

/// Advice listed under the generated letter.
pub const USAGE_TIPS: &[&str] = &[
    "Customize the placeholders above to match each specific project",
    "Research the client's business and mention relevant experience",
    "Adjust the timeline based on project complexity",
    "Include links to relevant portfolio projects",
    "Keep it concise while highlighting your key strengths",
    "Always proofread before sending",
];

/// One user-editable value of the template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateField {
    ClientName,
    ProjectType,
    SpecificRequirement,
    Timeline,
}

impl TemplateField {
    /// All fields in form order.
    pub const ALL: [TemplateField; 4] = [
        TemplateField::ClientName,
        TemplateField::ProjectType,
        TemplateField::SpecificRequirement,
        TemplateField::Timeline,
    ];

    /// Element id of the form input.
    pub fn id(&self) -> &'static str {
        match self {
            TemplateField::ClientName => "clientName",
            TemplateField::ProjectType => "projectType",
            TemplateField::SpecificRequirement => "specificRequirement",
            TemplateField::Timeline => "timeline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemplateField::ClientName => "Client Name",
            TemplateField::ProjectType => "Project Type",
            TemplateField::SpecificRequirement => "Specific Requirement",
            TemplateField::Timeline => "Timeline",
        }
    }

    /// Hint shown by the input when it is emptied.
    pub fn placeholder(&self) -> &'static str {
        match self {
            TemplateField::ClientName => "Enter client name",
            TemplateField::ProjectType => "e.g., E-commerce App",
            TemplateField::SpecificRequirement => "e.g., payment integration",
            TemplateField::Timeline => "e.g., 4-6 weeks",
        }
    }

    /// Bracketed value the field starts with.
    pub fn default_value(&self) -> &'static str {
        match self {
            TemplateField::ClientName => "[Client Name]",
            TemplateField::ProjectType => "[Project Type - e.g., E-commerce App, Social Media App]",
            TemplateField::SpecificRequirement => {
                "[Specific Requirement - e.g., payment integration, real-time chat]"
            }
            TemplateField::Timeline => "[Timeline - e.g., 4-6 weeks]",
        }
    }
}

/// Current values of the four template fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateFields {
    pub client_name: String,
    pub project_type: String,
    pub specific_requirement: String,
    pub timeline: String,
}

impl Default for TemplateFields {
    fn default() -> Self {
        Self {
            client_name: TemplateField::ClientName.default_value().to_string(),
            project_type: TemplateField::ProjectType.default_value().to_string(),
            specific_requirement: TemplateField::SpecificRequirement
                .default_value()
                .to_string(),
            timeline: TemplateField::Timeline.default_value().to_string(),
        }
    }
}

impl TemplateFields {
    pub fn new(
        client_name: impl Into<String>,
        project_type: impl Into<String>,
        specific_requirement: impl Into<String>,
        timeline: impl Into<String>,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            project_type: project_type.into(),
            specific_requirement: specific_requirement.into(),
            timeline: timeline.into(),
        }
    }

    pub fn get(&self, field: TemplateField) -> &str {
        match field {
            TemplateField::ClientName => &self.client_name,
            TemplateField::ProjectType => &self.project_type,
            TemplateField::SpecificRequirement => &self.specific_requirement,
            TemplateField::Timeline => &self.timeline,
        }
    }

    pub fn set(&mut self, field: TemplateField, value: impl Into<String>) {
        let slot = match field {
            TemplateField::ClientName => &mut self.client_name,
            TemplateField::ProjectType => &mut self.project_type,
            TemplateField::SpecificRequirement => &mut self.specific_requirement,
            TemplateField::Timeline => &mut self.timeline,
        };
        *slot = value.into();
    }

    /// Whether `field` still holds its bracketed default.
    pub fn is_default(&self, field: TemplateField) -> bool {
        self.get(field) == field.default_value()
    }
}

/// Sender details printed under the letter.
///
/// The default keeps bracketed contact placeholders; real details come from
/// the `[signature]` table of `site.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Signature {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub portfolio_url: String,
}

impl Default for Signature {
    fn default() -> Self {
        Self {
            name: "Talha Akbar".to_string(),
            title: "React Native Developer".to_string(),
            email: "[Your Email]".to_string(),
            phone: "[Your Phone]".to_string(),
            portfolio_url: "[Your Portfolio URL]".to_string(),
        }
    }
}

/// A plain-text document ready to be saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextFile {
    pub name: String,
    pub mime: &'static str,
    pub contents: String,
}

/// The cover-letter generator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoverLetter {
    signature: Signature,
}

impl CoverLetter {
    pub fn new(signature: Signature) -> Self {
        Self { signature }
    }

    /// Substitute `fields` into the template.
    pub fn render(&self, fields: &TemplateFields) -> String {
        let TemplateFields {
            client_name,
            project_type,
            specific_requirement,
            timeline,
        } = fields;
        let Signature {
            name,
            title,
            email,
            phone,
            portfolio_url,
        } = &self.signature;

        format!(
            "Dear {client_name},

I hope this message finds you well. I'm {name}, a dedicated React Native developer with 4 years of hands-on experience in creating high-performance cross-platform mobile applications for both iOS and Android platforms.

**Why I'm the Right Fit for Your {project_type}:**

✅ **Proven React Native Expertise**: 4 years of experience building production-ready mobile apps with clean, maintainable code
✅ **Cross-Platform Mastery**: Skilled in developing apps that work seamlessly on both iOS and Android with shared codebase
✅ **Modern Tech Stack**: Proficient in React Native, TypeScript, Redux/Context API, React Navigation, and native module integration
✅ **API Integration**: Extensive experience with RESTful APIs, GraphQL, and real-time data synchronization
✅ **Performance Optimization**: Expert in app performance tuning, bundle size optimization, and smooth animations
✅ **UI/UX Focus**: Creating intuitive, responsive designs that provide excellent user experience

**What I Can Deliver for Your Project:**

🎯 A fully functional {project_type} with {specific_requirement}
🎯 Clean, well-documented code following React Native best practices
🎯 Responsive design that works perfectly on various screen sizes
🎯 Thorough testing and quality assurance
🎯 App store deployment assistance (both iOS App Store and Google Play Store)
🎯 Post-launch support and maintenance

**My Development Process:**
1. **Requirements Analysis**: Understanding your vision and technical requirements
2. **Design & Architecture**: Creating scalable app architecture and UI/UX mockups
3. **Development**: Agile development with regular updates and progress reports
4. **Testing**: Comprehensive testing on multiple devices and platforms
5. **Deployment**: App store submission and launch support

**Timeline**: I can complete your {project_type} within {timeline}, with regular milestone deliveries to keep you updated on progress.

**Recent Achievements:**
- Successfully delivered 15+ React Native applications
- Maintained 5-star client satisfaction rating
- Specialized in performance optimization achieving 60fps smooth animations
- Expert in integrating third-party services and native device features

I'm excited about the opportunity to bring your mobile app vision to life. I'd love to discuss your project requirements in detail and provide you with a customized solution that exceeds your expectations.

**Next Steps:**
- Schedule a brief call to discuss your project requirements
- Provide you with a detailed project proposal and timeline
- Share relevant portfolio samples that align with your project needs

Looking forward to collaborating with you and creating something amazing together!

Best regards,
{name}
{title}
📧 {email}
📱 {phone}
🔗 {portfolio_url}

P.S. I'm available for a quick call to discuss your project requirements and answer any questions you might have. Let's turn your app idea into reality!"
        )
    }

    /// The rendered letter as a downloadable text file.
    pub fn export(&self, fields: &TemplateFields) -> TextFile {
        TextFile {
            name: COVER_LETTER_FILENAME.to_string(),
            mime: COVER_LETTER_MIME,
            contents: self.render(fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> CoverLetter {
        CoverLetter::new(Signature {
            email: "talha@example.org".to_string(),
            phone: "555-0100".to_string(),
            portfolio_url: "https://example.org".to_string(),
            ..Signature::default()
        })
    }

    fn acme() -> TemplateFields {
        TemplateFields::new("Acme Corp", "Fitness App", "wearable sync", "3 weeks")
    }

    fn line_containing<'a>(text: &'a str, needle: &str) -> &'a str {
        text.lines()
            .find(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("no line containing {needle:?}"))
    }

    #[test]
    fn test_example_substitution() {
        let letter = CoverLetter::default().render(&acme());

        assert_eq!(letter.lines().next(), Some("Dear Acme Corp,"));

        let delivery = line_containing(&letter, "A fully functional");
        assert!(delivery.contains("Fitness App"));
        assert!(delivery.contains("wearable sync"));

        let timeline = line_containing(&letter, "**Timeline**");
        assert!(timeline.contains("3 weeks"));
        assert!(timeline.contains("Fitness App"));
    }

    #[test]
    fn test_values_appear_only_at_substitution_points() {
        let fields = TemplateFields::new("Zq-client", "Zq-type", "Zq-req", "Zq-time");
        let letter = CoverLetter::default().render(&fields);

        assert_eq!(letter.matches("Zq-client").count(), 1);
        assert_eq!(letter.matches("Zq-type").count(), 3);
        assert_eq!(letter.matches("Zq-req").count(), 1);
        assert_eq!(letter.matches("Zq-time").count(), 1);
    }

    #[test]
    fn test_no_brackets_once_fields_are_filled() {
        let letter = configured().render(&acme());
        assert!(!letter.contains('['));
        assert!(!letter.contains(']'));
    }

    #[test]
    fn test_brackets_remain_only_for_default_fields() {
        let mut fields = acme();
        fields.set(TemplateField::Timeline, TemplateField::Timeline.default_value());
        assert!(fields.is_default(TemplateField::Timeline));
        assert!(!fields.is_default(TemplateField::ClientName));

        let letter = configured().render(&fields);
        assert!(letter.contains("within [Timeline - e.g., 4-6 weeks],"));
        assert_eq!(letter.matches('[').count(), 1);
    }

    #[test]
    fn test_default_fields_render_placeholders() {
        let letter = CoverLetter::default().render(&TemplateFields::default());
        assert_eq!(letter.lines().next(), Some("Dear [Client Name],"));
        for field in TemplateField::ALL {
            assert!(letter.contains(field.default_value()));
        }
    }

    #[test]
    fn test_values_are_inserted_verbatim() {
        let fields = TemplateFields::new("{timeline}", "", "ünïcødé ✓", "  padded  ");
        let letter = CoverLetter::default().render(&fields);
        assert_eq!(letter.lines().next(), Some("Dear {timeline},"));
        assert!(letter.contains("A fully functional  with ünïcødé ✓"));
        assert!(letter.contains("within   padded  ,"));
    }

    #[test]
    fn test_default_signature_keeps_contact_placeholders() {
        let letter = CoverLetter::default().render(&acme());
        assert!(letter.contains("Best regards,\nTalha Akbar\nReact Native Developer\n"));
        assert!(letter.contains("📧 [Your Email]"));
        assert!(letter.contains("📱 [Your Phone]"));
        assert!(letter.contains("🔗 [Your Portfolio URL]"));
        assert_eq!(letter.matches('[').count(), 3);
    }

    #[test]
    fn test_signature_block() {
        let signature = Signature {
            name: "Sam Lee".to_string(),
            email: "sam@example.org".to_string(),
            ..Signature::default()
        };
        let letter = CoverLetter::new(signature).render(&acme());
        assert!(letter.contains("I'm Sam Lee, a dedicated"));
        assert!(letter.contains("Best regards,\nSam Lee\nReact Native Developer\n"));
        assert!(letter.contains("📧 sam@example.org"));
    }

    #[test]
    fn test_export_file() {
        let generator = CoverLetter::default();
        let file = generator.export(&acme());
        assert_eq!(file.name, "upwork-cover-letter-template.txt");
        assert_eq!(file.mime, "text/plain");
        assert_eq!(file.contents, generator.render(&acme()));
    }

    #[test]
    fn test_render_and_export_are_idempotent() {
        let generator = CoverLetter::default();
        let fields = acme();
        assert_eq!(generator.render(&fields), generator.render(&fields));
        assert_eq!(generator.export(&fields), generator.export(&fields));
    }

    #[test]
    fn test_field_get_set() {
        let mut fields = TemplateFields::default();
        for field in TemplateField::ALL {
            assert!(fields.is_default(field));
            fields.set(field, field.label());
            assert_eq!(fields.get(field), field.label());
        }
        assert_eq!(fields.client_name, "Client Name");
        assert_eq!(fields.timeline, "Timeline");
    }
}
