//! Static page content.
//!
//! The content lives in `content/portfolio.json` and is compiled into the
//! binary; the page never fetches anything at runtime.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::image::fallback_avatar_url;

const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.json");

/// Errors raised while loading page content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The JSON did not match the content schema.
    #[error("failed to parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field that the page cannot render without is blank.
    #[error("{section}: `{field}` must not be empty")]
    MissingField {
        /// Where the field lives, e.g. `projects[2]`.
        section: String,
        /// Field name.
        field: &'static str,
    },
    /// A contact link uses a scheme the page does not render, or carries
    /// surrounding whitespace.
    #[error("{section}: unsupported link `{href}`")]
    InvalidLink {
        /// Where the link lives.
        section: String,
        /// Offending href.
        href: String,
    },
    /// Two entries share a value the page keys its rendering on.
    #[error("{section}: duplicate {field} `{value}`")]
    Duplicate {
        /// Where the second occurrence lives, e.g. `projects[3]`.
        section: String,
        /// Field name.
        field: &'static str,
        /// Repeated value.
        value: String,
    },
}

/// Everything rendered on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Page owner.
    pub owner: Owner,
    /// About section.
    pub about: About,
    /// Timeline entries, newest first.
    pub experience: Vec<Experience>,
    /// Carousel panels, in display order.
    pub projects: Vec<Project>,
    /// Skills grid columns.
    pub skills: Vec<SkillGroup>,
    /// Contact card.
    pub connect: Connect,
    /// Footer line.
    pub footer: String,
}

/// Who the page is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    /// Full name, also used for the placeholder avatar.
    pub name: String,
    /// Name used in the hero greeting.
    pub greeting_name: String,
    /// Pill shown above the greeting.
    pub tagline: String,
    /// Profile photo, relative to the site base.
    pub photo: String,
    /// Placeholder avatar background colour (hex, no `#`).
    pub avatar_background: String,
    /// Placeholder avatar text colour (hex, no `#`).
    pub avatar_color: String,
}

impl Owner {
    /// Generated avatar used when [`Owner::photo`] fails to load.
    pub fn fallback_avatar(&self) -> String {
        fallback_avatar_url(&self.name, &self.avatar_background, &self.avatar_color)
    }
}

/// About section copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    /// Description paragraphs.
    pub paragraphs: Vec<String>,
    /// Competition results, one per line.
    #[serde(default)]
    pub competitions: Vec<String>,
}

/// One entry of the experience timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    /// Organisation.
    pub company: String,
    /// Position held.
    pub role: String,
    /// Free-form date range.
    pub date: String,
    /// Short description.
    pub description: String,
}

/// One carousel panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Technologies used.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Year badge.
    pub year: String,
    /// Thumbnail relative to the site base. Without one the title is shown
    /// as a watermark.
    #[serde(default)]
    pub image: Option<String>,
    /// Outbound link, opened in a new tab.
    pub link: String,
}

/// Icon shown next to a skills column title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillIcon {
    /// Code brackets.
    Code,
    /// Page layout.
    Layout,
    /// Cog.
    Settings,
}

/// One column of the skills grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Column title.
    pub title: String,
    /// Column icon.
    pub icon: SkillIcon,
    /// Utility class tinting the icon.
    #[serde(default)]
    pub accent: String,
    /// Skill chips.
    pub items: Vec<String>,
}

/// Contact card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connect {
    /// Card heading.
    pub heading: String,
    /// Text under the heading.
    pub blurb: String,
    /// Icon links.
    pub links: Vec<ContactLink>,
}

/// Kind of contact link, selects the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    /// LinkedIn profile.
    Linkedin,
    /// `mailto:` address.
    Email,
    /// GitHub profile.
    Github,
}

/// An icon link in the contact card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    /// Icon selector.
    pub kind: ContactKind,
    /// Link target.
    pub href: String,
    /// Accessible label.
    pub label: String,
}

impl ContactLink {
    /// Whether the link should open in a new tab. `mailto:` links do not.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.trim_start().starts_with("mailto:")
    }
}

impl Portfolio {
    /// Content compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    /// Parse and validate content from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(raw)?;
        portfolio.validate()?;
        tracing::debug!(
            projects = portfolio.projects.len(),
            experience = portfolio.experience.len(),
            "loaded portfolio content"
        );
        Ok(portfolio)
    }

    /// Check the fields the page cannot render without.
    pub fn validate(&self) -> Result<(), ContentError> {
        require("owner", "name", &self.owner.name)?;
        require("owner", "greeting_name", &self.owner.greeting_name)?;

        let mut titles = HashSet::new();
        for (idx, project) in self.projects.iter().enumerate() {
            let section = format!("projects[{idx}]");
            require(&section, "title", &project.title)?;
            require(&section, "link", &project.link)?;
            if !titles.insert(project.title.trim()) {
                return Err(ContentError::Duplicate {
                    section,
                    field: "title",
                    value: project.title.clone(),
                });
            }
        }

        for (idx, exp) in self.experience.iter().enumerate() {
            require(&format!("experience[{idx}]"), "company", &exp.company)?;
        }

        for (idx, link) in self.connect.links.iter().enumerate() {
            // The href is rendered verbatim, so it must not need trimming.
            let href = link.href.as_str();
            let supported = ["https://", "http://", "mailto:"]
                .iter()
                .any(|scheme| href.starts_with(scheme));
            if !supported || href.trim() != href {
                return Err(ContentError::InvalidLink {
                    section: format!("connect.links[{idx}]"),
                    href: link.href.clone(),
                });
            }
        }

        Ok(())
    }

    /// Asset paths referenced by the content: the profile photo followed by
    /// every project thumbnail.
    pub fn asset_paths(&self) -> Vec<&str> {
        std::iter::once(self.owner.photo.as_str())
            .chain(self.projects.iter().filter_map(|p| p.image.as_deref()))
            .filter(|path| !path.trim().is_empty())
            .collect()
    }
}

fn require(section: &str, field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::MissingField {
            section: section.to_string(),
            field,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Portfolio {
        Portfolio::embedded().expect("embedded content is valid")
    }

    #[test]
    fn embedded_content_loads() {
        let portfolio = sample();
        assert_eq!(portfolio.owner.name, "Gavin Tay");
        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(portfolio.experience.len(), 3);
        assert_eq!(portfolio.skills.len(), 3);
        assert_eq!(portfolio.skills[1].icon, SkillIcon::Layout);
        assert_eq!(portfolio.connect.links[0].kind, ContactKind::Linkedin);
    }

    #[test]
    fn owner_fallback_avatar_matches_service_url() {
        assert_eq!(
            sample().owner.fallback_avatar(),
            "https://ui-avatars.com/api/?name=Gavin+Tay&background=112240&color=fdfbf7"
        );
    }

    #[test]
    fn asset_paths_lists_photo_then_thumbnails() {
        let mut portfolio = sample();
        portfolio.projects[1].image = None;
        assert_eq!(
            portfolio.asset_paths(),
            [
                "static/selfie.jpg",
                "static/kampungcare.png",
                "static/wavelength.png",
                "static/tutorly.jpg"
            ]
        );
    }

    #[test]
    fn mailto_links_stay_in_tab() {
        let links = sample().connect.links;
        assert!(links[0].opens_new_tab());
        assert!(!links[1].opens_new_tab());
    }

    #[test]
    fn rejects_blank_project_link() {
        let mut portfolio = sample();
        portfolio.projects[2].link = "  ".to_string();
        let err = portfolio.validate().expect_err("blank link rejected");
        assert!(matches!(
            err,
            ContentError::MissingField { ref section, field: "link" } if section == "projects[2]"
        ));
    }

    #[test]
    fn rejects_unsupported_contact_scheme() {
        let mut portfolio = sample();
        portfolio.connect.links[1].href = "javascript:alert(1)".to_string();
        let err = portfolio.validate().expect_err("scheme rejected");
        assert!(matches!(err, ContentError::InvalidLink { .. }));
        assert!(err.to_string().contains("javascript:alert(1)"));
    }

    #[test]
    fn rejects_padded_contact_href() {
        let mut portfolio = sample();
        portfolio.connect.links[1].href = " mailto:a@b.c".to_string();
        let err = portfolio.validate().expect_err("padded href rejected");
        assert!(matches!(
            err,
            ContentError::InvalidLink { ref section, .. } if section == "connect.links[1]"
        ));
        // Rendering still keeps a padded mailto in the same tab.
        assert!(!portfolio.connect.links[1].opens_new_tab());
    }

    #[test]
    fn rejects_blank_greeting_and_company() {
        let mut portfolio = sample();
        portfolio.owner.greeting_name = String::new();
        assert!(matches!(
            portfolio.validate(),
            Err(ContentError::MissingField { field: "greeting_name", .. })
        ));

        let mut portfolio = sample();
        portfolio.experience[1].company = " ".to_string();
        assert!(matches!(
            portfolio.validate(),
            Err(ContentError::MissingField { ref section, field: "company" }) if section == "experience[1]"
        ));
    }

    #[test]
    fn rejects_duplicate_project_title() {
        let mut portfolio = sample();
        portfolio.projects[3].title = portfolio.projects[0].title.clone();
        let err = portfolio.validate().expect_err("duplicate title rejected");
        assert!(matches!(
            err,
            ContentError::Duplicate { ref section, field: "title", .. } if section == "projects[3]"
        ));
        assert!(err.to_string().contains("KampungCare"));
    }

    #[test]
    fn parse_error_is_reported() {
        let err = Portfolio::from_json("{ \"owner\": 1 }").expect_err("bad json");
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn optional_fields_default() {
        let mut value = serde_json::to_value(sample()).expect("serialize");
        let project = &mut value["projects"][0];
        project.as_object_mut().expect("object").remove("image");
        project.as_object_mut().expect("object").remove("tags");
        let portfolio: Portfolio = serde_json::from_value(value).expect("deserialize");
        assert_eq!(portfolio.projects[0].image, None);
        assert!(portfolio.projects[0].tags.is_empty());
    }
}
