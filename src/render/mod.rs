use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::str::FromStr;

use crate::analysis::{PackageManager, Profile};

mod sections;

pub const DOCUMENT_FILE_NAME: &str = "README.md";
pub const DOCUMENT_CONTENT_TYPE: &str = "text/markdown";
pub(crate) const RULE: &str = "---\n\n";

/// Header layout requested by the caller. Every style renders the same
/// template; the style only changes the label reported alongside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    #[default]
    Classic,
    Modern,
    Compact,
}

impl HeaderStyle {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Classic => "Classic - Centered Layout",
            Self::Modern => "Modern - Left-aligned Layout",
            Self::Compact => "Compact - Inline Layout",
        }
    }
}

impl FromStr for HeaderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "modern" => Ok(Self::Modern),
            "compact" => Ok(Self::Compact),
            other => Err(format!(
                "unknown header style '{}', expected classic, modern or compact",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub content: String,
    pub style: HeaderStyle,
}

impl Document {
    pub fn file_name(&self) -> &'static str {
        DOCUMENT_FILE_NAME
    }

    pub fn content_type(&self) -> &'static str {
        DOCUMENT_CONTENT_TYPE
    }
}

pub struct ReadmeRenderer<'a> {
    profile: &'a Profile,
}

impl<'a> ReadmeRenderer<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    pub fn render(&self, style: HeaderStyle) -> Document {
        let mut out = String::new();

        sections::header(&mut out, self.profile);
        sections::table_of_contents(&mut out);
        out.push_str(RULE);
        sections::overview(&mut out, self.profile);
        out.push_str(RULE);
        sections::features(&mut out, self.profile);
        out.push('\n');
        out.push_str(RULE);
        sections::project_structure(&mut out, self.profile);
        sections::project_index(&mut out, self.profile);
        out.push_str(RULE);
        sections::getting_started(&mut out, self.profile);
        out.push_str(RULE);
        sections::roadmap(&mut out);
        out.push_str(RULE);
        sections::contributing(&mut out, self.profile);
        out.push_str(RULE);
        sections::license(&mut out, self.profile);
        out.push_str(RULE);
        sections::acknowledgments(&mut out);
        out.push_str(RULE);

        Document {
            content: out,
            style,
        }
    }
}

pub fn render(profile: &Profile, style: HeaderStyle) -> Document {
    ReadmeRenderer::new(profile).render(style)
}

/// One fenced command block per package manager, each with its badge.
pub(crate) fn manager_blocks<F>(out: &mut String, managers: &[PackageManager], command: F)
where
    F: Fn(&PackageManager) -> String,
{
    for manager in managers {
        let _ = write!(
            out,
            "**Using `{}`** &nbsp; [<img align=\"center\" src=\"{}\" />]({})\n\n",
            manager.name(),
            manager.badge_url(),
            manager.homepage()
        );
        let _ = write!(out, "```sh\n❯ {}\n```\n\n", command(manager));
    }
}
