//! Content submissions coming from the admin forms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of content entity a submission targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Homepage highlight card
    Highlight,

    /// Portfolio project
    Project,
}

impl EntityKind {
    /// Plural noun used in user-facing messages
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Highlight => "highlights",
            Self::Project => "projects",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Highlight => write!(f, "highlight"),
            Self::Project => write!(f, "project"),
        }
    }
}

/// Fields a user submits when creating or editing a highlight or project.
///
/// Produced fresh per submission and handed to the pipeline by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEditInput {
    pub title: String,

    pub description: String,

    /// Link target (optional)
    #[serde(default, alias = "url", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Storage reference for the cover image (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

impl ContentEditInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            href: None,
            image: None,
            featured: false,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// The href, treating an empty or blank form value as absent
    pub fn href(&self) -> Option<&str> {
        self.href
            .as_deref()
            .map(str::trim)
            .filter(|href| !href.is_empty())
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier assigned to a stored highlight or project by the store
    ContentId
);

string_id!(
    /// Identifier of a visitor comment awaiting moderation
    CommentId
);
