//! Content brief types: the form inputs a user submits for generation.
//!
//! A [`ContentBrief`] is captured once per generate action, is immutable
//! after capture, and is discarded when the request completes. The three
//! closed-choice fields are modeled as enums so invalid values are
//! rejected at the boundary instead of flowing into the prompt.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Voice the generated content should be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Inspirational,
    Humorous,
}

impl Tone {
    /// Human-readable label as shown in form controls (e.g., "Professional").
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Inspirational => "Inspirational",
            Tone::Humorous => "Humorous",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Professional => write!(f, "professional"),
            Tone::Casual => write!(f, "casual"),
            Tone::Inspirational => write!(f, "inspirational"),
            Tone::Humorous => write!(f, "humorous"),
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Ok(Tone::Professional),
            "casual" => Ok(Tone::Casual),
            "inspirational" => Ok(Tone::Inspirational),
            "humorous" => Ok(Tone::Humorous),
            other => Err(format!("invalid tone: '{other}'")),
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Professional
    }
}

/// Target social media platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    LinkedIn,
    Twitter,
    YouTube,
}

impl Platform {
    /// Human-readable label as shown in form controls and prompts
    /// (e.g., "LinkedIn", not "linkedin").
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
            Platform::YouTube => "YouTube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Instagram => write!(f, "instagram"),
            Platform::LinkedIn => write!(f, "linkedin"),
            Platform::Twitter => write!(f, "twitter"),
            Platform::YouTube => write!(f, "youtube"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::LinkedIn),
            "twitter" => Ok(Platform::Twitter),
            "youtube" => Ok(Platform::YouTube),
            other => Err(format!("invalid platform: '{other}'")),
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::Instagram
    }
}

/// Requested output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Caption,
    PostIdeas,
    Hashtags,
    ReelsIdeas,
    WeeklyPlan,
}

impl ContentType {
    /// Human-readable label as shown in form controls (e.g., "Post ideas").
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Caption => "Caption",
            ContentType::PostIdeas => "Post ideas",
            ContentType::Hashtags => "Hashtags",
            ContentType::ReelsIdeas => "Reels ideas",
            ContentType::WeeklyPlan => "Weekly plan",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Caption => write!(f, "caption"),
            ContentType::PostIdeas => write!(f, "post ideas"),
            ContentType::Hashtags => write!(f, "hashtags"),
            ContentType::ReelsIdeas => write!(f, "reels ideas"),
            ContentType::WeeklyPlan => write!(f, "weekly plan"),
        }
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the prompt form ("post ideas") and the wire form
        // ("post_ideas"), case-insensitively.
        match s.trim().to_lowercase().replace('_', " ").as_str() {
            "caption" => Ok(ContentType::Caption),
            "post ideas" => Ok(ContentType::PostIdeas),
            "hashtags" => Ok(ContentType::Hashtags),
            "reels ideas" => Ok(ContentType::ReelsIdeas),
            "weekly plan" => Ok(ContentType::WeeklyPlan),
            other => Err(format!("invalid content type: '{other}'")),
        }
    }
}

impl Default for ContentType {
    fn default() -> Self {
        ContentType::Caption
    }
}

/// A single generation request as captured from the form or CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBrief {
    /// Freeform business description (e.g., "Online fitness coaching brand").
    pub business_type: String,
    /// Freeform audience description (e.g., "Busy professionals in their 30s").
    pub target_audience: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub content_type: ContentType,
    /// Optional freeform instructions; blank means "N/A" downstream.
    #[serde(default)]
    pub extra_instructions: Option<String>,
}
