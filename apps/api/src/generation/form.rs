//! Form state submitted by the user: topic, platform, tone, variation count, toggles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target social platform. Serialized as its lowercase id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Twitter,
    Linkedin,
    Facebook,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Facebook,
        Platform::Instagram,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Twitter => "X (Twitter)",
            Platform::Linkedin => "LinkedIn",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
        }
    }

    /// Per-post character limit the prompt should mention, if any.
    pub fn character_limit(self) -> Option<u32> {
        match self {
            Platform::Twitter => Some(280),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Voice of the generated posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Humorous,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Professional, Tone::Casual, Tone::Friendly, Tone::Humorous];

    pub fn id(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Humorous => "humorous",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
            Tone::Humorous => "Humorous",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Number of alternative drafts requested. Always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Variations(u8);

impl Variations {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub fn new(count: u8) -> Result<Self, String> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(format!(
                "variations must be between {} and {}, got {count}",
                Self::MIN,
                Self::MAX
            ))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Variations {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for Variations {
    type Error = String;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<Variations> for u8 {
    fn from(v: Variations) -> Self {
        v.0
    }
}

/// Everything the user chose on the form. Topic emptiness is checked at
/// submit time, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub topic: String,
    pub platform: Platform,
    pub tone: Tone,
    pub variations: Variations,
    pub include_thread: bool,
    pub include_hashtags: bool,
    pub include_emojis: bool,
}

impl PostForm {
    pub fn has_topic(&self) -> bool {
        !self.topic.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults() {
        let form = PostForm::default();
        assert_eq!(form.platform, Platform::Twitter);
        assert_eq!(form.tone, Tone::Professional);
        assert_eq!(form.variations.get(), 1);
        assert!(!form.include_thread && !form.include_hashtags && !form.include_emojis);
    }

    #[test]
    fn test_form_deserializes_partial_body_with_defaults() {
        let form: PostForm =
            serde_json::from_str(r#"{"topic": "Rust 2024", "platform": "linkedin"}"#).unwrap();
        assert_eq!(form.topic, "Rust 2024");
        assert_eq!(form.platform, Platform::Linkedin);
        assert_eq!(form.tone, Tone::Professional);
    }

    #[test]
    fn test_enums_use_lowercase_ids() {
        assert_eq!(serde_json::to_string(&Platform::Instagram).unwrap(), r#""instagram""#);
        assert_eq!(serde_json::to_string(&Tone::Humorous).unwrap(), r#""humorous""#);
        let tone: Tone = serde_json::from_str(r#""casual""#).unwrap();
        assert_eq!(tone, Tone::Casual);
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let result = serde_json::from_str::<Platform>(r#""myspace""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_variations_bounds() {
        assert!(Variations::new(0).is_err());
        assert_eq!(Variations::new(3).unwrap().get(), 3);
        assert!(Variations::new(4).is_err());
        assert!(serde_json::from_str::<PostForm>(r#"{"variations": 5}"#).is_err());
        let form: PostForm = serde_json::from_str(r#"{"variations": 2}"#).unwrap();
        assert_eq!(form.variations.get(), 2);
    }

    #[test]
    fn test_has_topic_rejects_whitespace() {
        let mut form = PostForm::default();
        assert!(!form.has_topic());
        form.topic = " \n\t ".to_string();
        assert!(!form.has_topic());
        form.topic = "launch day".to_string();
        assert!(form.has_topic());
    }

    #[test]
    fn test_only_twitter_has_character_limit() {
        for platform in Platform::ALL {
            assert_eq!(
                platform.character_limit().is_some(),
                platform == Platform::Twitter
            );
        }
    }
}
