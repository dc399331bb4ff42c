//! Card
//!
//! A titled container holding one value: plain text or a nested widget.
//! Cards carry no state; everything a renderer needs is in [`CardSpec`].

use serde::{Deserialize, Deserializer, Serialize};

use super::routes::Route;
use super::widgets::Widget;

/// Card size class
///
/// Serialized as its lowercase name. Any unrecognized name deserializes to
/// [`CardSize::Small`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl CardSize {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "medium" => CardSize::Medium,
            "large" => CardSize::Large,
            _ => CardSize::Small,
        }
    }

    /// Columns occupied on the 12-column dashboard grid
    pub fn column_span(self) -> u8 {
        match self {
            CardSize::Small => 3,
            CardSize::Medium => 6,
            CardSize::Large => 12,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardSize::Small => "small",
            CardSize::Medium => "medium",
            CardSize::Large => "large",
        }
    }
}

impl<'de> Deserialize<'de> for CardSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(CardSize::parse(&s))
    }
}

/// Body content of a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum CardValue {
    Text(String),
    Widget(Widget),
}

impl From<Widget> for CardValue {
    fn from(widget: Widget) -> Self {
        CardValue::Widget(widget)
    }
}

impl From<&str> for CardValue {
    fn from(text: &str) -> Self {
        CardValue::Text(text.to_string())
    }
}

/// Everything needed to render one card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSpec {
    pub title: String,
    pub value: CardValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub size: CardSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl CardSpec {
    /// A small, static card with no caption
    pub fn new(title: impl Into<String>, value: impl Into<CardValue>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            status: None,
            size: CardSize::default(),
            href: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    /// Make the whole card a link to `route`
    pub fn link(mut self, route: Route) -> Self {
        self.href = Some(route.path().to_string());
        self
    }

    /// Caption line, present only when a status was supplied
    pub fn caption(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_link(&self) -> bool {
        self.href.is_some()
    }

    pub fn column_span(&self) -> u8 {
        self.size.column_span()
    }
}
