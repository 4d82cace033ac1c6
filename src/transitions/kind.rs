use crate::animation::ease::Ease;
use crate::foundation::error::{PushfxError, PushfxResult};
use crate::graph::image::Image;
use crate::transitions::genie::GenieFilter;
use crate::transitions::navigation::NavigationFilter;
use crate::transitions::schema::{self, FilterAttributes};
use crate::transitions::spread::SpreadFilter;
use crate::transitions::tab::TabFilter;
use crate::transitions::{TransitionFilter, TransitionInputs};

static NAVIGATION: NavigationFilter = NavigationFilter;
static GENIE: GenieFilter = GenieFilter;
static SPREAD: SpreadFilter = SpreadFilter;
static TAB: TabFilter = TabFilter;

/// The available transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TransitionKind {
    /// Slide with parallax and shadow.
    Navigation,
    /// Grow out of a focal point.
    Spread,
    /// Pull out of the left edge.
    Genie,
    /// Pan across a side-by-side strip.
    Tab,
}

impl TransitionKind {
    /// Every kind, in declaration order.
    pub const ALL: [TransitionKind; 4] = [Self::Navigation, Self::Spread, Self::Genie, Self::Tab];

    /// Parse a kind name case-insensitively. Accepts `push` as an alias of `navigation`.
    pub fn parse(name: &str) -> PushfxResult<Self> {
        let kind = name.trim().to_ascii_lowercase();
        if kind.is_empty() {
            return Err(PushfxError::validation("transition kind must be non-empty"));
        }
        match kind.as_str() {
            "navigation" | "push" | "navigation_push" => Ok(Self::Navigation),
            "spread" => Ok(Self::Spread),
            "genie" => Ok(Self::Genie),
            "tab" => Ok(Self::Tab),
            _ => Err(PushfxError::validation(format!(
                "unknown transition kind '{kind}'"
            ))),
        }
    }

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Spread => "spread",
            Self::Genie => "genie",
            Self::Tab => "tab",
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation Transition",
            Self::Spread => "Spread Transition",
            Self::Genie => "Genie Transition",
            Self::Tab => "Tab Transition",
        }
    }

    /// Shared filter instance for this kind.
    pub fn filter(self) -> &'static dyn TransitionFilter {
        match self {
            Self::Navigation => &NAVIGATION,
            Self::Spread => &SPREAD,
            Self::Genie => &GENIE,
            Self::Tab => &TAB,
        }
    }

    /// Compose one frame with this kind's filter. See [`TransitionFilter::compose`].
    pub fn compose(self, inputs: &TransitionInputs) -> Option<Image> {
        self.filter().compose(inputs)
    }

    /// Parameter schema of this kind's filter.
    pub fn attributes(self) -> FilterAttributes {
        schema::attributes_for(self)
    }

    /// Timing curve used when none is configured.
    pub fn default_ease(self, reverse: bool) -> Ease {
        match (self, reverse) {
            (Self::Genie, true) => Ease::EaseIn,
            _ => Ease::EaseOut,
        }
    }
}

impl std::str::FromStr for TransitionKind {
    type Err = PushfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TransitionKind {
    type Error = PushfxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/kind.rs"]
mod tests;
