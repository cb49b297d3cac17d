use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Visual style for the backbone.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// Round tube through the backbone.
    #[default]
    Ribbon,
    /// Flattened ribbon through the backbone.
    Cartoon,
    /// Atoms and bonds only.
    BallAndStick,
}

impl Representation {
    /// Whether this mode draws a spline surface through the backbone.
    #[must_use]
    pub fn draws_backbone(self) -> bool {
        matches!(self, Self::Ribbon | Self::Cartoon)
    }

    /// The next mode in selector order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Ribbon => Self::Cartoon,
            Self::Cartoon => Self::BallAndStick,
            Self::BallAndStick => Self::Ribbon,
        }
    }

    /// Selector value, as used by the web page and options files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ribbon => "ribbon",
            Self::Cartoon => "cartoon",
            Self::BallAndStick => "ball_and_stick",
        }
    }

    /// Parse a selector value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ribbon" => Some(Self::Ribbon),
            "cartoon" => Some(Self::Cartoon),
            "ball_and_stick" | "ball-stick" | "atoms" => Some(Self::BallAndStick),
            _ => None,
        }
    }
}

/// How the scene is refreshed on each rebuild.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RebuildPolicy {
    /// Drop every primitive list and allocate fresh ones.
    #[default]
    Rebuild,
    /// Keep the existing lists when their layout is unchanged and only
    /// rewrite positions.
    InPlace,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Representation and visibility toggles.
pub struct DisplayOptions {
    /// Backbone representation.
    #[schemars(title = "Representation")]
    pub representation: Representation,
    /// Whether atom spheres are drawn.
    #[schemars(title = "Show Atoms")]
    pub show_atoms: bool,
    /// Whether bond lines are drawn.
    #[schemars(title = "Show Bonds")]
    pub show_bonds: bool,
    /// Scene refresh strategy.
    #[schemars(skip)]
    pub rebuild_policy: RebuildPolicy,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            representation: Representation::Ribbon,
            show_atoms: true,
            show_bonds: true,
            rebuild_policy: RebuildPolicy::Rebuild,
        }
    }
}
