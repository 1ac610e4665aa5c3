//! Collectible resource kinds owned by the island engine.
use serde::{Deserialize, Serialize};

/// A kind of collectible resource, as declared by the simulation engine.
///
/// Primary kinds are harvested directly from the map; manufactured kinds are
/// transformed from primaries. The report tallies both without distinguishing
/// the two classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceKind {
    Fish,
    Flower,
    Fruits,
    Fur,
    Ore,
    Quartz,
    Wood,
    Glass,
    Ingot,
    Leather,
    Plank,
    Rum,
}

impl ResourceKind {
    /// Engine-facing uppercase name, stable across releases.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fish => "FISH",
            Self::Flower => "FLOWER",
            Self::Fruits => "FRUITS",
            Self::Fur => "FUR",
            Self::Ore => "ORE",
            Self::Quartz => "QUARTZ",
            Self::Wood => "WOOD",
            Self::Glass => "GLASS",
            Self::Ingot => "INGOT",
            Self::Leather => "LEATHER",
            Self::Plank => "PLANK",
            Self::Rum => "RUM",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
