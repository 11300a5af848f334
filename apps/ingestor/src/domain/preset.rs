use serde::{Deserialize, Serialize};

/// Match category derived from team and participant counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Duel,
    Team,
    Ffa,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Duel => "duel",
            Preset::Team => "team",
            Preset::Ffa => "ffa",
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ally-team count is checked before participant count.
/// `participants` counts players plus AIs; spectators never count.
pub fn classify(ally_teams: usize, participants: usize) -> Preset {
    if ally_teams > 2 {
        Preset::Ffa
    } else if participants > 2 {
        Preset::Team
    } else {
        Preset::Duel
    }
}
