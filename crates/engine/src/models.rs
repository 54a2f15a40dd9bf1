use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable player identity. Assigned once when a roster is created and never
/// reused while the session lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which bench a player belongs to. Home always plays the left half of the
/// court, away the right half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

impl std::fmt::Display for TeamSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSide::Home => write!(f, "home"),
            TeamSide::Away => write!(f, "away"),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("zone must be between 1 and 6, got {0}")]
pub struct InvalidZone(pub u8);

/// Court zone in serve-rotation numbering. Zone 1 is the serving position
/// (back right for the home side), zones 2 through 4 are the front row and
/// zones 5 and 6 complete the back row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Zone {
    Z1 = 1,
    Z2 = 2,
    Z3 = 3,
    Z4 = 4,
    Z5 = 5,
    Z6 = 6,
}

impl Zone {
    /// All zones in ascending order.
    pub const ALL: [Zone; 6] = [Zone::Z1, Zone::Z2, Zone::Z3, Zone::Z4, Zone::Z5, Zone::Z6];

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based arena index for this zone.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn is_back_row(self) -> bool {
        matches!(self, Zone::Z1 | Zone::Z5 | Zone::Z6)
    }

    pub fn is_front_row(self) -> bool {
        !self.is_back_row()
    }
}

impl From<Zone> for u8 {
    fn from(zone: Zone) -> u8 {
        zone.number()
    }
}

impl TryFrom<u8> for Zone {
    type Error = InvalidZone;

    fn try_from(value: u8) -> Result<Zone, InvalidZone> {
        match value {
            1 => Ok(Zone::Z1),
            2 => Ok(Zone::Z2),
            3 => Ok(Zone::Z3),
            4 => Ok(Zone::Z4),
            5 => Ok(Zone::Z5),
            6 => Ok(Zone::Z6),
            other => Err(InvalidZone(other)),
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Playing role, fixed for the lifetime of a player. The serialized labels
/// match the markers drawn on court: P setter, S1/S2 outside hitters, C1/C2
/// middle blockers, O opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "P")]
    Setter,
    #[serde(rename = "S1")]
    Outside1,
    #[serde(rename = "C2")]
    Middle2,
    #[serde(rename = "O")]
    Opposite,
    #[serde(rename = "S2")]
    Outside2,
    #[serde(rename = "C1")]
    Middle1,
}

impl Role {
    /// Roles in serve order, zone 1 through zone 6, as dealt to a fresh
    /// roster.
    pub const SERVE_ORDER: [Role; 6] = [
        Role::Setter,
        Role::Outside1,
        Role::Middle2,
        Role::Opposite,
        Role::Outside2,
        Role::Middle1,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Setter => "P",
            Role::Outside1 => "S1",
            Role::Middle2 => "C2",
            Role::Opposite => "O",
            Role::Outside2 => "S2",
            Role::Middle1 => "C1",
        }
    }

    /// Under-13 marker label. Youth play does not use specialised roles, so
    /// markers show the canonical zone the player attacks from instead.
    pub fn label_under13(self) -> &'static str {
        match self {
            Role::Setter | Role::Opposite => "P",
            Role::Outside1 | Role::Outside2 => "Z4",
            Role::Middle2 | Role::Middle1 => "Z2",
        }
    }

    pub fn is_middle(self) -> bool {
        matches!(self, Role::Middle1 | Role::Middle2)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One player marker on the board. `x` and `y` are court coordinates, `zone`
/// tracks the serve rotation and `role` never changes once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub side: TeamSide,
    pub zone: Zone,
    pub x: f64,
    pub y: f64,
    pub role: Role,
}

/// Label vocabulary in force for the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    Senior,
    Under13,
}

/// Display switches owned by the session. Libero flags are tracked per side
/// and only have an effect under senior rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMode {
    pub ruleset: Ruleset,
    pub libero_home: bool,
    pub libero_away: bool,
}

impl DisplayMode {
    pub fn libero_for(&self, side: TeamSide) -> bool {
        match side {
            TeamSide::Home => self.libero_home,
            TeamSide::Away => self.libero_away,
        }
    }

    pub fn toggle_libero(&mut self, side: TeamSide) {
        match side {
            TeamSide::Home => self.libero_home = !self.libero_home,
            TeamSide::Away => self.libero_away = !self.libero_away,
        }
    }
}

impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode {
            ruleset: Ruleset::Senior,
            libero_home: false,
            libero_away: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_round_trips_through_u8() {
        for n in 1..=6u8 {
            let zone = Zone::try_from(n).unwrap();
            assert_eq!(zone.number(), n);
            assert_eq!(zone.index(), (n - 1) as usize);
        }
        assert_eq!(Zone::try_from(0), Err(InvalidZone(0)));
        assert_eq!(Zone::try_from(7), Err(InvalidZone(7)));
    }

    #[test]
    fn test_back_row_is_one_five_six() {
        let back: Vec<Zone> = Zone::ALL.into_iter().filter(|z| z.is_back_row()).collect();
        assert_eq!(back, vec![Zone::Z1, Zone::Z5, Zone::Z6]);
        // Front row is exactly the rest
        let front: Vec<Zone> = Zone::ALL.into_iter().filter(|z| z.is_front_row()).collect();
        assert_eq!(front, vec![Zone::Z2, Zone::Z3, Zone::Z4]);
    }

    #[test]
    fn test_serde_spellings_stay_compact() {
        assert_eq!(serde_json::to_string(&Zone::Z3).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Role::Middle1).unwrap(), "\"C1\"");
        assert_eq!(serde_json::to_string(&TeamSide::Away).unwrap(), "\"away\"");
        assert_eq!(serde_json::to_string(&Ruleset::Under13).unwrap(), "\"under13\"");
        assert_eq!(serde_json::from_str::<Role>("\"S2\"").unwrap(), Role::Outside2);
    }

    #[test]
    fn test_serve_order_labels() {
        let labels: Vec<&str> = Role::SERVE_ORDER.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["P", "S1", "C2", "O", "S2", "C1"]);
    }
}
