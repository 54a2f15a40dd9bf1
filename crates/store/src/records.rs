use serde::{Deserialize, Serialize};
use uuid::Uuid;
use volley_engine::lineup::{CourtState, LineupError, TeamLineup};
use volley_engine::models::{Player, PlayerId, Role, Zone};

use crate::error::StoreError;

/// One saved slot of a formation: where a role stood, in which zone. Player
/// ids are session-local and deliberately not recorded; application matches
/// slots to live players by role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormationSlot {
    pub zone: Zone,
    pub x: f64,
    pub y: f64,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A named snapshot of both lineups, grouped under a team name for the
/// picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Formation {
    pub id: Uuid,
    pub name: String,
    pub team_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub home_positions: Vec<FormationSlot>,
    pub away_positions: Vec<FormationSlot>,
    pub created_at: String,
    pub updated_at: String,
}

impl Formation {
    /// Snapshot the current board under a name.
    pub fn capture(
        name: &str,
        team_name: &str,
        description: Option<&str>,
        state: &CourtState,
    ) -> Formation {
        let now = chrono::Utc::now().to_rfc3339();
        Formation {
            id: Uuid::new_v4(),
            name: name.to_string(),
            team_name: team_name.to_string(),
            description: description.map(str::to_string),
            home_positions: slots_of(&state.home),
            away_positions: slots_of(&state.away),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Lay this formation onto the board. Slots are matched to live players
    /// by role; any role the snapshot does not mention keeps its current
    /// spot. Both teams revalidate before anything is committed, so a
    /// corrupt snapshot leaves the board untouched.
    pub fn apply_to(&self, state: &mut CourtState) -> Result<(), LineupError> {
        let home = patched(&state.home, &self.home_positions)?;
        let away = patched(&state.away, &self.away_positions)?;
        state.home = home;
        state.away = away;
        Ok(())
    }
}

fn slots_of(lineup: &TeamLineup) -> Vec<FormationSlot> {
    lineup
        .players()
        .iter()
        .map(|p| FormationSlot {
            zone: p.zone,
            x: p.x,
            y: p.y,
            role: p.role,
            name: None,
        })
        .collect()
}

fn patched(lineup: &TeamLineup, slots: &[FormationSlot]) -> Result<TeamLineup, LineupError> {
    let mut players: Vec<Player> = lineup.players().to_vec();
    for p in players.iter_mut() {
        if let Some(slot) = slots.iter().find(|s| s.role == p.role) {
            p.zone = slot.zone;
            p.x = slot.x;
            p.y = slot.y;
        }
    }
    TeamLineup::new(lineup.side(), players)
}

/// A bare court coordinate inside a reception record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Spot {
    pub x: f64,
    pub y: f64,
}

/// Saved serve-receive placement of the home team for one rotation, filed
/// under the rotation key. Positions are stored in roster order, ascending
/// player id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reception {
    pub id: Uuid,
    pub rotation_key: String,
    pub positions: Vec<Spot>,
    pub created_at: String,
    pub updated_at: String,
}

impl Reception {
    /// Record where the home players stand right now, keyed by the current
    /// rotation.
    pub fn capture(state: &CourtState) -> Reception {
        let now = chrono::Utc::now().to_rfc3339();
        let mut players = state.home.players().to_vec();
        players.sort_unstable_by_key(|p| p.id);
        Reception {
            id: Uuid::new_v4(),
            rotation_key: state.rotation_key(),
            positions: players.iter().map(|p| Spot { x: p.x, y: p.y }).collect(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Restore the saved placement onto the home team, pairing positions to
    /// players in roster order. Zones are untouched; this only moves
    /// markers.
    pub fn apply_to(&self, state: &mut CourtState) -> Result<(), StoreError> {
        let mut ids: Vec<PlayerId> = state.home.players().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        if self.positions.len() != ids.len() {
            return Err(StoreError::ReceptionSize {
                expected: ids.len(),
                found: self.positions.len(),
            });
        }
        for (id, spot) in ids.into_iter().zip(&self.positions) {
            state.home.move_player(id, spot.x, spot.y);
        }
        Ok(())
    }
}
