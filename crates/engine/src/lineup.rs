use std::collections::BTreeSet;

use thiserror::Error;

use crate::models::{DisplayMode, Player, PlayerId, Role, Ruleset, TeamSide, Zone};
use crate::{court, display, faults, keys, rotation};

/// Players a team fields at once.
pub const TEAM_SIZE: usize = 6;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LineupError {
    #[error("{side} team must field exactly {expected} players, found {found}")]
    RosterSize {
        side: TeamSide,
        expected: usize,
        found: usize,
    },
    #[error("player {id} belongs to the {actual} team, not {expected}")]
    WrongSide {
        id: PlayerId,
        expected: TeamSide,
        actual: TeamSide,
    },
    #[error("{side} team has more than one player in zone {zone}")]
    DuplicateZone { side: TeamSide, zone: Zone },
    #[error("{side} team has no player in zone {zone}")]
    MissingZone { side: TeamSide, zone: Zone },
}

/// Six players of one side arranged as a zone arena: slot `i` always holds
/// the occupant of zone `i + 1`. Construction validates the arrangement, so
/// holding a `TeamLineup` means holding a legal one.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamLineup {
    side: TeamSide,
    players: [Player; TEAM_SIZE],
}

impl TeamLineup {
    /// Validate a free-form player list and order it into the zone arena.
    pub fn new(side: TeamSide, players: Vec<Player>) -> Result<TeamLineup, LineupError> {
        let found = players.len();
        let mut players: [Player; TEAM_SIZE] =
            players.try_into().map_err(|_| LineupError::RosterSize {
                side,
                expected: TEAM_SIZE,
                found,
            })?;
        for p in &players {
            if p.side != side {
                return Err(LineupError::WrongSide {
                    id: p.id,
                    expected: side,
                    actual: p.side,
                });
            }
        }
        players.sort_unstable_by_key(|p| p.zone);
        for (i, p) in players.iter().enumerate() {
            if p.zone != Zone::ALL[i] {
                // Sorted zones must read exactly 1 through 6. The first
                // mismatch is either a doubled zone or a gap.
                return Err(if i > 0 && players[i - 1].zone == p.zone {
                    LineupError::DuplicateZone { side, zone: p.zone }
                } else {
                    LineupError::MissingZone {
                        side,
                        zone: Zone::ALL[i],
                    }
                });
            }
        }
        Ok(TeamLineup { side, players })
    }

    /// Fresh roster on the canonical spots, roles dealt in serve order and
    /// ids counted up from `first_id`.
    pub fn default_roster(side: TeamSide, first_id: u32) -> TeamLineup {
        let bases = court::bases(side);
        let players: [Player; TEAM_SIZE] = std::array::from_fn(|i| {
            let base = bases[i];
            Player {
                id: PlayerId(first_id + i as u32),
                side,
                zone: base.zone,
                x: base.x,
                y: base.y,
                role: Role::SERVE_ORDER[i],
            }
        });
        TeamLineup { side, players }
    }

    pub fn side(&self) -> TeamSide {
        self.side
    }

    /// Players in zone order, zone 1 first.
    pub fn players(&self) -> &[Player; TEAM_SIZE] {
        &self.players
    }

    pub fn player_in(&self, zone: Zone) -> &Player {
        &self.players[zone.index()]
    }

    pub fn player_by_id(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub(crate) fn players_mut(&mut self) -> &mut [Player; TEAM_SIZE] {
        &mut self.players
    }

    /// Drag a player to a new spot. Returns false when the id is not on this
    /// team. Free placement is allowed; overlap faults are reported, not
    /// prevented.
    pub fn move_player(&mut self, id: PlayerId, x: f64, y: f64) -> bool {
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.x = x;
                p.y = y;
                true
            }
            None => false,
        }
    }

    /// Snap every player back to the canonical spot of their current zone.
    pub fn reset_positions(&mut self) {
        let side = self.side;
        for p in self.players.iter_mut() {
            let base = court::base_position(side, p.zone);
            p.x = base.x;
            p.y = base.y;
        }
    }

    /// Ids of players currently violating the overlap rules for this side's
    /// field.
    pub fn faults(&self) -> BTreeSet<PlayerId> {
        faults::find_faults(&self.players, self.side.field_side())
    }
}

/// Everything the board shows: both lineups and the display switches. The
/// embedding view owns a single instance and mutates it through these
/// methods; the engine holds no state of its own.
#[derive(Debug, Clone)]
pub struct CourtState {
    pub home: TeamLineup,
    pub away: TeamLineup,
    pub mode: DisplayMode,
}

impl CourtState {
    /// Both teams on their canonical spots. Home takes ids 1 to 6, away 7 to
    /// 12.
    pub fn new() -> CourtState {
        CourtState {
            home: TeamLineup::default_roster(TeamSide::Home, 1),
            away: TeamLineup::default_roster(TeamSide::Away, 7),
            mode: DisplayMode::default(),
        }
    }

    pub fn team(&self, side: TeamSide) -> &TeamLineup {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut TeamLineup {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    /// Rotate one team a serve step.
    pub fn rotate(&mut self, side: TeamSide) {
        rotation::rotate_team(self.team_mut(side));
    }

    /// Rotate both teams together.
    pub fn rotate_both(&mut self) {
        rotation::rotate_both(&mut self.home, &mut self.away);
    }

    /// Drag whichever team's player carries this id.
    pub fn move_player(&mut self, id: PlayerId, x: f64, y: f64) -> bool {
        self.home.move_player(id, x, y) || self.away.move_player(id, x, y)
    }

    pub fn reset_positions(&mut self, side: TeamSide) {
        self.team_mut(side).reset_positions();
    }

    pub fn toggle_libero(&mut self, side: TeamSide) {
        self.mode.toggle_libero(side);
    }

    pub fn set_ruleset(&mut self, ruleset: Ruleset) {
        self.mode.ruleset = ruleset;
    }

    /// All twelve players, home first.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.home.players().iter().chain(self.away.players().iter())
    }

    pub fn player_by_id(&self, id: PlayerId) -> Option<&Player> {
        self.home.player_by_id(id).or_else(|| self.away.player_by_id(id))
    }

    /// Marker label for a player under the current display mode.
    pub fn display_role(&self, player: &Player) -> &'static str {
        display::display_role(player, &self.mode)
    }

    /// Overlap faults across the whole board.
    pub fn faults(&self) -> BTreeSet<PlayerId> {
        let mut all = self.home.faults();
        all.extend(self.away.faults());
        all
    }

    /// Key identifying the home team's current rotation, used to file saved
    /// serve-receive placements.
    pub fn rotation_key(&self) -> String {
        keys::rotation_key(&self.home, &self.mode)
    }
}

impl Default for CourtState {
    fn default() -> Self {
        CourtState::new()
    }
}
