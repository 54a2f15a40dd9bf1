use crate::court;
use crate::lineup::TeamLineup;

/// Advance a team one serve step: every player moves from zone `z` to zone
/// `z - 1`, wrapping from 1 to 6, so the zone 2 player becomes the next
/// server. Players land on the canonical spot of their new zone, dropping
/// any dragged offset.
pub fn rotate_team(lineup: &mut TeamLineup) {
    let side = lineup.side();
    let bases = court::bases(side);
    let players = lineup.players_mut();
    players.rotate_left(1);
    for (i, p) in players.iter_mut().enumerate() {
        p.zone = bases[i].zone;
        p.x = bases[i].x;
        p.y = bases[i].y;
    }
}

/// Rotate both teams in one step, as after a side-out drill.
pub fn rotate_both(home: &mut TeamLineup, away: &mut TeamLineup) {
    rotate_team(home);
    rotate_team(away);
}
