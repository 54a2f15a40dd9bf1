use crate::models::{DisplayMode, Player, Ruleset};

/// Label drawn on a player's marker. Role assignments never change; only the
/// label swaps when a libero covers a back-row middle or the under-13
/// vocabulary is active.
pub fn display_role(player: &Player, mode: &DisplayMode) -> &'static str {
    match mode.ruleset {
        Ruleset::Under13 => player.role.label_under13(),
        Ruleset::Senior => {
            if mode.libero_for(player.side) && player.zone.is_back_row() && player.role.is_middle()
            {
                "L"
            } else {
                player.role.label()
            }
        }
    }
}
