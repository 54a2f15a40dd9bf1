use crate::display;
use crate::lineup::TeamLineup;
use crate::models::{DisplayMode, Ruleset};

/// Key naming the home team's rotation under the current display mode, the
/// handle that serve-receive placements are saved and recalled by. Zone
/// order with one `label:Zn` pair per zone, prefixed `SR-` or `U13-`, and
/// suffixed `-LIB` when the home libero is on. Under-13 keys always carry
/// the raw role labels so a rotation keeps its identity when the libero flag
/// flips.
pub fn rotation_key(home: &TeamLineup, mode: &DisplayMode) -> String {
    let parts: Vec<String> = home
        .players()
        .iter()
        .map(|p| {
            let label = match mode.ruleset {
                Ruleset::Under13 => p.role.label(),
                Ruleset::Senior => display::display_role(p, mode),
            };
            format!("{}:Z{}", label, p.zone.number())
        })
        .collect();
    let prefix = match mode.ruleset {
        Ruleset::Senior => "SR",
        Ruleset::Under13 => "U13",
    };
    let suffix = if mode.ruleset == Ruleset::Senior && mode.libero_home {
        "-LIB"
    } else {
        ""
    };
    format!("{}-{}{}", prefix, parts.join("-"), suffix)
}

/// Expand a rotation key into a readable sentence for listings. Keys from
/// before the prefixes were introduced degrade to a plain role list.
pub fn describe_rotation_key(key: &str) -> String {
    if let Some(rest) = key.strip_prefix("U13-") {
        format!(
            "Under 13: {}",
            rest.replace(":Z", " in zone ").replace('-', ", ")
        )
    } else if let Some(rest) = key.strip_prefix("SR-") {
        let rest = rest.replace("-LIB", " (with Libero)");
        format!(
            "Senior: {}",
            rest.replace(":Z", " in zone ").replace('-', ", ")
        )
    } else {
        key.split('-')
            .map(|part| part.split(':').next().unwrap_or(part))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
