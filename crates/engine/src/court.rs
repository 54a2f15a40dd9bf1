/// Court geometry and canonical zone positions.
///
/// The court is modelled as a 900x450 horizontal board, net in the middle.
/// Home occupies the left half, away the right. Every zone has a canonical
/// snap position per side; rotation always lands players back on these.
// Board dimensions in court units
pub const COURT_WIDTH: f64 = 900.0;
pub const COURT_HEIGHT: f64 = 450.0;

// Net and three-meter attack lines
pub const CENTER_LINE_X: f64 = 450.0;
pub const LEFT_ATTACK_LINE_X: f64 = 300.0;
pub const RIGHT_ATTACK_LINE_X: f64 = 600.0;

// Responsive display bounds
pub const MAX_DISPLAY_WIDTH: f64 = 1200.0;
pub const MIN_DISPLAY_SCALE: f64 = 0.3;
pub const MAX_DISPLAY_SCALE: f64 = 1.2;

use crate::models::{TeamSide, Zone};

/// Which horizontal half of the court a team occupies. Overlap rules are
/// written for the left field and mirrored for the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSide {
    Left,
    Right,
}

impl TeamSide {
    pub fn field_side(self) -> FieldSide {
        match self {
            TeamSide::Home => FieldSide::Left,
            TeamSide::Away => FieldSide::Right,
        }
    }
}

/// Canonical snap spot for one zone on one side of the net.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePosition {
    pub zone: Zone,
    pub x: f64,
    pub y: f64,
}

const fn base(zone: Zone, x: f64, y: f64) -> BasePosition {
    BasePosition { zone, x, y }
}

/// Home (left field) zone spots, indexed by zone. Zone 1 sits back right of
/// the serving team, which on the left field is the bottom-left quadrant.
pub const HOME_BASES: [BasePosition; 6] = [
    base(Zone::Z1, 150.0, 370.0),
    base(Zone::Z2, 350.0, 370.0),
    base(Zone::Z3, 350.0, 250.0),
    base(Zone::Z4, 350.0, 100.0),
    base(Zone::Z5, 150.0, 100.0),
    base(Zone::Z6, 150.0, 250.0),
];

/// Away (right field) zone spots. The columns mirror the home table across
/// the net exactly. The y values draw on the same three rows with the outer
/// rows swapped, which puts away's zone 1 back right in the top-right
/// quadrant.
pub const AWAY_BASES: [BasePosition; 6] = [
    base(Zone::Z1, 750.0, 100.0),
    base(Zone::Z2, 550.0, 100.0),
    base(Zone::Z3, 550.0, 250.0),
    base(Zone::Z4, 550.0, 370.0),
    base(Zone::Z5, 750.0, 370.0),
    base(Zone::Z6, 750.0, 250.0),
];

pub fn bases(side: TeamSide) -> &'static [BasePosition; 6] {
    match side {
        TeamSide::Home => &HOME_BASES,
        TeamSide::Away => &AWAY_BASES,
    }
}

/// Canonical spot for a zone on the given side.
pub fn base_position(side: TeamSide, zone: Zone) -> BasePosition {
    bases(side)[zone.index()]
}

/// Scale factor for rendering the board into a container of the given width.
/// Clamped so the board never becomes unreadably small or comically large.
pub fn display_scale(container_width: f64) -> f64 {
    let width = container_width.min(MAX_DISPLAY_WIDTH);
    (width / COURT_WIDTH).clamp(MIN_DISPLAY_SCALE, MAX_DISPLAY_SCALE)
}

/// Convert a court coordinate to display pixels.
pub fn to_display(v: f64, scale: f64) -> f64 {
    v * scale
}

/// Convert a display pixel coordinate back to court units. `scale` must be
/// positive, as produced by [`display_scale`].
pub fn to_court(v: f64, scale: f64) -> f64 {
    v / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tables_are_zone_ordered() {
        for (i, b) in HOME_BASES.iter().enumerate() {
            assert_eq!(b.zone.index(), i);
        }
        for (i, b) in AWAY_BASES.iter().enumerate() {
            assert_eq!(b.zone.index(), i);
        }
    }

    #[test]
    fn test_sides_stay_on_their_half() {
        for b in &HOME_BASES {
            assert!(b.x < CENTER_LINE_X, "home zone {} crossed the net", b.zone);
        }
        for b in &AWAY_BASES {
            assert!(b.x > CENTER_LINE_X, "away zone {} crossed the net", b.zone);
        }
    }

    // Both tables draw their y values from these rows. The bench view swaps
    // the outer rows and keeps the middle; it is not a reflection through
    // mid-height.
    fn mirrored_row(y: f64) -> f64 {
        let rows = [100.0, 250.0, 370.0];
        let rank = rows.iter().position(|&r| (r - y).abs() < 1e-9).unwrap();
        rows[rows.len() - 1 - rank]
    }

    #[test]
    fn test_away_table_mirrors_home() {
        for zone in Zone::ALL {
            let h = base_position(TeamSide::Home, zone);
            let a = base_position(TeamSide::Away, zone);
            assert!((a.x - (COURT_WIDTH - h.x)).abs() < 1e-9);
            assert!((a.y - mirrored_row(h.y)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_base_position_lookup() {
        let b = base_position(TeamSide::Home, Zone::Z4);
        assert!((b.x - 350.0).abs() < 1e-9);
        assert!((b.y - 100.0).abs() < 1e-9);
        let b = base_position(TeamSide::Away, Zone::Z1);
        assert!((b.x - 750.0).abs() < 1e-9);
        assert!((b.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_scale_clamps() {
        assert!((display_scale(900.0) - 1.0).abs() < 1e-9);
        assert!((display_scale(100.0) - MIN_DISPLAY_SCALE).abs() < 1e-9);
        assert!((display_scale(1000.0) - 1000.0 / COURT_WIDTH).abs() < 1e-9);
        // The width cap alone would still give 4/3, so oversized containers
        // pin to the scale ceiling
        assert!((display_scale(5000.0) - MAX_DISPLAY_SCALE).abs() < 1e-9);
    }

    #[test]
    fn test_display_roundtrip() {
        let scale = display_scale(720.0);
        let px = to_display(350.0, scale);
        assert!((to_court(px, scale) - 350.0).abs() < 1e-9);
    }
}
