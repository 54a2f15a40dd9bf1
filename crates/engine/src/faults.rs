use std::collections::BTreeSet;

use crate::court::FieldSide;
use crate::models::{Player, PlayerId, Zone};

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy)]
enum Cmp {
    Greater,
    Less,
}

impl Cmp {
    fn flipped(self) -> Cmp {
        match self {
            Cmp::Greater => Cmp::Less,
            Cmp::Less => Cmp::Greater,
        }
    }
}

/// One pairwise ordering constraint: the offender is at fault when its
/// coordinate on `axis` compares `fault_when` against the other zone's.
struct OverlapRule {
    offender: Zone,
    axis: Axis,
    fault_when: Cmp,
    other: Zone,
}

const fn rule(offender: Zone, axis: Axis, fault_when: Cmp, other: Zone) -> OverlapRule {
    OverlapRule {
        offender,
        axis,
        fault_when,
        other,
    }
}

/// Serve-order overlap constraints, written for the left-field orientation.
/// The right field reads front/back and left/right the opposite way on both
/// axes, so every comparison flips.
const OVERLAP_RULES: [OverlapRule; 14] = [
    rule(Zone::Z1, Axis::X, Cmp::Greater, Zone::Z2),
    rule(Zone::Z1, Axis::Y, Cmp::Less, Zone::Z6),
    rule(Zone::Z2, Axis::X, Cmp::Less, Zone::Z1),
    rule(Zone::Z2, Axis::Y, Cmp::Less, Zone::Z3),
    rule(Zone::Z3, Axis::X, Cmp::Less, Zone::Z6),
    rule(Zone::Z3, Axis::Y, Cmp::Less, Zone::Z4),
    rule(Zone::Z3, Axis::Y, Cmp::Greater, Zone::Z2),
    rule(Zone::Z4, Axis::X, Cmp::Less, Zone::Z5),
    rule(Zone::Z4, Axis::Y, Cmp::Greater, Zone::Z3),
    rule(Zone::Z5, Axis::Y, Cmp::Greater, Zone::Z6),
    rule(Zone::Z5, Axis::X, Cmp::Greater, Zone::Z4),
    rule(Zone::Z6, Axis::Y, Cmp::Less, Zone::Z5),
    rule(Zone::Z6, Axis::X, Cmp::Greater, Zone::Z3),
    rule(Zone::Z6, Axis::Y, Cmp::Greater, Zone::Z1),
];

/// Ids of every player violating an overlap constraint for the given field
/// orientation. Needs exactly one player per zone to judge anything; with a
/// zone missing or doubled the arrangement is not checkable and the result
/// is empty.
pub fn find_faults(players: &[Player], field: FieldSide) -> BTreeSet<PlayerId> {
    let mut faults = BTreeSet::new();
    let Some(by_zone) = index_by_zone(players) else {
        return faults;
    };
    for r in &OVERLAP_RULES {
        let offender = by_zone[r.offender.index()];
        let other = by_zone[r.other.index()];
        let (a, b) = match r.axis {
            Axis::X => (offender.x, other.x),
            Axis::Y => (offender.y, other.y),
        };
        let fault_when = match field {
            FieldSide::Left => r.fault_when,
            FieldSide::Right => r.fault_when.flipped(),
        };
        let violated = match fault_when {
            Cmp::Greater => a > b,
            Cmp::Less => a < b,
        };
        if violated {
            faults.insert(offender.id);
        }
    }
    faults
}

fn index_by_zone(players: &[Player]) -> Option<[&Player; 6]> {
    let mut slots: [Option<&Player>; 6] = [None; 6];
    for p in players {
        let slot = &mut slots[p.zone.index()];
        if slot.is_some() {
            return None;
        }
        *slot = Some(p);
    }
    Some([slots[0]?, slots[1]?, slots[2]?, slots[3]?, slots[4]?, slots[5]?])
}
