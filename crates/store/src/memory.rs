use uuid::Uuid;

use crate::records::{Formation, Reception};

/// In-memory catalogue of saved formations and serve-receive placements.
/// Listings come back newest first, the way the pickers show them.
#[derive(Debug, Default)]
pub struct MemoryStore {
    formations: Vec<Formation>,
    receptions: Vec<Reception>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// Insert a formation, or replace the one already carrying its id.
    pub fn save_formation(&mut self, formation: Formation) -> Uuid {
        let id = formation.id;
        tracing::debug!(%id, name = %formation.name, "Saving formation");
        match self.formations.iter_mut().find(|f| f.id == id) {
            Some(existing) => *existing = formation,
            None => self.formations.push(formation),
        }
        id
    }

    pub fn formation(&self, id: Uuid) -> Option<&Formation> {
        self.formations.iter().find(|f| f.id == id)
    }

    /// All formations, newest first.
    pub fn formations(&self) -> Vec<&Formation> {
        // RFC 3339 timestamps with a fixed offset sort lexicographically
        let mut all: Vec<&Formation> = self.formations.iter().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    /// One team's formations, newest first.
    pub fn formations_for_team(&self, team_name: &str) -> Vec<&Formation> {
        self.formations()
            .into_iter()
            .filter(|f| f.team_name == team_name)
            .collect()
    }

    /// Every team name on record, sorted and deduplicated.
    pub fn team_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .formations
            .iter()
            .map(|f| f.team_name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn delete_formation(&mut self, id: Uuid) -> bool {
        let before = self.formations.len();
        self.formations.retain(|f| f.id != id);
        self.formations.len() < before
    }

    /// Delete a whole team's formations, returning how many went.
    pub fn delete_team(&mut self, team_name: &str) -> usize {
        let before = self.formations.len();
        self.formations.retain(|f| f.team_name != team_name);
        before - self.formations.len()
    }

    pub fn formation_count(&self) -> usize {
        self.formations.len()
    }

    pub fn clear_formations(&mut self) {
        self.formations.clear();
    }

    /// Insert a placement, or refresh the one already filed under the same
    /// rotation key. Refreshing keeps the original id and creation time and
    /// takes the incoming positions and `updated_at`.
    pub fn save_reception(&mut self, reception: Reception) -> Uuid {
        match self
            .receptions
            .iter_mut()
            .find(|r| r.rotation_key == reception.rotation_key)
        {
            Some(existing) => {
                existing.positions = reception.positions;
                existing.updated_at = reception.updated_at;
                existing.id
            }
            None => {
                let id = reception.id;
                self.receptions.push(reception);
                id
            }
        }
    }

    pub fn reception(&self, rotation_key: &str) -> Option<&Reception> {
        self.receptions
            .iter()
            .find(|r| r.rotation_key == rotation_key)
    }

    /// All placements, newest first.
    pub fn receptions(&self) -> Vec<&Reception> {
        let mut all: Vec<&Reception> = self.receptions.iter().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    pub fn delete_reception(&mut self, rotation_key: &str) -> bool {
        let before = self.receptions.len();
        self.receptions.retain(|r| r.rotation_key != rotation_key);
        self.receptions.len() < before
    }

    pub fn reception_count(&self) -> usize {
        self.receptions.len()
    }

    pub fn clear_receptions(&mut self) {
        self.receptions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Spot;

    /// Formation with fixed timestamps so ordering is deterministic.
    fn formation(name: &str, team: &str, created_at: &str) -> Formation {
        Formation {
            id: Uuid::new_v4(),
            name: name.to_string(),
            team_name: team.to_string(),
            description: None,
            home_positions: Vec::new(),
            away_positions: Vec::new(),
            created_at: created_at.to_string(),
            updated_at: created_at.to_string(),
        }
    }

    fn reception(key: &str, created_at: &str) -> Reception {
        Reception {
            id: Uuid::new_v4(),
            rotation_key: key.to_string(),
            positions: vec![Spot { x: 0.0, y: 0.0 }; 6],
            created_at: created_at.to_string(),
            updated_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_save_get_delete_formation() {
        let mut store = MemoryStore::new();
        let id = store.save_formation(formation("base", "Blue", "2024-01-01T10:00:00+00:00"));
        assert_eq!(store.formation_count(), 1);
        assert_eq!(store.formation(id).unwrap().name, "base");
        assert!(store.delete_formation(id));
        assert!(!store.delete_formation(id));
        assert_eq!(store.formation_count(), 0);
    }

    #[test]
    fn test_saving_the_same_id_replaces() {
        let mut store = MemoryStore::new();
        let mut f = formation("first", "Blue", "2024-01-01T10:00:00+00:00");
        let id = store.save_formation(f.clone());
        f.name = "second".to_string();
        assert_eq!(store.save_formation(f), id);
        assert_eq!(store.formation_count(), 1);
        assert_eq!(store.formation(id).unwrap().name, "second");
    }

    #[test]
    fn test_formations_list_newest_first() {
        let mut store = MemoryStore::new();
        store.save_formation(formation("old", "Blue", "2024-01-01T10:00:00+00:00"));
        store.save_formation(formation("new", "Blue", "2024-03-01T10:00:00+00:00"));
        store.save_formation(formation("mid", "Red", "2024-02-01T10:00:00+00:00"));
        let names: Vec<&str> = store.formations().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_formations_for_team_filters() {
        let mut store = MemoryStore::new();
        store.save_formation(formation("a", "Blue", "2024-01-01T10:00:00+00:00"));
        store.save_formation(formation("b", "Red", "2024-01-02T10:00:00+00:00"));
        store.save_formation(formation("c", "Blue", "2024-01-03T10:00:00+00:00"));
        let names: Vec<&str> = store
            .formations_for_team("Blue")
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["c", "a"]);
    }

    #[test]
    fn test_team_names_sorted_and_deduplicated() {
        let mut store = MemoryStore::new();
        store.save_formation(formation("a", "Red", "2024-01-01T10:00:00+00:00"));
        store.save_formation(formation("b", "Blue", "2024-01-02T10:00:00+00:00"));
        store.save_formation(formation("c", "Red", "2024-01-03T10:00:00+00:00"));
        assert_eq!(store.team_names(), vec!["Blue", "Red"]);
    }

    #[test]
    fn test_delete_team_reports_how_many() {
        let mut store = MemoryStore::new();
        store.save_formation(formation("a", "Red", "2024-01-01T10:00:00+00:00"));
        store.save_formation(formation("b", "Blue", "2024-01-02T10:00:00+00:00"));
        store.save_formation(formation("c", "Red", "2024-01-03T10:00:00+00:00"));
        assert_eq!(store.delete_team("Red"), 2);
        assert_eq!(store.delete_team("Red"), 0);
        assert_eq!(store.formation_count(), 1);
    }

    #[test]
    fn test_reception_upsert_keeps_identity() {
        let mut store = MemoryStore::new();
        let first = reception("SR-P:Z1-S1:Z2-C2:Z3-O:Z4-S2:Z5-C1:Z6", "2024-01-01T10:00:00+00:00");
        let first_id = store.save_reception(first);

        let mut second = reception("SR-P:Z1-S1:Z2-C2:Z3-O:Z4-S2:Z5-C1:Z6", "2024-02-01T10:00:00+00:00");
        second.positions[0] = Spot { x: 42.0, y: 7.0 };
        let second_id = store.save_reception(second);

        assert_eq!(first_id, second_id);
        assert_eq!(store.reception_count(), 1);
        let stored = store.reception("SR-P:Z1-S1:Z2-C2:Z3-O:Z4-S2:Z5-C1:Z6").unwrap();
        assert_eq!(stored.created_at, "2024-01-01T10:00:00+00:00");
        assert_eq!(stored.updated_at, "2024-02-01T10:00:00+00:00");
        assert!((stored.positions[0].x - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_distinct_keys_file_separately() {
        let mut store = MemoryStore::new();
        store.save_reception(reception("SR-A", "2024-01-01T10:00:00+00:00"));
        store.save_reception(reception("SR-B", "2024-02-01T10:00:00+00:00"));
        assert_eq!(store.reception_count(), 2);
        let keys: Vec<&str> = store
            .receptions()
            .iter()
            .map(|r| r.rotation_key.as_str())
            .collect();
        assert_eq!(keys, vec!["SR-B", "SR-A"]);
    }

    #[test]
    fn test_delete_reception_by_key() {
        let mut store = MemoryStore::new();
        store.save_reception(reception("SR-A", "2024-01-01T10:00:00+00:00"));
        assert!(store.delete_reception("SR-A"));
        assert!(!store.delete_reception("SR-A"));
        assert!(store.reception("SR-A").is_none());
    }
}
