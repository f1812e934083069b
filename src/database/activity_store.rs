use std::collections::HashMap;

use parking_lot::Mutex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, RosterError, SeedError};
use crate::models::Activity;

/// In-memory roster of activities.
///
/// The set of activity names is fixed when the store is built; only the
/// participant lists change afterwards. Every activity sits behind its own
/// lock, so enroll/withdraw calls on one activity are serialized while calls
/// on different activities never contend.
pub struct ActivityStore {
    slots: Vec<ActivitySlot>,
    index: HashMap<String, usize>,
    enforce_capacity: bool,
    require_email: bool,
}

struct ActivitySlot {
    name: String,
    activity: Mutex<Activity>,
}

impl ActivityStore {
    pub fn new(seed: Vec<(String, Activity)>) -> std::result::Result<Self, SeedError> {
        let mut slots = Vec::with_capacity(seed.len());
        let mut index = HashMap::with_capacity(seed.len());
        for (name, activity) in seed {
            if index.contains_key(&name) {
                return Err(SeedError::DuplicateActivity(name));
            }
            index.insert(name.clone(), slots.len());
            slots.push(ActivitySlot {
                name,
                activity: Mutex::new(activity),
            });
        }
        Ok(Self {
            slots,
            index,
            enforce_capacity: false,
            require_email: false,
        })
    }

    /// Reject signups once `max_participants` is reached. Off by default.
    pub fn with_capacity_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    pub fn enforces_capacity(&self) -> bool {
        self.enforce_capacity
    }

    /// Reject blank (empty or whitespace-only) emails. Off by default.
    pub fn with_email_required(mut self, require: bool) -> Self {
        self.require_email = require;
        self
    }

    pub fn requires_email(&self) -> bool {
        self.require_email
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn list_all(&self) -> ActivityCatalog {
        let entries = self
            .slots
            .iter()
            .map(|slot| (slot.name.clone(), slot.activity.lock().clone()))
            .collect();
        ActivityCatalog { entries }
    }

    pub fn get(&self, activity_name: &str) -> Option<Activity> {
        self.slot(activity_name).map(|slot| slot.activity.lock().clone())
    }

    pub fn enroll(&self, activity_name: &str, email: &str) -> Result<()> {
        let slot = self.slot(activity_name).ok_or(RosterError::ActivityNotFound)?;
        if self.require_email && email.trim().is_empty() {
            return Err(RosterError::EmailRequired);
        }
        let mut activity = slot.activity.lock();
        if activity.has_participant(email) {
            return Err(RosterError::AlreadyEnrolled);
        }
        if self.enforce_capacity && activity.is_full() {
            return Err(RosterError::ActivityFull);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn withdraw(&self, activity_name: &str, email: &str) -> Result<()> {
        let slot = self.slot(activity_name).ok_or(RosterError::ActivityNotFound)?;
        let mut activity = slot.activity.lock();
        let pos = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RosterError::ParticipantNotFound)?;
        activity.participants.remove(pos);
        Ok(())
    }

    fn slot(&self, activity_name: &str) -> Option<&ActivitySlot> {
        self.index.get(activity_name).map(|&i| &self.slots[i])
    }
}

/// Point-in-time copy of the roster. Serializes as a JSON object keyed by
/// activity name, in seed order.
#[derive(Debug, Clone, Default)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn store() -> ActivityStore {
        ActivityStore::new(vec![
            (
                "Chess Club".to_string(),
                Activity::new("Chess", "Fridays", 2, &["michael@mergington.edu"]),
            ),
            (
                "Art Club".to_string(),
                Activity::new("Art", "Thursdays", 15, &[]),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn enroll_appends_in_order() {
        let store = store();
        store.enroll("Chess Club", "a@mergington.edu").unwrap();
        let chess = store.get("Chess Club").unwrap();
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "a@mergington.edu"]
        );
    }

    #[test]
    fn enroll_rejects_duplicates_and_unknown_activities() {
        let store = store();
        assert_eq!(
            store.enroll("Chess Club", "michael@mergington.edu"),
            Err(RosterError::AlreadyEnrolled)
        );
        assert_eq!(
            store.enroll("chess club", "x@mergington.edu"),
            Err(RosterError::ActivityNotFound)
        );
    }

    #[test]
    fn capacity_is_informational_unless_enforced() {
        let store = store();
        store.enroll("Chess Club", "a@mergington.edu").unwrap();
        store.enroll("Chess Club", "b@mergington.edu").unwrap();
        assert_eq!(store.get("Chess Club").unwrap().participants.len(), 3);

        let strict = self::store().with_capacity_enforcement(true);
        strict.enroll("Chess Club", "a@mergington.edu").unwrap();
        assert_eq!(
            strict.enroll("Chess Club", "b@mergington.edu"),
            Err(RosterError::ActivityFull)
        );
        // duplicate check wins over the capacity check
        assert_eq!(
            strict.enroll("Chess Club", "a@mergington.edu"),
            Err(RosterError::AlreadyEnrolled)
        );
    }

    #[test]
    fn withdraw_removes_only_the_given_email() {
        let store = store();
        store.enroll("Art Club", "a@mergington.edu").unwrap();
        store.enroll("Art Club", "b@mergington.edu").unwrap();
        store.withdraw("Art Club", "a@mergington.edu").unwrap();
        assert_eq!(
            store.get("Art Club").unwrap().participants,
            vec!["b@mergington.edu"]
        );
        assert_eq!(
            store.withdraw("Art Club", "a@mergington.edu"),
            Err(RosterError::ParticipantNotFound)
        );
        assert_eq!(
            store.withdraw("Nope", "b@mergington.edu"),
            Err(RosterError::ActivityNotFound)
        );
    }

    #[test]
    fn emails_compare_case_sensitively() {
        let store = store();
        store.enroll("Chess Club", "Michael@mergington.edu").unwrap();
        assert_eq!(
            store.withdraw("Chess Club", "MICHAEL@mergington.edu"),
            Err(RosterError::ParticipantNotFound)
        );
    }

    #[test]
    fn duplicate_seed_names_are_rejected() {
        let err = ActivityStore::new(vec![
            ("Chess Club".to_string(), Activity::new("a", "b", 1, &[])),
            ("Chess Club".to_string(), Activity::new("c", "d", 1, &[])),
        ])
        .err();
        assert!(matches!(err, Some(SeedError::DuplicateActivity(name)) if name == "Chess Club"));
    }

    #[test]
    fn blank_emails_are_accepted_unless_required() {
        let store = store();
        store.enroll("Art Club", "").unwrap();
        assert_eq!(store.get("Art Club").unwrap().participants, vec![""]);
        store.withdraw("Art Club", "").unwrap();

        let strict = self::store().with_email_required(true);
        assert_eq!(
            strict.enroll("Art Club", "  "),
            Err(RosterError::EmailRequired)
        );
        // an unknown activity is reported first, whatever the email
        assert_eq!(
            strict.enroll("Nope", ""),
            Err(RosterError::ActivityNotFound)
        );
        assert!(strict.get("Art Club").unwrap().participants.is_empty());
    }

    #[test]
    fn list_all_keeps_seed_order() {
        let catalog = store().list_all();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["Chess Club", "Art Club"]);
    }

    #[test]
    fn catalog_serializes_in_seed_order_with_camel_case_fields() {
        let json = serde_json::to_string(&store().list_all()).unwrap();
        let chess = json.find("\"Chess Club\"").unwrap();
        let art = json.find("\"Art Club\"").unwrap();
        assert!(chess < art);
        assert!(json.contains("\"maxParticipants\":2"));
        assert!(!json.contains("max_participants"));
    }

    #[test]
    fn concurrent_enrolls_lose_no_updates() {
        let store = Arc::new(store());
        let handles: Vec<_> = (0..16)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store
                            .enroll("Art Club", &format!("s{}-{}@mergington.edu", t, i))
                            .unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.get("Art Club").unwrap().participants.len(), 800);
    }
}
