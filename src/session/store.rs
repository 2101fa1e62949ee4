//! Session table for the HTTP server

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use super::SelectionState;
use crate::contact::{ContactForm, Notice};

/// Upper bound on live sessions; the least recently seen is evicted past it
const MAX_SESSIONS: usize = 10_000;

/// Everything the server remembers about one visitor
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub selection: SelectionState,
    /// One-shot contact form outcome, consumed by the next render
    pub notice: Option<Notice>,
    /// Values of a rejected submission, re-filled on the next render
    pub draft: Option<ContactForm>,
}

struct Slot {
    session: Session,
    last_seen: Instant,
}

impl Slot {
    fn fresh(now: Instant) -> Self {
        Self {
            session: Session::default(),
            last_seen: now,
        }
    }
}

/// Sessions keyed by the id stored in the visitor's cookie.
///
/// Sessions idle for longer than the ttl are dropped, which resets the
/// visitor to a fresh state.
pub struct SessionStore {
    slots: Mutex<HashMap<String, Slot>>,
    ttl: Duration,
    capacity: usize,
}

impl SessionStore {
    /// Create an empty store
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, MAX_SESSIONS)
    }

    /// Create an empty store holding at most `capacity` sessions
    pub fn with_capacity(ttl: Duration, capacity: usize) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            ttl,
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Slot>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Resolve the cookie's id to a live session, creating one if needed.
    ///
    /// Returns the id to use and whether it is new (and must be sent back).
    pub fn resolve(&self, cookie_id: Option<&str>) -> anyhow::Result<(String, bool)> {
        let now = Instant::now();
        let mut slots = self.lock();

        if let Some(id) = cookie_id {
            if let Some(slot) = slots.get_mut(id) {
                if now.duration_since(slot.last_seen) <= self.ttl {
                    slot.last_seen = now;
                    return Ok((id.to_string(), false));
                }
                tracing::debug!("Session expired");
                slots.remove(id);
            }
        }

        self.prune(&mut slots, now, None);

        let id = new_session_id()?;
        self.make_room(&mut slots);
        slots.insert(id.clone(), Slot::fresh(now));
        tracing::debug!("New session ({} active)", slots.len());
        Ok((id, true))
    }

    /// Run `f` against a session. Unknown ids get a fresh session.
    ///
    /// Other sessions past their ttl are dropped on the way.
    pub fn with<R>(&self, id: &str, f: impl FnOnce(&mut Session) -> R) -> R {
        let now = Instant::now();
        let mut slots = self.lock();
        self.prune(&mut slots, now, Some(id));

        if !slots.contains_key(id) {
            self.make_room(&mut slots);
        }
        let slot = slots
            .entry(id.to_string())
            .or_insert_with(|| Slot::fresh(now));
        slot.last_seen = now;
        f(&mut slot.session)
    }

    /// Drop expired slots, sparing `keep`
    fn prune(&self, slots: &mut HashMap<String, Slot>, now: Instant, keep: Option<&str>) {
        let ttl = self.ttl;
        let before = slots.len();
        slots.retain(|id, slot| {
            Some(id.as_str()) == keep || now.duration_since(slot.last_seen) <= ttl
        });
        if slots.len() < before {
            tracing::debug!("Pruned {} expired sessions", before - slots.len());
        }
    }

    /// Evict the least recently seen slots until one more fits
    fn make_room(&self, slots: &mut HashMap<String, Slot>) {
        while slots.len() >= self.capacity {
            let oldest = slots
                .iter()
                .min_by_key(|(_, slot)| slot.last_seen)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(oldest) => {
                    tracing::debug!("Session table full, evicting the oldest session");
                    slots.remove(&oldest);
                }
                None => break,
            }
        }
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 128 random bits, hex encoded
fn new_session_id() -> anyhow::Result<String> {
    let mut bytes = [0u8; 16];
    getrandom::fill(&mut bytes)
        .map_err(|e| anyhow::anyhow!("failed to generate session id: {e}"))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Category;

    #[test]
    fn test_new_session_for_missing_cookie() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (id, created) = store.resolve(None).unwrap();
        assert!(created);
        assert_eq!(id.len(), 32);
        assert_eq!(store.len(), 1);

        let (again, created) = store.resolve(Some(&id)).unwrap();
        assert_eq!(again, id);
        assert!(!created);
    }

    #[test]
    fn test_unknown_cookie_gets_fresh_session() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (id, created) = store.resolve(Some("forged")).unwrap();
        assert!(created);
        assert_ne!(id, "forged");
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (a, _) = store.resolve(None).unwrap();
        let (b, _) = store.resolve(None).unwrap();
        assert_ne!(a, b);

        store.with(&a, |s| s.selection.open(Category::Post, "x"));
        assert_eq!(
            store.with(&a, |s| s.selection.get(Category::Post).map(String::from)),
            Some("x".to_string())
        );
        assert_eq!(
            store.with(&b, |s| s.selection.get(Category::Post).map(String::from)),
            None
        );
    }

    #[test]
    fn test_expired_session_resets() {
        let store = SessionStore::new(Duration::ZERO);
        let (id, _) = store.resolve(None).unwrap();
        store.with(&id, |s| s.selection.open(Category::Paper, "p"));
        std::thread::sleep(Duration::from_millis(5));

        let (fresh, created) = store.resolve(Some(&id)).unwrap();
        assert!(created);
        assert_ne!(fresh, id);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_prunes_other_expired_sessions() {
        let store = SessionStore::new(Duration::ZERO);
        let (stale, _) = store.resolve(None).unwrap();
        std::thread::sleep(Duration::from_millis(5));

        store.with("another", |s| s.selection.open(Category::Post, "x"));
        assert_eq!(store.len(), 1);

        let (fresh, created) = store.resolve(Some(&stale)).unwrap();
        assert!(created);
        assert_ne!(fresh, stale);
    }

    #[test]
    fn test_full_table_evicts_least_recent() {
        let store = SessionStore::with_capacity(Duration::from_secs(60), 2);
        let (first, _) = store.resolve(None).unwrap();
        std::thread::sleep(Duration::from_millis(2));
        let (second, _) = store.resolve(None).unwrap();
        std::thread::sleep(Duration::from_millis(2));
        let (third, _) = store.resolve(None).unwrap();
        assert_eq!(store.len(), 2);

        assert!(!store.resolve(Some(&second)).unwrap().1);
        assert!(!store.resolve(Some(&third)).unwrap().1);
        assert!(store.resolve(Some(&first)).unwrap().1);
    }

    #[test]
    fn test_notice_is_taken_once() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (id, _) = store.resolve(None).unwrap();
        store.with(&id, |s| {
            s.notice = Some(Notice::Success("ok".to_string()))
        });
        assert!(store.with(&id, |s| s.notice.take()).is_some());
        assert!(store.with(&id, |s| s.notice.take()).is_none());
    }
}
