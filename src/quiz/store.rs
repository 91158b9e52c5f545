use std::collections::HashMap;
use std::sync::Arc;
use lazy_static::lazy_static;
use parking_lot::Mutex;
use uuid::Uuid;

use super::session::QuizSession;

// In-process registry for sessions that are mid-phase. Host convenience
// only: the engine itself never reads this, and hosts that persist sessions
// elsewhere can ignore it entirely. Keyed per respondent, since both
// partners run their own session for the same pair.
lazy_static! {
    static ref ACTIVE_SESSIONS: Arc<Mutex<HashMap<(Uuid, Uuid), QuizSession>>> =
        Arc::new(Mutex::new(HashMap::new()));
}

pub fn store_session(session: QuizSession) {
    let mut sessions = ACTIVE_SESSIONS.lock();
    sessions.insert((session.pair_id, session.respondent_id), session);
}

pub fn get_session(pair_id: Uuid, respondent_id: Uuid) -> Option<QuizSession> {
    let sessions = ACTIVE_SESSIONS.lock();
    sessions.get(&(pair_id, respondent_id)).cloned()
}

/// Remove and return a session, e.g. once its report has been computed and
/// the in-progress state is no longer needed.
pub fn take_session(pair_id: Uuid, respondent_id: Uuid) -> Option<QuizSession> {
    let mut sessions = ACTIVE_SESSIONS.lock();
    sessions.remove(&(pair_id, respondent_id))
}

/// Run a closure against a stored session under the registry lock. Returns
/// `None` if no session is stored for the key.
pub fn with_session_mut<T>(
    pair_id: Uuid,
    respondent_id: Uuid,
    f: impl FnOnce(&mut QuizSession) -> T,
) -> Option<T> {
    let mut sessions = ACTIVE_SESSIONS.lock();
    sessions.get_mut(&(pair_id, respondent_id)).map(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_round_trip() {
        let pair_id = Uuid::new_v4();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store_session(QuizSession::new(pair_id, alice));
        store_session(QuizSession::new(pair_id, bob));

        assert!(get_session(pair_id, alice).is_some());
        assert!(get_session(Uuid::new_v4(), alice).is_none());

        let count = with_session_mut(pair_id, bob, |session| session.questions().len());
        assert_eq!(count, Some(8));

        assert!(take_session(pair_id, alice).is_some());
        assert!(get_session(pair_id, alice).is_none());
        assert!(get_session(pair_id, bob).is_some());

        take_session(pair_id, bob);
    }
}
