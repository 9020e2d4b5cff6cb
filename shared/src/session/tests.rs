use super::*;
use std::cell::Cell;

// =========================================================
// Mock Components
// =========================================================

/// Storage whose writes can be made to fail, with an operation log
struct FlakyStore {
    inner: MemoryStore,
    fail_writes: Cell<bool>,
    log: RefCell<Vec<String>>,
}

impl FlakyStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_writes: Cell::new(false),
            log: RefCell::new(Vec::new()),
        }
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.log.borrow_mut().push(format!("get:{}", key));
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.log.borrow_mut().push(format!("set:{}", key));
        if self.fail_writes.get() {
            return false;
        }
        self.inner.set(key, value)
    }

    fn delete(&self, key: &str) -> bool {
        self.log.borrow_mut().push(format!("delete:{}", key));
        self.inner.delete(key)
    }
}

// =========================================================
// 持久化与恢复
// =========================================================

#[test]
fn test_fresh_store_is_anonymous() {
    let sessions = SessionStore::new(MemoryStore::new());
    assert!(!sessions.is_authenticated());
    assert_eq!(sessions.subject_id(), None);
}

#[test]
fn test_login_survives_reload_and_logout_clears_keys() {
    let storage = MemoryStore::new();

    let mut sessions = SessionStore::new(storage.clone());
    sessions.login("2021-0001");
    assert!(sessions.is_authenticated());
    drop(sessions);

    // 模拟进程重启：新的 SessionStore 从同一份存储恢复
    let mut restarted = SessionStore::new(storage.clone());
    assert!(restarted.is_authenticated());
    assert_eq!(restarted.subject_id(), Some("2021-0001"));

    restarted.logout();
    assert!(!restarted.is_authenticated());
    assert!(!storage.contains(STORAGE_AUTHENTICATED_KEY));
    assert!(!storage.contains(STORAGE_STUDENT_NUMBER_KEY));
}

#[test]
fn test_persisted_values_use_plain_strings() {
    let storage = MemoryStore::new();
    let mut sessions = SessionStore::new(storage.clone());
    sessions.login("2021-0042");

    assert_eq!(
        storage.get(STORAGE_AUTHENTICATED_KEY).as_deref(),
        Some("true")
    );
    assert_eq!(
        storage.get(STORAGE_STUDENT_NUMBER_KEY).as_deref(),
        Some("2021-0042")
    );
}

#[test]
fn test_logout_is_idempotent() {
    let storage = MemoryStore::new();
    let mut sessions = SessionStore::new(storage.clone());

    sessions.logout();
    sessions.logout();
    assert!(!sessions.is_authenticated());
    assert_eq!(sessions.session(), &Session::anonymous());
}

#[test]
fn test_only_exact_true_flag_authenticates() {
    let storage = MemoryStore::new();
    storage.set(STORAGE_AUTHENTICATED_KEY, "yes");
    storage.set(STORAGE_STUDENT_NUMBER_KEY, "2021-0001");
    assert!(!SessionStore::new(storage.clone()).is_authenticated());

    storage.set(STORAGE_AUTHENTICATED_KEY, "true");
    assert!(SessionStore::new(storage).is_authenticated());
}

#[test]
fn test_flag_without_number_keeps_invariant() {
    let storage = MemoryStore::new();
    storage.set(STORAGE_AUTHENTICATED_KEY, "true");

    let sessions = SessionStore::new(storage);
    assert!(sessions.is_authenticated());
    assert_eq!(sessions.subject_id(), Some(""));
}

#[test]
fn test_reload_picks_up_external_changes() {
    let storage = MemoryStore::new();
    let mut sessions = SessionStore::new(storage.clone());

    // 另一个标签页登录
    SessionStore::new(storage.clone()).login("2021-0007");
    assert!(!sessions.is_authenticated());

    sessions.reload();
    assert_eq!(sessions.subject_id(), Some("2021-0007"));
}

#[test]
fn test_failed_write_still_updates_memory_state() {
    let store = FlakyStore::new();
    store.fail_writes.set(true);

    let mut sessions = SessionStore::new(store);
    sessions.login("2021-0001");

    assert!(sessions.is_authenticated());
    assert_eq!(sessions.subject_id(), Some("2021-0001"));
}

#[test]
fn test_logout_deletes_both_keys() {
    let mut sessions = SessionStore::new(FlakyStore::new());
    sessions.login("2021-0001");
    sessions.logout();

    let log = sessions.store.log.borrow();
    assert!(log.contains(&format!("delete:{}", STORAGE_AUTHENTICATED_KEY)));
    assert!(log.contains(&format!("delete:{}", STORAGE_STUDENT_NUMBER_KEY)));
}
