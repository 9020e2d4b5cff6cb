//! 会话存储模块
//!
//! 认证状态的唯一读写入口。持久化只涉及两个键：
//! `plmun_authenticated`（值为 `"true"` 或不存在）与 `plmun_student_number`。

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{info, warn};

use crate::{AUTHENTICATED_FLAG, STORAGE_AUTHENTICATED_KEY, STORAGE_STUDENT_NUMBER_KEY};

/// 抽象键值存储接口
///
/// 与浏览器 LocalStorage 的语义一致：同步、字符串值，写入失败不抛出。
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// 返回写入是否成功
    fn set(&self, key: &str, value: &str) -> bool;
    /// 返回删除是否成功
    fn delete(&self, key: &str) -> bool;
}

/// 内存键值存储
///
/// 克隆体共享同一份数据，可用于模拟"重新加载页面后读取持久化状态"。
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.map.borrow_mut().remove(key);
        true
    }
}

/// 会话状态
///
/// 不变量：`authenticated == true` 时 `subject_id` 必为 `Some`。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    authenticated: bool,
    subject_id: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(subject_id: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            subject_id: Some(subject_id.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn subject_id(&self) -> Option<&str> {
        self.subject_id.as_deref()
    }
}

/// 会话存储服务
///
/// 内存中的 [`Session`] 总是反映最近一次 `login`/`logout`，
/// 构造时从持久化存储恢复。
#[derive(Debug, Clone)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
    session: Session,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// 创建会话存储并从持久化状态恢复
    pub fn new(store: S) -> Self {
        let session = Self::read_persisted(&store);
        Self { store, session }
    }

    fn read_persisted(store: &S) -> Session {
        let flag = store.get(STORAGE_AUTHENTICATED_KEY);
        if flag.as_deref() != Some(AUTHENTICATED_FLAG) {
            return Session::anonymous();
        }
        match store.get(STORAGE_STUDENT_NUMBER_KEY) {
            Some(number) => Session::authenticated(number),
            None => {
                warn!("[Session] Authenticated flag present without a student number.");
                Session::authenticated(String::new())
            }
        }
    }

    /// 重新读取持久化状态（如其他标签页修改了存储）
    pub fn reload(&mut self) {
        self.session = Self::read_persisted(&self.store);
    }

    /// 登录：总是成功，凭据校验不在本系统范围内
    pub fn login(&mut self, subject_id: impl Into<String>) {
        let subject_id = subject_id.into();
        let saved_flag = self.store.set(STORAGE_AUTHENTICATED_KEY, AUTHENTICATED_FLAG);
        let saved_number = self.store.set(STORAGE_STUDENT_NUMBER_KEY, &subject_id);
        if !(saved_flag && saved_number) {
            warn!("[Session] Failed to persist session, it will not survive a reload.");
        }
        info!("[Session] Logged in as {}.", subject_id);
        self.session = Session::authenticated(subject_id);
    }

    /// 注销：清除内存与持久化状态，重复调用无副作用
    pub fn logout(&mut self) {
        let removed_flag = self.store.delete(STORAGE_AUTHENTICATED_KEY);
        let removed_number = self.store.delete(STORAGE_STUDENT_NUMBER_KEY);
        if !(removed_flag && removed_number) {
            warn!("[Session] Failed to clear persisted session keys.");
        }
        if self.session.is_authenticated() {
            info!("[Session] Logged out.");
        }
        self.session = Session::anonymous();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn subject_id(&self) -> Option<&str> {
        self.session.subject_id()
    }
}

#[cfg(test)]
mod tests;
