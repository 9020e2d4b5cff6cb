use super::*;
use crate::PortalError;
use std::cell::RefCell;
use std::time::Duration;

// =========================================================
// Mock Components
// =========================================================

enum Behaviour {
    Succeed(PortalData),
    Fail,
    Hang,
}

struct MockSource {
    behaviour: Behaviour,
    /// Operation log to verify calls
    log: RefCell<Vec<String>>,
}

impl MockSource {
    fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            log: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl StudentDataSource for MockSource {
    async fn fetch_all(&self) -> PortalResult<PortalData> {
        self.log.borrow_mut().push("fetch_all".to_string());
        match &self.behaviour {
            Behaviour::Succeed(data) => Ok(data.clone()),
            Behaviour::Fail => Err(PortalError::data_source("connection refused")),
            Behaviour::Hang => futures::future::pending().await,
        }
    }

    async fn update_task_status(
        &self,
        task_id: u32,
        status: TaskStatus,
    ) -> PortalResult<TaskUpdateAck> {
        self.log
            .borrow_mut()
            .push(format!("update:{}:{:?}", task_id, status));
        match &self.behaviour {
            Behaviour::Succeed(_) => Ok(TaskUpdateAck {
                success: true,
                task_id,
                status,
            }),
            _ => Err(PortalError::data_source("PATCH failed")),
        }
    }
}

fn custom_data() -> PortalData {
    let mut data = fixture::fallback_data();
    data.student.name = "Juan Dela Cruz".to_string();
    data.tasks.truncate(1);
    data
}

fn never() -> futures::future::Pending<()> {
    futures::future::pending()
}

// =========================================================
// fetch_or_fallback 测试
// =========================================================

#[tokio::test]
async fn test_successful_fetch_is_used() {
    let source = MockSource::new(Behaviour::Succeed(custom_data()));
    let data = fetch_or_fallback(&source, never()).await;
    assert_eq!(data, custom_data());
    assert_eq!(*source.log.borrow(), vec!["fetch_all".to_string()]);
}

#[tokio::test]
async fn test_failed_fetch_falls_back_silently() {
    let source = MockSource::new(Behaviour::Fail);
    let data = fetch_or_fallback(&source, never()).await;
    assert_eq!(data, fixture::fallback_data());
}

#[tokio::test]
async fn test_hanging_fetch_falls_back_after_deadline() {
    let source = MockSource::new(Behaviour::Hang);
    let deadline = tokio::time::sleep(Duration::from_millis(10));
    let data = fetch_or_fallback(&source, deadline).await;
    assert_eq!(data, fixture::fallback_data());
}

#[tokio::test]
async fn test_fallback_has_full_shape() {
    let data = StaticDataSource.fetch_all().await.unwrap();
    assert_eq!(data.schedule.len(), 5);
    assert_eq!(data.tasks.len(), 3);
    assert_eq!(data.attendance.len(), 5);
    assert_eq!(data.reports.len(), 3);
}

// =========================================================
// update_or_simulate 测试
// =========================================================

#[tokio::test]
async fn test_update_passes_through_on_success() {
    let source = MockSource::new(Behaviour::Succeed(custom_data()));
    let ack = update_or_simulate(&source, 3, TaskStatus::Completed).await;
    assert!(ack.success);
    assert_eq!(*source.log.borrow(), vec!["update:3:Completed".to_string()]);
}

#[tokio::test]
async fn test_update_failure_is_simulated() {
    let source = MockSource::new(Behaviour::Fail);
    let ack = update_or_simulate(&source, 1, TaskStatus::Pending).await;
    assert_eq!(
        ack,
        TaskUpdateAck {
            success: true,
            task_id: 1,
            status: TaskStatus::Pending,
        }
    );
}

#[test]
fn test_load_state_transitions() {
    let mut state: LoadState<u32> = LoadState::default();
    assert!(state.is_loading());
    assert_eq!(state.ready(), None);

    state = LoadState::Ready(7);
    assert!(!state.is_loading());
    assert_eq!(state.ready(), Some(&7));
}
