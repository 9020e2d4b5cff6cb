//! 外部数据源契约
//!
//! 数据源是唯一的异步边界。读取失败或超时时静默替换为内置回退数据（仅记录日志），
//! 任务状态更新失败时在本地模拟成功。

use std::future::Future;

use async_trait::async_trait;
use futures::future::{Either, select};
use futures::pin_mut;
use log::{info, warn};

use crate::error::PortalResult;
use crate::fixture;
use crate::tasks::TaskStatus;
use crate::{PortalData, TaskUpdateAck};

/// 抽象数据源接口
///
/// (?Send) 是因为浏览器 fetch 产生的 Future 不是 Send 的
#[async_trait(?Send)]
pub trait StudentDataSource {
    /// 读取完整载荷 `{ student, schedule, tasks, attendance, reports }`
    async fn fetch_all(&self) -> PortalResult<PortalData>;

    /// 提交任务状态变更
    async fn update_task_status(&self, task_id: u32, status: TaskStatus)
    -> PortalResult<TaskUpdateAck>;
}

/// 始终返回内置数据的数据源
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDataSource;

#[async_trait(?Send)]
impl StudentDataSource for StaticDataSource {
    async fn fetch_all(&self) -> PortalResult<PortalData> {
        Ok(fixture::fallback_data())
    }

    async fn update_task_status(
        &self,
        task_id: u32,
        status: TaskStatus,
    ) -> PortalResult<TaskUpdateAck> {
        Ok(simulated_ack(task_id, status))
    }
}

fn simulated_ack(task_id: u32, status: TaskStatus) -> TaskUpdateAck {
    TaskUpdateAck {
        success: true,
        task_id,
        status,
    }
}

/// 读取数据，失败或超过 `deadline` 时返回回退数据
///
/// `deadline` 由调用方提供（浏览器中为定时器 Future），先于请求完成即视为失败。
pub async fn fetch_or_fallback<D, F>(source: &D, deadline: F) -> PortalData
where
    D: StudentDataSource + ?Sized,
    F: Future<Output = ()>,
{
    let request = source.fetch_all();
    pin_mut!(request);
    pin_mut!(deadline);

    match select(request, deadline).await {
        Either::Left((Ok(data), _)) => data,
        Either::Left((Err(e), _)) => {
            warn!("[Data] Data source not available, using fallback data: {}", e);
            fixture::fallback_data()
        }
        Either::Right(((), _)) => {
            warn!("[Data] Data source timed out, using fallback data.");
            fixture::fallback_data()
        }
    }
}

/// 提交任务状态，失败时模拟成功
pub async fn update_or_simulate<D>(source: &D, task_id: u32, status: TaskStatus) -> TaskUpdateAck
where
    D: StudentDataSource + ?Sized,
{
    match source.update_task_status(task_id, status).await {
        Ok(ack) => ack,
        Err(e) => {
            info!("[Data] Task update simulated for task {}: {}", task_id, e);
            simulated_ack(task_id, status)
        }
    }
}

/// 视图的异步加载状态
///
/// 每次挂载视图都从 `Loading` 开始，请求完成后整体替换为 `Ready`。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Ready(value) => Some(value),
        }
    }
}

#[cfg(test)]
mod tests;
