use async_trait::async_trait;
use classtrack_shared::config::PortalConfig;
use classtrack_shared::source::{LoadState, StudentDataSource, fetch_or_fallback, update_or_simulate};
use classtrack_shared::{PortalData, PortalError, PortalResult, TaskStatus, TaskUpdateAck};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;

use crate::auth::use_auth;

#[derive(Serialize)]
struct StatusUpdate {
    status: TaskStatus,
}

/// 基于 HTTP 的学生数据源
#[derive(Clone, Debug, PartialEq)]
pub struct HttpDataSource {
    config: PortalConfig,
}

impl HttpDataSource {
    pub fn new(config: PortalConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl StudentDataSource for HttpDataSource {
    /// 获取完整载荷
    async fn fetch_all(&self) -> PortalResult<PortalData> {
        let url = &self.config.api_url;
        let res = Request::get(url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| PortalError::data_source(e.to_string()).in_op_with("api.fetch_all", url))?;

        if !res.ok() {
            return Err(PortalError::data_source(format!("HTTP error! status: {}", res.status()))
                .in_op_with("api.fetch_all", url));
        }

        res.json::<PortalData>()
            .await
            .map_err(|e| PortalError::serialization(e.to_string()).in_op("api.fetch_all"))
    }

    /// 提交任务状态
    async fn update_task_status(
        &self,
        task_id: u32,
        status: TaskStatus,
    ) -> PortalResult<TaskUpdateAck> {
        let url = self.config.task_url(task_id);
        let res = Request::patch(&url)
            .header("Content-Type", "application/json")
            .json(&StatusUpdate { status })
            .map_err(|e| PortalError::serialization(e.to_string()).in_op("api.update_task_status"))?
            .send()
            .await
            .map_err(|e| {
                PortalError::data_source(e.to_string()).in_op_with("api.update_task_status", &url)
            })?;

        if !res.ok() {
            return Err(PortalError::data_source(format!("HTTP error! status: {}", res.status()))
                .in_op_with("api.update_task_status", &url));
        }

        res.json::<TaskUpdateAck>()
            .await
            .map_err(|e| PortalError::serialization(e.to_string()).in_op("api.update_task_status"))
    }
}

/// 视图挂载时加载门户数据
///
/// 每次挂载发起一次独立请求；完成后把数据写入状态机并返回 `Ready`。
pub fn use_portal_data() -> ReadSignal<LoadState<PortalData>> {
    let auth = use_auth();
    let (state, set_state) = signal(LoadState::<PortalData>::Loading);

    let config = auth.config.get_value();
    spawn_local(async move {
        let deadline = TimeoutFuture::new(config.fetch_timeout_ms);
        let source = HttpDataSource::new(config);
        let data = fetch_or_fallback(&source, deadline).await;
        auth.shell.try_update(|shell| shell.apply_data(&data));
        set_state.try_set(LoadState::Ready(data));
    });

    state
}

/// 后台提交任务状态，失败时仅记录日志
pub fn submit_task_status(config: PortalConfig, task_id: u32, status: TaskStatus) {
    spawn_local(async move {
        let source = HttpDataSource::new(config);
        update_or_simulate(&source, task_id, status).await;
    });
}
