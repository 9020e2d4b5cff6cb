use serde::{Deserialize, Serialize};

// =========================================================
// 错误状态枚举
// =========================================================

/// 错误状态枚举
///
/// 门户中没有致命错误：每种状态都对应一种可恢复的降级方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortalErrorStatus {
    /// 引用的资源不存在（如切换未知任务 ID）
    NotFound,
    /// 输入校验失败
    InvalidInput,
    /// 外部数据源不可达或返回非成功状态
    DataSource,
    /// JSON 解析或序列化错误
    Serialization,
    /// 浏览器存储读写失败
    Storage,
}

impl PortalErrorStatus {
    pub fn error_code(&self) -> &'static str {
        match self {
            PortalErrorStatus::NotFound => "RESOURCE_NOT_FOUND",
            PortalErrorStatus::InvalidInput => "INVALID_INPUT",
            PortalErrorStatus::DataSource => "DATA_SOURCE_UNAVAILABLE",
            PortalErrorStatus::Serialization => "JSON_PARSE_ERROR",
            PortalErrorStatus::Storage => "STORAGE_ERROR",
        }
    }
}

// =========================================================
// 错误上下文追踪
// =========================================================

/// 结构化的错误追踪片段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSpan {
    /// 操作名称，如 "tasks.toggle", "source.fetch"
    pub operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorSpan {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: None,
        }
    }

    pub fn with_detail(operation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: Some(detail.into()),
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

/// 门户领域错误
///
/// - status: 错误类型/语义
/// - message: 错误消息
/// - source: 原始错误（可选，用于错误链）
/// - spans: 结构化的调用追踪栈
#[derive(Debug, thiserror::Error)]
#[error("[{}] {}{}", .status.error_code(), .message, render_spans(.spans))]
pub struct PortalError {
    pub status: PortalErrorStatus,
    pub message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
    spans: Vec<ErrorSpan>,
}

impl PortalError {
    pub fn new(status: PortalErrorStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            source: None,
            spans: Vec::new(),
        }
    }

    // --- Convenience constructors ---

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(PortalErrorStatus::NotFound, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(PortalErrorStatus::InvalidInput, message)
    }

    pub fn data_source(message: impl Into<String>) -> Self {
        Self::new(PortalErrorStatus::DataSource, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(PortalErrorStatus::Serialization, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(PortalErrorStatus::Storage, message)
    }

    // --- Context builders ---

    /// 添加操作追踪（无额外细节）
    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan::new(operation));
        self
    }

    /// 添加操作追踪（带额外细节）
    pub fn in_op_with(mut self, operation: impl Into<String>, detail: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan::with_detail(operation, detail));
        self
    }

    /// 设置原始错误源
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // --- Accessors ---

    pub fn error_code(&self) -> &'static str {
        self.status.error_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn spans(&self) -> &[ErrorSpan] {
        &self.spans
    }

    pub fn is_not_found(&self) -> bool {
        self.status == PortalErrorStatus::NotFound
    }
}

fn render_spans(spans: &[ErrorSpan]) -> String {
    if spans.is_empty() {
        return String::new();
    }
    let trace = spans
        .iter()
        .map(|span| match &span.detail {
            Some(detail) => format!("{}({})", span.operation, detail),
            None => span.operation.clone(),
        })
        .collect::<Vec<_>>()
        .join(" -> ");
    format!(" | trace: {}", trace)
}

pub type PortalResult<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_includes_code_and_trace() {
        let err = PortalError::not_found("task 9 does not exist")
            .in_op_with("tasks.toggle", "9")
            .in_op("shell.toggle_task");

        assert_eq!(
            err.to_string(),
            "[RESOURCE_NOT_FOUND] task 9 does not exist | trace: tasks.toggle(9) -> shell.toggle_task"
        );
        assert!(err.is_not_found());
        assert_eq!(err.spans().len(), 2);
    }

    #[test]
    fn test_display_without_spans() {
        let err = PortalError::data_source("connection refused");
        assert_eq!(
            err.to_string(),
            "[DATA_SOURCE_UNAVAILABLE] connection refused"
        );
    }

    #[test]
    fn test_source_is_exposed() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "quota exceeded");
        let err = PortalError::storage("write failed").with_source(io);
        assert!(err.source().is_some());
    }
}
