//! 聊天模块
//!
//! 会话列表中同一时刻最多选中一个会话，发送的消息追加到选中会话末尾。

use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Me,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub time: String,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Sender, time: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender,
            time: time.into(),
        }
    }

    pub fn is_mine(&self) -> bool {
        self.sender == Sender::Me
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: u32,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub avatar: String,
    pub last_message: String,
    pub time: String,
    #[serde(default)]
    pub unread: u32,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// 会话集合
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatBoard {
    conversations: Vec<Conversation>,
    selected: Option<u32>,
}

impl ChatBoard {
    /// 创建集合，第一个会话初始选中
    pub fn new(conversations: Vec<Conversation>) -> Self {
        let mut board = Self {
            conversations,
            selected: None,
        };
        if let Some(id) = board.conversations.first().map(|c| c.id) {
            let _ = board.select(id);
        }
        board
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn selected(&self) -> Option<&Conversation> {
        let id = self.selected?;
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected == Some(id)
    }

    pub fn total_unread(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread).sum()
    }

    /// 选中会话并清零未读数
    pub fn select(&mut self, id: u32) -> PortalResult<&Conversation> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| {
                PortalError::not_found(format!("conversation {} does not exist", id))
                    .in_op_with("chat.select", id.to_string())
            })?;
        conversation.unread = 0;
        self.selected = Some(id);
        Ok(&*conversation)
    }

    /// **发送消息**
    ///
    /// 空白消息返回 `InvalidInput`；没有选中会话返回 `NotFound`。
    /// 成功后会话的最新消息与时间同步更新。
    pub fn send(&mut self, text: &str, time: impl Into<String>) -> PortalResult<&Message> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PortalError::invalid_input("message must not be empty").in_op("chat.send"));
        }
        let id = self
            .selected
            .ok_or_else(|| PortalError::not_found("no conversation selected").in_op("chat.send"))?;
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| {
                PortalError::not_found(format!("conversation {} does not exist", id))
                    .in_op_with("chat.send", id.to_string())
            })?;

        let time = time.into();
        conversation.last_message = text.to_string();
        conversation.time = time.clone();
        conversation.messages.push(Message::new(text, Sender::Me, time));
        conversation
            .messages
            .last()
            .ok_or_else(|| PortalError::not_found("sent message is missing").in_op("chat.send"))
    }
}

#[cfg(test)]
mod tests;
