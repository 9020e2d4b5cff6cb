//! 设置模块
//!
//! 选项卡由 [`ViewSelector`] 驱动。表单编辑作用在草稿上，
//! 保存时校验并提交，取消时恢复为上次保存的内容。

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};
use crate::selector::ViewSelector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsTab {
    Profile,
    Account,
    Notifications,
    Privacy,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [Self::Profile, Self::Account, Self::Notifications, Self::Privacy];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Account => "account",
            Self::Notifications => "notifications",
            Self::Privacy => "privacy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Account => "Account",
            Self::Notifications => "Notifications",
            Self::Privacy => "Privacy",
        }
    }

    /// Font Awesome 图标类名
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Profile => "fas fa-user",
            Self::Account => "fas fa-cog",
            Self::Notifications => "fas fa-bell",
            Self::Privacy => "fas fa-lock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AcademicYear {
    Freshman,
    Sophomore,
    #[default]
    Junior,
    Senior,
    Graduate,
}

impl AcademicYear {
    pub const ALL: [AcademicYear; 5] = [
        Self::Freshman,
        Self::Sophomore,
        Self::Junior,
        Self::Senior,
        Self::Graduate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Freshman => "Freshman",
            Self::Sophomore => "Sophomore",
            Self::Junior => "Junior",
            Self::Senior => "Senior",
            Self::Graduate => "Graduate",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|y| y.label() == label)
    }
}

/// 个人资料中可编辑的文本字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Major,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub major: String,
    pub year: AcademicYear,
}

impl ProfileForm {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Major => &self.major,
        }
    }

    fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Major => &mut self.major,
        }
    }

    fn validate(&self) -> PortalResult<()> {
        if self.name.trim().is_empty() {
            return Err(PortalError::invalid_input("name must not be empty"));
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(PortalError::invalid_input(format!("{:?} is not a valid email", email))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationChannel {
    Email,
    Push,
    Sms,
}

impl NotificationChannel {
    pub const ALL: [NotificationChannel; 3] = [Self::Email, Self::Push, Self::Sms];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email Notifications",
            Self::Push => "Push Notifications",
            Self::Sms => "SMS Notifications",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Email => "Receive updates via email",
            Self::Push => "Receive push notifications on your device",
            Self::Sms => "Receive text message updates",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
        }
    }
}

impl NotificationPrefs {
    pub fn is_enabled(&self, channel: NotificationChannel) -> bool {
        match channel {
            NotificationChannel::Email => self.email,
            NotificationChannel::Push => self.push,
            NotificationChannel::Sms => self.sms,
        }
    }

    pub fn toggle(&mut self, channel: NotificationChannel) -> bool {
        let flag = match channel {
            NotificationChannel::Email => &mut self.email,
            NotificationChannel::Push => &mut self.push,
            NotificationChannel::Sms => &mut self.sms,
        };
        *flag = !*flag;
        *flag
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SettingsForm {
    pub profile: ProfileForm,
    pub notifications: NotificationPrefs,
}

/// 设置页状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    tabs: ViewSelector<SettingsTab>,
    saved: SettingsForm,
    draft: SettingsForm,
}

impl SettingsState {
    pub fn new(form: SettingsForm) -> Self {
        Self {
            tabs: ViewSelector::new(SettingsTab::Profile, SettingsTab::ALL),
            saved: form.clone(),
            draft: form,
        }
    }

    // =========================================================
    // 选项卡
    // =========================================================

    pub fn select_tab(&mut self, tab: SettingsTab) -> bool {
        self.tabs.select(&tab)
    }

    pub fn active_tab(&self) -> SettingsTab {
        *self.tabs.current()
    }

    // =========================================================
    // 表单
    // =========================================================

    pub fn draft(&self) -> &SettingsForm {
        &self.draft
    }

    pub fn saved(&self) -> &SettingsForm {
        &self.saved
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        *self.draft.profile.field_mut(field) = value.into();
    }

    pub fn set_year(&mut self, year: AcademicYear) {
        self.draft.profile.year = year;
    }

    pub fn toggle_notification(&mut self, channel: NotificationChannel) -> bool {
        self.draft.notifications.toggle(channel)
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.saved
    }

    /// 校验草稿并保存，失败时草稿保持不变
    pub fn save(&mut self) -> PortalResult<()> {
        self.draft
            .profile
            .validate()
            .map_err(|e| e.in_op("settings.save"))?;
        self.draft.profile.name = self.draft.profile.name.trim().to_string();
        self.draft.profile.email = self.draft.profile.email.trim().to_string();
        self.saved = self.draft.clone();
        info!("[Settings] Preferences saved.");
        Ok(())
    }

    /// 放弃未保存的修改
    pub fn cancel(&mut self) {
        self.draft = self.saved.clone();
    }
}

#[cfg(test)]
mod tests;
