use super::*;
use crate::fixture;

fn state() -> SettingsState {
    SettingsState::new(fixture::settings_form())
}

// =========================================================
// 选项卡
// =========================================================

#[test]
fn test_profile_tab_active_initially() {
    let mut settings = state();
    assert_eq!(settings.active_tab(), SettingsTab::Profile);

    assert!(settings.select_tab(SettingsTab::Notifications));
    assert_eq!(settings.active_tab(), SettingsTab::Notifications);
}

// =========================================================
// 表单
// =========================================================

#[test]
fn test_edits_mark_form_dirty_until_saved() {
    let mut settings = state();
    assert!(!settings.is_dirty());

    settings.set_field(ProfileField::Major, "Mathematics");
    settings.set_year(AcademicYear::Senior);
    assert!(settings.is_dirty());
    assert_eq!(settings.saved().profile.major, "Computer Science");

    settings.save().unwrap();
    assert!(!settings.is_dirty());
    assert_eq!(settings.saved().profile.major, "Mathematics");
    assert_eq!(settings.saved().profile.year, AcademicYear::Senior);
}

#[test]
fn test_cancel_restores_saved_values() {
    let mut settings = state();
    settings.set_field(ProfileField::Name, "Someone Else");
    settings.toggle_notification(NotificationChannel::Sms);

    settings.cancel();
    assert_eq!(settings.draft(), settings.saved());
    assert_eq!(settings.draft().profile.name, "Alex Johnson");
    assert!(!settings.draft().notifications.sms);
}

#[test]
fn test_toggle_notification_flips_only_that_channel() {
    let mut settings = state();
    assert!(settings.toggle_notification(NotificationChannel::Sms));
    assert!(!settings.toggle_notification(NotificationChannel::Email));

    let prefs = settings.draft().notifications;
    assert!(!prefs.is_enabled(NotificationChannel::Email));
    assert!(prefs.is_enabled(NotificationChannel::Push));
    assert!(prefs.is_enabled(NotificationChannel::Sms));
}

#[test]
fn test_save_rejects_invalid_profile() {
    let mut settings = state();
    settings.set_field(ProfileField::Email, "not-an-email");
    let err = settings.save().unwrap_err();
    assert_eq!(err.status, crate::PortalErrorStatus::InvalidInput);
    assert!(settings.is_dirty());
    assert_eq!(settings.saved().profile.email, "alex.johnson@university.edu");

    settings.set_field(ProfileField::Email, "alex@university.edu");
    settings.set_field(ProfileField::Name, "   ");
    assert!(settings.save().is_err());
}

#[test]
fn test_academic_year_parse() {
    assert_eq!(AcademicYear::parse("Graduate"), Some(AcademicYear::Graduate));
    assert_eq!(AcademicYear::parse("Alumni"), None);
}
