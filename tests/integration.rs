// SPDX-License-Identifier: MPL-2.0
use iced_invitation::config::{self, Config, DEFAULT_SLIDE_MS};
use iced_invitation::gallery::GallerySettings;
use iced_invitation::i18n::fluent::I18n;
use iced_invitation::info::{InvitationInfo, PageText, Side};
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");

    let mut korean = Config::default();
    korean.general.language = Some("ko".to_string());
    config::save_to_path(&korean, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "ko");
    assert_eq!(i18n.tr("role-bride"), "신부");
}

#[test]
fn gallery_section_of_config_clamps_into_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[gallery]\nslot_count = 500\nslide_ms = 1\nswipe_threshold_px = 80.0\nanimate = false\n",
    )
    .expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let settings = GallerySettings::from(&loaded.gallery);
    assert_eq!(settings.slot_count.value(), config::MAX_SLOT_COUNT);
    assert_eq!(settings.slide.millis(), config::MIN_SLIDE_MS);
    assert_eq!(settings.swipe_threshold.value(), 80.0);
    assert!(!settings.animate);
}

#[test]
fn unreadable_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[gallery\nslot_count = ")
        .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    assert_eq!(
        GallerySettings::from(&loaded.gallery).slide.millis(),
        DEFAULT_SLIDE_MS
    );
}

#[tokio::test]
async fn info_file_populates_every_page_section() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("info.txt");
    std::fs::write(
        &path,
        "groom_self_name: Minho\n\
         bride_self_name: Seoyeon\n\
         wedding_date: 2026-05-16\n\
         wedding_time: 12:30 PM\n\
         wedding_hall_name: Grand Hall\n\
         wedding_hall_name2: 3F\n\
         wedding_hall_address: 1 Garden-ro, Seoul\n\
         wedding_hall_tel: 02-123-4567\n\
         groom_father_name: Kim Daesung\n\
         groom_account_bank: Hana\n\
         groom_account_number: 111-222\n\
         bride_self_phone: 010-9876-5432\n",
    )
    .expect("Failed to write info file");

    let info = InvitationInfo::load(&path).await.expect("info loads");
    let page = PageText::from_info(&info);

    assert_eq!(page.main.date_time, "2026-05-16 12:30 PM");
    assert_eq!(page.main.hall, "Grand Hall 3F");
    assert_eq!(page.location.address, "1 Garden-ro, Seoul");
    assert_eq!(page.location.call.to_string(), "tel:02-123-4567");

    let groom_accounts: Vec<_> = page.accounts_of(Side::Groom).collect();
    assert_eq!(groom_accounts.len(), 3);
    assert!(groom_accounts
        .iter()
        .all(|account| account.clipboard_text() == "Hana 111-222"));

    let bride = page
        .contacts
        .iter()
        .find(|entry| entry.role.side == Side::Bride && entry.sms.is_available())
        .expect("bride contact with a phone");
    assert_eq!(bride.sms.to_string(), "sms:010-9876-5432");
}

#[tokio::test]
async fn missing_info_file_is_an_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let result = InvitationInfo::load(&dir.path().join("info.txt")).await;
    assert!(result.is_err());
}
