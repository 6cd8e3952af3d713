// ABOUTME: Integration tests for the on-disk session cookie
// ABOUTME: Tests persistence, expiry, corruption recovery, and clearing of the cookie file

use chrono::{Duration, Utc};
use tempfile::TempDir;

use coursemgr_auth::{CookieFileStore, SameSite, SessionCookie, SessionStore};
use coursemgr_core::MaskedUser;

fn setup_store() -> (CookieFileStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = CookieFileStore::new(temp_dir.path().join("nested").join("session.toml"));
    (store, temp_dir)
}

fn organizer() -> MaskedUser {
    MaskedUser {
        id: 4,
        firstname: "Grace".to_string(),
        surname: "Hopper".to_string(),
        age: Some(41),
        email: "grace@example.com".to_string(),
        is_organizer: true,
        active: Some(true),
    }
}

#[tokio::test]
async fn test_missing_file_is_logged_out() {
    let (store, _temp_dir) = setup_store();

    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_and_load() {
    let (store, _temp_dir) = setup_store();

    store.save(&organizer()).await.unwrap();
    let loaded = store.load().await.unwrap();

    assert_eq!(loaded, Some(organizer()));
}

#[tokio::test]
async fn test_cookie_file_contents() {
    let (store, _temp_dir) = setup_store();
    store.save(&organizer()).await.unwrap();

    let content = std::fs::read_to_string(store.path()).unwrap();
    let cookie: SessionCookie = toml::from_str(&content).unwrap();

    assert_eq!(cookie.name, "user");
    assert!(cookie.secure);
    assert_eq!(cookie.same_site, SameSite::Strict);
    assert!(cookie.expires_at > Utc::now() + Duration::days(6));
    assert!(!content.contains("password"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_cookie_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let (store, _temp_dir) = setup_store();
    store.save(&organizer()).await.unwrap();

    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[tokio::test]
async fn test_expired_cookie_is_removed() {
    let (store, _temp_dir) = setup_store();
    let store = store.with_ttl(Duration::seconds(-1));

    store.save(&organizer()).await.unwrap();
    assert!(store.path().exists());

    assert!(store.load().await.unwrap().is_none());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_corrupt_cookie_is_discarded() {
    let (store, _temp_dir) = setup_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "this is = = not toml").unwrap();

    assert!(store.load().await.unwrap().is_none());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_foreign_cookie_is_ignored() {
    let (store, _temp_dir) = setup_store();
    let mut cookie = SessionCookie::for_user(&organizer(), Utc::now()).unwrap();
    cookie.name = "theme".to_string();

    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), toml::to_string(&cookie).unwrap()).unwrap();

    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_clear_removes_cookie() {
    let (store, _temp_dir) = setup_store();
    store.save(&organizer()).await.unwrap();

    store.clear().await.unwrap();

    assert!(!store.path().exists());
    assert!(store.load().await.unwrap().is_none());
    // Clearing twice is fine
    store.clear().await.unwrap();
}

#[cfg(unix)]
#[tokio::test]
async fn test_existing_readable_cookie_file_is_tightened() {
    use std::os::unix::fs::PermissionsExt;

    let (store, _temp_dir) = setup_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "stale").unwrap();
    std::fs::set_permissions(store.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

    store.save(&organizer()).await.unwrap();

    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
    assert_eq!(store.load().await.unwrap(), Some(organizer()));
}
