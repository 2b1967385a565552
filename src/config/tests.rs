use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use crate::sort::{SortAlgorithm, SortCriterion, SortField};
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_setlist_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SETLIST_CONFIG_PATH", "/tmp/setlist-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/setlist-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("setlist")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("setlist")
            .join("config.toml")
    );
}

#[test]
fn defaults_are_valid() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert_eq!(s.history.capacity, Some(50));
    assert_eq!(s.skips.window, 20);
    assert_eq!(s.lookup.initial_capacity, 16);
    assert_eq!(s.playlist.algorithm, SortAlgorithm::Merge);
    assert!(s.playlist.sort.is_empty());
    assert!(s.replay.calming_genres.contains(&"ambient".to_string()));
}

#[test]
fn validate_rejects_zero_sizes_and_bad_ratings() {
    let mut s = Settings::default();
    s.skips.window = 0;
    assert!(matches!(s.validate(), Err(crate::Error::InvalidConfig(_))));

    let mut s = Settings::default();
    s.history.capacity = Some(0);
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.history.capacity = None;
    assert!(s.validate().is_ok());

    let mut s = Settings::default();
    s.ratings.recommend_min = 6;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.lookup.initial_capacity = 0;
    assert!(s.validate().is_err());
}

#[test]
fn settings_parse_from_toml_snippet() {
    let s: Settings = toml::from_str(
        r#"
[playlist]
algorithm = "quick-sort"
shuffle = true
sort = [
  { field = "rating", order = "desc" },
  { field = "title" },
]

[display]
fields = ["year", "stars", "title"]
"#,
    )
    .unwrap();
    assert_eq!(s.playlist.algorithm, SortAlgorithm::Quick);
    assert!(s.playlist.shuffle);
    assert_eq!(
        s.playlist.sort,
        vec![
            SortCriterion::desc(SortField::Rating),
            SortCriterion::asc(SortField::Title)
        ]
    );
    assert_eq!(
        s.display.fields,
        vec![
            TrackDisplayField::Year,
            TrackDisplayField::Rating,
            TrackDisplayField::Title
        ]
    );
    // Untouched sections keep their defaults.
    assert_eq!(s.skips.window, 20);
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[history]
capacity = 5

[skips]
window = 3

[replay]
calming_genres = ["drone"]
candidates = 2

[ratings]
recommend_min = 3
recommend_limit = 4

[lookup]
initial_capacity = 64

[playlist]
algorithm = "heap"

[library]
extensions = ["mp3"]
recursive = false
include_hidden = false
follow_links = false

[display]
fields = ["artist", "title", "plays"]
separator = " | "

[logging]
filter = "setlist=debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SETLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("SETLIST__SKIPS__WINDOW");

    let s = Settings::load().unwrap();
    assert_eq!(s.history.capacity, Some(5));
    assert_eq!(s.skips.window, 3);
    assert_eq!(s.replay.calming_genres, vec!["drone".to_string()]);
    assert_eq!(s.replay.candidates, 2);
    assert_eq!(s.ratings.recommend_min, 3);
    assert_eq!(s.ratings.recommend_limit, 4);
    assert_eq!(s.lookup.initial_capacity, 64);
    assert_eq!(s.playlist.algorithm, SortAlgorithm::Heap);
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.recursive);
    assert!(!s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert_eq!(s.display.fields.len(), 3);
    assert_eq!(s.display.fields[2], TrackDisplayField::Plays);
    assert_eq!(s.display.separator, " | ");
    assert_eq!(s.logging.filter, "setlist=debug");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[skips]
window = 20
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SETLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("SETLIST__SKIPS__WINDOW", "7");

    let s = Settings::load().unwrap();
    assert_eq!(s.skips.window, 7);
}
