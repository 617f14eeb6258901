use super::*;
use crate::util::preference_store::MemoryStore;

#[test]
fn uninitialized_state_has_no_theme() {
    let state = ThemeState::default();
    assert_eq!(state.mode(), None);
    assert_eq!(state.theme(), None);
}

#[test]
fn initialize_reads_default_light() {
    let store = MemoryStore::default();
    let mut state = ThemeState::default();
    assert_eq!(state.initialize(&store), ThemeMode::Light);
    assert_eq!(state.theme(), Some(Theme::for_mode(ThemeMode::Light)));
}

#[test]
fn initialize_reads_persisted_dark() {
    let store = MemoryStore::default();
    write_theme_mode(&store, ThemeMode::Dark);
    let mut state = ThemeState::default();
    assert_eq!(state.initialize(&store), ThemeMode::Dark);
}

#[test]
fn initialize_twice_keeps_current_mode() {
    let store = MemoryStore::default();
    let mut state = ThemeState::default();
    state.initialize(&store);
    state.toggle(&store);
    write_theme_mode(&store, ThemeMode::Light);
    assert_eq!(state.initialize(&store), ThemeMode::Dark);
}

#[test]
fn toggle_persists_every_new_mode() {
    let store = MemoryStore::default();
    let mut state = ThemeState::default();
    state.initialize(&store);

    assert_eq!(state.toggle(&store), Some(ThemeMode::Dark));
    assert_eq!(read_theme_mode(&store), ThemeMode::Dark);

    assert_eq!(state.toggle(&store), Some(ThemeMode::Light));
    assert_eq!(read_theme_mode(&store), ThemeMode::Light);
    assert_eq!(state.mode(), Some(ThemeMode::Light));
}

#[test]
fn toggle_before_initialize_is_noop() {
    let store = MemoryStore::default();
    let mut state = ThemeState::default();
    assert_eq!(state.toggle(&store), None);
    assert_eq!(store.read_raw("themeMode"), None);
}

#[test]
fn theme_follows_mode_after_toggle() {
    let store = MemoryStore::default();
    let mut state = ThemeState::default();
    state.initialize(&store);
    state.toggle(&store);
    assert_eq!(state.theme().map(|t| t.mode), Some(ThemeMode::Dark));
}
