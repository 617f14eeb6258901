use super::*;

#[test]
fn empty_store_reads_light() {
    assert_eq!(read_theme_mode(&MemoryStore::default()), ThemeMode::Light);
}

#[test]
fn written_mode_reads_back() {
    let store = MemoryStore::default();
    write_theme_mode(&store, ThemeMode::Dark);
    assert_eq!(read_theme_mode(&store), ThemeMode::Dark);
    write_theme_mode(&store, ThemeMode::Light);
    assert_eq!(read_theme_mode(&store), ThemeMode::Light);
}

#[test]
fn mode_is_stored_as_json_under_theme_key() {
    let store = MemoryStore::default();
    write_theme_mode(&store, ThemeMode::Dark);
    assert_eq!(store.read_raw("themeMode").as_deref(), Some("\"dark\""));
}

#[test]
fn garbage_value_reads_light() {
    let store = MemoryStore::default();
    store.write_raw("themeMode", "{not json");
    assert_eq!(read_theme_mode(&store), ThemeMode::Light);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_outside_hydrate() {
    let store = BrowserStorage;
    write_theme_mode(&store, ThemeMode::Dark);
    assert_eq!(store.read_raw("themeMode"), None);
    assert_eq!(read_theme_mode(&store), ThemeMode::Light);
}
