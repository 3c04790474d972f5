mod common;

use std::path::Path;

use common::{MockCatalog, PLAYLISTS, SAVED, page, playlist, playlist_key, tracks};
use spotdump::{
    DumpError,
    cli::{self, Mode},
    types::TrackSummary,
};

fn read_names(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str::<TrackSummary>(line).unwrap().name)
        .collect()
}

#[test]
fn test_library_flag_wins() {
    let mode = cli::select_mode(true, Some("Mix"), true, Path::new("out.json")).unwrap();
    assert_eq!(mode, Mode::Library);
}

#[test]
fn test_playlist_beats_all_playlists() {
    let mode = cli::select_mode(false, Some("Mix"), true, Path::new("out.json")).unwrap();
    assert_eq!(mode, Mode::Playlist("Mix".to_string()));
}

#[test]
fn test_empty_playlist_name_is_not_a_selection() {
    let result = cli::select_mode(false, Some(""), false, Path::new("out.json"));
    assert!(matches!(result, Err(DumpError::Usage(_))));
}

#[test]
fn test_no_mode_is_usage_error() {
    let result = cli::select_mode(false, None, false, Path::new("out.json"));
    assert!(matches!(result, Err(DumpError::Usage(_))));
}

#[test]
fn test_all_playlists_requires_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("not-a-dir.json");
    std::fs::write(&file, "").unwrap();

    assert!(matches!(
        cli::select_mode(false, None, true, &file),
        Err(DumpError::Usage(_))
    ));
    assert!(matches!(
        cli::select_mode(false, None, true, &dir.path().join("missing")),
        Err(DumpError::Usage(_))
    ));
    assert_eq!(
        cli::select_mode(false, None, true, dir.path()).unwrap(),
        Mode::AllPlaylists
    );
}

#[tokio::test]
async fn test_library_run_writes_every_page() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("library.json");
    let catalog = MockCatalog::new()
        .with_page(SAVED, page(tracks("one", 0..20), Some("saved-2")))
        .with_page("saved-2", page(tracks("two", 0..5), None));

    cli::run(&catalog, "me", &Mode::Library, &out, 20).await.unwrap();

    let names = read_names(&out);
    assert_eq!(names.len(), 25);
    for (n, name) in names[..20].iter().enumerate() {
        assert_eq!(name, &format!("one {n}"));
    }
    for (n, name) in names[20..].iter().enumerate() {
        assert_eq!(name, &format!("two {n}"));
    }
}

#[tokio::test]
async fn test_playlist_run_writes_resolved_playlist() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("mix.json");
    let catalog = MockCatalog::new()
        .with_page(
            PLAYLISTS,
            page(
                vec![playlist("theirs", "Mix", "other"), playlist("mine", "Mix", "me")],
                None,
            ),
        )
        .with_page(playlist_key("mine"), page(tracks("m", 0..3), None));

    cli::run(&catalog, "me", &Mode::Playlist("Mix".into()), &out, 20)
        .await
        .unwrap();

    assert_eq!(read_names(&out), vec!["m 0", "m 1", "m 2"]);
    assert!(!catalog.requests().contains(&playlist_key("theirs")));
}

#[tokio::test]
async fn test_unknown_playlist_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing.json");
    let catalog = MockCatalog::new().with_page(
        PLAYLISTS,
        page(vec![playlist("theirs", "Mix", "other")], None),
    );

    let result = cli::run(&catalog, "me", &Mode::Playlist("Mix".into()), &out, 20).await;

    match result {
        Err(DumpError::PlaylistNotFound(name)) => assert_eq!(name, "Mix"),
        other => panic!("expected PlaylistNotFound, got {other:?}"),
    }
    assert!(!out.exists());
    assert_eq!(catalog.requests(), vec![PLAYLISTS]);
}

#[tokio::test]
async fn test_all_playlists_writes_one_file_each() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = MockCatalog::new()
        .with_page(
            PLAYLISTS,
            page(
                vec![
                    playlist("1", "My Cool Mix! (2024)", "me"),
                    playlist("2", "Followed", "other"),
                ],
                Some("playlists-2"),
            ),
        )
        .with_page("playlists-2", page(vec![playlist("3", "Road Trip", "me")], None))
        .with_page(playlist_key("1"), page(tracks("cool", 0..2), None))
        .with_page(playlist_key("3"), page(tracks("road", 0..1), None));

    cli::run(&catalog, "me", &Mode::AllPlaylists, dir.path(), 20)
        .await
        .unwrap();

    assert_eq!(
        read_names(&dir.path().join("My_Cool_Mix_2024.json")),
        vec!["cool 0", "cool 1"]
    );
    assert_eq!(read_names(&dir.path().join("Road_Trip.json")), vec!["road 0"]);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    assert_eq!(
        catalog.requests(),
        vec![
            PLAYLISTS.to_string(),
            playlist_key("1"),
            "playlists-2".to_string(),
            playlist_key("3"),
        ]
    );
}

#[tokio::test]
async fn test_all_playlists_name_collision_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = MockCatalog::new()
        .with_page(
            PLAYLISTS,
            page(
                vec![playlist("1", "Mix!", "me"), playlist("2", "Mix?", "me")],
                None,
            ),
        )
        .with_page(playlist_key("1"), page(tracks("first", 0..3), None))
        .with_page(playlist_key("2"), page(tracks("second", 0..1), None));

    cli::run(&catalog, "me", &Mode::AllPlaylists, dir.path(), 20)
        .await
        .unwrap();

    assert_eq!(read_names(&dir.path().join("Mix.json")), vec!["second 0"]);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
