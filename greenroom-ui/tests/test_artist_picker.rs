use std::collections::HashSet;

use greenroom_ui::display_types::Artist;
use greenroom_ui::stores::artist_picker::{ArtistPickerState, PickerEvent, SearchPhase};

fn artist(id: i64, name: &str) -> Artist {
    Artist {
        id,
        name: name.to_string(),
    }
}

fn registry_with(prefix: &str, current: Vec<Artist>) -> ArtistPickerState {
    let mut registry = ArtistPickerState::default();
    registry.register(prefix, current);
    registry
}

/// Open the picker and deliver search hits for `query` in one go.
fn open_and_search(registry: &mut ArtistPickerState, prefix: &str, query: &str, hits: Vec<Artist>) {
    registry.dispatch(prefix, PickerEvent::Open);
    registry.dispatch(prefix, PickerEvent::SetQuery(query.to_string()));
    registry.dispatch(prefix, PickerEvent::SearchStarted);
    let turn = registry.picker(prefix).unwrap().search_turn;
    registry.dispatch(
        prefix,
        PickerEvent::SearchComplete {
            turn,
            hits,
            error: None,
        },
    );
}

#[test]
fn staged_never_duplicates_ids_across_adds_and_removes() {
    let mut registry = registry_with("album", vec![artist(1, "Night Parade")]);
    open_and_search(
        &mut registry,
        "album",
        "choir",
        vec![artist(2, "Nightfall Choir"), artist(3, "Quiet Pines")],
    );

    registry.dispatch("album", PickerEvent::StageHit(2));
    registry.dispatch("album", PickerEvent::StageHit(2));
    registry.dispatch("album", PickerEvent::RemoveStaged(1));
    registry.dispatch("album", PickerEvent::StageHit(3));

    let picker = registry.picker("album").unwrap();
    let ids = picker.staged_ids();
    let unique: HashSet<i64> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn duplicate_hit_rows_stage_once() {
    // A server bug could repeat a pair; staging must still not duplicate
    let mut registry = registry_with("album", vec![]);
    open_and_search(
        &mut registry,
        "album",
        "veil",
        vec![artist(4, "Copper Veil"), artist(4, "Copper Veil")],
    );

    registry.dispatch("album", PickerEvent::StageHit(4));
    registry.dispatch("album", PickerEvent::StageHit(4));

    let picker = registry.picker("album").unwrap();
    assert_eq!(picker.staged_ids(), vec![4]);
}

#[test]
fn search_results_filter_already_staged_ids() {
    let mut registry = registry_with("album", vec![artist(1, "X"), artist(2, "W")]);
    open_and_search(
        &mut registry,
        "album",
        "x",
        vec![artist(1, "X"), artist(3, "Y")],
    );

    let picker = registry.picker("album").unwrap();
    match &picker.search {
        SearchPhase::Results(hits) => {
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].id, 3);
            assert_eq!(hits[0].name, "Y");
        }
        other => panic!("expected results, got {:?}", other),
    }
}

#[test]
fn fully_staged_results_report_no_matches() {
    let mut registry = registry_with("album", vec![artist(1, "X")]);
    open_and_search(&mut registry, "album", "x", vec![artist(1, "X")]);

    let picker = registry.picker("album").unwrap();
    assert_eq!(picker.search, SearchPhase::NoMatches("x".to_string()));
}

#[test]
fn save_writes_comma_joined_ids() {
    let mut registry = registry_with("album", vec![artist(1, "A"), artist(2, "B")]);
    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::Save);

    let picker = registry.picker("album").unwrap();
    assert_eq!(picker.form_value, "1,2");
    assert_eq!(picker.saved, picker.staged);
    assert!(!picker.is_open);
}

#[test]
fn save_of_empty_selection_writes_zero_sentinel() {
    let mut registry = registry_with("album", vec![artist(1, "A")]);
    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::RemoveStaged(1));
    registry.dispatch("album", PickerEvent::Save);

    let picker = registry.picker("album").unwrap();
    assert_eq!(picker.form_value, "0");
    assert!(picker.cleared());
    assert!(picker.committed_display().is_empty());
}

#[test]
fn save_clears_edited_until_next_mutation() {
    let mut registry = registry_with("album", vec![artist(1, "A")]);
    open_and_search(&mut registry, "album", "b", vec![artist(2, "B")]);
    registry.dispatch("album", PickerEvent::StageHit(2));
    assert!(registry.picker("album").unwrap().edited);

    registry.dispatch("album", PickerEvent::Save);
    let picker = registry.picker("album").unwrap();
    assert!(!picker.edited);
    assert!(picker.confirmed);

    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::RemoveStaged(2));
    let picker = registry.picker("album").unwrap();
    assert!(picker.edited);
    assert!(!picker.confirmed);
}

#[test]
fn reset_restores_original_and_clears_saved() {
    let original = vec![artist(1, "A"), artist(2, "B")];
    let mut registry = registry_with("album", original.clone());
    open_and_search(&mut registry, "album", "c", vec![artist(3, "C")]);
    registry.dispatch("album", PickerEvent::StageHit(3));
    registry.dispatch("album", PickerEvent::RemoveStaged(1));
    registry.dispatch("album", PickerEvent::Save);

    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::Reset);

    let picker = registry.picker("album").unwrap();
    assert_eq!(picker.staged, original);
    assert!(picker.saved.is_empty());
    assert!(!picker.edited);
    assert!(!picker.confirmed);
    assert_eq!(picker.form_value, "");
    assert!(!picker.not_saved);
}

#[test]
fn close_after_unsaved_edits_warns() {
    let mut registry = registry_with("album", vec![artist(1, "A")]);
    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::RemoveStaged(1));
    registry.dispatch("album", PickerEvent::Close);

    assert!(registry.picker("album").unwrap().not_saved);
}

#[test]
fn close_after_save_with_no_further_edits_does_not_warn() {
    let mut registry = registry_with("album", vec![artist(1, "A")]);
    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::RemoveStaged(1));
    registry.dispatch("album", PickerEvent::Save);
    assert!(!registry.picker("album").unwrap().not_saved);

    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::Close);
    assert!(!registry.picker("album").unwrap().not_saved);
}

#[test]
fn reordering_counts_as_unsaved_change() {
    let mut registry = registry_with("album", vec![artist(1, "A"), artist(2, "B")]);

    // Build staged order [2, 1] and save it
    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::RemoveStaged(1));
    open_and_search(&mut registry, "album", "a", vec![artist(1, "A")]);
    registry.dispatch("album", PickerEvent::StageHit(1));
    registry.dispatch("album", PickerEvent::Save);
    assert!(!registry.picker("album").unwrap().not_saved);

    // Rebuild the same set in order [1, 2]; positionally different
    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::RemoveStaged(2));
    open_and_search(&mut registry, "album", "b", vec![artist(2, "B")]);
    registry.dispatch("album", PickerEvent::StageHit(2));
    registry.dispatch("album", PickerEvent::Close);

    let picker = registry.picker("album").unwrap();
    assert_eq!(
        picker.staged_ids().iter().collect::<HashSet<_>>(),
        picker.saved.iter().map(|a| &a.id).collect::<HashSet<_>>()
    );
    assert!(picker.not_saved);
}

#[test]
fn stale_completion_after_close_is_dropped() {
    let mut registry = registry_with("album", vec![]);
    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::SetQuery("late".to_string()));
    registry.dispatch("album", PickerEvent::SearchStarted);
    let turn = registry.picker("album").unwrap().search_turn;

    registry.dispatch("album", PickerEvent::Close);
    registry.dispatch(
        "album",
        PickerEvent::SearchComplete {
            turn,
            hits: vec![artist(9, "Late Arrival")],
            error: None,
        },
    );

    let picker = registry.picker("album").unwrap();
    assert!(!picker.is_open);
    assert_eq!(picker.search, SearchPhase::Idle);
}

#[test]
fn completion_from_a_superseded_turn_is_dropped() {
    let mut registry = registry_with("album", vec![]);
    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::SetQuery("first".to_string()));
    registry.dispatch("album", PickerEvent::SearchStarted);
    let first_turn = registry.picker("album").unwrap().search_turn;

    registry.dispatch("album", PickerEvent::SetQuery("second".to_string()));
    registry.dispatch("album", PickerEvent::SearchStarted);
    let second_turn = registry.picker("album").unwrap().search_turn;
    assert_ne!(first_turn, second_turn);

    registry.dispatch(
        "album",
        PickerEvent::SearchComplete {
            turn: first_turn,
            hits: vec![artist(1, "First")],
            error: None,
        },
    );
    assert_eq!(
        registry.picker("album").unwrap().search,
        SearchPhase::Searching
    );

    registry.dispatch(
        "album",
        PickerEvent::SearchComplete {
            turn: second_turn,
            hits: vec![artist(2, "Second")],
            error: None,
        },
    );
    assert_eq!(
        registry.picker("album").unwrap().search,
        SearchPhase::Results(vec![artist(2, "Second")])
    );
}

#[test]
fn failed_search_shows_message_and_blocks_nothing() {
    let mut registry = registry_with("album", vec![artist(1, "A")]);
    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::SetQuery("x".to_string()));
    registry.dispatch("album", PickerEvent::SearchStarted);
    let turn = registry.picker("album").unwrap().search_turn;
    registry.dispatch(
        "album",
        PickerEvent::SearchComplete {
            turn,
            hits: vec![],
            error: Some("Search failed".to_string()),
        },
    );

    let picker = registry.picker("album").unwrap();
    assert_eq!(picker.search, SearchPhase::Failed("Search failed".to_string()));
    assert!(!picker.is_searching());

    // Save still goes through
    registry.dispatch("album", PickerEvent::Save);
    assert_eq!(registry.picker("album").unwrap().form_value, "1");
}

#[test]
fn blank_query_cannot_start_a_search() {
    let mut registry = registry_with("album", vec![]);
    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::SetQuery("   ".to_string()));
    registry.dispatch("album", PickerEvent::SearchStarted);

    let picker = registry.picker("album").unwrap();
    assert!(!picker.can_search());
    assert_eq!(picker.search, SearchPhase::Idle);
    assert_eq!(picker.search_turn, 0);
}

#[test]
fn committed_display_prefers_saved_after_save() {
    let original = vec![artist(1, "A")];
    let mut registry = registry_with("album", original.clone());
    assert_eq!(registry.picker("album").unwrap().committed_display(), &original[..]);

    open_and_search(&mut registry, "album", "b", vec![artist(2, "B")]);
    registry.dispatch("album", PickerEvent::StageHit(2));
    registry.dispatch("album", PickerEvent::Save);
    assert_eq!(
        registry
            .picker("album")
            .unwrap()
            .committed_display()
            .iter()
            .map(|a| a.id)
            .collect::<Vec<_>>(),
        vec![1, 2]
    );

    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::Reset);
    assert_eq!(registry.picker("album").unwrap().committed_display(), &original[..]);
}

#[test]
fn register_is_a_no_op_for_an_existing_prefix() {
    let mut registry = registry_with("album", vec![artist(1, "A")]);
    registry.dispatch("album", PickerEvent::Open);
    registry.register("album", vec![artist(9, "Clobber")]);

    let picker = registry.picker("album").unwrap();
    assert!(picker.is_open);
    assert_eq!(picker.staged_ids(), vec![1]);
}

#[test]
fn register_drops_duplicate_ids_from_the_form() {
    let mut registry = ArtistPickerState::default();
    registry.register("album", vec![artist(1, "A"), artist(1, "A"), artist(2, "B")]);

    let picker = registry.picker("album").unwrap();
    assert_eq!(picker.staged_ids(), vec![1, 2]);
    assert_eq!(picker.original.len(), 2);
}

#[test]
fn instances_are_independent_per_prefix() {
    let mut registry = registry_with("album", vec![artist(1, "A")]);
    registry.register("compilation", vec![artist(2, "B")]);

    registry.dispatch("album", PickerEvent::Open);
    registry.dispatch("album", PickerEvent::RemoveStaged(1));
    registry.dispatch("album", PickerEvent::Save);

    let other = registry.picker("compilation").unwrap();
    assert!(!other.is_open);
    assert_eq!(other.staged_ids(), vec![2]);
    assert_eq!(other.form_value, "");
}

#[test]
fn dispatch_to_an_unknown_prefix_is_ignored() {
    let mut registry = registry_with("album", vec![artist(1, "A")]);
    registry.dispatch("missing", PickerEvent::Open);
    assert!(registry.picker("missing").is_none());
    assert!(!registry.picker("album").unwrap().is_open);
}
