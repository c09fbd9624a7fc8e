//! End-to-end flows over the public store API

use std::collections::{BTreeMap, HashSet};

use proptest::prelude::*;
use serde_json::json;

use storefront_builder::builder::sync::SyncStatus;
use storefront_builder::builder::{catalog, render, AddOptions, BlockView, Command, Plan};
use storefront_builder::visual_editor::platform;
use storefront_builder::{BlockType, BuilderConfig, BuilderError, BuilderStore, Screen};

fn empty_store() -> BuilderStore {
    BuilderStore::new(&BuilderConfig::default())
}

fn seeded_store() -> BuilderStore {
    BuilderStore::seeded(&BuilderConfig::default()).unwrap()
}

fn types_on(store: &BuilderStore, screen: Screen) -> Vec<BlockType> {
    store.blocks(screen).iter().map(|b| b.block_type).collect()
}

#[test]
fn starter_layout_has_marquee_slider_and_feed() {
    let store = seeded_store();

    assert_eq!(
        types_on(&store, Screen::Home),
        [
            BlockType::PromoMarquee,
            BlockType::BannerSlider,
            BlockType::ProductGrid
        ]
    );
    let feed = &store.blocks(Screen::Home)[2];
    assert_eq!(feed.settings.get("infinite"), Some(json!(true)));
    assert_eq!(feed.settings.get("label"), Some(json!("BOTTOM FEED")));
    assert!(store.selected_id().is_none());
    assert_eq!(store.plan(), Plan::Trial);

    for screen in Screen::ALL.into_iter().filter(|s| *s != Screen::Home) {
        assert!(store.blocks(screen).is_empty(), "{screen} should start empty");
    }
}

#[test]
fn blocks_are_appended_in_order_and_selected() {
    let mut store = empty_store();
    store.dispatch(Command::AddBlock(BlockType::Banner)).unwrap();
    store.dispatch(Command::AddBlock(BlockType::Text)).unwrap();
    store.dispatch(Command::AddBlock(BlockType::Spacer)).unwrap();

    assert_eq!(
        types_on(&store, Screen::Home),
        [BlockType::Banner, BlockType::Text, BlockType::Spacer]
    );
    let last = &store.active_blocks()[2];
    assert_eq!(store.selected_id(), Some(last.id.as_str()));

    let ids: HashSet<&str> = store.active_blocks().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn trial_caps_home_until_subscription() {
    let mut store = empty_store();
    for _ in 0..10 {
        store.dispatch(Command::AddBlock(BlockType::Text)).unwrap();
    }

    let err = store.dispatch(Command::AddBlock(BlockType::Text)).unwrap_err();
    assert!(matches!(
        err,
        BuilderError::QuotaExceeded {
            screen: Screen::Home,
            limit: 10
        }
    ));
    assert_eq!(store.active_blocks().len(), 10);
    assert!(store.upgrade_prompt());

    store.dispatch(Command::ApproveSubscription).unwrap();
    assert_eq!(store.plan(), Plan::Pro);
    assert!(!store.upgrade_prompt());

    store.dispatch(Command::AddBlock(BlockType::Text)).unwrap();
    assert_eq!(store.active_blocks().len(), 11);
}

#[test]
fn other_screens_are_not_capped_on_trial() {
    let mut store = empty_store();
    for _ in 0..12 {
        store
            .add_block(Screen::Cms, BlockType::Text, AddOptions::default())
            .unwrap();
    }
    assert_eq!(store.blocks(Screen::Cms).len(), 12);
}

#[test]
fn editing_one_key_keeps_the_rest() {
    let mut store = seeded_store();
    let feed_id = store.blocks(Screen::Home)[2].id.clone();

    store
        .dispatch(Command::EditSetting {
            block_id: feed_id.clone(),
            key: "label".to_string(),
            value: json!("TRENDING"),
        })
        .unwrap();

    let feed = store.block(Screen::Home, &feed_id).unwrap();
    assert_eq!(feed.settings.get("label"), Some(json!("TRENDING")));
    assert_eq!(feed.settings.get("infinite"), Some(json!(true)));
    assert_eq!(feed.settings.get("enabled"), Some(json!(true)));
}

#[test]
fn removing_twice_is_harmless() {
    let mut store = seeded_store();
    let slider_id = store.blocks(Screen::Home)[1].id.clone();

    assert!(store.remove_block(Screen::Home, &slider_id));
    assert!(!store.remove_block(Screen::Home, &slider_id));
    store.dispatch(Command::DeleteBlock(slider_id)).unwrap();

    assert_eq!(
        types_on(&store, Screen::Home),
        [BlockType::PromoMarquee, BlockType::ProductGrid]
    );
}

#[test]
fn slider_preview_is_stable_across_renders() {
    let store = seeded_store();
    let slider = &store.blocks(Screen::Home)[1];

    let first = render(slider, store.theme());
    let second = render(slider, store.theme());
    assert_eq!(first, second);

    let BlockView::Slider { slides, .. } = first else {
        panic!("expected slider view");
    };
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].title, "NEW DROPS");
    assert!(slides[0].image.starts_with("https://"));
}

#[test]
fn switching_screen_clears_selection() {
    let mut store = seeded_store();
    let marquee_id = store.blocks(Screen::Home)[0].id.clone();
    store.dispatch(Command::SelectBlock(marquee_id)).unwrap();
    assert!(store.selected_block().is_some());

    store.dispatch(Command::SwitchScreen(Screen::Cart)).unwrap();
    assert_eq!(store.active_screen(), Screen::Cart);
    assert!(store.selected_id().is_none());
    assert!(store.active_blocks().is_empty());
}

#[test]
fn whitelisted_blocks_stay_on_their_screen() {
    let mut store = empty_store();
    let err = store
        .add_block(Screen::Home, BlockType::AddToCart, AddOptions::default())
        .unwrap_err();
    assert!(matches!(err, BuilderError::IneligibleScreen { .. }));

    store
        .add_block(Screen::Pdp, BlockType::AddToCart, AddOptions::default())
        .unwrap();
    assert_eq!(types_on(&store, Screen::Pdp), [BlockType::AddToCart]);
}

#[test]
fn exported_layout_imports_into_a_fresh_store() {
    let mut source = seeded_store();
    source
        .dispatch(Command::EditTheme {
            key: "primary_color".to_string(),
            value: json!("#112233"),
        })
        .unwrap();
    let json = source.export_json().unwrap();

    let mut target = empty_store();
    target.dispatch(Command::Import(json)).unwrap();

    assert_eq!(target.config(), source.config());
    assert_eq!(target.theme().primary_color, "#112233");
}

#[test]
fn broken_import_leaves_layout_alone() {
    let mut store = seeded_store();
    let before = store.config().clone();

    assert!(store.dispatch(Command::Import("{ not json".to_string())).is_err());
    assert_eq!(store.config(), &before);
}

#[tokio::test]
async fn sync_round_trip_after_delay() {
    let mut store = seeded_store();
    store.dispatch(Command::BeginSync).unwrap();
    assert_eq!(store.sync_status(), SyncStatus::Syncing);
    assert!(store.dispatch(Command::BeginSync).is_err());

    platform::sleep(5).await;
    store.dispatch(Command::FinishSync).unwrap();

    let SyncStatus::Synced(report) = store.sync_status() else {
        panic!("expected synced status");
    };
    assert_eq!(report.blocks, 3);
    assert!(report.bytes > 0);
}

proptest! {
    #[test]
    fn adds_keep_order_ids_and_home_ceiling(
        ops in prop::collection::vec(
            (0..Screen::ALL.len(), 0..BlockType::ALL.len(), prop::bool::weighted(0.05)),
            0..80,
        )
    ) {
        let mut store = empty_store();
        let limit = store.home_limit();
        let mut expected: BTreeMap<Screen, Vec<BlockType>> = BTreeMap::new();

        for (screen_idx, type_idx, approve) in ops {
            let screen = Screen::ALL[screen_idx];
            let block_type = BlockType::ALL[type_idx];
            if approve {
                store.approve_subscription();
            }

            let placed = expected.entry(screen).or_default();
            match store.add_block(screen, block_type, AddOptions::default()) {
                Ok(entry) => {
                    prop_assert_eq!(entry.block_type, block_type);
                    placed.push(block_type);
                }
                Err(BuilderError::IneligibleScreen { .. }) => {
                    prop_assert!(!catalog::metadata_for(block_type).allows(screen));
                }
                Err(BuilderError::QuotaExceeded { screen: rejected, limit: ceiling }) => {
                    prop_assert_eq!(rejected, Screen::Home);
                    prop_assert_eq!(ceiling, limit);
                    prop_assert_eq!(store.plan(), Plan::Trial);
                    prop_assert_eq!(placed.len(), limit);
                    prop_assert!(store.upgrade_prompt());
                }
                Err(other) => prop_assert!(false, "unexpected rejection: {other}"),
            }

            if store.plan() == Plan::Trial {
                prop_assert!(store.blocks(Screen::Home).len() <= limit);
            }
        }

        let mut seen = HashSet::new();
        for screen in Screen::ALL {
            let want = expected.get(&screen).cloned().unwrap_or_default();
            prop_assert_eq!(types_on(&store, screen), want);
            for block in store.blocks(screen) {
                prop_assert!(seen.insert(block.id.clone()), "duplicate id {}", block.id);
            }
        }
    }
}
