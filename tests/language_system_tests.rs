use locale_core::{
    create_default_manager, placeholders, LanguageConfig, LanguageManager, Placeholders,
};
use std::sync::Arc;

fn manager() -> LanguageManager {
    let _ = env_logger::builder().is_test(true).try_init();
    create_default_manager().expect("manager")
}

#[test]
fn test_hit_miss_accounting() {
    let mgr = manager();
    let texts: Vec<String> = (0..10).map(|i| format!("&aLine number {}", i)).collect();

    for text in &texts {
        mgr.apply_placeholders_and_colors(text, &Placeholders::new());
    }
    for text in &texts {
        mgr.apply_placeholders_and_colors(text, &Placeholders::new());
    }

    let stats = mgr.statistics();
    assert_eq!(stats.misses, 10);
    assert_eq!(stats.hits, 10);
    assert!((stats.hit_ratio - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_repeated_render_is_stable() {
    let mgr = manager();
    let ph = placeholders! { "n" => "Bob" };

    let first = mgr.apply_placeholders_and_colors("Hi {n}", &ph);
    let hits_before = mgr.statistics().hits;
    let second = mgr.apply_placeholders_and_colors("Hi {n}", &ph);

    assert_eq!(first, second);
    assert_eq!(mgr.statistics().hits, hits_before + 1);
}

#[test]
fn test_colorized_and_plain_variants_never_share_results() {
    let mgr = manager();
    let ph = Placeholders::new();

    let colored = mgr.apply_placeholders_and_colors("&aHello", &ph);
    let plain = mgr.apply_placeholders_only("&aHello", &ph);

    assert_eq!(colored, "§aHello");
    assert_eq!(plain, "&aHello");
}

#[test]
fn test_missing_key_degrades_to_sentinel() {
    let mgr = manager();
    let msg = mgr
        .get_message("definitely_not_configured", &Placeholders::new())
        .expect("sentinel, not a crash");
    assert_eq!(msg, "Missing message: definitely_not_configured");

    // Collection shapes degrade to empty instead
    assert!(mgr
        .get_item_lore("item.NOTHING.lore", &Placeholders::new())
        .is_empty());
}

#[test]
fn test_reload_empties_every_category() {
    let mgr = manager();
    let ph = placeholders! { "player" => "Steve", "item" => "Apple", "price" => "10",
        "stock" => "3", "damage" => "7", "hearts" => "2", "charges" => "5" };

    mgr.get_message("welcome", &ph);
    mgr.get_message_for_console("welcome", &ph);
    mgr.get_gui_item_name("shop.buy_button.name", &ph);
    mgr.get_gui_item_lore("shop.buy_button.lore", &ph);
    mgr.get_gui_item_lore_as_list("shop.buy_button.lore", &ph);
    mgr.get_item_lore("custom.healing_wand.lore", &ph);
    mgr.get_item_lore_as_list("custom.healing_wand.lore", &ph);
    mgr.get_entity_name("ZOMBIE");
    mgr.get_material_name("DIAMOND_SWORD");
    mgr.small_caps("status");

    let stats = mgr.statistics();
    for category in &stats.categories {
        assert!(
            category.size > 0,
            "category {} was never populated",
            category.category.name()
        );
    }

    mgr.reload().expect("reload");

    let stats = mgr.statistics();
    for category in &stats.categories {
        assert_eq!(category.size, 0, "category {} kept entries", category.category.name());
        assert!(category.capacity > 0);
    }
}

#[test]
fn test_multiline_placeholder_expansion() {
    let mgr = manager();
    let ph = placeholders! { "price" => "10", "description" => "Fast\nReliable\nCheap",
        "item" => "Elytra" };

    let lore = mgr.get_gui_item_lore_multiline("shop.sell_button.lore", &ph);
    assert_eq!(
        lore,
        vec![
            "§7Payout: §e10 coins",
            "§7Description:",
            "§7Fast",
            "§7Reliable",
            "§7Cheap",
        ]
    );
}

#[test]
fn test_statistics_snapshot_does_not_mutate() {
    let mgr = manager();
    mgr.apply_placeholders_and_colors("&aHello", &Placeholders::new());

    let first = mgr.statistics();
    let second = mgr.statistics();
    assert_eq!(first.hits, second.hits);
    assert_eq!(first.misses, second.misses);
}

#[test]
fn test_on_disk_overrides_take_effect_after_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = LanguageConfig::default().with_data_dir(dir.path());
    let mgr = LanguageManager::new(config).expect("manager");
    let ph = placeholders! { "player" => "Steve" };

    let before = mgr
        .get_message_without_prefix("player_join", &ph)
        .expect("message");
    assert!(before.contains("joined"));

    let locale_dir = dir.path().join("en_US");
    std::fs::create_dir_all(&locale_dir).expect("mkdir");
    std::fs::write(
        locale_dir.join("messages.json"),
        r#"{ "player_join": { "message": "&e{player} &7warped in", "enabled": true } }"#,
    )
    .expect("write override");

    mgr.reload().expect("reload");

    let after = mgr
        .get_message_without_prefix("player_join", &ph)
        .expect("message");
    assert_eq!(after, "§eSteve §7warped in");
}

#[test]
fn test_concurrent_resolves_with_reload() {
    let mgr = Arc::new(manager());
    let threads = 4;
    let per_thread = 200;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let mgr = Arc::clone(&mgr);
            std::thread::spawn(move || {
                for i in 0..per_thread {
                    let ph = placeholders! { "player" => format!("p{}-{}", t, i % 8) };
                    let msg = mgr
                        .get_message_without_prefix("player_join", &ph)
                        .expect("message");
                    assert!(msg.contains(&format!("p{}-{}", t, i % 8)));
                }
            })
        })
        .collect();

    for _ in 0..3 {
        mgr.reload().expect("reload");
    }
    for handle in handles {
        handle.join().expect("thread");
    }

    // Exactly one counter bump per completed lookup, reloads included
    let stats = mgr.statistics();
    assert_eq!(stats.hits + stats.misses, (threads * per_thread) as u64);
}
