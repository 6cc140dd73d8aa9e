use gallerist::config::LinkTemplates;
use gallerist::controller::{CatalogController, ClickOutcome, LinkClick, MouseButton};
use gallerist::location::Location;
use gallerist::model::{Manifest, TagIndex};
use gallerist::viewport::ViewerSize;

fn simple_manifest() -> Manifest {
    let mut m = Manifest::new();
    m.insert("webgl".into(), vec!["01_basic".into(), "02_advanced".into()]);
    m
}

fn gallery_manifest() -> Manifest {
    let mut m = Manifest::new();
    m.insert(
        "webgl".into(),
        vec![
            "webgl_animation_keyframes".into(),
            "webgl_loader_gltf".into(),
            "webgl_loader_obj".into(),
        ],
    );
    m.insert(
        "webgpu".into(),
        vec!["webgpu_compute_particles".into(), "webgpu_loader_gltf".into()],
    );
    m.insert("css3d".into(), vec!["css3d_periodictable".into()]);
    m
}

fn controller(manifest: &Manifest, url: &str) -> CatalogController {
    CatalogController::init(manifest, TagIndex::new(), Location::parse(url), LinkTemplates::default())
}

fn visible(c: &CatalogController) -> Vec<&str> {
    c.entries()
        .iter()
        .filter(|e| !e.hidden)
        .map(|e| e.file.as_str())
        .collect()
}

fn selected_count(c: &CatalogController) -> usize {
    c.entries().iter().filter(|e| e.selected).count()
}

#[test]
fn test_empty_filter_shows_everything() {
    let c = controller(&simple_manifest(), "index.html");
    assert_eq!(visible(&c), vec!["01_basic", "02_advanced"]);
    assert!(!c.categories()[0].collapsed);
    assert_eq!(c.entry("01_basic").unwrap().name, "basic");
    assert_eq!(c.entry("02_advanced").unwrap().name, "advanced");
    assert!(c.entries().iter().all(|e| e.title.emphasis.is_none()));
}

#[test]
fn test_filter_hides_non_matching_and_keeps_header() {
    let mut c = controller(&simple_manifest(), "index.html");
    c.set_filter_input("advanced").unwrap();
    assert_eq!(visible(&c), vec!["02_advanced"]);
    assert_eq!(
        c.entry("02_advanced").unwrap().title.emphasized(),
        Some("advanced")
    );
    assert!(!c.categories()[0].collapsed);
}

#[test]
fn test_unknown_hash_is_ignored() {
    let c = controller(&simple_manifest(), "index.html#99_missing");
    assert!(c.selected().is_none());
    assert_eq!(c.viewer().src, None);
    assert!(c.source_link().is_none());
    assert_eq!(c.location().hash(), Some("99_missing"));
}

#[test]
fn test_known_hash_selects_and_loads_viewer() {
    let c = controller(&gallery_manifest(), "/examples/index.html#webgl_loader_gltf");
    assert_eq!(c.selected().unwrap().file, "webgl_loader_gltf");
    assert_eq!(c.viewer().src.as_deref(), Some("/examples/webgl_loader_gltf.html"));
    assert!(c.viewer().focused);
    let link = c.source_link().unwrap();
    assert_eq!(
        link.href,
        "https://github.com/mrdoob/three.js/blob/master/examples/webgl_loader_gltf.html"
    );
    assert_eq!(link.title, "View source code for loader / gltf on GitHub");
}

#[test]
fn test_hash_selection_iff_allow_listed() {
    let manifest = gallery_manifest();
    for hash in [
        "webgl_loader_obj",
        "css3d_periodictable",
        "webgl_loader",
        "https://evil.example/",
        "../secrets",
        "WEBGL_LOADER_OBJ",
    ] {
        let c = controller(&manifest, &format!("index.html#{hash}"));
        let allowed = c.redirects().contains(hash);
        assert_eq!(c.selected().is_some(), allowed, "hash {hash}");
        if let Some(src) = &c.viewer().src {
            assert_eq!(src, &format!("{hash}.html"));
        }
    }
}

#[test]
fn test_open_file_rejects_unknown() {
    let mut c = controller(&gallery_manifest(), "index.html#webgl_camera");
    assert!(c.selected().is_none());
    assert!(!c.open_file("javascript:alert(1)"));
    assert!(c.selected().is_none());
    assert!(c.open_file("webgpu_loader_gltf"));
    assert_eq!(c.selected().unwrap().file, "webgpu_loader_gltf");
}

#[test]
fn test_single_selection_after_any_sequence() {
    let mut c = controller(&gallery_manifest(), "index.html");
    assert_eq!(selected_count(&c), 0);
    let sequence = [
        "webgl_loader_obj",
        "css3d_periodictable",
        "not_there",
        "webgl_loader_obj",
        "webgpu_compute_particles",
    ];
    for file in sequence {
        c.select_file(file);
        assert!(selected_count(&c) <= 1);
    }
    assert_eq!(selected_count(&c), 1);
    assert_eq!(c.selected().unwrap().file, "webgpu_compute_particles");
    assert_eq!(c.location().hash(), Some("webgpu_compute_particles"));
}

#[test]
fn test_selection_closes_panel_and_sets_hash() {
    let mut c = controller(&gallery_manifest(), "/ex/index.html?q=loader");
    c.toggle_panel();
    assert!(c.panel().open);
    c.select_file("webgl_loader_obj");
    assert!(!c.panel().open);
    assert_eq!(c.location().to_string(), "/ex/index.html?q=loader#webgl_loader_obj");
}

#[test]
fn test_click_entry_plain_and_modified() {
    let mut c = controller(&gallery_manifest(), "/ex/index.html");
    let ctrl = LinkClick {
        ctrl: true,
        ..LinkClick::primary()
    };
    assert_eq!(
        c.click_entry("webgl_loader_obj", ctrl),
        ClickOutcome::External {
            href: "/ex/webgl_loader_obj.html".into()
        }
    );
    let middle = LinkClick {
        button: MouseButton::Middle,
        ..LinkClick::primary()
    };
    assert!(matches!(
        c.click_entry("webgl_loader_obj", middle),
        ClickOutcome::External { .. }
    ));
    assert!(c.selected().is_none());

    assert_eq!(
        c.click_entry("webgl_loader_obj", LinkClick::primary()),
        ClickOutcome::Selected
    );
    assert_eq!(c.viewer().src.as_deref(), Some("/ex/webgl_loader_obj.html"));
    assert_eq!(c.click_entry("missing", LinkClick::primary()), ClickOutcome::Unknown);
}

#[test]
fn test_filter_syncs_query_and_preserves_hash() {
    let mut c = controller(&gallery_manifest(), "/ex/index.html#webgl_loader_gltf");
    c.set_filter_input("  loader \t  gltf ").unwrap();
    assert_eq!(c.filter_input(), "  loader \t  gltf ");
    assert_eq!(c.filter_query(), "loader gltf");
    assert_eq!(
        c.location().to_string(),
        "/ex/index.html?q=loader%20gltf#webgl_loader_gltf"
    );

    c.set_filter_input(" gltf").unwrap();
    assert_eq!(c.location().to_string(), "/ex/index.html?q=gltf#webgl_loader_gltf");

    c.set_filter_input("loader  obj|gltf").unwrap();
    assert_eq!(
        c.location().to_string(),
        "/ex/index.html?q=loader%20obj|gltf#webgl_loader_gltf"
    );
    assert_eq!(c.location().filter_query(), "loader obj|gltf");
}

#[test]
fn test_exit_search_restores_everything() {
    let mut c = controller(&gallery_manifest(), "/ex/index.html?q=periodic#css3d_periodictable");
    assert!(c.panel().search_focused);
    assert_eq!(visible(&c), vec!["css3d_periodictable"]);
    assert!(c.categories()[0].collapsed);
    assert!(c.categories()[1].collapsed);
    assert!(!c.categories()[2].collapsed);

    c.exit_search();
    assert_eq!(c.location().to_string(), "/ex/index.html#css3d_periodictable");
    assert_eq!(c.location().query(), None);
    assert_eq!(visible(&c).len(), c.entries().len());
    assert!(c.categories().iter().all(|h| !h.collapsed));
    assert!(!c.panel().search_focused);
    assert_eq!(c.filter_input(), "");
}

#[test]
fn test_header_collapsed_iff_all_hidden() {
    let mut c = controller(&gallery_manifest(), "index.html");
    for query in ["", "gltf", "webgpu", "keyframes", "nothing matches", "o", "^css"] {
        c.set_filter_input(query).unwrap();
        for (i, header) in c.categories().iter().enumerate() {
            let all_hidden = c.category_entries(i).all(|e| e.hidden);
            assert_eq!(header.collapsed, all_hidden, "query {query:?} category {}", header.name);
        }
    }
}

#[test]
fn test_visibility_follows_regex_over_id_and_tags() {
    let manifest = gallery_manifest();
    let mut tags = TagIndex::new();
    tags.insert(
        "webgl_animation_keyframes".into(),
        vec!["gltf".into(), "compression".into()],
    );
    let mut c = CatalogController::init(&manifest, tags, Location::parse("index.html"), Default::default());
    c.set_filter_input("GLTF").unwrap();
    assert_eq!(
        visible(&c),
        vec!["webgl_animation_keyframes", "webgl_loader_gltf", "webgpu_loader_gltf"]
    );
    // Matched only through a tag: visible, nothing to emphasize.
    assert_eq!(c.entry("webgl_animation_keyframes").unwrap().title.emphasis, None);
    assert_eq!(c.entry("webgl_loader_gltf").unwrap().title.emphasized(), Some("gltf"));
}

#[test]
fn test_startup_query_is_decoded_and_applied() {
    let c = controller(&gallery_manifest(), "index.html?q=loader%20obj");
    assert_eq!(c.filter_input(), "loader obj");
    assert!(c.panel().search_focused);
    assert!(visible(&c).is_empty());
    assert!(c.categories().iter().all(|h| h.collapsed));
}

#[test]
fn test_invalid_pattern_keeps_previous_state() {
    let mut c = controller(&gallery_manifest(), "index.html");
    c.set_filter_input("obj").unwrap();
    assert_eq!(visible(&c), vec!["webgl_loader_obj"]);
    assert!(c.set_filter_input("obj(").is_err());
    assert_eq!(visible(&c), vec!["webgl_loader_obj"]);
    assert_eq!(c.location().filter_query(), "obj(");
}

#[test]
fn test_invalid_startup_pattern_leaves_list_visible() {
    let c = controller(&gallery_manifest(), "index.html?q=%5B");
    assert_eq!(c.filter_input(), "[");
    assert_eq!(visible(&c).len(), c.entries().len());
}

#[test]
fn test_search_focus_and_blur() {
    let mut c = controller(&simple_manifest(), "index.html");
    c.focus_search();
    assert!(c.panel().search_focused);
    c.set_filter_input("bas").unwrap();
    c.blur_search();
    assert!(c.panel().search_focused);
    c.set_filter_input("").unwrap();
    c.blur_search();
    assert!(!c.panel().search_focused);
}

#[test]
fn test_previews_toggle() {
    let mut c = controller(&simple_manifest(), "index.html");
    assert!(!c.panel().minimal);
    c.toggle_previews();
    assert!(c.panel().minimal);
    c.toggle_previews();
    assert!(!c.panel().minimal);
}

#[test]
fn test_viewport_adjustment_for_ios_only() {
    let size = ViewerSize {
        width: 390.0,
        height: 844.0,
    };
    let mut c = controller(&simple_manifest(), "index.html");
    assert!(!c.adjust_viewport("Mozilla/5.0 (X11; Linux x86_64) Firefox/128.0", size));
    assert_eq!(c.viewer().fixed_size, None);
    assert!(c.viewer().scrolling);

    let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    assert!(c.adjust_viewport(ua, size));
    assert_eq!(c.viewer().fixed_size, Some(size));
    assert!(!c.viewer().scrolling);
}

#[test]
fn test_written_query_reloads_to_same_filter() {
    let mut m = Manifest::new();
    m.insert("misc".into(), vec!["01_a%41".into(), "02_aa".into(), "03_100%".into()]);
    let mut c = controller(&m, "/ex/index.html");
    for query in ["a%41", "100%", "%25 x"] {
        c.set_filter_input(query).unwrap();
        let url = c.location().to_string();
        let reloaded = controller(&m, &url);
        assert_eq!(reloaded.filter_query(), c.filter_query(), "url {url}");
        assert_eq!(visible(&reloaded), visible(&c), "url {url}");
        assert_eq!(reloaded.location().to_string(), url);
    }
    c.set_filter_input("a%41").unwrap();
    assert_eq!(c.location().to_string(), "/ex/index.html?q=a%2541");
    assert_eq!(visible(&c), vec!["01_a%41"]);
}

#[test]
fn test_allow_list_covers_every_manifest_file() {
    let manifest = gallery_manifest();
    let list = gallerist::redirect::RedirectAllowList::from_manifest(&manifest);
    for file in manifest.values().flatten() {
        assert_eq!(list.resolve(file), Some(format!("{file}.html").as_str()));
    }
    assert_eq!(list.resolve("webgl_camera"), None);
}
