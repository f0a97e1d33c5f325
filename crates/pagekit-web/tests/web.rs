#![cfg(target_arch = "wasm32")]

use std::{cell::Cell, rc::Rc};

use pagekit_core::{SearchOutcome, SiteConfig, Surface, Theme, config::CONFIG_ELEMENT_ID};
use pagekit_web::{
    bootstrap::{self, Page},
    context::PageContext,
    dom::DomSurface,
    listener::Listener,
    widgets::{LazyImagesWidget, MobileNavWidget, SearchWidget, ThemeWidget, search::collect_records},
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const POSTS: &str = r#"
<div class="post-card">
  <h2 class="post-title"><a href="/posts/ownership">Understanding Ownership</a></h2>
  <p class="post-excerpt">Moves, borrows and lifetimes.</p>
  <span class="tag">rust</span><span class="tag">memory</span>
</div>
<div class="post-card">
  <h2 class="post-title"><a href="/posts/async">Async Rust</a></h2>
  <p class="post-excerpt">Futures and executors.</p>
  <span class="tag">rust</span>
</div>
"#;

fn context() -> PageContext {
    PageContext::new(SiteConfig::default()).unwrap()
}

fn fixture(ctx: &PageContext, markup: &str) -> Element {
    let root = ctx.document.create_element("div").unwrap();
    root.set_inner_html(markup);
    ctx.body.append_child(&root).unwrap();
    root
}

fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

fn overflow(ctx: &PageContext) -> String {
    ctx.body.style().get_property_value("overflow").unwrap()
}

fn press(ctx: &PageContext, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    ctx.document.dispatch_event(&event).unwrap();
}

const SEARCH: &str = r#"
<button class="search-toggle"></button>
<div class="search-overlay">
  <div class="search-box"><input class="search-input"></div>
</div>
"#;

const NAV: &str = r#"<button class="mobile-menu-toggle"></button><ul class="nav-menu"></ul>"#;

#[wasm_bindgen_test]
fn test_dom_surface_classes_and_attributes() {
    let ctx = context();
    let element = ctx.document.create_element("div").unwrap();
    let surface = DomSurface::new(element.clone());

    surface.add_class("active");
    assert!(surface.has_class("active"));
    surface.set_class("active", false);
    assert!(!element.class_list().contains("active"));

    surface.set_attribute("data-src", "/img/cover.png");
    assert_eq!(surface.attribute("data-src").as_deref(), Some("/img/cover.png"));
    surface.remove_attribute("data-src");
    assert_eq!(surface.attribute("data-src"), None);
}

#[wasm_bindgen_test]
fn test_listener_removed_on_drop() {
    let ctx = context();
    let button = fixture(&ctx, "<button>go</button>").first_element_child().unwrap();
    let clicks = Rc::new(Cell::new(0));

    let counter = clicks.clone();
    let listener = Listener::new(&button, "click", move |_| counter.set(counter.get() + 1)).unwrap();
    click(&button);
    assert_eq!(clicks.get(), 1);

    drop(listener);
    click(&button);
    assert_eq!(clicks.get(), 1);

    button.parent_element().unwrap().remove();
}

#[wasm_bindgen_test]
fn test_collect_records_from_post_cards() {
    let ctx = context();
    let root = fixture(&ctx, POSTS);

    let records = collect_records(&ctx);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Understanding Ownership");
    assert!(records[0].url.ends_with("/posts/ownership"));
    assert_eq!(records[0].excerpt, "Moves, borrows and lifetimes.");
    assert_eq!(records[0].tags, vec!["rust", "memory"]);
    assert_eq!(records[1].tags, vec!["rust"]);

    root.remove();
}

#[wasm_bindgen_test]
fn test_search_lookup_uses_page_index() {
    let ctx = context();
    let root = fixture(
        &ctx,
        &format!(
            r#"<button class="search-toggle"></button>
               <div class="search-overlay"><input class="search-input"></div>
               {POSTS}"#
        ),
    );

    let search = SearchWidget::attach(&ctx).unwrap();
    match search.lookup("async") {
        SearchOutcome::Matches { records, .. } => {
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].title, "Async Rust");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(search.lookup("a"), SearchOutcome::Idle);

    drop(search);
    root.remove();
}

#[wasm_bindgen_test]
fn test_mobile_nav_outside_click_restores_scroll() {
    let ctx = context();
    let root = fixture(
        &ctx,
        r#"<button class="mobile-menu-toggle"></button><ul class="nav-menu"></ul>"#,
    );
    let toggle = ctx.find(".mobile-menu-toggle").unwrap();
    let menu = ctx.find(".nav-menu").unwrap();

    let nav = MobileNavWidget::attach(&ctx).unwrap();
    click(&toggle);
    assert!(nav.is_open());
    assert!(menu.class_list().contains("mobile-active"));
    assert_eq!(ctx.body.style().get_property_value("overflow").unwrap(), "hidden");

    ctx.body.click();
    assert!(!nav.is_open());
    assert_eq!(ctx.body.style().get_property_value("overflow").unwrap(), "");

    drop(nav);
    root.remove();
}

#[wasm_bindgen_test]
fn test_page_without_markup_skips_bound_widgets() {
    let ctx = context();
    let page = Page::attach(&ctx);
    let attached = page.attached();

    assert!(attached.contains(&"theme"));
    assert!(!attached.contains(&"search"));
    assert!(!attached.contains(&"mobile_nav"));
    assert!(!attached.contains(&"language"));
    assert!(page.search().is_none());
}

#[wasm_bindgen_test]
fn test_search_escape_and_backdrop_close_restore_scroll() {
    let ctx = context();
    let root = fixture(&ctx, SEARCH);
    let toggle = ctx.find(".search-toggle").unwrap();
    let overlay = ctx.find(".search-overlay").unwrap();
    let search = SearchWidget::attach(&ctx).unwrap();

    click(&toggle);
    assert!(overlay.class_list().contains("active"));
    assert_eq!(overflow(&ctx), "hidden");

    press(&ctx, "Escape");
    assert!(!overlay.class_list().contains("active"));
    assert_eq!(overflow(&ctx), "");

    click(&toggle);
    click(&ctx.find(".search-box").unwrap());
    assert!(overlay.class_list().contains("active"));

    click(&overlay);
    assert!(!overlay.class_list().contains("active"));
    assert_eq!(overflow(&ctx), "");

    drop(search);
    root.remove();
}

#[wasm_bindgen_test]
fn test_scroll_stays_locked_while_another_modal_is_open() {
    let ctx = context();
    let root = fixture(&ctx, &format!("{SEARCH}{NAV}"));
    let menu_toggle = ctx.find(".mobile-menu-toggle").unwrap();
    let overlay = ctx.find(".search-overlay").unwrap();
    let search = SearchWidget::attach(&ctx).unwrap();
    let nav = MobileNavWidget::attach(&ctx).unwrap();

    click(&ctx.find(".search-toggle").unwrap());
    click(&menu_toggle);
    assert!(nav.is_open());
    assert!(overlay.class_list().contains("active"));
    assert_eq!(overflow(&ctx), "hidden");

    click(&menu_toggle);
    assert!(!nav.is_open());
    assert_eq!(overflow(&ctx), "hidden");

    press(&ctx, "Escape");
    assert!(!overlay.class_list().contains("active"));
    assert_eq!(overflow(&ctx), "");

    drop(search);
    drop(nav);
    root.remove();
}

#[wasm_bindgen_test]
fn test_lazy_images_load_immediately_without_observer() {
    let ctx = context();
    let root = fixture(&ctx, r#"<img class="cover" data-src="/img/cover.png">"#);
    let image = ctx.find("img.cover").unwrap();

    let _lazy = LazyImagesWidget::attach_with(&ctx, false).unwrap();
    assert_eq!(image.get_attribute("src").as_deref(), Some("/img/cover.png"));
    assert!(!image.has_attribute("data-src"));
    assert!(image.class_list().contains("loaded"));

    root.remove();
}

#[wasm_bindgen_test]
fn test_stored_theme_ignores_system_change() {
    let ctx = context();
    let storage = ctx.window.local_storage().unwrap().unwrap();
    storage.set_item("theme", "light").unwrap();
    let root = ctx.document.document_element().unwrap();

    let theme = ThemeWidget::attach(&ctx).unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));

    assert!(!theme.on_system_change(true));
    assert_eq!(theme.current(), Theme::Light);
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));

    theme.reset();
    assert_eq!(storage.get_item("theme").unwrap(), None);
    assert!(theme.on_system_change(true));
    assert_eq!(theme.current(), Theme::Dark);
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
fn test_load_config_reads_script_element() {
    let ctx = context();
    let script = ctx.document.create_element("script").unwrap();
    script.set_id(CONFIG_ELEMENT_ID);
    script.set_attribute("type", "application/json").unwrap();
    script.set_text_content(Some(r#"{ "search": { "max_results": 5 } }"#));
    ctx.body.append_child(&script).unwrap();

    let config = bootstrap::load_config(&ctx.document).unwrap();
    assert_eq!(config.search.max_results, 5);

    script.remove();
    let config = bootstrap::load_config(&ctx.document).unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[wasm_bindgen_test]
fn test_boot_after_parsing_attaches_page() {
    let ctx = context();
    let script = ctx.document.create_element("script").unwrap();
    script.set_id(CONFIG_ELEMENT_ID);
    script.set_attribute("type", "application/json").unwrap();
    script.set_text_content(Some(
        r#"{ "performance": { "enabled": false }, "service_worker": { "enabled": false } }"#,
    ));
    ctx.body.append_child(&script).unwrap();

    bootstrap::boot().unwrap();
    assert!(bootstrap::with_page(|page| page.theme().is_some()).unwrap_or(false));

    bootstrap::dispose();
    assert!(bootstrap::with_page(|_| ()).is_none());
    script.remove();
}
