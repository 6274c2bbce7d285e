use crate::core::{translate3d, NodeDescriptor, SiteConfig};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, pos: Vec2) {
    _ = el.style().set_property("transform", &translate3d(pos));
}

/// Set (or clear, with "") the custom validity message of a form control.
pub fn set_custom_validity(el: &web::Element, message: &str) {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_custom_validity(message);
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.set_custom_validity(message);
    } else if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        select.set_custom_validity(message);
    }
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Find `#id`, creating a `<div id=id class=class>` under `<body>` when the
/// page shell does not provide one.
pub fn ensure_div(
    document: &web::Document,
    id: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = match document.get_element_by_id(id) {
        Some(el) => el,
        None => {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el.set_id(id);
            el.set_class_name(class);
            let body = document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no body"))?;
            body.append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el
        }
    };
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HTML element: {:?}", id, e))
}

/// Describe `el` and its ancestors for hover classification.
pub fn node_descriptor(el: &web::Element) -> NodeDescriptor {
    let mut chain = Vec::new();
    let mut cur = Some(el.clone());
    while let Some(node) = cur {
        let cl = node.class_list();
        let class_names = (0..cl.length()).filter_map(|i| cl.item(i)).collect();
        chain.push(NodeDescriptor {
            tag: node.tag_name().to_ascii_lowercase(),
            role: node.get_attribute("role"),
            class_names,
            parent: None,
        });
        cur = node.parent_element();
    }
    // fold root-first so each node owns its parent
    chain
        .into_iter()
        .rev()
        .reduce(|parent, child| child.with_parent(parent))
        .unwrap_or_default()
}

pub fn scroll_to_top() {
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn scroll_to_anchor(document: &web::Document, fragment: &str) {
    if let Some(el) = document.get_element_by_id(fragment) {
        el.scroll_into_view();
    } else {
        log::debug!("[dom] no anchor #{}", fragment);
    }
}

/// Read `<script id="site-config" type="application/json">`; defaults when
/// absent or invalid.
pub fn read_site_config(document: &web::Document) -> SiteConfig {
    let Some(text) = document
        .get_element_by_id("site-config")
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            SiteConfig::default()
        }
    }
}
