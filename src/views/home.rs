use crate::core::{SiteConfig, HOME_HTML};
use crate::dom;
use crate::reveal::RevealController;
use web_sys as web;

/// Hero, services, approach, selected work, why-us and CTA sections.
pub struct HomeView {
    reveal: Option<RevealController>,
}

impl HomeView {
    pub fn mount(
        document: &web::Document,
        root: &web::Element,
        config: &SiteConfig,
        fragment: Option<&str>,
    ) -> anyhow::Result<Self> {
        root.set_inner_html(HOME_HTML);
        match fragment {
            Some(f) => dom::scroll_to_anchor(document, f),
            None => dom::scroll_to_top(),
        }
        // without an observer the sections simply stay in their initial state
        let reveal = RevealController::mount(root, config.reveal)
            .map_err(|e| log::warn!("[home] scroll reveal disabled: {:?}", e))
            .ok();
        Ok(Self { reveal })
    }
}

impl Drop for HomeView {
    fn drop(&mut self) {
        let revealed = self.reveal.as_ref().map_or(0, |r| r.revealed_count());
        self.reveal.take();
        log::debug!("[home] unmounted ({} sections revealed)", revealed);
    }
}
