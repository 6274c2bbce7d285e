use glam::Vec2;

// Shared interaction/layout tuning constants used by the web frontend.

// Pointer follower
pub const FOLLOWER_EASE: f32 = 0.15; // fraction of remaining distance closed per frame
pub const FOLLOWER_OFFSCREEN: Vec2 = Vec2::new(-100.0, -100.0); // before the first pointer move

// Hover classification
pub const INTERACTIVE_TAGS: &[&str] = &["a", "button"];
pub const INTERACTIVE_ROLES: &[&str] = &["button", "link"];
pub const INTERACTIVE_GROUP_CLASS: &str = "group"; // card wrappers that behave like links

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal-on-scroll";
pub const REVEALED_CLASS: &str = "is-visible";
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of element area inside the trigger region
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0; // trigger region is shrunk by this at the bottom

// Navigation
pub const NAV_CONDENSE_SCROLL_Y: f64 = 20.0;

// Contact form
pub const DEFAULT_ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycbzGddapwiVlO0vsTKgR0a01MmwvMLGNpteLFOJHvPVGb9Wh4TyjCavaKaXCR30lwP1i/exec";
pub const REDIRECT_DELAY_MS: u32 = 3000;
pub const MESSAGE_SOFT_LIMIT: usize = 1000;
pub const MESSAGE_HIGHLIGHT_AFTER: usize = 500;
