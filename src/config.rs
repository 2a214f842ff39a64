/// External checkout page. Every call-to-action opens it in a new tab; no
/// parameters are passed and nothing comes back.
pub const CHECKOUT_URL: &str = "https://pay.hotmart.com/P104151728F";

/// VSL embed, with related-video suggestions off and minimal branding.
pub const VSL_EMBED_URL: &str =
    "https://www.youtube-nocookie.com/embed/o3D7HfGhaTE?rel=0&modestbranding=1";

/// Above-the-fold images warmed as soon as the landing page mounts.
pub const IMAGE_PRELOADS: &[&str] = &[
    "/images/hero-ai-tech.webp",
    "/images/money-growth.webp",
    "/images/productivity-ai.webp",
];

/// The offer countdown starts at 01:13:36 and resets on every page load.
pub const CTA_COUNTDOWN_START: u64 = 3600 + 13 * 60 + 36;

/// The header switches to its solid style past this scroll offset.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;
