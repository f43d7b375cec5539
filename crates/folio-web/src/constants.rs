// DOM hooks the page markup is expected to provide.

// Routing
pub const SECTION_SELECTOR: &str = ".section[id]";
pub const CONTROL_SELECTOR: &str = "[data-target]";
pub const TARGET_ATTR: &str = "data-target";
pub const REENTRY_ATTR: &str = "data-reentry";
pub const DEFAULT_SECTION_ATTR: &str = "data-default-section"; // on <body>
pub const SECTION_ENTER_EVENT: &str = "sectionenter"; // after a re-entry hook

// Header
pub const NAV_BUTTON_SELECTOR: &str = ".nav-btn";
pub const MENU_OPEN_ID: &str = "menuOpen";
pub const MOBILE_OVERLAY_CLASS: &str = "mobile-nav-overlay";
pub const MOBILE_CARD_CLASS: &str = "mobile-nav-card";
pub const MOBILE_LINK_CLASS: &str = "mobile-link";
pub const MOBILE_CLOSE_CLASS: &str = "mobile-close";
pub const BACK_TOP_ID: &str = "backTop";

// State classes
pub const SHOW_CLASS: &str = "show";
pub const ACTIVE_CLASS: &str = "active";
pub const PULSE_CLASS: &str = "pulse";

// Accessibility
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Skills
pub const BAR_SELECTOR: &str = ".bar";
pub const BAR_FILL_SELECTOR: &str = ".bar-fill";
pub const RADIAL_SELECTOR: &str = ".radial";
pub const RADIAL_PROGRESS_SELECTOR: &str = ".progress";
pub const PCT_ATTR: &str = "data-pct";

// Typing
pub const TYPED_SELECTOR: &str = ".typed";
pub const PHRASES_ATTR: &str = "data-phrases"; // `|`-separated

// Modal
pub const MODAL_ID: &str = "modal";
pub const MODAL_TITLE_ID: &str = "modalTitle";
pub const MODAL_DESC_ID: &str = "modalDesc";
pub const MODAL_LIVE_ID: &str = "modalLive";
pub const MODAL_CLOSE_ID: &str = "modalClose";
pub const VIEW_PROJECT_SELECTOR: &str = ".view-project";
pub const PROJECT_SELECTOR: &str = ".project";
pub const MODAL_FALLBACK_HREF: &str = "#";

// Contact + toast
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const TOAST_ID: &str = "toast";

// Footer
pub const YEAR_ID: &str = "year";
