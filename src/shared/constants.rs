// Header defaults (overridable through `HeaderConfig`)

/// Vertical scroll offset, in CSS pixels, past which the header turns sticky
pub const STICKY_THRESHOLD_PX: f64 = 20.0;

pub const SITE_NAME: &str = "Gitarth Ganga";
pub const SITE_TAGLINE: &str = "Arya Yug";

pub const LOGO_SRC: &str = "/images/logo.svg";
pub const LOGO_ALT: &str = "Gitarth Ganga Logo";

/// Env var holding the path to a JSON header config (native client only)
pub const HEADER_CONFIG_ENV: &str = "HEADER_CONFIG";
