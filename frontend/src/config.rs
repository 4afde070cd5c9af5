use log::Level;

/// Vertical offset in pixels after which the header switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Simulated round trip of a booking request.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose state logging while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_path(file: &str) -> String {
    format!("/assets/{}", file.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_path_prefixes_asset_directory() {
        assert_eq!(asset_path("hero-soil.jpg"), "/assets/hero-soil.jpg");
        assert_eq!(asset_path("/logo.svg"), "/assets/logo.svg");
    }

    #[test]
    fn debug_builds_log_verbosely() {
        if cfg!(debug_assertions) {
            assert_eq!(log_level(), Level::Debug);
        } else {
            assert_eq!(log_level(), Level::Info);
        }
    }
}
