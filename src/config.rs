use anyhow::Context;
use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const SETTINGS_PATH: &str = "assets/settings.ron";

/// Feature switches, read once at startup. `off` overrides every
/// visual and audio flourish at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub draw_background: bool,
    pub parallax_background: bool,
    pub draw_tray_art: bool,
    pub draw_card_art: bool,
    pub tween_cards: bool,
    pub show_cursor: bool,
    pub animate_stars: bool,
    pub audio: bool,
    pub off: bool,
    pub debug_overlay: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            draw_background: true,
            parallax_background: true,
            draw_tray_art: true,
            draw_card_art: true,
            tween_cards: true,
            show_cursor: true,
            animate_stars: true,
            audio: true,
            off: false,
            debug_overlay: false,
        }
    }
}

impl Settings {
    /// Everything off: placeholder shapes, no tweens, no sound.
    pub fn plain() -> Self {
        Self {
            off: true,
            ..Self::default()
        }
    }

    pub fn parse(src: &str) -> anyhow::Result<Self> {
        ron::from_str(src).context("parsing settings")
    }

    /// Reads the settings file. A missing or broken file is
    /// not fatal: the defaults are used instead.
    pub async fn load(path: &str) -> Self {
        let res = match macroquad::file::load_string(path).await {
            Ok(src) => Self::parse(&src),
            Err(e) => Err(anyhow::Error::new(e).context(format!("reading {path:?}"))),
        };

        match res {
            Ok(settings) => {
                info!("Settings: {settings:?}");
                settings
            }
            Err(e) => {
                warn!("Using default settings: {e:#}");
                Self::default()
            }
        }
    }

    pub fn background(&self) -> bool {
        self.draw_background && !self.off
    }

    pub fn parallax(&self) -> bool {
        self.parallax_background && !self.off
    }

    pub fn tray_art(&self) -> bool {
        self.draw_tray_art && !self.off
    }

    pub fn card_art(&self) -> bool {
        self.draw_card_art && !self.off
    }

    pub fn tween(&self) -> bool {
        self.tween_cards && !self.off
    }

    pub fn cursor(&self) -> bool {
        self.show_cursor && !self.off
    }

    pub fn stars(&self) -> bool {
        self.animate_stars && !self.off
    }

    pub fn sound(&self) -> bool {
        self.audio && !self.off
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::parse("(tween_cards: false, debug_overlay: true)").unwrap();

        assert!(!settings.tween());
        assert!(settings.debug_overlay);
        assert!(settings.card_art());
        assert!(settings.sound());
    }

    #[test]
    fn test_off_overrides_everything() {
        let settings = Settings::plain();

        assert!(!settings.background());
        assert!(!settings.parallax());
        assert!(!settings.tray_art());
        assert!(!settings.card_art());
        assert!(!settings.tween());
        assert!(!settings.cursor());
        assert!(!settings.stars());
        assert!(!settings.sound());
    }

    #[test]
    fn test_broken_file_is_an_error() {
        assert!(Settings::parse("(tween_cards: maybe)").is_err());
    }

    #[test]
    fn test_round_trips_through_ron() {
        let settings = Settings {
            parallax_background: false,
            ..Settings::default()
        };
        let src = ron::to_string(&settings).unwrap();

        assert_eq!(Settings::parse(&src).unwrap(), settings);
    }
}
