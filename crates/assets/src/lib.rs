use std::borrow::Cow;

use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};

/// Embedded icon assets for the tracker window UI.
///
/// Provides the svg files behind
/// [`IconName`](https://docs.rs/tracker-ui/latest/tracker_ui/enum.IconName.html).
///
/// ## Usage
///
/// ```rust,no_run
/// use gpui::Application;
/// use tracker_ui_assets::Assets;
///
/// let app = Application::new().with_assets(Assets);
/// ```
#[derive(rust_embed::RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow!("could not find asset at path \"{path}\""))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_icon_is_bundled() {
        let icon = Assets.load("icons/close.svg").unwrap();
        assert!(icon.is_some());

        let listed = Assets.list("icons/").unwrap();
        assert!(listed.iter().any(|p| p.as_ref() == "icons/close.svg"));
    }

    #[test]
    fn test_unknown_path_is_an_error() {
        assert!(Assets.load("icons/nope.svg").is_err());
        assert!(Assets.load("").unwrap().is_none());
    }
}
