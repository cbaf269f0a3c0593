//! Image load-failure recovery.
//!
//! The profile photo swaps to a generated avatar; project thumbnails simply
//! disappear. Neither retries nor reports anything.

const AVATAR_ENDPOINT: &str = "https://ui-avatars.com/api/";

/// Build a generated-initials avatar URL for `name`.
///
/// Words are percent-encoded individually and joined with `+`, which is how
/// the avatar service expects spaces. `background` and `color` are hex
/// colours without the leading `#`.
pub fn fallback_avatar_url(name: &str, background: &str, color: &str) -> String {
    let name = name
        .split_whitespace()
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join("+");
    let background = background.trim_start_matches('#');
    let color = color.trim_start_matches('#');
    format!(
        "{AVATAR_ENDPOINT}?name={name}&background={}&color={}",
        urlencoding::encode(background),
        urlencoding::encode(color)
    )
}

/// What an image does when its source fails to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageFallback {
    /// Swap to another source, once.
    Replace(String),
    /// Hide the element.
    Hide,
}

/// Outcome of a load error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackAction {
    /// Point the element at this source.
    SwapSource(String),
    /// Stop displaying the element.
    Hide,
    /// Keep what is there; the fallback itself failed.
    Settle,
}

impl ImageFallback {
    /// Decide what to do after the element failed to load `current_src`.
    pub fn on_error(&self, current_src: &str) -> FallbackAction {
        match self {
            ImageFallback::Replace(fallback) if fallback != current_src => {
                FallbackAction::SwapSource(fallback.clone())
            },
            ImageFallback::Replace(_) => FallbackAction::Settle,
            ImageFallback::Hide => FallbackAction::Hide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_profile_placeholder() {
        assert_eq!(
            fallback_avatar_url("Gavin Tay", "112240", "fdfbf7"),
            "https://ui-avatars.com/api/?name=Gavin+Tay&background=112240&color=fdfbf7"
        );
    }

    #[test]
    fn collapses_whitespace_and_strips_hash() {
        assert_eq!(
            fallback_avatar_url("  Ada   Lovelace ", "#000000", "#ffffff"),
            "https://ui-avatars.com/api/?name=Ada+Lovelace&background=000000&color=ffffff"
        );
    }

    #[test]
    fn encodes_reserved_characters() {
        let url = fallback_avatar_url("Zoë & Co", "112240", "fdfbf7");
        assert!(url.contains("name=Zo%C3%AB+%26+Co&"), "{url}");
    }

    #[test]
    fn failed_profile_photo_switches_to_placeholder() {
        let placeholder = fallback_avatar_url("Gavin Tay", "112240", "fdfbf7");
        let fallback = ImageFallback::Replace(placeholder.clone());

        let action = fallback.on_error("/selfie.jpg");
        assert_eq!(action, FallbackAction::SwapSource(placeholder.clone()));

        // The placeholder failing as well must not loop.
        assert_eq!(fallback.on_error(&placeholder), FallbackAction::Settle);
    }

    #[test]
    fn failed_thumbnail_hides() {
        assert_eq!(ImageFallback::Hide.on_error("/earthly.png"), FallbackAction::Hide);
    }
}
