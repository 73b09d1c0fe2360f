use clipstash_types::ContentType;

/// Effective content-type filter for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub content_type: ContentType,
    /// True when "all" displaced a genuinely explicit type; callers surface
    /// a warning in that case.
    pub overridden: bool,
}

/// Resolve the filter from the two mutually exclusive directives.
///
/// "all" always wins; the override flag is only raised when the explicit
/// type was not the default. Without either directive the filter falls back
/// to text.
pub fn resolve_selection(explicit: ContentType, all: bool) -> Selection {
    if all {
        return Selection {
            content_type: ContentType::All,
            overridden: !explicit.is_default(),
        };
    }

    let content_type = if explicit.is_default() {
        ContentType::Text
    } else {
        explicit
    };

    Selection {
        content_type,
        overridden: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_with_default_type_is_not_an_override() {
        let selection = resolve_selection(ContentType::Default, true);
        assert_eq!(selection.content_type, ContentType::All);
        assert!(!selection.overridden);
    }

    #[test]
    fn all_displacing_an_explicit_type_is_an_override() {
        for explicit in [ContentType::Text, ContentType::Image, ContentType::Files] {
            let selection = resolve_selection(explicit, true);
            assert_eq!(selection.content_type, ContentType::All);
            assert!(selection.overridden);
        }
    }

    #[test]
    fn default_type_falls_back_to_text() {
        let selection = resolve_selection(ContentType::Default, false);
        assert_eq!(selection.content_type, ContentType::Text);
        assert!(!selection.overridden);
    }

    #[test]
    fn explicit_type_passes_through() {
        for explicit in [ContentType::Text, ContentType::Image, ContentType::Files] {
            let selection = resolve_selection(explicit, false);
            assert_eq!(selection.content_type, explicit);
            assert!(!selection.overridden);
        }
    }
}
