/// A label this step knows how to apply.
///
/// Only the name is sent when labeling; color and description describe how
/// the label is expected to look on the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelDefinition {
    /// Label name as shown on GitHub (e.g., "ai:reviewed")
    pub name: &'static str,
    /// Hex color without the leading '#'
    pub color: &'static str,
    pub description: &'static str,
}

/// Marks a PR on which the AI final review has run.
pub const AI_REVIEWED: LabelDefinition = LabelDefinition {
    name: "ai:reviewed",
    color: "FB923C",
    description: "AI has performed a final review on this PR",
};

impl std::fmt::Display for LabelDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// GitHub label colors are exactly six hex digits with no '#'.
    fn is_valid_color(color: &str) -> bool {
        color.len() == 6 && color.chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_ai_reviewed_definition() {
        assert_eq!(AI_REVIEWED.name, "ai:reviewed");
        assert_eq!(AI_REVIEWED.color, "FB923C");
        assert!(!AI_REVIEWED.description.is_empty());
    }

    #[test]
    fn test_ai_reviewed_color_is_valid() {
        assert!(is_valid_color(AI_REVIEWED.color));
    }

    #[test]
    fn test_is_valid_color() {
        assert!(is_valid_color("ff00AA"));
        assert!(!is_valid_color("#FB923C"));
        assert!(!is_valid_color("FB92"));
        assert!(!is_valid_color("GGGGGG"));
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(AI_REVIEWED.to_string(), "ai:reviewed");
    }
}
