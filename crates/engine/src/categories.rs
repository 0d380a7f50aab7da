//! Icons for the well-known expense categories.

const OTHER_ICON: &str = "📌";

const ICONS: [(&str, &str); 6] = [
    ("Food", "🍔"),
    ("Transport", "🚗"),
    ("Shopping", "🛍️"),
    ("Entertainment", "🎬"),
    ("Bills", "💡"),
    ("Other", OTHER_ICON),
];

/// Icon for `category`; exact match, unknown categories get the pin.
#[must_use]
pub fn icon_for(category: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, icon)| *icon)
        .unwrap_or(OTHER_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_categories() {
        assert_eq!(icon_for("Food"), "🍔");
        assert_eq!(icon_for("Bills"), "💡");
        assert_eq!(icon_for("food"), OTHER_ICON);
        assert_eq!(icon_for("Gym"), OTHER_ICON);
    }
}
