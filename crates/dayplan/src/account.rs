#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub variant: MenuVariant,
    pub divider_after: bool,
}

const fn item(label: &'static str, description: &'static str, icon: &'static str) -> MenuItem {
    MenuItem {
        label,
        description,
        icon,
        variant: MenuVariant::Default,
        divider_after: false,
    }
}

pub const MENU_ITEMS: &[MenuItem] = &[
    item("Profile", "View and edit your profile", "👤"),
    item("Notifications", "Manage notification preferences", "🔔"),
    item("Preferences", "App settings and themes", "⚙"),
    MenuItem {
        divider_after: true,
        ..item("Terms & Conditions", "Read our terms of service", "📄")
    },
    item("Privacy Policy", "How we handle your data", "🛡"),
    MenuItem {
        divider_after: true,
        ..item("Help & Support", "FAQs and contact us", "❓")
    },
    item("Log Out", "Sign out of your account", "⎋"),
    MenuItem {
        variant: MenuVariant::Destructive,
        ..item("Delete Account", "Permanently remove your account", "🗑")
    },
];

pub const DEFAULT_EMAIL: &str = "user@example.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    pub display_name: String,
    pub email: String,
}

impl Default for AccountProfile {
    fn default() -> Self {
        Self {
            display_name: "My Account".to_string(),
            email: DEFAULT_EMAIL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_delete_is_destructive() {
        let destructive: Vec<_> = MENU_ITEMS
            .iter()
            .filter(|i| i.variant == MenuVariant::Destructive)
            .map(|i| i.label)
            .collect();
        assert_eq!(destructive, vec!["Delete Account"]);
        assert_eq!(MENU_ITEMS.iter().filter(|i| i.divider_after).count(), 2);
    }
}
