//! Role-filtered dashboard menu.
//!
//! The sidebar is built from a static, ordered list of [`MenuEntry`] values.
//! Each render filters that list down to the entries whose role set contains
//! the session's role. Order is display order and is never changed.

use serde::{Deserialize, Serialize};

/// User role attached to the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
    Staff,
    Librarian,
    Accountant,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::Teacher,
        Role::Student,
        Role::Staff,
        Role::Librarian,
        Role::Accountant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Staff => "staff",
            Role::Librarian => "librarian",
            Role::Accountant => "accountant",
        }
    }

    /// Parse a wire role name. Matching is exact; anything else is `None`,
    /// which hides every menu entry.
    pub fn parse(s: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|r| r.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::Staff => "Staff",
            Role::Librarian => "Librarian",
            Role::Accountant => "Accountant",
        }
    }
}

/// One sidebar link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub path: &'static str,
    pub label: &'static str,
    /// Roles that see this entry. Empty means nobody does.
    pub roles: &'static [Role],
}

impl MenuEntry {
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Dashboard sidebar, in display order.
pub const DASHBOARD_MENU: &[MenuEntry] = &[
    MenuEntry {
        path: "/dashboard",
        label: "Overview",
        roles: &Role::ALL,
    },
    MenuEntry {
        path: "/dashboard/routine",
        label: "My Routine",
        roles: &[Role::Student],
    },
    MenuEntry {
        path: "/dashboard/teacher-routine",
        label: "Class Routines",
        roles: &[Role::Teacher],
    },
    MenuEntry {
        path: "/dashboard/routines",
        label: "Manage Routines",
        roles: &[Role::Admin, Role::Staff],
    },
    MenuEntry {
        path: "/dashboard/settings",
        label: "Website Settings",
        roles: &[Role::Admin],
    },
    // Library module is not live yet
    MenuEntry {
        path: "/dashboard/library",
        label: "Library",
        roles: &[],
    },
];

/// Entries visible to `role`, in their original order.
pub fn filter_menu(entries: &[MenuEntry], role: Option<Role>) -> Vec<&MenuEntry> {
    let Some(role) = role else {
        return Vec::new();
    };
    entries.iter().filter(|e| e.allows(role)).collect()
}

/// Whether `role` may open the page at `path`.
///
/// Uses the same entries as the sidebar, so a page is reachable exactly
/// when its link is shown.
pub fn can_access(entries: &[MenuEntry], role: Option<Role>, path: &str) -> bool {
    filter_menu(entries, role).iter().any(|e| e.path == path)
}
