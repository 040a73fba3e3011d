//! Static site navigation tree used by the header and the mobile menu.

/// A navigation link with optional children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub sub_items: &'static [NavigationItem],
}

impl NavigationItem {
    const fn leaf(id: &'static str, label: &'static str, path: &'static str) -> Self {
        Self {
            id,
            label,
            path,
            sub_items: &[],
        }
    }

    pub fn has_children(&self) -> bool {
        !self.sub_items.is_empty()
    }

    /// True when this item or any descendant points at `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        self.path == path || self.sub_items.iter().any(|c| c.contains_path(path))
    }
}

/// Public site navigation, in display order.
pub const SITE_NAVIGATION: &[NavigationItem] = &[
    NavigationItem::leaf("home", "Home", "/"),
    NavigationItem {
        id: "about",
        label: "About",
        path: "/about",
        sub_items: &[
            NavigationItem::leaf("history", "Our History", "/about#history"),
            NavigationItem::leaf("mission", "Mission & Vision", "/about#mission"),
            NavigationItem::leaf("facilities", "Facilities", "/about#facilities"),
        ],
    },
    NavigationItem {
        id: "academic",
        label: "Academic",
        path: "/academic",
        sub_items: &[
            NavigationItem::leaf("programs", "Programs", "/academic#programs"),
            NavigationItem::leaf("calendar", "Academic Calendar", "/academic#calendar"),
            NavigationItem::leaf("results", "Results", "/academic#results"),
        ],
    },
    NavigationItem {
        id: "administration",
        label: "Administration",
        path: "/administration",
        sub_items: &[
            NavigationItem::leaf(
                "governing-body",
                "Governing Body",
                "/administration#governing-body",
            ),
            NavigationItem::leaf("faculty", "Faculty", "/administration#faculty"),
            NavigationItem::leaf("staff", "Staff", "/administration#staff"),
        ],
    },
    NavigationItem {
        id: "admission",
        label: "Admission",
        path: "/admission",
        sub_items: &[
            NavigationItem::leaf("process", "Admission Process", "/admission#process"),
            NavigationItem::leaf("requirements", "Requirements", "/admission#requirements"),
            NavigationItem::leaf("fees", "Fees", "/admission#fees"),
        ],
    },
    NavigationItem::leaf("gallery", "Gallery", "/gallery"),
    NavigationItem::leaf("contact", "Contact", "/contact"),
];

/// Depth-first lookup by exact path.
pub fn find_by_path<'a>(items: &'a [NavigationItem], path: &str) -> Option<&'a NavigationItem> {
    for item in items {
        if item.path == path {
            return Some(item);
        }
        if let Some(found) = find_by_path(item.sub_items, path) {
            return Some(found);
        }
    }
    None
}

/// Trail from a top-level item down to the item at `path`.
pub fn breadcrumbs<'a>(items: &'a [NavigationItem], path: &str) -> Vec<&'a NavigationItem> {
    for item in items {
        if item.path == path {
            return vec![item];
        }
        let below = breadcrumbs(item.sub_items, path);
        if !below.is_empty() {
            let mut trail = vec![item];
            trail.extend(below);
            return trail;
        }
    }
    Vec::new()
}
