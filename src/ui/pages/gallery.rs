//! Photo gallery with category filter (`?category=`).

use dioxus::prelude::*;

use crate::settings::WebsiteSettings;
use crate::ui::components::{ContentShell, Layout};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryCategory {
    All,
    Campus,
    Events,
    Sports,
    Academic,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 5] = [
        GalleryCategory::All,
        GalleryCategory::Campus,
        GalleryCategory::Events,
        GalleryCategory::Sports,
        GalleryCategory::Academic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::All => "all",
            GalleryCategory::Campus => "campus",
            GalleryCategory::Events => "events",
            GalleryCategory::Sports => "sports",
            GalleryCategory::Academic => "academic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GalleryCategory::All => "All",
            GalleryCategory::Campus => "Campus",
            GalleryCategory::Events => "Events",
            GalleryCategory::Sports => "Sports",
            GalleryCategory::Academic => "Academic",
        }
    }

    /// Unknown or missing names select everything.
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(|v| GalleryCategory::ALL.into_iter().find(|c| c.as_str() == v))
            .unwrap_or(GalleryCategory::All)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub title: &'static str,
    pub image: &'static str,
    pub category: GalleryCategory,
}

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem {
        title: "Main building",
        image: "https://images.unsplash.com/photo-1562774053-701939374585?w=600",
        category: GalleryCategory::Campus,
    },
    GalleryItem {
        title: "Annual prize giving",
        image: "https://images.unsplash.com/photo-1523580494863-6f3031224c94?w=600",
        category: GalleryCategory::Events,
    },
    GalleryItem {
        title: "Inter-house football final",
        image: "https://images.unsplash.com/photo-1431324155629-1a6deb1dec8d?w=600",
        category: GalleryCategory::Sports,
    },
    GalleryItem {
        title: "Chemistry laboratory",
        image: "https://images.unsplash.com/photo-1532094349884-543bc11b234d?w=600",
        category: GalleryCategory::Academic,
    },
    GalleryItem {
        title: "Library reading room",
        image: "https://images.unsplash.com/photo-1521587760476-6c12a4b040da?w=600",
        category: GalleryCategory::Campus,
    },
    GalleryItem {
        title: "Science fair",
        image: "https://images.unsplash.com/photo-1581093588401-fbb62a02f120?w=600",
        category: GalleryCategory::Events,
    },
];

/// Items in `category`, in list order. `All` keeps everything.
pub fn filter_gallery(items: &[GalleryItem], category: GalleryCategory) -> Vec<&GalleryItem> {
    items
        .iter()
        .filter(|item| category == GalleryCategory::All || item.category == category)
        .collect()
}

#[component]
pub fn GalleryPage(site: WebsiteSettings, category: GalleryCategory) -> Element {
    let items = filter_gallery(GALLERY, category);

    rsx! {
        Layout {
            title: "Gallery".to_string(),
            current_path: "/gallery".to_string(),
            site: site,

            ContentShell {
                h1 { "Gallery" }
                nav { "aria-label": "Gallery categories",
                    ul {
                        for c in GalleryCategory::ALL {
                            li { {category_link(c, c == category)} }
                        }
                    }
                }
                if items.is_empty() {
                    p { "No photos in this category yet." }
                }
                div { class: "gallery-grid",
                    for item in items.iter() {
                        figure {
                            img { src: item.image, alt: item.title, loading: "lazy" }
                            figcaption { "{item.title}" }
                        }
                    }
                }
            }
        }
    }
}

fn category_link(category: GalleryCategory, active: bool) -> Element {
    let href = format!("/gallery?category={}", category.as_str());
    let label = category.label();
    if active {
        rsx! { a { href: "{href}", "aria-current": "page", strong { "{label}" } } }
    } else {
        rsx! { a { href: "{href}", "{label}" } }
    }
}
