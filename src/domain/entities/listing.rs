use serde::Serialize;

use crate::{
    entities::category::{category_menu, CategoryOption, CategorySelection},
    utils::stagger::{stagger, Staged},
};

/// What a listing section shows.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListingState<T> {
    Items { items: Vec<Staged<T>> },
    Empty { message: String },
    Unavailable { message: String },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Listing<T> {
    pub category: String,
    pub categories: Vec<CategoryOption>,
    #[serde(flatten)]
    pub state: ListingState<T>,
}

/// Empty-state wording; the generic one applies to the unfiltered view.
pub struct EmptyMessages {
    pub generic: &'static str,
    pub in_category: &'static str,
}

pub const BLOG_EMPTY: EmptyMessages = EmptyMessages {
    generic: "No posts yet. New articles are on the way.",
    in_category: "No posts in this category yet.",
};

pub const PROJECTS_EMPTY: EmptyMessages = EmptyMessages {
    generic: "No projects to show yet.",
    in_category: "No projects in this category yet.",
};

pub const BLOG_UNAVAILABLE: &str = "Posts could not be loaded right now.";

impl<T> Listing<T> {
    pub fn build(
        cards: Vec<T>,
        selection: &CategorySelection,
        menu: &[(&'static str, &'static str)],
        empty: &EmptyMessages,
        reveal_step_ms: u64,
    ) -> Self {
        let state = if cards.is_empty() {
            let message = if selection.is_all() { empty.generic } else { empty.in_category };
            ListingState::Empty { message: message.to_string() }
        } else {
            ListingState::Items { items: stagger(cards, reveal_step_ms) }
        };

        Listing {
            category: selection.as_str().to_string(),
            categories: category_menu(menu, selection),
            state,
        }
    }

    pub fn unavailable(
        selection: &CategorySelection,
        menu: &[(&'static str, &'static str)],
        message: &str,
    ) -> Self {
        Listing {
            category: selection.as_str().to_string(),
            categories: category_menu(menu, selection),
            state: ListingState::Unavailable { message: message.to_string() },
        }
    }

    pub fn items(&self) -> &[Staged<T>] {
        match &self.state {
            ListingState::Items { items } => items,
            _ => &[],
        }
    }
}
