//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Marketing blocks (hero, banners, carousel, header/footer chrome) and the
//! account chrome (auth header, sidebar, modal, organization form). Shared
//! state is read from Leptos context; everything else arrives as props.

pub mod auth_header;
pub mod badge_dropdown;
pub mod card_banner;
pub mod carousel;
pub mod feature_grid;
pub mod footer;
pub mod hero;
pub mod highlight_card;
pub mod highlighted_text;
pub mod home_header;
pub mod marketing_layout;
pub mod modal;
pub mod nav_menu;
pub mod organization_edit_form;
pub mod sidebar;
pub mod stat_card;
pub mod theme_switcher;
pub mod ui;
