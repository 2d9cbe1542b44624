//! Small presentational primitives shared by every page.
//!
//! DESIGN
//! ======
//! Variants are closed enums mapped to BEM modifier classes in
//! `style/main.css`, so pages never build class strings by hand except
//! through [`cn`].


pub mod badge;
pub mod button;
pub mod card;
pub mod input;

/// Join non-empty class fragments with single spaces.
pub fn cn(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
