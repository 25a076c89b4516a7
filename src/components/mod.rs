//! Page section and chrome components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the fixed content sections while reading shared
//! navigation state and the fade observer from Leptos context
//! providers.

pub mod contact;
pub mod fade_section;
pub mod footer;
pub mod garden;
pub mod hero;
pub mod icons;
pub mod logo;
pub mod moments;
pub mod navbar;
pub mod particle_veil;
pub mod recipe;
pub mod testimonial;
