//! # chale66
//!
//! Single-page marketing site for Chalé 66, a vacation-cabin investment
//! brand — rendered entirely in the browser as a Leptos + WASM app.
//!
//! The page is a fixed vertical composition (hero, gallery, process,
//! plans, testimonial, contact) driven by two interaction flags
//! (navigation-bar compaction and the mobile menu), scroll-triggered
//! fade-in reveals, and a decorative particle canvas from the
//! `particles` crate.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component: contexts, window listeners, section order |
//! | [`components`] | Section and chrome components |
//! | [`content`] | Section identifiers and static copy tables |
//! | [`state`] | Pure UI state (nav flags, reveal registry, lead record) |
//! | [`util`] | Browser adapters (scrolling, intersection observer) |

pub mod app;
pub mod components;
pub mod content;
pub mod state;
pub mod util;
