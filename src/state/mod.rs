/// State management module
///
/// This module handles all application state, including:
/// - The project record and catalog (data.rs)
/// - Tag extraction and filtering (filter.rs)
/// - Site copy loaded from the content document (content.rs)
/// - Link classification for cards and navigation (link.rs)
/// - Per-screen view controllers (view.rs)

pub mod content;
pub mod data;
pub mod filter;
pub mod link;
pub mod view;
