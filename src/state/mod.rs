/// State management module
///
/// This module handles all application state, including:
/// - The static item catalog and name resolution (catalog.rs)
/// - Shared data structures (data.rs)
/// - The ordered collection of added items (collection.rs)
/// - Input orchestration for the screen (screen.rs)

pub mod catalog;
pub mod collection;
pub mod data;
pub mod screen;
