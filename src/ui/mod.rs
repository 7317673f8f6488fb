/// UI widget module
///
/// Builds the two pieces of the screen:
/// - The removable entry-card grid (grid.rs)
/// - The bottom text-input row (grid.rs)

pub mod grid;
