//! Geometry of one stage frame: stems, products, output bars and the
//! arithmetic breakdown, all in SVG user units and free of IO.

/// Textual `y[n] = …` breakdown of one step.
pub mod breakdown;
/// Output bar chart.
pub mod chart;
/// Pixel mapping of the stem rows.
pub mod layout;
/// Fixed colors of the stage.
pub mod palette;
/// Stem marks for the fixed, moving and product rows.
pub mod scene;
