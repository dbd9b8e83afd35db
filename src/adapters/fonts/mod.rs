//! Font adapters: text measurement for layout and the font source the PDF
//! renderer embeds.

mod font_set;
mod helvetica;
mod truetype;

pub use font_set::{FontError, FontSet};
pub use helvetica::HelveticaMetrics;
pub use truetype::TrueTypeMetrics;
