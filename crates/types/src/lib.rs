pub mod css;
pub mod fragment;
pub mod geometry;

pub use css::parse_css_length;
pub use fragment::{Fragment, FragmentError, HeadingId};
pub use geometry::{ActivationBand, BandMetrics, RootMargin};
