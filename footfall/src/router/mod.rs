pub(crate) mod chart;
pub(crate) mod shops;
pub mod util;
