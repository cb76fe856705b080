pub mod shops;
pub mod visitors;
