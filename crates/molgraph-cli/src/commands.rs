pub mod reference;
pub mod split;
