pub mod assign;
pub mod contrast;
pub mod extract;
