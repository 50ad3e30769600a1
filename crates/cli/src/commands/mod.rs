pub mod countdown;
pub mod pages;
pub mod share;
