mod home;
mod rules;

pub use home::Home;
pub use rules::Rules;
