mod countdown;
mod info_pill;
mod rule_card;
mod share_button;

pub use countdown::CountdownPanel;
pub use info_pill::InfoPill;
pub use rule_card::RuleCard;
pub use share_button::ShareButton;
