pub mod answer;
pub mod card_selection;
pub mod question;
pub mod start;
