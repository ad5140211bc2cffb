pub mod navbar;
pub mod recommendation_card;
