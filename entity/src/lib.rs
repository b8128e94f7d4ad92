pub mod access_token;
pub mod invitation;
pub mod item;
pub mod session;
pub mod session_user;
pub mod shop_item;
pub mod user;

/*
 A user signs up and can create sessions, becoming their game master.
 The game master hands out single-use invitation tokens. Anyone who
 redeems one gets attached to the session roster (session_user) and
 the invitation is burned.
 Bearer tokens live in access_tokens, one row per issued token, so a
 logout revokes exactly the token it was presented with.
 */
