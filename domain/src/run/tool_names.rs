//! Names of the remote calls made during a run, as shown in error entries.

pub const CREATE_CHAT_COMPLETION: &str = "create_chat_completion";
pub const GET_CURRENT_USER_PROFILE: &str = "get_current_user_profile";
pub const CREATE_PLAYLIST: &str = "create_playlist";
pub const SEARCH_FOR_ITEM: &str = "search_for_item";
pub const ADD_ITEMS_TO_PLAYLIST: &str = "add_items_to_playlist";
