pub mod room_code;
pub mod session_token;
