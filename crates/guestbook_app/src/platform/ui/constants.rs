pub const TITLE: &str = "ERC-8021 Guestbook";
pub const SUBTITLE: &str = "(non-mini-app)";
pub const PLACEHOLDER: &str = "Leave your message...";

// Submit shortcuts: W/E = writeContract with/without, S/D = sendCalls with/without.
pub const KEY_WRITE_WITH: char = 'w';
pub const KEY_WRITE_WITHOUT: char = 'e';
pub const KEY_SEND_WITH: char = 's';
pub const KEY_SEND_WITHOUT: char = 'd';
pub const KEY_CONNECT: char = 'k';
pub const KEY_DISCONNECT: char = 'x';
pub const KEY_QUIT: char = 'q';
