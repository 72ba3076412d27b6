pub mod add;
pub mod helper;
pub mod init;
pub mod key;
pub mod lookup;
pub mod remove;
