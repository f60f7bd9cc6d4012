pub mod ask;
pub mod hooks;
pub mod init;
