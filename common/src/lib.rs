pub mod config;
pub mod contact_form;
pub mod games;
pub mod logger;
pub mod storage;
