pub mod question;
pub mod quiz_result;
pub mod subject;
pub mod user;
