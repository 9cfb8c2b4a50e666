pub mod announcement;
pub mod assignment;
pub mod fee;
pub mod library;
pub mod material;
pub mod notification;
pub mod quiz;
pub mod registration;
pub mod result;
pub mod subject;
pub mod user;
