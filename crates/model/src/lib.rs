pub mod admin_user;
pub mod bilingual;
pub mod dashboard;
pub mod gym;
pub mod ids;
pub mod page;
pub mod phone;
pub mod province;
pub mod tag;
pub mod trainer;
