pub mod doctor;
pub mod recommend;
