pub mod prelude;

pub mod booking;
pub mod checkup_appointment;
pub mod doctor;
pub mod lab_appointment;
pub mod surgery;
pub mod user;
