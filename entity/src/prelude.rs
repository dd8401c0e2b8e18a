pub use super::booking::Entity as Booking;
pub use super::checkup_appointment::Entity as CheckupAppointment;
pub use super::doctor::Entity as Doctor;
pub use super::lab_appointment::Entity as LabAppointment;
pub use super::surgery::Entity as Surgery;
pub use super::user::Entity as User;
