pub mod admin;
pub mod auth;
pub mod booking;
pub mod contact;
pub mod home;
pub mod my_bookings;
