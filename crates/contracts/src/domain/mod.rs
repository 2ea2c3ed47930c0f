pub mod a001_booking;
pub mod a002_service;
pub mod a003_withdrawal;
pub mod a004_notification;
