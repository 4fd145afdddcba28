pub mod use_auth;
pub mod use_booking_wizard;
pub mod use_notifications;
pub mod use_testimonial_carousel;
