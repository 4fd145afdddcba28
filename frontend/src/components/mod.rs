pub mod about_section;
pub mod auth_modal;
pub mod booking_calendar;
pub mod booking_modal;
pub mod footer;
pub mod header;
pub mod hero_section;
pub mod notification_panel;
pub mod services_section;
pub mod testimonials_section;
pub mod trainers_section;
