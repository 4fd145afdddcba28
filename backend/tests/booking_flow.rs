//! Drives a booking from opening the dialog to the confirmation screen through the public API,
//! the way the frontend does.

use backend::{
    AppConfig, BookingGateway, BookingStep, BookingWizard, PricingService, RecordingDelay,
    SimulatedBookingGateway,
};
use chrono::NaiveDate;
use shared::catalog;
use std::sync::Arc;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[tokio::test]
async fn test_full_booking_flow() {
    let config = AppConfig::default();
    let delay = Arc::new(RecordingDelay::new());
    let gateway = SimulatedBookingGateway::from_config(&config, delay.clone());
    let mut wizard = BookingWizard::new(PricingService::new(config.default_base_price));

    let trainer = catalog::find_trainer(4).unwrap().clone();
    wizard.open(trainer, today());

    // step 1
    wizard.show_next_month();
    wizard.select_date(NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(), today()).unwrap();
    wizard.select_time("06:00 PM").unwrap();
    assert_eq!(wizard.next().unwrap(), BookingStep::Details);

    // step 2
    wizard.select_duration("90").unwrap();
    wizard.select_session_type("couple").unwrap();
    assert_eq!(wizard.next().unwrap(), BookingStep::Contact);

    // step 3
    wizard.set_client_name("Meera Iyer");
    wizard.set_client_email("meera@example.com");
    wizard.set_client_phone("+91 90000 00000");

    let ticket = wizard.begin_submission().unwrap();
    // evening slot 1500 x 1.5 + 500
    assert_eq!(ticket.request.total_price, 2750);

    let confirmation = gateway.submit_booking(&ticket.request).await.unwrap();
    assert!(wizard.finish_submission(&ticket, confirmation));

    assert_eq!(wizard.step(), BookingStep::Complete);
    let confirmation = wizard.confirmation().unwrap();
    assert_eq!(confirmation.date, NaiveDate::from_ymd_opt(2026, 11, 3));
    assert_eq!(confirmation.time, "06:00 PM");
    assert_eq!(confirmation.total_price, 2750);
    assert_eq!(delay.requested(), vec![2000]);

    wizard.close();
    assert_eq!(wizard.step(), BookingStep::Closed);
}

#[tokio::test]
async fn test_closing_mid_submission_ignores_the_result() {
    let gateway = SimulatedBookingGateway::new(Arc::new(RecordingDelay::new()), 2000);
    let mut wizard = BookingWizard::default();

    wizard.open(catalog::TRAINERS[0].clone(), today());
    wizard.select_date(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(), today()).unwrap();
    wizard.select_time("07:00 AM").unwrap();
    wizard.next().unwrap();
    wizard.next().unwrap();
    wizard.set_client_name("Meera Iyer");
    wizard.set_client_email("meera@example.com");
    wizard.set_client_phone("12345");
    let ticket = wizard.begin_submission().unwrap();

    wizard.close();
    let confirmation = gateway.submit_booking(&ticket.request).await.unwrap();

    assert!(!wizard.finish_submission(&ticket, confirmation));
    assert_eq!(wizard.step(), BookingStep::Closed);
    assert!(wizard.confirmation().is_none());
}
