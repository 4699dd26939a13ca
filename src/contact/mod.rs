pub mod banner;
pub mod form;
pub mod webhook;

use chrono::Utc;
use tracing::{error, info};
use crate::contact::banner::{Banner, BannerStatus, Clock};
use crate::contact::form::ContactForm;
use crate::contact::webhook::Webhook;

/// Sends the form once. The outcome only surfaces through the banner; on
/// success the form is cleared, on failure it is kept for another try.
pub fn submit(form: &mut ContactForm, webhook: &dyn Webhook, banner: &mut Banner, clock: &dyn Clock) -> BannerStatus {
    let payload = form.payload(Utc::now());

    let status = match webhook.post(&payload) {
        Ok(()) => {
            info!("contact message delivered");
            form.clear();
            BannerStatus::Sent
        }
        Err(e) => {
            error!(error = %e, "error sending contact message");
            BannerStatus::Failed
        }
    };

    banner.show(status, clock.now_ms());
    status
}
