use crate::demo::conversation::ExchangeTicket;
use crate::event::AppEvent;
use std::sync::mpsc;
use tokio::runtime::Handle;
use tokio::time::{self, Duration};
use tracing::{debug, warn};

/// Stands in for the search API: every scheduled exchange is answered after a
/// fixed delay by posting [`AppEvent::ReplyDue`] back to the UI thread.
#[derive(Clone)]
pub struct ReplyScheduler {
    tx: mpsc::Sender<AppEvent>,
    runtime_handle: Handle,
    delay: Duration,
}

impl ReplyScheduler {
    pub fn new(runtime_handle: Handle, tx: mpsc::Sender<AppEvent>, delay: Duration) -> Self {
        Self {
            tx,
            runtime_handle,
            delay,
        }
    }

    pub fn schedule(&self, ticket: ExchangeTicket) {
        let tx = self.tx.clone();
        let delay = self.delay;
        debug!(ticket = ticket.id, delay_ms = delay.as_millis() as u64, "reply scheduled");

        self.runtime_handle.spawn(async move {
            time::sleep(delay).await;
            let ticket_id = ticket.id;
            if tx.send(AppEvent::ReplyDue(ticket)).is_err() {
                warn!(ticket = ticket_id, "event channel closed before reply was delivered");
            }
        });
    }
}
