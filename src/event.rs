use crate::demo::conversation::ExchangeTicket;

#[derive(Debug, Clone)]
pub enum AppEvent {
    ReplyDue(ExchangeTicket),
}
