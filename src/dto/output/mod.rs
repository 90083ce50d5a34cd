mod ticket;
mod ticket_found;
mod ticket_id;
mod ticket_list;

pub use ticket::*;
pub use ticket_found::*;
pub use ticket_id::*;
pub use ticket_list::*;
