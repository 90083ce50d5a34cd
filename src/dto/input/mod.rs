mod ticket_create;

pub use ticket_create::*;
