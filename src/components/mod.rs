//! Presentational components.
//!
//! Each component is a plain struct or function returning Maud [`Markup`];
//! none of them hold state across renders.
//!
//! [`Markup`]: maud::Markup

pub mod image;
pub mod layout;
pub mod service_card;
pub mod work_card;
