//! Library components of the satchel CLI: the logging bootstrap, the
//! interactive menu session, table rendering, and the document opener.

pub mod logging;
pub mod menu;
pub mod opener;
pub mod render;
