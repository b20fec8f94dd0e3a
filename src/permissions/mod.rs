//! Permission system for checking sender privileges.
//!
//! Admin commands are gated on the sender's services account, never on
//! nick or hostmask.

mod checker;

pub use checker::Permissions;
