//! # Commands Module
//!
//! Every action a front-end can trigger on the widget.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── input.rs    ◄─── CEP mask, quantities, delivery selector, radios, summary
//! └── quote.rs    ◄─── calculate_freight (the only async command)
//! ```
//!
//! ## Calling Convention
//! Commands take the shared [`WidgetState`](crate::state::WidgetState) and
//! render through its view. Failures come back as
//! [`ApiError`](crate::error::ApiError) whose message is already on the
//! status line.
//! ```rust,ignore
//! postal_input(&state, "01310100");            // view shows 01310-100
//! change_delivery(&state, "Frete");            // panel visible
//! calculate_freight(&state, &client).await?;   // radios + labels
//! choose_option(&state, "PAC")?;
//! let block = delivery_summary(&state);        // Some(..) once complete
//! ```

pub mod input;
pub mod quote;

pub use input::{
    change_delivery, choose_option, delivery_summary, get_widget, postal_input, quantity_input,
};
pub use quote::calculate_freight;
