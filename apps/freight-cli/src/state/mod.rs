//! # State Module
//!
//! Manages the widget's state for whichever front-end drives it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  WidgetState (Clone, shared by the REPL and quote tasks)        │   │
//! │  │                                                                 │   │
//! │  │   Arc<Mutex<FreightWidget>>        Arc<dyn FreightView>         │   │
//! │  │   • delivery mode                  • DOM / terminal / test      │   │
//! │  │   • CEP input, cart quantities                                  │   │
//! │  │   • FreightState + generation                                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod widget;

pub use widget::{FreightWidget, PendingQuote, WidgetState};
