//! # State Module
//!
//! Long-lived application state, built once at startup.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │   AppConfig      │  │   CartStore      │  │   Notifier           │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  storage dir     │  │  watch<Cart>     │  │  Console (stderr)    │  │
//! │  │  catalog URL     │  │  Mutex (writes)  │  │  Broadcast (UI)      │  │
//! │  │  currency        │  │  CartRepository  │  │                      │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • AppConfig: read-only after startup                                  │
//! │  • CartStore: Send + Sync, share it behind an Arc                      │
//! │  • Notifier: Send + Sync trait objects                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod notifier;

pub use cart::{CartStore, UpdateProductAmount};
pub use config::{default_config_path, AppConfig, CurrencySettings, StorageSettings, CONFIG_FILE_NAME};
pub use notifier::{messages, BroadcastNotifier, ConsoleNotifier, Notification, Notifier};
