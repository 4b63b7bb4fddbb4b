//! A typed client for the [Engage](https://engage.so) users and lists API.
//!
//! ## Example
//!
//! ```no_run
//! use engage_so::{Client, Config, Credentials, PaginatorInput, SubscribeListInput};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new().with_credentials(Credentials::from_env());
//!     let client = Client::new(config)?;
//!
//!     let page = client.lists().get_all_lists(&PaginatorInput::new().with_limit(10)).await?;
//!     for list in &page.data {
//!         println!("{} ({} subscribers)", list.title, list.subscriber_count);
//!     }
//!
//!     let subscribed = client
//!         .lists()
//!         .subscribe_list("list-id", &SubscribeListInput::new().with_email("someone@example.com"))
//!         .await?;
//!     println!("Subscribed user {}", subscribed.uid);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod lists;
pub mod models;
pub mod users;

pub use client::Client;
pub use config::{Config, Credentials};
pub use error::{Error, Result};
pub use lists::Lists;
pub use models::*;
pub use users::Users;
