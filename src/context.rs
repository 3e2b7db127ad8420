//! Application Context
//!
//! The collection client and alert sink shared by every component.

use std::rc::Rc;

use food_sync::{FoodItem, HttpCollection, MemoryCollection, Notifier, RemoteCollection};
use leptos::prelude::*;

use crate::config::DashboardConfig;

/// `window.alert`, the dashboard's only failure channel
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                log::error!("alert failed: {:?}", err);
            }
        }
    }
}

type SharedCollection = Rc<dyn RemoteCollection<FoodItem>>;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Client for the `foods` collection (not `Send`, so kept in local storage)
    client: StoredValue<SharedCollection, LocalStorage>,
}

impl AppContext {
    pub fn new(config: &DashboardConfig) -> Self {
        let client: SharedCollection = if config.uses_memory_backend() {
            Rc::new(MemoryCollection::<FoodItem>::new())
        } else {
            Rc::new(HttpCollection::new(config.api_url.clone(), config.collection.clone()))
        };
        Self {
            client: StoredValue::new_local(client),
        }
    }

    pub fn client(&self) -> SharedCollection {
        self.client.get_value()
    }

    pub fn notifier(&self) -> BrowserAlert {
        BrowserAlert
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
