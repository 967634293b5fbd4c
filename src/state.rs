use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::messages::Messages;
use crate::models::Category;
use crate::page::{Page, Variant};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub active: Category,
    pub subject: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active: Category::Mouse,
            subject: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Generations {
    counters: [AtomicU64; 3],
}

impl Generations {
    pub fn next(&self, category: Category) -> u64 {
        self.counters[category.index()].fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, category: Category, generation: u64) -> bool {
        self.counters[category.index()].load(Ordering::SeqCst) == generation
    }

    pub fn invalidate_all(&self) {
        for counter in &self.counters {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[derive(Clone)]
pub struct ClientState {
    pub api: ApiClient,
    pub config: ClientConfig,
    pub page: Arc<Mutex<Page>>,
    pub view: Arc<Mutex<ViewState>>,
    pub generations: Arc<Generations>,
}

impl ClientState {
    pub fn new(api: ApiClient, config: ClientConfig, variant: Variant) -> Self {
        Self {
            api,
            config,
            page: Arc::new(Mutex::new(Page::new(variant))),
            view: Arc::new(Mutex::new(ViewState::default())),
            generations: Arc::new(Generations::default()),
        }
    }

    pub fn messages(&self) -> &'static Messages {
        self.config.locale.messages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generations_are_per_table() {
        let generations = Generations::default();
        let mouse = generations.next(Category::Mouse);
        let keyboard = generations.next(Category::Keyboard);
        assert!(generations.is_current(Category::Mouse, mouse));
        assert!(generations.is_current(Category::Keyboard, keyboard));

        let newer = generations.next(Category::Mouse);
        assert!(!generations.is_current(Category::Mouse, mouse));
        assert!(generations.is_current(Category::Mouse, newer));
        assert!(generations.is_current(Category::Keyboard, keyboard));

        generations.invalidate_all();
        assert!(!generations.is_current(Category::Mouse, newer));
        assert!(!generations.is_current(Category::Keyboard, keyboard));
    }
}
