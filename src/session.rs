use crate::models::{Category, Mood, MonitorType};
use crate::page::Page;
use crate::state::{ClientState, ViewState};
use crate::tabs::activate_tab;
use serde_json::{Map, Value};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

pub async fn start_monitoring(state: &ClientState, extra: &Map<String, Value>) -> bool {
    let monitor_type = {
        let page = state.page.lock().await;
        MonitorType::from_flags(page.monitor_mouse, page.monitor_keyboard)
    };
    info!(monitor_type = monitor_type.as_str(), "requesting monitoring start");

    let messages = state.messages();
    let result = state.api.start_monitoring(monitor_type, extra).await;
    let mut page = state.page.lock().await;
    match result {
        Ok(response) if response.success => {
            page.alert(messages.monitoring_started);
            page.reload_requested = true;
            true
        }
        Ok(response) => {
            let reason = response.message.as_deref().unwrap_or(messages.unknown_error);
            page.alert(format!("{}{reason}", messages.start_failed));
            false
        }
        Err(err) => {
            error!("start monitoring failed: {err}");
            page.alert(messages.start_error);
            false
        }
    }
}

pub async fn stop_monitoring(state: &ClientState) -> bool {
    info!("requesting monitoring stop");
    let messages = state.messages();
    let result = state.api.stop_monitoring().await;
    let mut page = state.page.lock().await;
    match result {
        Ok(response) if response.success => {
            let text = response.message.as_deref().unwrap_or(messages.monitoring_stopped);
            page.alert(text);
            page.reload_requested = true;
            true
        }
        Ok(response) => {
            let reason = response.message.as_deref().unwrap_or(messages.unknown_error);
            page.alert(format!("{}{reason}", messages.stop_failed));
            false
        }
        Err(err) => {
            error!("stop monitoring failed: {err}");
            page.alert(messages.stop_network_error);
            false
        }
    }
}

pub async fn save_emotion_selection(state: &ClientState, mood: Mood) -> bool {
    match state.api.save_emotion(mood).await {
        Ok(response) if response.success => {
            info!(mood = mood.letter(), "emotion saved");
            true
        }
        Ok(_) => {
            warn!(mood = mood.letter(), "backend rejected emotion selection");
            false
        }
        Err(err) => {
            error!(mood = mood.letter(), "saving emotion failed: {err}");
            false
        }
    }
}

pub async fn auto_submit_emotion_and_continue(state: &ClientState, mood: Mood) -> bool {
    if !save_emotion_selection(state, mood).await {
        return false;
    }

    state.page.lock().await.modal_open = false;
    if state.config.first_run {
        start_monitoring(state, &Map::new()).await
    } else {
        state.page.lock().await.reload_requested = true;
        true
    }
}

pub async fn reload_page(state: &ClientState) -> Option<JoinHandle<()>> {
    state.generations.invalidate_all();
    {
        let mut view = state.view.lock().await;
        let mut page = state.page.lock().await;
        *view = ViewState::default();
        *page = Page::new(page.variant);
    }

    match state.api.status().await {
        Ok(status) => {
            let mut page = state.page.lock().await;
            page.monitor_mouse = status.mouse.running;
            page.monitor_keyboard = status.keyboard.running;
        }
        Err(err) => warn!("could not read monitor status: {err}"),
    }

    let default_tab = Category::Mouse;
    activate_tab(state, default_tab, &format!("{default_tab}-tab")).await
}
