use crate::loader::spawn_load;
use crate::models::Category;
use crate::page::Variant;
use crate::state::ClientState;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub async fn activate_tab(
    state: &ClientState,
    category: Category,
    source_button: &str,
) -> Option<JoinHandle<()>> {
    // View before page, everywhere both are held.
    let mut view = state.view.lock().await;
    let mut page = state.page.lock().await;
    view.active = category;
    page.show_panel(category);
    if !page.mark_active(source_button) {
        warn!(%source_button, %category, "unknown tab button, marking the category's own button");
        if let Some(id) = page.button_for(category).map(|button| button.id.clone()) {
            page.mark_active(&id);
        }
    }

    match page.variant {
        Variant::Admin => match view.subject.clone().filter(|name| !name.is_empty()) {
            Some(student) => Some(spawn_load(state, Some(student), category)),
            None => {
                debug!(%category, "no student selected, tab switched without loading");
                None
            }
        },
        Variant::Student => Some(spawn_load(state, None, category)),
    }
}

pub async fn view_student(state: &ClientState, student: &str) -> Vec<JoinHandle<()>> {
    let mut view = state.view.lock().await;
    let mut page = state.page.lock().await;
    view.subject = Some(student.to_string());
    page.selected_student = student.to_string();
    page.details_visible = true;

    // Generations are taken under the locks so the last selection also owns the newest loads.
    Category::ALL
        .into_iter()
        .map(|category| spawn_load(state, Some(student.to_string()), category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::config::ClientConfig;

    fn offline_state(variant: Variant) -> ClientState {
        // Port 9 (discard) is never served; loads fail fast and render an error row.
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9".into(),
            ..ClientConfig::default()
        };
        let api = ApiClient::new(&config).unwrap();
        ClientState::new(api, config, variant)
    }

    #[tokio::test]
    async fn exactly_one_panel_and_button_after_each_activation() {
        let state = offline_state(Variant::Admin);
        for category in Category::ALL {
            let handle = activate_tab(&state, category, &format!("{category}-tab")).await;
            assert!(handle.is_none());
            assert_eq!(state.view.lock().await.active, category);
            let page = state.page.lock().await;
            assert_eq!(page.visible_panels(), vec![category]);
            assert_eq!(page.active_buttons(), vec![format!("{category}-tab")]);
        }
    }

    #[tokio::test]
    async fn unknown_source_falls_back_to_category_button() {
        let state = offline_state(Variant::Admin);
        activate_tab(&state, Category::Emotion, "not-a-button").await;
        let page = state.page.lock().await;
        assert_eq!(page.active_buttons(), vec!["emotion-tab"]);
    }

    #[tokio::test]
    async fn student_page_loads_on_every_activation() {
        let state = offline_state(Variant::Student);
        let handle = activate_tab(&state, Category::Keyboard, "keyboard-tab")
            .await
            .expect("student tabs always load");
        handle.await.unwrap();
        let page = state.page.lock().await;
        let body = page.body(Category::Keyboard).unwrap();
        assert_eq!(body.placeholder_text(), Some(state.messages().load_error));
    }

    #[tokio::test]
    async fn selecting_a_student_reveals_details() {
        let state = offline_state(Variant::Admin);
        for handle in view_student(&state, "alice").await {
            handle.await.unwrap();
        }
        let page = state.page.lock().await;
        assert!(page.details_visible);
        assert_eq!(page.selected_student, "alice");
        assert_eq!(state.view.lock().await.subject.as_deref(), Some("alice"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_selections_keep_view_and_page_in_step() {
        for _ in 0..50 {
            let state = offline_state(Variant::Admin);
            let (alice, bob) = tokio::join!(
                tokio::spawn({
                    let state = state.clone();
                    async move { view_student(&state, "alice").await }
                }),
                tokio::spawn({
                    let state = state.clone();
                    async move { view_student(&state, "bob").await }
                }),
            );
            for handle in alice.unwrap().into_iter().chain(bob.unwrap()) {
                handle.await.unwrap();
            }

            let (first, second) = tokio::join!(
                tokio::spawn({
                    let state = state.clone();
                    async move { activate_tab(&state, Category::Keyboard, "keyboard-tab").await }
                }),
                tokio::spawn({
                    let state = state.clone();
                    async move { activate_tab(&state, Category::Emotion, "emotion-tab").await }
                }),
            );
            for handle in first.unwrap().into_iter().chain(second.unwrap()) {
                handle.await.unwrap();
            }

            let view = state.view.lock().await;
            let page = state.page.lock().await;
            assert_eq!(view.subject.as_deref(), Some(page.selected_student.as_str()));
            assert_eq!(page.visible_panels(), vec![view.active]);
            assert_eq!(page.active_buttons(), vec![format!("{}-tab", view.active)]);
        }
    }
}
