use crate::errors::ClientError;
use crate::models::{Category, DataEnvelope};
use crate::page::TableBody;
use crate::schema::row_cells;
use crate::state::ClientState;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

// The generation is taken before spawning so dispatch order decides which response is current.
pub fn spawn_load(state: &ClientState, subject: Option<String>, category: Category) -> JoinHandle<()> {
    let generation = state.generations.next(category);
    let state = state.clone();
    tokio::spawn(async move {
        load_generation(&state, subject.as_deref(), category, generation).await;
    })
}

async fn load_generation(
    state: &ClientState,
    subject: Option<&str>,
    category: Category,
    generation: u64,
) {
    let result = match subject {
        Some(student) => state.api.student_data(student, category).await,
        None => state.api.own_data(category).await,
    };
    if let Err(err) = &result {
        error!(%category, "error loading data: {err}");
    }

    let messages = state.messages();
    let mut page = state.page.lock().await;
    if !state.generations.is_current(category, generation) {
        debug!(%category, generation, "discarding superseded response");
        return;
    }

    let no_data = page.variant.no_data_text(messages);
    let Some(body) = page.body_mut(category) else {
        info!(body = %category.body_id(), "table body not present, skipping render");
        return;
    };
    render_result(body, result, no_data, messages.load_error);
}

pub fn render_result(
    body: &mut TableBody,
    result: Result<DataEnvelope, ClientError>,
    no_data: &str,
    load_error: &str,
) {
    match result {
        Ok(DataEnvelope::Error(message)) => body.set_message(message),
        Ok(DataEnvelope::Data(records)) if !records.is_empty() => {
            let rows = records
                .iter()
                .map(|record| row_cells(record, body.columns))
                .collect();
            body.set_records(rows);
        }
        Ok(DataEnvelope::Data(_)) => body.set_message(no_data),
        Err(_) => body.set_message(load_error),
    }
}
