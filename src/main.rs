use clap::{Parser, Subcommand};
use serde_json::Map;
use student_monitor::{
    messages::Locale,
    models::{Category, Mood},
    resolve_config, session, tabs, ApiClient, ClientState, Variant,
};
use tokio::task::JoinHandle;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "student_monitor", version, about = "Browse and control student activity monitoring")]
struct Args {
    /// Backend address, e.g. http://127.0.0.1:5000. Overrides MONITOR_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Message language (en, zh). Overrides MONITOR_LOCALE.
    #[arg(long)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered students.
    Students,
    /// Show every table for one student, optionally switching to a tab.
    View {
        student: String,
        #[arg(long)]
        tab: Option<Category>,
    },
    /// Show this client's own monitoring data for a tab.
    Data { category: Category },
    /// Start monitoring; neither or both flags start every monitor.
    Start {
        #[arg(long)]
        mouse: bool,
        #[arg(long)]
        keyboard: bool,
    },
    /// Stop every running monitor.
    Stop,
    /// Report a mood (A focused, B bored, C frustrated, D confused).
    Emotion {
        mood: Mood,
        /// Close the mood dialog and continue with monitoring.
        #[arg(long)]
        auto: bool,
        /// Monitoring has not been started yet in this session.
        #[arg(long)]
        first_run: bool,
    },
    /// Print which monitors the backend is running.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = resolve_config()?;
    if let Some(url) = args.base_url {
        config.base_url = url;
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    if let Command::Emotion { first_run: true, .. } = args.command {
        config.first_run = true;
    }

    let api = ApiClient::new(&config)?;
    info!("using backend {}", api.base_url());

    match args.command {
        Command::Students => {
            let response = api.students().await?;
            if let Some(error) = response.error {
                println!("{error}");
            }
            for student in response.students {
                println!("{}\t{}", student.name, student.registered_time);
            }
        }
        Command::Status => {
            let status = api.status().await?;
            for (name, monitor) in [
                ("mouse", status.mouse),
                ("keyboard", status.keyboard),
                ("emotion", status.emotion),
            ] {
                println!("{name}\trunning={}\tlistening={}", monitor.running, monitor.listening);
            }
        }
        Command::View { student, tab } => {
            let state = ClientState::new(api, config, Variant::Admin);
            join_all(tabs::view_student(&state, &student).await).await?;
            if let Some(category) = tab {
                join_all(tabs::activate_tab(&state, category, &format!("{category}-tab")).await)
                    .await?;
            }
            finish(&state).await?;
        }
        Command::Data { category } => {
            let state = ClientState::new(api, config, Variant::Student);
            join_all(tabs::activate_tab(&state, category, &format!("{category}-tab")).await)
                .await?;
            finish(&state).await?;
        }
        Command::Start { mouse, keyboard } => {
            let state = ClientState::new(api, config, Variant::Student);
            {
                let mut page = state.page.lock().await;
                page.monitor_mouse = mouse;
                page.monitor_keyboard = keyboard;
            }
            session::start_monitoring(&state, &Map::new()).await;
            finish(&state).await?;
        }
        Command::Stop => {
            let state = ClientState::new(api, config, Variant::Student);
            session::stop_monitoring(&state).await;
            finish(&state).await?;
        }
        Command::Emotion { mood, auto, .. } => {
            let state = ClientState::new(api, config, Variant::Student);
            if auto {
                session::auto_submit_emotion_and_continue(&state, mood).await;
            } else {
                session::save_emotion_selection(&state, mood).await;
            }
            finish(&state).await?;
        }
    }

    Ok(())
}

async fn join_all(
    handles: impl IntoIterator<Item = JoinHandle<()>>,
) -> Result<(), tokio::task::JoinError> {
    for handle in handles {
        handle.await?;
    }
    Ok(())
}

async fn finish(state: &ClientState) -> Result<(), Box<dyn std::error::Error>> {
    let (alerts, reload) = {
        let mut page = state.page.lock().await;
        (std::mem::take(&mut page.alerts), page.reload_requested)
    };
    for alert in alerts {
        println!("[alert] {alert}");
    }
    if reload {
        join_all(session::reload_page(state).await).await?;
    }

    print!("{}", state.page.lock().await.render_html());
    Ok(())
}
