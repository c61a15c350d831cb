//! ServiceHub - Background Service Management
//!
//! Owns the dedicated tokio runtime thread where network work runs. The UI
//! sends [`ServiceCommand`]s in; results and log lines come back as
//! [`AppEvent`]s over a flume channel and are dispatched by the workspace
//! event pump.

use gpui::Global;

use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::services::api::EmployeeApi;

/// Commands that can be sent to services
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Fetch the full roster from the configured endpoint
    FetchRoster,
}

/// ServiceHub manages all background services
pub struct ServiceHub {
    /// Channel to send events to UI
    event_tx: flume::Sender<AppEvent>,
    /// Channel to send commands to services
    command_tx: flume::Sender<ServiceCommand>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub and start its command handler thread
    pub fn new(config: AppConfig, event_tx: flume::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();

        let hub = Self {
            event_tx: event_tx.clone(),
            command_tx,
        };

        Self::start_command_handler(config, command_rx, event_tx);

        let _ = hub.event_tx.send(AppEvent::info("ServiceHub initialized"));

        hub
    }

    /// Start the command handler task on its own runtime thread
    fn start_command_handler(
        config: AppConfig,
        command_rx: flume::Receiver<ServiceCommand>,
        event_tx: flume::Sender<AppEvent>,
    ) {
        std::thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!("failed to create tokio runtime: {e}");
                    let _ = event_tx.send(AppEvent::error(format!(
                        "Service runtime failed to start: {e}"
                    )));
                    return;
                }
            };

            rt.block_on(async move {
                while let Ok(cmd) = command_rx.recv_async().await {
                    match cmd {
                        ServiceCommand::FetchRoster => {
                            handle_fetch(&config, &event_tx).await;
                        }
                    }
                }
            });
        });
    }

    /// Send a command to the services
    pub fn send(&self, cmd: ServiceCommand) {
        let _ = self.command_tx.send(cmd);
    }

    /// Send a log event to the UI log panel
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

/// Run the one-shot roster fetch and report the outcome to the UI
async fn handle_fetch(config: &AppConfig, event_tx: &flume::Sender<AppEvent>) {
    let _ = event_tx.send(AppEvent::info(format!(
        "Fetching roster from {}",
        config.api.endpoint
    )));

    let api = match EmployeeApi::new(&config.api) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("failed to build HTTP client: {e}");
            let _ = event_tx.send(AppEvent::RosterFetchFailed {
                message: e.to_string(),
            });
            return;
        }
    };

    match api.fetch_all().await {
        Ok(employees) => {
            let _ = event_tx.send(AppEvent::info(format!(
                "Fetched {} employees",
                employees.len()
            )));
            let _ = event_tx.send(AppEvent::RosterLoaded { employees });
        }
        Err(e) => {
            tracing::error!("roster fetch failed: {e}");
            let _ = event_tx.send(AppEvent::error(format!("Roster fetch failed: {e}")));
            let _ = event_tx.send(AppEvent::RosterFetchFailed {
                message: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::log_state::LogLevel;

    #[test]
    fn test_hub_forwards_log_events() {
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
        let hub = ServiceHub::new(AppConfig::default(), event_tx);

        // The hub announces itself on startup.
        match event_rx.recv().expect("startup event") {
            AppEvent::Log { level, message, .. } => {
                assert_eq!(level, LogLevel::Info);
                assert!(message.contains("initialized"));
            }
            other => panic!("unexpected event: {other:?}"),
        }

        hub.log(AppEvent::warn("heads up"));
        match event_rx.recv().expect("forwarded event") {
            AppEvent::Log { level, message, .. } => {
                assert_eq!(level, LogLevel::Warn);
                assert_eq!(message, "heads up");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
