//! Create MFE Middleware
//!
//! Owns everything the creation flow does outside the store:
//! - validates a submit and dispatches the workflow (async, on the tokio runtime)
//! - starts and cancels the progress display of a run
//! - looks up the created repository once the run completed
//! - opens the created repository in the browser

use crate::actions::{Action, BootstrapAction, CreateMfeAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{
    completion_message, template_label, CreatedRepositoryRecord, Submission,
};
use crate::middleware::Middleware;
use crate::progress::{spawn_progress, ProgressRun, ProgressSchedule};
use crate::state::AppState;
use crate::utils::browser::open_url;
use portal_client::{ClientManager, DispatchError, WorkflowDispatch};
use portal_config::AppConfig;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::Mutex as TokioMutex;
use tokio::task::AbortHandle;

/// Source shown next to notifications raised by this flow
const SOURCE: &str = "Create MFE";

pub struct CreateMfeMiddleware {
    runtime: Handle,
    client_manager: Arc<TokioMutex<ClientManager>>,
    config: AppConfig,
    schedule: ProgressSchedule,
    next_run_id: u64,
    /// Run started by the last accepted submit, until reset or failure
    active_run: Option<u64>,
    /// Run whose dispatch request has not been answered yet
    in_flight: Option<u64>,
    progress: Option<AbortHandle>,
}

impl CreateMfeMiddleware {
    pub fn new(runtime: Handle, client_manager: ClientManager, config: &AppConfig) -> Self {
        Self {
            runtime,
            client_manager: Arc::new(TokioMutex::new(client_manager)),
            schedule: ProgressSchedule::from_config(&config.progress_offsets_secs),
            config: config.clone(),
            next_run_id: 0,
            active_run: None,
            in_flight: None,
            progress: None,
        }
    }

    /// Create the GitHub client up front so a missing token shows at startup
    fn prepare_client(&self, dispatcher: &Dispatcher) {
        let client_manager = Arc::clone(&self.client_manager);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            match client_manager.lock().await.get_client().await {
                Ok(_) => log::info!("GitHub client ready"),
                Err(e) => {
                    log::warn!("GitHub client not available: {}", e);
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                        "GitHub Token Missing",
                        e.to_string(),
                        "Bootstrap",
                    )));
                }
            }
        });
    }

    fn submit(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        let form = &state.create_mfe;
        if self.active_run.is_some() || !form.can_submit() {
            log::debug!(
                "Ignoring submit: run {:?} active, status {:?}, dispatching {}",
                self.active_run,
                form.status,
                form.dispatching
            );
            return;
        }

        let submission = match form.validate() {
            Ok(submission) => submission,
            Err(e) => {
                log::info!("Submit rejected, missing fields: {:?}", e.fields);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    "Missing Information",
                    e.to_string(),
                    SOURCE,
                )));
                return;
            }
        };

        self.next_run_id += 1;
        let run_id = self.next_run_id;
        self.active_run = Some(run_id);
        self.in_flight = Some(run_id);

        let dispatch = WorkflowDispatch {
            owner: self.config.owner.clone(),
            repository: self.config.workflow_repository.clone(),
            workflow: self.config.workflow_file.clone(),
            git_ref: self.config.workflow_ref.clone(),
            inputs: submission.to_inputs(&self.config.repository_visibility),
        };

        log::info!(
            "Run {}: dispatching {} on {}/{} for '{}'",
            run_id,
            dispatch.workflow,
            dispatch.owner,
            dispatch.repository,
            submission.repository_name
        );
        dispatcher.dispatch(Action::CreateMfe(CreateMfeAction::DispatchStarted { run_id }));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            "Creating MFE",
            format!("Triggering workflow for {}", submission.repository_name),
            SOURCE,
        )));

        let client_manager = Arc::clone(&self.client_manager);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let result: Result<(), DispatchError> = async {
                let client = client_manager.lock().await.get_client().await?;
                client.dispatch_workflow(&dispatch).await
            }
            .await;

            match result {
                Ok(()) => {
                    log::info!("Run {}: workflow triggered", run_id);
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        "Workflow Triggered",
                        triggered_description(&submission),
                        SOURCE,
                    )));
                    dispatcher.dispatch(Action::CreateMfe(CreateMfeAction::DispatchSucceeded {
                        run_id,
                        submission,
                    }));
                }
                Err(e) => {
                    log::error!("Run {}: workflow dispatch failed: {}", run_id, e);
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        "Workflow Failed",
                        e.to_string(),
                        SOURCE,
                    )));
                    dispatcher.dispatch(Action::CreateMfe(CreateMfeAction::DispatchFailed {
                        run_id,
                        status: e.status(),
                        message: e.to_string(),
                    }));
                }
            }
        });
    }

    fn start_progress(&mut self, run_id: u64, submission: &Submission, dispatcher: &Dispatcher) {
        self.cancel_progress();
        log::info!(
            "Run {}: showing progress, completes in {:?}",
            run_id,
            self.schedule.total()
        );
        let run = ProgressRun {
            run_id,
            submission: submission.clone(),
            owner: self.config.owner.clone(),
            visibility: self.config.repository_visibility.clone(),
        };
        self.progress = Some(spawn_progress(
            &self.runtime,
            self.schedule.clone(),
            run,
            dispatcher.clone(),
        ));
    }

    fn cancel_progress(&mut self) {
        if let Some(handle) = self.progress.take() {
            handle.abort();
        }
    }

    /// Ask GitHub for the repository the run should have created
    fn verify_repository(
        &self,
        run_id: u64,
        synthesized: &CreatedRepositoryRecord,
        dispatcher: &Dispatcher,
    ) {
        let client_manager = Arc::clone(&self.client_manager);
        let dispatcher = dispatcher.clone();
        let owner = self.config.owner.clone();
        let synthesized = synthesized.clone();

        self.runtime.spawn(async move {
            let client = match client_manager.lock().await.get_client().await {
                Ok(client) => client,
                Err(e) => {
                    log::warn!("Run {}: cannot verify repository: {}", run_id, e);
                    return;
                }
            };

            match client.fetch_repository(&owner, &synthesized.name).await {
                Ok(info) => {
                    log::info!("Run {}: repository {} verified", run_id, info.full_name);
                    let record = CreatedRepositoryRecord::from_repository_info(info, &synthesized);
                    dispatcher.dispatch(Action::CreateMfe(CreateMfeAction::RepositoryVerified {
                        run_id,
                        record,
                    }));
                }
                Err(e) => {
                    log::warn!(
                        "Run {}: repository {} not found yet, keeping synthesized record: {:#}",
                        run_id,
                        synthesized.full_name,
                        e
                    );
                }
            }
        });
    }

    fn open_repository(&self, state: &AppState, dispatcher: &Dispatcher) {
        match &state.create_mfe.created_repository {
            Some(record) => {
                log::info!("Opening {} in browser", record.html_url);
                self.runtime.spawn(open_url(record.html_url.clone()));
            }
            None => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                    "Nothing To Open",
                    "The repository link is available once the MFE has been created.",
                    SOURCE,
                )));
            }
        }
    }
}

fn triggered_description(submission: &Submission) -> String {
    format!(
        "{} is being created from the {} template.",
        submission.repository_name,
        submission.label()
    )
}

impl Middleware for CreateMfeMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                self.prepare_client(dispatcher);
                true
            }

            Action::CreateMfe(CreateMfeAction::Submit) => {
                self.submit(state, dispatcher);
                false
            }

            Action::CreateMfe(CreateMfeAction::DispatchSucceeded {
                run_id,
                submission,
            }) => {
                if self.in_flight == Some(*run_id) {
                    self.in_flight = None;
                }
                if self.active_run == Some(*run_id) {
                    self.start_progress(*run_id, submission, dispatcher);
                }
                true
            }

            Action::CreateMfe(CreateMfeAction::DispatchFailed { run_id, .. }) => {
                if self.in_flight == Some(*run_id) {
                    self.in_flight = None;
                }
                if self.active_run == Some(*run_id) {
                    self.active_run = None;
                }
                true
            }

            Action::CreateMfe(CreateMfeAction::Completed { run_id, record }) => {
                if self.active_run == Some(*run_id) {
                    self.progress = None;
                    let label = state
                        .create_mfe
                        .submission
                        .as_ref()
                        .map(Submission::label)
                        .unwrap_or_else(|| template_label(""));
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        "MFE Created",
                        completion_message(label, &record.name),
                        SOURCE,
                    )));
                    self.verify_repository(*run_id, record, dispatcher);
                }
                true
            }

            Action::CreateMfe(CreateMfeAction::Reset) => {
                // A pending request cannot be recalled; reset once it answered
                if self.in_flight.is_some() || state.create_mfe.dispatching {
                    log::debug!("Ignoring reset: dispatch of run {:?} in flight", self.in_flight);
                    return false;
                }
                if let Some(run_id) = self.active_run.take() {
                    log::info!("Run {}: cancelled by reset", run_id);
                }
                self.cancel_progress();
                true
            }

            Action::CreateMfe(CreateMfeAction::OpenRepository) => {
                self.open_repository(state, dispatcher);
                false
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{GlobalAction, SidebarAction};
    use crate::domain_models::WorkflowStatus;
    use crate::middleware::{default_chain, run_chain};
    use crate::reducers::app_reducer::reduce;
    use crate::state::{ActiveView, StatusKind};
    use async_trait::async_trait;
    use portal_client::{RepositoryInfo, WorkflowClient};
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::mpsc::{self, Receiver};
    use std::sync::Mutex;
    use std::time::Duration;

    struct MockClient {
        response: Result<(), DispatchError>,
        repository: Option<RepositoryInfo>,
        calls: Mutex<Vec<WorkflowDispatch>>,
    }

    impl MockClient {
        fn answering(response: Result<(), DispatchError>) -> Arc<Self> {
            Arc::new(Self {
                response,
                repository: None,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn with_repository(repository: RepositoryInfo) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(()),
                repository: Some(repository),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<WorkflowDispatch> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WorkflowClient for MockClient {
        async fn dispatch_workflow(&self, dispatch: &WorkflowDispatch) -> Result<(), DispatchError> {
            self.calls.lock().unwrap().push(dispatch.clone());
            self.response.clone()
        }

        async fn fetch_repository(&self, _owner: &str, _name: &str) -> anyhow::Result<RepositoryInfo> {
            self.repository
                .clone()
                .ok_or_else(|| anyhow::anyhow!("Not Found"))
        }
    }

    /// Runs the real middleware chain and reducer on the test's tokio runtime
    struct Harness {
        state: AppState,
        middleware: Vec<Box<dyn Middleware>>,
        rx: Receiver<Action>,
        dispatcher: Dispatcher,
    }

    impl Harness {
        fn new(client: Arc<MockClient>) -> Self {
            let (tx, rx) = mpsc::channel();
            let config = AppConfig::default();
            let manager = ClientManager::with_client(client);
            Self {
                state: AppState::from_config(&config),
                middleware: default_chain(Handle::current(), manager, &config),
                rx,
                dispatcher: Dispatcher::new(tx),
            }
        }

        fn dispatch(&mut self, action: Action) {
            self.dispatcher.dispatch(action);
            self.drain();
        }

        fn drain(&mut self) {
            while let Ok(action) = self.rx.try_recv() {
                if run_chain(&mut self.middleware, &action, &self.state, &self.dispatcher) {
                    self.state = reduce(self.state.clone(), &action);
                }
            }
        }

        fn key(&mut self, code: KeyCode) {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            self.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
        }

        fn type_text(&mut self, text: &str) {
            for c in text.chars() {
                self.key(KeyCode::Char(c));
            }
        }

        /// Let spawned tasks run without moving the clock
        async fn settle(&mut self) {
            for _ in 0..20 {
                tokio::task::yield_now().await;
                self.drain();
            }
        }

        async fn advance(&mut self, duration: Duration) {
            tokio::time::sleep(duration).await;
            self.settle().await;
        }

        /// Open the form and fill it the way a user would
        fn fill_form(&mut self, repository: &str, product: &str, template: Option<&str>) {
            self.dispatch(Action::Sidebar(SidebarAction::Select(ActiveView::CreateMfe)));
            self.key(KeyCode::Enter);
            self.type_text(repository);
            self.key(KeyCode::Tab);
            self.type_text(product);
            self.key(KeyCode::Tab);
            match template {
                Some("portal") => self.key(KeyCode::Char(' ')),
                Some("backoffice") => {
                    self.key(KeyCode::Right);
                    self.key(KeyCode::Right);
                }
                _ => {}
            }
        }

        fn latest_toast(&self) -> (StatusKind, String, String) {
            let msg = self.state.status_bar.latest().expect("a notification");
            (msg.kind, msg.title.clone(), msg.description.clone())
        }
    }

    fn ok_harness() -> (Harness, Arc<MockClient>) {
        let client = MockClient::answering(Ok(()));
        (Harness::new(Arc::clone(&client)), client)
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_to_end_creation() {
        let (mut harness, client) = ok_harness();
        harness.fill_form("my-app", "My App", Some("portal"));
        assert_eq!(harness.state.create_mfe.repository_name, "my-app");
        assert_eq!(harness.state.create_mfe.product_name, "My App");
        assert_eq!(harness.state.create_mfe.selected_template.as_deref(), Some("portal"));

        harness.key(KeyCode::Enter);
        harness.settle().await;

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].owner, "mfepocautomation");
        assert_eq!(calls[0].git_ref, "main");
        assert_eq!(calls[0].inputs.product_name, "my-app");
        assert_eq!(calls[0].inputs.product_display_name, "My App");
        assert_eq!(calls[0].inputs.repository_visibility, "private");

        let form = &harness.state.create_mfe;
        assert_eq!(form.status, WorkflowStatus::Triggered);
        assert_eq!(form.loading_step, 1);
        assert!(form.repository_name.is_empty());
        assert!(form.product_name.is_empty());
        assert!(form.selected_template.is_none());
        let (kind, title, _) = harness.latest_toast();
        assert_eq!(kind, StatusKind::Success);
        assert_eq!(title, "Workflow Triggered");

        harness.advance(Duration::from_millis(19_999)).await;
        assert_eq!(harness.state.create_mfe.loading_step, 5);
        assert_eq!(harness.state.create_mfe.status, WorkflowStatus::Triggered);
        assert!(harness.state.create_mfe.created_repository.is_none());

        harness.advance(Duration::from_millis(2)).await;
        let form = &harness.state.create_mfe;
        assert_eq!(form.status, WorkflowStatus::Completed);
        assert_eq!(form.loading_step, 6);
        let record = form.created_repository.as_ref().unwrap();
        assert_eq!(record.html_url, "https://github.com/mfepocautomation/my-app");
        assert_eq!(record.full_name, "mfepocautomation/my-app");
        // The mock has no such repository: the synthesized record stays
        assert!(!record.verified);
        let (_, title, description) = harness.latest_toast();
        assert_eq!(title, "MFE Created");
        assert!(description.contains("Portal"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_step_progression_matches_offsets() {
        let (mut harness, _client) = ok_harness();
        harness.fill_form("my-app", "My App", Some("backoffice"));
        harness.dispatch(Action::CreateMfe(CreateMfeAction::Submit));
        harness.settle().await;

        let expected = [(3_000, 2), (3_000, 3), (6_000, 4), (6_000, 5)];
        for (after_ms, step) in expected {
            harness.advance(Duration::from_millis(after_ms - 1)).await;
            assert_eq!(harness.state.create_mfe.loading_step, step - 1);
            harness.advance(Duration::from_millis(1)).await;
            assert_eq!(harness.state.create_mfe.loading_step, step);
        }

        harness.advance(Duration::from_secs(2)).await;
        assert_eq!(harness.state.create_mfe.status, WorkflowStatus::Completed);
        let (_, _, description) = harness.latest_toast();
        assert!(description.contains("Backoffice"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_dispatch_stays_idle() {
        let client = MockClient::answering(Err(DispatchError::Http {
            status: 422,
            message: "Unexpected inputs provided".to_string(),
        }));
        let mut harness = Harness::new(Arc::clone(&client));
        harness.fill_form("my-app", "My App", Some("portal"));
        harness.dispatch(Action::CreateMfe(CreateMfeAction::Submit));
        harness.settle().await;

        assert_eq!(client.calls().len(), 1);
        let form = &harness.state.create_mfe;
        assert_eq!(form.status, WorkflowStatus::Idle);
        assert!(!form.dispatching);
        assert_eq!(form.loading_step, 0);
        assert_eq!(form.repository_name, "my-app");

        let (kind, title, description) = harness.latest_toast();
        assert_eq!(kind, StatusKind::Error);
        assert_eq!(title, "Workflow Failed");
        assert!(description.contains("422"));

        harness.advance(Duration::from_secs(60)).await;
        assert_eq!(harness.state.create_mfe.loading_step, 0);
        assert_eq!(harness.state.create_mfe.status, WorkflowStatus::Idle);

        // The user can retry after a failure
        harness.dispatch(Action::CreateMfe(CreateMfeAction::Submit));
        harness.settle().await;
        assert_eq!(client.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_token_is_reported_as_failure() {
        let config = AppConfig::default();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = CreateMfeMiddleware::new(
            Handle::current(),
            ClientManager::with_client(MockClient::answering(Err(DispatchError::MissingToken(
                "no token".to_string(),
            )))),
            &config,
        );
        let mut state = AppState::from_config(&config);
        state.create_mfe.repository_name = "my-app".to_string();
        state.create_mfe.product_name = "My App".to_string();
        state.create_mfe.selected_template = Some("portal".to_string());

        let forwarded = middleware.handle(
            &Action::CreateMfe(CreateMfeAction::Submit),
            &state,
            &dispatcher,
        );
        assert!(!forwarded);
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        let failed = rx.try_iter().any(|action| {
            matches!(
                action,
                Action::CreateMfe(CreateMfeAction::DispatchFailed { status: None, .. })
            )
        });
        assert!(failed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_incomplete_form_never_dispatches() {
        let cases = [
            ("", "", None),
            ("my-app", "", None),
            ("", "My App", None),
            ("", "", Some("portal")),
            ("my-app", "My App", None),
            ("my-app", "", Some("portal")),
            ("", "My App", Some("portal")),
            ("   ", "My App", Some("portal")),
        ];

        for (repository, product, template) in cases {
            let (mut harness, client) = ok_harness();
            harness.fill_form(repository, product, template);
            harness.key(KeyCode::Enter);
            harness.settle().await;

            assert!(client.calls().is_empty(), "dispatched for {:?}", (repository, product));
            let (kind, title, description) = harness.latest_toast();
            assert_eq!(kind, StatusKind::Error);
            assert_eq!(title, "Missing Information");
            assert_eq!(
                description,
                "Please fill in all required fields before creating the MFE."
            );
            assert_eq!(harness.state.create_mfe.status, WorkflowStatus::Idle);
            assert!(!harness.state.create_mfe.dispatching);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_progress() {
        let (mut harness, _client) = ok_harness();
        harness.fill_form("my-app", "My App", Some("portal"));
        harness.dispatch(Action::CreateMfe(CreateMfeAction::Submit));
        harness.settle().await;

        harness.advance(Duration::from_secs(4)).await;
        assert_eq!(harness.state.create_mfe.loading_step, 2);

        harness.dispatch(Action::CreateMfe(CreateMfeAction::Reset));
        assert_eq!(harness.state.create_mfe.status, WorkflowStatus::Idle);
        assert_eq!(harness.state.create_mfe.loading_step, 0);

        harness.advance(Duration::from_secs(60)).await;
        let form = &harness.state.create_mfe;
        assert_eq!(form.status, WorkflowStatus::Idle);
        assert_eq!(form.loading_step, 0);
        assert!(form.created_repository.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_does_not_cancel_progress() {
        let (mut harness, _client) = ok_harness();
        harness.fill_form("my-app", "My App", Some("portal"));
        harness.dispatch(Action::CreateMfe(CreateMfeAction::Submit));
        harness.settle().await;

        harness.dispatch(Action::Sidebar(SidebarAction::Select(ActiveView::Dashboard)));
        harness.advance(Duration::from_secs(21)).await;

        assert_eq!(harness.state.portal.active_view, ActiveView::Dashboard);
        assert_eq!(harness.state.create_mfe.status, WorkflowStatus::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_is_ignored() {
        let (mut harness, client) = ok_harness();
        harness.fill_form("my-app", "My App", Some("portal"));
        harness.dispatch(Action::CreateMfe(CreateMfeAction::Submit));
        harness.dispatch(Action::CreateMfe(CreateMfeAction::Submit));
        harness.settle().await;
        assert_eq!(client.calls().len(), 1);

        // Triggered: the form is cleared and the submit stays disabled until reset
        harness.fill_form("other-app", "Other App", Some("portal"));
        harness.dispatch(Action::CreateMfe(CreateMfeAction::Submit));
        harness.settle().await;
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_is_ignored_while_dispatching() {
        let (mut harness, client) = ok_harness();
        harness.fill_form("my-app", "My App", Some("portal"));
        harness.dispatch(Action::CreateMfe(CreateMfeAction::Submit));
        assert!(harness.state.create_mfe.dispatching);

        // The request has not answered yet: reset and resubmit change nothing
        harness.dispatch(Action::CreateMfe(CreateMfeAction::Reset));
        assert!(harness.state.create_mfe.dispatching);
        assert_eq!(harness.state.create_mfe.repository_name, "my-app");
        harness.dispatch(Action::CreateMfe(CreateMfeAction::Submit));
        harness.settle().await;

        assert_eq!(client.calls().len(), 1);
        let triggered = harness
            .state
            .status_bar
            .messages
            .iter()
            .filter(|msg| msg.title == "Workflow Triggered")
            .count();
        assert_eq!(triggered, 1);
        assert_eq!(harness.state.create_mfe.status, WorkflowStatus::Triggered);

        // Once answered, reset works again
        harness.dispatch(Action::CreateMfe(CreateMfeAction::Reset));
        assert_eq!(harness.state.create_mfe.status, WorkflowStatus::Idle);
        harness.advance(Duration::from_secs(30)).await;
        assert_eq!(harness.state.create_mfe.loading_step, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_completed_repository_is_verified() {
        let client = MockClient::with_repository(RepositoryInfo {
            name: "my-app".to_string(),
            full_name: "mfepocautomation/my-app".to_string(),
            html_url: "https://github.com/mfepocautomation/my-app".to_string(),
            description: Some("Created by the factory".to_string()),
            visibility: "private".to_string(),
            created_at: None,
        });
        let mut harness = Harness::new(client);
        harness.fill_form("my-app", "My App", Some("portal"));
        harness.dispatch(Action::CreateMfe(CreateMfeAction::Submit));
        harness.settle().await;

        harness.advance(Duration::from_secs(21)).await;
        let record = harness.state.create_mfe.created_repository.as_ref().unwrap();
        assert!(record.verified);
        assert_eq!(record.description, "Created by the factory");
    }
}
