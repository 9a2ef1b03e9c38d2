use briefly_core::{
    account::dto::AccountOutcome,
    history::dto::SummaryRecord,
    helpers::utils::extract_url,
    session::dto::AuthState,
    summarize::dto::{CONNECTION_FAILED_MESSAGE, Effect},
    usage::dto::UsageOutcome,
};
use log::error;

use crate::commands::{Command, HELP};
use crate::dependencies::AppDependencies;
use crate::views::{
    View, render_error, render_history, render_home, render_results, render_upgrade_prompt,
};

pub enum Step {
    Output(String),
    Quit,
}

/// The terminal front end: keeps the current view and turns each command
/// into core calls.
pub struct App {
    deps: AppDependencies,
    view: View,
}

impl App {
    pub fn new(deps: AppDependencies) -> Self {
        Self {
            deps,
            view: View::Home,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub async fn handle(&mut self, command: Command) -> Step {
        let output = match command {
            Command::Signup { email, password } => {
                let outcome = self.deps.account.signup(&email, &password).await;
                self.account_result(outcome, "Account created successfully!", "Signup failed")
            }
            Command::Login { email, password } => {
                let outcome = self.deps.account.login(&email, &password).await;
                self.account_result(outcome, "Logged in.", "Login failed")
            }
            Command::Logout => {
                self.deps.session.logout().await;
                self.view = View::Login;
                "Logged out.".to_string()
            }
            Command::Status => match self.deps.session.state() {
                AuthState::Authenticated => "Logged in.".to_string(),
                AuthState::Unauthenticated => "Not logged in.".to_string(),
                AuthState::Unknown => "Still checking your session.".to_string(),
            },
            Command::Summarize(text) => self.summarize(&text).await,
            Command::Results => self.open_results().await,
            Command::Save => match self.deps.history.save_current() {
                Ok(Some(_)) => "Saved to History!".to_string(),
                Ok(None) => "No summary to save.".to_string(),
                Err(e) => storage_error(e),
            },
            Command::Another => match self.deps.history.clear_current() {
                Ok(()) => {
                    self.view = View::Home;
                    render_home()
                }
                Err(e) => storage_error(e),
            },
            Command::History => {
                self.view = View::History;
                render_history(&self.deps.history.load())
            }
            Command::View(position) => match self.deps.history.view(position - 1) {
                Ok(Some(record)) => self.show_results(record).await,
                Ok(None) => format!("No saved summary at position {}.", position),
                Err(e) => storage_error(e),
            },
            Command::Delete(position) => match self.deps.history.remove(position - 1) {
                Ok(Some(_)) => {
                    self.view = View::History;
                    format!(
                        "Summary deleted.\n\n{}",
                        render_history(&self.deps.history.load())
                    )
                }
                Ok(None) => format!("No saved summary at position {}.", position),
                Err(e) => storage_error(e),
            },
            Command::Credits => match self.deps.usage.fetch_credits().await {
                UsageOutcome::Credits(credits) => format!("Credits remaining: {}", credits),
                UsageOutcome::AuthenticationRequired => self.expire_session().await,
            },
            Command::Help => HELP.to_string(),
            Command::Quit => return Step::Quit,
        };

        Step::Output(output)
    }

    async fn summarize(&mut self, text: &str) -> String {
        let url = extract_url(text).unwrap_or_else(|| text.to_string());
        let outcome = self.deps.summarizer.submit(&url).await;

        match outcome.effect() {
            Effect::NavigateToResults => match outcome.record() {
                Some(record) => self.show_results(record.clone()).await,
                None => self.open_results().await,
            },
            Effect::RedirectToLogin => self.redirect_to_login(),
            Effect::ShowUpgradePrompt => render_upgrade_prompt(),
            Effect::ShowError { title, message } => render_error(&title, &message),
        }
    }

    /// Show the current summary with a fresh credit balance, or go home if
    /// there is nothing to show.
    async fn open_results(&mut self) -> String {
        let Some(record) = self.deps.history.current() else {
            self.view = View::Home;
            return format!("No summary to show.\n\n{}", render_home());
        };

        self.show_results(record).await
    }

    async fn show_results(&mut self, record: SummaryRecord) -> String {
        match self.deps.usage.fetch_credits().await {
            UsageOutcome::Credits(credits) => {
                self.view = View::Results;
                render_results(&record, credits)
            }
            UsageOutcome::AuthenticationRequired => self.expire_session().await,
        }
    }

    async fn expire_session(&mut self) -> String {
        self.deps.session.logout().await;
        self.redirect_to_login()
    }

    fn redirect_to_login(&mut self) -> String {
        self.view = View::Login;
        "Session expired. Please log in again with `login <email> <password>`.".to_string()
    }

    fn account_result(&mut self, outcome: AccountOutcome, accepted: &str, failed: &str) -> String {
        match outcome {
            AccountOutcome::Accepted {
                authenticated: true,
            } => {
                self.view = View::Home;
                format!("{}\n\n{}", accepted, render_home())
            }
            AccountOutcome::Accepted {
                authenticated: false,
            } => format!(
                "{} The session could not be confirmed yet; try `status` or `login`.",
                accepted
            ),
            AccountOutcome::ValidationError { message } | AccountOutcome::Rejected { message } => {
                render_error(failed, &message)
            }
            AccountOutcome::TransportFailure => render_error("Error", CONNECTION_FAILED_MESSAGE),
        }
    }
}

fn storage_error(e: briefly_core::error::ClientError) -> String {
    error!("❌ Storage error: {}", e);
    render_error("Storage error", &e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use briefly_core::helpers::config::ClientConfig;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn app_for(server: &MockServer) -> (App, AppDependencies, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = ClientConfig::new(format!("{}/api", server.uri()))
            .unwrap()
            .with_db_path(temp_dir.path().join("db"));
        let deps = AppDependencies::new(config).unwrap();
        (App::new(deps.clone()), deps, temp_dir)
    }

    async fn mount_usage(server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/api/usage"))
            .respond_with(response)
            .mount(server)
            .await;
    }

    async fn mount_summary(server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/api/summarize"))
            .respond_with(response)
            .mount(server)
            .await;
    }

    fn output(step: Step) -> String {
        match step {
            Step::Output(text) => text,
            Step::Quit => panic!("unexpected quit"),
        }
    }

    #[tokio::test]
    async fn test_summarize_then_save_and_delete() {
        let server = MockServer::start().await;
        mount_usage(&server, ResponseTemplate::new(200).set_body_json(json!({ "credits": 4 }))).await;
        mount_summary(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({ "summary": "A short recap." })),
        )
        .await;
        let (mut app, deps, _temp) = app_for(&server).await;

        let text = output(
            app.handle(Command::Summarize("watch [this](https://youtu.be/abc)".to_string()))
                .await,
        );
        assert_eq!(app.view(), View::Results);
        assert!(text.contains("A short recap."));
        assert!(text.contains("Credits remaining: 4"));

        output(app.handle(Command::Save).await);
        let history = output(app.handle(Command::History).await);
        assert!(history.contains("1. https://youtu.be/abc"));

        let missing = output(app.handle(Command::Delete(5)).await);
        assert!(missing.contains("No saved summary at position 5"));
        assert_eq!(deps.history.load().len(), 1);

        output(app.handle(Command::Delete(1)).await);
        assert!(deps.history.load().is_empty());

        output(app.handle(Command::Another).await);
        assert_eq!(app.view(), View::Home);
        assert!(deps.history.current().is_none());
    }

    #[tokio::test]
    async fn test_quota_exceeded_shows_upgrade_prompt() {
        let server = MockServer::start().await;
        mount_usage(&server, ResponseTemplate::new(200)).await;
        mount_summary(&server, ResponseTemplate::new(403)).await;
        let (mut app, deps, _temp) = app_for(&server).await;

        let text = output(app.handle(Command::Summarize("https://youtu.be/abc".to_string())).await);

        assert!(text.contains("Purchase Credits"));
        assert_eq!(app.view(), View::Home);
        assert!(deps.history.current().is_none());
    }

    #[tokio::test]
    async fn test_expired_session_on_results_redirects_to_login() {
        let server = MockServer::start().await;
        mount_usage(&server, ResponseTemplate::new(401)).await;
        Mock::given(method("POST"))
            .and(path("/api/logout"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        let (mut app, deps, _temp) = app_for(&server).await;
        let record = SummaryRecord::new(
            "kept",
            "https://youtu.be/abc",
            "2024-02-03T10:00:00Z".parse().unwrap(),
        );
        deps.history.set_current(&record).unwrap();

        let text = output(app.handle(Command::Results).await);

        assert!(text.contains("Session expired"));
        assert_eq!(app.view(), View::Login);
        assert!(!deps.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_invalid_url_shows_error() {
        let server = MockServer::start().await;
        mount_usage(&server, ResponseTemplate::new(200)).await;
        let (mut app, _deps, _temp) = app_for(&server).await;

        let text = output(app.handle(Command::Summarize("https://vimeo.com/1".to_string())).await);

        assert!(text.contains("Invalid URL"));
        assert_eq!(app.view(), View::Home);
    }

    #[tokio::test]
    async fn test_view_opens_saved_summary_by_position() {
        let server = MockServer::start().await;
        mount_usage(&server, ResponseTemplate::new(200).set_body_json(json!({ "credits": 3 }))).await;
        let (mut app, deps, _temp) = app_for(&server).await;
        let created_at = "2024-02-03T10:00:00Z".parse().unwrap();
        let older = SummaryRecord::new("older recap", "https://youtu.be/older", created_at);
        let newer = SummaryRecord::new("newer recap", "https://youtu.be/newer", created_at);
        deps.history.save(older.clone()).unwrap();
        deps.history.save(newer).unwrap();

        let text = output(app.handle(Command::View(2)).await);

        assert!(text.contains("older recap"));
        assert!(text.contains("Credits remaining: 3"));
        assert_eq!(app.view(), View::Results);
        assert_eq!(deps.history.current(), Some(older));
        assert_eq!(deps.history.load().len(), 2);
    }

    #[tokio::test]
    async fn test_logout_then_login() {
        let server = MockServer::start().await;
        mount_usage(&server, ResponseTemplate::new(200).set_body_json(json!({ "credits": 1 }))).await;
        Mock::given(method("POST"))
            .and(path("/api/logout"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        let (mut app, deps, _temp) = app_for(&server).await;
        deps.session
            .subscribe()
            .wait_for(|state| *state != AuthState::Unknown)
            .await
            .unwrap();

        let text = output(app.handle(Command::Logout).await);
        assert_eq!(text, "Logged out.");
        assert_eq!(app.view(), View::Login);
        assert!(!deps.session.is_authenticated());

        let text = output(
            app.handle(Command::Login {
                email: "ada@example.com".to_string(),
                password: "correct-horse".to_string(),
            })
            .await,
        );
        assert!(text.starts_with("Logged in."));
        assert_eq!(app.view(), View::Home);
        assert!(deps.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_signup_shows_server_detail() {
        let server = MockServer::start().await;
        mount_usage(&server, ResponseTemplate::new(401)).await;
        Mock::given(method("POST"))
            .and(path("/api/signup"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "detail": "Email already registered" })),
            )
            .expect(1)
            .mount(&server)
            .await;
        let (mut app, _deps, _temp) = app_for(&server).await;

        let text = output(
            app.handle(Command::Signup {
                email: "ada@example.com".to_string(),
                password: "correct-horse".to_string(),
            })
            .await,
        );

        assert_eq!(text, render_error("Signup failed", "Email already registered"));
        assert_eq!(app.view(), View::Home);
    }

    #[tokio::test]
    async fn test_signup_with_short_password_sends_nothing() {
        let server = MockServer::start().await;
        mount_usage(&server, ResponseTemplate::new(401)).await;
        Mock::given(method("POST"))
            .and(path("/api/signup"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let (mut app, _deps, _temp) = app_for(&server).await;

        let text = output(
            app.handle(Command::Signup {
                email: "ada@example.com".to_string(),
                password: "short".to_string(),
            })
            .await,
        );

        assert!(text.contains("Password must be at least 8 characters"));
    }

    #[tokio::test]
    async fn test_quit() {
        let server = MockServer::start().await;
        let (mut app, _deps, _temp) = app_for(&server).await;

        assert!(matches!(app.handle(Command::Quit).await, Step::Quit));
    }
}
