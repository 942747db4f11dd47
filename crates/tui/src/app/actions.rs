use super::*;

impl App {
    /// One fire-and-forget request-token call per key press. The outcome
    /// comes back through the event channel; until then only the pending
    /// flag changes.
    pub(super) fn start_login(&mut self) {
        self.login_pending = true;
        let api = self.auth_api.clone();
        self.spawn_app_task(async move {
            match api.request_token().await {
                Ok(grant) => AppAsyncEvent::RequestTokenFetched {
                    grant: Some(grant),
                    error: None,
                },
                Err(e) => {
                    tracing::warn!("Request-token call failed: {e}");
                    AppAsyncEvent::RequestTokenFetched {
                        grant: None,
                        error: Some(e.user_message().to_string()),
                    }
                }
            }
        });
    }

    /// Route changes go through here. Entering the login route resets the
    /// exchange state machine and starts it, so every visit runs exactly
    /// one Idle -> Fetching -> terminal sequence.
    pub fn navigate(&mut self, route: Route) {
        self.route = route;
        if route == Route::Login {
            self.status = FetchStatus::Idle;
            self.navigated = false;
            self.begin_authorize();
        }
    }
}
