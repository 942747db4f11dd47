use super::*;

impl App {
    /// Entry action for the login route. Moves the status cell to
    /// `Fetching` before the exchange call is issued, so no later event can
    /// be observed ahead of the call. A missing stored token is passed
    /// through as-is; backends that need no token accept null.
    pub(super) fn begin_authorize(&mut self) {
        if self.status != FetchStatus::Idle {
            return;
        }
        self.status = FetchStatus::Fetching;

        let token = match self.token_store.get() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Failed to read stored request token: {e}");
                None
            }
        };

        let api = self.auth_api.clone();
        self.spawn_app_task(async move {
            match api.authorize(token.as_deref()).await {
                Ok(()) => AppAsyncEvent::AuthorizeFinished { error: None },
                Err(e) => {
                    tracing::warn!("Authorization exchange failed: {e}");
                    AppAsyncEvent::AuthorizeFinished {
                        error: Some(e.user_message().to_string()),
                    }
                }
            }
        });
    }

    pub fn process_app_events(&mut self) {
        let mut events = Vec::new();
        if let Some(ref mut rx) = self.app_async_rx {
            while let Ok(event) = rx.try_recv() {
                events.push(event);
            }
        }

        for event in events {
            match event {
                AppAsyncEvent::RequestTokenFetched { grant, error } => {
                    self.login_pending = false;
                    if let Some(err) = error {
                        self.report_error("Login with Pocket failed", err);
                    } else if let Some(grant) = grant {
                        if let Some(ref token) = grant.request_token {
                            if let Err(e) = self.token_store.set(token) {
                                // A URI whose token never made it to disk
                                // would dead-end the authorize step later.
                                self.report_error("Failed to persist request token", e);
                                continue;
                            }
                        }
                        self.auth_uri = Some(grant.auth_uri);
                        self.clear_error();
                    }
                }
                AppAsyncEvent::AuthorizeFinished { error } => {
                    if self.status != FetchStatus::Fetching {
                        // Terminal states latch; late outcomes are dropped.
                        continue;
                    }
                    if let Some(err) = error {
                        self.status = FetchStatus::Error;
                        self.report_error("Authorization failed", err);
                    } else {
                        self.status = FetchStatus::Success;
                        self.clear_error();
                    }
                }
            }
        }

        self.run_status_reactions();
    }

    /// Reactions to status-cell changes, kept out of the transitions
    /// themselves. Entering `Success` navigates back home; the `navigated`
    /// latch makes that fire once per successful transition.
    pub(super) fn run_status_reactions(&mut self) {
        if self.status == FetchStatus::Success && !self.navigated {
            self.navigated = true;
            tracing::info!("Authorization complete, returning to home");
            self.navigate(Route::Home);
        }
    }
}
