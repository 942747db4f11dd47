use pocket_tui_auth::RequestTokenGrant;

/// The two routes of the app: home hosts the login entry point, login is
/// the authorization callback the user lands on after granting access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
}

/// Lifecycle of the one authorization exchange issued per visit to the
/// login route. `Success` and `Error` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Fetching,
    Success,
    Error,
}

pub enum AppAsyncEvent {
    RequestTokenFetched {
        grant: Option<RequestTokenGrant>,
        error: Option<String>,
    },
    AuthorizeFinished {
        error: Option<String>,
    },
}
