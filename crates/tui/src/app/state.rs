use super::*;

pub struct App {
    pub should_quit: bool,
    pub route: Route,
    pub config: Config,
    pub auth_api: AuthApi,
    pub token_store: Arc<dyn TokenStore>,
    pub keybinds: Keybinds,
    pub login_pending: bool,
    pub auth_uri: Option<String>,
    pub status: FetchStatus,
    pub navigated: bool,
    pub show_help: bool,
    pub show_error_details: bool,
    pub last_error: Option<String>,
    pub app_async_tx: Option<mpsc::UnboundedSender<AppAsyncEvent>>,
    pub app_async_rx: Option<mpsc::UnboundedReceiver<AppAsyncEvent>>,
}

impl App {
    pub fn new(config: Config, token_store: Arc<dyn TokenStore>) -> Self {
        let (app_async_tx, app_async_rx) = mpsc::unbounded_channel();
        let auth_api = AuthApi::new(config.backend.base_url.clone());

        Self {
            should_quit: false,
            route: Route::Home,
            config,
            auth_api,
            token_store,
            keybinds: Keybinds::default(),
            login_pending: false,
            auth_uri: None,
            status: FetchStatus::Idle,
            navigated: false,
            show_help: false,
            show_error_details: false,
            last_error: None,
            app_async_tx: Some(app_async_tx),
            app_async_rx: Some(app_async_rx),
        }
    }
}
