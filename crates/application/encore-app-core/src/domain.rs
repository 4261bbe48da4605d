use encore_core::{default_checklist, ChecklistItem, EventDraft, EventId, WizardStep};
use uuid::Uuid;

/// Identity of one background task start. Results carry it back so late
/// deliveries from a superseded or unmounted view can be discarded.
pub type TaskRunId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    EventDetail(EventId),
    Dashboard,
    CreateEvent,
    /// Not reachable from the regular navigation; the UI exposes it through
    /// a hidden keyboard chord.
    Admin,
}

/// State of the event-creation wizard. Exists only while the wizard route is
/// mounted; navigating away discards the draft entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub step: WizardStep,
    pub draft: EventDraft,
    pub generating: bool,
    pub publishing: bool,
    pub run_id: Option<TaskRunId>,
    /// Precondition alert, e.g. generation requested without title/details.
    pub notice: Option<String>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: WizardStep::Basics,
            draft: EventDraft::default(),
            generating: false,
            publishing: false,
            run_id: None,
            notice: None,
        }
    }
}

/// Ticket selection + simulated checkout on the event detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutState {
    pub event_id: EventId,
    pub quantity: u32,
    pub modal_open: bool,
    /// Acknowledgement of the simulated payment. No transaction exists.
    pub receipt: Option<String>,
}

impl CheckoutState {
    pub fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            quantity: encore_config::MIN_TICKET_QUANTITY,
            modal_open: false,
            receipt: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Database,
    Payments,
    Security,
    Intelligence,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Database,
        AdminTab::Payments,
        AdminTab::Security,
        AdminTab::Intelligence,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Database => "Infra",
            AdminTab::Payments => "Gateway",
            AdminTab::Security => "Security",
            AdminTab::Intelligence => "Intelligence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseEngine {
    Postgres,
    Mysql,
    Mongo,
}

impl DatabaseEngine {
    pub const ALL: [DatabaseEngine; 3] = [
        DatabaseEngine::Postgres,
        DatabaseEngine::Mysql,
        DatabaseEngine::Mongo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DatabaseEngine::Postgres => "PostgreSQL (Recomendado)",
            DatabaseEngine::Mysql => "MySQL",
            DatabaseEngine::Mongo => "MongoDB",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentProvider {
    Stripe,
    MercadoPago,
    Pagarme,
}

impl PaymentProvider {
    pub const ALL: [PaymentProvider; 3] = [
        PaymentProvider::Stripe,
        PaymentProvider::MercadoPago,
        PaymentProvider::Pagarme,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentProvider::Stripe => "Stripe",
            PaymentProvider::MercadoPago => "MercadoPago",
            PaymentProvider::Pagarme => "Pagar.me",
        }
    }
}

/// Mock database settings form. Never sent anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseForm {
    pub engine: DatabaseEngine,
    pub pool_size: u32,
    pub connection_url: String,
}

impl Default for DatabaseForm {
    fn default() -> Self {
        Self {
            engine: DatabaseEngine::Postgres,
            pool_size: 20,
            connection_url: String::new(),
        }
    }
}

/// Mock payment gateway form. Never sent anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentForm {
    pub provider: PaymentProvider,
    pub api_key: String,
    pub webhook_secret: String,
    pub test_mode: bool,
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self {
            provider: PaymentProvider::Stripe,
            api_key: String::new(),
            webhook_secret: String::new(),
            test_mode: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminState {
    pub active_tab: AdminTab,
    pub checklist: Vec<ChecklistItem>,
    pub database: DatabaseForm,
    pub payments: PaymentForm,
    /// Tab whose simulated save is in flight.
    pub saving: Option<AdminTab>,
    pub run_id: Option<TaskRunId>,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            active_tab: AdminTab::Database,
            checklist: default_checklist(),
            database: DatabaseForm::default(),
            payments: PaymentForm::default(),
            saving: None,
            run_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub route: Route,

    // Per-view state, owned exclusively by its route and dropped on leave.
    pub wizard: Option<WizardState>,
    pub checkout: Option<CheckoutState>,
    pub admin: Option<AdminState>,

    pub last_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: Route::Home,
            wizard: None,
            checkout: None,
            admin: None,
            last_error: None,
        }
    }
}
