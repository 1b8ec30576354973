//! Application State
//!
//! Central application state management for aventura.

use crate::api::client::CatalogClient;
use crate::api::http::format_api_error;
use crate::api::model::{Adventure, NewAdventure};
use crate::config::Config;
use crate::view;

/// Title shown on the detail page when the record cannot be loaded.
pub const NOT_FOUND_TITLE: &str = "Aventura não encontrada!";

/// Pages of the client, the terminal analogue of the original HTML pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Detail,
    Register,
}

/// Application modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,  // Browsing the current page
    Confirm, // Delete confirmation dialog
    Notice,  // Blocking notice dialog (OK only)
    Help,    // ? help popup
}

/// Page requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PageArg {
    Home,
    Detail,
    Register,
}

/// Start page resolved once at launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartPage {
    Home,
    Detail(String),
    Register,
}

/// Resolve the start page from the CLI arguments.
///
/// A detail request without an identifier resolves to the listing page;
/// no fetch is ever issued for it.
pub fn resolve_start_page(page: Option<PageArg>, id: Option<String>) -> StartPage {
    match (page, id) {
        (Some(PageArg::Detail), Some(id)) if !id.is_empty() => StartPage::Detail(id),
        (Some(PageArg::Detail), _) => StartPage::Home,
        (Some(PageArg::Register), _) => StartPage::Register,
        _ => StartPage::Home,
    }
}

/// Deletion awaiting user confirmation
#[derive(Debug, Clone)]
pub struct PendingDelete {
    pub id: String,
    pub message: String,
    pub selected_yes: bool,
}

/// Creation form field labels, in focus order. The wire names of the
/// corresponding inputs (`nome`, `localizacao`, `dificuldade`,
/// `descricao_breve`, `imagem_card`) are applied by
/// [`NewAdventure::from_form`].
pub const FORM_FIELDS: [&str; 5] = [
    "Nome",
    "Localização",
    "Dificuldade",
    "Descrição breve",
    "Imagem do card (URL)",
];

/// Creation form state
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub values: [String; FORM_FIELDS.len()],
    pub focused: usize,
}

impl FormState {
    pub fn current_mut(&mut self) -> &mut String {
        &mut self.values[self.focused]
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % FORM_FIELDS.len();
    }

    pub fn prev_field(&mut self) {
        self.focused = (self.focused + FORM_FIELDS.len() - 1) % FORM_FIELDS.len();
    }

    pub fn is_last_field(&self) -> bool {
        self.focused == FORM_FIELDS.len() - 1
    }

    /// All fields are required, as on the original form.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|value| !value.trim().is_empty())
    }

    pub fn reset(&mut self) {
        self.values = Default::default();
        self.focused = 0;
    }

    pub fn to_record(&self) -> NewAdventure {
        NewAdventure::from_form(
            &self.values[0],
            &self.values[1],
            &self.values[2],
            &self.values[3],
            &self.values[4],
        )
    }
}

/// Main application state
pub struct App {
    // Catalog client
    pub client: CatalogClient,

    // Current page and mode
    pub page: Page,
    pub mode: Mode,

    // Home page data and projections
    pub items: Vec<Adventure>,
    pub slides: Vec<view::CarouselSlide>,
    pub cards: Vec<view::AdventureCard>,
    pub carousel_index: usize,
    pub selected: usize,

    // Detail page
    pub detail_title: Option<String>,
    pub detail: Option<view::DetailPage>,

    // Creation form
    pub form: FormState,

    // Dialogs
    pub pending_delete: Option<PendingDelete>,
    pub notice_message: Option<String>,

    // Persistent configuration
    pub config: Config,

    // Read-only mode blocks create/delete
    pub readonly: bool,
}

impl App {
    pub fn new(client: CatalogClient, config: Config, readonly: bool) -> Self {
        Self {
            client,
            page: Page::Home,
            mode: Mode::Normal,
            items: Vec::new(),
            slides: Vec::new(),
            cards: Vec::new(),
            carousel_index: 0,
            selected: 0,
            detail_title: None,
            detail: None,
            form: FormState::default(),
            pending_delete: None,
            notice_message: None,
            config,
            readonly,
        }
    }

    // =========================================================================
    // Page loading
    // =========================================================================

    /// Reload the collection and rebuild the home projections.
    ///
    /// Read failures are only logged; the page renders empty.
    pub async fn load_home(&mut self) {
        match self.client.fetch_all().await {
            Ok(items) => {
                self.slides = view::carousel_slides(&items);
                self.cards = view::grid_cards(&items);
                self.items = items;
                if self.carousel_index >= self.slides.len() {
                    self.carousel_index = 0;
                }
                if self.selected >= self.cards.len() {
                    self.selected = self.cards.len().saturating_sub(1);
                }
            }
            Err(e) => {
                tracing::error!("Failed to load catalog: {:#}", e);
                self.items.clear();
                self.slides.clear();
                self.cards.clear();
                self.carousel_index = 0;
                self.selected = 0;
            }
        }
    }

    /// Navigate to the listing page and reload it.
    pub async fn go_home(&mut self) {
        self.page = Page::Home;
        self.detail_title = None;
        self.detail = None;
        let _ = self.config.set_last_page("home");
        self.load_home().await;
    }

    /// Navigate to the detail page for the given identifier.
    pub async fn open_detail(&mut self, id: &str) {
        self.page = Page::Detail;
        let _ = self.config.set_last_page("detail");

        match self.client.fetch_one(id).await {
            Ok(Some(item)) => {
                self.detail_title = Some(item.name.clone());
                self.detail = Some(view::detail_page(&item));
            }
            Ok(None) => {
                self.detail_title = Some(NOT_FOUND_TITLE.to_string());
                self.detail = None;
            }
            Err(e) => {
                tracing::error!("Failed to load record {}: {:#}", id, e);
                self.detail_title = Some(NOT_FOUND_TITLE.to_string());
                self.detail = None;
            }
        }
    }

    /// Navigate to the creation form.
    pub fn open_register(&mut self) {
        self.page = Page::Register;
        let _ = self.config.set_last_page("register");
    }

    // =========================================================================
    // Home navigation
    // =========================================================================

    pub fn selected_card(&self) -> Option<&view::AdventureCard> {
        self.cards.get(self.selected)
    }

    pub fn next(&mut self) {
        if !self.cards.is_empty() {
            self.selected = (self.selected + 1).min(self.cards.len() - 1);
        }
    }

    pub fn previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn carousel_next(&mut self) {
        if !self.slides.is_empty() {
            self.carousel_index = (self.carousel_index + 1) % self.slides.len();
        }
    }

    pub fn carousel_prev(&mut self) {
        if !self.slides.is_empty() {
            self.carousel_index =
                (self.carousel_index + self.slides.len() - 1) % self.slides.len();
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Ask for confirmation before deleting the selected record.
    pub fn request_delete(&mut self) {
        if self.readonly {
            self.show_notice("Modo somente leitura: ações desabilitadas.");
            return;
        }

        let Some(card) = self.selected_card() else {
            return;
        };

        self.pending_delete = Some(PendingDelete {
            id: card.detail_id.clone(),
            message: format!(
                "Tem certeza que deseja excluir a aventura de ID {}?",
                card.detail_id
            ),
            selected_yes: false,
        });
        self.mode = Mode::Confirm;
    }

    /// Execute the confirmed deletion and refresh the list on success.
    pub async fn confirm_delete(&mut self) {
        let Some(pending) = self.pending_delete.take() else {
            self.mode = Mode::Normal;
            return;
        };

        match self.client.remove(&pending.id).await {
            Ok(()) => {
                if self.page == Page::Home {
                    self.load_home().await;
                }
                self.show_notice(&format!("Aventura {} excluída com sucesso!", pending.id));
            }
            Err(e) => {
                tracing::error!("DELETE {} failed: {:#}", pending.id, e);
                self.show_notice(&format!(
                    "Erro ao excluir aventura. {}",
                    format_api_error(&e)
                ));
            }
        }
    }

    /// The edit action is a stub: the server supports PUT but the client
    /// has no dedicated form for it.
    pub fn edit_stub(&mut self) {
        self.show_notice("Edição (PUT) suportada no servidor, mas sem formulário dedicado.");
    }

    /// Submit the creation form. Fields are cleared on success and kept
    /// on failure so the user can retry.
    pub async fn submit_form(&mut self) {
        if self.readonly {
            self.show_notice("Modo somente leitura: ações desabilitadas.");
            return;
        }

        if !self.form.is_complete() {
            self.show_notice("Preencha todos os campos obrigatórios.");
            return;
        }

        let record = self.form.to_record();
        match self.client.create(&record).await {
            Ok(()) => {
                self.form.reset();
                self.show_notice("Aventura cadastrada com sucesso!");
            }
            Err(e) => {
                tracing::error!("POST failed: {:#}", e);
                self.show_notice(&format!(
                    "Erro ao cadastrar aventura. {}",
                    format_api_error(&e)
                ));
            }
        }
    }

    // =========================================================================
    // Dialogs
    // =========================================================================

    pub fn show_notice(&mut self, message: &str) {
        self.notice_message = Some(message.to_string());
        self.mode = Mode::Notice;
    }

    pub fn enter_help_mode(&mut self) {
        self.mode = Mode::Help;
    }

    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
        self.pending_delete = None;
        self.notice_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_start_without_id_falls_back_to_home() {
        assert_eq!(
            resolve_start_page(Some(PageArg::Detail), None),
            StartPage::Home
        );
        assert_eq!(
            resolve_start_page(Some(PageArg::Detail), Some(String::new())),
            StartPage::Home
        );
    }

    #[test]
    fn detail_start_with_id_opens_detail() {
        assert_eq!(
            resolve_start_page(Some(PageArg::Detail), Some("3".to_string())),
            StartPage::Detail("3".to_string())
        );
    }

    #[test]
    fn default_start_is_home() {
        assert_eq!(resolve_start_page(None, None), StartPage::Home);
        // A stray id without a page request is ignored
        assert_eq!(
            resolve_start_page(None, Some("3".to_string())),
            StartPage::Home
        );
    }

    #[test]
    fn register_start_opens_the_form() {
        assert_eq!(
            resolve_start_page(Some(PageArg::Register), None),
            StartPage::Register
        );
    }

    #[test]
    fn form_is_complete_only_when_all_fields_filled() {
        let mut form = FormState::default();
        assert!(!form.is_complete());

        for value in form.values.iter_mut() {
            *value = "x".to_string();
        }
        assert!(form.is_complete());

        form.values[2] = "   ".to_string();
        assert!(!form.is_complete());
    }

    #[test]
    fn form_reset_clears_values_and_focus() {
        let mut form = FormState::default();
        form.values[0] = "Trilha".to_string();
        form.focused = 3;

        form.reset();
        assert!(form.values.iter().all(String::is_empty));
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn form_record_uses_card_image_as_main_image() {
        let mut form = FormState::default();
        form.values = [
            "Trilha do Ouro".to_string(),
            "Serra da Bocaina".to_string(),
            "Moderada".to_string(),
            "Travessia histórica".to_string(),
            "https://img/card.jpg".to_string(),
        ];

        let record = form.to_record();
        assert_eq!(record.main_image, "https://img/card.jpg");
        assert!(!record.featured);
        assert!(record.attractions.is_empty());
    }

    fn filled_form() -> FormState {
        let mut form = FormState::default();
        form.values = [
            "Trilha do Ouro".to_string(),
            "Serra da Bocaina".to_string(),
            "Moderada".to_string(),
            "Travessia histórica".to_string(),
            "https://img/card.jpg".to_string(),
        ];
        form
    }

    /// A failed submission keeps the field values for retry; the retry,
    /// once the server accepts, clears them.
    #[tokio::test]
    async fn form_fields_survive_failure_and_clear_on_success() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;

        // First attempt is rejected, the retry is accepted
        Mock::given(method("POST"))
            .and(path("/aventuras"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/aventuras"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"id": "f3a9"})),
            )
            .mount(&server)
            .await;

        let client = CatalogClient::new(&format!("{}/aventuras", server.uri()))
            .expect("client should build");
        let mut app = App::new(client, Config::default(), false);
        app.form = filled_form();

        app.submit_form().await;
        assert_eq!(app.mode, Mode::Notice);
        assert!(
            app.form.values.iter().all(|value| !value.is_empty()),
            "failed submission must keep the field values"
        );

        app.exit_mode();
        app.submit_form().await;
        assert_eq!(app.mode, Mode::Notice);
        assert!(
            app.form.values.iter().all(String::is_empty),
            "accepted submission must clear the form"
        );
    }

    #[test]
    fn field_focus_wraps_in_both_directions() {
        let mut form = FormState::default();
        form.prev_field();
        assert_eq!(form.focused, FORM_FIELDS.len() - 1);
        assert!(form.is_last_field());
        form.next_field();
        assert_eq!(form.focused, 0);
    }
}
