//! The client-side session: one explicit struct owning screen flow, auth
//! state, and the transcript, mutated only through the intent and event
//! methods below.
//!
//! Keeping this free of UI types makes every screen transition testable
//! without a running Dioxus runtime; the UI layer wraps a `Session` in a
//! signal and forwards intents.

use detetive_protocol::{ClientMessage, ComposeMode, Duracao, Historia, User};

use crate::application::transcript::{self, ChatMessage, MessageKind};
use crate::ports::outbound::{ConnectionStatus, PlayerEvent, SessionEvent};

/// Message shown when the channel drops mid-game.
const DISCONNECT_NOTICE: &str = "Conexão perdida com o servidor. Reinicie o aplicativo.";

/// Message shown when a start intent finds no usable connection.
const NOT_CONNECTED_NOTICE: &str = "Não foi possível conectar ao servidor. Tente novamente.";

/// Coarse screen flow. Selection doubles as the "menu" the server-signaled
/// game over returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Intro,
    Selection,
    Playing,
}

/// Outcome of a start-game intent.
#[derive(Debug, Clone, PartialEq)]
pub enum StartGame {
    /// Session entered Playing; emit this message.
    Started(ClientMessage),
    /// User must authenticate first; the intent is not queued for resume.
    AuthRequired,
    /// No usable connection; an error entry was appended to the transcript.
    NotConnected,
}

/// Deferred work an event application asks the caller to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Display the terminal message, then call `finish_game_over` with this
    /// epoch after the fixed delay. A stale epoch makes the call a no-op,
    /// so a timer from a finished game cannot reset a newer one.
    GameOverReset { epoch: u64 },
}

/// Seconds the terminal game-over message stays visible before the session
/// returns to story selection.
pub const GAME_OVER_DISPLAY_SECS: u64 = 3;

/// All client-side session state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<User>,
    pub connection: Option<ConnectionStatus>,
    pub screen: Screen,
    pub historias: Vec<Historia>,
    pub selected_historia: Option<String>,
    pub transcript: Vec<ChatMessage>,
    pub narrator_typing: bool,
    /// Bumped whenever a game starts or ends; pending game-over timers
    /// carry the epoch they were scheduled under.
    epoch: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_connected(&self) -> bool {
        self.connection == Some(ConnectionStatus::Connected)
    }

    /// Record a successful login or server-side authentication.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Apply the outcome of a login or register-then-login attempt.
    ///
    /// A failure never touches the current user; the returned message is
    /// shown in the auth form.
    pub fn apply_login(&mut self, result: Result<User, String>) -> Option<String> {
        match result {
            Ok(user) => {
                self.set_user(user);
                None
            }
            Err(message) => Some(message),
        }
    }

    /// Logout: clear identity and any in-progress game.
    pub fn clear_user(&mut self) {
        self.user = None;
        if self.screen == Screen::Playing {
            self.screen = Screen::Selection;
        }
        self.transcript.clear();
        self.narrator_typing = false;
        self.selected_historia = None;
        self.epoch += 1;
    }

    pub fn set_catalog(&mut self, historias: Vec<Historia>) {
        self.historias = historias;
    }

    /// Leave the intro screen for the story list.
    pub fn show_selection(&mut self) {
        if self.screen == Screen::Intro {
            self.screen = Screen::Selection;
        }
    }

    pub fn show_intro(&mut self) {
        if self.screen == Screen::Selection {
            self.screen = Screen::Intro;
        }
    }

    /// Start-game intent.
    ///
    /// Requires an authenticated user and a live connection; on success the
    /// transcript is cleared and the session enters Playing with the
    /// narrator marked as composing the opening scene.
    pub fn start_game(&mut self, historia_id: &str, duracao: Duracao) -> StartGame {
        if !self.is_authenticated() {
            return StartGame::AuthRequired;
        }

        if !self.is_connected() {
            self.transcript
                .push(transcript::single(MessageKind::Error, NOT_CONNECTED_NOTICE));
            return StartGame::NotConnected;
        }

        self.selected_historia = Some(historia_id.to_string());
        self.screen = Screen::Playing;
        self.transcript.clear();
        self.narrator_typing = true;
        self.epoch += 1;

        StartGame::Started(ClientMessage::StartGame {
            historia_id: historia_id.to_string(),
            duracao,
        })
    }

    /// Compose one player turn.
    ///
    /// Trims the input; empty trimmed text produces no transcript entry and
    /// no wire message. Otherwise the turn is appended as a user entry and
    /// the wire message to emit is returned.
    pub fn compose_turn(&mut self, text: &str, mode: ComposeMode) -> Option<ClientMessage> {
        let content = text.trim();
        if content.is_empty() {
            return None;
        }

        self.transcript
            .push(transcript::single(MessageKind::User, content));
        self.narrator_typing = true;

        Some(ClientMessage::UserMessage {
            content: content.to_string(),
            type_original: mode,
        })
    }

    /// User-initiated end: clear the session immediately and return the
    /// message to emit.
    pub fn end_game(&mut self) -> ClientMessage {
        self.screen = Screen::Selection;
        self.transcript.clear();
        self.narrator_typing = false;
        self.selected_historia = None;
        self.epoch += 1;

        ClientMessage::EndGame
    }

    /// Apply one inbound session event. Events arrive and are applied in
    /// order; the transcript preserves that order.
    pub fn apply_event(&mut self, event: SessionEvent) -> Option<FollowUp> {
        match event {
            SessionEvent::StateChanged(status) => {
                let was_connected = self.is_connected();
                self.connection = Some(status);

                // A drop mid-game is terminal: tell the user, keep the UI
                // interactive. No automatic reconnection.
                if was_connected
                    && status != ConnectionStatus::Connected
                    && self.screen == Screen::Playing
                {
                    self.narrator_typing = false;
                    self.transcript
                        .push(transcript::single(MessageKind::System, DISCONNECT_NOTICE));
                }
                None
            }
            SessionEvent::MessageReceived(event) => self.apply_player_event(event),
        }
    }

    fn apply_player_event(&mut self, event: PlayerEvent) -> Option<FollowUp> {
        match event {
            PlayerEvent::System { message } => {
                self.transcript
                    .push(transcript::single(MessageKind::System, message));
                None
            }
            PlayerEvent::Narrator { message, options } => {
                self.narrator_typing = false;
                self.transcript
                    .extend(transcript::narrator_fragments(&message, options));
                None
            }
            PlayerEvent::Error { message } => {
                self.narrator_typing = false;
                self.transcript
                    .push(transcript::single(MessageKind::Error, message));
                None
            }
            PlayerEvent::GameOver { message } => {
                self.narrator_typing = false;
                self.transcript
                    .push(transcript::single(MessageKind::GameOver, message));

                // Keep the terminal message visible; the caller schedules
                // finish_game_over after the display delay.
                (self.screen == Screen::Playing)
                    .then_some(FollowUp::GameOverReset { epoch: self.epoch })
            }
            PlayerEvent::UserAuthenticated { user } => {
                self.set_user(user);
                None
            }
        }
    }

    /// Complete a server-signaled game over after the display delay.
    ///
    /// Only acts when `epoch` still matches: an intervening end_game or
    /// start_game invalidates the pending timer.
    pub fn finish_game_over(&mut self, epoch: u64) {
        if epoch != self.epoch {
            return;
        }

        if self.screen == Screen::Playing {
            self.screen = Screen::Selection;
        }
        self.transcript.clear();
        self.narrator_typing = false;
        self.selected_historia = None;
        self.epoch += 1;
    }

    /// Latest transcript entry carrying suggested options, if any.
    pub fn latest_options(&self) -> Option<&ChatMessage> {
        self.transcript.iter().rev().find(|m| !m.options.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected_session() -> Session {
        let mut session = Session::new();
        session.apply_event(SessionEvent::StateChanged(ConnectionStatus::Connected));
        session
    }

    fn authenticated_session() -> Session {
        let mut session = connected_session();
        session.set_user(User {
            id: 1,
            username: "holmes".to_string(),
        });
        session
    }

    #[test]
    fn start_game_requires_authentication() {
        let mut session = connected_session();

        let outcome = session.start_game("1", Duracao::Curta);

        assert_eq!(outcome, StartGame::AuthRequired);
        assert_eq!(session.screen, Screen::Intro);
        assert!(session.transcript.is_empty());
    }

    #[test]
    fn start_game_without_connection_surfaces_error() {
        let mut session = Session::new();
        session.set_user(User {
            id: 1,
            username: "holmes".to_string(),
        });

        let outcome = session.start_game("1", Duracao::Curta);

        assert_eq!(outcome, StartGame::NotConnected);
        assert_eq!(session.transcript.len(), 1);
        assert_eq!(session.transcript[0].kind, MessageKind::Error);
        assert_ne!(session.screen, Screen::Playing);
    }

    #[test]
    fn start_game_enters_playing_and_emits_wire_message() {
        let mut session = authenticated_session();

        let outcome = session.start_game("2", Duracao::Media);

        match outcome {
            StartGame::Started(ClientMessage::StartGame {
                historia_id,
                duracao,
            }) => {
                assert_eq!(historia_id, "2");
                assert_eq!(duracao, Duracao::Media);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(session.screen, Screen::Playing);
        assert!(session.narrator_typing);
        assert_eq!(session.selected_historia.as_deref(), Some("2"));
    }

    #[test]
    fn empty_turn_never_sends() {
        let mut session = authenticated_session();
        session.start_game("1", Duracao::Curta);

        assert!(session.compose_turn("", ComposeMode::Talk).is_none());
        assert!(session.compose_turn("   \t  ", ComposeMode::Act).is_none());
        assert!(session.transcript.is_empty());
    }

    #[test]
    fn turn_is_trimmed_and_appended_as_user_entry() {
        let mut session = authenticated_session();
        session.start_game("1", Duracao::Curta);

        let msg = session.compose_turn("  examinar a lareira  ", ComposeMode::Act);

        match msg {
            Some(ClientMessage::UserMessage {
                content,
                type_original,
            }) => {
                assert_eq!(content, "examinar a lareira");
                assert_eq!(type_original, ComposeMode::Act);
            }
            other => panic!("unexpected message: {other:?}"),
        }
        assert_eq!(session.transcript.len(), 1);
        assert_eq!(session.transcript[0].sender, "Você");
    }

    #[test]
    fn narrator_event_clears_typing_and_appends_fragments() {
        let mut session = authenticated_session();
        session.start_game("1", Duracao::Curta);

        let follow_up = session.apply_event(SessionEvent::MessageReceived(PlayerEvent::Narrator {
            message: r#"Ela olhou ao redor. **Maria:** "Onde você estava?""#.to_string(),
            options: Vec::new(),
        }));

        assert!(follow_up.is_none());
        assert!(!session.narrator_typing);
        assert_eq!(session.transcript.len(), 2);
    }

    #[test]
    fn game_over_keeps_terminal_message_until_finish() {
        let mut session = authenticated_session();
        session.start_game("1", Duracao::Curta);

        let follow_up = session.apply_event(SessionEvent::MessageReceived(PlayerEvent::GameOver {
            message: "Caso encerrado.".to_string(),
        }));

        let Some(FollowUp::GameOverReset { epoch }) = follow_up else {
            panic!("expected a game-over reset, got {follow_up:?}");
        };
        assert_eq!(session.screen, Screen::Playing);
        assert_eq!(session.transcript.last().map(|m| m.kind), Some(MessageKind::GameOver));

        session.finish_game_over(epoch);

        assert_eq!(session.screen, Screen::Selection);
        assert!(session.transcript.is_empty());
        assert!(session.selected_historia.is_none());
    }

    #[test]
    fn stale_game_over_timer_cannot_reset_a_new_game() {
        let mut session = authenticated_session();
        session.start_game("1", Duracao::Curta);

        let follow_up = session.apply_event(SessionEvent::MessageReceived(PlayerEvent::GameOver {
            message: "Caso encerrado.".to_string(),
        }));
        let Some(FollowUp::GameOverReset { epoch: stale }) = follow_up else {
            panic!("expected a game-over reset, got {follow_up:?}");
        };

        // The user moves on before the display delay elapses.
        session.end_game();
        session.start_game("2", Duracao::Media);
        session.compose_turn("examinar o vagão", ComposeMode::Act);

        session.finish_game_over(stale);

        assert_eq!(session.screen, Screen::Playing);
        assert_eq!(session.selected_historia.as_deref(), Some("2"));
        assert_eq!(session.transcript.len(), 1);
    }

    #[test]
    fn game_over_outside_playing_schedules_nothing() {
        let mut session = authenticated_session();

        let follow_up = session.apply_event(SessionEvent::MessageReceived(PlayerEvent::GameOver {
            message: "Fim.".to_string(),
        }));

        assert!(follow_up.is_none());
    }

    #[test]
    fn user_end_game_clears_immediately() {
        let mut session = authenticated_session();
        session.start_game("1", Duracao::Longa);
        session.compose_turn("olá", ComposeMode::Talk);

        let msg = session.end_game();

        assert!(matches!(msg, ClientMessage::EndGame));
        assert_eq!(session.screen, Screen::Selection);
        assert!(session.transcript.is_empty());
        assert!(!session.narrator_typing);
    }

    #[test]
    fn mid_game_disconnect_appends_terminal_notice() {
        let mut session = authenticated_session();
        session.start_game("1", Duracao::Curta);

        session.apply_event(SessionEvent::StateChanged(ConnectionStatus::Disconnected));

        let last = session.transcript.last().unwrap();
        assert_eq!(last.kind, MessageKind::System);
        assert!(last.content.contains("Conexão perdida"));
        assert!(!session.narrator_typing);
    }

    #[test]
    fn disconnect_outside_game_is_silent() {
        let mut session = connected_session();

        session.apply_event(SessionEvent::StateChanged(ConnectionStatus::Disconnected));

        assert!(session.transcript.is_empty());
    }

    #[test]
    fn server_authentication_sets_user() {
        let mut session = connected_session();

        session.apply_event(SessionEvent::MessageReceived(PlayerEvent::UserAuthenticated {
            user: User {
                id: 9,
                username: "poirot".to_string(),
            },
        }));

        assert!(session.is_authenticated());
    }

    #[test]
    fn failed_login_never_sets_user() {
        let mut session = connected_session();

        let error = session.apply_login(Err("Credenciais inválidas".to_string()));

        assert_eq!(error.as_deref(), Some("Credenciais inválidas"));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn failed_login_leaves_existing_user_untouched() {
        let mut session = authenticated_session();

        let error = session.apply_login(Err("Senha incorreta".to_string()));

        assert!(error.is_some());
        assert_eq!(session.user.as_ref().map(|u| u.username.as_str()), Some("holmes"));
    }

    #[test]
    fn successful_login_sets_user() {
        let mut session = connected_session();

        let error = session.apply_login(Ok(User {
            id: 5,
            username: "watson".to_string(),
        }));

        assert!(error.is_none());
        assert_eq!(session.user.as_ref().map(|u| u.username.as_str()), Some("watson"));
    }

    #[test]
    fn server_error_leaves_authenticated_user_untouched() {
        let mut session = authenticated_session();

        session.apply_event(SessionEvent::MessageReceived(PlayerEvent::Error {
            message: "Credenciais inválidas".to_string(),
        }));

        assert!(session.is_authenticated());
        assert_eq!(session.user.as_ref().map(|u| u.username.as_str()), Some("holmes"));
    }

    #[test]
    fn logout_clears_identity_and_game() {
        let mut session = authenticated_session();
        session.start_game("1", Duracao::Curta);
        session.compose_turn("olá", ComposeMode::Talk);

        session.clear_user();

        assert!(!session.is_authenticated());
        assert_eq!(session.screen, Screen::Selection);
        assert!(session.transcript.is_empty());
    }

    #[test]
    fn latest_options_finds_most_recent_carrier() {
        let mut session = authenticated_session();
        session.start_game("1", Duracao::Curta);

        session.apply_event(SessionEvent::MessageReceived(PlayerEvent::Narrator {
            message: "Primeira cena.".to_string(),
            options: vec![detetive_protocol::SuggestedOption {
                texto: "Antiga".to_string(),
                comando: "antiga".to_string(),
            }],
        }));
        session.apply_event(SessionEvent::MessageReceived(PlayerEvent::Narrator {
            message: "Segunda cena.".to_string(),
            options: vec![detetive_protocol::SuggestedOption {
                texto: "Nova".to_string(),
                comando: "nova".to_string(),
            }],
        }));

        let carrier = session.latest_options().unwrap();
        assert_eq!(carrier.options[0].texto, "Nova");
    }
}
