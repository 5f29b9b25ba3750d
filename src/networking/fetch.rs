//! Request task bridge
//!
//! Connects Bevy's schedule to the blocking HTTP client. One request at a
//! time is carried by a [`FetchTask`] resource holding a task from the
//! `AsyncComputeTaskPool`; a poll system drains it once the round trip
//! resolves and reconciles the response into the view-state resources.
//!
//! Dispatching a new request while one is outstanding replaces the
//! [`FetchTask`] resource, which drops (and thereby cancels) the previous
//! task, so the response that gets applied always belongs to the most
//! recent interaction. The UI is never locked while a request is in flight.

use crate::core::GameState;
use crate::game::events::{ActionPressed, SquareClicked};
use crate::game::resources::{ActionButtons, BoardView, GameSession, StatusMessages};
use crate::networking::client::{ApiClient, ApiRequest, BoardResponse};
use crate::networking::error::{ClientError, ClientResult};
use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task};
use futures_lite::future;

/// Resource wrapping the single in-flight request task
#[derive(Resource)]
pub struct FetchTask(Task<ClientResult<BoardResponse>>);

/// Spawn the blocking fetch on the compute pool
///
/// `reqwest::blocking` must not run on an async executor thread, so the
/// task delegates to a joined OS thread. No Tokio runtime is required.
fn spawn_fetch(commands: &mut Commands, client: &ApiClient, url: String) {
    let client = client.clone();
    let thread_pool = AsyncComputeTaskPool::get();

    let task = thread_pool.spawn(async move {
        std::thread::spawn(move || client.fetch(&url))
            .join()
            .unwrap_or_else(|_| Err(ClientError::WorkerPanicked))
    });

    commands.insert_resource(FetchTask(task));
}

/// Issue the initial board request on entering the Connecting state
pub fn request_initial_board(mut commands: Commands, client: Res<ApiClient>) {
    let url = client.url_for(&ApiRequest::InitialBoard, "");
    info!("[NET] GET {}", url);
    spawn_fetch(&mut commands, &client, url);
}

/// Turn square clicks and button presses into backend requests
///
/// If several interactions land in one frame, only the last one is sent;
/// the backend would discard the intermediate ones anyway since each
/// response supersedes the board they were aimed at.
pub fn dispatch_interaction_requests(
    mut commands: Commands,
    client: Res<ApiClient>,
    session: Res<GameSession>,
    mut clicks: MessageReader<SquareClicked>,
    mut actions: MessageReader<ActionPressed>,
    in_flight: Option<Res<FetchTask>>,
) {
    let mut request = None;
    for click in clicks.read() {
        request = Some(ApiRequest::SelectSquare {
            row: click.row,
            col: click.col,
        });
    }
    for action in actions.read() {
        request = Some(ApiRequest::ActionButton {
            label: action.label.clone(),
        });
    }

    let Some(request) = request else {
        return;
    };

    let Some(session_id) = session.id() else {
        warn!("[NET] Dropping {:?}: no session established", request);
        return;
    };

    if in_flight.is_some() {
        debug!("[NET] Replacing in-flight request with {:?}", request);
    }

    let url = client.url_for(&request, session_id);
    info!("[NET] GET {}", url);
    spawn_fetch(&mut commands, &client, url);
}

/// Reconcile a successful response into the view-state resources
///
/// Validation happens before any resource is touched: a response missing a
/// field or carrying a wrong-length string is rejected whole and the prior
/// view state survives. `session` is only honored when present, which in
/// practice means only the initial load sets it.
pub fn apply_response(
    response: BoardResponse,
    board: &mut BoardView,
    messages: &mut StatusMessages,
    buttons: &mut ActionButtons,
    session: &mut GameSession,
) -> ClientResult<()> {
    let board_str = response
        .board
        .ok_or(ClientError::MissingField { field: "board" })?;
    let moves_str = response
        .moves
        .ok_or(ClientError::MissingField { field: "moves" })?;
    let view = BoardView::from_strings(&board_str, &moves_str)?;

    *board = view;
    messages.message1 = response.message1.unwrap_or_default();
    messages.message2 = response.message2.unwrap_or_default();
    buttons.labels = response.buttons.unwrap_or_default();
    if let Some(id) = response.session {
        session.set(id);
    }
    Ok(())
}

/// Poll the in-flight task and apply its result
///
/// Failures of any kind - transport, decode, non-200 application status,
/// malformed payload - are logged and discarded; the board keeps showing
/// the last applied response. The first successfully applied response moves
/// the client from Connecting into InGame.
pub fn poll_fetch_task(
    mut commands: Commands,
    task: Option<ResMut<FetchTask>>,
    mut board: ResMut<BoardView>,
    mut messages: ResMut<StatusMessages>,
    mut buttons: ResMut<ActionButtons>,
    mut session: ResMut<GameSession>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(mut task) = task else {
        return;
    };
    let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
        return;
    };
    commands.remove_resource::<FetchTask>();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            warn!("[NET] Request failed: {}", e);
            return;
        }
    };

    match apply_response(
        response,
        &mut board,
        &mut messages,
        &mut buttons,
        &mut session,
    ) {
        Ok(()) => {
            debug!("[NET] Applied board response");
            if *state.get() == GameState::Connecting {
                next_state.set(GameState::InGame);
            }
        }
        Err(e) => warn!("[NET] Discarding malformed response: {}", e),
    }
}

/// Plugin wiring the request/response cycle into the schedule
pub struct NetworkingPlugin;

impl Plugin for NetworkingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Connecting), request_initial_board)
            .add_systems(
                Update,
                (
                    dispatch_interaction_requests.run_if(in_state(GameState::InGame)),
                    poll_fetch_task,
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success_response(board: String, moves: String) -> BoardResponse {
        serde_json::from_str(&format!(
            r#"{{
                "status": 200,
                "board": "{board}",
                "moves": "{moves}",
                "message1": "White to move",
                "message2": "Select a piece",
                "buttons": ["New Game", "Resign"],
                "session": "abc"
            }}"#
        ))
        .expect("Should deserialize")
    }

    fn fresh_state() -> (BoardView, StatusMessages, ActionButtons, GameSession) {
        (
            BoardView::default(),
            StatusMessages::default(),
            ActionButtons::default(),
            GameSession::default(),
        )
    }

    #[test]
    fn test_apply_full_response() {
        let mut board_str = vec!['0'; 64];
        board_str[0] = 'R';
        let board_str: String = board_str.into_iter().collect();
        let mut moves_str = vec!['-'; 64];
        moves_str[12] = 'X';
        let moves_str: String = moves_str.into_iter().collect();

        let (mut board, mut messages, mut buttons, mut session) = fresh_state();
        apply_response(
            success_response(board_str, moves_str),
            &mut board,
            &mut messages,
            &mut buttons,
            &mut session,
        )
        .expect("Should apply");

        assert_eq!(board.occupant(0), 'R');
        assert!(board.is_highlighted(12));
        assert_eq!(messages.message1, "White to move");
        assert_eq!(messages.message2, "Select a piece");
        assert_eq!(buttons.labels, vec!["New Game", "Resign"]);
        assert_eq!(session.id(), Some("abc"));
    }

    #[test]
    fn test_apply_without_session_keeps_existing_token() {
        let board_str: String = "0".repeat(64);
        let moves_str: String = "-".repeat(64);
        let mut response = success_response(board_str, moves_str);
        response.session = None;

        let (mut board, mut messages, mut buttons, mut session) = fresh_state();
        session.set("existing".to_string());

        apply_response(response, &mut board, &mut messages, &mut buttons, &mut session)
            .expect("Should apply");
        assert_eq!(session.id(), Some("existing"));
    }

    #[test]
    fn test_missing_board_leaves_state_untouched() {
        let mut response = success_response("0".repeat(64), "-".repeat(64));
        response.board = None;

        let (mut board, mut messages, mut buttons, mut session) = fresh_state();
        let before = (
            board.clone(),
            messages.clone(),
            buttons.clone(),
            session.clone(),
        );

        let err = apply_response(response, &mut board, &mut messages, &mut buttons, &mut session)
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingField { field: "board" }));
        assert_eq!((board, messages, buttons, session), before);
    }

    #[test]
    fn test_wrong_length_board_leaves_state_untouched() {
        let response = success_response("0".repeat(63), "-".repeat(64));

        let (mut board, mut messages, mut buttons, mut session) = fresh_state();
        let before = (
            board.clone(),
            messages.clone(),
            buttons.clone(),
            session.clone(),
        );

        let err = apply_response(response, &mut board, &mut messages, &mut buttons, &mut session)
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::MalformedField { field: "board", len: 63 }
        ));
        assert_eq!((board, messages, buttons, session), before);
    }

    #[test]
    fn test_absent_optional_fields_clear_previous_values() {
        let mut response = success_response("0".repeat(64), "-".repeat(64));
        response.message1 = None;
        response.message2 = None;
        response.buttons = None;

        let (mut board, mut messages, mut buttons, mut session) = fresh_state();
        messages.message1 = "old".to_string();
        buttons.labels = vec!["Resign".to_string()];

        apply_response(response, &mut board, &mut messages, &mut buttons, &mut session)
            .expect("Should apply");
        assert!(messages.message1.is_empty());
        assert!(messages.message2.is_empty());
        assert!(buttons.labels.is_empty());
    }
}
