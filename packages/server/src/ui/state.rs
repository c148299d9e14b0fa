//! Shared application state.

use std::{path::PathBuf, sync::Arc};

use crate::usecase::{
    ConnectParticipantUseCase, DisconnectParticipantUseCase, GetRoomStateUseCase,
    JoinGameUseCase, PassPotatoUseCase,
};

pub struct AppState {
    /// ConnectParticipantUseCase（接続登録のユースケース）
    pub connect_participant_usecase: Arc<ConnectParticipantUseCase>,
    /// DisconnectParticipantUseCase（接続解除のユースケース）
    pub disconnect_participant_usecase: Arc<DisconnectParticipantUseCase>,
    /// JoinGameUseCase（NEW_USER のユースケース）
    pub join_game_usecase: Arc<JoinGameUseCase>,
    /// PassPotatoUseCase（PASS_POTATO のユースケース）
    pub pass_potato_usecase: Arc<PassPotatoUseCase>,
    /// GetRoomStateUseCase（ルーム状態取得のユースケース）
    pub get_room_state_usecase: Arc<GetRoomStateUseCase>,
    /// Root directory for static assets
    pub public_dir: PathBuf,
}
