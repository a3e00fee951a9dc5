pub mod drag;
pub mod layout;
pub mod login;
pub mod notice;
pub mod task;
pub mod tx;

pub use drag::{
    AnimalDragItem, ContainerSize, DragKind, DragSession, DropOutcome, SurfaceRect, ghost_position,
    resolve_drop,
};
pub use layout::{
    BUBBLE_COUNT, LevelPreview, PreviewVisibility, SpriteMetrics, generate_bubbles,
    level_preview,
};
pub use login::{LoginAction, LoginState};
pub use notice::NoticeState;
pub use task::TaskScope;
pub use tx::{TxAction, TxState, TxStatus};
