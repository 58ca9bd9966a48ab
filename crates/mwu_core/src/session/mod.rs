//! Session state for one window.
//!
//! The state machine is split the same way as a window component:
//! - `model`: the `UiState` value
//! - `messages`: events in (`SessionMsg`) and side effects out (`Effect`)
//! - `logic`: the reducer, `UiState::update`
//! - `view`: the pure projection the UI renders
//!
//! Nothing here touches the network, the clipboard or the file system. The
//! UI executes each `Effect` and feeds the result back as a `SessionMsg`.

mod logic;
mod messages;
mod model;
mod view;

pub use logic::PREFIX_REQUIRED;
pub use messages::{Effect, GenerateRequest, SessionMsg, UploadRequest};
pub use model::{BatchId, EntryStatus, GenerationDisplay, UiState, UploadEntry};
pub use view::{
    ArtifactView, ButtonView, EntryView, ErrorBlock, PrefixView, ResultLine, ResultsPanel,
    SessionView, COPIED_LABEL, COPY_LABEL, GENERATE_LABEL, GENERATING_LABEL, PREFIX_ERROR_TEXT,
};
