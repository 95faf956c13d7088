//! Status color and icon tables shared by status badges.

#[cfg(test)]
#[path = "globals_test.rs"]
mod globals_test;

use crate::util::map_loader::LoadPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Valid,
    Idle,
    Running,
    Done,
    Error,
}

impl Status {
    pub const ALL: [Status; 5] = [Status::Valid, Status::Idle, Status::Running, Status::Done, Status::Error];

    /// Theme color name.
    pub fn color(self) -> &'static str {
        match self {
            Status::Valid | Status::Done => "success",
            Status::Idle => "warning",
            Status::Running => "primary",
            Status::Error => "error",
        }
    }

    /// Material Design Icons class name.
    pub fn icon(self) -> &'static str {
        match self {
            Status::Valid => "mdi-check",
            Status::Idle => "mdi-clock-outline",
            Status::Running => "mdi-loading",
            Status::Done => "mdi-marker-check",
            Status::Error => "mdi-alert-circle-outline",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Valid => "valid",
            Status::Idle => "idle",
            Status::Running => "running",
            Status::Done => "done",
            Status::Error => "error",
        }
    }
}

impl From<LoadPhase> for Status {
    fn from(phase: LoadPhase) -> Self {
        match phase {
            LoadPhase::Unstarted => Status::Idle,
            LoadPhase::Pending => Status::Running,
            LoadPhase::Ready => Status::Done,
            LoadPhase::Failed => Status::Error,
        }
    }
}
